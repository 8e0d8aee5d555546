use std::borrow::Cow;
use std::fmt;
use std::str::from_utf8;

use super::{reader, Error};

/// Longest label allowed on the wire
pub const MAX_LABEL_LEN: usize = 63;

/// Longest name allowed on the wire, length octets and terminator included
pub const MAX_NAME_LEN: usize = 255;

/// Upper bound on compression pointers followed while reading one name.
/// A well-formed name of at most `MAX_NAME_LEN` bytes can't need more.
const MAX_POINTER_HOPS: usize = 128;

/// A domain name as an ordered list of labels
///
/// The terminating empty label is implicit, so the root name has no labels.
/// Labels read from a packet borrow from the packet buffer; labels built
/// from a string borrow from that string. You may turn this into a dotted
/// string using `.to_string()`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name<'a> {
    labels: Vec<Cow<'a, str>>,
}

impl<'a> Name<'a> {
    /// Reads a possibly compressed name starting at `pos`
    ///
    /// `original` must be the whole packet: compression pointers are
    /// offsets from its start. Returns the name and the position right after
    /// its own encoding, which for a compressed name is just past the first
    /// pointer, no matter where that pointer leads.
    ///
    /// The expanded name may not exceed `MAX_NAME_LEN` bytes.
    pub fn scan(original: &'a [u8], pos: usize) -> Result<(Name<'a>, usize), Error> {
        let mut labels = Vec::new();
        let mut pos = pos;
        let mut end = None;
        let mut hops = 0;
        // the terminating zero byte
        let mut wire_len = 1;
        loop {
            let byte = reader::read_u8(original, pos)?;
            match byte & 0b1100_0000 {
                0b1100_0000 => {
                    let off = (reader::read_u16(original, pos)? & !0b1100_0000_0000_0000) as usize;
                    if off >= original.len() {
                        return Err(Error::PointerOutOfBounds(off));
                    }
                    hops += 1;
                    if hops > MAX_POINTER_HOPS {
                        return Err(Error::PointerLoop);
                    }
                    end.get_or_insert(pos + 2);
                    pos = off;
                }
                0 if byte == 0 => {
                    let name = Name { labels: labels };
                    return Ok((name, end.unwrap_or(pos + 1)));
                }
                0 => {
                    let len = byte as usize;
                    wire_len += len + 1;
                    if wire_len > MAX_NAME_LEN {
                        return Err(Error::NameTooLong(wire_len));
                    }
                    let label = reader::read_bytes(original, pos + 1, len)?;
                    let label = from_utf8(label).map_err(|_| Error::LabelIsNotUtf8)?;
                    labels.push(Cow::Borrowed(label));
                    pos += len + 1;
                }
                _ => return Err(Error::UnknownLabelFormat(byte)),
            }
        }
    }

    /// Splits a dotted name into labels
    ///
    /// A single trailing dot is accepted, and both `""` and `"."` give the
    /// root name. Label lengths are checked here as well as when writing.
    pub fn from_str(name: &'a str) -> Result<Name<'a>, Error> {
        let name = name.strip_suffix('.').unwrap_or(name);
        if name.is_empty() {
            return Ok(Name::default());
        }
        let mut labels = Vec::new();
        for label in name.split('.') {
            check_label(label)?;
            labels.push(Cow::Borrowed(label));
        }
        Ok(Name { labels: labels })
    }

    /// Builds a name from already split labels without validating them
    pub fn from_labels<I, L>(labels: I) -> Name<'a>
    where
        I: IntoIterator<Item = L>,
        L: Into<Cow<'a, str>>,
    {
        Name {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[Cow<'a, str>] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Appends the uncompressed wire form, terminator included
    ///
    /// Nothing is written when a label or the whole name is too long.
    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        let mut wire_len = 1;
        for label in &self.labels {
            check_label(label)?;
            wire_len += label.len() + 1;
        }
        if wire_len > MAX_NAME_LEN {
            return Err(Error::NameTooLong(wire_len));
        }
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        Ok(())
    }
}

fn check_label(label: &str) -> Result<(), Error> {
    match label.len() {
        0 => Err(Error::EmptyLabel),
        len if len > MAX_LABEL_LEN => Err(Error::LabelTooLong(len)),
        _ => Ok(()),
    }
}

impl<'a> fmt::Display for Name<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.labels.is_empty() {
            return fmt.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i != 0 {
                fmt.write_str(".")?;
            }
            fmt.write_str(label)?;
        }
        Ok(())
    }
}
