//! Bounds-checked primitive reads over a packet buffer
//!
//! Every read takes an absolute offset into `data` and fails with
//! `Error::UnexpectedEOF` instead of reading past the end.

use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder};

use super::Error;

pub fn read_bytes(data: &[u8], pos: usize, len: usize) -> Result<&[u8], Error> {
    let end = pos.checked_add(len).ok_or(Error::UnexpectedEOF)?;
    data.get(pos..end).ok_or(Error::UnexpectedEOF)
}

pub fn read_u8(data: &[u8], pos: usize) -> Result<u8, Error> {
    data.get(pos).copied().ok_or(Error::UnexpectedEOF)
}

pub fn read_u16(data: &[u8], pos: usize) -> Result<u16, Error> {
    Ok(BigEndian::read_u16(read_bytes(data, pos, 2)?))
}

pub fn read_u32(data: &[u8], pos: usize) -> Result<u32, Error> {
    Ok(BigEndian::read_u32(read_bytes(data, pos, 4)?))
}

pub fn read_i32(data: &[u8], pos: usize) -> Result<i32, Error> {
    Ok(BigEndian::read_i32(read_bytes(data, pos, 4)?))
}

/// Reads a `<character-string>` (RFC 1035 3.3) from the start of `data`
///
/// Returns the text and the bytes following it. Invalid UTF-8 is replaced
/// rather than rejected, TXT payloads are often free-form.
pub fn read_character_string(data: &[u8]) -> Result<(Cow<str>, &[u8]), Error> {
    let len = read_u8(data, 0)? as usize;
    let text = read_bytes(data, 1, len)?;
    Ok((String::from_utf8_lossy(text), &data[len + 1..]))
}
