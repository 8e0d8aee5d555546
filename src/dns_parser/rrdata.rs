use std::borrow::Cow;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ByteOrder};

use super::format::{format_ipv4, format_ipv6};
use super::{reader, Error, Name, Type};

/// The enumeration that represents known types of DNS resource records data
///
/// The raw RDATA is kept on the `ResourceRecord` itself, so `Unknown`
/// needs no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRData<'a> {
    CNAME(Name<'a>),
    NS(Name<'a>),
    PTR(Name<'a>),
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Name<'a>,
    },
    /// Character strings in wire order. A trailing empty string is a
    /// terminator and is dropped; empty strings before it are kept.
    TXT(Vec<Cow<'a, str>>),
    // Anything that isn't interpreted
    Unknown,
}

impl<'a> RRData<'a> {
    /// Interprets `len` bytes of RDATA found at `offset` in `original`
    ///
    /// `original` is the whole packet so that compressed names inside the
    /// RDATA resolve against it. Names must end within the RDATA.
    pub fn parse(
        typ: Type,
        original: &'a [u8],
        offset: usize,
        len: usize,
    ) -> Result<RRData<'a>, Error> {
        let rdata = reader::read_bytes(original, offset, len)?;
        let end = offset + len;
        match typ {
            Type::A => {
                if rdata.len() != 4 {
                    return Err(Error::WrongRdataLength);
                }
                Ok(RRData::A(Ipv4Addr::from(BigEndian::read_u32(rdata))))
            }
            Type::AAAA => {
                if rdata.len() != 16 {
                    return Err(Error::WrongRdataLength);
                }
                let mut octets = [0u8; 16];
                octets.copy_from_slice(rdata);
                Ok(RRData::AAAA(Ipv6Addr::from(octets)))
            }
            Type::CNAME => Ok(RRData::CNAME(scan_name(original, offset, end)?)),
            Type::NS => Ok(RRData::NS(scan_name(original, offset, end)?)),
            Type::PTR => Ok(RRData::PTR(scan_name(original, offset, end)?)),
            Type::SRV => {
                if rdata.len() < 7 {
                    return Err(Error::WrongRdataLength);
                }
                Ok(RRData::SRV {
                    priority: BigEndian::read_u16(&rdata[..2]),
                    weight: BigEndian::read_u16(&rdata[2..4]),
                    port: BigEndian::read_u16(&rdata[4..6]),
                    target: scan_name(original, offset + 6, end)?,
                })
            }
            Type::TXT => {
                let mut texts = Vec::new();
                let mut rest = rdata;
                while !rest.is_empty() {
                    let (text, tail) = reader::read_character_string(rest)?;
                    texts.push(text);
                    rest = tail;
                }
                if texts.last().map_or(false, |text| text.is_empty()) {
                    texts.pop();
                }
                Ok(RRData::TXT(texts))
            }
            _ => Ok(RRData::Unknown),
        }
    }

    /// Text form of the address of an A or AAAA record
    pub fn address(&self) -> Option<String> {
        match *self {
            RRData::A(ip) => Some(format_ipv4(&ip.octets())),
            RRData::AAAA(ip) => Some(format_ipv6(&ip.octets())),
            _ => None,
        }
    }
}

fn scan_name<'a>(original: &'a [u8], offset: usize, end: usize) -> Result<Name<'a>, Error> {
    let (name, next) = Name::scan(original, offset)?;
    if next > end {
        return Err(Error::WrongRdataLength);
    }
    Ok(name)
}

impl<'a> fmt::Display for RRData<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RRData::A(ip) => f.write_str(&format_ipv4(&ip.octets())),
            RRData::AAAA(ip) => f.write_str(&format_ipv6(&ip.octets())),
            RRData::CNAME(ref name) | RRData::NS(ref name) | RRData::PTR(ref name) => {
                fmt::Display::fmt(name, f)
            }
            RRData::SRV {
                priority,
                weight,
                port,
                ref target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
            RRData::TXT(ref texts) => {
                for (i, text) in texts.iter().enumerate() {
                    if i != 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:?}", text)?;
                }
                Ok(())
            }
            RRData::Unknown => f.write_str("<unknown>"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_alone(typ: Type, rdata: &[u8]) -> Result<RRData, Error> {
        RRData::parse(typ, rdata, 0, rdata.len())
    }

    #[test]
    fn a_record() {
        let data = parse_alone(Type::A, b"\xc0\xa8\xc8\x49").unwrap();
        assert_eq!(data, RRData::A(Ipv4Addr::new(192, 168, 200, 73)));
        assert_eq!(data.address().unwrap(), "192.168.200.73");
        assert_eq!(
            parse_alone(Type::A, b"\xc0\xa8\xc8").unwrap_err(),
            Error::WrongRdataLength
        );
    }

    #[test]
    fn aaaa_record() {
        let data = parse_alone(
            Type::AAAA,
            b"\xfe\x80\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x01",
        )
        .unwrap();
        assert_eq!(data.address().unwrap(), "fe80::1");
        assert_eq!(data.to_string(), "fe80::1");
        assert_eq!(
            parse_alone(Type::AAAA, &[0; 15]).unwrap_err(),
            Error::WrongRdataLength
        );
    }

    #[test]
    fn txt_record() {
        let data = parse_alone(Type::TXT, b"\x05hello\x00").unwrap();
        assert_eq!(data, RRData::TXT(vec!["hello".into()]));

        let data = parse_alone(Type::TXT, b"\x00").unwrap();
        assert_eq!(data, RRData::TXT(vec![]));

        let data = parse_alone(Type::TXT, b"\x06path=/\x05a=b c").unwrap();
        assert_eq!(data, RRData::TXT(vec!["path=/".into(), "a=b c".into()]));
        assert_eq!(data.to_string(), "\"path=/\" \"a=b c\"");
    }

    #[test]
    fn txt_record_keeps_inner_empty_strings() {
        let data = parse_alone(Type::TXT, b"\x01a\x00\x01b").unwrap();
        assert_eq!(data, RRData::TXT(vec!["a".into(), "".into(), "b".into()]));

        let data = parse_alone(Type::TXT, b"\x01a\x00\x00").unwrap();
        assert_eq!(data, RRData::TXT(vec!["a".into(), "".into()]));
    }

    #[test]
    fn txt_record_truncated_string() {
        assert_eq!(
            parse_alone(Type::TXT, b"\x09hello").unwrap_err(),
            Error::UnexpectedEOF
        );
    }

    #[test]
    fn srv_record_with_pointer() {
        // "web.local" at offset 0, SRV RDATA at offset 11
        let packet = b"\x03web\x05local\x00\x00\x0a\x00\x14\x00\x50\xc0\x00";
        let data = RRData::parse(Type::SRV, packet, 11, 8).unwrap();
        assert_eq!(
            data,
            RRData::SRV {
                priority: 10,
                weight: 20,
                port: 80,
                target: Name::from_str("web.local").unwrap(),
            }
        );
        assert_eq!(data.to_string(), "10 20 80 web.local");
    }

    #[test]
    fn srv_record_too_short() {
        assert_eq!(
            parse_alone(Type::SRV, b"\x00\x0a\x00\x14\x00\x50").unwrap_err(),
            Error::WrongRdataLength
        );
    }

    #[test]
    fn name_records() {
        let data = parse_alone(Type::PTR, b"\x05_http\x04_tcp\x05local\x00").unwrap();
        assert_eq!(data, RRData::PTR(Name::from_str("_http._tcp.local").unwrap()));
        let data = parse_alone(Type::CNAME, b"\x01a\x00").unwrap();
        assert_eq!(data, RRData::CNAME(Name::from_str("a").unwrap()));
        let data = parse_alone(Type::NS, b"\x00").unwrap();
        assert_eq!(data, RRData::NS(Name::default()));
    }

    #[test]
    fn name_running_past_rdata() {
        let packet = b"\x03web\x05local\x00";
        assert_eq!(
            RRData::parse(Type::PTR, packet, 0, 4).unwrap_err(),
            Error::WrongRdataLength
        );
    }

    #[test]
    fn unknown_type() {
        let data = parse_alone(Type::MX, b"\x00\x0a\x00").unwrap();
        assert_eq!(data, RRData::Unknown);
        assert_eq!(data.address(), None);
        assert_eq!(parse_alone(Type::Unknown(47), b"").unwrap(), RRData::Unknown);
    }
}
