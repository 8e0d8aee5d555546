use byteorder::{BigEndian, ByteOrder};

use super::{Error, Opcode, ResponseCode};

mod flag {
    pub const QUERY: u16 = 0b1000_0000_0000_0000;
    pub const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
    pub const AUTHORITATIVE: u16 = 0b0000_0100_0000_0000;
    pub const TRUNCATED: u16 = 0b0000_0010_0000_0000;
    pub const RECURSION_DESIRED: u16 = 0b0000_0001_0000_0000;
    pub const RECURSION_AVAILABLE: u16 = 0b0000_0000_1000_0000;
    pub const RESPONSE_CODE_MASK: u16 = 0b0000_0000_0000_1111;
}

/// Represents parsed header of the packet
///
/// `query` is the inverse of the QR bit: it is `true` for queries and
/// `false` for responses. The reserved Z bits (6-4) are ignored on parse
/// and written as zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Header {
    pub id: u16,
    pub query: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
    pub questions: u16,
    pub answers: u16,
    pub nameservers: u16,
    pub additional: u16,
}

impl Header {
    pub const SIZE: usize = 12;

    /// Header of a standard query with every section empty
    pub fn new_query(id: u16, recursion_desired: bool) -> Header {
        Header {
            id: id,
            query: true,
            opcode: Opcode::StandardQuery,
            authoritative: false,
            truncated: false,
            recursion_desired: recursion_desired,
            recursion_available: false,
            response_code: ResponseCode::NoError,
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
        }
    }

    pub fn parse(data: &[u8]) -> Result<Header, Error> {
        if data.len() < Header::SIZE {
            return Err(Error::HeaderTooShort);
        }
        let flags = BigEndian::read_u16(&data[2..4]);
        let header = Header {
            id: BigEndian::read_u16(&data[..2]),
            query: flags & flag::QUERY == 0,
            opcode: Opcode::from(((flags & flag::OPCODE_MASK) >> 11) as u8),
            authoritative: flags & flag::AUTHORITATIVE != 0,
            truncated: flags & flag::TRUNCATED != 0,
            recursion_desired: flags & flag::RECURSION_DESIRED != 0,
            recursion_available: flags & flag::RECURSION_AVAILABLE != 0,
            response_code: ResponseCode::from((flags & flag::RESPONSE_CODE_MASK) as u8),
            questions: BigEndian::read_u16(&data[4..6]),
            answers: BigEndian::read_u16(&data[6..8]),
            nameservers: BigEndian::read_u16(&data[8..10]),
            additional: BigEndian::read_u16(&data[10..12]),
        };
        Ok(header)
    }

    /// Write a header to a buffer slice
    ///
    /// Fails, leaving `data` untouched, when the op-code or the response
    /// code doesn't fit in its 4 bits.
    ///
    /// # Panics
    ///
    /// When buffer size is not exactly 12 bytes
    pub fn write(&self, data: &mut [u8]) -> Result<(), Error> {
        if data.len() != Header::SIZE {
            panic!("Header size is exactly 12 bytes");
        }
        let opcode = u8::from(self.opcode);
        if opcode > 0x0f {
            return Err(Error::OpcodeOutOfRange(opcode));
        }
        let response_code = u8::from(self.response_code);
        if response_code > 0x0f {
            return Err(Error::ResponseCodeOutOfRange(response_code));
        }
        let mut flags = 0u16;
        flags |= u16::from(opcode) << 11;
        flags |= u16::from(response_code);
        if !self.query {
            flags |= flag::QUERY;
        }
        if self.authoritative {
            flags |= flag::AUTHORITATIVE;
        }
        if self.truncated {
            flags |= flag::TRUNCATED;
        }
        if self.recursion_desired {
            flags |= flag::RECURSION_DESIRED;
        }
        if self.recursion_available {
            flags |= flag::RECURSION_AVAILABLE;
        }
        BigEndian::write_u16(&mut data[..2], self.id);
        BigEndian::write_u16(&mut data[2..4], flags);
        BigEndian::write_u16(&mut data[4..6], self.questions);
        BigEndian::write_u16(&mut data[6..8], self.answers);
        BigEndian::write_u16(&mut data[8..10], self.nameservers);
        BigEndian::write_u16(&mut data[10..12], self.additional);
        Ok(())
    }

    pub fn set_recursion_desired(data: &mut [u8]) {
        let oldflags = BigEndian::read_u16(&data[2..4]);
        BigEndian::write_u16(&mut data[2..4], oldflags | flag::RECURSION_DESIRED);
    }

    pub fn set_truncated(data: &mut [u8]) {
        let oldflags = BigEndian::read_u16(&data[2..4]);
        BigEndian::write_u16(&mut data[2..4], oldflags | flag::TRUNCATED);
    }

    pub fn question_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[4..6])
    }

    pub fn inc_questions(data: &mut [u8]) -> Option<u16> {
        let oldq = Header::question_count(data);
        let newq = oldq.checked_add(1)?;
        BigEndian::write_u16(&mut data[4..6], newq);
        Some(newq)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dns_parser::Opcode::*;
    use crate::dns_parser::ResponseCode::NoError;

    #[test]
    fn parse_query() {
        let query = b"\x06%\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x07example\x03com\x00\x00\x01\x00\x01";
        let header = Header::parse(query).unwrap();
        assert_eq!(
            header,
            Header {
                id: 1573,
                query: true,
                opcode: StandardQuery,
                authoritative: false,
                truncated: false,
                recursion_desired: true,
                recursion_available: false,
                response_code: NoError,
                questions: 1,
                answers: 0,
                nameservers: 0,
                additional: 0,
            }
        );
    }

    #[test]
    fn parse_authoritative_response() {
        let header = Header::parse(b"\xbe\xef\x84\x00\x00\x01\x00\x01\x00\x00\x00\x00").unwrap();
        assert!(!header.query);
        assert!(header.authoritative);
        assert!(!header.recursion_desired);
        assert_eq!(header.opcode, StandardQuery);
        assert_eq!(header.answers, 1);
    }

    #[test]
    fn parse_every_flag() {
        // QR, opcode 15, AA, TC, RD, RA, Z bits set, rcode 13
        let header = Header::parse(b"\x00\x01\xff\xfd\x00\x00\x00\x00\x00\x00\x00\x00").unwrap();
        assert!(!header.query);
        assert_eq!(header.opcode, Reserved(15));
        assert!(header.authoritative);
        assert!(header.truncated);
        assert!(header.recursion_desired);
        assert!(header.recursion_available);
        assert_eq!(header.response_code, ResponseCode::Reserved(13));
    }

    #[test]
    fn too_short() {
        assert_eq!(Header::parse(b"\xbe\xef\x00"), Err(Error::HeaderTooShort));
    }

    #[test]
    fn write_query_header() {
        let mut header = Header::new_query(0xbeef, false);
        header.questions = 1;
        let mut buf = [0u8; 12];
        header.write(&mut buf).unwrap();
        assert_eq!(&buf, b"\xbe\xef\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00");
    }

    #[test]
    fn write_then_parse() {
        let header = Header {
            id: 7,
            query: false,
            opcode: ServerStatusRequest,
            authoritative: true,
            truncated: true,
            recursion_desired: false,
            recursion_available: true,
            response_code: ResponseCode::Refused,
            questions: 0,
            answers: 3,
            nameservers: 2,
            additional: 1,
        };
        let mut buf = [0u8; 12];
        header.write(&mut buf).unwrap();
        assert_eq!(&buf[2..4], b"\x96\x85");
        assert_eq!(Header::parse(&buf).unwrap(), header);
    }

    #[test]
    fn codes_wider_than_four_bits() {
        let mut header = Header::new_query(1, false);
        header.opcode = Reserved(15);
        header.response_code = ResponseCode::Reserved(15);
        let mut buf = [0u8; 12];
        header.write(&mut buf).unwrap();
        assert_eq!(Header::parse(&buf).unwrap(), header);

        let mut buf = [0u8; 12];
        header.opcode = Reserved(16);
        assert_eq!(header.write(&mut buf), Err(Error::OpcodeOutOfRange(16)));
        header.opcode = StandardQuery;
        header.response_code = ResponseCode::Reserved(17);
        assert_eq!(
            header.write(&mut buf),
            Err(Error::ResponseCodeOutOfRange(17))
        );
        assert_eq!(buf, [0u8; 12]);
    }

    #[test]
    fn set_flags_in_place() {
        let mut buf = [0u8; 12];
        Header::set_recursion_desired(&mut buf);
        Header::set_truncated(&mut buf);
        let header = Header::parse(&buf).unwrap();
        assert!(header.recursion_desired);
        assert!(header.truncated);
        assert!(header.query);
    }

    #[test]
    fn question_counter() {
        let mut buf = [0u8; 12];
        buf[4] = 0xff;
        buf[5] = 0xfe;
        assert_eq!(Header::inc_questions(&mut buf), Some(0xffff));
        assert_eq!(Header::inc_questions(&mut buf), None);
    }
}
