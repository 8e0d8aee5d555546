use byteorder::{BigEndian, ByteOrder};

use super::{Class, Error, Header, Name, ResourceRecord, Section, Type};

/// Top bit of the class field: QU in questions, cache-flush in records
pub(crate) const CLASS_TOP_BIT: u16 = 0x8000;

/// Allows to build a DNS packet
///
/// Only the header and the question section are written. Resource records
/// can't be serialized yet and the `add_*` methods for them always fail.
#[derive(Debug)]
pub struct Builder {
    buf: Vec<u8>,
    max_size: Option<usize>,
}

impl Builder {
    /// Creates a new query
    ///
    /// Initially all sections are empty. You're expected to fill
    /// the questions section with `add_question`
    pub fn new_query(id: u16, recursion: bool) -> Builder {
        // all-zero flags make a standard query
        let mut buf = Vec::with_capacity(512);
        buf.extend([0u8; Header::SIZE].iter());
        BigEndian::write_u16(&mut buf[..2], id);
        if recursion {
            Header::set_recursion_desired(&mut buf[..Header::SIZE]);
        }
        Builder {
            buf: buf,
            max_size: Some(512),
        }
    }

    /// Starts a packet with the flags of `header`
    ///
    /// The section counts of `header` are ignored, they grow as entries are
    /// added. Fails when the op-code or response code doesn't fit the header.
    pub fn from_header(header: &Header) -> Result<Builder, Error> {
        let head = Header {
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
            ..*header
        };
        let mut buf = Vec::with_capacity(512);
        buf.extend([0u8; Header::SIZE].iter());
        head.write(&mut buf[..Header::SIZE])?;
        Ok(Builder {
            buf: buf,
            max_size: Some(512),
        })
    }

    /// Adds a question to the packet
    ///
    /// Fails when a label of `qname` is empty or longer than 63 bytes, when
    /// the whole name is longer than 255 bytes, when `qclass` has the top
    /// bit set, or when there are already 65535 questions in the buffer. The
    /// builder is consumed either way.
    pub fn add_question(
        mut self,
        qname: &Name,
        prefer_unicast: bool,
        qtype: Type,
        qclass: Class,
    ) -> Result<Builder, Error> {
        let mut qclass = u16::from(qclass);
        if qclass & CLASS_TOP_BIT != 0 {
            return Err(Error::ClassOutOfRange(qclass));
        }
        if prefer_unicast {
            qclass |= CLASS_TOP_BIT;
        }
        qname.write_to(&mut self.buf)?;
        push_u16(&mut self.buf, u16::from(qtype));
        push_u16(&mut self.buf, qclass);
        Header::inc_questions(&mut self.buf).ok_or(Error::TooManyEntries)?;
        Ok(self)
    }

    pub fn add_answer(self, record: &ResourceRecord) -> Result<Builder, Error> {
        self.write_rr(Section::Answers, record)
    }

    pub fn add_nameserver(self, record: &ResourceRecord) -> Result<Builder, Error> {
        self.write_rr(Section::Nameservers, record)
    }

    pub fn add_additional(self, record: &ResourceRecord) -> Result<Builder, Error> {
        self.write_rr(Section::Additional, record)
    }

    // TODO: settle the outbound record layout (name, type, class, ttl,
    // length-prefixed data_raw) and write records here
    fn write_rr(self, section: Section, _record: &ResourceRecord) -> Result<Builder, Error> {
        Err(Error::UnsupportedSerialization(section))
    }

    /// Returns the final packet
    ///
    /// When packet is not truncated method returns `Ok(packet)`. If
    /// packet is truncated the method returns `Err(packet)`. In both
    /// cases the packet is fully valid.
    pub fn build(mut self) -> Result<Vec<u8>, Vec<u8>> {
        match self.max_size {
            Some(max_size) if self.buf.len() > max_size => {
                Header::set_truncated(&mut self.buf[..Header::SIZE]);
                Err(self.buf)
            }
            _ => Ok(self.buf),
        }
    }

    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    pub fn is_empty(&self) -> bool {
        Header::question_count(&self.buf) == 0
    }
}

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    let mut bytes = [0u8; 2];
    BigEndian::write_u16(&mut bytes, value);
    buf.extend_from_slice(&bytes);
}

#[cfg(test)]
mod test {
    use super::Builder;
    use super::Class as QC;
    use super::Name;
    use super::Type as QT;
    use crate::dns_parser::{Error, Header, Opcode, Packet};

    #[test]
    fn build_query() {
        let mut bld = Builder::new_query(1573, true);
        let name = Name::from_str("example.com").unwrap();
        bld = bld.add_question(&name, false, QT::A, QC::IN).unwrap();
        let result = b"\x06%\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x07example\x03com\x00\x00\x01\x00\x01";
        assert_eq!(&bld.build().unwrap()[..], &result[..]);
    }

    #[test]
    fn build_srv_query() {
        let mut bld = Builder::new_query(23513, true);
        let name = Name::from_str("_xmpp-server._tcp.gmail.com").unwrap();
        bld = bld.add_question(&name, false, QT::SRV, QC::IN).unwrap();
        let result = b"[\xd9\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
            \x0c_xmpp-server\x04_tcp\x05gmail\x03com\x00\x00!\x00\x01";
        assert_eq!(&bld.build().unwrap()[..], &result[..]);
    }

    #[test]
    fn build_unicast_question() {
        let bld = Builder::new_query(0, false);
        assert!(bld.is_empty());
        let name = Name::from_str("host.local").unwrap();
        let bld = bld.add_question(&name, true, QT::AAAA, QC::IN).unwrap();
        assert!(!bld.is_empty());
        let packet = bld.build().unwrap();
        assert_eq!(&packet[packet.len() - 4..], b"\x00\x1c\x80\x01");
        let parsed = Packet::parse(&packet).unwrap();
        assert!(parsed.questions[0].prefer_unicast);
        assert_eq!(parsed.questions[0].qclass, QC::IN);
    }

    #[test]
    fn build_truncated() {
        let mut bld = Builder::new_query(0, false);
        bld.set_max_size(Some(20));
        let name = Name::from_str("a-fairly-long-host-name.local").unwrap();
        bld = bld.add_question(&name, false, QT::A, QC::IN).unwrap();
        let packet = bld.build().unwrap_err();
        assert!(Packet::parse(&packet).unwrap().header.truncated);
    }

    #[test]
    fn class_with_top_bit_fails() {
        let name = Name::from_str("host.local").unwrap();
        let err = Builder::new_query(0, false)
            .add_question(&name, false, QT::A, QC::Unknown(0x8001))
            .unwrap_err();
        assert_eq!(err, Error::ClassOutOfRange(0x8001));

        let bld = Builder::new_query(0, false)
            .add_question(&name, false, QT::A, QC::Unknown(0x7fff))
            .unwrap();
        let packet = bld.build().unwrap();
        let parsed = Packet::parse(&packet).unwrap();
        assert!(!parsed.questions[0].prefer_unicast);
        assert_eq!(parsed.questions[0].qclass, QC::Unknown(0x7fff));
    }

    #[test]
    fn from_header_keeps_flags() {
        let mut header = Header::new_query(7, true);
        header.opcode = Opcode::ServerStatusRequest;
        header.questions = 3;
        let bld = Builder::from_header(&header).unwrap();
        assert!(bld.is_empty());
        let packet = bld.build().unwrap();
        header.questions = 0;
        assert_eq!(Packet::parse(&packet).unwrap().header, header);

        header.opcode = Opcode::Reserved(0x20);
        assert_eq!(
            Builder::from_header(&header).unwrap_err(),
            Error::OpcodeOutOfRange(0x20)
        );
    }

    #[test]
    fn empty_label_fails() {
        let name = Name::from_labels(vec!["a", "", "local"]);
        let err = Builder::new_query(0, false)
            .add_question(&name, false, QT::A, QC::IN)
            .unwrap_err();
        assert_eq!(err, Error::EmptyLabel);
    }
}
