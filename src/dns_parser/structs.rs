use std::fmt;

use super::{Builder, Class, Error, Header, Name, RRData, Type};

/// Parsed DNS packet
///
/// Section lengths match the counts in `header` for every packet produced by
/// `Packet::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet<'a> {
    pub header: Header,
    pub questions: Vec<Question<'a>>,
    pub answers: Vec<ResourceRecord<'a>>,
    pub nameservers: Vec<ResourceRecord<'a>>,
    pub additional: Vec<ResourceRecord<'a>>,
}

/// A parsed chunk of data in the Query section of the packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question<'a> {
    pub qname: Name<'a>,
    /// Whether or not we prefer unicast responses.
    /// This is used in multicast DNS.
    pub prefer_unicast: bool,
    pub qtype: Type,
    pub qclass: Class,
}

/// A single DNS record
///
/// `data_raw` always holds the RDATA exactly as received. `data` is its
/// typed reading, or `RRData::Unknown` when the type isn't interpreted or
/// the RDATA doesn't fit the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord<'a> {
    pub name: Name<'a>,
    pub typ: Type,
    pub cls: Class,
    /// Whether or not the set of resource records is fully contained in the
    /// packet, or whether there will be more resource records in future
    /// packets. Only used for multicast DNS.
    pub cache_flush: bool,
    pub ttl: i32,
    pub data_raw: &'a [u8],
    pub data: RRData<'a>,
}

/// The record sections of a packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Answers,
    Nameservers,
    Additional,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Section::Answers => "answer",
            Section::Nameservers => "authority",
            Section::Additional => "additional",
        })
    }
}

impl<'a> Packet<'a> {
    /// A standard query holding `questions` and nothing else
    pub fn new_query(id: u16, questions: Vec<Question<'a>>) -> Packet<'a> {
        let mut header = Header::new_query(id, false);
        header.questions = questions.len().min(u16::MAX as usize) as u16;
        Packet {
            header: header,
            questions: questions,
            answers: Vec::new(),
            nameservers: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Serializes the packet without a size limit
    ///
    /// Header flags are taken from `header`; section counts are taken from
    /// the sections themselves. Only the question section can be written:
    /// any resource record fails with `Error::UnsupportedSerialization`.
    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        let mut builder = Builder::from_header(&self.header)?;
        builder.set_max_size(None);
        for question in &self.questions {
            builder = builder.add_question(
                &question.qname,
                question.prefer_unicast,
                question.qtype,
                question.qclass,
            )?;
        }
        for record in &self.answers {
            builder = builder.add_answer(record)?;
        }
        for record in &self.nameservers {
            builder = builder.add_nameserver(record)?;
        }
        for record in &self.additional {
            builder = builder.add_additional(record)?;
        }
        Ok(builder.build().unwrap_or_else(|x| x))
    }
}
