use log::trace;

use super::builder::CLASS_TOP_BIT;
use super::{reader, Class, Error, Header, Name, Packet, Question, RRData, ResourceRecord, Type};

impl<'a> Packet<'a> {
    /// Parse a full DNS Packet and return a structure that has all the
    /// data borrowed from the passed buffer.
    ///
    /// Bytes after the last declared record are ignored.
    pub fn parse(data: &'a [u8]) -> Result<Packet<'a>, Error> {
        let header = Header::parse(data)?;
        let mut offset = Header::SIZE;
        // Counts come from the wire, so don't preallocate from them
        let mut questions = Vec::new();
        for _ in 0..header.questions {
            let (qname, next) = Name::scan(data, offset)?;
            offset = next;
            let qtype = reader::read_u16(data, offset)?;
            let qclass = reader::read_u16(data, offset + 2)?;
            offset += 4;
            questions.push(Question {
                qname: qname,
                prefer_unicast: qclass & CLASS_TOP_BIT != 0,
                qtype: Type::from(qtype),
                qclass: Class::from(qclass & !CLASS_TOP_BIT),
            });
        }
        let answers = parse_records(data, &mut offset, header.answers)?;
        let nameservers = parse_records(data, &mut offset, header.nameservers)?;
        let additional = parse_records(data, &mut offset, header.additional)?;
        Ok(Packet {
            header: header,
            questions: questions,
            answers: answers,
            nameservers: nameservers,
            additional: additional,
        })
    }
}

fn parse_records<'a>(
    data: &'a [u8],
    offset: &mut usize,
    count: u16,
) -> Result<Vec<ResourceRecord<'a>>, Error> {
    let mut records = Vec::new();
    for _ in 0..count {
        records.push(parse_record(data, offset)?);
    }
    Ok(records)
}

// Generic function to parse answer, nameservers, and additional records.
fn parse_record<'a>(data: &'a [u8], offset: &mut usize) -> Result<ResourceRecord<'a>, Error> {
    let (name, next) = Name::scan(data, *offset)?;
    let typ = Type::from(reader::read_u16(data, next)?);
    let cls = reader::read_u16(data, next + 2)?;
    let ttl = reader::read_i32(data, next + 4)?;
    let rdlen = reader::read_u16(data, next + 8)? as usize;
    let rdata_offset = next + 10;
    let data_raw = reader::read_bytes(data, rdata_offset, rdlen)?;
    let rdata = match RRData::parse(typ, data, rdata_offset, rdlen) {
        Ok(rdata) => rdata,
        Err(error) => {
            trace!("keeping raw {} record data for {}: {}", typ, name, error);
            RRData::Unknown
        }
    };
    *offset = rdata_offset + rdlen;
    Ok(ResourceRecord {
        name: name,
        typ: typ,
        cls: Class::from(cls & !CLASS_TOP_BIT),
        cache_flush: cls & CLASS_TOP_BIT != 0,
        ttl: ttl,
        data_raw: data_raw,
        data: rdata,
    })
}
