use thiserror::Error;

use super::Section;

/// Error parsing or building a DNS packet
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("packet is smaller than header size")]
    HeaderTooShort,
    #[error("packet is has incomplete data")]
    UnexpectedEOF,
    #[error("wrong (too short or too long) size of RDATA")]
    WrongRdataLength,
    #[error("label in domain name has unknown label format {0:#04x}")]
    UnknownLabelFormat(u8),
    #[error("invalid characters encountered while reading label")]
    LabelIsNotUtf8,
    #[error("too many compression pointers while reading name")]
    PointerLoop,
    #[error("compression pointer to offset {0} is outside of the packet")]
    PointerOutOfBounds(usize),
    #[error("label of {0} bytes is longer than 63 bytes")]
    LabelTooLong(usize),
    #[error("domain name has an empty label")]
    EmptyLabel,
    #[error("domain name of {0} bytes is longer than 255 bytes")]
    NameTooLong(usize),
    #[error("class {0} collides with the unicast-response bit")]
    ClassOutOfRange(u16),
    #[error("op-code {0} doesn't fit in 4 bits")]
    OpcodeOutOfRange(u8),
    #[error("response code {0} doesn't fit in 4 bits")]
    ResponseCodeOutOfRange(u8),
    #[error("serializing resource records of the {0} section is not supported")]
    UnsupportedSerialization(Section),
    #[error("too many entries in a single section")]
    TooManyEntries,
}
