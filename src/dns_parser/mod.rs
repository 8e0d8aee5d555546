//! The network-agnostic DNS/mDNS message codec
//!
//! Use [`Packet::parse`] to parse a packet into a data structure.
//!
//! Use [`Packet::serialize`] or [`Builder`] to create an outgoing query.
//! Only the header and the question section can be serialized.
//!
//! [`Builder`]: struct.Builder.html
//! [`Packet::parse`]: struct.Packet.html#method.parse
//! [`Packet::serialize`]: struct.Packet.html#method.serialize

mod builder;
mod enums;
mod error;
mod header;
mod name;
mod parser;
mod rrdata;
mod structs;

pub mod format;
pub mod reader;

pub use self::builder::Builder;
pub use self::enums::{Class, Opcode, ResponseCode, Type};
pub use self::error::Error;
pub use self::header::Header;
pub use self::name::{Name, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use self::rrdata::RRData;
pub use self::structs::{Packet, Question, ResourceRecord, Section};
