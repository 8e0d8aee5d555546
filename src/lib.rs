//! DNS and multicast DNS message codec
//!
//! [`dns_parser`] turns raw datagrams into [`Packet`]s and question-only
//! packets back into bytes. It does no I/O. [`query`] is a thin tokio
//! client that sends one query to the mDNS group and hands the datagrams it
//! receives to the codec.
//!
//! [`Packet`]: dns_parser::Packet

pub mod address_family;
pub mod dns_parser;
pub mod query;

pub use crate::address_family::{AddressFamily, Inet, Inet6};
pub use crate::query::{query, QueryConfig, Response};

/// Port multicast DNS listens on
pub const MDNS_PORT: u16 = 5353;
