//! One-shot multicast DNS queries
//!
//! [`query`] sends a single query to the mDNS group and collects every
//! response that arrives before the timeout. Only one request is in flight
//! per call; concurrent calls on the same port share the group traffic and
//! each sees the other's responses.

use std::env;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use log::{debug, trace, warn};
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};

use crate::address_family::AddressFamily;
use crate::dns_parser::{self, Packet, Question};

/// Local port used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 10000;

/// Settings for [`query`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    /// Local UDP port to bind; 0 picks an ephemeral port
    pub port: u16,
    /// How long to wait for responses after the query is sent
    pub timeout: Duration,
    /// Size of the receive buffer, larger datagrams are cut
    pub recv_buffer_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(5),
            // RFC 6762 section 17
            recv_buffer_size: 9000,
        }
    }
}

impl QueryConfig {
    /// Defaults, with the local port taken from the `PORT` variable
    pub fn from_env() -> Self {
        QueryConfig {
            port: parse_port(env::var("PORT").ok().as_deref()),
            ..QueryConfig::default()
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// A datagram that parsed as a DNS response
#[derive(Clone, Debug)]
pub struct Response {
    pub from: SocketAddr,
    pub data: Vec<u8>,
}

impl Response {
    pub fn packet(&self) -> Result<Packet<'_>, dns_parser::Error> {
        Packet::parse(&self.data)
    }
}

/// Sends `questions` to the mDNS group and returns the responses received
/// within `config.timeout`
///
/// Datagrams that don't parse, and queries (including our own, looped back
/// by the group), are logged and skipped. Fails only on socket errors or
/// when the questions can't be serialized.
///
/// Must be called from within a tokio runtime with IO and time enabled.
pub async fn query<AF: AddressFamily>(
    config: &QueryConfig,
    questions: &[Question<'_>],
) -> io::Result<Vec<Response>> {
    let mut builder = dns_parser::Builder::new_query(0, false);
    builder.set_max_size(None);
    for question in questions {
        builder = builder
            .add_question(
                &question.qname,
                question.prefer_unicast,
                question.qtype,
                question.qclass,
            )
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    }
    let message = builder.build().unwrap_or_else(|x| x);

    let socket = UdpSocket::from_std(AF::bind(config.port)?)?;
    debug!("listening for responses on {:?}", socket.local_addr()?);

    let group = AF::group_addr();
    trace!("sending {} byte query to {:?}", message.len(), group);
    let sent = socket.send_to(&message, group).await?;
    if sent != message.len() {
        warn!("failed to send entire packet");
    }

    let deadline = Instant::now() + config.timeout;
    let mut recv_buf = vec![0u8; config.recv_buffer_size];
    let mut responses = Vec::new();
    loop {
        let (len, from) = match timeout_at(deadline, socket.recv_from(&mut recv_buf)).await {
            Ok(received) => received?,
            Err(_) => break,
        };
        let data = &recv_buf[..len];
        if is_response(data, from) {
            responses.push(Response {
                from: from,
                data: data.to_vec(),
            });
        }
    }

    debug!("collected {} responses", responses.len());
    Ok(responses)
}

fn is_response(data: &[u8], from: SocketAddr) -> bool {
    trace!("received packet from {:?}", from);
    match Packet::parse(data) {
        Ok(ref packet) if packet.header.query => {
            trace!("ignoring query from {:?}", from);
            false
        }
        Ok(_) => true,
        Err(error) => {
            warn!("couldn't parse packet from {:?}: {}", from, error);
            false
        }
    }
}
