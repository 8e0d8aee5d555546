use super::MDNS_PORT;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

/// IP hop limit for multicast DNS packets (RFC 6762 section 11)
const MDNS_HOP_LIMIT: u32 = 255;

pub enum Inet {}

pub enum Inet6 {}

pub trait AddressFamily {
    type Addr: Into<IpAddr>;

    const ANY_ADDR: Self::Addr;
    const MDNS_GROUP: Self::Addr;

    const DOMAIN: Domain;

    fn join_multicast(socket: &Socket, multiaddr: &Self::Addr) -> io::Result<()>;

    fn set_hop_limit(socket: &Socket, hops: u32) -> io::Result<()>;

    fn udp_socket() -> io::Result<Socket> {
        Socket::new(Self::DOMAIN, Type::DGRAM, Some(Protocol::UDP))
    }

    /// Where queries are sent
    fn group_addr() -> SocketAddr {
        SocketAddr::new(Self::MDNS_GROUP.into(), MDNS_PORT)
    }

    /// Binds a non-blocking socket on `port` (0 picks an ephemeral port)
    /// that is a member of the mDNS group.
    fn bind(port: u16) -> io::Result<UdpSocket> {
        let addr: SockAddr = SocketAddr::new(Self::ANY_ADDR.into(), port).into();
        let socket = Self::udp_socket()?;
        socket.set_reuse_address(true)?;
        socket.set_nonblocking(true)?;

        #[cfg(all(unix, not(target_os = "illumos"), not(target_os = "solaris")))]
        socket.set_reuse_port(true)?;

        socket.bind(&addr)?;
        Self::join_multicast(&socket, &Self::MDNS_GROUP)?;
        Self::set_hop_limit(&socket, MDNS_HOP_LIMIT)?;
        Ok(socket.into())
    }
}

impl AddressFamily for Inet {
    type Addr = Ipv4Addr;

    const ANY_ADDR: Self::Addr = Ipv4Addr::UNSPECIFIED;
    const MDNS_GROUP: Self::Addr = Ipv4Addr::new(224, 0, 0, 251);

    const DOMAIN: Domain = Domain::IPV4;

    fn join_multicast(socket: &Socket, multiaddr: &Self::Addr) -> io::Result<()> {
        socket.join_multicast_v4(multiaddr, &Ipv4Addr::UNSPECIFIED)
    }

    fn set_hop_limit(socket: &Socket, hops: u32) -> io::Result<()> {
        socket.set_multicast_ttl_v4(hops)
    }
}

impl AddressFamily for Inet6 {
    type Addr = Ipv6Addr;

    const ANY_ADDR: Self::Addr = Ipv6Addr::UNSPECIFIED;
    const MDNS_GROUP: Self::Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 0xfb);

    const DOMAIN: Domain = Domain::IPV6;

    fn join_multicast(socket: &Socket, multiaddr: &Self::Addr) -> io::Result<()> {
        socket.join_multicast_v6(multiaddr, 0)
    }

    fn set_hop_limit(socket: &Socket, hops: u32) -> io::Result<()> {
        socket.set_multicast_hops_v6(hops)
    }
}
