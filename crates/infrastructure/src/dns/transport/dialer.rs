use super::{TcpConn, UdpConn};
use async_trait::async_trait;
use ferrous_dnscache_application::ports::{Dialer, DnsConn};
use ferrous_dnscache_domain::Network;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

/// Dials real sockets for every [`Network`].
pub struct NetDialer {
    connect_timeout: Duration,
}

impl NetDialer {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for NetDialer {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl Dialer for NetDialer {
    async fn dial(&self, network: Network, addr: SocketAddr) -> io::Result<Box<dyn DnsConn>> {
        let family_ok = match network {
            Network::Udp4 | Network::Tcp4 => addr.is_ipv4(),
            Network::Udp6 | Network::Tcp6 => addr.is_ipv6(),
            Network::Udp | Network::Tcp => true,
        };
        if !family_ok {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("address {} does not belong to network {}", addr, network),
            ));
        }

        if network.is_datagram() {
            Ok(Box::new(UdpConn::connect(addr).await?))
        } else {
            Ok(Box::new(TcpConn::connect(addr, self.connect_timeout).await?))
        }
    }
}
