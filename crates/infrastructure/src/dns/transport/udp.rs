//! UDP connection for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing), one datagram per write.

use super::{not_connected, with_deadline};
use async_trait::async_trait;
use ferrous_dnscache_application::ports::DnsConn;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::debug;

/// Connected UDP socket to a single DNS server.
pub struct UdpConn {
    socket: Option<UdpSocket>,
    local_addr: SocketAddr,
    peer_addr: SocketAddr,
    read_deadline: Option<Instant>,
    write_deadline: Option<Instant>,
}

impl UdpConn {
    pub async fn connect(server_addr: SocketAddr) -> io::Result<Self> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(server_addr).await?;
        let local_addr = socket.local_addr()?;

        debug!(server = %server_addr, local = %local_addr, "UDP connection opened");

        Ok(Self {
            socket: Some(socket),
            local_addr,
            peer_addr: server_addr,
            read_deadline: None,
            write_deadline: None,
        })
    }

    fn socket(&self) -> io::Result<&UdpSocket> {
        self.socket.as_ref().ok_or_else(not_connected)
    }
}

#[async_trait]
impl DnsConn for UdpConn {
    async fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let socket = self.socket()?;
        let sent = with_deadline(self.write_deadline, socket.send(buf)).await?;
        debug!(server = %self.peer_addr, bytes_sent = sent, "UDP query sent");
        Ok(sent)
    }

    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let socket = self.socket()?;
        let received = with_deadline(self.read_deadline, socket.recv(buf)).await?;
        debug!(server = %self.peer_addr, bytes_received = received, "UDP response received");
        Ok(received)
    }

    async fn read_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let socket = self.socket()?;
        with_deadline(self.read_deadline, socket.recv_from(buf)).await
    }

    async fn close(&mut self) -> io::Result<()> {
        match self.socket.take() {
            Some(_) => Ok(()),
            None => Err(not_connected()),
        }
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        Some(self.local_addr)
    }

    fn peer_addr(&self) -> Option<SocketAddr> {
        Some(self.peer_addr)
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        self.read_deadline = deadline;
        Ok(())
    }

    fn set_write_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        self.write_deadline = deadline;
        Ok(())
    }
}
