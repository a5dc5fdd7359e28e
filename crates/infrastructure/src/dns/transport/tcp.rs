//! TCP connection for DNS queries (RFC 1035 §4.2.2)
//!
//! The connection moves raw bytes; the two-byte length prefix is the
//! caller's business.

use super::{not_connected, with_deadline};
use async_trait::async_trait;
use ferrous_dnscache_application::ports::DnsConn;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

pub struct TcpConn {
    stream: Option<TcpStream>,
    local_addr: SocketAddr,
    peer_addr: SocketAddr,
    read_deadline: Option<Instant>,
    write_deadline: Option<Instant>,
}

impl TcpConn {
    pub async fn connect(server_addr: SocketAddr, timeout: Duration) -> io::Result<Self> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(server_addr))
            .await
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("Timeout connecting to TCP server {}", server_addr),
                )
            })??;

        stream.set_nodelay(true)?;
        let local_addr = stream.local_addr()?;

        debug!(server = %server_addr, local = %local_addr, "TCP connection opened");

        Ok(Self {
            stream: Some(stream),
            local_addr,
            peer_addr: server_addr,
            read_deadline: None,
            write_deadline: None,
        })
    }
}

#[async_trait]
impl DnsConn for TcpConn {
    async fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let stream = self.stream.as_mut().ok_or_else(not_connected)?;
        with_deadline(self.write_deadline, async {
            stream.write_all(buf).await?;
            stream.flush().await
        })
        .await?;
        Ok(buf.len())
    }

    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let stream = self.stream.as_mut().ok_or_else(not_connected)?;
        with_deadline(self.read_deadline, stream.read(buf)).await
    }

    async fn read_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let peer = self.peer_addr;
        let n = self.read(buf).await?;
        Ok((n, peer))
    }

    async fn close(&mut self) -> io::Result<()> {
        let mut stream = self.stream.take().ok_or_else(not_connected)?;
        stream.shutdown().await
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
