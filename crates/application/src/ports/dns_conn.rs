use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use tokio::time::Instant;

/// Duplex connection to a DNS peer: one query written, one or more reads.
///
/// Real sockets and the answer cache's interceptor both implement this, so a
/// resolution client cannot tell which one it was handed. Deadlines are
/// absolute; `None` clears a previously set deadline.
#[async_trait]
pub trait DnsConn: Send {
    async fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Datagram-addressed read.
    async fn read_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;

    async fn close(&mut self) -> io::Result<()>;

    fn local_addr(&self) -> Option<SocketAddr>;

    fn peer_addr(&self) -> Option<SocketAddr>;

    fn set_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        self.set_read_deadline(deadline)?;
        self.set_write_deadline(deadline)
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()>;

    fn set_write_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()>;
}
