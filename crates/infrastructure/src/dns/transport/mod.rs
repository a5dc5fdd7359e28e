pub mod dialer;
pub mod tcp;
pub mod udp;

use std::future::Future;
use std::io;
use tokio::time::Instant;

pub use dialer::NetDialer;
pub use tcp::TcpConn;
pub use udp::UdpConn;

/// Maximum UDP DNS response size with EDNS(0)
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Runs `op` under an absolute deadline, reporting expiry as `TimedOut`.
pub(crate) async fn with_deadline<T, F>(deadline: Option<Instant>, op: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline, op)
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "i/o deadline exceeded"))?,
        None => op.await,
    }
}

pub(crate) fn not_connected() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "use of closed connection")
}
