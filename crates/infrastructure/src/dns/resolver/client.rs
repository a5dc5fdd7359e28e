//! One request/response exchange over a [`DnsConn`].
//!
//! Datagram connections carry the message as-is; stream connections use
//! the RFC 1035 §4.2.2 two-byte length prefix.

use crate::dns::transport::MAX_UDP_RESPONSE_SIZE;
use ferrous_dnscache_application::ports::DnsConn;
use ferrous_dnscache_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Sets the deadline, writes the query once, reads one response and closes.
///
/// The connection is closed on every path. Close failures are logged and
/// do not affect the returned response.
pub(crate) async fn exchange(
    conn: &mut dyn DnsConn,
    query: &[u8],
    stream: bool,
    deadline: Instant,
) -> io::Result<Vec<u8>> {
    let result = round_trip(conn, query, stream, deadline).await;

    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close DNS connection");
    }

    result
}

async fn round_trip(
    conn: &mut dyn DnsConn,
    query: &[u8],
    stream: bool,
    deadline: Instant,
) -> io::Result<Vec<u8>> {
    conn.set_deadline(Some(deadline))?;

    if !stream {
        conn.write(query).await?;
        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let n = conn.read(&mut buf).await?;
        buf.truncate(n);
        return Ok(buf);
    }

    let length = u16::try_from(query.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("DNS message too large for TCP: {} bytes", query.len()),
        )
    })?;
    let mut framed = Vec::with_capacity(query.len() + 2);
    framed.extend_from_slice(&length.to_be_bytes());
    framed.extend_from_slice(query);
    conn.write(&framed).await?;

    let mut len_buf = [0u8; 2];
    read_full(conn, &mut len_buf).await?;
    let response_len = usize::from(u16::from_be_bytes(len_buf));

    let mut response = vec![0u8; response_len];
    read_full(conn, &mut response).await?;
    Ok(response)
}

async fn read_full(conn: &mut dyn DnsConn, buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = conn.read(&mut buf[filled..]).await?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed mid-message",
            ));
        }
        filled += n;
    }
    Ok(())
}

/// Checks that `response` answers the query with `expected` as its id.
pub(crate) fn validate_response_id(
    expected: u16,
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response from {} too short: {} bytes",
            server,
            response.len()
        )));
    }

    let received = u16::from_be_bytes([response[0], response[1]]);
    if received != expected {
        warn!(server = %server, expected, received, "DNS response id mismatch");
        return Err(DomainError::ResponseIdMismatch { expected, received });
    }

    debug!(server = %server, id = expected, "DNS response id matched");
    Ok(())
}

pub(crate) fn map_io_error(err: io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::TimedOut => DomainError::QueryTimeout,
        _ => DomainError::Transport(err.to_string()),
    }
}
