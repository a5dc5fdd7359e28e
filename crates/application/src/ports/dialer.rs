use super::DnsConn;
use async_trait::async_trait;
use ferrous_dnscache_domain::Network;
use futures::future::BoxFuture;
use std::io;
use std::net::SocketAddr;

pub type DialFuture = BoxFuture<'static, io::Result<Box<dyn DnsConn>>>;

/// Deferred dial of one real connection, bound to its network and address.
pub type DialFn = Box<dyn FnOnce() -> DialFuture + Send>;

#[async_trait]
pub trait Dialer: Send + Sync {
    async fn dial(&self, network: Network, addr: SocketAddr) -> io::Result<Box<dyn DnsConn>>;
}
