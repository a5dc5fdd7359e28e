use async_trait::async_trait;
use ferrous_dnscache_domain::{DomainError, RecordType};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub host: String,
    pub addresses: Vec<IpAddr>,
}

impl LookupResult {
    pub fn new(host: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        Self {
            host: host.into(),
            addresses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup(&self, host: &str, record_type: RecordType) -> Result<LookupResult, DomainError>;

    /// Resolves both address families and merges them, IPv4 first.
    async fn lookup_ip(&self, host: &str) -> Result<LookupResult, DomainError>;
}
