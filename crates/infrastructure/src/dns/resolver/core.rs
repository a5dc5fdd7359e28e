use super::client::{exchange, map_io_error, validate_response_id};
use crate::dns::codec::{MessageBuilder, ResponseParser};
use crate::dns::conn::CacheConn;
use async_trait::async_trait;
use ferrous_dnscache_application::ports::{
    DialFn, Dialer, DnsConn, HostResolver, LookupResult, QuestionCache,
};
use ferrous_dnscache_domain::{DomainError, Network, RecordType};
use futures::FutureExt;
use hickory_proto::op::ResponseCode;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Resolution client whose datagram connections go through the answer cache.
///
/// Built once through [`super::CachingResolverBuilder`] and shared by `Arc`.
pub struct CachingResolver {
    dialer: Arc<dyn Dialer>,
    cache: Option<Arc<dyn QuestionCache>>,
    upstream: SocketAddr,
    network: Network,
    timeout: Duration,
}

impl CachingResolver {
    pub(super) fn new(
        dialer: Arc<dyn Dialer>,
        cache: Option<Arc<dyn QuestionCache>>,
        upstream: SocketAddr,
        network: Network,
        timeout: Duration,
    ) -> Self {
        info!(
            upstream = %upstream,
            network = %network,
            timeout_ms = timeout.as_millis() as u64,
            cache = cache.is_some(),
            "Caching resolver created"
        );

        Self {
            dialer,
            cache,
            upstream,
            network,
            timeout,
        }
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Dial hook for the resolution client.
    ///
    /// Datagram networks get a [`CacheConn`] that dials lazily; stream
    /// networks, or a resolver built without a cache, get the real socket.
    pub async fn dial(&self, network: Network, addr: SocketAddr) -> io::Result<Box<dyn DnsConn>> {
        match &self.cache {
            Some(cache) if network.is_datagram() => {
                let dialer = Arc::clone(&self.dialer);
                let dial: DialFn =
                    Box::new(move || async move { dialer.dial(network, addr).await }.boxed());
                Ok(Box::new(CacheConn::new(Arc::clone(cache), dial)))
            }
            _ => self.dialer.dial(network, addr).await,
        }
    }

    async fn query(&self, host: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let (id, query) = MessageBuilder::build_query_with_id(host, &record_type)?;
        let deadline = Instant::now() + self.timeout;

        let mut conn = self
            .dial(self.network, self.upstream)
            .await
            .map_err(map_io_error)?;

        let response = exchange(conn.as_mut(), &query, !self.network.is_datagram(), deadline)
            .await
            .map_err(map_io_error)?;

        validate_response_id(id, &response, self.upstream)?;
        Ok(response)
    }
}

#[async_trait]
impl HostResolver for CachingResolver {
    async fn lookup(&self, host: &str, record_type: RecordType) -> Result<LookupResult, DomainError> {
        debug!(host = %host, record_type = %record_type, "Resolving host");

        let response = self.query(host, record_type).await?;
        let parsed = ResponseParser::parse(&response)?;

        if parsed.rcode != ResponseCode::NoError {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} for {} {}",
                ResponseParser::rcode_to_status(parsed.rcode),
                host,
                record_type
            )));
        }

        let addresses = parsed
            .addresses()
            .into_iter()
            .filter(|ip| record_type.matches(ip))
            .collect::<Vec<_>>();

        debug!(
            host = %host,
            record_type = %record_type,
            addresses = addresses.len(),
            "Host resolved"
        );

        Ok(LookupResult::new(host, addresses))
    }

    async fn lookup_ip(&self, host: &str) -> Result<LookupResult, DomainError> {
        let (v4, v6) = tokio::join!(
            self.lookup(host, RecordType::A),
            self.lookup(host, RecordType::AAAA)
        );

        match (v4, v6) {
            (Ok(mut v4), Ok(v6)) => {
                v4.addresses.extend(v6.addresses);
                Ok(v4)
            }
            (Ok(result), Err(e)) | (Err(e), Ok(result)) => {
                debug!(host = %host, error = %e, "One address family failed to resolve");
                Ok(result)
            }
            (Err(e), Err(_)) => Err(e),
        }
    }
}
