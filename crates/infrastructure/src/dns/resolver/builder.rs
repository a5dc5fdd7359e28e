use super::core::CachingResolver;
use crate::dns::transport::NetDialer;
use ferrous_dnscache_application::ports::{Dialer, QuestionCache};
use ferrous_dnscache_domain::Network;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub struct CachingResolverBuilder {
    upstream: SocketAddr,
    network: Network,
    timeout: Duration,
    dialer: Option<Arc<dyn Dialer>>,
    cache: Option<Arc<dyn QuestionCache>>,
}

impl CachingResolverBuilder {
    pub fn new(upstream: SocketAddr) -> Self {
        Self {
            upstream,
            network: Network::Udp,
            timeout: Duration::from_secs(2),
            dialer: None,
            cache: None,
        }
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_dialer(mut self, dialer: Arc<dyn Dialer>) -> Self {
        self.dialer = Some(dialer);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn QuestionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Arc<CachingResolver> {
        let dialer = self
            .dialer
            .unwrap_or_else(|| Arc::new(NetDialer::new(self.timeout)));

        Arc::new(CachingResolver::new(
            dialer,
            self.cache,
            self.upstream,
            self.network,
            self.timeout,
        ))
    }
}
