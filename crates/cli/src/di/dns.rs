use ferrous_dnscache_application::ports::{CacheStatsPort, HostResolver};
use ferrous_dnscache_domain::Config;
use ferrous_dnscache_infrastructure::dns::{
    cache::{QuestionCacheConfig, QuestionCacheStore},
    resolver::CachingResolverBuilder,
    transport::NetDialer,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<dyn HostResolver>,
    pub cache: Arc<dyn CacheStatsPort>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = config.upstream.socket_addr()?;
        let network = config.upstream.network()?;
        let timeout = config.upstream.timeout();

        let cache = Arc::new(QuestionCacheStore::new(QuestionCacheConfig {
            shard_amount: config.cache.shard_amount,
        }));

        let mut builder = CachingResolverBuilder::new(upstream)
            .with_network(network)
            .with_timeout(timeout)
            .with_dialer(Arc::new(NetDialer::new(timeout)));

        if config.cache.enabled {
            builder = builder.with_cache(cache.clone());
        } else {
            info!("Answer cache disabled, every query goes upstream");
        }

        Ok(Self {
            resolver: builder.build(),
            cache,
        })
    }
}
