use super::DnsServices;
use ferrous_dnscache_application::use_cases::{GetCacheStatsUseCase, LookupHostUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub lookup_host: Arc<LookupHostUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}

impl UseCases {
    pub fn new(dns: &DnsServices) -> Self {
        Self {
            lookup_host: Arc::new(LookupHostUseCase::new(dns.resolver.clone())),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(dns.cache.clone())),
        }
    }
}
