use crate::ports::{CacheStatsPort, CacheStatsSnapshot};
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn CacheStatsPort>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn CacheStatsPort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheStatsSnapshot {
        self.cache.cache_stats_snapshot()
    }

    /// Entry count alone, without reading the counters.
    pub fn cache_size(&self) -> usize {
        self.cache.cache_size()
    }
}
