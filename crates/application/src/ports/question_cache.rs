use ferrous_dnscache_domain::{Answer, Question};

/// Answer store consulted and populated by the cache connection.
///
/// Implementations must tolerate any number of concurrent callers. `get`
/// never returns an expired answer and `set` never stores one.
pub trait QuestionCache: Send + Sync {
    fn get(&self, question: &Question) -> Option<Answer>;
    fn set(&self, question: Question, answer: Answer);
}

/// Snapshot of answer store counters for reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStatsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_evictions: u64,
    pub rejected_expired: u64,
    pub hit_rate: f64,
}

pub trait CacheStatsPort: Send + Sync {
    fn cache_size(&self) -> usize;
    fn cache_stats_snapshot(&self) -> CacheStatsSnapshot;
}
