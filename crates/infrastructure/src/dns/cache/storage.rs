use super::CacheMetrics;
use dashmap::DashMap;
use ferrous_dnscache_application::ports::{CacheStatsPort, CacheStatsSnapshot, QuestionCache};
use ferrous_dnscache_domain::{Answer, Question};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct QuestionCacheConfig {
    /// Power of two greater than one.
    pub shard_amount: usize,
}

impl Default for QuestionCacheConfig {
    fn default() -> Self {
        Self { shard_amount: 16 }
    }
}

/// In-memory answer store with lazy, per-key expiration.
///
/// Entries are only ever checked for expiry when looked up; there is no
/// sweeper, so an answer that is never asked for again stays resident.
pub struct QuestionCacheStore {
    cache: DashMap<Question, Answer, FxBuildHasher>,
    metrics: Arc<CacheMetrics>,
}

impl QuestionCacheStore {
    pub fn new(config: QuestionCacheConfig) -> Self {
        info!(shard_amount = config.shard_amount, "Initializing answer cache");

        Self {
            cache: DashMap::with_hasher_and_shard_amount(FxBuildHasher, config.shard_amount),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Raw presence check that neither counts nor evicts.
    pub fn contains(&self, question: &Question) -> bool {
        self.cache.contains_key(question)
    }

    /// Lookup evaluated against `now`.
    pub fn get_at(&self, question: &Question, now: Instant) -> Option<Answer> {
        let expired = match self.cache.get(question) {
            Some(entry) if !entry.is_expired_at(now) => {
                let answer = entry.value().clone();
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(answer);
            }
            Some(_) => true,
            None => false,
        };

        // The read guard is gone by now. Only remove the slot if it still
        // holds an expired answer, so a concurrent `set` is never discarded.
        if expired
            && self
                .cache
                .remove_if(question, |_, answer| answer.is_expired_at(now))
                .is_some()
        {
            self.metrics
                .lazy_evictions
                .fetch_add(1, AtomicOrdering::Relaxed);
            debug!(question = %question, "Evicted expired answer");
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Insert evaluated against `now`; answers already expired are dropped.
    pub fn set_at(&self, question: Question, answer: Answer, now: Instant) {
        if answer.is_expired_at(now) {
            self.metrics
                .rejected_expired
                .fetch_add(1, AtomicOrdering::Relaxed);
            debug!(question = %question, "Ignoring already expired answer");
            return;
        }

        debug!(
            question = %question,
            ttl = answer.ttl_secs(),
            addresses = answer.addresses.len(),
            "Inserted answer into cache"
        );
        self.cache.insert(question, answer);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }
}

impl Default for QuestionCacheStore {
    fn default() -> Self {
        Self::new(QuestionCacheConfig::default())
    }
}

impl QuestionCache for QuestionCacheStore {
    fn get(&self, question: &Question) -> Option<Answer> {
        self.get_at(question, Instant::now())
    }

    fn set(&self, question: Question, answer: Answer) {
        self.set_at(question, answer, Instant::now())
    }
}

impl CacheStatsPort for QuestionCacheStore {
    fn cache_size(&self) -> usize {
        self.len()
    }

    fn cache_stats_snapshot(&self) -> CacheStatsSnapshot {
        let m = &self.metrics;
        CacheStatsSnapshot {
            total_entries: self.len(),
            hits: m.hits(),
            misses: m.misses(),
            insertions: m.insertions.load(AtomicOrdering::Relaxed),
            lazy_evictions: m.lazy_evictions.load(AtomicOrdering::Relaxed),
            rejected_expired: m.rejected_expired.load(AtomicOrdering::Relaxed),
            hit_rate: m.hit_rate(),
        }
    }
}
