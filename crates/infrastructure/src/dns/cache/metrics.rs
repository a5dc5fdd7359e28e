use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

// align(64) ensures the struct starts on a cache-line boundary so that `hits`
// and `misses` are always on their own line, never split with cold counters.
#[derive(Default)]
#[repr(align(64))]
pub struct CacheMetrics {
    // Hot counters, bumped on every lookup.
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    _hot_pad: [u64; 6],

    // Cold counters.
    pub insertions: AtomicU64,
    pub lazy_evictions: AtomicU64,
    pub rejected_expired: AtomicU64,
}

impl CacheMetrics {
    pub fn hits(&self) -> u64 {
        self.hits.load(AtomicOrdering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(AtomicOrdering::Relaxed)
    }

    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}
