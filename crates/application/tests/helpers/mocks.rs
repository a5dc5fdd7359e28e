#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dnscache_application::ports::{
    CacheStatsPort, CacheStatsSnapshot, HostResolver, LookupResult,
};
use ferrous_dnscache_domain::{DomainError, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockHostResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), Vec<IpAddr>>>>,
    error: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, host: &str, record_type: RecordType, ips: &[&str]) {
        let ips = ips.iter().map(|ip| ip.parse().unwrap()).collect();
        self.responses
            .write()
            .unwrap()
            .insert((host.to_string(), record_type), ips);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.write().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, host: &str, record_type: RecordType) -> Result<Vec<IpAddr>, DomainError> {
        if let Some(err) = self.error.read().unwrap().clone() {
            return Err(err);
        }
        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&(host.to_string(), record_type))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn lookup(&self, host: &str, record_type: RecordType) -> Result<LookupResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LookupResult::new(host, self.answer(host, record_type)?))
    }

    async fn lookup_ip(&self, host: &str) -> Result<LookupResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut addresses = self.answer(host, RecordType::A)?;
        addresses.extend(self.answer(host, RecordType::AAAA)?);
        Ok(LookupResult::new(host, addresses))
    }
}

pub struct MockCacheStats {
    pub snapshot: CacheStatsSnapshot,
}

impl CacheStatsPort for MockCacheStats {
    fn cache_size(&self) -> usize {
        self.snapshot.total_entries
    }

    fn cache_stats_snapshot(&self) -> CacheStatsSnapshot {
        self.snapshot.clone()
    }
}
