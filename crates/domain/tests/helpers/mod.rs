#![allow(dead_code)]
use ferrous_dnscache_domain::Answer;
use std::net::IpAddr;
use std::time::{Duration, Instant};

pub struct AnswerBuilder {
    fetched_at: Instant,
    ttl: Duration,
    addresses: Vec<IpAddr>,
}

impl AnswerBuilder {
    pub fn new() -> Self {
        Self {
            fetched_at: Instant::now(),
            ttl: Duration::from_secs(300),
            addresses: vec!["192.0.2.1".parse().unwrap()],
        }
    }

    pub fn fetched_secs_ago(mut self, secs: u64) -> Self {
        self.fetched_at = Instant::now()
            .checked_sub(Duration::from_secs(secs))
            .expect("monotonic clock too close to its origin");
        self
    }

    pub fn ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Duration::from_secs(secs);
        self
    }

    pub fn address(mut self, ip: &str) -> Self {
        self.addresses.push(ip.parse().unwrap());
        self
    }

    pub fn build(self) -> Answer {
        Answer::new(self.fetched_at, self.ttl, self.addresses)
    }
}
