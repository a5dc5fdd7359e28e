use crate::{AddressRecord, DomainError, Question};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cached result for a [`Question`].
///
/// Every address belongs to the family of the question that produced it.
/// An answer is expired once `fetched_at + ttl` is no longer in the future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub fetched_at: Instant,

    pub ttl: Duration,

    pub addresses: Arc<Vec<IpAddr>>,
}

impl Answer {
    pub fn new(fetched_at: Instant, ttl: Duration, addresses: Vec<IpAddr>) -> Self {
        Self {
            fetched_at,
            ttl,
            addresses: Arc::new(addresses),
        }
    }

    /// Builds an answer from the address records of a response to `question`.
    ///
    /// The TTL comes from the first record only; later records' TTLs are not
    /// consulted. Every record must carry the question's type and a matching
    /// address family.
    pub fn from_records(
        question: &Question,
        records: &[AddressRecord],
        fetched_at: Instant,
    ) -> Result<Self, DomainError> {
        let first = records.first().ok_or(DomainError::NoAddressRecords)?;

        let mut addresses = Vec::with_capacity(records.len());
        for record in records {
            if record.record_type != question.record_type() {
                return Err(DomainError::RecordTypeMismatch {
                    expected: question.record_type().to_string(),
                    found: record.record_type.to_string(),
                });
            }
            if !record.is_consistent() {
                return Err(address_mismatch(question, &record.address));
            }
            addresses.push(record.address);
        }

        Ok(Self::new(
            fetched_at,
            Duration::from_secs(u64::from(first.ttl)),
            addresses,
        ))
    }

    /// `None` when the deadline does not fit in an `Instant`, i.e. never expires.
    pub fn expires_at(&self) -> Option<Instant> {
        self.fetched_at.checked_add(self.ttl)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at() {
            Some(deadline) => deadline <= now,
            None => false,
        }
    }

    /// TTL truncated to whole seconds, as carried in a resource record.
    pub fn ttl_secs(&self) -> u32 {
        u32::try_from(self.ttl.as_secs()).unwrap_or(u32::MAX)
    }

    /// Checks every address against the record type encoded in `question`.
    pub fn validate_for(&self, question: &Question) -> Result<(), DomainError> {
        let record_type = question.record_type();
        match self.addresses.iter().find(|ip| !record_type.matches(ip)) {
            Some(ip) => Err(address_mismatch(question, ip)),
            None => Ok(()),
        }
    }
}

fn address_mismatch(question: &Question, address: &IpAddr) -> DomainError {
    DomainError::AddressFamilyMismatch {
        fqdn: question.fqdn().to_string(),
        record_type: question.record_type().to_string(),
        address: address.to_string(),
    }
}
