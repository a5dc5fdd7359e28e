use super::RecordType;
use std::net::IpAddr;

/// One A/AAAA record as it appeared in the answer section of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub record_type: RecordType,

    pub address: IpAddr,

    pub ttl: u32,
}

impl AddressRecord {
    pub fn new(record_type: RecordType, address: IpAddr, ttl: u32) -> Self {
        Self {
            record_type,
            address,
            ttl,
        }
    }

    /// Whether the record's address family agrees with its declared type.
    pub fn is_consistent(&self) -> bool {
        self.record_type.matches(&self.address)
    }
}
