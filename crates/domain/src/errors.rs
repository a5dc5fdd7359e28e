use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS query: {0}")]
    InvalidDnsQuery(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Cached IP address {address} is not the correct type for DNS {record_type} record for host {fqdn}")]
    AddressFamilyMismatch {
        fqdn: String,
        record_type: String,
        address: String,
    },

    #[error("Record type {found} in answer does not match question type {expected}")]
    RecordTypeMismatch { expected: String, found: String },

    #[error("No address records in DNS response")]
    NoAddressRecords,

    #[error("Response id {received} does not match query id {expected}")]
    ResponseIdMismatch { expected: u16, received: u16 },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error: {0}")]
    Transport(String),
}
