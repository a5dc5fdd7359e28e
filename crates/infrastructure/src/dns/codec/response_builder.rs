use super::message_builder::serialize_message;
use super::query_parser::ParsedQuery;
use ferrous_dnscache_domain::{Answer, DomainError, Question};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;

/// Synthesizes responses for queries answered from the cache.
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Echoes `query` (id, flags, question, additional section) as a response
    /// carrying one record per cached address.
    ///
    /// Record TTLs are the answer's TTL in whole seconds. An address whose
    /// family disagrees with `question` means the cache entry is corrupt and
    /// is reported as [`DomainError::AddressFamilyMismatch`].
    pub fn build_cached(
        query: &ParsedQuery,
        question: &Question,
        answer: &Answer,
    ) -> Result<Vec<u8>, DomainError> {
        let original = query.message().queries().first().ok_or_else(|| {
            DomainError::InvalidDnsQuery("Query carries no question".to_string())
        })?;

        answer.validate_for(question)?;

        let ttl = answer.ttl_secs();
        let mut response = query.message().to_response();

        for ip in answer.addresses.iter() {
            let rdata = match ip {
                IpAddr::V4(v4) => RData::A(A(*v4)),
                IpAddr::V6(v6) => RData::AAAA(AAAA(*v6)),
            };

            let mut record = Record::from_rdata(original.name().clone(), ttl, rdata);
            record.set_dns_class(original.query_class());
            response.add_answer(record);
        }

        serialize_message(&response)
    }
}
