use super::record_type_map::RecordTypeMapper;
use ferrous_dnscache_domain::{AddressRecord, DomainError, Question, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// One entry per question; `None` where the type is not cacheable.
    pub questions: Vec<Option<Question>>,

    /// A/AAAA records from the answer section, in wire order.
    pub records: Vec<AddressRecord>,

    /// Answer-section records of any other type (CNAME chains and the like).
    pub other_answers: usize,
}

impl ParsedResponse {
    /// Cache key for responses carrying exactly one A/AAAA question.
    pub fn single_question(&self) -> Option<Question> {
        match self.questions.as_slice() {
            [Some(question)] => Some(question.clone()),
            _ => None,
        }
    }

    pub fn addresses(&self) -> Vec<IpAddr> {
        self.records.iter().map(|r| r.address).collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let questions = message
            .queries()
            .iter()
            .map(|q| {
                RecordTypeMapper::from_hickory(q.query_type())
                    .map(|rt| Question::new(&q.name().to_utf8(), rt))
            })
            .collect();

        let mut records = Vec::new();
        let mut other_answers = 0;

        for record in message.answers() {
            match record.data() {
                RData::A(a) => {
                    records.push(AddressRecord::new(
                        RecordType::A,
                        IpAddr::V4(a.0),
                        record.ttl(),
                    ));
                }
                RData::AAAA(aaaa) => {
                    records.push(AddressRecord::new(
                        RecordType::AAAA,
                        IpAddr::V6(aaaa.0),
                        record.ttl(),
                    ));
                }
                _ => other_answers += 1,
            }
        }

        let parsed = ParsedResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            questions,
            records,
            other_answers,
        };

        debug!(
            id = parsed.id,
            rcode = ?parsed.rcode,
            addresses = parsed.records.len(),
            other_answers = parsed.other_answers,
            truncated = parsed.truncated,
            "DNS response parsed"
        );

        Ok(parsed)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
