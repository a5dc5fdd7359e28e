use super::record_type_map::RecordTypeMapper;
use ferrous_dnscache_domain::{DomainError, Question};
use hickory_proto::op::Message;

/// How a well-formed query relates to the answer cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryShape {
    /// Exactly one A/AAAA question.
    Cacheable(Question),
    /// Question count other than one (zero included).
    MultiQuestion(usize),
    /// One question of a type the cache does not store; carries the wire code.
    UnsupportedType(u16),
}

/// A decoded client query, kept whole so a cached response can echo it.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    message: Message,
}

impl ParsedQuery {
    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn shape(&self) -> QueryShape {
        let queries = self.message.queries();
        if queries.len() != 1 {
            return QueryShape::MultiQuestion(queries.len());
        }

        let query = &queries[0];
        match RecordTypeMapper::from_hickory(query.query_type()) {
            Some(record_type) => {
                QueryShape::Cacheable(Question::new(&query.name().to_utf8(), record_type))
            }
            None => QueryShape::UnsupportedType(u16::from(query.query_type())),
        }
    }

    pub(crate) fn message(&self) -> &Message {
        &self.message
    }
}

pub struct QueryParser;

impl QueryParser {
    /// Decodes query bytes. Only structural damage is an error; unsupported
    /// shapes are reported through [`ParsedQuery::shape`].
    pub fn parse(query_bytes: &[u8]) -> Result<ParsedQuery, DomainError> {
        let message = Message::from_vec(query_bytes).map_err(|e| {
            DomainError::InvalidDnsQuery(format!("Failed to parse DNS query: {}", e))
        })?;

        Ok(ParsedQuery { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::codec::MessageBuilder;
    use ferrous_dnscache_domain::RecordType;
    use hickory_proto::op::{MessageType, OpCode, Query};
    use hickory_proto::rr::{Name, RecordType as HickoryRecordType};
    use std::str::FromStr;

    #[test]
    fn test_single_address_question_is_cacheable() {
        let bytes = MessageBuilder::build_query("Example.COM.", &RecordType::AAAA).unwrap();
        let parsed = QueryParser::parse(&bytes).unwrap();

        assert_eq!(
            parsed.shape(),
            QueryShape::Cacheable(Question::new("example.com.", RecordType::AAAA))
        );
        assert_eq!(parsed.id(), u16::from_be_bytes([bytes[0], bytes[1]]));
    }

    #[test]
    fn test_unsupported_type_is_reported_with_code() {
        let mut message = Message::new(7, MessageType::Query, OpCode::Query);
        message.add_query(Query::query(
            Name::from_str("example.com.").unwrap(),
            HickoryRecordType::MX,
        ));
        let bytes = message.to_vec().unwrap();

        let parsed = QueryParser::parse(&bytes).unwrap();
        assert_eq!(parsed.shape(), QueryShape::UnsupportedType(15));
    }

    #[test]
    fn test_question_count_other_than_one() {
        let mut message = Message::new(7, MessageType::Query, OpCode::Query);
        for host in ["a.example.", "b.example."] {
            message.add_query(Query::query(Name::from_str(host).unwrap(), HickoryRecordType::A));
        }
        let parsed = QueryParser::parse(&message.to_vec().unwrap()).unwrap();
        assert_eq!(parsed.shape(), QueryShape::MultiQuestion(2));

        let empty = Message::new(8, MessageType::Query, OpCode::Query);
        let parsed = QueryParser::parse(&empty.to_vec().unwrap()).unwrap();
        assert_eq!(parsed.shape(), QueryShape::MultiQuestion(0));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let result = QueryParser::parse(&[0x12, 0x34, 0x01]);
        assert!(matches!(result, Err(DomainError::InvalidDnsQuery(_))));
    }
}
