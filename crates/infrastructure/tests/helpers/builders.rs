#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::IpAddr;
use std::str::FromStr;

/// Query messages in wire format.
pub struct MessageFixture;

impl MessageFixture {
    pub fn query(id: u16, host: &str, record_type: RecordType) -> Vec<u8> {
        Self::multi_query(id, &[(host, record_type)])
    }

    pub fn multi_query(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        for (host, record_type) in questions {
            message.add_query(Query::query(Name::from_str(host).unwrap(), *record_type));
        }
        message.to_vec().unwrap()
    }
}

/// Upstream responses in wire format.
pub struct ResponseFixture {
    message: Message,
}

impl ResponseFixture {
    pub fn for_query(query: &[u8]) -> Self {
        let mut message = Message::from_vec(query).unwrap().to_response();
        message.set_recursion_available(true);
        Self { message }
    }

    pub fn new(id: u16, host: &str, record_type: RecordType) -> Self {
        Self::for_query(&MessageFixture::query(id, host, record_type))
    }

    pub fn address(mut self, host: &str, ip: &str, ttl: u32) -> Self {
        let ip: IpAddr = ip.parse().unwrap();
        let rdata = match ip {
            IpAddr::V4(v4) => RData::A(A(v4)),
            IpAddr::V6(v6) => RData::AAAA(AAAA(v6)),
        };
        self.message
            .add_answer(Record::from_rdata(Name::from_str(host).unwrap(), ttl, rdata));
        self
    }

    pub fn cname(mut self, host: &str, target: &str, ttl: u32) -> Self {
        let rdata = RData::CNAME(CNAME(Name::from_str(target).unwrap()));
        self.message
            .add_answer(Record::from_rdata(Name::from_str(host).unwrap(), ttl, rdata));
        self
    }

    pub fn recursion_available(mut self, available: bool) -> Self {
        self.message.set_recursion_available(available);
        self
    }

    pub fn truncated(mut self) -> Self {
        self.message.set_truncated(true);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.message.to_vec().unwrap()
    }
}
