#![allow(dead_code)]
#![allow(unused_imports)]
mod builders;
mod dns_server_mock;
mod fake_conn;

pub use builders::{MessageFixture, ResponseFixture};
pub use dns_server_mock::MockDnsServer;
pub use fake_conn::{counting_dial, ConnLog, FakeConn, FakeDialer};
