//! Ferrous DNS Cache Domain Layer
pub mod answer;
pub mod config;
pub mod dns_protocol;
pub mod dns_record;
pub mod errors;
pub mod question;

pub use answer::Answer;
pub use config::{CliOverrides, Config};
pub use dns_protocol::Network;
pub use dns_record::{AddressRecord, RecordType};
pub use errors::DomainError;
pub use question::Question;
