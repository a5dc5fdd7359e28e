pub mod message_builder;
pub mod query_parser;
pub mod record_type_map;
pub mod response_builder;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use query_parser::{ParsedQuery, QueryParser, QueryShape};
pub use record_type_map::RecordTypeMapper;
pub use response_builder::ResponseBuilder;
pub use response_parser::{ParsedResponse, ResponseParser};
