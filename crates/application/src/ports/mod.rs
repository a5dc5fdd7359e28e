mod dialer;
mod dns_conn;
mod host_resolver;
mod question_cache;

pub use dialer::{DialFn, DialFuture, Dialer};
pub use dns_conn::DnsConn;
pub use host_resolver::{HostResolver, LookupResult};
pub use question_cache::{CacheStatsPort, CacheStatsSnapshot, QuestionCache};
