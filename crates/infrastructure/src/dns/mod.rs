pub mod cache;
pub mod codec;
pub mod conn;
pub mod resolver;
pub mod transport;

pub use cache::{CacheMetrics, QuestionCacheConfig, QuestionCacheStore};
pub use conn::{CacheConn, CacheConnError};
pub use resolver::{CachingResolver, CachingResolverBuilder};
pub use transport::{NetDialer, TcpConn, UdpConn};
