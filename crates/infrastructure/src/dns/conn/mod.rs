pub mod cache_conn;
pub mod error;

pub use cache_conn::CacheConn;
pub use error::CacheConnError;
