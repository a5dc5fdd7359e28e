pub mod cache;
pub mod lookup_host;

pub use cache::GetCacheStatsUseCase;
pub use lookup_host::LookupHostUseCase;
