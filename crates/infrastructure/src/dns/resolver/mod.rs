pub mod builder;
mod client;
pub mod core;

pub use builder::CachingResolverBuilder;
pub use core::CachingResolver;
