#![allow(dead_code)]
#![allow(unused_imports)]
mod mocks;

pub use mocks::{MockCacheStats, MockHostResolver};
