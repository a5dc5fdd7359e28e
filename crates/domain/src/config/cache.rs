use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// When false every query goes straight to the upstream transport.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of map shards; must be a power of two greater than one.
    #[serde(default = "default_shard_amount")]
    pub shard_amount: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            shard_amount: default_shard_amount(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_shard_amount() -> usize {
    16
}
