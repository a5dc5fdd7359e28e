use super::errors::ConfigError;
use crate::Network;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Upstream resolver as `ip:port`.
    #[serde(default = "default_address")]
    pub address: String,

    /// Dial network for queries: udp, udp4, udp6, tcp, tcp4 or tcp6.
    #[serde(default = "default_network")]
    pub network: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address.parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid upstream address '{}': {}",
                self.address, e
            ))
        })
    }

    pub fn network(&self) -> Result<Network, ConfigError> {
        self.network.parse().map_err(ConfigError::Validation)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            network: default_network(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_address() -> String {
    "1.1.1.1:53".to_string()
}

fn default_network() -> String {
    "udp".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
