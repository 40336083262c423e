use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Caching resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Authority every walk starts from (`address[:port]`)
    #[serde(default = "default_root_authority")]
    pub root_authority: String,

    /// Maximum age of a cached record in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,

    /// How long to wait for a single authority reply
    #[serde(default = "default_hop_timeout_ms")]
    pub hop_timeout_ms: u64,

    /// Budget for a whole walk across all hops
    #[serde(default = "default_resolution_timeout_ms")]
    pub resolution_timeout_ms: u64,

    /// NS redirects followed before giving up
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,
}

impl ResolverConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn hop_timeout(&self) -> Duration {
        Duration::from_millis(self.hop_timeout_ms)
    }

    pub fn resolution_timeout(&self) -> Duration {
        Duration::from_millis(self.resolution_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_authority: default_root_authority(),
            cache_ttl: default_cache_ttl(),
            hop_timeout_ms: default_hop_timeout_ms(),
            resolution_timeout_ms: default_resolution_timeout_ms(),
            max_hops: default_max_hops(),
        }
    }
}

fn default_root_authority() -> String {
    "127.0.0.1:53".to_string()
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_hop_timeout_ms() -> u64 {
    2000
}

fn default_resolution_timeout_ms() -> u64 {
    10_000
}

fn default_max_hops() -> usize {
    16
}
