use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Base of the aggregator endpoint; `domain` and `sz` are appended.
    #[serde(default = "default_aggregator_url")]
    pub aggregator_url: String,

    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    /// Head start given to the aggregator before the direct-site fetch begins.
    #[serde(default = "default_direct_fetch_delay_ms")]
    pub direct_fetch_delay_ms: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_resource_timeout_secs")]
    pub resource_timeout_secs: u64,
}

impl ResolverConfig {
    pub fn direct_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.direct_fetch_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn resource_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            aggregator_url: default_aggregator_url(),
            icon_size: default_icon_size(),
            direct_fetch_delay_ms: default_direct_fetch_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            resource_timeout_secs: default_resource_timeout_secs(),
        }
    }
}

fn default_cache_capacity() -> usize {
    256
}

fn default_aggregator_url() -> String {
    "https://www.google.com/s2/favicons".to_string()
}

fn default_icon_size() -> u32 {
    64
}

fn default_direct_fetch_delay_ms() -> u64 {
    150
}

fn default_request_timeout_secs() -> u64 {
    4
}

fn default_resource_timeout_secs() -> u64 {
    6
}
