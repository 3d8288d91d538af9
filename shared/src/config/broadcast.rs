//! Real-time broadcast configuration

use serde::{Deserialize, Serialize};

/// Redis pub/sub configuration for the real-time fan-out channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BroadcastConfig {
    /// Redis connection URL
    pub url: String,

    /// Prefix applied to every published channel name
    #[serde(default = "default_channel_prefix")]
    pub channel_prefix: String,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            channel_prefix: default_channel_prefix(),
        }
    }
}

impl BroadcastConfig {
    /// Read `REDIS_URL` from the environment, defaulting to localhost
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("REDIS_URL") {
            config.url = url;
        }
        config
    }
}

fn default_channel_prefix() -> String {
    String::from("taskboard")
}
