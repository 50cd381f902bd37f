//! Home Assistant connection configuration.

use serde::Deserialize;

/// Configuration for the Home Assistant REST client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HomeAssistantConfig {
    /// Base URL of the Home Assistant instance, without the `/api` suffix.
    pub url: String,
    /// Long-lived access token.
    pub token: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for HomeAssistantConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8123".to_string(),
            token: String::new(),
            timeout_secs: 10,
        }
    }
}
