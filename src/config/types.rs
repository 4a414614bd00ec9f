use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container, as stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the shortening service lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "https://ln.app"). `/api/shorten` is appended.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Presentation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notification stays up before dismissing itself (default: 6000).
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Redraw and spinner tick interval (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_toast_duration_ms() -> u64 {
    6000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Configuration after overrides are applied, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub toast_duration: Duration,
    pub tick_rate: Duration,
}
