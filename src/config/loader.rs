use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::{Config, Settings};

/// Errors that can occur when loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error(
        "No shortening service configured. Pass --api-url, set LINKSNAP_API_URL, \
         or add [api] base_url to '{path}'"
    )]
    MissingBaseUrl { path: PathBuf },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/linksnap/config.toml` on Unix,
    /// or the platform equivalent via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("linksnap").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Intervals are non-zero
    /// - A configured base URL is http(s)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.toast_duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.toast_duration_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if let Some(base_url) = self.api.base_url.as_deref() {
            check_base_url(base_url)?;
        }

        Ok(())
    }

    /// Applies the command-line override and produces the final [`Settings`].
    ///
    /// `api_url` wins over the file. A missing or blank base URL is a
    /// startup error reported against `path`.
    pub fn resolve(&self, api_url: Option<&str>, path: &Path) -> Result<Settings, ConfigError> {
        let base_url = api_url
            .or(self.api.base_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingBaseUrl {
                path: path.to_path_buf(),
            })?;

        check_base_url(base_url)?;

        Ok(Settings {
            base_url: base_url.trim_end_matches('/').to_string(),
            toast_duration: Duration::from_millis(self.ui.toast_duration_ms),
            tick_rate: Duration::from_millis(self.ui.tick_rate_ms),
        })
    }
}

fn check_base_url(base_url: &str) -> Result<(), ConfigError> {
    let trimmed = base_url.trim();
    let has_scheme = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));

    if has_scheme {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: format!(
                "Base URL '{}' must start with http:// or https:// and name a host",
                base_url
            ),
        })
    }
}
