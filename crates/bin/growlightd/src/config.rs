//! Configuration loading — TOML file with environment variable overrides.
//!
//! Reads the file named by `GROWLIGHT_CONFIG`, falling back to
//! `growlight.toml` in the working directory. A missing default file means
//! "all defaults"; a missing file named explicitly is an error. Every field except the UV
//! sensor and the switch list has a default, so a minimal file only needs a
//! `[lights]` table. Environment variables take precedence over file values.

use std::time::Duration;

use growlight_adapter_homeassistant::HomeAssistantConfig;
use growlight_domain::error::ConfigurationError;
use growlight_domain::settings::{
    DEFAULT_OFF_SEASON_END, DEFAULT_OFF_SEASON_START, DEFAULT_ON_SEASON_END,
    DEFAULT_ON_SEASON_START, DEFAULT_UV_INDEX_THRESHOLD, Settings,
};
use serde::Deserialize;

const DEFAULT_PATH: &str = "growlight.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Which host the controller talks to.
    pub host: HostConfig,
    /// The grow-light rule itself.
    pub lights: LightsConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Host selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    #[default]
    HomeAssistant,
    Virtual,
}

/// Host adapter settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub kind: HostKind,
    pub home_assistant: HomeAssistantConfig,
    #[serde(rename = "virtual")]
    pub virtual_host: VirtualConfig,
}

/// Simulated host settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Initial simulated UV index; absent means "unavailable".
    pub uv_index: Option<f64>,
}

/// Raw grow-light rule settings, validated by [`LightsConfig::settings`].
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    pub uv_index_sensor: Option<String>,
    pub uv_index_threshold: f64,
    pub switches: Vec<String>,
    pub off_season_start: String,
    pub off_season_end: String,
    pub on_season_start: String,
    pub on_season_end: String,
    /// Seconds between two checks.
    pub check_interval_secs: u64,
}

impl LightsConfig {
    /// Parse and validate into domain [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    pub fn settings(&self) -> Result<Settings, ConfigurationError> {
        let mut builder = Settings::builder()
            .uv_index_threshold(self.uv_index_threshold)
            .switches(self.switches.iter().cloned())
            .off_season(self.off_season_start.as_str(), self.off_season_end.as_str())
            .on_season(self.on_season_start.as_str(), self.on_season_end.as_str());
        if let Some(sensor) = &self.uv_index_sensor {
            builder = builder.uv_index_sensor(sensor.as_str());
        }
        builder.build()
    }

    #[must_use]
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}

impl Config {
    /// Load configuration from the configured path (if present), apply
    /// environment-variable overrides, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if any
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("GROWLIGHT_CONFIG") {
            Ok(path) => Self::from_file(&path, true)?,
            Err(_) => Self::from_file(DEFAULT_PATH, false)?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GROWLIGHT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("GROWLIGHT_HA_URL") {
            self.host.home_assistant.url = val;
        }
        if let Ok(val) = std::env::var("GROWLIGHT_HA_TOKEN") {
            self.host.home_assistant.token = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lights.check_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "check_interval_secs must be non-zero".to_string(),
            ));
        }
        if self.host.kind == HostKind::HomeAssistant && self.host.home_assistant.token.is_empty() {
            return Err(ConfigError::Validation(
                "host.home_assistant.token is required".to_string(),
            ));
        }
        self.lights.settings()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "growlightd=info,growlight=info".to_string(),
        }
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            uv_index_sensor: None,
            uv_index_threshold: DEFAULT_UV_INDEX_THRESHOLD,
            switches: Vec::new(),
            off_season_start: DEFAULT_OFF_SEASON_START.to_string(),
            off_season_end: DEFAULT_OFF_SEASON_END.to_string(),
            on_season_start: DEFAULT_ON_SEASON_START.to_string(),
            on_season_end: DEFAULT_ON_SEASON_END.to_string(),
            check_interval_secs: 600,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The grow-light rule is misconfigured.
    #[error("invalid lights configuration")]
    Lights(#[from] ConfigurationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
