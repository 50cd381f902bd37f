//! Validated grow-light settings.
//!
//! Raw configuration arrives as strings; [`SettingsBuilder::build`] parses
//! every time of day and entity id once, so per-tick evaluation never touches
//! strings.

use crate::error::ConfigurationError;
use crate::id::EntityId;
use crate::schedule::{SeasonWindow, SeasonalSchedule};
use crate::time::parse_time_of_day;

pub const DEFAULT_UV_INDEX_THRESHOLD: f64 = 5.0;
pub const DEFAULT_OFF_SEASON_START: &str = "09:00";
pub const DEFAULT_OFF_SEASON_END: &str = "15:00";
pub const DEFAULT_ON_SEASON_START: &str = "06:00";
pub const DEFAULT_ON_SEASON_END: &str = "18:00";

/// Immutable rule configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub uv_index_sensor: EntityId,
    pub uv_index_threshold: f64,
    pub switches: Vec<EntityId>,
    pub schedule: SeasonalSchedule,
}

impl Settings {
    /// Create a builder pre-filled with the default threshold and windows.
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }
}

/// Step-by-step builder for [`Settings`].
#[derive(Debug)]
pub struct SettingsBuilder {
    uv_index_sensor: Option<String>,
    uv_index_threshold: f64,
    switches: Vec<String>,
    off_season_start: String,
    off_season_end: String,
    on_season_start: String,
    on_season_end: String,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            uv_index_sensor: None,
            uv_index_threshold: DEFAULT_UV_INDEX_THRESHOLD,
            switches: Vec::new(),
            off_season_start: DEFAULT_OFF_SEASON_START.to_string(),
            off_season_end: DEFAULT_OFF_SEASON_END.to_string(),
            on_season_start: DEFAULT_ON_SEASON_START.to_string(),
            on_season_end: DEFAULT_ON_SEASON_END.to_string(),
        }
    }
}

impl SettingsBuilder {
    #[must_use]
    pub fn uv_index_sensor(mut self, entity_id: impl Into<String>) -> Self {
        self.uv_index_sensor = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn uv_index_threshold(mut self, threshold: f64) -> Self {
        self.uv_index_threshold = threshold;
        self
    }

    #[must_use]
    pub fn switch(mut self, entity_id: impl Into<String>) -> Self {
        self.switches.push(entity_id.into());
        self
    }

    #[must_use]
    pub fn switches<I, S>(mut self, entity_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.switches.extend(entity_ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn off_season(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.off_season_start = start.into();
        self.off_season_end = end.into();
        self
    }

    #[must_use]
    pub fn on_season(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.on_season_start = start.into();
        self.on_season_end = end.into();
        self
    }

    /// Consume the builder, parse and validate every field.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when:
    /// - the sensor is missing or blank ([`ConfigurationError::MissingSensor`])
    /// - no switches are given ([`ConfigurationError::NoSwitches`])
    /// - an entity id is malformed ([`ConfigurationError::InvalidEntityId`])
    /// - a time is not `HH:MM` ([`ConfigurationError::InvalidTime`])
    /// - a window does not start before it ends ([`ConfigurationError::EmptyWindow`])
    /// - the threshold is not finite ([`ConfigurationError::InvalidThreshold`])
    pub fn build(self) -> Result<Settings, ConfigurationError> {
        let uv_index_sensor = match self.uv_index_sensor.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigurationError::MissingSensor),
            Some(raw) => raw.parse::<EntityId>()?,
        };

        if self.switches.is_empty() {
            return Err(ConfigurationError::NoSwitches);
        }
        let switches = self
            .switches
            .iter()
            .map(|raw| raw.trim().parse::<EntityId>())
            .collect::<Result<Vec<_>, _>>()?;

        if !self.uv_index_threshold.is_finite() {
            return Err(ConfigurationError::InvalidThreshold(self.uv_index_threshold));
        }

        let summer = SeasonWindow::new(
            "summer",
            parse_time_of_day("on_season_start", &self.on_season_start)?,
            parse_time_of_day("on_season_end", &self.on_season_end)?,
        )?;
        let off_season = SeasonWindow::new(
            "off-season",
            parse_time_of_day("off_season_start", &self.off_season_start)?,
            parse_time_of_day("off_season_end", &self.off_season_end)?,
        )?;

        Ok(Settings {
            uv_index_sensor,
            uv_index_threshold: self.uv_index_threshold,
            switches,
            schedule: SeasonalSchedule::new(summer, off_season),
        })
    }
}
