//! Seasonal active-hours schedule.
//!
//! The year is split into two seasons by calendar month: summer (June to
//! August) and everything else. Each season has one time-of-day window
//! during which the UV-based rule applies. Outside it the lights are off.

use std::fmt;

use chrono::{Datelike, NaiveTime};

use crate::error::ConfigurationError;
use crate::time::Timestamp;

/// Which of the two configured windows applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// June, July and August.
    Summer,
    /// Every other month.
    OffSeason,
}

impl Season {
    /// Season for a calendar month (`1..=12`). Day-of-month plays no role.
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        if (6..=8).contains(&month) {
            Self::Summer
        } else {
            Self::OffSeason
        }
    }

    #[must_use]
    pub fn of(at: Timestamp) -> Self {
        Self::from_month(at.month())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summer => f.write_str("summer"),
            Self::OffSeason => f.write_str("off-season"),
        }
    }
}

/// Half-open time-of-day window `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl SeasonWindow {
    /// Create a window, requiring `start < end`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyWindow`] if the window is empty or
    /// would wrap past midnight.
    pub fn new(
        season: &'static str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, ConfigurationError> {
        if start >= end {
            return Err(ConfigurationError::EmptyWindow { season, start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether `time` falls in `[start, end)`.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl fmt::Display for SeasonWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// The pair of windows, one per [`Season`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalSchedule {
    summer: SeasonWindow,
    off_season: SeasonWindow,
}

impl SeasonalSchedule {
    #[must_use]
    pub fn new(summer: SeasonWindow, off_season: SeasonWindow) -> Self {
        Self { summer, off_season }
    }

    #[must_use]
    pub fn window(&self, season: Season) -> SeasonWindow {
        match season {
            Season::Summer => self.summer,
            Season::OffSeason => self.off_season,
        }
    }

    /// Window that applies on the date of `at`.
    #[must_use]
    pub fn window_at(&self, at: Timestamp) -> SeasonWindow {
        self.window(Season::of(at))
    }

    /// Whether `at` is inside the active hours of its season.
    #[must_use]
    pub fn is_active(&self, at: Timestamp) -> bool {
        self.window_at(at).contains(at.time())
    }
}

impl Default for SeasonalSchedule {
    /// 06:00–18:00 in summer, 09:00–15:00 otherwise.
    fn default() -> Self {
        Self {
            summer: SeasonWindow {
                start: hm(6, 0),
                end: hm(18, 0),
            },
            off_season: SeasonWindow {
                start: hm(9, 0),
                end: hm(15, 0),
            },
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
