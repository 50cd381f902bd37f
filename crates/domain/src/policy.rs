//! The grow-light decision: season → active hours → UV threshold.
//!
//! [`Settings::decide`] is a pure function of the timestamp and the UV
//! reading. Callers are expected to check [`Settings::is_active`] first and
//! skip the sensor read entirely when it returns `false`; `decide` still
//! returns [`Decision::OutsideActiveHours`] for such timestamps whatever
//! reading it is handed.

use std::fmt;

use crate::settings::Settings;
use crate::state::{SwitchState, UvReading};
use crate::time::Timestamp;

/// Outcome of one evaluation, with the reason it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Outside the season's window: lights off, sensor not consulted.
    OutsideActiveHours,
    /// Inside the window and the sensor could not be read: lights on.
    SensorUnavailable,
    /// UV below the threshold: lights on.
    BelowThreshold { uv_index: f64, threshold: f64 },
    /// UV at or above the threshold: lights off.
    AtOrAboveThreshold { uv_index: f64, threshold: f64 },
}

impl Decision {
    #[must_use]
    pub fn desired_state(&self) -> SwitchState {
        match self {
            Self::SensorUnavailable | Self::BelowThreshold { .. } => SwitchState::On,
            Self::OutsideActiveHours | Self::AtOrAboveThreshold { .. } => SwitchState::Off,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideActiveHours => f.write_str("outside active hours"),
            Self::SensorUnavailable => f.write_str("UV index unavailable, failing open"),
            Self::BelowThreshold {
                uv_index,
                threshold,
            } => write!(f, "UV index {uv_index} < {threshold}"),
            Self::AtOrAboveThreshold {
                uv_index,
                threshold,
            } => write!(f, "UV index {uv_index} >= {threshold}"),
        }
    }
}

impl Settings {
    /// Whether `at` lies inside the active window of its season.
    #[must_use]
    pub fn is_active(&self, at: Timestamp) -> bool {
        self.schedule.is_active(at)
    }

    /// Decide the desired switch state for `at` given `reading`.
    #[must_use]
    pub fn decide(&self, at: Timestamp, reading: UvReading) -> Decision {
        if !self.is_active(at) {
            return Decision::OutsideActiveHours;
        }
        let threshold = self.uv_index_threshold;
        match reading {
            UvReading::Unavailable => Decision::SensorUnavailable,
            UvReading::Value(uv_index) if uv_index < threshold => Decision::BelowThreshold {
                uv_index,
                threshold,
            },
            UvReading::Value(uv_index) => Decision::AtOrAboveThreshold {
                uv_index,
                threshold,
            },
        }
    }
}
