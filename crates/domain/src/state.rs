//! Switch state and UV sensor readings.

use serde::{Deserialize, Serialize};

/// Desired on/off state of a grow-light switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Name of the host service that puts a switch into this state.
    #[must_use]
    pub fn service(self) -> &'static str {
        match self {
            Self::On => "turn_on",
            Self::Off => "turn_off",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl std::fmt::Display for SwitchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// Current value of the UV-index sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UvReading {
    Value(f64),
    /// The host reports the sensor as `unavailable` or `unknown`.
    Unavailable,
}
