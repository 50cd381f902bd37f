//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GrowLightError`] via `#[from]` (or an explicit `From` impl in adapter
//! crates) when crossing a port boundary.

use crate::id::EntityId;

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum GrowLightError {
    /// Startup configuration was rejected.
    #[error("invalid configuration")]
    Configuration(#[from] ConfigurationError),

    /// The host does not know the requested entity.
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// The sensor reported a state that is not a usable number.
    #[error("sensor {entity_id} reported non-numeric state {state:?}")]
    InvalidReading { entity_id: EntityId, state: String },

    /// An integration-specific failure (transport, protocol, …).
    #[error("integration error")]
    Integration(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Fatal configuration problems detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// `uv_index_sensor` was not provided.
    #[error("UV index sensor not configured")]
    MissingSensor,

    /// `switches` was empty.
    #[error("no switches configured")]
    NoSwitches,

    /// An entity id did not have the `<domain>.<object_id>` shape.
    #[error("invalid entity id {0:?}, expected `<domain>.<object_id>`")]
    InvalidEntityId(String),

    /// A time-of-day string could not be parsed as `HH:MM`.
    #[error("{field} must be a HH:MM time, got {value:?}")]
    InvalidTime {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A window whose start is not strictly before its end.
    #[error("{season} window must start before it ends ({start} >= {end})")]
    EmptyWindow {
        season: &'static str,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
    },

    /// The UV threshold was `NaN` or infinite.
    #[error("uv_index_threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
}
