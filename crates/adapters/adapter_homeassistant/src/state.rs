//! `GET /api/states/<entity_id>` response body.

use growlight_domain::id::EntityId;
use growlight_domain::state::UvReading;
use serde::Deserialize;

use crate::error::HomeAssistantError;

/// The part of a Home Assistant state object this adapter needs.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityStateResponse {
    pub entity_id: String,
    pub state: String,
}

impl EntityStateResponse {
    /// Interpret the state string as a UV index.
    ///
    /// `unavailable` and `unknown` map to [`UvReading::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeAssistantError::InvalidState`] when the state is neither
    /// a marker nor a finite number.
    pub fn uv_reading(&self, entity_id: &EntityId) -> Result<UvReading, HomeAssistantError> {
        match self.state.trim() {
            "unavailable" | "unknown" => Ok(UvReading::Unavailable),
            raw => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(UvReading::Value)
                .ok_or_else(|| HomeAssistantError::InvalidState {
                    entity_id: entity_id.clone(),
                    state: self.state.clone(),
                }),
        }
    }
}
