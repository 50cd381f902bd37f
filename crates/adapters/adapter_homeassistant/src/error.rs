//! Home Assistant adapter error types.

use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;

/// Errors specific to the Home Assistant adapter.
#[derive(Debug, thiserror::Error)]
pub enum HomeAssistantError {
    /// The access token cannot be used as an HTTP header value.
    #[error("access token is not a valid header value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),

    /// Request failed, timed out, or returned a non-success status.
    #[error("Home Assistant request failed")]
    Http(#[source] reqwest::Error),

    /// Home Assistant answered `404` for the entity.
    #[error("Home Assistant does not know {0}")]
    UnknownEntity(EntityId),

    /// The entity's state is not a number.
    #[error("{entity_id} has non-numeric state {state:?}")]
    InvalidState { entity_id: EntityId, state: String },
}

impl From<HomeAssistantError> for GrowLightError {
    fn from(err: HomeAssistantError) -> Self {
        match err {
            HomeAssistantError::UnknownEntity(entity_id) => Self::UnknownEntity(entity_id),
            HomeAssistantError::InvalidState { entity_id, state } => {
                Self::InvalidReading { entity_id, state }
            }
            other => Self::Integration(Box::new(other)),
        }
    }
}
