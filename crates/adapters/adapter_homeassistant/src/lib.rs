//! # growlight-adapter-homeassistant
//!
//! Home Assistant host adapter. Implements the sensor and switch ports on
//! top of the Home Assistant REST API.
//!
//! ## Endpoints used
//!
//! | Port | Request |
//! |------|---------|
//! | `SensorReader` | `GET /api/states/<entity_id>` |
//! | `SwitchActuator` | `POST /api/services/<domain>/turn_on` or `turn_off` with `{"entity_id": …}` |
//!
//! Every request carries the long-lived access token as a bearer token.
//!
//! ## Dependency rule
//!
//! Depends on `growlight-app` (port traits) and `growlight-domain` only.

mod config;
mod error;
mod state;

use std::time::Duration;

use growlight_app::ports::{SensorReader, SwitchActuator};
use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;
use growlight_domain::state::{SwitchState, UvReading};
use reqwest::{StatusCode, header};

pub use config::HomeAssistantConfig;
pub use error::HomeAssistantError;
pub use state::EntityStateResponse;

/// REST client for a single Home Assistant instance.
#[derive(Debug, Clone)]
pub struct HomeAssistantClient {
    client: reqwest::Client,
    base_url: String,
}

impl HomeAssistantClient {
    /// Build a client with the bearer token installed as a default header.
    ///
    /// # Errors
    ///
    /// Returns [`HomeAssistantError::InvalidToken`] if the token contains
    /// characters not allowed in a header, or [`HomeAssistantError::Http`]
    /// if the underlying client cannot be built.
    pub fn new(config: &HomeAssistantConfig) -> Result<Self, HomeAssistantError> {
        let mut headers = header::HeaderMap::new();
        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(HomeAssistantError::InvalidToken)?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(HomeAssistantError::Http)?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw state object of an entity.
    ///
    /// # Errors
    ///
    /// Returns [`HomeAssistantError::UnknownEntity`] on `404`, or
    /// [`HomeAssistantError::Http`] on any other failure.
    #[tracing::instrument(skip(self, entity_id), fields(entity_id = %entity_id))]
    pub async fn get_state(
        &self,
        entity_id: &EntityId,
    ) -> Result<EntityStateResponse, HomeAssistantError> {
        let url = format!("{}/api/states/{}", self.base_url, entity_id);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HomeAssistantError::Http)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(HomeAssistantError::UnknownEntity(entity_id.clone()));
        }

        response
            .error_for_status()
            .map_err(HomeAssistantError::Http)?
            .json::<EntityStateResponse>()
            .await
            .map_err(HomeAssistantError::Http)
    }

    /// Call `<domain>/<service>` targeting a single entity.
    ///
    /// # Errors
    ///
    /// Returns [`HomeAssistantError::Http`] if the request fails or Home
    /// Assistant answers with a non-success status.
    #[tracing::instrument(skip(self, entity_id), fields(entity_id = %entity_id))]
    pub async fn call_service(
        &self,
        domain: &str,
        service: &str,
        entity_id: &EntityId,
    ) -> Result<(), HomeAssistantError> {
        let url = format!("{}/api/services/{}/{}", self.base_url, domain, service);
        let body = serde_json::json!({ "entity_id": entity_id });

        tracing::debug!(%url, "calling Home Assistant service");

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(HomeAssistantError::Http)?
            .error_for_status()
            .map_err(HomeAssistantError::Http)?;

        tracing::debug!(status = %response.status(), "service call accepted");
        Ok(())
    }
}

impl SensorReader for HomeAssistantClient {
    async fn read_sensor(&self, entity_id: &EntityId) -> Result<UvReading, GrowLightError> {
        let state = self.get_state(entity_id).await?;
        Ok(state.uv_reading(entity_id)?)
    }
}

impl SwitchActuator for HomeAssistantClient {
    async fn set_switch(&self, entity_id: &EntityId, state: SwitchState) -> Result<(), GrowLightError> {
        self.call_service(entity_id.domain(), state.service(), entity_id)
            .await?;
        Ok(())
    }
}
