//! Exercises the Home Assistant client against a local stand-in server.
//!
//! Each test binds an axum router that mimics the two REST endpoints on an
//! ephemeral port and points a real `HomeAssistantClient` at it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use growlight_adapter_homeassistant::{HomeAssistantClient, HomeAssistantConfig};
use growlight_app::ports::{SensorReader, SwitchActuator};
use growlight_domain::error::GrowLightError;
use growlight_domain::id::EntityId;
use growlight_domain::state::{SwitchState, UvReading};

const TOKEN: &str = "test-token";

#[derive(Default)]
struct FakeHomeAssistant {
    states: HashMap<String, String>,
    calls: Mutex<Vec<(String, String, serde_json::Value)>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn get_state(
    State(ha): State<Arc<FakeHomeAssistant>>,
    Path(entity_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match ha.states.get(&entity_id) {
        Some(state) => Json(serde_json::json!({
            "entity_id": entity_id,
            "state": state,
            "attributes": {},
        }))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn call_service(
    State(ha): State<Arc<FakeHomeAssistant>>,
    Path((domain, service)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let broken = body["entity_id"] == "switch.broken";
    ha.calls.lock().unwrap().push((domain, service, body));
    if broken {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn serve(states: &[(&str, &str)]) -> (String, Arc<FakeHomeAssistant>) {
    let ha = Arc::new(FakeHomeAssistant {
        states: states
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        calls: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/api/states/{entity_id}", get(get_state))
        .route("/api/services/{domain}/{service}", post(call_service))
        .with_state(Arc::clone(&ha));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), ha)
}

fn client(url: &str, token: &str) -> HomeAssistantClient {
    HomeAssistantClient::new(&HomeAssistantConfig {
        url: url.to_string(),
        token: token.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn id(raw: &str) -> EntityId {
    raw.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Sensor reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_read_numeric_uv_index() {
    let (url, _) = serve(&[("sensor.uv_index", "3.5")]).await;
    let reading = client(&url, TOKEN)
        .read_sensor(&id("sensor.uv_index"))
        .await
        .unwrap();
    assert_eq!(reading, UvReading::Value(3.5));
}

#[tokio::test]
async fn should_report_unavailable_sensor() {
    let (url, _) = serve(&[("sensor.uv_index", "unavailable")]).await;
    let reading = client(&url, TOKEN)
        .read_sensor(&id("sensor.uv_index"))
        .await
        .unwrap();
    assert_eq!(reading, UvReading::Unavailable);
}

#[tokio::test]
async fn should_return_unknown_entity_on_404() {
    let (url, _) = serve(&[]).await;
    let result = client(&url, TOKEN)
        .read_sensor(&id("sensor.uv_index"))
        .await;
    assert!(matches!(result, Err(GrowLightError::UnknownEntity(_))));
}

#[tokio::test]
async fn should_return_invalid_reading_for_text_state() {
    let (url, _) = serve(&[("sensor.uv_index", "extreme")]).await;
    let result = client(&url, TOKEN)
        .read_sensor(&id("sensor.uv_index"))
        .await;
    assert!(matches!(result, Err(GrowLightError::InvalidReading { .. })));
}

#[tokio::test]
async fn should_fail_with_integration_error_when_unauthorized() {
    let (url, _) = serve(&[("sensor.uv_index", "3")]).await;
    let result = client(&url, "wrong")
        .read_sensor(&id("sensor.uv_index"))
        .await;
    assert!(matches!(result, Err(GrowLightError::Integration(_))));
}

// ---------------------------------------------------------------------------
// Switch actuation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_call_turn_on_in_entity_domain() {
    let (url, ha) = serve(&[]).await;
    client(&url, TOKEN)
        .set_switch(&id("switch.grow_light_1"), SwitchState::On)
        .await
        .unwrap();

    let calls = ha.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "switch");
    assert_eq!(calls[0].1, "turn_on");
    assert_eq!(calls[0].2, serde_json::json!({ "entity_id": "switch.grow_light_1" }));
}

#[tokio::test]
async fn should_call_turn_off_for_light_domain() {
    let (url, ha) = serve(&[]).await;
    client(&url, TOKEN)
        .set_switch(&id("light.grow_strip"), SwitchState::Off)
        .await
        .unwrap();

    let calls = ha.calls.lock().unwrap();
    assert_eq!(calls[0].0, "light");
    assert_eq!(calls[0].1, "turn_off");
}

#[tokio::test]
async fn should_return_error_when_service_call_fails() {
    let (url, _) = serve(&[]).await;
    let result = client(&url, TOKEN)
        .set_switch(&id("switch.broken"), SwitchState::On)
        .await;
    assert!(matches!(result, Err(GrowLightError::Integration(_))));
}

#[tokio::test]
async fn should_fail_when_server_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(&format!("http://{addr}"), TOKEN)
        .set_switch(&id("switch.grow_light_1"), SwitchState::On)
        .await;
    assert!(matches!(result, Err(GrowLightError::Integration(_))));
}
