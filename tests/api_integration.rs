//! Integration tests for the HTTP API
//!
//! Drives the full router via `tower::ServiceExt::oneshot`: read endpoints,
//! timer commands, input coercion through JSON, and the overlay message.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tickboard::{create_router, state::TimerConfig, AppState};
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Create a test application with the given initial countdown duration
fn test_app(hours: i64, minutes: i64, seconds: i64) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        TimerConfig::clamped(hours, minutes, seconds),
    ));
    let app = create_router(Arc::clone(&state));
    (state, app)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn post_empty(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// ============================================================================
// Read Endpoints
// ============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (_, app) = test_app(0, 0, 0);
    let (status, json) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn clock_returns_padded_display() {
    let (_, app) = test_app(0, 0, 0);
    let (status, json) = get(app, "/clock").await;
    assert_eq!(status, StatusCode::OK);
    let display = json["display"].as_str().unwrap();
    assert_eq!(display.len(), 8);
    assert_eq!(&display[2..3], ":");
    assert_eq!(&display[5..6], ":");
    assert_eq!(json["format"], "24h");
}

#[tokio::test]
async fn clock_supports_twelve_hour_format() {
    let (_, app) = test_app(0, 0, 0);
    let (status, json) = get(app, "/clock?format=12h").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["format"], "12h");
    let display = json["display"].as_str().unwrap();
    assert!(display.ends_with(" AM") || display.ends_with(" PM"));
}

#[tokio::test]
async fn timer_reflects_initial_configuration() {
    let (_, app) = test_app(0, 25, 0);
    let (status, json) = get(app, "/timer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["display"], "00:25:00");
    assert_eq!(json["running"], false);
    assert_eq!(json["negative"], false);
}

#[tokio::test]
async fn status_combines_clock_timer_and_message() {
    let (_, app) = test_app(1, 2, 3);
    let (status, json) = get(app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timer"]["display"], "01:02:03");
    assert_eq!(json["message"]["visible"], false);
    assert_eq!(json["host"], "127.0.0.1");
    assert_eq!(json["port"], 0);
    assert!(json["uptime"].is_string());
    assert!(json["last_action"].is_null());
}

// ============================================================================
// Timer Commands
// ============================================================================

#[tokio::test]
async fn start_sets_running() {
    let (state, app) = test_app(0, 5, 0);
    let (status, json) = post_empty(app, "/timer/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "running");
    assert_eq!(json["timer"]["running"], true);
    assert!(state.get_timer_state().unwrap().running);
}

#[tokio::test]
async fn pause_is_idempotent_over_http() {
    let (state, app) = test_app(0, 5, 0);
    state.start_timer().unwrap();

    let (_, first) = post_empty(app.clone(), "/timer/pause").await;
    let (_, second) = post_empty(app, "/timer/pause").await;
    assert_eq!(first["timer"], second["timer"]);
    assert_eq!(second["status"], "paused");
}

#[tokio::test]
async fn reset_restores_baseline_and_clears_overtime() {
    let (state, app) = test_app(0, 0, 1);
    state.start_timer().unwrap();
    state.tick_timer().unwrap();
    state.tick_timer().unwrap();
    assert!(state.get_timer_state().unwrap().negative);

    let (status, json) = post_empty(app, "/timer/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timer"]["display"], "00:00:01");
    assert_eq!(json["timer"]["negative"], false);
    assert_eq!(json["timer"]["running"], false);
}

#[tokio::test]
async fn configure_clamps_out_of_range_input() {
    let (_, app) = test_app(0, 0, 0);
    let (status, json) = send_json(
        app,
        Method::POST,
        "/timer/config",
        json!({"hours": 150, "minutes": 90, "seconds": 90}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timer"]["display"], "99:59:59");
}

#[tokio::test]
async fn configure_coerces_negative_and_missing_fields_to_zero() {
    let (_, app) = test_app(1, 1, 1);
    let (status, json) = send_json(
        app,
        Method::POST,
        "/timer/config",
        json!({"hours": -4}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timer"]["display"], "00:00:00");
}

#[tokio::test]
async fn configure_while_running_stops_the_timer() {
    let (state, app) = test_app(0, 10, 0);
    state.start_timer().unwrap();

    let (status, json) = send_json(
        app,
        Method::POST,
        "/timer/config",
        json!({"hours": 0, "minutes": 1, "seconds": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timer"]["running"], false);
    assert_eq!(json["timer"]["display"], "00:01:00");
}

#[tokio::test]
async fn field_setter_replaces_one_baseline_field() {
    let (_, app) = test_app(1, 2, 3);
    let (status, json) = send_json(
        app,
        Method::POST,
        "/timer/config/minutes",
        json!({"value": 45}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timer"]["display"], "01:45:03");
    assert_eq!(json["timer"]["running"], false);
}

#[tokio::test]
async fn unknown_config_field_is_not_found() {
    let (_, app) = test_app(0, 0, 0);
    let (status, _) = send_json(
        app,
        Method::POST,
        "/timer/config/millis",
        json!({"value": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Overlay Message
// ============================================================================

#[tokio::test]
async fn message_shows_and_hides() {
    let (_, app) = test_app(0, 0, 0);

    let (status, json) = send_json(
        app.clone(),
        Method::POST,
        "/message",
        json!({"text": "  back in 5  ", "font_size_px": 64}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "visible");
    assert_eq!(json["message"]["text"], "back in 5");
    assert_eq!(json["message"]["font_size_px"], 64);

    let (status, json) = send_json(app, Method::DELETE, "/message", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "hidden");
    assert_eq!(json["message"]["visible"], false);
    assert_eq!(json["message"]["text"], "back in 5");
}

#[tokio::test]
async fn blank_message_is_unchanged() {
    let (_, app) = test_app(0, 0, 0);
    let (status, json) = send_json(
        app,
        Method::POST,
        "/message",
        json!({"text": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "unchanged");
    assert_eq!(json["message"]["visible"], false);
}

#[tokio::test]
async fn message_font_size_defaults_and_clamps() {
    let (_, app) = test_app(0, 0, 0);

    let (_, json) = send_json(
        app.clone(),
        Method::POST,
        "/message",
        json!({"text": "lunch"}),
    )
    .await;
    assert_eq!(json["message"]["font_size_px"], 48);

    let (_, json) = send_json(
        app,
        Method::POST,
        "/message",
        json!({"text": "huge", "font_size_px": 5000}),
    )
    .await;
    assert_eq!(json["message"]["font_size_px"], 200);
}

// ============================================================================
// Command Tracking
// ============================================================================

#[tokio::test]
async fn status_records_the_last_command() {
    let (_, app) = test_app(0, 5, 0);
    post_empty(app.clone(), "/timer/start").await;

    let (_, json) = get(app, "/status").await;
    assert_eq!(json["last_action"], "start");
    assert!(json["last_action_time"].is_string());
}
