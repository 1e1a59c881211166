//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, TimerField};
use super::{
    requests::{ClockQuery, ConfigureRequest, FieldValueRequest, MessageRequest},
    responses::{ApiResponse, ClockResponse, HealthResponse, MessageResponse, StatusResponse, TimerView},
};

/// Handle GET /clock - Current wall-clock sample
pub async fn clock_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClockQuery>,
) -> Result<Json<ClockResponse>, StatusCode> {
    let format = query.format.unwrap_or_default();
    match state.get_clock_sample() {
        Ok(sample) => Ok(Json(ClockResponse::new(sample, format))),
        Err(e) => {
            error!("Failed to get clock sample: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /timer - Current timer state
pub async fn timer_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerView>, StatusCode> {
    match state.get_timer_state() {
        Ok(timer) => Ok(Json(TimerView::from_state(&timer))),
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/start - Start the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start_timer() {
        Ok(timer) => {
            info!("Start endpoint called");
            Ok(Json(ApiResponse::for_timer("Timer started".to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to start timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/pause - Pause the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.pause_timer() {
        Ok(timer) => {
            info!("Pause endpoint called");
            Ok(Json(ApiResponse::for_timer("Timer paused".to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to pause timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/reset - Restore the baseline duration
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset_timer() {
        Ok(timer) => {
            info!("Reset endpoint called");
            Ok(Json(ApiResponse::for_timer("Timer reset".to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/config - Store a new baseline duration
pub async fn configure_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfigureRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.configure_timer(request.hours, request.minutes, request.seconds) {
        Ok(timer) => {
            info!("Configure endpoint called, timer now {}", timer.display());
            Ok(Json(ApiResponse::for_timer("Timer configured".to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to configure timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/config/:field - Replace one baseline field
pub async fn configure_field_handler(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
    Json(request): Json<FieldValueRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let field = match TimerField::from_name(&field) {
        Some(field) => field,
        None => {
            info!("Unknown timer config field: {}", field);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    match state.set_timer_field(field, request.value) {
        Ok(timer) => {
            info!("Field config endpoint called, timer now {}", timer.display());
            Ok(Json(ApiResponse::for_timer("Timer configured".to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to set timer field: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /message - Store and show the overlay message
pub async fn show_message_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.show_message(&request.text, request.font_size_px) {
        Ok((message, shown)) => {
            let status = if shown { "visible" } else { "unchanged" };
            Ok(Json(MessageResponse::new(status, message)))
        }
        Err(e) => {
            error!("Failed to show message: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle DELETE /message - Hide the overlay message
pub async fn clear_message_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.clear_message() {
        Ok(message) => Ok(Json(MessageResponse::new("hidden", message))),
        Err(e) => {
            error!("Failed to clear message: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Combined widget status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let clock = match state.get_clock_sample() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to get clock sample: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let message = match state.get_message_state() {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to get message state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        clock,
        clock_display: clock.display(Default::default()),
        timer: TimerView::from_state(&timer),
        message,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
