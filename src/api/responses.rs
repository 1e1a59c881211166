//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{ClockFormat, ClockSample, MessageState, TimerState};

/// Timer fields as exposed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub negative: bool,
    pub running: bool,
    pub display: String,
}

impl TimerView {
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            hours: state.hours,
            minutes: state.minutes,
            seconds: state.seconds,
            negative: state.negative,
            running: state.running,
            display: state.display(),
        }
    }
}

/// API response structure for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: &TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer: TimerView::from_state(timer),
        }
    }

    /// Create a response whose status reflects the running flag
    pub fn for_timer(message: String, timer: &TimerState) -> Self {
        let status = if timer.running { "running" } else { "paused" };
        Self::new(status.to_string(), message, timer)
    }
}

/// Clock read response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockResponse {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub format: ClockFormat,
    pub display: String,
}

impl ClockResponse {
    pub fn new(sample: ClockSample, format: ClockFormat) -> Self {
        Self {
            hours: sample.hours,
            minutes: sample.minutes,
            seconds: sample.seconds,
            format,
            display: sample.display(format),
        }
    }
}

/// Overlay message command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub message: MessageState,
}

impl MessageResponse {
    pub fn new(status: &str, message: MessageState) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            message,
        }
    }
}

/// Combined status response for the whole widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub clock: ClockSample,
    pub clock_display: String,
    pub timer: TimerView,
    pub message: MessageState,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
