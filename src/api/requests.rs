//! API request structures
//!
//! Numeric fields are accepted as signed integers and defaulted when
//! absent, so missing input reads as 0 and out-of-range input is clamped
//! by the state machine rather than rejected.

use serde::Deserialize;

use crate::state::ClockFormat;

/// Body for POST /timer/config
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigureRequest {
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
    #[serde(default)]
    pub seconds: i64,
}

/// Body for POST /timer/config/:field
#[derive(Debug, Clone, Deserialize)]
pub struct FieldValueRequest {
    #[serde(default)]
    pub value: i64,
}

/// Body for POST /message
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub text: String,
    pub font_size_px: Option<i64>,
}

/// Query parameters for GET /clock
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockQuery {
    pub format: Option<ClockFormat>,
}
