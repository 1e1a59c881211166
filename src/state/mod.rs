//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod clock_state;
pub mod message_state;
pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use clock_state::{ClockFormat, ClockSample};
pub use message_state::MessageState;
pub use app_state::AppState;
pub use timer_state::{TimerConfig, TimerField, TimerState};
