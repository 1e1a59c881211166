//! Tickboard - A state-managed HTTP server for a clock and countdown timer display
//!
//! This library owns the display state behind a browser clock/timer widget:
//! a per-second wall-clock sample, a countdown timer that counts up past
//! zero into overtime, and an optional overlay message.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
