//! Tickboard - A state-managed HTTP server for a clock and countdown timer display
//!
//! This is the main entry point for the tickboard application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use tickboard::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{clock_tick_task, timer_tick_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tickboard={},tower_http=info", config.log_level()))
        .init();

    let initial = config.initial_timer();
    info!("Starting tickboard server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, timer={:02}:{:02}:{:02}",
          config.host, config.port, initial.hours, initial.minutes, initial.seconds);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), initial));

    // Start the per-second background tasks
    let clock_state = Arc::clone(&state);
    tokio::spawn(async move {
        clock_tick_task(clock_state).await;
    });
    let timer_state = Arc::clone(&state);
    tokio::spawn(async move {
        timer_tick_task(timer_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /clock                - Current wall-clock sample (?format=12h|24h)");
    info!("  GET    /timer                - Current timer state");
    info!("  POST   /timer/start          - Start the countdown");
    info!("  POST   /timer/pause          - Pause the countdown");
    info!("  POST   /timer/reset          - Restore the configured duration");
    info!("  POST   /timer/config         - Set the countdown duration");
    info!("  POST   /timer/config/:field  - Set one duration field");
    info!("  POST   /message              - Show the overlay message");
    info!("  DELETE /message              - Hide the overlay message");
    info!("  GET    /status               - Combined widget status");
    info!("  GET    /health               - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
