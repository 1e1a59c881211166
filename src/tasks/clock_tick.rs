//! Clock tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that re-samples the wall clock once per second for the
/// lifetime of the process
pub async fn clock_tick_task(state: Arc<AppState>) {
    info!("Starting clock tick task");

    let mut interval = interval(Duration::from_secs(1));

    loop {
        interval.tick().await;

        match state.refresh_clock() {
            Ok(sample) => {
                debug!("Clock sample refreshed: {:02}:{:02}:{:02}",
                       sample.hours, sample.minutes, sample.seconds);
            }
            Err(e) => {
                error!("Failed to refresh clock sample: {}", e);
            }
        }
    }
}
