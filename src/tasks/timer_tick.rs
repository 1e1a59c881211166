//! Timer tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that drives the countdown timer
///
/// Parks on the run signal while the timer is paused, so a paused timer
/// schedules no callbacks. Each start creates a fresh one-second schedule
/// whose first tick lands a full second later; pausing discards the
/// schedule entirely. Interval deadlines are absolute, so the cadence does
/// not drift cumulatively.
pub async fn timer_tick_task(state: Arc<AppState>) {
    info!("Starting timer tick task");

    let mut run_rx = state.run_signal_tx.subscribe();

    loop {
        // Wait for the timer to start
        while !*run_rx.borrow_and_update() {
            if run_rx.changed().await.is_err() {
                debug!("Run signal channel closed, stopping timer tick task");
                return;
            }
        }

        debug!("Timer started, scheduling ticks");
        let mut interval = interval_at(
            Instant::now() + Duration::from_secs(1),
            Duration::from_secs(1),
        );

        loop {
            tokio::select! {
                // Timer tick - advance the countdown
                _ = interval.tick() => {
                    match state.tick_timer() {
                        Ok(snapshot) => {
                            debug!("Timer tick: {}", snapshot.display());
                        }
                        Err(e) => {
                            error!("Failed to tick timer: {}", e);
                        }
                    }
                }

                // Run signal change - discard the schedule. A rapid
                // pause/start pair can coalesce into one observed change
                // with the flag back at true, so the outer loop re-reads
                // the flag and reschedules from scratch either way.
                changed = run_rx.changed() => {
                    if changed.is_err() {
                        debug!("Run signal channel closed, stopping timer tick task");
                        return;
                    }
                    debug!("Run signal changed, discarding tick schedule");
                    break;
                }
            }
        }
    }
}
