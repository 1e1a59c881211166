//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use super::{ClockSample, MessageState, TimerConfig, TimerField, TimerState};

/// Main application state that owns the clock sample, the timer engine,
/// and the overlay message
#[derive(Debug)]
pub struct AppState {
    /// Latest wall-clock sample, refreshed by the clock tick task
    pub clock: Arc<Mutex<ClockSample>>,
    /// Countdown/overtime timer state
    pub timer: Arc<Mutex<TimerState>>,
    /// Overlay message state
    pub message: Arc<Mutex<MessageState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last command tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Run signal for the timer tick task; sent only when the running
    /// flag actually changes
    pub run_signal_tx: watch::Sender<bool>,
    /// Keep a receiver alive to prevent channel closure
    pub _run_signal_rx: watch::Receiver<bool>,
    /// Snapshot stream sent on every timer mutation
    pub timer_update_tx: watch::Sender<TimerState>,
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a new AppState holding a paused timer with the given baseline
    pub fn new(port: u16, host: String, initial: TimerConfig) -> Self {
        let timer = TimerState::new(initial);
        let (run_signal_tx, run_signal_rx) = watch::channel(false);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.clone());

        Self {
            clock: Arc::new(Mutex::new(ClockSample::now())),
            timer: Arc::new(Mutex::new(timer)),
            message: Arc::new(Mutex::new(MessageState::new())),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            run_signal_tx,
            _run_signal_rx: run_signal_rx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Apply a timer command and publish the resulting snapshot
    ///
    /// All command methods funnel through here: lock, mutate, record the
    /// action, publish. The run signal fires only when the running flag
    /// changed, so redundant start/pause calls stay no-ops end to end.
    pub fn update_timer<F>(&self, action: &str, updater: F) -> Result<TimerState, String>
    where
        F: FnOnce(&mut TimerState),
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let was_running = timer.running;
        updater(&mut *timer);
        let snapshot = timer.clone();
        drop(timer); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        if snapshot.running != was_running {
            if let Err(e) = self.run_signal_tx.send(snapshot.running) {
                warn!("Failed to send run signal: {}", e);
            }
        }
        if let Err(e) = self.timer_update_tx.send(snapshot.clone()) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok(snapshot)
    }

    /// Start the countdown
    pub fn start_timer(&self) -> Result<TimerState, String> {
        info!("Starting timer");
        self.update_timer("start", |timer| timer.start())
    }

    /// Pause the countdown, preserving remaining time
    pub fn pause_timer(&self) -> Result<TimerState, String> {
        info!("Pausing timer");
        self.update_timer("pause", |timer| timer.pause())
    }

    /// Pause and restore the baseline duration
    pub fn reset_timer(&self) -> Result<TimerState, String> {
        info!("Resetting timer");
        self.update_timer("reset", |timer| timer.reset())
    }

    /// Store a new baseline duration (clamped) and reset to it
    pub fn configure_timer(&self, hours: i64, minutes: i64, seconds: i64) -> Result<TimerState, String> {
        info!("Configuring timer: {}h {}m {}s (pre-clamp)", hours, minutes, seconds);
        self.update_timer("configure", |timer| timer.configure(hours, minutes, seconds))
    }

    /// Replace a single baseline field (clamped) and reset
    pub fn set_timer_field(&self, field: TimerField, value: i64) -> Result<TimerState, String> {
        info!("Setting timer field {:?} to {} (pre-clamp)", field, value);
        self.update_timer(field.action(), |timer| timer.set_field(field, value))
    }

    /// Advance the timer by one second (tick task only; not a user command,
    /// so it bypasses last-action tracking)
    pub fn tick_timer(&self) -> Result<TimerState, String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        timer.tick();
        let snapshot = timer.clone();
        drop(timer);

        if let Err(e) = self.timer_update_tx.send(snapshot.clone()) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok(snapshot)
    }

    /// Get the current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer.lock()
            .map(|timer| timer.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Re-sample the wall clock (clock tick task)
    pub fn refresh_clock(&self) -> Result<ClockSample, String> {
        let mut clock = self.clock.lock()
            .map_err(|e| format!("Failed to lock clock sample: {}", e))?;
        *clock = ClockSample::now();
        Ok(*clock)
    }

    /// Get the latest wall-clock sample
    pub fn get_clock_sample(&self) -> Result<ClockSample, String> {
        self.clock.lock()
            .map(|clock| *clock)
            .map_err(|e| format!("Failed to lock clock sample: {}", e))
    }

    /// Store and show the overlay message; blank text leaves state untouched
    ///
    /// Returns the resulting state and whether it changed.
    pub fn show_message(&self, text: &str, font_size_px: Option<i64>) -> Result<(MessageState, bool), String> {
        let mut message = self.message.lock()
            .map_err(|e| format!("Failed to lock message state: {}", e))?;

        let shown = message.show(text, font_size_px);
        if shown {
            info!("Showing overlay message ({} px)", message.font_size_px);
        } else {
            info!("Ignoring blank overlay message");
        }
        Ok((message.clone(), shown))
    }

    /// Hide the overlay message
    pub fn clear_message(&self) -> Result<MessageState, String> {
        let mut message = self.message.lock()
            .map_err(|e| format!("Failed to lock message state: {}", e))?;

        info!("Clearing overlay message");
        message.clear();
        Ok(message.clone())
    }

    /// Get the current overlay message state
    pub fn get_message_state(&self) -> Result<MessageState, String> {
        self.message.lock()
            .map(|message| message.clone())
            .map_err(|e| format!("Failed to lock message state: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
