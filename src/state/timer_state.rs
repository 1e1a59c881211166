//! Countdown timer state machine
//!
//! The timer counts down from a configured duration and, once it reaches
//! zero, flips into "overtime" and counts upward past the deadline. All
//! transitions happen in whole seconds, driven by an external tick.

use serde::{Deserialize, Serialize};

/// Upper bound for the configured hours field
pub const MAX_HOURS: i64 = 99;
/// Upper bound for the configured minutes and seconds fields
pub const MAX_MINUTES_SECONDS: i64 = 59;

/// User-set baseline duration for the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimerConfig {
    /// Build a config from raw user input, clamping each field to its
    /// valid range (hours 0-99, minutes/seconds 0-59; negatives become 0)
    pub fn clamped(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours: hours.clamp(0, MAX_HOURS) as u32,
            minutes: minutes.clamp(0, MAX_MINUTES_SECONDS) as u8,
            seconds: seconds.clamp(0, MAX_MINUTES_SECONDS) as u8,
        }
    }

    /// Zero-duration config
    pub fn zero() -> Self {
        Self::clamped(0, 0, 0)
    }
}

/// Which baseline field a single-field setter targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerField {
    Hours,
    Minutes,
    Seconds,
}

impl TimerField {
    /// Parse a field name as it appears in the API path
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hours" => Some(Self::Hours),
            "minutes" => Some(Self::Minutes),
            "seconds" => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Action label used for last-action tracking
    pub fn action(&self) -> &'static str {
        match self {
            Self::Hours => "set-hours",
            Self::Minutes => "set-minutes",
            Self::Seconds => "set-seconds",
        }
    }
}

/// Countdown timer state
///
/// While `negative` is false the fields are time-until-zero; once the
/// countdown hits 00:00:00 the next tick sets `negative` and the fields
/// become time elapsed past the deadline. Overtime hours grow without
/// bound; only configuration input is capped at 99.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub negative: bool,
    pub running: bool,
    config: TimerConfig,
}

impl TimerState {
    /// Create a paused timer holding the given baseline duration
    pub fn new(config: TimerConfig) -> Self {
        Self {
            hours: config.hours,
            minutes: config.minutes,
            seconds: config.seconds,
            negative: false,
            running: false,
            config,
        }
    }

    /// The stored baseline configuration
    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// Transition to Running; no-op if already running
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Transition to Paused, preserving the current remaining values
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause, clear the overtime flag, and restore the baseline duration
    pub fn reset(&mut self) {
        self.pause();
        self.negative = false;
        self.hours = self.config.hours;
        self.minutes = self.config.minutes;
        self.seconds = self.config.seconds;
    }

    /// Store a new baseline (clamped) and reset to it
    ///
    /// Reconfiguring while running stops the timer; this prevents silent
    /// countdown changes mid-run.
    pub fn configure(&mut self, hours: i64, minutes: i64, seconds: i64) {
        self.config = TimerConfig::clamped(hours, minutes, seconds);
        self.reset();
    }

    /// Replace a single baseline field, leaving the other two as stored
    ///
    /// Delegates to [`configure`](Self::configure) so observers never see
    /// a half-applied configuration.
    pub fn set_field(&mut self, field: TimerField, value: i64) {
        let (mut hours, mut minutes, mut seconds) = (
            self.config.hours as i64,
            self.config.minutes as i64,
            self.config.seconds as i64,
        );
        match field {
            TimerField::Hours => hours = value,
            TimerField::Minutes => minutes = value,
            TimerField::Seconds => seconds = value,
        }
        self.configure(hours, minutes, seconds);
    }

    /// Advance the timer by one second; no-op unless running
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        if self.negative {
            // Overtime: count up with standard carry
            if self.seconds == 59 {
                self.seconds = 0;
                if self.minutes == 59 {
                    self.minutes = 0;
                    self.hours += 1;
                } else {
                    self.minutes += 1;
                }
            } else {
                self.seconds += 1;
            }
            return;
        }

        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 {
            // Deadline reached: flip into overtime, one second elapsed
            self.negative = true;
            self.seconds = 1;
            return;
        }

        // Countdown: borrow from minutes, then hours
        if self.seconds == 0 {
            if self.minutes == 0 {
                self.hours -= 1;
                self.minutes = 59;
            } else {
                self.minutes -= 1;
            }
            self.seconds = 59;
        } else {
            self.seconds -= 1;
        }
    }

    /// Zero-padded `HH:MM:SS` display, prefixed with `-` while in overtime
    pub fn display(&self) -> String {
        let body = format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds);
        if self.negative {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerConfig::zero())
    }
}
