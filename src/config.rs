//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::TimerConfig;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "tickboard")]
#[command(about = "A state-managed HTTP server backing a browser clock and countdown timer display")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8090")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial countdown hours (0-99)
    #[arg(long, default_value = "0")]
    pub hours: i64,

    /// Initial countdown minutes (0-59)
    #[arg(short, long, default_value = "0")]
    pub minutes: i64,

    /// Initial countdown seconds (0-59)
    #[arg(short, long, default_value = "0")]
    pub seconds: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the initial timer baseline, clamped like any other input
    pub fn initial_timer(&self) -> TimerConfig {
        TimerConfig::clamped(self.hours, self.minutes, self.seconds)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
