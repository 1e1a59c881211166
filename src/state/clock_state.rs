//! Wall-clock sample and display formatting

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Display format for the clock string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

/// Read-only snapshot of local wall time, recomputed once per second
///
/// Fields are always stored as 24-hour values; the 12-hour variant only
/// changes the derived display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSample {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockSample {
    /// Sample the current local wall time
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hours: now.hour() as u8,
            minutes: now.minute() as u8,
            seconds: now.second() as u8,
        }
    }

    /// Format the sample for display in the requested format
    pub fn display(&self, format: ClockFormat) -> String {
        match format {
            ClockFormat::TwentyFourHour => {
                format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
            }
            ClockFormat::TwelveHour => {
                let meridiem = if self.hours < 12 { "AM" } else { "PM" };
                let hour = match self.hours % 12 {
                    0 => 12,
                    h => h,
                };
                format!(
                    "{:02}:{:02}:{:02} {}",
                    hour, self.minutes, self.seconds, meridiem
                )
            }
        }
    }
}

impl Default for ClockSample {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hours: u8, minutes: u8, seconds: u8) -> ClockSample {
        ClockSample {
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn twenty_four_hour_display_pads_fields() {
        assert_eq!(
            sample(9, 5, 3).display(ClockFormat::TwentyFourHour),
            "09:05:03"
        );
        assert_eq!(
            sample(23, 59, 59).display(ClockFormat::TwentyFourHour),
            "23:59:59"
        );
    }

    #[test]
    fn twelve_hour_display_handles_midnight_and_noon() {
        assert_eq!(
            sample(0, 0, 30).display(ClockFormat::TwelveHour),
            "12:00:30 AM"
        );
        assert_eq!(
            sample(12, 0, 0).display(ClockFormat::TwelveHour),
            "12:00:00 PM"
        );
        assert_eq!(
            sample(13, 15, 5).display(ClockFormat::TwelveHour),
            "01:15:05 PM"
        );
        assert_eq!(
            sample(11, 59, 59).display(ClockFormat::TwelveHour),
            "11:59:59 AM"
        );
    }

    #[test]
    fn now_yields_in_range_fields() {
        let sample = ClockSample::now();
        assert!(sample.hours <= 23);
        assert!(sample.minutes <= 59);
        assert!(sample.seconds <= 59);
    }

    #[test]
    fn format_deserializes_from_query_values() {
        assert_eq!(
            serde_json::from_str::<ClockFormat>("\"12h\"").unwrap(),
            ClockFormat::TwelveHour
        );
        assert_eq!(
            serde_json::from_str::<ClockFormat>("\"24h\"").unwrap(),
            ClockFormat::TwentyFourHour
        );
    }
}
