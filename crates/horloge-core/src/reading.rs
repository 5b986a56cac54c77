//! Clock reading snapshot and time format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by core type construction.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// A time component was outside its valid range.
    #[error("invalid clock reading: {field} = {value} (max {max})")]
    InvalidReading {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

/// Time format for the clock display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    /// Toggle between 12-hour and 24-hour format.
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
        }
    }

    /// Number of hour divisions on the face (12 or 24).
    pub fn divisions(self) -> u32 {
        match self {
            TimeFormat::TwentyFourHour => 24,
            TimeFormat::TwelveHour => 12,
        }
    }
}

/// An immutable wall-clock snapshot, one per frame.
///
/// Construction validates the component ranges so that integration bugs in
/// the caller surface immediately instead of producing a silently wrong
/// face. Sub-second position is carried separately as the bounce progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockReading {
    /// Create a reading from hour (0-23), minute (0-59) and second (0-59).
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CoreError> {
        if hour > 23 {
            return Err(CoreError::InvalidReading {
                field: "hour",
                value: hour,
                max: 23,
            });
        }
        if minute > 59 {
            return Err(CoreError::InvalidReading {
                field: "minute",
                value: minute,
                max: 59,
            });
        }
        if second > 59 {
            return Err(CoreError::InvalidReading {
                field: "second",
                value: second,
                max: 59,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn second(self) -> u8 {
        self.second
    }
}
