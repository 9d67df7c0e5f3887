//! Error types for levain encoding and decoding operations.

use std::fmt;

/// Error returned when an encode operation rejects its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A field's value does not fit the mode's wire field.
    ///
    /// Only produced by the checked encode path; the baseline encode masks
    /// the value down to the field width instead.
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Destination buffer is smaller than the mode's fixed record size
    BufferTooSmall { expected: usize, actual: usize },
}

/// Error returned when decoding fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input holds fewer bytes than the mode's fixed record size
    InsufficientData { expected: usize, actual: usize },
    /// Decoded calendar fields name no real instant (e.g. month 0, February 30)
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    /// Decoded seconds count cannot be represented as a timestamp
    TimestampOutOfRange { seconds: i64 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} value {value} is outside the legal range [{min}, {max}]")
            }
            Self::BufferTooSmall { expected, actual } => {
                write!(f, "buffer too small: need {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { expected, actual } => {
                write!(f, "insufficient data: expected at least {expected} bytes, got {actual}")
            }
            Self::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
            } => {
                write!(
                    f,
                    "decoded fields {year:04}-{month:02}-{day:02} {hour:02}:{minute:02} do not form a valid calendar time"
                )
            }
            Self::TimestampOutOfRange { seconds } => {
                write!(f, "decoded timestamp of {seconds} seconds is out of representable range")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
