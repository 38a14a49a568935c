//! Error types for prayer-time configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use miqat_time::TimeError;

/// Errors from configuring or running a prayer-time calculation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SalatError {
    /// Method name not present in the built-in table.
    UnknownMethod(String),
    /// Event name other than the six canonical events.
    UnknownEvent(String),
    /// Date could not be converted to a Julian Day.
    Time(TimeError),
    /// Scan grid with a non-positive step or an empty range.
    InvalidScan(&'static str),
}

impl Display for SalatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod(name) => write!(f, "unknown calculation method: {name}"),
            Self::UnknownEvent(name) => write!(f, "unknown prayer event: {name}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidScan(msg) => write!(f, "invalid scan grid: {msg}"),
        }
    }
}

impl Error for SalatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::UnknownMethod(_) | Self::UnknownEvent(_) | Self::InvalidScan(_) => None,
        }
    }
}

impl From<TimeError> for SalatError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
