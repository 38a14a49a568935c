//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Julian Day and calendar conversions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year is before -4712, where the Julian Day count goes negative.
    YearOutOfRange(i32),
    /// Julian Day is before -0.5 (4713 BCE Jan 1, 0h).
    JulianDayOutOfRange(f64),
    /// Date lies outside the tabulated Umm al-Qura range (1420-1450 AH).
    HijriOutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} is before -4712"),
            Self::JulianDayOutOfRange(jd) => write!(f, "julian day {jd} is before -0.5"),
            Self::HijriOutOfRange => {
                write!(f, "date outside Umm al-Qura table (1420-1450 AH)")
            }
        }
    }
}

impl Error for TimeError {}
