//! Julian Day ↔ calendar conversions.
//!
//! Uses the hybrid calendar: Julian before 1582-10-15, Gregorian from then
//! on. The ten skipped dates (1582-10-05 .. 1582-10-14) are accepted and
//! computed as Julian dates.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// First Julian Day number (at noon) that uses the Gregorian calendar.
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

/// Earliest supported year; its Jan 1 is JD -0.5.
pub const MIN_YEAR: i32 = -4712;

/// A calendar date (proleptic Julian before the 1582 reform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    pub year: i32,
    /// Month 1..=12.
    pub month: u32,
    /// Day of month 1..=31.
    pub day: u32,
}

impl GregorianDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian Day at 0h of this date.
    pub fn to_jd(self) -> Result<f64, TimeError> {
        gregorian_to_jd(self.year, self.month, self.day)
    }

    /// Day of week, 1 = Sunday .. 7 = Saturday.
    pub fn weekday(self) -> Result<u8, TimeError> {
        Ok(jd_to_weekday(self.to_jd()?))
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Julian Day at 0h of a Gregorian (or, before 1582-10-15, Julian) date.
///
/// January and February are treated as months 13 and 14 of the previous
/// year. The Gregorian correction term is applied only from 1582-10-15.
///
/// # Errors
/// [`TimeError::YearOutOfRange`] when `year < -4712`.
pub fn gregorian_to_jd(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    if year < MIN_YEAR {
        return Err(TimeError::YearOutOfRange(year));
    }
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let is_gregorian =
        y > 1582 || (y == 1582 && (m > 10 || (m == 10 && day >= 15)));
    let b = if is_gregorian {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    let y = y as f64;
    let m = m as f64;
    Ok(1_720_994.5 + (365.25 * y).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b)
}

/// Calendar date containing the given Julian Day.
///
/// # Errors
/// [`TimeError::JulianDayOutOfRange`] when `jd < -0.5`.
pub fn jd_to_gregorian(jd: f64) -> Result<GregorianDate, TimeError> {
    if jd < -0.5 || jd.is_nan() {
        return Err(TimeError::JulianDayOutOfRange(jd));
    }
    let jd1 = jd + 0.5;
    let z = jd1.floor();
    let f = jd1 - z;
    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month <= 2.0 { c - 4715.0 } else { c - 4716.0 };

    Ok(GregorianDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    })
}

/// Day of week for a Julian Day, 1 = Sunday .. 7 = Saturday.
pub fn jd_to_weekday(jd: f64) -> u8 {
    ((jd + 1.5).floor().rem_euclid(7.0) as u8) + 1
}

/// Shift a Julian Day by a number of hours.
pub fn adjust_jd_hour(jd: f64, hours: f64) -> f64 {
    jd + hours / 24.0
}
