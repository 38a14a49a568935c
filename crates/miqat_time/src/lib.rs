//! Calendar arithmetic for prayer-time computation.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (hybrid Julian/Gregorian)
//! - Weekday lookup (1 = Sunday)
//! - UTC offsets, optionally read from a `chrono` time zone
//! - Umm al-Qura Hijri calendar conversion (1420-1450 AH)

pub mod error;
pub mod hijri;
pub mod julian;
pub mod offset;

pub use error::TimeError;
pub use hijri::{HijriDate, gregorian_to_hijri, hijri_to_gregorian};
pub use julian::{
    GregorianDate, J2000_JD, MIN_YEAR, adjust_jd_hour, gregorian_to_jd, jd_to_gregorian,
    jd_to_weekday,
};
pub use offset::UtcOffset;
