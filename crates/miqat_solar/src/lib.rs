//! Solar formulas behind the daily prayer times.
//!
//! This crate provides:
//! - Equation of time and solar declination from a Julian Day
//! - Hour angle at a target altitude, with signed infinities for
//!   altitudes the Sun never reaches (or never leaves)
//! - The six event times: fajr, sunrise, zuhr, asr, maghrib, isha
//! - Qibla bearing
//!
//! All angles are in degrees and all times in fractional hours. Nothing
//! here fails: out-of-domain results are carried as infinities.

pub mod events;
pub mod hour_angle;
pub mod qibla;
pub mod sun;
pub mod trig;

pub use events::{AsrRatio, asr, asr_altitude_deg, fajr, isha, maghrib, sunrise, zuhr};
pub use hour_angle::{cos_hour_angle, horizon_altitude_deg, hour_angle};
pub use qibla::{Dms, KAABA_LAT_DEG, KAABA_LNG_DEG, deg_to_dms, qibla, qibla_dms};
pub use sun::{decl_sun, eq_time};
