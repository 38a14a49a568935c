//! Equation of time and solar declination.
//!
//! Truncated Fourier series, good to well under a minute of time across
//! several centuries around J2000. Both take a Julian Day (UT is close
//! enough at this precision).

use std::f64::consts::PI;

use miqat_time::J2000_JD;

use crate::trig::{cos_deg, sin_deg};

/// Days in a Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Degrees per radian as used by the declination series coefficients.
const SERIES_DEG_PER_RAD: f64 = 57.297;

/// Equation of time in hours (apparent minus mean solar time).
///
/// Series in the Sun's mean longitude
/// `L0 = 280.46607 + 36000.7698 u`, with `u` in Julian centuries from J2000.
pub fn eq_time(jd: f64) -> f64 {
    let u = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let l0 = 280.46607 + 36_000.7698 * u;
    (-(1789.0 + 237.0 * u) * sin_deg(l0) - (7146.0 - 62.0 * u) * cos_deg(l0)
        + (9934.0 - 14.0 * u) * sin_deg(2.0 * l0)
        - (29.0 + 5.0 * u) * cos_deg(2.0 * l0)
        + (74.0 + 10.0 * u) * sin_deg(3.0 * l0)
        + (320.0 - 4.0 * u) * cos_deg(3.0 * l0)
        - 212.0 * sin_deg(4.0 * l0))
        / 60_000.0
}

/// Solar declination in degrees.
///
/// Three-harmonic series in the angle of the date
/// `t = 2π (jd - J2000) / 365.25`.
pub fn decl_sun(jd: f64) -> f64 {
    let t = 2.0 * PI * (jd - J2000_JD) / 365.25;
    let x = SERIES_DEG_PER_RAD * t;
    0.37877
        + 23.264 * sin_deg(x - 79.547)
        + 0.3812 * sin_deg(2.0 * x - 82.682)
        + 0.17132 * sin_deg(3.0 * x - 59.722)
}
