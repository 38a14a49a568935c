//! Hour angle of the Sun at a target altitude.
//!
//! Inverts the altitude equation of spherical astronomy
//!
//! ```text
//! sin(h) = sin(phi) sin(dec) + cos(phi) cos(dec) cos(H)
//! ```
//!
//! for the hour angle `H`. At high latitudes the Sun may never reach (or
//! never drop below) the requested altitude, in which case `cos(H)` falls
//! outside [-1, 1]. Those cases come back as signed infinities instead of
//! NaN so that the caller's `transit ± H/15` keeps the direction.

use crate::trig::{acos_deg, cos_deg, sin_deg};

/// Refraction (34') plus solar semidiameter (16'), in degrees.
pub const HORIZON_DEPRESSION_DEG: f64 = 0.8333;

/// Dip of the horizon per sqrt(meter) of observer height, in degrees.
pub const DIP_DEG_PER_SQRT_M: f64 = 0.0347;

/// Sun altitude at sunrise/sunset for an observer `height_m` above the
/// surrounding terrain.
///
/// `-0.8333 - 0.0347 sqrt(height)`
pub fn horizon_altitude_deg(height_m: f64) -> f64 {
    -HORIZON_DEPRESSION_DEG - DIP_DEG_PER_SQRT_M * height_m.sqrt()
}

/// Cosine of the hour angle at which the Sun stands at `altitude_deg`.
///
/// May lie outside [-1, 1]; see [`hour_angle`].
pub fn cos_hour_angle(lat_deg: f64, altitude_deg: f64, decl_deg: f64) -> f64 {
    (sin_deg(altitude_deg) - sin_deg(lat_deg) * sin_deg(decl_deg))
        / (cos_deg(lat_deg) * cos_deg(decl_deg))
}

/// Hour angle in degrees at which the Sun stands at `altitude_deg`.
///
/// Returns
/// * a value in [0, 180] when the altitude is crossed,
/// * `+inf` when the Sun never reaches the altitude (`cos H > 1`),
/// * `-inf` when the Sun never drops to it (`cos H < -1`).
pub fn hour_angle(lat_deg: f64, altitude_deg: f64, decl_deg: f64) -> f64 {
    let cos_ha = cos_hour_angle(lat_deg, altitude_deg, decl_deg);
    if cos_ha > 1.0 {
        f64::INFINITY
    } else if cos_ha < -1.0 {
        f64::NEG_INFINITY
    } else {
        acos_deg(cos_ha)
    }
}
