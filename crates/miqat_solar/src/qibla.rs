//! Qibla direction: great-circle bearing towards the Kaaba.

use crate::trig::{atan2_deg, cos_deg, normalize_360, sin_deg, tan_deg};

/// Latitude of the Kaaba in degrees.
pub const KAABA_LAT_DEG: f64 = 21.422_508_33;

/// Longitude of the Kaaba in degrees (east positive).
pub const KAABA_LNG_DEG: f64 = 39.826_161_11;

/// Initial bearing from (`lat`, `lng`) to the Kaaba, degrees clockwise
/// from true north, in [0, 360).
pub fn qibla(lat_deg: f64, lng_deg: f64) -> f64 {
    let dlng = KAABA_LNG_DEG - lng_deg;
    normalize_360(atan2_deg(
        sin_deg(dlng),
        cos_deg(lat_deg) * tan_deg(KAABA_LAT_DEG) - sin_deg(lat_deg) * cos_deg(dlng),
    ))
}

/// Signed degrees / arc-minutes / arc-seconds.
///
/// For negative angles every non-zero component is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: i32,
    /// Arc-seconds, may include a fractional part.
    pub seconds: f64,
}

/// Split decimal degrees into degrees, minutes and seconds, truncating
/// towards zero.
pub fn deg_to_dms(deg: f64) -> Dms {
    let total_seconds = deg * 3600.0;
    Dms {
        degrees: deg.trunc() as i32,
        minutes: ((total_seconds % 3600.0) / 60.0).trunc() as i32,
        seconds: total_seconds % 60.0,
    }
}

/// Qibla bearing split into degrees, minutes and seconds.
pub fn qibla_dms(lat_deg: f64, lng_deg: f64) -> Dms {
    deg_to_dms(qibla(lat_deg, lng_deg))
}
