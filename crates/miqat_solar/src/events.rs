//! Local times of the six daily prayer events.
//!
//! Each event is the transit time shifted by the hour angle (in hours) at
//! which the Sun reaches that event's altitude: morning events subtract it,
//! afternoon and evening events add it. Times are fractional hours in the
//! caller's UTC offset. An infinite hour angle yields an infinite time, with
//! the sign flipped on the morning side.

use crate::hour_angle::{horizon_altitude_deg, hour_angle};
use crate::trig::{acot_deg, tan_deg};

/// Shadow-length convention for the Asr time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsrRatio {
    /// Shadow equals object length plus its noon shadow (Shafi'i, Maliki, Hanbali).
    #[default]
    Majority,
    /// Shadow equals twice the object length plus its noon shadow.
    Hanafi,
}

impl AsrRatio {
    /// Shadow-to-object length ratio: 1 or 2.
    pub const fn shadow_ratio(self) -> f64 {
        match self {
            Self::Majority => 1.0,
            Self::Hanafi => 2.0,
        }
    }

    /// `"hanafi"` (any case) selects [`AsrRatio::Hanafi`]; anything else,
    /// including no name at all, selects [`AsrRatio::Majority`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if n.eq_ignore_ascii_case("hanafi") => Self::Hanafi,
            _ => Self::Majority,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Majority => "majority",
            Self::Hanafi => "hanafi",
        }
    }
}

/// Local time of solar transit in hours.
///
/// `12 + tz - lng/15 - et`, with `et` the equation of time in hours.
pub fn zuhr(lng_deg: f64, tz_hours: f64, eq_time_hours: f64) -> f64 {
    12.0 + tz_hours - lng_deg / 15.0 - eq_time_hours
}

/// Sun altitude at the start of Asr.
///
/// `arccot(ratio + tan|dec - lat|)`
pub fn asr_altitude_deg(lat_deg: f64, decl_deg: f64, ratio: AsrRatio) -> f64 {
    acot_deg(ratio.shadow_ratio() + tan_deg((decl_deg - lat_deg).abs()))
}

/// Fajr: Sun `fajr_angle_deg` below the horizon before sunrise.
pub fn fajr(transit: f64, lat_deg: f64, decl_deg: f64, fajr_angle_deg: f64) -> f64 {
    transit - hour_angle(lat_deg, -fajr_angle_deg, decl_deg) / 15.0
}

/// Sunrise: upper limb on the (refracted, height-dipped) horizon.
pub fn sunrise(transit: f64, lat_deg: f64, decl_deg: f64, height_m: f64) -> f64 {
    transit - hour_angle(lat_deg, horizon_altitude_deg(height_m), decl_deg) / 15.0
}

/// Asr: object shadow reaches `ratio` times its length plus the noon shadow.
pub fn asr(transit: f64, lat_deg: f64, decl_deg: f64, ratio: AsrRatio) -> f64 {
    let alt = asr_altitude_deg(lat_deg, decl_deg, ratio);
    transit + hour_angle(lat_deg, alt, decl_deg) / 15.0
}

/// Maghrib: sunset, same altitude as sunrise on the evening side.
pub fn maghrib(transit: f64, lat_deg: f64, decl_deg: f64, height_m: f64) -> f64 {
    transit + hour_angle(lat_deg, horizon_altitude_deg(height_m), decl_deg) / 15.0
}

/// Isha: Sun `isha_angle_deg` below the horizon after sunset.
pub fn isha(transit: f64, lat_deg: f64, decl_deg: f64, isha_angle_deg: f64) -> f64 {
    transit + hour_angle(lat_deg, -isha_angle_deg, decl_deg) / 15.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zuhr_greenwich() {
        assert_eq!(zuhr(0.0, 0.0, 0.0), 12.0);
    }

    #[test]
    fn zuhr_jakarta() {
        // 106.854E in UTC+7, eq_time -3 min
        let t = zuhr(106.854, 7.0, -0.05);
        assert!((t - (19.0 - 7.1236 + 0.05)).abs() < 1e-3, "t = {t}");
    }

    #[test]
    fn asr_ratio_from_name() {
        assert_eq!(AsrRatio::from_name(Some("hanafi")), AsrRatio::Hanafi);
        assert_eq!(AsrRatio::from_name(Some("Hanafi")), AsrRatio::Hanafi);
        assert_eq!(AsrRatio::from_name(Some("majority")), AsrRatio::Majority);
        assert_eq!(AsrRatio::from_name(Some("shafii")), AsrRatio::Majority);
        assert_eq!(AsrRatio::from_name(None), AsrRatio::Majority);
    }

    #[test]
    fn asr_altitude_sun_overhead() {
        // dec == lat: shadow at noon is zero, so alt = arccot(ratio).
        assert!((asr_altitude_deg(10.0, 10.0, AsrRatio::Majority) - 45.0).abs() < 1e-12);
        let hanafi = asr_altitude_deg(10.0, 10.0, AsrRatio::Hanafi);
        assert!((hanafi - 26.565_051).abs() < 1e-5, "alt = {hanafi}");
    }

    #[test]
    fn equinox_equator_day_is_symmetric() {
        let transit = 12.0;
        let rise = sunrise(transit, 0.0, 0.0, 0.0);
        let set = maghrib(transit, 0.0, 0.0, 0.0);
        assert!(((transit - rise) - (set - transit)).abs() < 1e-12);
        // Slightly longer than 12h because of refraction.
        assert!(set - rise > 12.0 && set - rise < 12.2);
    }

    #[test]
    fn event_order_mid_latitude() {
        let (lat, dec, transit) = (30.0, 10.0, 12.0);
        let f = fajr(transit, lat, dec, 18.0);
        let r = sunrise(transit, lat, dec, 0.0);
        let a = asr(transit, lat, dec, AsrRatio::Majority);
        let m = maghrib(transit, lat, dec, 0.0);
        let i = isha(transit, lat, dec, 17.0);
        assert!(f < r && r < transit && transit < a && a < m && m < i);
    }

    #[test]
    fn hanafi_asr_is_later() {
        let maj = asr(12.0, 30.0, 10.0, AsrRatio::Majority);
        let han = asr(12.0, 30.0, 10.0, AsrRatio::Hanafi);
        assert!(han > maj);
    }

    #[test]
    fn height_widens_day() {
        let low = maghrib(12.0, 30.0, 10.0, 0.0);
        let high = maghrib(12.0, 30.0, 10.0, 1000.0);
        assert!(high > low);
        assert!(sunrise(12.0, 30.0, 10.0, 1000.0) < sunrise(12.0, 30.0, 10.0, 0.0));
    }

    #[test]
    fn polar_night_signs() {
        // Sun never rises: infinite hour angle, sunrise pushed to -inf,
        // sunset to +inf.
        assert_eq!(sunrise(12.0, 80.0, -23.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(maghrib(12.0, 80.0, -23.0, 0.0), f64::INFINITY);
        assert_eq!(fajr(12.0, 89.0, -23.0, 18.0), f64::NEG_INFINITY);
        assert_eq!(isha(12.0, 89.0, -23.0, 17.0), f64::INFINITY);
    }

    #[test]
    fn midnight_sun_signs() {
        assert_eq!(sunrise(12.0, 80.0, 23.0, 0.0), f64::INFINITY);
        assert_eq!(maghrib(12.0, 80.0, 23.0, 0.0), f64::NEG_INFINITY);
    }
}
