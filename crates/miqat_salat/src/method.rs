//! Calculation conventions: twilight angles, Asr ratio and adjustments.
//!
//! The named conventions differ only in the Sun depression used for fajr
//! and isha. Asr ratio and per-event adjustments are chosen separately.

use std::str::FromStr;

use miqat_solar::AsrRatio;

use crate::adjustments::Adjustments;
use crate::error::SalatError;

/// Fajr and isha depression angles in degrees below the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwilightAngles {
    pub fajr_deg: f64,
    pub isha_deg: f64,
}

impl TwilightAngles {
    pub const fn new(fajr_deg: f64, isha_deg: f64) -> Self {
        Self { fajr_deg, isha_deg }
    }
}

impl From<(f64, f64)> for TwilightAngles {
    fn from((fajr_deg, isha_deg): (f64, f64)) -> Self {
        Self::new(fajr_deg, isha_deg)
    }
}

/// Named twilight-angle conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMethod {
    /// Muslim World League: 18 / 17.
    Mwl,
    /// Islamic Society of North America: 15 / 15.
    Isna,
    /// Egyptian General Authority of Survey: 19.5 / 17.5.
    Egypt,
    /// University of Islamic Sciences, Karachi: 18 / 18.
    Karachi,
    /// Muhammadiyah (Indonesia): 20 / 18.
    Muhammadiyah,
}

/// All named methods in table order.
pub const ALL_METHODS: [CalculationMethod; 5] = [
    CalculationMethod::Mwl,
    CalculationMethod::Isna,
    CalculationMethod::Egypt,
    CalculationMethod::Karachi,
    CalculationMethod::Muhammadiyah,
];

impl CalculationMethod {
    pub const fn angles(self) -> TwilightAngles {
        match self {
            Self::Mwl => TwilightAngles::new(18.0, 17.0),
            Self::Isna => TwilightAngles::new(15.0, 15.0),
            Self::Egypt => TwilightAngles::new(19.5, 17.5),
            Self::Karachi => TwilightAngles::new(18.0, 18.0),
            Self::Muhammadiyah => TwilightAngles::new(20.0, 18.0),
        }
    }

    /// Lookup key, as accepted by [`CalculationMethod::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mwl => "mwl",
            Self::Isna => "isna",
            Self::Egypt => "egypt",
            Self::Karachi => "karachi",
            Self::Muhammadiyah => "muhammadiyah",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Mwl => "Muslim World League",
            Self::Isna => "Islamic Society of North America",
            Self::Egypt => "Egyptian General Authority of Survey",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Muhammadiyah => "Muhammadiyah",
        }
    }

    /// Case-insensitive lookup in the method table.
    ///
    /// # Errors
    /// [`SalatError::UnknownMethod`] for names not in the table.
    pub fn from_name(name: &str) -> Result<Self, SalatError> {
        ALL_METHODS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SalatError::UnknownMethod(name.to_string()))
    }
}

impl FromStr for CalculationMethod {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<CalculationMethod> for TwilightAngles {
    fn from(method: CalculationMethod) -> Self {
        method.angles()
    }
}

/// Everything about a calculation that does not depend on place or date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodConfig {
    pub angles: TwilightAngles,
    pub asr_ratio: AsrRatio,
    pub adjustments: Adjustments,
}

impl MethodConfig {
    pub fn new(
        angles: impl Into<TwilightAngles>,
        asr_ratio: AsrRatio,
        adjustments: Adjustments,
    ) -> Self {
        Self {
            angles: angles.into(),
            asr_ratio,
            adjustments,
        }
    }

    /// Method from a table name, an optional Asr school name and optional
    /// adjustments.
    ///
    /// `asr` of `"hanafi"` selects the Hanafi ratio; anything else the
    /// majority one. Missing adjustments fall back to
    /// [`Adjustments::default`].
    ///
    /// # Errors
    /// [`SalatError::UnknownMethod`] for names not in the table.
    pub fn named(
        name: &str,
        asr: Option<&str>,
        adjustments: Option<Adjustments>,
    ) -> Result<Self, SalatError> {
        let method = CalculationMethod::from_name(name)?;
        Ok(Self::new(
            method,
            AsrRatio::from_name(asr),
            adjustments.unwrap_or_default(),
        ))
    }
}

impl Default for MethodConfig {
    /// MWL angles, majority Asr, default adjustments.
    fn default() -> Self {
        Self::from(CalculationMethod::Mwl)
    }
}

impl From<CalculationMethod> for MethodConfig {
    fn from(method: CalculationMethod) -> Self {
        Self::new(method, AsrRatio::default(), Adjustments::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PrayerEvent;

    #[test]
    fn table_angles() {
        assert_eq!(CalculationMethod::Mwl.angles(), TwilightAngles::new(18.0, 17.0));
        assert_eq!(CalculationMethod::Isna.angles(), TwilightAngles::new(15.0, 15.0));
        assert_eq!(CalculationMethod::Egypt.angles(), TwilightAngles::new(19.5, 17.5));
        assert_eq!(CalculationMethod::Karachi.angles(), TwilightAngles::new(18.0, 18.0));
        assert_eq!(
            CalculationMethod::Muhammadiyah.angles(),
            TwilightAngles::new(20.0, 18.0)
        );
    }

    #[test]
    fn lookup_by_name() {
        for m in ALL_METHODS {
            assert_eq!(CalculationMethod::from_name(m.name()).unwrap(), m);
        }
        assert_eq!("EGYPT".parse::<CalculationMethod>().unwrap(), CalculationMethod::Egypt);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            CalculationMethod::from_name("umm-al-qura"),
            Err(SalatError::UnknownMethod("umm-al-qura".to_string()))
        );
    }

    #[test]
    fn named_defaults() {
        let m = MethodConfig::named("egypt", None, None).unwrap();
        assert_eq!(m.angles, TwilightAngles::new(19.5, 17.5));
        assert_eq!(m.asr_ratio, AsrRatio::Majority);
        assert_eq!(m.adjustments, Adjustments::default());
    }

    #[test]
    fn named_hanafi_no_adjust() {
        let m = MethodConfig::named("mwl", Some("hanafi"), Some(Adjustments::none())).unwrap();
        assert_eq!(m.asr_ratio, AsrRatio::Hanafi);
        assert_eq!(m.adjustments.get(PrayerEvent::Zuhr), 0.0);
    }

    #[test]
    fn explicit_angles() {
        let m = MethodConfig::new((17.5, 16.0), AsrRatio::Majority, Adjustments::none());
        assert_eq!(m.angles.fajr_deg, 17.5);
        assert_eq!(m.angles.isha_deg, 16.0);
    }

    #[test]
    fn named_unknown_fails() {
        assert!(MethodConfig::named("nope", None, None).is_err());
    }
}
