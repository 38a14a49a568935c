//! Daily prayer-time calculation.
//!
//! [`calculate`] is the whole computation: a pure function of a
//! [`CalculationConfig`] and a Julian Day. [`PrayerCalculator`] pairs a
//! config with a working date for the "configure once, compute many days"
//! workflow.

use chrono::NaiveDate;
use log::{debug, trace};
use miqat_solar::{asr, decl_sun, eq_time, fajr, isha, maghrib, sunrise, zuhr};
use miqat_time::{GregorianDate, adjust_jd_hour, gregorian_to_jd, jd_to_gregorian};

use crate::config::CalculationConfig;
use crate::error::SalatError;
use crate::event::{ALL_EVENTS, EventOutcome};
use crate::times::Times;

/// Prayer times for the civil day starting at `jd` (0h).
///
/// The Sun is evaluated once, at local midday. Adjustments are added
/// after the raw times, and infinities survive unchanged.
pub fn calculate(config: &CalculationConfig, jd: f64) -> Times {
    let loc = &config.location;
    let method = &config.method;
    let tz = loc.tz_hours();

    let jd_noon = adjust_jd_hour(jd, -tz + 12.0);
    let decl = decl_sun(jd_noon);
    let et = eq_time(jd_noon);
    let transit = zuhr(loc.longitude_deg, tz, et);
    debug!("jd_noon={jd_noon:.5} decl={decl:.5} eq_time={et:.6} transit={transit:.6}");

    let lat = loc.latitude_deg;
    let raw = [
        fajr(transit, lat, decl, method.angles.fajr_deg),
        sunrise(transit, lat, decl, loc.altitude_m),
        transit,
        asr(transit, lat, decl, method.asr_ratio),
        maghrib(transit, lat, decl, loc.altitude_m),
        isha(transit, lat, decl, method.angles.isha_deg),
    ];
    trace!("raw event hours: {raw:?}");

    let times = Times::new(method.adjustments.apply(raw));
    for event in ALL_EVENTS {
        match times.outcome(event) {
            EventOutcome::At(_) => {}
            EventOutcome::Never => debug!("{} never reached at lat {lat}", event.name()),
            EventOutcome::AlwaysPast => {
                debug!("{} always exceeded at lat {lat}", event.name())
            }
        }
    }
    times
}

/// [`calculate`] for a calendar date.
///
/// # Errors
/// [`SalatError::Time`] when the date is before the supported epoch.
pub fn calculate_date(config: &CalculationConfig, date: GregorianDate) -> Result<Times, SalatError> {
    Ok(calculate(config, date.to_jd()?))
}

/// A configuration bound to a working date.
///
/// ```
/// use miqat_salat::{CalculationConfig, Location, PrayerCalculator};
///
/// let config = CalculationConfig::builder(Location::new(-6.1814, 106.854, 0.0, 7.0)).build();
/// let mut calc = PrayerCalculator::new(config);
/// calc.set_date(2015, 1, 1)?;
/// let today = calc.calculate();
/// calc.set_date_relative(1);
/// let tomorrow = calc.calculate();
/// assert_ne!(today, tomorrow);
/// # Ok::<(), miqat_salat::SalatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerCalculator {
    config: CalculationConfig,
    jd: f64,
}

impl PrayerCalculator {
    /// Calculator at J2000.0's civil date (2000-01-01, JD 2451544.5).
    pub fn new(config: CalculationConfig) -> Self {
        Self {
            config,
            jd: 2_451_544.5,
        }
    }

    /// Calculator already bound to `jd`.
    pub fn at_jd(config: CalculationConfig, jd: f64) -> Self {
        Self { config, jd }
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Swap the configuration, keeping the date.
    pub fn set_config(&mut self, config: CalculationConfig) {
        self.config = config;
    }

    /// Working Julian Day (0h).
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// # Errors
    /// [`SalatError::Time`] if the working JD is before the epoch.
    pub fn date(&self) -> Result<GregorianDate, SalatError> {
        Ok(jd_to_gregorian(self.jd)?)
    }

    /// Bind a calendar date.
    ///
    /// # Errors
    /// [`SalatError::Time`] for years before -4712. The working date is
    /// unchanged on error.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) -> Result<(), SalatError> {
        self.jd = gregorian_to_jd(year, month, day)?;
        Ok(())
    }

    /// Bind a `chrono` date.
    ///
    /// # Errors
    /// Same as [`PrayerCalculator::set_date`].
    pub fn set_naive_date(&mut self, date: NaiveDate) -> Result<(), SalatError> {
        let g = GregorianDate::from(date);
        self.set_date(g.year, g.month, g.day)
    }

    /// Move the working date by whole days, either direction.
    pub fn set_date_relative(&mut self, delta_days: i64) {
        self.jd += delta_days as f64;
    }

    pub fn calculate(&self) -> Times {
        calculate(&self.config, self.jd)
    }

    /// Times for `count` consecutive days from the working date.
    pub fn days(&self, count: usize) -> impl Iterator<Item = (f64, Times)> + '_ {
        (0..count).map(move |i| {
            let jd = self.jd + i as f64;
            (jd, calculate(&self.config, jd))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustments::Adjustments;
    use crate::config::Location;
    use crate::event::PrayerEvent;
    use crate::method::CalculationMethod;

    fn jakarta_egypt() -> CalculationConfig {
        CalculationConfig::builder(Location::new(-6.1814, 106.854, 0.0, 7.0))
            .method(CalculationMethod::Egypt)
            .build()
    }

    #[test]
    fn jakarta_raw_values() {
        let t = calculate_date(&jakarta_egypt(), GregorianDate::new(2015, 1, 1)).unwrap();
        let expected = [4.314325, 5.694800, 11.964764, 15.379606, 18.168062, 19.398270];
        for (event, want) in ALL_EVENTS.iter().zip(expected) {
            assert!(
                (t[*event] - want).abs() < 1e-4,
                "{}: {} vs {want}",
                event.name(),
                t[*event]
            );
        }
    }

    #[test]
    fn adjustments_shift_zuhr_only() {
        let with = calculate_date(&jakarta_egypt(), GregorianDate::new(2015, 1, 1)).unwrap();
        let mut config = jakarta_egypt();
        config.method.adjustments = Adjustments::none();
        let without = calculate_date(&config, GregorianDate::new(2015, 1, 1)).unwrap();
        assert!((with[PrayerEvent::Zuhr] - without[PrayerEvent::Zuhr] - 2.0 / 60.0).abs() < 1e-12);
        assert_eq!(with[PrayerEvent::Fajr], without[PrayerEvent::Fajr]);
        assert_eq!(with[PrayerEvent::Isha], without[PrayerEvent::Isha]);
    }

    #[test]
    fn repeatable() {
        let mut calc = PrayerCalculator::new(jakarta_egypt());
        calc.set_date(2015, 1, 1).unwrap();
        assert_eq!(calc.calculate(), calc.calculate());
    }

    #[test]
    fn relative_date() {
        let mut calc = PrayerCalculator::new(jakarta_egypt());
        calc.set_date(2015, 1, 1).unwrap();
        calc.set_date_relative(31);
        assert_eq!(calc.date().unwrap(), GregorianDate::new(2015, 2, 1));
        calc.set_date_relative(-32);
        assert_eq!(calc.date().unwrap(), GregorianDate::new(2014, 12, 31));
    }

    #[test]
    fn naive_date_matches_ymd() {
        let mut a = PrayerCalculator::new(jakarta_egypt());
        let mut b = a;
        a.set_date(2015, 1, 1).unwrap();
        b.set_naive_date(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap())
            .unwrap();
        assert_eq!(a.jd(), b.jd());
    }

    #[test]
    fn bad_date_keeps_previous() {
        let mut calc = PrayerCalculator::new(jakarta_egypt());
        calc.set_date(2015, 1, 1).unwrap();
        let jd = calc.jd();
        assert!(calc.set_date(-5000, 1, 1).is_err());
        assert_eq!(calc.jd(), jd);
    }

    #[test]
    fn days_iterates_consecutive_jds() {
        let mut calc = PrayerCalculator::new(jakarta_egypt());
        calc.set_date(2015, 1, 1).unwrap();
        let days: Vec<_> = calc.days(3).collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].0, calc.jd());
        assert_eq!(days[2].0, calc.jd() + 2.0);
        assert_eq!(days[0].1, calc.calculate());
    }
}
