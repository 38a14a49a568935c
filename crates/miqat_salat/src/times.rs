//! A day's prayer times and their conversion to clock times.
//!
//! Raw values are fractional local hours. Infinite values mark events the
//! Sun does not produce that day; see [`EventOutcome`]. Clock conversion
//! rounds *up* to the next whole minute (or second), so a reported time is
//! never earlier than the computed one.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use chrono::NaiveTime;
use log::debug;

use crate::event::{ALL_EVENTS, EVENT_COUNT, EventOutcome, PrayerEvent};

/// Granularity of clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    #[default]
    Minutes,
    Seconds,
}

/// Local wall-clock time in [00:00, 24:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    /// `None` at minute precision.
    pub second: Option<u32>,
}

impl ClockTime {
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second.unwrap_or(0))
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.second {
            Some(s) => write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, s),
            None => write!(f, "{:02}:{:02}", self.hour, self.minute),
        }
    }
}

/// Whole units (minutes or seconds) since midnight, rounded up, if the
/// value is a finite non-negative time before 24:00.
fn ceil_units(hours: f64, units_per_hour: f64) -> Option<u64> {
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    let units = (hours * units_per_hour).ceil();
    (units < 24.0 * units_per_hour).then_some(units as u64)
}

/// Hours to (hour, minute), rounding up to the next whole minute.
///
/// `None` for infinite, NaN or negative input, and when rounding lands on
/// or after 24:00.
pub fn hours_to_hm(hours: f64) -> Option<(u32, u32)> {
    let minutes = ceil_units(hours, 60.0)?;
    Some(((minutes / 60) as u32, (minutes % 60) as u32))
}

/// Hours to (hour, minute, second), rounding up to the next whole second.
///
/// Same `None` cases as [`hours_to_hm`].
pub fn hours_to_hms(hours: f64) -> Option<(u32, u32, u32)> {
    let seconds = ceil_units(hours, 3600.0)?;
    Some((
        (seconds / 3600) as u32,
        (seconds % 3600 / 60) as u32,
        (seconds % 60) as u32,
    ))
}

/// The six event times of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Times {
    hours: [f64; EVENT_COUNT],
    precision: Precision,
}

impl Times {
    /// Wrap raw hour values, in canonical event order.
    ///
    /// When the Sun never rises (sunrise `-inf`) or never sets
    /// (maghrib `+inf`), zuhr and asr are forced to `+inf`: without a
    /// day/night cycle there is no meaningful transit to anchor them.
    pub fn new(mut hours: [f64; EVENT_COUNT]) -> Self {
        let sunrise = hours[PrayerEvent::Sunrise.index()];
        let maghrib = hours[PrayerEvent::Maghrib.index()];
        if sunrise == f64::NEG_INFINITY || maghrib == f64::INFINITY {
            debug!("no sunrise/sunset today; zuhr and asr set to +inf");
            hours[PrayerEvent::Zuhr.index()] = f64::INFINITY;
            hours[PrayerEvent::Asr.index()] = f64::INFINITY;
        }
        Self {
            hours,
            precision: Precision::default(),
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Change clock-time granularity. Raw values are unaffected.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Shorthand for switching between [`Precision::Seconds`] and
    /// [`Precision::Minutes`].
    pub fn use_seconds(&mut self, on: bool) {
        self.precision = if on {
            Precision::Seconds
        } else {
            Precision::Minutes
        };
    }

    /// Raw value in fractional hours, possibly infinite.
    pub fn hours(&self, event: PrayerEvent) -> f64 {
        self.hours[event.index()]
    }

    /// All raw values in canonical order.
    pub fn as_array(&self) -> &[f64; EVENT_COUNT] {
        &self.hours
    }

    pub fn outcome(&self, event: PrayerEvent) -> EventOutcome {
        EventOutcome::of(event, self.hours(event))
    }

    /// Whether every event has a finite time.
    pub fn all_defined(&self) -> bool {
        self.hours.iter().all(|h| h.is_finite())
    }

    /// Clock time of `event` at the current precision, or `None` if the
    /// value has no clock representation.
    pub fn get(&self, event: PrayerEvent) -> Option<ClockTime> {
        let h = self.hours(event);
        match self.precision {
            Precision::Minutes => hours_to_hm(h).map(|(hour, minute)| ClockTime {
                hour,
                minute,
                second: None,
            }),
            Precision::Seconds => hours_to_hms(h).map(|(hour, minute, second)| ClockTime {
                hour,
                minute,
                second: Some(second),
            }),
        }
    }

    pub fn naive_time(&self, event: PrayerEvent) -> Option<NaiveTime> {
        self.get(event).and_then(ClockTime::to_naive_time)
    }

    pub fn fajr(&self) -> Option<ClockTime> {
        self.get(PrayerEvent::Fajr)
    }

    pub fn sunrise(&self) -> Option<ClockTime> {
        self.get(PrayerEvent::Sunrise)
    }

    pub fn zuhr(&self) -> Option<ClockTime> {
        self.get(PrayerEvent::Zuhr)
    }

    pub fn asr(&self) -> Option<ClockTime> {
        self.get(PrayerEvent::Asr)
    }

    pub fn maghrib(&self) -> Option<ClockTime> {
        self.get(PrayerEvent::Maghrib)
    }

    pub fn isha(&self) -> Option<ClockTime> {
        self.get(PrayerEvent::Isha)
    }

    /// Clock times in canonical order.
    pub fn iter(&self) -> TimesIter<'_> {
        TimesIter {
            times: self,
            next: 0,
        }
    }
}

impl Index<PrayerEvent> for Times {
    type Output = f64;

    fn index(&self, event: PrayerEvent) -> &f64 {
        &self.hours[event.index()]
    }
}

impl<'a> IntoIterator for &'a Times {
    type Item = Option<ClockTime>;
    type IntoIter = TimesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a day's clock times, see [`Times::iter`].
#[derive(Debug, Clone)]
pub struct TimesIter<'a> {
    times: &'a Times,
    next: usize,
}

impl Iterator for TimesIter<'_> {
    type Item = Option<ClockTime>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = ALL_EVENTS.get(self.next)?;
        self.next += 1;
        Some(self.times.get(*event))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = EVENT_COUNT - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for TimesIter<'_> {}
