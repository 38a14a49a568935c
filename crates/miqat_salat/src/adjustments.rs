//! Per-event manual adjustments, added to the computed times.

use crate::event::{EVENT_COUNT, PrayerEvent};

/// Default Zuhr offset: wait two minutes for the Sun to clear the meridian.
pub const DEFAULT_ZUHR_OFFSET_HOURS: f64 = 2.0 / 60.0;

/// Additive offsets in hours, one per event.
///
/// A plain value: every calculation copies the adjustments it was
/// configured with, so there is no shared default to mutate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    hours: [f64; EVENT_COUNT],
}

impl Adjustments {
    /// All offsets zero.
    pub const fn none() -> Self {
        Self {
            hours: [0.0; EVENT_COUNT],
        }
    }

    /// Set one event's offset in hours.
    pub const fn with(mut self, event: PrayerEvent, hours: f64) -> Self {
        self.hours[event.index()] = hours;
        self
    }

    /// Set one event's offset in minutes.
    pub fn with_minutes(self, event: PrayerEvent, minutes: f64) -> Self {
        self.with(event, minutes / 60.0)
    }

    pub fn get(&self, event: PrayerEvent) -> f64 {
        self.hours[event.index()]
    }

    pub fn as_array(&self) -> &[f64; EVENT_COUNT] {
        &self.hours
    }

    /// Add each offset to the matching entry of `times`.
    pub fn apply(&self, times: [f64; EVENT_COUNT]) -> [f64; EVENT_COUNT] {
        std::array::from_fn(|i| times[i] + self.hours[i])
    }
}

impl Default for Adjustments {
    /// Zuhr +2 minutes, everything else zero.
    fn default() -> Self {
        Self::none().with(PrayerEvent::Zuhr, DEFAULT_ZUHR_OFFSET_HOURS)
    }
}

/// Unlisted events get zero.
impl FromIterator<(PrayerEvent, f64)> for Adjustments {
    fn from_iter<I: IntoIterator<Item = (PrayerEvent, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::none(), |adj, (event, hours)| adj.with(event, hours))
    }
}
