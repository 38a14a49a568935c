//! The six canonical prayer events.

use std::str::FromStr;

use crate::error::SalatError;

/// Number of canonical events.
pub const EVENT_COUNT: usize = 6;

/// A daily prayer event, in chronological order.
///
/// The discriminant is the event's index into per-day arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrayerEvent {
    /// Dawn: Sun at the method's fajr depression angle.
    Fajr = 0,
    /// Upper limb on the horizon.
    Sunrise = 1,
    /// Just after solar transit.
    Zuhr = 2,
    /// Afternoon: shadow ratio reached.
    Asr = 3,
    /// Sunset.
    Maghrib = 4,
    /// Nightfall: Sun at the method's isha depression angle.
    Isha = 5,
}

/// All events in canonical order.
pub const ALL_EVENTS: [PrayerEvent; EVENT_COUNT] = [
    PrayerEvent::Fajr,
    PrayerEvent::Sunrise,
    PrayerEvent::Zuhr,
    PrayerEvent::Asr,
    PrayerEvent::Maghrib,
    PrayerEvent::Isha,
];

impl PrayerEvent {
    /// 0-based position in canonical order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_EVENTS.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Zuhr => "zuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }

    /// Whether the event is computed on the morning side of transit.
    pub const fn is_morning(self) -> bool {
        matches!(self, Self::Fajr | Self::Sunrise)
    }
}

impl FromStr for PrayerEvent {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_EVENTS
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SalatError::UnknownEvent(s.to_string()))
    }
}

/// What a day's value for one event means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The event happens at this local time, in hours.
    At(f64),
    /// The Sun never reaches the event's altitude today.
    Never,
    /// The Sun stays past the event's altitude all day.
    AlwaysPast,
}

impl EventOutcome {
    /// Classify an afternoon-side value: `+inf` is [`EventOutcome::Never`],
    /// `-inf` is [`EventOutcome::AlwaysPast`]. NaN, which only arises from
    /// NaN inputs, is reported as [`EventOutcome::Never`].
    pub fn from_hours(hours: f64) -> Self {
        if hours.is_finite() {
            Self::At(hours)
        } else if hours == f64::NEG_INFINITY {
            Self::AlwaysPast
        } else {
            Self::Never
        }
    }

    /// Classify `event`'s value. Morning events subtract the hour angle
    /// from transit, so their infinities carry the opposite sign.
    pub fn of(event: PrayerEvent, hours: f64) -> Self {
        if event.is_morning() && hours.is_infinite() {
            Self::from_hours(-hours)
        } else {
            Self::from_hours(hours)
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Self::At(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_canonical_order() {
        for (i, e) in ALL_EVENTS.iter().enumerate() {
            assert_eq!(e.index(), i);
            assert_eq!(PrayerEvent::from_index(i), Some(*e));
        }
        assert_eq!(PrayerEvent::from_index(6), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!("asr".parse::<PrayerEvent>().unwrap(), PrayerEvent::Asr);
        assert_eq!("MAGHRIB".parse::<PrayerEvent>().unwrap(), PrayerEvent::Maghrib);
        assert!(matches!(
            "dhuha".parse::<PrayerEvent>(),
            Err(SalatError::UnknownEvent(_))
        ));
    }

    #[test]
    fn morning_side() {
        assert!(PrayerEvent::Fajr.is_morning());
        assert!(PrayerEvent::Sunrise.is_morning());
        assert!(!PrayerEvent::Zuhr.is_morning());
        assert!(!PrayerEvent::Isha.is_morning());
    }

    #[test]
    fn outcome_classification() {
        assert_eq!(EventOutcome::from_hours(5.5), EventOutcome::At(5.5));
        assert_eq!(EventOutcome::from_hours(f64::INFINITY), EventOutcome::Never);
        assert_eq!(
            EventOutcome::from_hours(f64::NEG_INFINITY),
            EventOutcome::AlwaysPast
        );
        assert_eq!(EventOutcome::from_hours(f64::NAN), EventOutcome::Never);
        assert!(!EventOutcome::Never.is_defined());
    }

    #[test]
    fn morning_outcomes_follow_hour_angle() {
        let inf = f64::INFINITY;
        // Polar night: sunrise is -inf, maghrib +inf; neither happens.
        assert_eq!(EventOutcome::of(PrayerEvent::Sunrise, -inf), EventOutcome::Never);
        assert_eq!(EventOutcome::of(PrayerEvent::Maghrib, inf), EventOutcome::Never);
        // Midnight sun: the horizon stays below the Sun all day.
        assert_eq!(EventOutcome::of(PrayerEvent::Fajr, inf), EventOutcome::AlwaysPast);
        assert_eq!(EventOutcome::of(PrayerEvent::Isha, -inf), EventOutcome::AlwaysPast);
        assert_eq!(EventOutcome::of(PrayerEvent::Sunrise, 5.5), EventOutcome::At(5.5));
        assert_eq!(
            EventOutcome::of(PrayerEvent::Fajr, f64::NAN),
            EventOutcome::Never
        );
    }
}
