//! UTC offsets in fractional hours.
//!
//! The calculation works with a plain numeric offset. When the caller holds
//! a `chrono` time zone instead, the offset in effect *now* is read from it;
//! historical daylight-saving transitions are not resolved here.

use chrono::{FixedOffset, Offset, TimeZone, Utc};

/// Signed offset from UTC, in hours (`7.0` means UTC+7).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct UtcOffset {
    hours: f64,
}

impl UtcOffset {
    pub const UTC: Self = Self { hours: 0.0 };

    pub fn from_hours(hours: f64) -> Self {
        Self { hours }
    }

    /// Offset from any fixed `chrono` offset.
    pub fn from_offset<O: Offset>(offset: &O) -> Self {
        let seconds = offset.fix().local_minus_utc();
        Self {
            hours: seconds as f64 / 3600.0,
        }
    }

    /// Offset currently in effect for a `chrono` time zone.
    pub fn from_timezone<Tz: TimeZone>(tz: &Tz) -> Self {
        let now = Utc::now().naive_utc();
        Self::from_offset(&tz.offset_from_utc_datetime(&now))
    }

    pub fn hours(self) -> f64 {
        self.hours
    }

    /// Nearest whole-second `FixedOffset`, if within chrono's ±24h range.
    pub fn to_fixed_offset(self) -> Option<FixedOffset> {
        FixedOffset::east_opt((self.hours * 3600.0).round() as i32)
    }
}

impl From<f64> for UtcOffset {
    fn from(hours: f64) -> Self {
        Self::from_hours(hours)
    }
}

impl From<FixedOffset> for UtcOffset {
    fn from(offset: FixedOffset) -> Self {
        Self::from_offset(&offset)
    }
}
