//! Where and when events stop being defined.
//!
//! Scans a latitude × day grid along the Greenwich meridian (UTC) and
//! counts, per latitude, the days on which each event is never reached or
//! always exceeded.

use log::debug;
use miqat_time::{GregorianDate, UtcOffset};

use crate::calculator::calculate;
use crate::config::{CalculationConfig, Location};
use crate::error::SalatError;
use crate::event::{ALL_EVENTS, EVENT_COUNT, EventOutcome, PrayerEvent};
use crate::method::MethodConfig;

/// Most latitude rows a grid may produce.
pub const MAX_LAT_ROWS: usize = 1_000_000;

/// Sampling grid for [`scan`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanGrid {
    /// First sampled day.
    pub start: GregorianDate,
    /// Length of the sampled period in days.
    pub days: u32,
    /// Days between samples.
    pub step_days: u32,
    /// First (northernmost) latitude.
    pub lat_north_deg: f64,
    /// Last (southernmost) latitude, inclusive.
    pub lat_south_deg: f64,
    /// Degrees between latitude rows.
    pub step_lat_deg: f64,
}

impl Default for ScanGrid {
    /// 2015 sampled every 5 days, 90°N to 90°S every degree.
    fn default() -> Self {
        Self {
            start: GregorianDate::new(2015, 1, 1),
            days: 365,
            step_days: 5,
            lat_north_deg: 90.0,
            lat_south_deg: -90.0,
            step_lat_deg: 1.0,
        }
    }
}

impl ScanGrid {
    fn validate(&self) -> Result<(), SalatError> {
        if self.step_days == 0 {
            return Err(SalatError::InvalidScan("step_days must be positive"));
        }
        if self.days == 0 {
            return Err(SalatError::InvalidScan("days must be positive"));
        }
        if self.step_lat_deg.is_nan() || self.step_lat_deg <= 0.0 {
            return Err(SalatError::InvalidScan("step_lat_deg must be positive"));
        }
        if self.lat_north_deg < self.lat_south_deg {
            return Err(SalatError::InvalidScan("lat_north_deg below lat_south_deg"));
        }
        match self.lat_rows() {
            Some(rows) if rows <= MAX_LAT_ROWS => Ok(()),
            _ => Err(SalatError::InvalidScan("too many latitude rows")),
        }
    }

    /// Number of latitude rows, `None` if the range or step is not finite
    /// or the count does not fit in `usize`.
    fn lat_rows(&self) -> Option<usize> {
        let span = (self.lat_north_deg - self.lat_south_deg) / self.step_lat_deg;
        if !span.is_finite() || span < 0.0 {
            return None;
        }
        let whole = (span + 1e-9).floor();
        if whole >= usize::MAX as f64 {
            return None;
        }
        (whole as usize).checked_add(1)
    }

    /// Latitudes from north to south. Empty for a grid that fails
    /// validation in [`scan`].
    pub fn latitudes(&self) -> impl Iterator<Item = f64> + '_ {
        let rows = self.lat_rows().filter(|&n| n <= MAX_LAT_ROWS).unwrap_or(0);
        (0..rows).map(move |i| self.lat_north_deg - i as f64 * self.step_lat_deg)
    }

    /// Day offsets from `start`.
    pub fn day_offsets(&self) -> impl Iterator<Item = u32> {
        (0..self.days).step_by(self.step_days.max(1) as usize)
    }
}

/// Undefined-event counts for one latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeSummary {
    pub latitude_deg: f64,
    /// Days sampled.
    pub samples: u32,
    never: [u32; EVENT_COUNT],
    always_past: [u32; EVENT_COUNT],
}

impl LatitudeSummary {
    fn new(latitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            samples: 0,
            never: [0; EVENT_COUNT],
            always_past: [0; EVENT_COUNT],
        }
    }

    fn record(&mut self, event: PrayerEvent, outcome: EventOutcome) {
        match outcome {
            EventOutcome::At(_) => {}
            EventOutcome::Never => self.never[event.index()] += 1,
            EventOutcome::AlwaysPast => self.always_past[event.index()] += 1,
        }
    }

    /// Sampled days on which the Sun never reached `event`'s altitude.
    pub fn never(&self, event: PrayerEvent) -> u32 {
        self.never[event.index()]
    }

    /// Sampled days on which the Sun stayed past `event`'s altitude.
    pub fn always_past(&self, event: PrayerEvent) -> u32 {
        self.always_past[event.index()]
    }

    pub fn undefined(&self, event: PrayerEvent) -> u32 {
        self.never(event) + self.always_past(event)
    }

    /// Every event defined on every sampled day.
    pub fn is_regular(&self) -> bool {
        ALL_EVENTS.iter().all(|e| self.undefined(*e) == 0)
    }
}

/// Count undefined events per latitude for `method` over `grid`.
///
/// # Errors
/// [`SalatError::InvalidScan`] for a degenerate grid, [`SalatError::Time`]
/// if the start date is out of range.
pub fn scan(method: &MethodConfig, grid: &ScanGrid) -> Result<Vec<LatitudeSummary>, SalatError> {
    grid.validate()?;
    let jd0 = grid.start.to_jd()?;
    let rows: Vec<LatitudeSummary> = grid
        .latitudes()
        .map(|lat| {
            let config = CalculationConfig::new(
                *method,
                Location::new(lat, 0.0, 0.0, UtcOffset::UTC),
            );
            let mut row = LatitudeSummary::new(lat);
            for offset in grid.day_offsets() {
                let times = calculate(&config, jd0 + f64::from(offset));
                row.samples += 1;
                for event in ALL_EVENTS {
                    row.record(event, times.outcome(event));
                }
            }
            row
        })
        .collect();
    debug!(
        "extreme scan: {} latitudes, {} irregular",
        rows.len(),
        rows.iter().filter(|r| !r.is_regular()).count()
    );
    Ok(rows)
}
