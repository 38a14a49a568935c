//! Observer location and the full calculation configuration.

use chrono::TimeZone;
use miqat_solar::AsrRatio;
use miqat_time::UtcOffset;

use crate::adjustments::Adjustments;
use crate::error::SalatError;
use crate::method::{CalculationMethod, MethodConfig, TwilightAngles};

/// Observer position and the UTC offset results are expressed in.
///
/// Values are taken as given; nothing is range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above the surrounding terrain in meters, >= 0.
    pub altitude_m: f64,
    /// Offset of the local clock from UTC.
    pub utc_offset: UtcOffset,
}

impl Location {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
        utc_offset: impl Into<UtcOffset>,
    ) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            utc_offset: utc_offset.into(),
        }
    }

    /// Location whose UTC offset is the one `tz` has in effect now.
    pub fn with_timezone<Tz: TimeZone>(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
        tz: &Tz,
    ) -> Self {
        Self::new(
            latitude_deg,
            longitude_deg,
            altitude_m,
            UtcOffset::from_timezone(tz),
        )
    }

    pub fn tz_hours(&self) -> f64 {
        self.utc_offset.hours()
    }
}

/// Immutable inputs of a calculation, apart from the date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationConfig {
    pub method: MethodConfig,
    pub location: Location,
}

impl CalculationConfig {
    pub fn new(method: MethodConfig, location: Location) -> Self {
        Self { method, location }
    }

    /// Start a builder at `location` with [`MethodConfig::default`].
    pub fn builder(location: Location) -> CalculationConfigBuilder {
        CalculationConfigBuilder::new(location)
    }
}

/// Step-by-step construction of a [`CalculationConfig`].
///
/// ```
/// use miqat_salat::{CalculationConfig, Location};
///
/// let config = CalculationConfig::builder(Location::new(-6.1814, 106.854, 0.0, 7.0))
///     .method_name("egypt")?
///     .build();
/// assert_eq!(config.method.angles.fajr_deg, 19.5);
/// # Ok::<(), miqat_salat::SalatError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalculationConfigBuilder {
    method: MethodConfig,
    location: Location,
}

impl CalculationConfigBuilder {
    pub fn new(location: Location) -> Self {
        Self {
            method: MethodConfig::default(),
            location,
        }
    }

    /// Replace angles, Asr ratio and adjustments in one step.
    pub fn set_method(
        mut self,
        angles: impl Into<TwilightAngles>,
        asr_ratio: AsrRatio,
        adjustments: Adjustments,
    ) -> Self {
        self.method = MethodConfig::new(angles, asr_ratio, adjustments);
        self
    }

    /// Use the twilight angles of a named method.
    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.method.angles = method.angles();
        self
    }

    /// Use the twilight angles of a method looked up by name.
    ///
    /// # Errors
    /// [`SalatError::UnknownMethod`] for names not in the table.
    pub fn method_name(self, name: &str) -> Result<Self, SalatError> {
        Ok(self.method(CalculationMethod::from_name(name)?))
    }

    /// Use explicit fajr and isha depression angles.
    pub fn angles(mut self, fajr_deg: f64, isha_deg: f64) -> Self {
        self.method.angles = TwilightAngles::new(fajr_deg, isha_deg);
        self
    }

    pub fn asr_ratio(mut self, asr_ratio: AsrRatio) -> Self {
        self.method.asr_ratio = asr_ratio;
        self
    }

    pub fn adjustments(mut self, adjustments: Adjustments) -> Self {
        self.method.adjustments = adjustments;
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn build(self) -> CalculationConfig {
        CalculationConfig::new(self.method, self.location)
    }
}
