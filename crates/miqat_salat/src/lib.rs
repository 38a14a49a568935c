//! Daily Islamic prayer times.
//!
//! This crate provides:
//! - Named twilight-angle methods, Asr ratio and per-event adjustments
//! - An immutable [`CalculationConfig`] with a builder
//! - The stateless [`calculate`] and a date-holding [`PrayerCalculator`]
//! - [`Times`]: raw hours, three-way outcomes and rounded clock times
//! - An extreme-latitude scan of where events stop being defined
//!
//! ```
//! use miqat_salat::{CalculationConfig, CalculationMethod, Location, PrayerCalculator};
//!
//! let config = CalculationConfig::builder(Location::new(21.4225, 39.8262, 0.0, 3.0))
//!     .method(CalculationMethod::Karachi)
//!     .build();
//! let mut calc = PrayerCalculator::new(config);
//! calc.set_date(2024, 3, 11)?;
//! let times = calc.calculate();
//! assert!(times.all_defined());
//! # Ok::<(), miqat_salat::SalatError>(())
//! ```

pub mod adjustments;
pub mod calculator;
pub mod config;
pub mod error;
pub mod event;
pub mod extremes;
pub mod method;
pub mod times;

pub use adjustments::{Adjustments, DEFAULT_ZUHR_OFFSET_HOURS};
pub use calculator::{PrayerCalculator, calculate, calculate_date};
pub use config::{CalculationConfig, CalculationConfigBuilder, Location};
pub use error::SalatError;
pub use event::{ALL_EVENTS, EVENT_COUNT, EventOutcome, PrayerEvent};
pub use extremes::{LatitudeSummary, MAX_LAT_ROWS, ScanGrid, scan};
pub use method::{ALL_METHODS, CalculationMethod, MethodConfig, TwilightAngles};
pub use miqat_solar::AsrRatio;
pub use times::{ClockTime, Precision, Times, TimesIter, hours_to_hm, hours_to_hms};
