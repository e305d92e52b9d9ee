//! # smy-engine
//!
//! Standard meteorological year synthesis: pick the most typical historical
//! year for every calendar month and splice the twelve months into one
//! smoothed 8760-hour year.
//!
//! ## Pipeline
//!
//! ```text
//! HourlySeries
//!   -> slice_years(range)                  candidate years only
//!   -> aggregate + classify_by_mean        mean/deviation verdicts
//!   -> classify_by_fs                      FS verdicts
//!   -> select_representative_years         twelve years
//!   -> assemble(full series)               spliced, smoothed, wind recomputed
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use smy_engine::{SynthesisConfig, synthesize};
//!
//! let config = SynthesisConfig::new(2011, 2020);
//! let year = synthesize(&series, &config)?;
//! assert_eq!(year.series.len(), 8760);
//! println!("{:?}", year.years.as_array());
//! ```

mod config;
mod error;
mod pipeline;
mod result;

pub use config::{DEFAULT_MODEL_IRRADIANCE_SINCE, SynthesisConfig};
pub use error::EngineError;
pub use pipeline::{select_years, synthesize};
pub use result::{SynthesizedYear, YearSelection};

pub use smy_assemble::{BoundaryKind, BoundarySmoothing};
pub use smy_calendar::{CalendarMonth, MonthKey, PLACEHOLDER_YEAR};
pub use smy_classify::{Classification, Parameter, Verdict};
pub use smy_select::{Criterion, Decision, MonthSelection, RepresentativeYears, Test};
pub use smy_series::{Channel, HourlySeries, SeriesError};
