//! # smy-classify
//!
//! Typical-month classification of every (year, month) in a multi-year
//! hourly record.
//!
//! Two independent tests are run per tracked parameter (temperature,
//! irradiance, humidity ratio, precipitation, wind speed):
//!
//! - **Mean/deviation**: is the monthly mean within `k` pooled standard
//!   deviations of the all-years monthly mean?
//! - **Finkelstein-Schafer**: is the FS value of the month's daily-mean
//!   distribution within `k` times its RMS across years?
//!
//! `k` is 1.0 for temperature, irradiance and humidity ratio, 1.5 for
//! precipitation and wind speed.
//!
//! ## Pipeline
//!
//! ```text
//! HourlySeries ─┬─ aggregate() ─── classify_by_mean() ──► Classification
//!               └─ classify_by_fs() ─────────────────────► Classification
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use smy_classify::{TrackedChannels, aggregate, classify_by_fs, classify_by_mean};
//!
//! let tracked = TrackedChannels::estimated();
//! let mean_test = classify_by_mean(&aggregate(&series, &tracked)?);
//! let fs_test = classify_by_fs(&series, &tracked)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parameter` | Tracked parameters, `ParamSet`, channel bindings |
//! | `aggregate` | Pooled monthly and per-(year, month) statistics |
//! | `mean_band` | Mean/deviation test |
//! | `fs` | Daily means, grouped CDFs and the FS test |
//! | `verdict` | `Verdict` and `Classification` containers |
//! | `error` | Error types |

mod aggregate;
mod error;
mod fs;
mod mean_band;
mod parameter;
mod verdict;

pub use aggregate::{Aggregates, Summary, aggregate};
pub use error::ClassifyError;
pub use fs::{DailyMean, classify_by_fs, daily_means, fs_spread, fs_values};
pub use mean_band::classify_by_mean;
pub use parameter::{ParamSet, Parameter, TrackedChannels};
pub use verdict::{Classification, Verdict};
