//! # smy-series
//!
//! Hourly multi-channel weather series: the input and output data model of
//! standard-year synthesis.
//!
//! A [`HourlySeries`] always starts on January 1st 00:00 and spans whole
//! calendar years. Timestamps are implicit, so the record can never have
//! gaps or duplicates once constructed.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::collections::BTreeMap;
//! use smy_calendar::{CalendarMonth, MonthKey};
//! use smy_series::{Channel, HourlySeries};
//!
//! let mut channels = BTreeMap::new();
//! channels.insert(Channel::Tmp, vec![10.0; 8760 + 8784]);
//! let series = HourlySeries::new(2019, channels)?;
//!
//! let feb = MonthKey::new(2020, CalendarMonth::FEBRUARY);
//! assert_eq!(series.month_range(feb).unwrap().len(), 29 * 24);
//!
//! let only_2020 = series.slice_years(2020, 2020)?;
//! assert_eq!(only_2020.len(), 8784);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `channel` | Closed set of physical channels and their column names |
//! | `series` | `HourlySeries` container and index arithmetic |
//! | `error` | Error types |

mod channel;
mod error;
mod series;

pub use channel::Channel;
pub use error::SeriesError;
pub use series::{HourlySeries, is_leap_day};
