//! # smy-select
//!
//! Representative-year selection: for each calendar month, narrow the
//! candidate years through ten typical-month criteria and settle any
//! remaining tie deterministically.
//!
//! ## Cascade
//!
//! ```text
//! candidates = years with data for the month
//! for criterion in [5 mean tests, 5 FS tests]:
//!     passing = candidates that pass
//!     0 passing  -> stop, keep candidates
//!     1 passing  -> select it
//!     otherwise  -> candidates = passing
//! tie-break: min temperature deviation -> closest to centre year -> earliest
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use smy_select::select_representative_years;
//!
//! let selection = select_representative_years(&mean_test, &fs_test)?;
//! println!("{:?}", selection.years.as_array());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `criterion` | The ordered criteria |
//! | `selector` | Cascade state machine and tie-breaks |
//! | `years` | `RepresentativeYears` |
//! | `error` | Error types |

mod criterion;
mod error;
mod selector;
mod years;

pub use criterion::{CRITERIA, Criterion, Test};
pub use error::SelectError;
pub use selector::{Decision, MonthSelection, Selection, select_month, select_representative_years};
pub use years::RepresentativeYears;
