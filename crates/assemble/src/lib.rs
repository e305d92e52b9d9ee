//! # smy-assemble
//!
//! Builds the synthesized year from twelve representative months.
//!
//! ## Pipeline
//!
//! ```text
//! source series + RepresentativeYears
//!   -> splice_months()      12 month slices on the 365-day placeholder year
//!   -> smoothing_plan()     boundaries needing a blend
//!   -> smooth_boundary()    13-hour linear blend per boundary
//!   -> recompute_wind()     w_spd / w_dir from blended UGRD / VGRD
//! ```
//!
//! Boundary windows follow a [`BoundaryKind`]: ordinary month joins,
//! the December to January year wrap, and the February to March join that
//! always aligns February 28th to March 1st.
//!
//! ## Quick Start
//!
//! ```ignore
//! use smy_assemble::assemble;
//!
//! let assembly = assemble(&source, &selection.years)?;
//! assert_eq!(assembly.series.len(), 8760);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `plan` | `BoundaryKind`, `BoundarySmoothing`, `smoothing_plan` |
//! | `window` | 13-hour source windows and placeholder destinations |
//! | `blend` | Linear blend coefficients |
//! | `wind` | 16-point wind conversion |
//! | `assemble` | Splicing and the full assembly |
//! | `error` | Error types |

mod assemble;
mod blend;
mod error;
mod plan;
mod wind;
mod window;

pub use assemble::{Assembly, assemble, smooth_boundary, splice_months};
pub use blend::{after_coefficient, blend};
pub use error::AssembleError;
pub use plan::{BoundaryKind, BoundarySmoothing, smoothing_plan};
pub use wind::{recompute_wind, wind16, wind16_channels};
pub use window::{WINDOW_HOURS, Window};
