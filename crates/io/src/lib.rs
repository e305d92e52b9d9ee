//! # smy-io
//!
//! Read multi-year hourly weather records from Parquet and write the
//! synthesized standard year back to Parquet, together with a JSON report
//! of the year selection. Bridges external file formats into the
//! [`HourlySeries`](smy_series::HourlySeries) data model.
//!
//! ## File layout
//!
//! | Column | Type | Content |
//! |--------|------|---------|
//! | `timestamp` | `Timestamp(Second)` or `Int64` | hourly, from January 1st 00:00 |
//! | `TMP`, `MR`, `DSWRF_est`, ... | `Float64` | one column per channel |

mod error;
mod parquet_read;
mod parquet_write;
mod reader;
mod report;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::read_parquet;
pub use report::{
    BoundaryReport, MonthReport, ParameterOutcome, SynthesisReport, VerdictReport, write_report,
};
pub use writer::{Compression, WriterConfig, write_parquet};
