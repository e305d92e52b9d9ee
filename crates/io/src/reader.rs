//! Reading a multi-year hourly series from Parquet.

use std::path::Path;

use chrono::Datelike;
use smy_series::HourlySeries;
use tracing::{info, instrument};

use crate::error::IoError;
use crate::parquet_read;
use crate::validate;

/// Read an hourly series from a Parquet file.
///
/// The file must carry a `timestamp` column, either Arrow
/// `Timestamp(unit, _)` or `Int64` epoch seconds, interpreted as UTC-naive
/// local time. Its values must start on January 1st 00:00 and advance by
/// exactly one hour per row. Every `Float64` or `Float32` column whose name
/// is a channel column name becomes a channel; other columns are skipped
/// with a warning. Null values are read as NaN.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::Parquet`],
/// [`IoError::MissingColumn`] or [`IoError::InvalidTime`] for unreadable
/// files, [`IoError::Validation`] for a malformed time axis or channel
/// columns, and [`IoError::Series`] when the rows do not cover whole
/// calendar years or no channel column was found.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_parquet(path: &Path) -> Result<HourlySeries, IoError> {
    let (schema, batches) = parquet_read::read_batches(path)?;
    let columns = parquet_read::extract_columns(&schema, &batches, path)?;

    validate::validate_hourly_axis(&columns.seconds).finish()?;
    let start_year = match columns.seconds.first() {
        Some(&first) => validate::datetime_of(first)?.year(),
        None => {
            return Err(IoError::Validation {
                count: 1,
                details: "time axis is empty".to_string(),
            });
        }
    };

    let series = HourlySeries::new(start_year, columns.channels)?;
    info!(
        start_year = series.start_year(),
        end_year = series.end_year(),
        hours = series.len(),
        channels = series.channel_ids().count(),
        "hourly series loaded"
    );
    Ok(series)
}
