//! Low-level Parquet reading and column extraction.

use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::{ArrayRef, AsArray, PrimitiveArray, RecordBatch};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Float32Type, Float64Type, Int64Type, SchemaRef, TimeUnit,
    TimestampMicrosecondType, TimestampMillisecondType, TimestampNanosecondType,
    TimestampSecondType,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use smy_series::Channel;
use tracing::{debug, warn};

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Name of the time-axis column, for input and output alike.
pub(crate) const TIMESTAMP_COLUMN: &str = "timestamp";

/// Columns of an input file, before the time axis is validated.
#[derive(Debug, Default)]
pub(crate) struct RawColumns {
    /// Epoch seconds (UTC) per row.
    pub seconds: Vec<i64>,
    /// Values per recognised channel column.
    pub channels: BTreeMap<Channel, Vec<f64>>,
}

/// How one schema field is read.
#[derive(Debug, Clone, Copy)]
enum ColumnRole {
    Time,
    Values(Channel),
}

/// Reads the schema and all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;

    Ok((schema, batches))
}

/// Map every schema field to its role, skipping unknown columns.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] without a `timestamp` column, or
/// [`IoError::Validation`] listing channel columns of a non-float type and
/// duplicated columns.
fn plan_columns(schema: &SchemaRef, path: &Path) -> Result<Vec<(usize, ColumnRole)>, IoError> {
    let mut plan = Vec::new();
    let mut has_time = false;
    let mut seen: BTreeMap<Channel, usize> = BTreeMap::new();
    let mut c = ValidationCollector::new();

    for (i, field) in schema.fields().iter().enumerate() {
        let name = field.name();
        if name == TIMESTAMP_COLUMN {
            if has_time {
                c.push(format!("column '{TIMESTAMP_COLUMN}' appears more than once"));
            }
            has_time = true;
            plan.push((i, ColumnRole::Time));
            continue;
        }

        let Ok(channel) = name.parse::<Channel>() else {
            warn!(column = %name, "skipping column with no matching channel");
            continue;
        };
        match field.data_type() {
            DataType::Float64 | DataType::Float32 => {}
            other => {
                c.push(format!("column '{name}' has type {other}, expected Float64"));
                continue;
            }
        }
        if let Some(previous) = seen.insert(channel, i) {
            c.push(format!(
                "channel '{channel}' appears in columns {previous} and {i}"
            ));
            continue;
        }
        plan.push((i, ColumnRole::Values(channel)));
    }

    if !has_time {
        return Err(IoError::MissingColumn {
            name: TIMESTAMP_COLUMN.to_string(),
            path: path.to_path_buf(),
        });
    }
    c.finish()?;

    Ok(plan)
}

/// Extract the time axis and channel columns of `batches`.
///
/// Null timestamps are an error; null values become NaN.
///
/// # Errors
///
/// See [`plan_columns`]; also returns [`IoError::InvalidTime`] for an
/// unsupported time column type or a null timestamp.
pub(crate) fn extract_columns(
    schema: &SchemaRef,
    batches: &[RecordBatch],
    path: &Path,
) -> Result<RawColumns, IoError> {
    let plan = plan_columns(schema, path)?;
    let mut raw = RawColumns::default();

    for batch in batches {
        let row_offset = raw.seconds.len();
        for &(i, role) in &plan {
            let column = batch.column(i);
            match role {
                ColumnRole::Time => append_seconds(column, row_offset, &mut raw.seconds)?,
                ColumnRole::Values(channel) => {
                    append_values(column, raw.channels.entry(channel).or_default());
                }
            }
        }
    }

    debug!(
        rows = raw.seconds.len(),
        channels = raw.channels.len(),
        batches = batches.len(),
        "extracted parquet columns"
    );
    Ok(raw)
}

fn append_seconds(column: &ArrayRef, row_offset: usize, out: &mut Vec<i64>) -> Result<(), IoError> {
    match column.data_type() {
        DataType::Timestamp(TimeUnit::Second, _) => {
            append_scaled(column.as_primitive::<TimestampSecondType>(), 1, row_offset, out)
        }
        DataType::Timestamp(TimeUnit::Millisecond, _) => append_scaled(
            column.as_primitive::<TimestampMillisecondType>(),
            1_000,
            row_offset,
            out,
        ),
        DataType::Timestamp(TimeUnit::Microsecond, _) => append_scaled(
            column.as_primitive::<TimestampMicrosecondType>(),
            1_000_000,
            row_offset,
            out,
        ),
        DataType::Timestamp(TimeUnit::Nanosecond, _) => append_scaled(
            column.as_primitive::<TimestampNanosecondType>(),
            1_000_000_000,
            row_offset,
            out,
        ),
        DataType::Int64 => append_scaled(column.as_primitive::<Int64Type>(), 1, row_offset, out),
        other => Err(IoError::InvalidTime {
            reason: format!(
                "column '{TIMESTAMP_COLUMN}' has type {other}, expected Timestamp or Int64"
            ),
        }),
    }
}

fn append_scaled<T>(
    array: &PrimitiveArray<T>,
    units_per_second: i64,
    row_offset: usize,
    out: &mut Vec<i64>,
) -> Result<(), IoError>
where
    T: ArrowPrimitiveType<Native = i64>,
{
    for (row, value) in array.iter().enumerate() {
        let Some(value) = value else {
            return Err(IoError::InvalidTime {
                reason: format!("null timestamp at row {}", row_offset + row),
            });
        };
        out.push(value.div_euclid(units_per_second));
    }
    Ok(())
}

fn append_values(column: &ArrayRef, out: &mut Vec<f64>) {
    match column.data_type() {
        DataType::Float32 => out.extend(
            column
                .as_primitive::<Float32Type>()
                .iter()
                .map(|v| v.map_or(f64::NAN, f64::from)),
        ),
        _ => out.extend(
            column
                .as_primitive::<Float64Type>()
                .iter()
                .map(|v| v.unwrap_or(f64::NAN)),
        ),
    }
}
