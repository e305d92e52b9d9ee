//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, TimestampSecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use smy_series::HourlySeries;

use crate::error::IoError;
use crate::parquet_read::TIMESTAMP_COLUMN;
use crate::validate::SECONDS_PER_HOUR;

/// Builds the Arrow schema for an hourly series.
///
/// The `timestamp` column comes first, followed by one nullable `Float64`
/// column per channel in channel order.
pub(crate) fn build_schema(series: &HourlySeries) -> Schema {
    let mut fields = vec![Field::new(
        TIMESTAMP_COLUMN,
        DataType::Timestamp(TimeUnit::Second, None),
        false,
    )];
    fields.extend(
        series
            .channel_ids()
            .map(|c| Field::new(c.column_name(), DataType::Float64, true)),
    );
    Schema::new(fields)
}

/// Converts a series into a single Arrow [`RecordBatch`].
///
/// The batch schema must match the one returned by [`build_schema`] for the
/// same series; otherwise the call will fail.
pub(crate) fn series_to_record_batch(
    series: &HourlySeries,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let start = series.start().and_utc().timestamp();
    let seconds: Vec<i64> = (0..series.len() as i64)
        .map(|i| start + i * SECONDS_PER_HOUR)
        .collect();

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
    columns.push(Arc::new(TimestampSecondArray::from(seconds)));
    for (_, values) in series.channels() {
        columns.push(Arc::new(Float64Array::from(values.to_vec())));
    }

    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use arrow::array::AsArray;
    use arrow::datatypes::{Float64Type, TimestampSecondType};
    use smy_series::Channel;

    use super::*;

    fn year_series(year: i32, hours: usize) -> HourlySeries {
        let mut channels = BTreeMap::new();
        channels.insert(Channel::Tmp, (0..hours).map(|i| i as f64).collect());
        channels.insert(Channel::Pres, vec![1013.0; hours]);
        HourlySeries::new(year, channels).unwrap()
    }

    #[test]
    fn schema_starts_with_timestamp() {
        let series = year_series(1970, 8760);
        let schema = build_schema(&series);
        assert_eq!(schema.fields().len(), 3);
        assert_eq!(schema.field(0).name(), TIMESTAMP_COLUMN);
        assert_eq!(
            schema.field(0).data_type(),
            &DataType::Timestamp(TimeUnit::Second, None)
        );
        assert_eq!(schema.field(1).name(), "TMP");
        assert_eq!(schema.field(2).name(), "PRES");
    }

    #[test]
    fn record_batch_carries_hourly_epoch_seconds() {
        let series = year_series(1970, 8760);
        let schema = build_schema(&series);
        let batch = series_to_record_batch(&series, &schema).unwrap();

        assert_eq!(batch.num_rows(), 8760);
        assert_eq!(batch.num_columns(), 3);

        let ts = batch.column(0).as_primitive::<TimestampSecondType>();
        assert_eq!(ts.value(0), 0);
        assert_eq!(ts.value(1), 3600);
        assert_eq!(ts.value(8759), 8759 * 3600);

        let tmp = batch.column(1).as_primitive::<Float64Type>();
        assert_eq!(tmp.value(42), 42.0);
    }

    #[test]
    fn mismatched_schema_is_error() {
        let series = year_series(1970, 8760);
        let schema = Schema::new(vec![Field::new(
            TIMESTAMP_COLUMN,
            DataType::Timestamp(TimeUnit::Second, None),
            false,
        )]);
        assert!(matches!(
            series_to_record_batch(&series, &schema),
            Err(IoError::Parquet { .. })
        ));
    }
}
