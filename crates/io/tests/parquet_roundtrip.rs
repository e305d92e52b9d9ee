//! Integration tests: hourly series through Parquet read/write.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use approx::assert_relative_eq;
use arrow::array::{ArrayRef, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use smy_engine::{Channel, HourlySeries, SeriesError};
use smy_io::{Compression, IoError, WriterConfig, read_parquet, write_parquet};

fn two_years() -> HourlySeries {
    // 2015 (8760 h) + 2016 (8784 h)
    let n = 8760 + 8784;
    let mut channels = BTreeMap::new();
    channels.insert(
        Channel::Tmp,
        (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0).collect(),
    );
    channels.insert(Channel::Mr, (0..n).map(|i| 5.0 + (i % 24) as f64).collect());
    channels.insert(Channel::Ugrd, vec![-1.25; n]);
    HourlySeries::new(2015, channels).unwrap()
}

fn epoch(year: i32) -> i64 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

fn write_raw(path: &Path, fields: Vec<Field>, columns: Vec<ArrayRef>) {
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
    let file = std::fs::File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

#[test]
fn roundtrip_preserves_channels_and_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hourly.parquet");
    let series = two_years();

    write_parquet(&path, &series, &WriterConfig::default()).unwrap();
    let back = read_parquet(&path).unwrap();

    assert_eq!(back.start(), series.start());
    assert_eq!(back.years(), 2015..=2016);
    assert_eq!(back.len(), series.len());
    assert_eq!(
        back.channel_ids().collect::<Vec<_>>(),
        series.channel_ids().collect::<Vec<_>>()
    );
    for (channel, values) in series.channels() {
        let read = back.channel(channel).unwrap();
        for (a, b) in values.iter().zip(read) {
            assert_relative_eq!(*a, *b);
        }
    }
}

#[test]
fn roundtrip_with_every_compression_and_small_row_groups() {
    let dir = tempfile::tempdir().unwrap();
    let series = two_years();
    for (name, comp) in [
        ("none", Compression::None),
        ("snappy", Compression::Snappy),
        ("zstd", Compression::Zstd),
    ] {
        let path = dir.path().join(format!("{name}.parquet"));
        let config = WriterConfig::default()
            .with_compression(comp)
            .with_row_group_size(1000);
        write_parquet(&path, &series, &config).unwrap();
        let back = read_parquet(&path).unwrap();
        assert_eq!(back, series, "compression {name}");
    }
}

#[test]
fn int64_epoch_axis_and_unknown_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw.parquet");
    let n = 8760;
    let start = epoch(2019);

    write_raw(
        &path,
        vec![
            Field::new("station", DataType::Utf8, false),
            Field::new("timestamp", DataType::Int64, false),
            Field::new("TMP", DataType::Float64, true),
        ],
        vec![
            Arc::new(StringArray::from(vec!["47662"; n])),
            Arc::new(Int64Array::from(
                (0..n as i64).map(|i| start + i * 3600).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                (0..n)
                    .map(|i| if i == 5 { None } else { Some(i as f64) })
                    .collect::<Vec<_>>(),
            )),
        ],
    );

    let series = read_parquet(&path).unwrap();
    assert_eq!(series.start_year(), 2019);
    assert_eq!(series.channel_ids().collect::<Vec<_>>(), vec![Channel::Tmp]);
    let tmp = series.channel(Channel::Tmp).unwrap();
    assert_eq!(tmp[4], 4.0);
    assert!(tmp[5].is_nan());
}

#[test]
fn gap_in_time_axis_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gap.parquet");
    let start = epoch(2019);
    // Hour 100 is missing; the last hour is pushed to keep 8760 rows.
    let seconds: Vec<i64> = (0..8761i64)
        .filter(|&i| i != 100)
        .map(|i| start + i * 3600)
        .collect();
    let n = seconds.len();

    write_raw(
        &path,
        vec![
            Field::new("timestamp", DataType::Int64, false),
            Field::new("TMP", DataType::Float64, false),
        ],
        vec![
            Arc::new(Int64Array::from(seconds)),
            Arc::new(Float64Array::from(vec![0.0; n])),
        ],
    );

    match read_parquet(&path).unwrap_err() {
        IoError::Validation { count, details } => {
            assert_eq!(count, 1);
            assert!(details.contains("step of 7200 s between rows 99 and 100"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn partial_year_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.parquet");
    let start = epoch(2019);
    let n = 24 * 40;

    write_raw(
        &path,
        vec![
            Field::new("timestamp", DataType::Int64, false),
            Field::new("TMP", DataType::Float64, false),
        ],
        vec![
            Arc::new(Int64Array::from(
                (0..n as i64).map(|i| start + i * 3600).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(vec![0.0; n])),
        ],
    );

    assert!(matches!(
        read_parquet(&path),
        Err(IoError::Series(SeriesError::PartialYear { .. }))
    ));
}

#[test]
fn file_without_channels_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_channels.parquet");
    let start = epoch(2019);

    write_raw(
        &path,
        vec![
            Field::new("timestamp", DataType::Int64, false),
            Field::new("wind_gust", DataType::Float64, false),
        ],
        vec![
            Arc::new(Int64Array::from(
                (0..8760i64).map(|i| start + i * 3600).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(vec![0.0; 8760])),
        ],
    );

    assert!(matches!(
        read_parquet(&path),
        Err(IoError::Series(SeriesError::NoChannels))
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.parquet");
    assert!(matches!(
        read_parquet(&path),
        Err(IoError::FileNotFound { .. })
    ));
}
