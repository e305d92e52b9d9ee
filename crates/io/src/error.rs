//! Error types for smy-io.

use std::path::PathBuf;

use smy_series::SeriesError;

/// Error type for all fallible operations in the smy-io crate.
///
/// Covers missing files, Parquet and JSON failures, malformed time axes,
/// accumulated validation problems, and series construction errors raised
/// while turning file columns into an [`smy_series::HourlySeries`].
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Wraps a JSON serialization or file failure of the report.
    #[error("report error: {reason}")]
    Report {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a time value cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// The columns read do not form a valid hourly series.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Report {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.parquet"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.parquet");
    }

    #[test]
    fn display_parquet() {
        let err = IoError::Parquet {
            reason: "corrupt footer".to_string(),
        };
        assert_eq!(err.to_string(), "parquet error: corrupt footer");
    }

    #[test]
    fn display_report() {
        let err = IoError::Report {
            reason: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "report error: permission denied");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "gap after row 10; duplicate at row 11".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): gap after row 10; duplicate at row 11"
        );
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "timestamp".to_string(),
            path: PathBuf::from("/data/hourly.parquet"),
        };
        assert_eq!(
            err.to_string(),
            "column 'timestamp' not found in /data/hourly.parquet"
        );
    }

    #[test]
    fn display_invalid_time() {
        let err = IoError::InvalidTime {
            reason: "epoch out of range".to_string(),
        };
        assert_eq!(err.to_string(), "invalid time: epoch out of range");
    }

    #[test]
    fn series_error_is_transparent() {
        let err: IoError = SeriesError::NoChannels.into();
        assert!(matches!(err, IoError::Series(SeriesError::NoChannels)));
        assert_eq!(err.to_string(), SeriesError::NoChannels.to_string());
    }

    #[test]
    fn from_parquet_error() {
        let pq_err = parquet::errors::ParquetError::General("test pq error".to_string());
        let err: IoError = pq_err.into();
        assert!(matches!(err, IoError::Parquet { .. }));
        assert!(err.to_string().contains("test pq error"));
    }

    #[test]
    fn from_arrow_error() {
        let arrow_err = arrow::error::ArrowError::SchemaError("bad field".to_string());
        let err: IoError = arrow_err.into();
        assert!(matches!(err, IoError::Parquet { .. }));
        assert!(err.to_string().contains("bad field"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
