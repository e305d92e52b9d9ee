//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus the checks applied to the
//! explicit time axis of an input file.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::error::IoError;

/// Seconds between consecutive records.
pub(crate) const SECONDS_PER_HOUR: i64 = 3600;

/// Offending rows reported individually before the rest are summarised.
const MAX_REPORTED_STEPS: usize = 10;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Move every error of `other` into this collector.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Time axis
// ---------------------------------------------------------------------------

/// Convert epoch seconds (UTC) to a naive timestamp.
pub(crate) fn datetime_of(seconds: i64) -> Result<NaiveDateTime, IoError> {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| IoError::InvalidTime {
            reason: format!("epoch second {seconds} is out of range"),
        })
}

/// Check that `seconds` is a strictly hourly axis starting on January 1st
/// 00:00.
///
/// Every non-hourly step is an error (gaps, duplicates and reversals alike);
/// only the first few are spelled out.
pub(crate) fn validate_hourly_axis(seconds: &[i64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    let Some(&first) = seconds.first() else {
        c.push("time axis is empty");
        return c;
    };

    match datetime_of(first) {
        Ok(start) => {
            if start.month() != 1 || start.day() != 1 || start.hour() != 0 || start.minute() != 0
            {
                c.push(format!(
                    "series starts at {start}, expected January 1st 00:00"
                ));
            }
        }
        Err(e) => c.push(e.to_string()),
    }

    let mut bad_steps = 0usize;
    for (i, pair) in seconds.windows(2).enumerate() {
        let step = pair[1] - pair[0];
        if step != SECONDS_PER_HOUR {
            if bad_steps < MAX_REPORTED_STEPS {
                c.push(format!(
                    "step of {step} s between rows {i} and {}, expected {SECONDS_PER_HOUR} s",
                    i + 1
                ));
            }
            bad_steps += 1;
        }
    }
    if bad_steps > MAX_REPORTED_STEPS {
        c.push(format!(
            "{} further non-hourly steps",
            bad_steps - MAX_REPORTED_STEPS
        ));
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn epoch(year: i32, month: u32, day: u32, hour: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }

    fn hourly(start: i64, n: usize) -> Vec<i64> {
        (0..n as i64).map(|i| start + i * SECONDS_PER_HOUR).collect()
    }

    // -- ValidationCollector -------------------------------------------------

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_non_empty_is_err_with_correct_count() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        let mut other = ValidationCollector::new();
        other.push("error two");
        c.extend(other);
        assert_eq!(c.len(), 2);

        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    // -- datetime_of ---------------------------------------------------------

    #[test]
    fn datetime_of_epoch_zero() {
        let dt = datetime_of(0).unwrap();
        assert_eq!(dt.year(), 1970);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn datetime_of_out_of_range() {
        assert!(matches!(
            datetime_of(i64::MAX),
            Err(IoError::InvalidTime { .. })
        ));
    }

    // -- validate_hourly_axis ------------------------------------------------

    #[test]
    fn hourly_axis_from_new_year_is_valid() {
        let axis = hourly(epoch(2015, 1, 1, 0), 48);
        assert!(validate_hourly_axis(&axis).is_empty());
    }

    #[test]
    fn empty_axis_is_error() {
        let c = validate_hourly_axis(&[]);
        assert_eq!(c.len(), 1);
        assert!(c.finish().unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn axis_starting_mid_year_is_error() {
        let axis = hourly(epoch(2015, 3, 1, 0), 5);
        let c = validate_hourly_axis(&axis);
        assert_eq!(c.len(), 1);
        let msg = c.finish().unwrap_err().to_string();
        assert!(msg.contains("2015-03-01 00:00:00"));
    }

    #[test]
    fn gap_and_duplicate_are_reported_with_rows() {
        let start = epoch(2015, 1, 1, 0);
        let axis = vec![
            start,
            start + SECONDS_PER_HOUR,
            start + 3 * SECONDS_PER_HOUR,
            start + 3 * SECONDS_PER_HOUR,
        ];
        let c = validate_hourly_axis(&axis);
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            IoError::Validation { details, .. } => {
                assert!(details.contains("step of 7200 s between rows 1 and 2"));
                assert!(details.contains("step of 0 s between rows 2 and 3"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn many_bad_steps_are_summarised() {
        let start = epoch(2015, 1, 1, 0);
        let axis: Vec<i64> = (0..15).map(|i| start + i * 2 * SECONDS_PER_HOUR).collect();
        let c = validate_hourly_axis(&axis);
        assert_eq!(c.len(), MAX_REPORTED_STEPS + 1);
        let msg = c.finish().unwrap_err().to_string();
        assert!(msg.contains("4 further non-hourly steps"));
    }
}
