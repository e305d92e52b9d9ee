//! Error types for the smy-assemble crate.

use chrono::NaiveDateTime;
use smy_calendar::{CalendarMonth, MonthKey};

/// Error type for all fallible operations in the smy-assemble crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssembleError {
    /// Returned when a representative month is not covered by the source.
    #[error("representative month {key} is outside the source series")]
    MonthOutOfRange {
        /// The uncovered (year, month).
        key: MonthKey,
    },

    /// Returned when a smoothing window hour is not covered by the source.
    #[error("smoothing window for month {target} needs {timestamp}, outside the source series")]
    WindowOutOfRange {
        /// Month whose first-day boundary is smoothed.
        target: CalendarMonth,
        /// The uncovered hour.
        timestamp: NaiveDateTime,
    },

    /// Returned when a window timestamp cannot be represented.
    #[error("unsupported year: {year}")]
    UnsupportedYear {
        /// The out-of-range year.
        year: i32,
    },

    /// Series error.
    #[error(transparent)]
    Series(#[from] smy_series::SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn display_month_out_of_range() {
        let e = AssembleError::MonthOutOfRange {
            key: MonthKey::new(2031, CalendarMonth::MARCH),
        };
        assert_eq!(
            e.to_string(),
            "representative month 2031-03 is outside the source series"
        );
    }

    #[test]
    fn display_window_out_of_range() {
        let ts = NaiveDate::from_ymd_opt(2010, 12, 31)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let e = AssembleError::WindowOutOfRange {
            target: CalendarMonth::FEBRUARY,
            timestamp: ts,
        };
        assert_eq!(
            e.to_string(),
            "smoothing window for month 02 needs 2010-12-31 18:00:00, outside the source series"
        );
    }

    #[test]
    fn from_series_error() {
        let se = smy_series::SeriesError::NoChannels;
        let ae: AssembleError = se.into();
        assert!(matches!(ae, AssembleError::Series(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AssembleError>();
    }
}
