//! Error types for the smy-series crate.

use crate::channel::Channel;

/// Error type for all fallible operations in the smy-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a series is built without any channel.
    #[error("series has no channels")]
    NoChannels,

    /// Returned when channel lengths disagree.
    #[error("{channel}: expected {expected} hours, got {got}")]
    LengthMismatch {
        /// Channel with the wrong length.
        channel: Channel,
        /// Length of the first channel.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when the length does not cover a whole number of years.
    #[error("{hours} hours starting {start_year}-01-01 do not cover whole calendar years")]
    PartialYear {
        /// Number of hourly records.
        hours: usize,
        /// First year of the series.
        start_year: i32,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("unsupported year: {year}")]
    UnsupportedYear {
        /// The out-of-range year.
        year: i32,
    },

    /// Returned when a requested year range is empty.
    #[error("invalid year range: {start}..={end}")]
    InvalidYearRange {
        /// First requested year.
        start: i32,
        /// Last requested year.
        end: i32,
    },

    /// Returned when a requested year range reaches outside the series.
    #[error("years {start}..={end} outside series coverage {first}..={last}")]
    YearsOutOfRange {
        /// First requested year.
        start: i32,
        /// Last requested year.
        end: i32,
        /// First year covered by the series.
        first: i32,
        /// Last year covered by the series.
        last: i32,
    },

    /// Returned when a column name does not match any channel.
    #[error("unknown channel: {name}")]
    UnknownChannel {
        /// The unrecognised column name.
        name: String,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] smy_calendar::CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_channels() {
        assert_eq!(SeriesError::NoChannels.to_string(), "series has no channels");
    }

    #[test]
    fn display_length_mismatch() {
        let e = SeriesError::LengthMismatch {
            channel: Channel::Mr,
            expected: 8760,
            got: 8759,
        };
        assert_eq!(e.to_string(), "MR: expected 8760 hours, got 8759");
    }

    #[test]
    fn display_partial_year() {
        let e = SeriesError::PartialYear {
            hours: 100,
            start_year: 2011,
        };
        assert_eq!(
            e.to_string(),
            "100 hours starting 2011-01-01 do not cover whole calendar years"
        );
    }

    #[test]
    fn display_years_out_of_range() {
        let e = SeriesError::YearsOutOfRange {
            start: 2009,
            end: 2012,
            first: 2010,
            last: 2020,
        };
        assert_eq!(
            e.to_string(),
            "years 2009..=2012 outside series coverage 2010..=2020"
        );
    }

    #[test]
    fn display_unknown_channel() {
        let e = SeriesError::UnknownChannel {
            name: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "unknown channel: FOO");
    }

    #[test]
    fn from_calendar_error() {
        let ce = smy_calendar::CalendarError::InvalidMonth { month: 13 };
        let se: SeriesError = ce.into();
        assert!(matches!(se, SeriesError::Calendar(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
