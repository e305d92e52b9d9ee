//! Error types for the smy-select crate.

use smy_calendar::CalendarMonth;

/// Error type for all fallible operations in the smy-select crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectError {
    /// Returned when no year in the analysed range has data for a month.
    #[error("no candidate years for month {month}")]
    NoCandidates {
        /// The calendar month without candidates.
        month: CalendarMonth,
    },
}
