//! Calendar-month newtype and Gregorian leap-year rules.

use std::fmt;

use crate::error::CalendarError;

/// Number of days in each month of a common (non-leap) year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const NOLEAP_DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year
/// (index 0 unused, index 1 = January starts at day 1, ...).
pub(crate) const NOLEAP_MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// A calendar month (1..=12), independent of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth(u8);

impl CalendarMonth {
    /// January.
    pub const JANUARY: Self = Self(1);
    /// February.
    pub const FEBRUARY: Self = Self(2);
    /// March.
    pub const MARCH: Self = Self(3);
    /// December.
    pub const DECEMBER: Self = Self(12);

    /// Creates a new `CalendarMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self(month))
    }

    /// Creates a month from a 0-based index (0 = January).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `index` is not in 0..12.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        let month = u8::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .unwrap_or(0);
        Self::new(month)
    }

    /// Iterates January through December.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=12u8).map(Self)
    }

    /// Returns the month number (1..=12).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=11).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the preceding month; January wraps to December.
    pub fn previous(self) -> Self {
        if self.0 == 1 { Self(12) } else { Self(self.0 - 1) }
    }

    /// Returns the following month; December wraps to January.
    pub fn next(self) -> Self {
        if self.0 == 12 { Self(1) } else { Self(self.0 + 1) }
    }

    /// Number of days in this month of a common year (February = 28).
    pub fn noleap_days(self) -> u8 {
        NOLEAP_DAYS_PER_MONTH[self.0 as usize]
    }

    /// Number of days in this month of the given Gregorian year.
    pub fn days_in(self, year: i32) -> u8 {
        if self.0 == 2 && is_leap_year(year) {
            29
        } else {
            self.noleap_days()
        }
    }

    /// Day-of-year (1-based) of the first day of this month in a common year.
    pub(crate) fn noleap_start_doy(self) -> u16 {
        NOLEAP_MONTH_START_DOY[self.0 as usize]
    }
}

impl TryFrom<u8> for CalendarMonth {
    type Error = CalendarError;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Self::new(month)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given Gregorian year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
