//! `(year, month)` grouping key.

use std::fmt;

use crate::month::CalendarMonth;

/// A specific month of a specific Gregorian year.
///
/// Orders year-major, so a sorted collection of keys is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: CalendarMonth,
}

impl MonthKey {
    /// Creates a new key.
    pub fn new(year: i32, month: CalendarMonth) -> Self {
        Self { year, month }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the calendar month.
    pub fn month(self) -> CalendarMonth {
        self.month
    }

    /// Number of days in this month of this year.
    pub fn days(self) -> u8 {
        self.month.days_in(self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_chronological() {
        let dec_2010 = MonthKey::new(2010, CalendarMonth::DECEMBER);
        let jan_2011 = MonthKey::new(2011, CalendarMonth::JANUARY);
        let feb_2011 = MonthKey::new(2011, CalendarMonth::FEBRUARY);
        assert!(dec_2010 < jan_2011);
        assert!(jan_2011 < feb_2011);
    }

    #[test]
    fn days_follow_leap_rule() {
        assert_eq!(MonthKey::new(2016, CalendarMonth::FEBRUARY).days(), 29);
        assert_eq!(MonthKey::new(2017, CalendarMonth::FEBRUARY).days(), 28);
    }

    #[test]
    fn display() {
        let key = MonthKey::new(2015, CalendarMonth::MARCH);
        assert_eq!(key.to_string(), "2015-03");
    }
}
