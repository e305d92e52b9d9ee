//! Twelve representative years, one per calendar month.

use std::ops::Index;

use smy_calendar::CalendarMonth;

/// Source year of each calendar month, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepresentativeYears([i32; 12]);

impl RepresentativeYears {
    /// Wrap years given in January..December order.
    pub fn new(years: [i32; 12]) -> Self {
        Self(years)
    }

    /// The same year for every month.
    pub fn uniform(year: i32) -> Self {
        Self([year; 12])
    }

    /// Year chosen for `month`.
    pub fn get(&self, month: CalendarMonth) -> i32 {
        self.0[month.index()]
    }

    /// Years in month order.
    pub fn as_array(&self) -> &[i32; 12] {
        &self.0
    }

    /// Iterate over `(month, year)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CalendarMonth, i32)> + '_ {
        CalendarMonth::all().map(|m| (m, self.get(m)))
    }
}

impl Index<CalendarMonth> for RepresentativeYears {
    type Output = i32;

    fn index(&self, month: CalendarMonth) -> &i32 {
        &self.0[month.index()]
    }
}
