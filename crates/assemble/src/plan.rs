//! Which month boundaries need smoothing, and how.

use std::fmt;

use smy_calendar::{CalendarMonth, is_leap_year};
use smy_select::RepresentativeYears;

/// Window-extraction rule of a month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Last 6 hours of the previous month and first 7 of the target month.
    Ordinary,
    /// December 31st 18:00 through January 1st 06:00 across the year wrap.
    YearWrap,
    /// February 28th 18:00 through March 1st 06:00, skipping February 29th.
    LeapFebMar,
}

impl BoundaryKind {
    /// Rule for the boundary that opens `target`.
    pub fn of(target: CalendarMonth) -> Self {
        match target {
            CalendarMonth::JANUARY => BoundaryKind::YearWrap,
            CalendarMonth::MARCH => BoundaryKind::LeapFebMar,
            _ => BoundaryKind::Ordinary,
        }
    }

    /// Short kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            BoundaryKind::Ordinary => "ordinary",
            BoundaryKind::YearWrap => "year-wrap",
            BoundaryKind::LeapFebMar => "leap-feb-mar",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One boundary to smooth: the junction into `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundarySmoothing {
    /// Month whose first day the boundary opens.
    pub target: CalendarMonth,
    /// Representative year of the previous month.
    pub before_year: i32,
    /// Representative year of `target`.
    pub after_year: i32,
    /// Window-extraction rule.
    pub kind: BoundaryKind,
}

/// Boundaries that need smoothing, January first.
///
/// A boundary needs smoothing when the two adjacent months come from
/// different years, or when it opens March and February comes from a leap
/// year. January's previous month is December.
pub fn smoothing_plan(years: &RepresentativeYears) -> Vec<BoundarySmoothing> {
    CalendarMonth::all()
        .filter_map(|target| {
            let before_year = years.get(target.previous());
            let after_year = years.get(target);
            let leap_february = target == CalendarMonth::MARCH && is_leap_year(before_year);
            (before_year != after_year || leap_february).then_some(BoundarySmoothing {
                target,
                before_year,
                after_year,
                kind: BoundaryKind::of(target),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(m: u8) -> CalendarMonth {
        CalendarMonth::new(m).unwrap()
    }

    #[test]
    fn uniform_leap_year_smooths_march_only() {
        let plan = smoothing_plan(&RepresentativeYears::uniform(2000));
        assert_eq!(
            plan,
            vec![BoundarySmoothing {
                target: CalendarMonth::MARCH,
                before_year: 2000,
                after_year: 2000,
                kind: BoundaryKind::LeapFebMar,
            }]
        );
    }

    #[test]
    fn uniform_common_year_needs_nothing() {
        assert!(smoothing_plan(&RepresentativeYears::uniform(2001)).is_empty());
    }

    #[test]
    fn every_month_different() {
        let years = RepresentativeYears::new([
            2000, 2001, 2002, 2003, 2004, 2005, 2006, 2007, 2008, 2009, 2010, 2011,
        ]);
        let plan = smoothing_plan(&years);
        assert_eq!(plan.len(), 12);
        assert_eq!(
            (plan[0].target, plan[0].before_year, plan[0].after_year),
            (CalendarMonth::JANUARY, 2011, 2000)
        );
        assert_eq!(plan[0].kind, BoundaryKind::YearWrap);
        for (i, b) in plan.iter().enumerate().skip(1) {
            assert_eq!(b.target, month(i as u8 + 1));
            assert_eq!(b.before_year, 2000 + i as i32 - 1);
            assert_eq!(b.after_year, 2000 + i as i32);
        }
        assert_eq!(plan[2].kind, BoundaryKind::LeapFebMar);
        assert_eq!(plan[5].kind, BoundaryKind::Ordinary);
    }

    #[test]
    fn leap_march_depends_on_february_year() {
        // February from 2012 (leap), March also 2012: smoothing needed.
        let mut years = [2011; 12];
        years[1] = 2012;
        years[2] = 2012;
        let plan = smoothing_plan(&RepresentativeYears::new(years));
        let targets: Vec<u8> = plan.iter().map(|b| b.target.get()).collect();
        assert_eq!(targets, vec![2, 3, 4]);
        assert_eq!(plan[1].before_year, 2012);
        assert_eq!(plan[1].after_year, 2012);
    }
}
