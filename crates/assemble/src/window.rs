//! 13-hour smoothing windows around a month boundary.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use smy_calendar::{CalendarMonth, PLACEHOLDER_HOURS, placeholder_month_start_hour};
use smy_series::HourlySeries;
use tracing::warn;

use crate::error::AssembleError;
use crate::plan::{BoundaryKind, BoundarySmoothing};

/// Hours in a smoothing window.
pub const WINDOW_HOURS: usize = 13;

/// Hours of the window before the boundary midnight.
const LEAD_HOURS: usize = 6;

/// Aligned source hours and placeholder destinations of one boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Source timestamps in the before-year.
    pub before: [NaiveDateTime; WINDOW_HOURS],
    /// Source timestamps in the after-year.
    pub after: [NaiveDateTime; WINDOW_HOURS],
    /// Placeholder-year hour index each blended value is written to.
    pub target: [usize; WINDOW_HOURS],
}

impl Window {
    /// Window for `boundary`, following its [`BoundaryKind`].
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError::UnsupportedYear`] if a timestamp cannot be
    /// represented.
    pub fn for_boundary(boundary: &BoundarySmoothing) -> Result<Self, AssembleError> {
        let BoundarySmoothing {
            target,
            before_year,
            after_year,
            kind,
        } = *boundary;

        let (before, after) = match kind {
            BoundaryKind::Ordinary => (
                hourly_from(at(before_year, target.get(), 1, 0)?, -(LEAD_HOURS as i64))?,
                hourly_from(at(after_year, target.get(), 1, 0)?, -(LEAD_HOURS as i64))?,
            ),
            BoundaryKind::YearWrap => (
                hourly_from(at(before_year, 12, 31, 18)?, 0)?,
                hourly_from(at(after_year - 1, 12, 31, 18)?, 0)?,
            ),
            BoundaryKind::LeapFebMar => (
                skip_leap_day(before_year)?,
                skip_leap_day(after_year)?,
            ),
        };

        Ok(Self {
            before,
            after,
            target: placeholder_targets(target, kind),
        })
    }

    /// Record indices of the window hours in `source`.
    ///
    /// On a year-wrap boundary an hour outside `source` is replaced by the
    /// aligned hour of the other window.
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError::WindowOutOfRange`] for an uncovered hour
    /// that cannot be replaced.
    pub fn resolve(
        &self,
        source: &HourlySeries,
        boundary: &BoundarySmoothing,
    ) -> Result<([usize; WINDOW_HOURS], [usize; WINDOW_HOURS]), AssembleError> {
        let mut before = [0; WINDOW_HOURS];
        let mut after = [0; WINDOW_HOURS];
        for i in 0..WINDOW_HOURS {
            let b = source.index_of(self.before[i]);
            let a = source.index_of(self.after[i]);
            let missing = |timestamp| AssembleError::WindowOutOfRange {
                target: boundary.target,
                timestamp,
            };
            (before[i], after[i]) = match (b, a) {
                (Some(b), Some(a)) => (b, a),
                (None, Some(a)) if boundary.kind == BoundaryKind::YearWrap => {
                    warn!(
                        hour = %self.before[i],
                        substitute = %self.after[i],
                        "year-wrap hour outside source"
                    );
                    (a, a)
                }
                (Some(b), None) if boundary.kind == BoundaryKind::YearWrap => {
                    warn!(
                        hour = %self.after[i],
                        substitute = %self.before[i],
                        "year-wrap hour outside source"
                    );
                    (b, b)
                }
                (None, _) => return Err(missing(self.before[i])),
                (_, None) => return Err(missing(self.after[i])),
            };
        }
        Ok((before, after))
    }
}

fn at(year: i32, month: u8, day: u32, hour: u32) -> Result<NaiveDateTime, AssembleError> {
    NaiveDate::from_ymd_opt(year, u32::from(month), day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .ok_or(AssembleError::UnsupportedYear { year })
}

/// 13 consecutive hours starting `offset` hours after `anchor`.
fn hourly_from(
    anchor: NaiveDateTime,
    offset: i64,
) -> Result<[NaiveDateTime; WINDOW_HOURS], AssembleError> {
    let mut hours = [anchor; WINDOW_HOURS];
    for (i, slot) in hours.iter_mut().enumerate() {
        let delta = TimeDelta::hours(offset + i as i64);
        *slot = anchor
            .checked_add_signed(delta)
            .ok_or(AssembleError::UnsupportedYear {
                year: anchor.year(),
            })?;
    }
    Ok(hours)
}

/// February 28th 18:00..=23:00 then March 1st 00:00..=06:00 of `year`.
fn skip_leap_day(year: i32) -> Result<[NaiveDateTime; WINDOW_HOURS], AssembleError> {
    let feb = hourly_from(at(year, 2, 28, 18)?, 0)?;
    let mar = hourly_from(at(year, 3, 1, 0)?, 0)?;
    let mut hours = feb;
    hours[LEAD_HOURS..].copy_from_slice(&mar[..WINDOW_HOURS - LEAD_HOURS]);
    Ok(hours)
}

fn placeholder_targets(target: CalendarMonth, kind: BoundaryKind) -> [usize; WINDOW_HOURS] {
    let mut hours = [0; WINDOW_HOURS];
    match kind {
        BoundaryKind::YearWrap => {
            for (i, slot) in hours.iter_mut().enumerate() {
                *slot = (PLACEHOLDER_HOURS - LEAD_HOURS + i) % PLACEHOLDER_HOURS;
            }
        }
        BoundaryKind::Ordinary | BoundaryKind::LeapFebMar => {
            let start = placeholder_month_start_hour(target) - LEAD_HOURS;
            for (i, slot) in hours.iter_mut().enumerate() {
                *slot = start + i;
            }
        }
    }
    hours
}
