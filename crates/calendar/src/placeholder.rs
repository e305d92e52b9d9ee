//! The 365-day placeholder year on which synthesized series are laid out.

use crate::error::CalendarError;
use crate::month::CalendarMonth;

/// Year stamped on every timestamp of a synthesized series.
///
/// 1970 is a common year, so the layout has no Feb 29.
pub const PLACEHOLDER_YEAR: i32 = 1970;

/// Hours in one day.
pub const HOURS_PER_DAY: usize = 24;

/// Hours in the placeholder year (365 × 24).
pub const PLACEHOLDER_HOURS: usize = 365 * HOURS_PER_DAY;

/// Hour offset (0-based) at which `month` starts in the placeholder year.
pub fn placeholder_month_start_hour(month: CalendarMonth) -> usize {
    (month.noleap_start_doy() as usize - 1) * HOURS_PER_DAY
}

/// Hour offset (0..8760) of `(month, day, hour)` in the placeholder year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if `day` is not valid for `month`
/// in a common year (Feb 29 is rejected), or [`CalendarError::InvalidHour`]
/// if `hour > 23`.
pub fn placeholder_hour_index(
    month: CalendarMonth,
    day: u8,
    hour: u8,
) -> Result<usize, CalendarError> {
    let max_day = month.noleap_days();
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month: month.get(),
            max_day,
        });
    }
    if hour > 23 {
        return Err(CalendarError::InvalidHour { hour });
    }
    Ok(placeholder_month_start_hour(month) + (day as usize - 1) * HOURS_PER_DAY + hour as usize)
}
