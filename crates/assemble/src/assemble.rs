//! Splice representative months into one placeholder year and smooth the joins.

use std::collections::BTreeMap;

use smy_calendar::{CalendarMonth, MonthKey, PLACEHOLDER_HOURS, PLACEHOLDER_YEAR};
use smy_select::RepresentativeYears;
use smy_series::{Channel, HourlySeries};
use tracing::{debug, info, instrument};

use crate::blend::blend;
use crate::error::AssembleError;
use crate::plan::{BoundarySmoothing, smoothing_plan};
use crate::window::Window;
use crate::wind::recompute_wind;

/// The synthesized 8760-hour year and the boundaries that were smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// Output series on the placeholder year.
    pub series: HourlySeries,
    /// Boundaries smoothed, January first.
    pub plan: Vec<BoundarySmoothing>,
}

/// Concatenate each month of its representative year onto the placeholder
/// year, without smoothing.
///
/// Months are cut on the 365-day calendar: February 29th of a leap source
/// year is left out, so the result is always [`PLACEHOLDER_HOURS`] long.
///
/// # Errors
///
/// Returns [`AssembleError::MonthOutOfRange`] if a representative month is
/// not covered by `source`.
pub fn splice_months(
    source: &HourlySeries,
    years: &RepresentativeYears,
) -> Result<HourlySeries, AssembleError> {
    let mut ranges = Vec::with_capacity(12);
    for month in CalendarMonth::all() {
        let key = MonthKey::new(years.get(month), month);
        let range = source
            .noleap_month_range(key)
            .ok_or(AssembleError::MonthOutOfRange { key })?;
        ranges.push(range);
    }

    let channels: BTreeMap<Channel, Vec<f64>> = source
        .channels()
        .map(|(channel, values)| {
            let mut spliced = Vec::with_capacity(PLACEHOLDER_HOURS);
            for range in &ranges {
                spliced.extend_from_slice(&values[range.clone()]);
            }
            (channel, spliced)
        })
        .collect();

    Ok(HourlySeries::new(PLACEHOLDER_YEAR, channels)?)
}

/// Blend one boundary window of every non-derived channel into `year`.
///
/// # Errors
///
/// Returns [`AssembleError`] if the window cannot be read from `source`.
pub fn smooth_boundary(
    year: &mut HourlySeries,
    source: &HourlySeries,
    boundary: &BoundarySmoothing,
) -> Result<(), AssembleError> {
    let window = Window::for_boundary(boundary)?;
    let (before, after) = window.resolve(source, boundary)?;

    let blended: Vec<Channel> = year.channel_ids().filter(|c| !c.is_derived_wind()).collect();
    for channel in blended {
        let (Some(src), Some(out)) = (source.channel(channel), year.channel_mut(channel)) else {
            continue;
        };
        for (i, &dest) in window.target.iter().enumerate() {
            out[dest] = blend(src[before[i]], src[after[i]], i);
        }
    }
    debug!(
        target_month = %boundary.target,
        before_year = boundary.before_year,
        after_year = boundary.after_year,
        kind = %boundary.kind,
        "boundary smoothed"
    );
    Ok(())
}

/// Build the synthesized year: splice, smooth every planned boundary, then
/// recompute wind speed and direction from the blended components.
///
/// # Errors
///
/// Returns [`AssembleError`] if a representative month or a smoothing
/// window is not covered by `source`.
#[instrument(skip_all, fields(years = ?years.as_array()))]
pub fn assemble(
    source: &HourlySeries,
    years: &RepresentativeYears,
) -> Result<Assembly, AssembleError> {
    let mut series = splice_months(source, years)?;
    let plan = smoothing_plan(years);
    info!(boundaries = plan.len(), "smoothing month boundaries");

    for boundary in &plan {
        smooth_boundary(&mut series, source, boundary)?;
    }
    recompute_wind(&mut series)?;

    Ok(Assembly { series, plan })
}
