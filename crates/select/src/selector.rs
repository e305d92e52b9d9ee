//! Per-month cascade over the ordered criteria with tie-breaks.

use smy_calendar::{CalendarMonth, MonthKey};
use smy_classify::{Classification, Parameter};
use tracing::{debug, instrument};

use crate::criterion::{CRITERIA, Criterion};
use crate::error::SelectError;
use crate::years::RepresentativeYears;

/// What settled the choice of a month's representative year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// The criterion left exactly one candidate.
    Cascade(Criterion),
    /// Unique minimum temperature deviation among the retained candidates.
    MinTemperatureDeviation,
    /// Unique year closest to the mean of all candidate years.
    ClosestToCentreYear,
    /// Smallest year of the remaining tie.
    EarliestYear,
}

/// Outcome of the selection for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSelection {
    /// Calendar month.
    pub month: CalendarMonth,
    /// Chosen source year.
    pub year: i32,
    /// How the choice was settled.
    pub decision: Decision,
    /// Every year with data for the month, ascending.
    pub candidates: Vec<i32>,
    /// Candidates left when the cascade ended.
    pub retained: Vec<i32>,
    /// Criterion that no retained candidate passed, if the cascade stopped early.
    pub stopped_at: Option<Criterion>,
}

/// Representative years with the per-month decisions behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Chosen year per calendar month.
    pub years: RepresentativeYears,
    /// Per-month detail, January first.
    pub months: Vec<MonthSelection>,
}

/// Pick one representative year for every calendar month.
///
/// # Errors
///
/// Returns [`SelectError::NoCandidates`] for the first month without any
/// year in `mean`.
#[instrument(skip_all)]
pub fn select_representative_years(
    mean: &Classification,
    fs: &Classification,
) -> Result<Selection, SelectError> {
    let mut years = [0; 12];
    let mut months = Vec::with_capacity(12);
    for month in CalendarMonth::all() {
        let selection = select_month(month, mean, fs)?;
        debug!(
            month = %month,
            year = selection.year,
            decision = ?selection.decision,
            retained = selection.retained.len(),
            "representative year chosen"
        );
        years[month.index()] = selection.year;
        months.push(selection);
    }
    Ok(Selection {
        years: RepresentativeYears::new(years),
        months,
    })
}

/// Run the cascade for a single calendar month.
///
/// Candidates are the years with a mean/deviation verdict for `month`. A
/// missing FS verdict fails every FS criterion.
///
/// # Errors
///
/// Returns [`SelectError::NoCandidates`] if no year has data for `month`.
pub fn select_month(
    month: CalendarMonth,
    mean: &Classification,
    fs: &Classification,
) -> Result<MonthSelection, SelectError> {
    let candidates = mean.years_for(month);
    if candidates.is_empty() {
        return Err(SelectError::NoCandidates { month });
    }

    let mut retained = candidates.clone();
    let mut stopped_at = None;

    for criterion in CRITERIA {
        let passing: Vec<i32> = retained
            .iter()
            .copied()
            .filter(|&y| criterion.passes(&MonthKey::new(y, month), mean, fs))
            .collect();

        match passing.len() {
            0 => {
                stopped_at = Some(criterion);
                break;
            }
            1 => {
                return Ok(MonthSelection {
                    month,
                    year: passing[0],
                    decision: Decision::Cascade(criterion),
                    candidates,
                    retained: passing,
                    stopped_at: None,
                });
            }
            _ => retained = passing,
        }
    }

    let centre = candidates.iter().map(|&y| f64::from(y)).sum::<f64>() / candidates.len() as f64;
    let deviation = |y| {
        mean.score(&MonthKey::new(y, month), Parameter::Temperature)
            .unwrap_or(f64::INFINITY)
    };
    let (year, decision) = break_tie(&retained, deviation, centre);

    Ok(MonthSelection {
        month,
        year,
        decision,
        candidates,
        retained,
        stopped_at,
    })
}

/// Resolve a tie: minimum temperature deviation, then distance to
/// `centre`, then smallest year. `retained` must be non-empty and ascending.
fn break_tie(retained: &[i32], deviation: impl Fn(i32) -> f64, centre: f64) -> (i32, Decision) {
    let closest = keep_minimal(retained, deviation);
    if let [year] = closest[..] {
        return (year, Decision::MinTemperatureDeviation);
    }

    let closest = keep_minimal(&closest, |y| (f64::from(y) - centre).abs());
    if let [year] = closest[..] {
        return (year, Decision::ClosestToCentreYear);
    }

    // Ascending input, so the first is the earliest.
    (closest[0], Decision::EarliestYear)
}

/// Years whose `key` equals the minimum. Returns `years` unchanged when
/// no key compares (all NaN).
fn keep_minimal(years: &[i32], key: impl Fn(i32) -> f64) -> Vec<i32> {
    let min = years.iter().map(|&y| key(y)).fold(f64::INFINITY, f64::min);
    let kept: Vec<i32> = years.iter().copied().filter(|&y| key(y) == min).collect();
    if kept.is_empty() { years.to_vec() } else { kept }
}
