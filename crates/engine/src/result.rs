//! Outputs of a synthesis run.

use std::ops::RangeInclusive;

use smy_assemble::BoundarySmoothing;
use smy_classify::Classification;
use smy_select::{MonthSelection, RepresentativeYears, Selection};
use smy_series::HourlySeries;

/// Classification and selection outcome, without assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSelection {
    /// Candidate years that were classified.
    pub analysed_years: RangeInclusive<i32>,
    /// Mean/deviation test verdicts.
    pub mean_test: Classification,
    /// FS test verdicts.
    pub fs_test: Classification,
    /// Chosen years and per-month decisions.
    pub selection: Selection,
}

/// The synthesized standard year.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedYear {
    /// 8760-hour series on the placeholder year.
    pub series: HourlySeries,
    /// Candidate years that were classified.
    pub analysed_years: RangeInclusive<i32>,
    /// Chosen year per calendar month.
    pub years: RepresentativeYears,
    /// Per-month decisions, January first.
    pub months: Vec<MonthSelection>,
    /// Month boundaries that were smoothed.
    pub plan: Vec<BoundarySmoothing>,
}
