//! JSON report of a selection or synthesis run.

use std::path::Path;

use serde::Serialize;
use smy_engine::{
    BoundarySmoothing, Classification, Decision, MonthSelection, Parameter, SynthesizedYear,
    Verdict, YearSelection,
};
use tracing::info;

use crate::error::IoError;

/// Top-level report.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisReport {
    /// First and last analysed year.
    pub analysed_years: [i32; 2],
    /// Representative year per calendar month, January first.
    pub representative_years: [i32; 12],
    /// Per-month decisions.
    pub months: Vec<MonthReport>,
    /// Smoothed month boundaries; absent for selection-only runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<Vec<BoundaryReport>>,
    /// Output channel column names; absent for selection-only runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    /// Test verdicts per (year, month); present for selection-only runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdicts: Option<Vec<VerdictReport>>,
}

/// How one calendar month was settled.
#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    pub month: u8,
    pub year: i32,
    /// `cascade`, `min-temperature-deviation`, `closest-to-centre-year` or
    /// `earliest-year`.
    pub decision: &'static str,
    /// Criterion that isolated the year, for cascade decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion: Option<String>,
    pub candidates: Vec<i32>,
    pub retained: Vec<i32>,
    /// Criterion no retained candidate passed, if the cascade stopped early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<String>,
}

/// One smoothed month junction.
#[derive(Debug, Clone, Serialize)]
pub struct BoundaryReport {
    pub target_month: u8,
    pub before_year: i32,
    pub after_year: i32,
    pub kind: &'static str,
}

/// Both test outcomes of one (year, month).
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    /// `YYYY-MM`.
    pub month: String,
    pub mean: Vec<ParameterOutcome>,
    /// Absent when the month had no complete day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs: Option<Vec<ParameterOutcome>>,
}

/// One parameter's verdict. Non-finite scores serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterOutcome {
    pub parameter: &'static str,
    pub typical: bool,
    pub score: f64,
}

impl SynthesisReport {
    /// Report of a full synthesis run.
    pub fn from_synthesized(year: &SynthesizedYear) -> Self {
        Self {
            analysed_years: [*year.analysed_years.start(), *year.analysed_years.end()],
            representative_years: *year.years.as_array(),
            months: year.months.iter().map(MonthReport::from).collect(),
            smoothing: Some(year.plan.iter().map(BoundaryReport::from).collect()),
            channels: Some(
                year.series
                    .channel_ids()
                    .map(|c| c.column_name().to_string())
                    .collect(),
            ),
            verdicts: None,
        }
    }

    /// Report of a selection-only run, including every test verdict.
    pub fn from_selection(selection: &YearSelection) -> Self {
        Self {
            analysed_years: [
                *selection.analysed_years.start(),
                *selection.analysed_years.end(),
            ],
            representative_years: *selection.selection.years.as_array(),
            months: selection
                .selection
                .months
                .iter()
                .map(MonthReport::from)
                .collect(),
            smoothing: None,
            channels: None,
            verdicts: Some(verdict_reports(&selection.mean_test, &selection.fs_test)),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Report`] if serialization fails.
    pub fn to_json(&self) -> Result<String, IoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&MonthSelection> for MonthReport {
    fn from(m: &MonthSelection) -> Self {
        let (decision, criterion) = match m.decision {
            Decision::Cascade(c) => ("cascade", Some(c.to_string())),
            Decision::MinTemperatureDeviation => ("min-temperature-deviation", None),
            Decision::ClosestToCentreYear => ("closest-to-centre-year", None),
            Decision::EarliestYear => ("earliest-year", None),
        };
        Self {
            month: m.month.get(),
            year: m.year,
            decision,
            criterion,
            candidates: m.candidates.clone(),
            retained: m.retained.clone(),
            stopped_at: m.stopped_at.map(|c| c.to_string()),
        }
    }
}

impl From<&BoundarySmoothing> for BoundaryReport {
    fn from(b: &BoundarySmoothing) -> Self {
        Self {
            target_month: b.target.get(),
            before_year: b.before_year,
            after_year: b.after_year,
            kind: b.kind.name(),
        }
    }
}

fn outcomes(verdict: &Verdict) -> Vec<ParameterOutcome> {
    Parameter::ALL
        .iter()
        .map(|&p| ParameterOutcome {
            parameter: p.name(),
            typical: verdict.typical[p],
            score: verdict.score[p],
        })
        .collect()
}

fn verdict_reports(mean: &Classification, fs: &Classification) -> Vec<VerdictReport> {
    mean.iter()
        .map(|(key, verdict)| VerdictReport {
            month: key.to_string(),
            mean: outcomes(verdict),
            fs: fs.get(key).map(outcomes),
        })
        .collect()
}

/// Write `report` as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns [`IoError::Report`] if serialization or the file write fails.
pub fn write_report(path: &Path, report: &SynthesisReport) -> Result<(), IoError> {
    let json = report.to_json()?;
    std::fs::write(path, json).map_err(|e| IoError::Report {
        reason: format!("{}: {e}", path.display()),
    })?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
