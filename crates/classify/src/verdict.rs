//! Per-(year, month) classification outcomes.

use std::collections::BTreeMap;

use smy_calendar::{CalendarMonth, MonthKey};

use crate::parameter::{ParamSet, Parameter};

/// Outcome of one typical-month test for one (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Verdict {
    /// Whether each parameter lies within its confidence band.
    pub typical: ParamSet<bool>,
    /// The statistic compared against the band: the absolute deviation of
    /// the monthly mean, or the FS value.
    pub score: ParamSet<f64>,
}

/// Verdicts of one test for every (year, month) that had data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    verdicts: BTreeMap<MonthKey, Verdict>,
}

impl Classification {
    /// Wrap a verdict map.
    pub fn new(verdicts: BTreeMap<MonthKey, Verdict>) -> Self {
        Self { verdicts }
    }

    /// Verdict for `key`, if the month had data.
    pub fn get(&self, key: &MonthKey) -> Option<&Verdict> {
        self.verdicts.get(key)
    }

    /// Whether `parameter` is typical for `key`. A missing verdict is not typical.
    pub fn is_typical(&self, key: &MonthKey, parameter: Parameter) -> bool {
        self.verdicts
            .get(key)
            .is_some_and(|v| v.typical[parameter])
    }

    /// Score of `parameter` for `key`, if the month had data.
    pub fn score(&self, key: &MonthKey, parameter: Parameter) -> Option<f64> {
        self.verdicts.get(key).map(|v| v.score[parameter])
    }

    /// Years with a verdict for calendar month `month`, ascending.
    pub fn years_for(&self, month: CalendarMonth) -> Vec<i32> {
        self.verdicts
            .keys()
            .filter(|k| k.month() == month)
            .map(|k| k.year())
            .collect()
    }

    /// Iterate over verdicts in (year, month) order.
    pub fn iter(&self) -> impl Iterator<Item = (&MonthKey, &Verdict)> {
        self.verdicts.iter()
    }

    /// Number of (year, month) verdicts.
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// Returns true if there are no verdicts.
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl FromIterator<(MonthKey, Verdict)> for Classification {
    fn from_iter<I: IntoIterator<Item = (MonthKey, Verdict)>>(iter: I) -> Self {
        Self {
            verdicts: iter.into_iter().collect(),
        }
    }
}
