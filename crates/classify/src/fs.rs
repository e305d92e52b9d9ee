//! Finkelstein-Schafer typical-month test.
//!
//! Daily means are ranked twice: once within the calendar month pooled over
//! all years, once within the single (year, month). The FS value of a
//! (year, month) is the mean absolute gap between the two CDF values of its
//! days.

use std::collections::BTreeMap;

use smy_calendar::{CalendarMonth, HOURS_PER_DAY, MonthKey};
use smy_series::HourlySeries;
use smy_stats::{empirical_cdf, mean, rms};
use tracing::{debug, instrument};

use crate::error::ClassifyError;
use crate::parameter::{Parameter, TrackedChannels};
use crate::verdict::{Classification, Verdict};

/// A daily mean tagged with its (year, month).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyMean {
    /// Month the day belongs to.
    pub key: MonthKey,
    /// Mean of the day's 24 hourly values.
    pub value: f64,
}

/// Daily means of `values`, chronological.
pub fn daily_means(series: &HourlySeries, values: &[f64]) -> Vec<DailyMean> {
    let mut days = Vec::with_capacity(values.len() / HOURS_PER_DAY);
    for (key, range) in series.month_spans() {
        for day in values[range].chunks_exact(HOURS_PER_DAY) {
            days.push(DailyMean {
                key,
                value: mean(day),
            });
        }
    }
    days
}

/// Per-day CDF values of `days` ranked within groups sharing `group_of`.
///
/// Ranking is stable, so equal daily means rank in chronological order.
fn grouped_cdf<K: Ord>(days: &[DailyMean], group_of: impl Fn(&MonthKey) -> K) -> Vec<f64> {
    let mut groups: BTreeMap<K, Vec<usize>> = BTreeMap::new();
    for (i, d) in days.iter().enumerate() {
        groups.entry(group_of(&d.key)).or_default().push(i);
    }

    let mut cdf = vec![0.0; days.len()];
    for members in groups.values() {
        let values: Vec<f64> = members.iter().map(|&i| days[i].value).collect();
        for (&i, c) in members.iter().zip(empirical_cdf(&values)) {
            cdf[i] = c;
        }
    }
    cdf
}

/// FS value of every (year, month) present in `days`.
pub fn fs_values(days: &[DailyMean]) -> BTreeMap<MonthKey, f64> {
    let by_month = grouped_cdf(days, |k| k.month());
    let by_year_month = grouped_cdf(days, |k| *k);

    let mut gaps: BTreeMap<MonthKey, Vec<f64>> = BTreeMap::new();
    for (i, d) in days.iter().enumerate() {
        gaps.entry(d.key)
            .or_default()
            .push((by_month[i] - by_year_month[i]).abs());
    }

    gaps.into_iter().map(|(k, g)| (k, mean(&g))).collect()
}

/// RMS of FS values across years, per calendar month.
pub fn fs_spread(fs: &BTreeMap<MonthKey, f64>) -> BTreeMap<CalendarMonth, f64> {
    let mut grouped: BTreeMap<CalendarMonth, Vec<f64>> = BTreeMap::new();
    for (key, &value) in fs {
        grouped.entry(key.month()).or_default().push(value);
    }
    grouped.into_iter().map(|(m, v)| (m, rms(&v))).collect()
}

/// Judge every (year, month) by the FS test.
///
/// A parameter is typical when `FS[y, m] <= k * rms_y(FS[y, m])`. The FS
/// value is kept as the verdict score. Values are taken as given; any
/// clamping of negative inputs belongs upstream.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingChannel`] if a tracked channel is absent.
#[instrument(skip_all, fields(years = ?series.years()))]
pub fn classify_by_fs(
    series: &HourlySeries,
    tracked: &TrackedChannels,
) -> Result<Classification, ClassifyError> {
    let values = tracked.resolve(series)?;
    let mut verdicts: BTreeMap<MonthKey, Verdict> = BTreeMap::new();

    for p in Parameter::ALL {
        let days = daily_means(series, values[p]);
        let fs = fs_values(&days);
        let spread = fs_spread(&fs);
        let k = p.band_multiplier();

        for (key, value) in fs {
            let sd = spread.get(&key.month()).copied().unwrap_or(0.0);
            let verdict = verdicts.entry(key).or_default();
            verdict.score[p] = value;
            verdict.typical[p] = value <= k * sd;
        }
        debug!(parameter = %p, channel = %tracked.channel(p), "FS test done");
    }

    Ok(Classification::new(verdicts))
}
