//! Monthly summary statistics over hourly values.

use std::collections::BTreeMap;

use smy_calendar::{CalendarMonth, MonthKey};
use smy_series::HourlySeries;
use smy_stats::{mean, population_sd};
use tracing::instrument;

use crate::error::ClassifyError;
use crate::parameter::{ParamSet, Parameter, TrackedChannels};

/// Mean and population standard deviation of one pooled group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (N denominator).
    pub sd: f64,
}

/// Hourly statistics grouped by calendar month and by (year, month).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    monthly: BTreeMap<CalendarMonth, ParamSet<Summary>>,
    year_monthly: BTreeMap<MonthKey, ParamSet<f64>>,
}

impl Aggregates {
    /// Pooled summary of a calendar month across all years.
    pub fn monthly(&self, month: CalendarMonth) -> Option<&ParamSet<Summary>> {
        self.monthly.get(&month)
    }

    /// Mean of a single (year, month).
    pub fn year_monthly(&self, key: &MonthKey) -> Option<&ParamSet<f64>> {
        self.year_monthly.get(key)
    }

    /// Iterate over (year, month) means in order.
    pub fn year_months(&self) -> impl Iterator<Item = (&MonthKey, &ParamSet<f64>)> {
        self.year_monthly.iter()
    }
}

/// Compute per-month and per-(year, month) statistics of every tracked
/// parameter over its hourly values.
///
/// Months without samples are left out of the result.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingChannel`] if a tracked channel is absent.
#[instrument(skip_all, fields(years = ?series.years()))]
pub fn aggregate(
    series: &HourlySeries,
    tracked: &TrackedChannels,
) -> Result<Aggregates, ClassifyError> {
    let values = tracked.resolve(series)?;
    let spans = series.month_spans();

    let mut pooled: BTreeMap<CalendarMonth, ParamSet<Vec<f64>>> = BTreeMap::new();
    let mut year_monthly = BTreeMap::new();

    for (key, range) in spans {
        if range.is_empty() {
            continue;
        }
        let group = pooled.entry(key.month()).or_default();
        for p in Parameter::ALL {
            group[p].extend_from_slice(&values[p][range.clone()]);
        }
        year_monthly.insert(key, ParamSet::from_fn(|p| mean(&values[p][range.clone()])));
    }

    let monthly = pooled
        .into_iter()
        .map(|(month, group)| {
            let summary = ParamSet::from_fn(|p| Summary {
                mean: mean(&group[p]),
                sd: population_sd(&group[p]),
            });
            (month, summary)
        })
        .collect();

    Ok(Aggregates {
        monthly,
        year_monthly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use smy_series::Channel;

    /// Two common years, every tracked channel constant within a year.
    fn two_years(first: f64, second: f64) -> HourlySeries {
        let mut v = vec![first; 8760];
        v.extend(std::iter::repeat_n(second, 8760));
        let mut channels = std::collections::BTreeMap::new();
        for p in Parameter::ALL {
            channels.insert(TrackedChannels::estimated().channel(p), v.clone());
        }
        HourlySeries::new(2017, channels).unwrap()
    }

    #[test]
    fn test_year_month_means() {
        let agg = aggregate(&two_years(1.0, 3.0), &TrackedChannels::estimated()).unwrap();
        let key = MonthKey::new(2018, CalendarMonth::MARCH);
        assert_relative_eq!(agg.year_monthly(&key).unwrap()[Parameter::Temperature], 3.0);
        assert_eq!(agg.year_months().count(), 24);
    }

    #[test]
    fn test_pooled_population_sd() {
        let agg = aggregate(&two_years(1.0, 3.0), &TrackedChannels::estimated()).unwrap();
        let jan = agg.monthly(CalendarMonth::JANUARY).unwrap();
        assert_relative_eq!(jan[Parameter::Irradiance].mean, 2.0, epsilon = 1e-12);
        // Half the hours at 1, half at 3: population SD is exactly 1.
        assert_relative_eq!(jan[Parameter::Irradiance].sd, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_channel() {
        let mut channels = std::collections::BTreeMap::new();
        channels.insert(Channel::Tmp, vec![0.0; 8760]);
        let series = HourlySeries::new(2019, channels).unwrap();
        let err = aggregate(&series, &TrackedChannels::estimated()).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::MissingChannel {
                parameter: Parameter::Irradiance,
                ..
            }
        ));
    }
}
