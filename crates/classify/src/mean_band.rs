//! Mean/deviation typical-month test.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::aggregate::Aggregates;
use crate::parameter::ParamSet;
use crate::verdict::{Classification, Verdict};

/// Judge every (year, month) against the pooled monthly mean.
///
/// A parameter is typical when `|mean[y, m] - mean[m]| <= k * sd[m]`, where
/// `k` is [`band_multiplier`](crate::Parameter::band_multiplier). The
/// absolute deviation is kept as the verdict score.
#[instrument(skip_all)]
pub fn classify_by_mean(aggregates: &Aggregates) -> Classification {
    let mut verdicts = BTreeMap::new();

    for (key, means) in aggregates.year_months() {
        let Some(pooled) = aggregates.monthly(key.month()) else {
            continue;
        };
        let score = ParamSet::from_fn(|p| (means[p] - pooled[p].mean).abs());
        let typical = ParamSet::from_fn(|p| score[p] <= p.band_multiplier() * pooled[p].sd);
        verdicts.insert(*key, Verdict { typical, score });
    }

    debug!(months = verdicts.len(), "mean/deviation test done");
    Classification::new(verdicts)
}
