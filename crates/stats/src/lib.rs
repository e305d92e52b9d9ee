//! Statistical helper functions for standard-year synthesis.
//!
//! All spreads here are population statistics (N denominator), matching the
//! confidence bands of the typical-month tests.

use std::cmp::Ordering;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance with N denominator.
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation with N denominator.
/// Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Root mean square, `sqrt(mean(x²))`. Returns 0.0 if empty.
pub fn rms(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    (data.iter().map(|&x| x * x).sum::<f64>() / data.len() as f64).sqrt()
}

/// Empirical CDF value of every sample, returned in input order.
///
/// The i-th smallest of N samples (0-based) gets `(i + 1) / N`. Equal values
/// keep their input order, so the output is deterministic and its multiset
/// is always exactly `{1/N, 2/N, ..., N/N}`. NaN of either sign ranks above
/// every other value and ties with other NaN, so the finite samples keep their
/// value order. `-0.0` and `0.0` tie.
pub fn empirical_cdf(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    // `sort_by` is stable: ties stay in input order.
    order.sort_by(|&a, &b| {
        let (x, y) = (values[a], values[b]);
        x.is_nan()
            .cmp(&y.is_nan())
            .then_with(|| x.partial_cmp(&y).unwrap_or(Ordering::Equal))
    });

    let mut cdf = vec![0.0; n];
    let nf = n as f64;
    for (rank, &idx) in order.iter().enumerate() {
        cdf[idx] = (rank as f64 + 1.0) / nf;
    }
    cdf
}
