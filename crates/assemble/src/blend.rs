//! Linear blend of two aligned windows.

use crate::window::WINDOW_HOURS;

/// Weight of the after-year value at window hour `i`: `i / 12`.
pub fn after_coefficient(i: usize) -> f64 {
    i as f64 / (WINDOW_HOURS - 1) as f64
}

/// Blend of the before- and after-year values at window hour `i`.
///
/// Hour 0 is the before value, hour 12 the after value. NaN in either
/// input propagates.
pub fn blend(before: f64, after: f64, i: usize) -> f64 {
    let a = after_coefficient(i);
    before * (1.0 - a) + after * a
}
