//! Distribution statistics over derived gene measurements.

use std::cmp::Ordering;

/// Linear-interpolation quantile of a sample.
///
/// Matches the "linear" method used by numpy/polars: the quantile sits at
/// fractional rank `q * (n - 1)` of the sorted sample and is interpolated
/// between the neighboring values. `q` is clamped to [0, 1]; an empty
/// sample yields 0.0.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let q = q.clamp(0.0, 1.0);
    let rank = q * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        return sorted[below];
    }
    let fraction = rank - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}
