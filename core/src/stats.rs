//! Summary statistics over final capitals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub count:          usize,
    pub minimum:        f64,
    pub maximum:        f64,
    pub mean:           f64,
    pub median:         f64,
    /// Population standard deviation (divisor is the count, not count - 1).
    pub std_dev:        f64,
    /// Values strictly greater than the mean.
    pub above_mean:     usize,
    pub above_mean_pct: f64,
}

impl Statistics {
    /// Reduce a set of final capitals. Returns None for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;

        let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Summation rounding can push the mean past the extremes, e.g.
        // three copies of 0.7. Keep it inside [minimum, maximum].
        let mean = (values.iter().sum::<f64>() / n).max(minimum).min(maximum);

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let above_mean = values.iter().filter(|v| **v > mean).count();

        Some(Self {
            count: values.len(),
            minimum,
            maximum,
            mean,
            median: median(values),
            std_dev: variance.sqrt(),
            above_mean,
            above_mean_pct: above_mean as f64 / n * 100.0,
        })
    }
}

/// Median of a non-empty slice. Even lengths average the two central values.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
