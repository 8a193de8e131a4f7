//! Chart-ready views of a run: a histogram of final capitals and the
//! subset of trajectories worth drawing. No rendering happens here.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
pub const DEFAULT_CHART_LINES: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub min:   f64,
    pub max:   f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bucket `values` into `num_bins` equal-width bins spanning [min, max].
    ///
    /// The maximum value lands in the last bin. When every value is equal
    /// the width is zero and everything lands in bin 0.
    pub fn from_values(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return Self::default();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / num_bins as f64;

        let mut bins: Vec<HistogramBin> = (0..num_bins)
            .map(|i| HistogramBin {
                min:   min + i as f64 * width,
                max:   min + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for value in values {
            let index = if width > 0.0 {
                (((value - min) / width).floor() as usize).min(num_bins - 1)
            } else {
                0
            };
            bins[index].count += 1;
        }

        Self { bins }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Pick which trajectories to draw out of `total`, at most `max_lines`.
///
/// Walks from index 0 with a stride of `total / lines` and stops once
/// `lines` indices are chosen.
pub fn sample_trajectory_indices(total: usize, max_lines: usize) -> Vec<usize> {
    let lines = max_lines.min(total);
    if lines == 0 {
        return Vec::new();
    }
    let step = total / lines;
    (0..total).step_by(step).take(lines).collect()
}
