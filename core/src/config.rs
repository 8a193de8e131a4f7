use crate::{
    distribution::{DEFAULT_CHART_LINES, DEFAULT_HISTOGRAM_BINS},
    error::SimResult,
    params::ParameterInput,
};
use serde::{Deserialize, Serialize};

/// Everything a headless run needs besides the random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub params: ParameterInput,
    /// Fixed seed for reproducible runs. None = derived at startup.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default = "default_chart_lines")]
    pub chart_lines: usize,
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

fn default_chart_lines() -> usize {
    DEFAULT_CHART_LINES
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            params:         ParameterInput::default(),
            seed:           None,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            chart_lines:    DEFAULT_CHART_LINES,
        }
    }
}

impl RunnerConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }

    /// Parse a config document. Missing fields fall back to defaults.
    pub fn from_json(content: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Small, seeded config for use in tests.
    pub fn default_test() -> Self {
        Self {
            params: ParameterInput {
                initial_capital: 1000.0,
                rounds:          20,
                trials:          50,
                loss_chance_pct: 40.0,
                profit_min_pct:  5.0,
                profit_max_pct:  15.0,
                loss_min_pct:    5.0,
                loss_max_pct:    10.0,
            },
            seed:           Some(42),
            histogram_bins: 10,
            chart_lines:    10,
        }
    }
}
