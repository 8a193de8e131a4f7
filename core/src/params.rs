//! Simulation parameters and the form-shaped input they are built from.
//!
//! `SimulationParameters` holds fractional rates (0.10 = 10%).
//! `ParameterInput` holds what a form collects: plain numbers for
//! capital and counts, percentages for every probability and rate.

use crate::{
    error::{ParamViolation, SimResult},
    rng::UniformSource,
};
use serde::{Deserialize, Serialize};

/// A half-open rate range [min, max), expressed as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

impl RateRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a rate uniformly from [min, max).
    pub fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.uniform_between(self.min, self.max)
    }

    fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub initial_capital:  f64,
    pub rounds:           usize,
    pub trials:           usize,
    pub loss_probability: f64,
    pub profit_rate:      RateRange,
    pub loss_rate:        RateRange,
}

impl SimulationParameters {
    /// Check every constraint a run depends on.
    /// Reports the first violation found, in field order.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.initial_capital.is_finite() && self.initial_capital > 0.0) {
            return Err(ParamViolation::InitialCapital(self.initial_capital).into());
        }
        if self.rounds == 0 {
            return Err(ParamViolation::Rounds(0).into());
        }
        if self.trials == 0 {
            return Err(ParamViolation::Trials(0).into());
        }
        if !(0.0..=1.0).contains(&self.loss_probability) {
            return Err(ParamViolation::LossProbability(self.loss_probability).into());
        }
        if !self.profit_rate.is_ordered() {
            return Err(ParamViolation::ProfitRange {
                min: self.profit_rate.min,
                max: self.profit_rate.max,
            }
            .into());
        }
        if !self.loss_rate.is_ordered() {
            return Err(ParamViolation::LossRange {
                min: self.loss_rate.min,
                max: self.loss_rate.max,
            }
            .into());
        }
        Ok(())
    }
}

/// Raw values as a form collects them. Rates and probability in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterInput {
    pub initial_capital:      f64,
    pub rounds:               i64,
    pub trials:               i64,
    pub loss_chance_pct:      f64,
    pub profit_min_pct:       f64,
    pub profit_max_pct:       f64,
    pub loss_min_pct:         f64,
    pub loss_max_pct:         f64,
}

impl Default for ParameterInput {
    fn default() -> Self {
        Self {
            initial_capital: 1000.0,
            rounds:          100,
            trials:          1000,
            loss_chance_pct: 45.0,
            profit_min_pct:  5.0,
            profit_max_pct:  15.0,
            loss_min_pct:    5.0,
            loss_max_pct:    10.0,
        }
    }
}

impl ParameterInput {
    /// Convert percentages to fractions and validate the result.
    pub fn into_parameters(self) -> SimResult<SimulationParameters> {
        let rounds = usize::try_from(self.rounds)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ParamViolation::Rounds(self.rounds))?;
        let trials = usize::try_from(self.trials)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ParamViolation::Trials(self.trials))?;

        let params = SimulationParameters {
            initial_capital:  self.initial_capital,
            rounds,
            trials,
            loss_probability: self.loss_chance_pct / 100.0,
            profit_rate:      RateRange::new(self.profit_min_pct / 100.0, self.profit_max_pct / 100.0),
            loss_rate:        RateRange::new(self.loss_min_pct / 100.0, self.loss_max_pct / 100.0),
        };
        params.validate()?;
        Ok(params)
    }
}
