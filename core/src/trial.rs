//! The trial engine: one compounding staking walk.
//!
//! Every round stakes a share of the *current* capital, so gains and
//! losses compound. Capital is never floored; ruin shows up as a
//! zero or negative value and the walk keeps going.

use crate::{
    params::SimulationParameters,
    rng::UniformSource,
    types::{RoundIndex, Trajectory},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Win,
    Loss,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win  => f.pad("win"),
            Self::Loss => f.pad("loss"),
        }
    }
}

/// One ledger line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round:         RoundIndex,
    pub kind:          OutcomeKind,
    /// Applied rate as a percentage (0.10 is stored as 10.0).
    pub rate_pct:      f64,
    /// Signed change in capital. Negative on a loss.
    pub delta:         f64,
    pub capital_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub initial_capital: f64,
    pub trajectory:      Trajectory,
    /// Present only when the caller asked for it.
    pub ledger:          Option<Vec<RoundOutcome>>,
}

impl Trial {
    /// Last capital in the trajectory, or the initial capital if no
    /// round was played.
    pub fn final_capital(&self) -> f64 {
        self.trajectory.last().copied().unwrap_or(self.initial_capital)
    }
}

/// Play a single round against `capital`.
fn play_round<R: UniformSource + ?Sized>(
    capital: f64,
    params: &SimulationParameters,
    rng: &mut R,
) -> (OutcomeKind, f64, f64) {
    if rng.chance(params.loss_probability) {
        let rate = params.loss_rate.sample(rng);
        (OutcomeKind::Loss, rate, -(capital * rate))
    } else {
        let rate = params.profit_rate.sample(rng);
        (OutcomeKind::Win, rate, capital * rate)
    }
}

/// Run one trial of `params.rounds` rounds.
///
/// Parameters are assumed valid; `SimEngine` checks them before any
/// trial runs. With `record_ledger` false no ledger is allocated.
pub fn run_trial<R: UniformSource + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
    record_ledger: bool,
) -> Trial {
    let mut capital = params.initial_capital;
    let mut trajectory = Vec::with_capacity(params.rounds);
    let mut ledger = record_ledger.then(|| Vec::with_capacity(params.rounds));

    for round in 1..=params.rounds {
        let (kind, rate, delta) = play_round(capital, params, rng);
        capital += delta;
        trajectory.push(capital);

        if let Some(ledger) = ledger.as_mut() {
            ledger.push(RoundOutcome {
                round,
                kind,
                rate_pct: rate * 100.0,
                delta,
                capital_after: capital,
            });
        }
    }

    Trial {
        initial_capital: params.initial_capital,
        trajectory,
        ledger,
    }
}
