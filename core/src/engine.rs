//! The Monte Carlo driver.
//!
//! RULES:
//!   - Parameters are validated once, when the engine is built.
//!     Trials never see invalid parameters.
//!   - Trials run sequentially and share one random stream, consumed
//!     in trial order. Same source, same result, byte for byte.
//!   - Only trial #1 records a ledger. Later trials keep their
//!     trajectory and final capital, nothing else.
//!   - Cancellation is checked between trials, never inside one.

use crate::{
    error::{SimError, SimResult},
    params::SimulationParameters,
    rng::{SimRng, UniformSource},
    stats::Statistics,
    trial::{run_trial, RoundOutcome},
    types::{RunId, Trajectory},
};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag a caller can raise to stop a run at the next trial boundary.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub run_id:         RunId,
    /// Seed of the generator, when the engine created it.
    pub seed:           Option<u64>,
    pub params:         SimulationParameters,
    pub trajectories:   Vec<Trajectory>,
    /// One per trial, same order as `trajectories`.
    pub final_capitals: Vec<f64>,
    /// Ledger of the first trial.
    pub detailed_trial: Vec<RoundOutcome>,
}

impl SimulationResult {
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::from_values(&self.final_capitals)
    }

    pub fn final_capital(&self, trial: usize) -> Option<f64> {
        self.final_capitals.get(trial).copied()
    }

    pub fn trial_count(&self) -> usize {
        self.final_capitals.len()
    }
}

pub struct SimEngine {
    pub run_id: RunId,
    params:     SimulationParameters,
    stop:       Option<StopFlag>,
}

impl SimEngine {
    /// Build an engine, rejecting invalid parameters up front.
    pub fn new(run_id: RunId, params: SimulationParameters) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            run_id,
            params,
            stop: None,
        })
    }

    pub fn with_stop_flag(mut self, flag: StopFlag) -> Self {
        self.stop = Some(flag);
        self
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Run every trial on a fresh generator seeded with `seed`.
    pub fn run_seeded(&self, seed: u64) -> SimResult<SimulationResult> {
        let mut rng = SimRng::new(seed);
        let mut result = self.run(&mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Run every trial, drawing from `rng`.
    pub fn run<R: UniformSource + ?Sized>(&self, rng: &mut R) -> SimResult<SimulationResult> {
        let requested = self.params.trials;
        log::debug!(
            "run={} starting: trials={requested} rounds={}",
            self.run_id,
            self.params.rounds
        );

        let mut trajectories = Vec::with_capacity(requested);
        let mut final_capitals = Vec::with_capacity(requested);
        let mut detailed_trial = Vec::new();

        for index in 0..requested {
            if self.stop.as_ref().is_some_and(StopFlag::is_stopped) {
                log::info!("run={} cancelled after {index} trials", self.run_id);
                return Err(SimError::Cancelled {
                    completed: index,
                    requested,
                });
            }

            let trial = run_trial(&self.params, rng, index == 0);
            final_capitals.push(trial.final_capital());
            if let Some(ledger) = trial.ledger {
                detailed_trial = ledger;
            }
            trajectories.push(trial.trajectory);
        }

        log::info!(
            "run={} finished {requested} trials of {} rounds",
            self.run_id,
            self.params.rounds
        );

        Ok(SimulationResult {
            run_id: self.run_id.clone(),
            seed: None,
            params: self.params.clone(),
            trajectories,
            final_capitals,
            detailed_trial,
        })
    }
}

/// Run id used by `simulate`, which has no caller-supplied identity.
pub const ADHOC_RUN_ID: &str = "adhoc";

/// Validate `params` and run them against `rng`.
pub fn simulate<R: UniformSource + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> SimResult<SimulationResult> {
    SimEngine::new(ADHOC_RUN_ID.to_string(), params.clone())?.run(rng)
}
