//! Shared primitive types used across the simulator.

/// The canonical run identifier.
pub type RunId = String;

/// 1-based round number within a trial.
pub type RoundIndex = usize;

/// A capital trajectory: capital after each round, in round order.
pub type Trajectory = Vec<f64>;
