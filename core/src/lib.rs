//! Monte Carlo simulator for compounding stake sequences.
//!
//! A run plays `trials` independent walks of `rounds` rounds each from
//! the same starting capital, then reduces the final capitals to
//! summary statistics. Rendering is left to the caller.

pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod params;
pub mod rng;
pub mod stats;
pub mod trial;
pub mod types;
