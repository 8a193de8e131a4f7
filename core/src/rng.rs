//! Random sources for the simulator.
//!
//! RULE: Nothing in the simulator may call a platform or thread-local RNG.
//! Every draw flows through a `UniformSource` handed in by the caller,
//! so a run is fully determined by its parameters and its source.
//!
//! Draw order inside a round is fixed: outcome first, rate second.
//! Changing it changes every seeded result.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A stream of uniform floats in [0.0, 1.0).
pub trait UniformSource {
    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll a float in [min, max).
    fn uniform_between(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }
}

/// Seeded PCG generator used for production runs.
pub struct SimRng {
    pub seed: u64,
    inner: Pcg64Mcg,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }
}

impl UniformSource for SimRng {
    fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Used to pin outcomes in tests. An empty script always yields 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far (not wrapped).
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
