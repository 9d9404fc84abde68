//! The run's deterministic random source.
//!
//! # Determinism strategy
//!
//! Every stochastic draw in a run — initial health, initial position, speed,
//! movement angle, and each Bernoulli transition trial — comes from one
//! explicit `SimRng`, threaded by `&mut` through population creation and the
//! transition rules.  Because agents are always processed in ascending id
//! order and each rule's draw pattern is fixed, a given seed produces an
//! identical run every time: the stream position of any draw is a pure
//! function of (step, rule, agent, prior outcomes).
//!
//! There is deliberately no hidden thread-local RNG anywhere in the
//! workspace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Simulation-level deterministic RNG.
///
/// Wraps a `SmallRng`; the same seed always produces identical results.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`.
    ///
    /// # Panics
    /// Panics if `p` is outside `[0, 1]` — callers pass pre-validated
    /// [`Probability`][crate::Probability] values, so this cannot fire from
    /// simulation code.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }

    /// One draw from the standard normal distribution `N(0, 1)`.
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}
