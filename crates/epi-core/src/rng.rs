//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! A run has exactly one caller-supplied seed.  Nothing reads a global
//! generator.
//!
//! - [`SimRng`] is seeded directly from it and drives every sequential roll:
//!   population initialization, death, transmission, isolation entry.
//! - [`AgentRng`] is derived per agent as
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//!   The mixing constant is the 64-bit fractional part of the golden ratio,
//!   which spreads consecutive agent IDs uniformly across the seed space.
//!   Rebuilding an `AgentRng` from the same `(global_seed, agent)` pair always
//!   yields the same stream, which is how the default contact sampler gives an
//!   agent the same contacts every day.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Cheap enough to rebuild on demand; the contact sampler creates a fresh one
/// for every agent it processes.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for population initialization and the sequential rolls of
/// the day-advance pass.  Never shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from `range`, e.g. an agent index.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw a uniform `f32` in `[0, 1)` and report whether it fell below `p`.
    ///
    /// `p <= 0.0` never succeeds and `p >= 1.0` always does.
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        self.0.r#gen::<f32>() < p
    }
}
