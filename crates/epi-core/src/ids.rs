//! Agent identifier.
//!
//! An agent's index in the population is its identity for the whole run and
//! also the seed of its contact sampler.  The inner integer is `pub` to allow
//! direct indexing via `id.0 as usize`, but callers should prefer
//! [`AgentId::index`] for clarity.

use std::fmt;

/// Index of an agent in the population store.  Max ~4.3 billion agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
