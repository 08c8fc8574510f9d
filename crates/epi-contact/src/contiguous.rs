//! Ludicrous sampler: a run of adjacent indices starting at a pseudo-random
//! offset.

use epi_core::AgentId;

use crate::{ContactSampler, Lfsr32};

/// One LFSR step from the agent index picks a start; contacts are the
/// `circle_size` indices that follow it, wrapping at the population end.
///
/// Trades contact realism for throughput: one pseudo-random computation per
/// agent-day and cache-friendly target access.
#[derive(Clone, Debug)]
pub struct ContiguousSampler {
    population_count: u32,
    circle_size:      u32,
}

impl ContiguousSampler {
    pub fn new(population_count: u32, circle_size: u32) -> Self {
        Self { population_count, circle_size }
    }
}

impl ContactSampler for ContiguousSampler {
    fn name(&self) -> &'static str {
        "ludicrous"
    }

    fn circle_size(&self) -> u32 {
        self.circle_size
    }

    fn for_each_contact(&self, agent: AgentId, _day: u32, visit: &mut dyn FnMut(AgentId)) {
        let start = Lfsr32::next_state(agent.0);
        // The offset is added in 32-bit arithmetic before the modulo.
        for j in 0..self.circle_size {
            visit(AgentId(start.wrapping_add(j) % self.population_count));
        }
    }
}
