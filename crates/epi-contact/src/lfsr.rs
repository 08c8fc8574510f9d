//! 32-bit linear-feedback shift register and the sampler built on it.
//!
//! Feedback taps are bits 0, 2, 6 and 7.  Each step XORs the taps, shifts the
//! register right by one and feeds the XOR into bit 31.  A zero register is a
//! fixed point, so agent 0 only ever contacts agent 0.

use epi_core::AgentId;

use crate::ContactSampler;

/// Minimal Fibonacci-style LFSR over a `u32`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Lfsr32(u32);

impl Lfsr32 {
    #[inline]
    pub fn new(state: u32) -> Self {
        Lfsr32(state)
    }

    #[inline]
    pub fn state(self) -> u32 {
        self.0
    }

    /// The state one step after `s`.
    #[inline]
    pub const fn next_state(s: u32) -> u32 {
        let bit = (s ^ (s >> 2) ^ (s >> 6) ^ (s >> 7)) & 1;
        (s >> 1) | (bit << 31)
    }

    /// Advance one step and return the new state.
    #[inline]
    pub fn step(&mut self) -> u32 {
        self.0 = Self::next_state(self.0);
        self.0
    }
}

impl Iterator for Lfsr32 {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.step())
    }
}

/// Faster sampler: one LFSR step per contact, reduced modulo the population.
#[derive(Clone, Debug)]
pub struct LfsrSampler {
    population_count: u32,
    circle_size:      u32,
}

impl LfsrSampler {
    pub fn new(population_count: u32, circle_size: u32) -> Self {
        Self { population_count, circle_size }
    }
}

impl ContactSampler for LfsrSampler {
    fn name(&self) -> &'static str {
        "faster"
    }

    fn circle_size(&self) -> u32 {
        self.circle_size
    }

    fn for_each_contact(&self, agent: AgentId, _day: u32, visit: &mut dyn FnMut(AgentId)) {
        let mut reg = Lfsr32::new(agent.0);
        for _ in 0..self.circle_size {
            visit(AgentId(reg.step() % self.population_count));
        }
    }
}
