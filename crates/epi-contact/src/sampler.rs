//! The `ContactSampler` trait and the `SamplerKind` → sampler factory.

use epi_core::{AgentId, DiseaseParameters, SamplerKind};

use crate::{ContiguousSampler, LfsrSampler, RepeatableSampler};

/// Produces one agent's contact targets for one day.
///
/// # Contract
///
/// `for_each_contact` calls `visit` exactly
/// [`circle_size`](Self::circle_size) times, each with a valid index into
/// the population.  The same `(agent, day)` must always yield the same
/// targets in the same order.  Targets are produced one at a time, so a
/// large circle costs time but never memory.
///
/// # Thread safety
///
/// Samplers hold only immutable configuration; all per-call state is local.
/// They are `Send + Sync` so one instance can serve a whole run.
pub trait ContactSampler: Send + Sync + 'static {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Number of targets produced per call.
    fn circle_size(&self) -> u32;

    /// Call `visit` once per contact of `agent` on `day`, in order.
    fn for_each_contact(&self, agent: AgentId, day: u32, visit: &mut dyn FnMut(AgentId));

    /// Replace the contents of `out` with `agent`'s contacts on `day`.
    fn sample_into(&self, agent: AgentId, day: u32, out: &mut Vec<AgentId>) {
        out.clear();
        self.for_each_contact(agent, day, &mut |target| out.push(target));
    }
}

/// Build the sampler selected by `kind`.
///
/// `seed` is the run seed; only the repeatable sampler uses it.
pub fn sampler_for(kind: SamplerKind, params: &DiseaseParameters, seed: u64) -> Box<dyn ContactSampler> {
    let population = params.population_count;
    let circle = params.interaction_circle_count;
    match kind {
        SamplerKind::Default => Box::new(RepeatableSampler::new(population, circle, seed)),
        SamplerKind::Faster => Box::new(LfsrSampler::new(population, circle)),
        SamplerKind::Ludicrous => Box::new(ContiguousSampler::new(population, circle)),
    }
}
