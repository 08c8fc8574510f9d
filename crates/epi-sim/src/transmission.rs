//! Stochastic transmission from an infected source to a contact.

use epi_agent::Person;
use epi_core::{DiseaseParameters, SimRng};

/// Spread probabilities keyed by the source's (symptomatic, in-isolation)
/// state, plus the isolation-entry probability for new cases.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TransmissionModel {
    pub symptomatic_isolation:      f32,
    pub symptomatic_not_isolation:  f32,
    pub asymptomatic_isolation:     f32,
    pub asymptomatic_not_isolation: f32,
    pub isolation_ratio:            f32,
}

impl TransmissionModel {
    pub fn from_params(params: &DiseaseParameters) -> Self {
        Self {
            symptomatic_isolation:      params.spread_symptomatic_isolation,
            symptomatic_not_isolation:  params.spread_symptomatic_not_isolation,
            asymptomatic_isolation:     params.spread_asymptomatic_isolation,
            asymptomatic_not_isolation: params.spread_asymptomatic_not_isolation,
            isolation_ratio:            params.isolation_ratio,
        }
    }

    /// Probability that one contact with `source` infects a susceptible target.
    #[inline]
    pub fn spread_probability(&self, source: &Person) -> f32 {
        match (source.is_symptomatic(), source.is_in_isolation()) {
            (false, false) => self.asymptomatic_not_isolation,
            (false, true) => self.asymptomatic_isolation,
            (true, false) => self.symptomatic_not_isolation,
            (true, true) => self.symptomatic_isolation,
        }
    }

    /// Roll for transmission from `source` to `target`.
    ///
    /// The caller guarantees `source` is alive and infected.  Immune targets
    /// are never infected and consume no random draw.  On infection a second
    /// draw decides isolation entry; isolation violators skip that draw and
    /// never isolate.
    ///
    /// Calling this on an already infected target leaves it infected but
    /// may still move it into isolation.
    #[inline]
    pub fn attempt_infect(&self, source: &Person, target: &mut Person, rng: &mut SimRng) {
        if target.is_immune() {
            return;
        }
        if rng.chance(self.spread_probability(source)) {
            target.infect();
            if !target.is_isolation_violator() && rng.chance(self.isolation_ratio) {
                target.enter_isolation();
            }
        }
    }
}
