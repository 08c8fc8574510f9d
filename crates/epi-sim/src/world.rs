//! The `World` struct and its day loop.

use epi_agent::Population;
use epi_contact::ContactSampler;
use epi_core::{AgentId, DiseaseParameters, SimRng};
use log::{debug, warn};

use crate::{DayOutcome, RunSummary, SimResult, TransmissionModel, WorldBuilder, WorldObserver, WorldStat};

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation: an immutable parameter set and the population it acts on.
///
/// Create via [`World::new`] or [`WorldBuilder`].  The world has no
/// background activity; the driver decides when to advance and may stop at
/// any time.
pub struct World {
    params:       DiseaseParameters,
    population:   Population,
    sampler:      Box<dyn ContactSampler>,
    transmission: TransmissionModel,
    rng:          SimRng,
    day:          u32,
}

impl World {
    /// Validate `params`, draw the population from `seed`, and select the
    /// contact sampler.
    pub fn new(params: DiseaseParameters, seed: u64) -> SimResult<World> {
        WorldBuilder::new(params).seed(seed).build()
    }

    pub(crate) fn from_parts(
        transmission: TransmissionModel,
        params:       DiseaseParameters,
        population:   Population,
        sampler:      Box<dyn ContactSampler>,
        rng:          SimRng,
    ) -> Self {
        Self {
            params,
            population,
            sampler,
            transmission,
            rng,
            day: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn params(&self) -> &DiseaseParameters {
        &self.params
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Days advanced so far.
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn sampler_name(&self) -> &'static str {
        self.sampler.name()
    }

    /// Alive and infected agents right now.
    pub fn active_cases(&self) -> u32 {
        #[cfg(not(feature = "parallel"))]
        {
            self.population.active_cases()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.population
                .as_slice()
                .par_iter()
                .filter(|p| p.is_active_case())
                .count() as u32
        }
    }

    /// Death probability the next [`advance_one_day`](Self::advance_one_day)
    /// will apply, given the current state.
    pub fn death_probability(&self) -> f32 {
        self.death_probability_for(self.active_cases())
    }

    fn death_probability_for(&self, infected: u32) -> f32 {
        if infected > self.params.collapse_threshold {
            self.params.death_prob_collapse
        } else {
            self.params.death_prob_normal
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Counts over the whole population.  Read-only.
    pub fn get_statistics(&self) -> WorldStat {
        WorldStat::from_population(&self.population)
    }

    /// Advance the whole population by one day.
    ///
    /// The collapse decision is made once from the alive-infected count at
    /// the start of the call and applies to every death roll of the pass.
    /// Agents are then visited in index order; each alive, infected agent
    /// either recovers, dies, or counts a day and meets its contacts.  An
    /// agent infected earlier in the pass by a lower-indexed source is
    /// processed when the pass reaches it.
    pub fn advance_one_day(&mut self) -> DayOutcome {
        let infected_at_start = self.active_cases();
        let death_probability = self.death_probability_for(infected_at_start);
        let mut outcome = DayOutcome {
            day: self.day,
            infected_at_start,
            collapsed: infected_at_start > self.params.collapse_threshold,
            death_probability,
            ..DayOutcome::default()
        };

        let total_disease_days = self.params.total_disease_days;
        let asymptomatic_days = self.params.asymptomatic_days;

        for index in 0..self.population.len() as u32 {
            let agent = AgentId(index);
            let person = &mut self.population[agent];
            if !person.is_active_case() {
                continue;
            }

            // Recovery is checked before death and contacts.
            if u32::from(person.days_infected()) >= total_disease_days {
                person.recover();
                outcome.recovered += 1;
                continue;
            }

            if self.rng.chance(death_probability) {
                person.die();
                outcome.died += 1;
                continue;
            }

            let days = person.advance_infection_day();
            if u32::from(days) > asymptomatic_days
                && !person.is_always_asymptomatic()
                && !person.is_symptomatic()
            {
                person.mark_symptomatic();
                outcome.became_symptomatic += 1;
            }
            let source = *person;

            // Contacts are met as the sampler produces them; no list is built.
            let population = &mut self.population;
            let transmission = &self.transmission;
            let rng = &mut self.rng;
            self.sampler.for_each_contact(agent, self.day, &mut |target| {
                let target = &mut population[target];
                let was_infected = target.is_infected();
                transmission.attempt_infect(&source, target, rng);
                outcome.contacts += 1;
                outcome.new_infections += u32::from(!was_infected && target.is_infected());
            });
        }

        debug!(
            "day {}: {} infected at start{}, {} recovered, {} died, {} new infections",
            outcome.day,
            outcome.infected_at_start,
            if outcome.collapsed { " (healthcare collapsed)" } else { "" },
            outcome.recovered,
            outcome.died,
            outcome.new_infections,
        );

        self.day += 1;
        outcome
    }

    /// Drive the world until nobody is infected, or until `max_days` days
    /// have been advanced.
    ///
    /// Each iteration takes a snapshot, reports it, stops if
    /// `infected_count == 0`, and otherwise advances one day.  A world with
    /// no initial infections therefore reports once and never advances.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O, max_days: Option<u32>) -> RunSummary {
        let start_day = self.day;
        loop {
            let stat = self.get_statistics();
            observer.on_day_stats(self.day, &stat);

            let burned_out = stat.infected_count == 0;
            let limit_hit = max_days.is_some_and(|max| self.day - start_day >= max);
            if burned_out || limit_hit {
                if !burned_out {
                    warn!(
                        "stopping at day {} with {} agents still infected",
                        self.day, stat.infected_count
                    );
                }
                observer.on_sim_end(self.day, &stat);
                return RunSummary {
                    days: self.day - start_day,
                    final_stat: stat,
                    burned_out,
                };
            }

            let outcome = self.advance_one_day();
            observer.on_day_end(outcome.day, &outcome);
        }
    }
}
