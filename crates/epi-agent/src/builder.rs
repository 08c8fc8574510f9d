//! Fluent builder for the initial population.
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::PopulationBuilder;
//! use epi_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(10_000)
//!     .always_asymptomatic_ratio(0.5)
//!     .isolation_violators_ratio(0.1)
//!     .start_infected(10)
//!     .build(&mut rng);
//!
//! assert_eq!(population.len(), 10_000);
//! assert!(population.active_cases() <= 10);
//! ```

use epi_core::{AgentId, DiseaseParameters, SimRng};

use crate::{Person, Population};

/// Fluent builder for [`Population`].
///
/// Draw order is fixed so a given `SimRng` state always yields the same
/// population: for each agent in index order, one always-asymptomatic roll
/// then one isolation-violator roll; afterwards `start_infected` uniform
/// index draws.
pub struct PopulationBuilder {
    count:                     usize,
    always_asymptomatic_ratio: f32,
    isolation_violators_ratio: f32,
    start_infected:            u32,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents with no asymptomatic agents, no
    /// violators and no initial infections.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            always_asymptomatic_ratio: 0.0,
            isolation_violators_ratio: 0.0,
            start_infected:            0,
        }
    }

    /// Take every population-shaping field from a parameter set.
    pub fn from_params(params: &DiseaseParameters) -> Self {
        Self::new(params.population_count as usize)
            .always_asymptomatic_ratio(params.always_asymptomatic_ratio)
            .isolation_violators_ratio(params.isolation_violators_ratio)
            .start_infected(params.start_infected)
    }

    pub fn always_asymptomatic_ratio(mut self, ratio: f32) -> Self {
        self.always_asymptomatic_ratio = ratio;
        self
    }

    pub fn isolation_violators_ratio(mut self, ratio: f32) -> Self {
        self.isolation_violators_ratio = ratio;
        self
    }

    /// Number of initial infection draws.
    ///
    /// Targets are drawn uniformly *with replacement*, so duplicate picks
    /// can leave fewer than `n` distinct agents infected.
    pub fn start_infected(mut self, n: u32) -> Self {
        self.start_infected = n;
        self
    }

    /// Draw every agent's fixed traits and seed the initial infections.
    pub fn build(self, rng: &mut SimRng) -> Population {
        let people: Vec<Person> = (0..self.count)
            .map(|_| {
                let always_asymptomatic = rng.chance(self.always_asymptomatic_ratio);
                let isolation_violator = rng.chance(self.isolation_violators_ratio);
                Person::healthy(always_asymptomatic, isolation_violator)
            })
            .collect();
        let mut population = Population::from_people(people);

        if !population.is_empty() {
            let count = population.len() as u32;
            for _ in 0..self.start_infected {
                let target = AgentId(rng.gen_range(0..count));
                population[target].infect();
            }
        }

        population
    }
}
