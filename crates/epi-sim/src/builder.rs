//! Fluent builder for constructing a [`World`].

use epi_agent::{Population, PopulationBuilder};
use epi_contact::{ContactSampler, sampler_for};
use epi_core::{DiseaseParameters, SimRng};
use log::info;

use crate::{SimError, SimResult, TransmissionModel, World};

/// Fluent builder for [`World`].
///
/// # Required inputs
///
/// - [`DiseaseParameters`]: validated in [`build`](Self::build).
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                            |
/// |---------------------|----------------------------------------------------|
/// | `.seed(s)`          | `0`                                                |
/// | `.sampler(b)`       | The sampler selected by `algorithm_type`           |
/// | `.population(p)`    | Drawn by `PopulationBuilder::from_params`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(params)
///     .seed(42)
///     .build()?;
/// world.run(&mut NoopObserver, None);
/// ```
pub struct WorldBuilder {
    params:     DiseaseParameters,
    seed:       u64,
    sampler:    Option<Box<dyn ContactSampler>>,
    population: Option<Population>,
}

impl WorldBuilder {
    pub fn new(params: DiseaseParameters) -> Self {
        Self {
            params,
            seed:       0,
            sampler:    None,
            population: None,
        }
    }

    /// Run seed.  The same parameters and seed always produce the same run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a custom contact sampler instead of the one `algorithm_type`
    /// selects.  `algorithm_type` is still validated.
    pub fn sampler(mut self, sampler: Box<dyn ContactSampler>) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Start from a prepared population instead of drawing one.
    ///
    /// Must have exactly `population_count` agents.  `start_infected` and
    /// the trait ratios are ignored.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate the parameters, draw the population, select the sampler, and
    /// return a ready-to-run [`World`].
    pub fn build(self) -> SimResult<World> {
        let kind = self.params.validate()?;
        let mut rng = SimRng::new(self.seed);

        let population = match self.population {
            Some(p) => {
                let expected = self.params.population_count as usize;
                if p.len() != expected {
                    return Err(SimError::PopulationMismatch { expected, got: p.len() });
                }
                p
            }
            None => PopulationBuilder::from_params(&self.params).build(&mut rng),
        };

        let sampler = self
            .sampler
            .unwrap_or_else(|| sampler_for(kind, &self.params, self.seed));

        info!(
            "world built: {} agents, {} initially infected, sampler {}, seed {}",
            population.len(),
            population.active_cases(),
            sampler.name(),
            self.seed,
        );

        Ok(World::from_parts(
            TransmissionModel::from_params(&self.params),
            self.params,
            population,
            sampler,
            rng,
        ))
    }
}
