//! `epi-sim`: the simulation engine of the rust_epi epidemic simulator.
//!
//! # Day loop
//!
//! ```text
//! loop:
//!   ① Snapshot : WorldStat over the whole population.
//!   ② Stop     : if no alive agent is infected, the epidemic is over.
//!   ③ Advance  : one pass over the population in index order:
//!                   infected_now > collapse_threshold ? collapse : normal
//!                   for each alive, infected agent:
//!                     recover  (days_infected >= total_disease_days)
//!                     or die   (death roll)
//!                     or count a day, maybe show symptoms,
//!                        sample contacts, attempt transmission to each
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Statistics and the infected count use Rayon reductions.  |
//!
//! # Quick-start
//!
//! ```rust
//! use epi_core::DiseaseParameters;
//! use epi_sim::{NoopObserver, World};
//!
//! let params = DiseaseParameters {
//!     population_count: 1_000,
//!     start_infected:   5,
//!     ..DiseaseParameters::default()
//! };
//! let mut world = World::new(params, 42)?;
//! let summary = world.run(&mut NoopObserver, Some(1_000));
//! assert_eq!(summary.final_stat.live_count + summary.final_stat.dead_count, 1_000);
//! # Ok::<(), epi_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod stats;
pub mod transmission;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use stats::{DayOutcome, RunSummary, WorldStat};
pub use transmission::TransmissionModel;
pub use world::World;
