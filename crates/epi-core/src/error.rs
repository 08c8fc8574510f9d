//! Configuration error type.
//!
//! Every way a [`DiseaseParameters`](crate::DiseaseParameters) record can be
//! unusable maps to one variant here.  Downstream crates wrap `ConfigError`
//! as one variant of their own error enum.

use thiserror::Error;

/// An invalid or unreadable parameter set.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population_count must be greater than zero")]
    ZeroPopulation,

    #[error("start_infected ({start_infected}) exceeds population_count ({population_count})")]
    StartInfectedExceedsPopulation {
        start_infected:   u32,
        population_count: u32,
    },

    #[error("total_disease_days ({total_disease_days}) exceeds the longest trackable infection ({max} days)")]
    DiseaseTooLong {
        total_disease_days: u32,
        max:                u32,
    },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        name:  &'static str,
        value: f32,
    },

    #[error("unknown algorithm_type {0} (expected 0 = default, 1 = faster, 2 = ludicrous)")]
    UnknownAlgorithm(u32),

    #[error("malformed parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for parameter handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
