use epi_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("population length {got} does not match population_count {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
