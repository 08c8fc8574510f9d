//! Error types for epi-output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// The report file could not be opened for writing.
    #[error("cannot create {}: {source}", .path.display())]
    Create { path: PathBuf, source: csv::Error },

    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV row rejected: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
