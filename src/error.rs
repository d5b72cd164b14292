//! Error types for benchmark setup.
//!
//! Only precondition failures live here. An algorithm that returns an
//! unsorted vector, or panics, produces a reportable [`Outcome`] instead.
//!
//! [`Outcome`]: crate::utils::timer::Outcome

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before any benchmark task is dispatched.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The sample size was given as a negative number
    #[error("sample size must be non-negative, got '{raw}'")]
    NegativeSize {
        /// The raw argument as supplied
        raw: String,
    },

    /// A requested algorithm is not in the registry
    #[error("algorithm '{name}' not found (available: {})", .available.join(", "))]
    UnknownAlgorithm {
        name: String,
        available: Vec<&'static str>,
    },

    /// Two registry entries share a name
    #[error("algorithm '{name}' is registered more than once")]
    DuplicateAlgorithm { name: String },

    /// The selection resolved to zero algorithms
    #[error("no algorithms selected")]
    EmptySelection,

    /// The OS refused to start a worker thread
    #[error("failed to spawn worker for '{name}': {source}")]
    Spawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Writing the CSV report failed
    #[error("failed to write CSV to {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
