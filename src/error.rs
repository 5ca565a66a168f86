//! Error type shared by the dataset generator, the variants and the runner.

use thiserror::Error;

/// Errors that can occur while building fixtures or computing maxima.
#[derive(Debug, Error)]
pub enum LoopError {
    /// A variant was asked for the maximum of an empty slice.
    #[error("{variant}: cannot take the maximum of an empty dataset")]
    EmptyInput {
        /// Name of the variant that rejected the input.
        variant: &'static str,
    },

    /// Dataset or pool configuration was rejected before use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The rayon worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A consistency check was asked to compare zero outcomes.
    #[error("no outcomes to compare")]
    NoOutcomes,

    /// Two variants disagreed on the maximum of the same dataset.
    #[error("{variant} returned {actual}, expected {expected}")]
    Inconsistent {
        expected: i32,
        variant: &'static str,
        actual: i32,
    },

    /// Installing the global tracing subscriber failed.
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(String),
}

pub type Result<T> = std::result::Result<T, LoopError>;
