//! Error types for the Monte Carlo pricing kernel.
//!
//! Configuration errors are raised while building a
//! [`SimulationConfig`](super::SimulationConfig); nothing is simulated on an
//! invalid configuration. Runtime errors are limited to thread pool
//! construction.

use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Worker count must be at least one.
    #[error("Invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    /// Path count must cover every worker at least once.
    #[error("Invalid path count {paths}: must be at least the worker count ({workers})")]
    InvalidPathCount {
        /// Requested number of paths.
        paths: usize,
        /// Resolved number of workers.
        workers: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Error returned by [`MonteCarloPricer`](super::MonteCarloPricer).
#[derive(Debug, Error)]
pub enum PricingError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The worker thread pool could not be started.
    #[error("Failed to start {workers} worker threads: {source}")]
    ThreadPool {
        /// Number of threads requested.
        workers: usize,
        /// Underlying rayon error.
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}
