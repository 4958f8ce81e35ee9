//! Monte Carlo simulation configuration.
//!
//! This module provides the immutable [`SimulationConfig`] handed to the
//! driver and the builder that validates it.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use super::params::OptionParams;

/// Default number of simulated paths.
pub const DEFAULT_PATHS: usize = 10_000_000;

/// What to do with `path_count % worker_count` left-over paths.
///
/// - `Truncate`: drop the remainder; every worker runs the same count
/// - `Distribute`: the first `remainder` workers run one extra path
///
/// Either way the executed total is tracked exactly and is the count used
/// for discounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RemainderPolicy {
    /// Discard the remainder.
    #[default]
    Truncate,
    /// Spread the remainder one path at a time over the leading workers.
    Distribute,
}

impl RemainderPolicy {
    /// Lower-case name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Distribute => "distribute",
        }
    }
}

impl fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemainderPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "distribute" => Ok(Self::Distribute),
            other => Err(ConfigError::InvalidParameter {
                name: "remainder",
                value: format!("{} (expected truncate or distribute)", other),
            }),
        }
    }
}

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`SimulationConfigBuilder`] to construct
/// instances; the builder resolves the worker count and validates every
/// field.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{RemainderPolicy, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .spot(105.0)
///     .path_count(100_003)
///     .worker_count(4)
///     .remainder(RemainderPolicy::Distribute)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.params().spot, 105.0);
/// assert_eq!(config.worker_count(), 4);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    params: OptionParams,
    path_count: usize,
    worker_count: usize,
    seed: Option<u64>,
    remainder: RemainderPolicy,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the option parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Returns the requested number of paths.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Returns the resolved number of workers.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Returns the injected base seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the remainder policy.
    #[inline]
    pub fn remainder(&self) -> RemainderPolicy {
        self.remainder
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - any option parameter is invalid (see [`OptionParams::validate`])
    /// - `worker_count` is zero
    /// - `path_count` is smaller than `worker_count`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        if self.worker_count == 0 {
            return Err(ConfigError::InvalidWorkerCount(self.worker_count));
        }
        if self.path_count < self.worker_count {
            return Err(ConfigError::InvalidPathCount {
                paths: self.path_count,
                workers: self.worker_count,
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to the reference run: S=100, K=100, r=5%,
/// σ=20%, T=1y, 10,000,000 paths, one worker per logical CPU, a clock-based
/// seed and truncation of the remainder.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    params: OptionParams,
    path_count: Option<usize>,
    worker_count: Option<usize>,
    seed: Option<u64>,
    remainder: RemainderPolicy,
}

impl SimulationConfigBuilder {
    /// Replaces all option parameters at once.
    #[inline]
    pub fn params(mut self, params: OptionParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.params.spot = spot;
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.params.strike = strike;
        self
    }

    /// Sets the risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.params.rate = rate;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.params.volatility = volatility;
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.params.maturity = maturity;
        self
    }

    /// Sets the requested number of paths.
    #[inline]
    pub fn path_count(mut self, path_count: usize) -> Self {
        self.path_count = Some(path_count);
        self
    }

    /// Sets the number of workers. Unset means one per logical CPU.
    #[inline]
    pub fn worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = Some(worker_count);
        self
    }

    /// Sets the base seed. Unset means a clock-based seed at run time.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the remainder policy.
    #[inline]
    pub fn remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when validation fails (see
    /// [`SimulationConfig::validate`]).
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            params: self.params,
            path_count: self.path_count.unwrap_or(DEFAULT_PATHS),
            worker_count: self.worker_count.unwrap_or_else(available_workers),
            seed: self.seed,
            remainder: self.remainder,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Number of logical CPUs, never less than one.
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}
