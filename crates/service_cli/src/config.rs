//! Pricer configuration management
//!
//! Settings are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (`PRICER_*`, resolved by clap)
//! 3. TOML config file
//! 4. Built-in defaults (the reference run)

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use pricer_mc::mc::{OptionParams, RemainderPolicy, SimulationConfig, DEFAULT_PATHS};
use pricer_mc::ConfigError;
use serde::Deserialize;

use crate::{CliError, Result};

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Output format for pricing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three-line text report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Fully resolved pricer settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerSettings {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub path_count: usize,
    /// `None` means one worker per logical CPU
    pub worker_count: Option<usize>,
    /// `None` means a clock-based seed
    pub seed: Option<u64>,
    pub remainder: RemainderPolicy,
    pub log_level: LogLevel,
    pub format: OutputFormat,
}

impl Default for PricerSettings {
    fn default() -> Self {
        let params = OptionParams::default();
        Self {
            spot: params.spot,
            strike: params.strike,
            rate: params.rate,
            volatility: params.volatility,
            maturity: params.maturity,
            path_count: DEFAULT_PATHS,
            worker_count: None,
            seed: None,
            remainder: RemainderPolicy::default(),
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
        }
    }
}

impl PricerSettings {
    /// Load settings from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Contract parameters
    pub fn params(&self) -> OptionParams {
        OptionParams::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(spot) = cli.spot {
            self.spot = spot;
        }
        if let Some(strike) = cli.strike {
            self.strike = strike;
        }
        if let Some(rate) = cli.rate {
            self.rate = rate;
        }
        if let Some(volatility) = cli.volatility {
            self.volatility = volatility;
        }
        if let Some(maturity) = cli.maturity {
            self.maturity = maturity;
        }
        if let Some(paths) = cli.path_count {
            self.path_count = paths;
        }
        if cli.worker_count.is_some() {
            self.worker_count = cli.worker_count;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(remainder) = cli.remainder {
            self.remainder = remainder;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if cli.verbose && self.log_level == LogLevel::Warn {
            self.log_level = LogLevel::Info;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Validate and convert into the engine configuration
    pub fn to_simulation_config(&self) -> std::result::Result<SimulationConfig, ConfigError> {
        let mut builder = SimulationConfig::builder()
            .params(self.params())
            .path_count(self.path_count)
            .remainder(self.remainder);
        if let Some(workers) = self.worker_count {
            builder = builder.worker_count(workers);
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }
}

/// CLI overrides, already merged with environment variables by clap
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_file: Option<PathBuf>,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub path_count: Option<usize>,
    pub worker_count: Option<usize>,
    pub seed: Option<u64>,
    pub remainder: Option<RemainderPolicy>,
    pub log_level: Option<LogLevel>,
    pub format: Option<OutputFormat>,
    pub verbose: bool,
}

/// Build settings from all sources
pub fn build_settings(cli: &CliArgs) -> Result<PricerSettings> {
    let mut settings = match &cli.config_file {
        Some(path) => PricerSettings::from_file(path)?,
        None => PricerSettings::default(),
    };

    settings.merge_with_cli(cli);

    // Fail before any simulation work
    settings.to_simulation_config()?;
    Ok(settings)
}
