//! Option Pricer CLI - Parallel Monte Carlo for European Options
//!
//! This is the operational entry point for the pricer_mc engine.
//!
//! # Commands
//!
//! - `option_pricer` / `option_pricer price` - Run the simulation and print prices
//! - `option_pricer check` - Show the resolved configuration and closed-form prices
//!
//! # Output
//!
//! ```text
//! Elapsed time: 0.412345 seconds
//! Call Price:      10.451234
//! Put Price:       5.573456
//! ```
//!
//! Logs are written to stderr so stdout keeps the three-line contract.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_mc::RemainderPolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use config::{build_settings, CliArgs, LogLevel, OutputFormat};
pub use error::{CliError, Result};

/// Parallel Monte Carlo pricer for European calls and puts
#[derive(Parser, Debug)]
#[command(name = "option_pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "PRICER_CONFIG")]
    config: Option<PathBuf>,

    /// Spot price of the underlying
    #[arg(long, global = true, env = "PRICER_SPOT")]
    spot: Option<f64>,

    /// Strike price
    #[arg(long, global = true, env = "PRICER_STRIKE")]
    strike: Option<f64>,

    /// Risk-free rate (continuously compounded)
    #[arg(long, global = true, env = "PRICER_RATE", allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility of the underlying
    #[arg(long, global = true, env = "PRICER_VOLATILITY")]
    volatility: Option<f64>,

    /// Time to maturity in years
    #[arg(long, global = true, env = "PRICER_MATURITY")]
    maturity: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long = "paths", global = true, env = "PRICER_PATHS")]
    paths: Option<usize>,

    /// Number of parallel workers (default: logical CPUs)
    #[arg(short, long, global = true, env = "PRICER_WORKERS")]
    workers: Option<usize>,

    /// Base seed (default: wall clock)
    #[arg(short, long, global = true, env = "PRICER_SEED")]
    seed: Option<u64>,

    /// What to do with paths that do not divide evenly (truncate, distribute)
    #[arg(long, global = true, env = "PRICER_REMAINDER")]
    remainder: Option<RemainderPolicy>,

    /// Log level
    #[arg(long, global = true, value_enum, env = "PRICER_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Output format
    #[arg(short, long, global = true, value_enum, env = "PRICER_FORMAT")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Run the simulation and print call and put prices (default)
    Price,

    /// Check the resolved configuration without simulating
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            spot: cli.spot,
            strike: cli.strike,
            rate: cli.rate,
            volatility: cli.volatility,
            maturity: cli.maturity,
            path_count: cli.paths,
            worker_count: cli.workers,
            seed: cli.seed,
            remainder: cli.remainder,
            log_level: cli.log_level,
            format: cli.format,
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = build_settings(&CliArgs::from(&cli))?;

    init_tracing(settings.log_level);

    match cli.command.unwrap_or(Commands::Price) {
        Commands::Price => commands::price::run(&settings),
        Commands::Check => commands::check::run(&settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_price() {
        let cli = Cli::try_parse_from(["option_pricer"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::try_parse_from([
            "option_pricer",
            "--spot",
            "95",
            "--rate",
            "-0.01",
            "-n",
            "1000",
            "-w",
            "4",
            "--seed",
            "42",
            "--remainder",
            "distribute",
            "--format",
            "json",
            "check",
        ])
        .unwrap();
        let args = CliArgs::from(&cli);

        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(args.spot, Some(95.0));
        assert_eq!(args.rate, Some(-0.01));
        assert_eq!(args.path_count, Some(1_000));
        assert_eq!(args.worker_count, Some(4));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.remainder, Some(RemainderPolicy::Distribute));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_env_below_flag() {
        // Only this test reads PRICER_STRIKE
        std::env::set_var("PRICER_STRIKE", "105");
        let from_env = Cli::try_parse_from(["option_pricer"]).unwrap();
        let from_flag = Cli::try_parse_from(["option_pricer", "--strike", "110"]).unwrap();
        std::env::remove_var("PRICER_STRIKE");

        assert_eq!(from_env.strike, Some(105.0));
        assert_eq!(from_flag.strike, Some(110.0));
    }

    #[test]
    fn test_bad_remainder_rejected() {
        assert!(Cli::try_parse_from(["option_pricer", "--remainder", "round"]).is_err());
    }
}
