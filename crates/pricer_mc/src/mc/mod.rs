//! Monte Carlo pricing kernel for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── SimulationConfig   (validated, immutable)
//! │   └── OptionParams   (S, K, r, σ, T)
//! ├── PathPartition      (per-worker path counts)
//! ├── WorkerTask × N     (private PathRng + local sums)
//! │   └── TerminalPriceModel → PathPayoff
//! └── aggregate()        (ordered reduce + discount)
//! ```
//!
//! # Examples
//!
//! ## Reference Run
//!
//! ```rust
//! use pricer_mc::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .path_count(100_000)
//!     .worker_count(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloPricer::new(config).unwrap().run().unwrap();
//! println!(
//!     "Call: {:.4} +/- {:.4}, Put: {:.4} +/- {:.4}",
//!     result.call_price,
//!     result.call_confidence_95(),
//!     result.put_price,
//!     result.put_confidence_95(),
//! );
//! ```
//!
//! ## Single Path
//!
//! ```rust
//! use pricer_mc::mc::{evaluate_path, OptionParams};
//!
//! let path = evaluate_path(&OptionParams::default(), 1.0);
//! assert!(path.call > 0.0);
//! assert_eq!(path.put, 0.0);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod params;
pub mod partition;
pub mod payoff;
pub mod pricer;
pub mod worker;

// Re-exports for convenient access
pub use aggregate::{aggregate, PayoffTotals, PricingResult};
pub use config::{
    available_workers, RemainderPolicy, SimulationConfig, SimulationConfigBuilder, DEFAULT_PATHS,
};
pub use error::{ConfigError, PricingError};
pub use params::OptionParams;
pub use partition::PathPartition;
pub use payoff::{evaluate_path, PathPayoff, TerminalPriceModel};
pub use pricer::MonteCarloPricer;
pub use worker::{WorkerResult, WorkerTask};
