//! # Pricer MC (Layer 3: Simulation Kernel)
//!
//! ## Role
//!
//! pricer_mc prices European calls and puts by Monte Carlo simulation of
//! geometric Brownian motion terminal prices, fanning the path budget out
//! across parallel workers and reducing their payoff sums once all of them
//! have finished.
//!
//! ## Pipeline
//!
//! ```text
//! SimulationConfig ──► PathPartition ──► WorkerTask × N ──► aggregate() ──► PricingResult
//!                          │                  │
//!                          │                  ├── PathRng (PCG32, one stream per worker)
//!                          │                  ├── polar::sample (Marsaglia polar method)
//!                          │                  └── TerminalPriceModel (call + put payoff)
//!                          └── RemainderPolicy (truncate / distribute)
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_mc::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .path_count(20_000)
//!     .worker_count(2)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloPricer::new(config).unwrap().run().unwrap();
//! assert!(result.call_price > 0.0);
//! assert!(result.put_price > 0.0);
//! ```
//!
//! ## Reproducibility
//!
//! Given an injected seed and a fixed worker count, every run is
//! bit-identical: each worker owns its own PCG stream and the reduction is
//! performed in worker order after the join.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![allow(unknown_lints)]

// Random number generation: PCG streams, seed schedule, polar sampler
pub mod rng;

// Monte Carlo kernel: payoff evaluation, workers, partitioning, aggregation
pub mod mc;

// Closed-form Black-Scholes reference prices
pub mod analytical;

// Re-export commonly used items for convenience
pub use analytical::{black_scholes_call, black_scholes_put};
pub use mc::{
    ConfigError, MonteCarloPricer, OptionParams, PricingError, PricingResult, RemainderPolicy,
    SimulationConfig,
};
pub use rng::{PathRng, SeedSchedule};
