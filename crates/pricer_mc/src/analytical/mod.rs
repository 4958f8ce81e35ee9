//! Analytical (closed-form) solutions for European options.
//!
//! This module provides the Black-Scholes reference prices that the Monte
//! Carlo estimates converge to. They are used to verify the simulation and
//! are reported alongside it by the command-line service.
//!
//! # Usage
//!
//! ```rust
//! use pricer_mc::analytical::{black_scholes_call, black_scholes_put};
//! use pricer_mc::mc::OptionParams;
//!
//! let params = OptionParams::default();
//! let call = black_scholes_call(&params);
//! let put = black_scholes_put(&params);
//!
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((put - 5.5735).abs() < 1e-3);
//! ```

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{black_scholes_call, black_scholes_put, d1_d2};
pub use distributions::{norm_cdf, norm_pdf};
