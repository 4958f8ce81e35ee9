//! # Random Number Generation Infrastructure
//!
//! This module provides the random number facilities used by the Monte Carlo
//! workers: a seeded PCG32 stream per worker, the schedule that derives each
//! worker's `(seed, stream)` pair, and the polar Gaussian transform.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is built from an explicit seed and
//!   stream id, so injecting a base seed makes a run bit-reproducible
//! - **Independence**: workers of the same run never share a stream id, so
//!   their sequences are unrelated even though the seeds are adjacent
//! - **Static dispatch**: the sampler is generic over [`rand::RngCore`]; no
//!   trait objects in the hot loop
//!
//! ## Module Structure
//!
//! - [`PathRng`]: PCG32 wrapper owned by a single worker
//! - [`SeedSchedule`]: base seed plus per-worker derivation
//! - [`polar`]: Marsaglia polar standard normal sampler
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_mc::rng::{polar, SeedSchedule};
//!
//! let schedule = SeedSchedule::new(12345);
//! let mut rng = schedule.stream_for(0);
//!
//! let raw: u32 = rng.next_u32();
//! let z: f64 = polar::sample(&mut rng);
//! assert!(z.is_finite());
//! # let _ = raw;
//! ```

pub mod polar;
mod prng;
mod seed;

// Public re-exports
pub use prng::PathRng;
pub use seed::SeedSchedule;

#[cfg(test)]
mod tests;
