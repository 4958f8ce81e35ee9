//! Black-Scholes prices for European options without dividends.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With σ√T = 0 the terminal price is deterministic and both formulas reduce
//! to discounted intrinsic value against the forward.

use super::distributions::norm_cdf;
use crate::mc::OptionParams;

/// Returns `(d₁, d₂)`, or `None` when `σ√T` is zero.
pub fn d1_d2(params: &OptionParams) -> Option<(f64, f64)> {
    let vol_sqrt_t = params.volatility * params.maturity.sqrt();
    if vol_sqrt_t <= 0.0 {
        return None;
    }
    let d1 = ((params.spot / params.strike).ln()
        + (params.rate + 0.5 * params.volatility * params.volatility) * params.maturity)
        / vol_sqrt_t;
    Some((d1, d1 - vol_sqrt_t))
}

/// Closed-form European call price.
///
/// # Examples
/// ```
/// use pricer_mc::analytical::{black_scholes_call, black_scholes_put};
/// use pricer_mc::mc::OptionParams;
///
/// let p = OptionParams::default();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = black_scholes_call(&p) - black_scholes_put(&p)
///     - (p.spot - p.strike * p.discount_factor());
/// assert!(parity.abs() < 1e-10);
/// ```
pub fn black_scholes_call(params: &OptionParams) -> f64 {
    let df = params.discount_factor();
    match d1_d2(params) {
        Some((d1, d2)) => params.spot * norm_cdf(d1) - params.strike * df * norm_cdf(d2),
        None => (params.spot - params.strike * df).max(0.0),
    }
}

/// Closed-form European put price.
pub fn black_scholes_put(params: &OptionParams) -> f64 {
    let df = params.discount_factor();
    match d1_d2(params) {
        Some((d1, d2)) => params.strike * df * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
        None => (params.strike * df - params.spot).max(0.0),
    }
}
