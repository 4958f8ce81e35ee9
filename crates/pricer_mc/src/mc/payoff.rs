//! Terminal price simulation and European payoffs.
//!
//! Uses the exact lognormal solution of GBM at maturity:
//! ```text
//! S_adjust   = S × exp(T (r - ½σ²))
//! S_terminal = S_adjust × exp(√(σ²T) × Z)
//! ```
//! Call and put payoffs of one path are evaluated on the same terminal
//! price, so the two estimates come from a single joint simulation.

use super::params::OptionParams;

/// Loop-invariant factors of the terminal price formula.
///
/// Built once per worker; [`TerminalPriceModel::evaluate`] then costs one
/// `exp` per path.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{OptionParams, TerminalPriceModel};
///
/// let model = TerminalPriceModel::new(&OptionParams::default());
/// let path = model.evaluate(0.0);
///
/// // Z = 0 leaves only the drift adjustment
/// assert_eq!(path.terminal, model.drift_adjusted_spot());
/// assert_eq!(path.call * path.put, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalPriceModel {
    s_adjust: f64,
    vol_sqrt_t: f64,
    strike: f64,
}

impl TerminalPriceModel {
    /// Precomputes the drift-adjusted spot and the diffusion scale.
    #[inline]
    pub fn new(params: &OptionParams) -> Self {
        let v = params.volatility;
        let t = params.maturity;
        Self {
            s_adjust: params.spot * (t * (params.rate - 0.5 * v * v)).exp(),
            vol_sqrt_t: (v * v * t).sqrt(),
            strike: params.strike,
        }
    }

    /// Returns `S exp(T (r - ½σ²))`.
    #[inline]
    pub fn drift_adjusted_spot(&self) -> f64 {
        self.s_adjust
    }

    /// Returns `√(σ²T)`.
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.vol_sqrt_t
    }

    /// Terminal price for one standard normal draw.
    #[inline]
    pub fn terminal_price(&self, gaussian: f64) -> f64 {
        self.s_adjust * (self.vol_sqrt_t * gaussian).exp()
    }

    /// Terminal price and both payoffs for one standard normal draw.
    #[inline]
    pub fn evaluate(&self, gaussian: f64) -> PathPayoff {
        PathPayoff::at(self.terminal_price(gaussian), self.strike)
    }
}

/// Outcome of one simulated path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPayoff {
    /// Simulated terminal price of the underlying.
    pub terminal: f64,
    /// Call payoff `max(S_T - K, 0)`.
    pub call: f64,
    /// Put payoff `max(K - S_T, 0)`.
    pub put: f64,
}

impl PathPayoff {
    /// Evaluates both payoffs at a given terminal price.
    #[inline]
    pub fn at(terminal: f64, strike: f64) -> Self {
        Self {
            terminal,
            call: (terminal - strike).max(0.0),
            put: (strike - terminal).max(0.0),
        }
    }
}

/// Evaluates one path directly from the contract parameters.
///
/// Bit-identical to going through [`TerminalPriceModel`]; prefer the model
/// inside loops.
#[inline]
pub fn evaluate_path(params: &OptionParams, gaussian: f64) -> PathPayoff {
    TerminalPriceModel::new(params).evaluate(gaussian)
}
