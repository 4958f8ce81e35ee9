//! Contract parameters for European option simulation.

use super::error::ConfigError;

/// Market and contract parameters shared read-only by every worker.
///
/// # Model
///
/// Under the risk-neutral measure the underlying follows
/// ```text
/// dS = r S dt + σ S dW
/// ```
/// and only the terminal value at `maturity` is simulated.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::OptionParams;
///
/// let params = OptionParams {
///     spot: 100.0,
///     strike: 95.0,
///     rate: 0.05,
///     volatility: 0.2,
///     maturity: 0.5,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Risk-free rate (r) - annualised, continuously compounded.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl OptionParams {
    /// Creates new option parameters.
    #[inline]
    pub fn new(spot: f64, strike: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
        }
    }

    /// Risk-neutral discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Forward value of the underlying, `S exp(rT)`.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if:
    /// - `spot`, `strike` or `maturity` is not strictly positive and finite
    /// - `volatility` is negative or not finite
    /// - `rate` is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("spot", self.spot)?;
        positive("strike", self.strike)?;
        positive("maturity", self.maturity)?;

        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("{} (must be finite and non-negative)", self.volatility),
            });
        }
        if !self.rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "rate",
                value: format!("{} (must be finite)", self.rate),
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: format!("{} (must be finite and positive)", value),
        })
    }
}

impl Default for OptionParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let p = OptionParams::default();
        assert_eq!(p, OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_discount_factor() {
        let p = OptionParams::default();
        assert_relative_eq!(p.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(p.forward() * p.discount_factor(), p.spot, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        for (name, p) in [
            ("spot", OptionParams { spot: 0.0, ..Default::default() }),
            ("strike", OptionParams { strike: -1.0, ..Default::default() }),
            ("maturity", OptionParams { maturity: 0.0, ..Default::default() }),
            ("volatility", OptionParams { volatility: -0.1, ..Default::default() }),
            ("rate", OptionParams { rate: f64::NAN, ..Default::default() }),
            ("spot", OptionParams { spot: f64::INFINITY, ..Default::default() }),
        ] {
            match p.validate() {
                Err(ConfigError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected {} rejection, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_zero_volatility_allowed() {
        let p = OptionParams {
            volatility: 0.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_negative_rate_allowed() {
        let p = OptionParams {
            rate: -0.01,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }
}
