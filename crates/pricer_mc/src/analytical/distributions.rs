//! Standard normal distribution functions.

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
#[inline]
fn erfc_approx(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = A1 + t * (A2 + t * (A3 + t * (A4 + t * A5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½ erfc(-x / √2), accurate to about 1e-7.
///
/// # Examples
/// ```
/// use pricer_mc::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc_approx(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / √(2π)) exp(-x² / 2)
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_known_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.96), 0.024_997_895, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.1, 0.5, 1.3, 2.7, 4.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_pdf_peak() {
        assert_relative_eq!(norm_pdf(0.0), 0.398_942_280_4, epsilon = 1e-9);
        assert_relative_eq!(norm_pdf(1.0), norm_pdf(-1.0), epsilon = 1e-15);
    }
}
