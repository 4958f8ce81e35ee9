//! Marsaglia polar method for standard normal variates.
//!
//! Pairs of uniform `u32` draws are mapped onto the square `[-1, 1]²` and
//! rejected until they fall strictly inside the punctured unit disk. The
//! accepted pair yields one N(0, 1) draw; the second variate of the pair is
//! discarded so that every call consumes an independent set of uniforms.
//!
//! # Algorithm Reference
//!
//! - Marsaglia, G. & Bray, T. A. (1964). "A Convenient Method for Generating
//!   Normal Variables". SIAM Review 6(3).

use rand::RngCore;

/// Maps a raw `u32` onto `[-1, 1]` as `2u / u32::MAX - 1`.
#[inline]
pub fn to_signed_unit(u: u32) -> f64 {
    2.0 * f64::from(u) / f64::from(u32::MAX) - 1.0
}

/// Acceptance test for the squared radius `s = x² + y²`.
///
/// Only `0 < s < 1` is accepted. `s = 0` would make `ln(s) / s` undefined,
/// so it is excluded here rather than handled after the fact.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::rng::polar::accepts;
///
/// assert!(accepts(0.5));
/// assert!(!accepts(0.0));
/// assert!(!accepts(1.0));
/// ```
#[inline]
pub fn accepts(s: f64) -> bool {
    s > 0.0 && s < 1.0
}

/// Draws one standard normal variate from `rng`.
///
/// The rejection loop has no iteration bound; the expected number of trials
/// is `4 / π`.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::rng::{polar, PathRng};
///
/// let mut rng = PathRng::new(42, 0);
/// let z = polar::sample(&mut rng);
/// assert!(z.is_finite());
/// ```
#[inline]
pub fn sample<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let x = to_signed_unit(rng.next_u32());
        let y = to_signed_unit(rng.next_u32());
        let s = x * x + y * y;
        if accepts(s) {
            return x * (-2.0 * s.ln() / s).sqrt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Replays a fixed list of `u32` values, cycling when exhausted.
    struct Scripted {
        values: Vec<u32>,
        pos: usize,
        draws: usize,
    }

    impl Scripted {
        fn new(values: Vec<u32>) -> Self {
            Self {
                values,
                pos: 0,
                draws: 0,
            }
        }
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            self.draws += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                *b = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_to_signed_unit_endpoints() {
        assert_eq!(to_signed_unit(0), -1.0);
        assert_eq!(to_signed_unit(u32::MAX), 1.0);
        assert!(to_signed_unit(u32::MAX / 2).abs() < 1e-9);
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(!accepts(0.0));
        assert!(!accepts(-0.0));
        assert!(!accepts(1.0));
        assert!(!accepts(1.5));
        assert!(!accepts(f64::NAN));
        assert!(accepts(f64::MIN_POSITIVE));
        assert!(accepts(0.999_999));
    }

    #[test]
    fn test_rejects_corners_until_inside() {
        // (0, 0) maps to (-1, -1): s = 2, rejected.
        // (MAX, MAX) maps to (1, 1): rejected again.
        // Third pair lands at x = 0.5, y = 0 approximately.
        let half_up = (0.75 * f64::from(u32::MAX)) as u32;
        let mid = u32::MAX / 2;
        let mut rng = Scripted::new(vec![0, 0, u32::MAX, u32::MAX, half_up, mid]);

        let z = sample(&mut rng);

        assert_eq!(rng.draws, 6);
        let x = to_signed_unit(half_up);
        let y = to_signed_unit(mid);
        let s = x * x + y * y;
        assert_relative_eq!(z, x * (-2.0 * s.ln() / s).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_many_rejections_still_terminate() {
        let mut values = vec![0u32; 2_000];
        values.push((0.6 * f64::from(u32::MAX)) as u32);
        values.push((0.6 * f64::from(u32::MAX)) as u32);
        let mut rng = Scripted::new(values);

        let z = sample(&mut rng);

        assert!(z.is_finite());
        assert_eq!(rng.draws, 2_002);
    }

    #[test]
    fn test_sign_follows_x() {
        let low = (0.3 * f64::from(u32::MAX)) as u32;
        let high = (0.7 * f64::from(u32::MAX)) as u32;

        let mut neg = Scripted::new(vec![low, low]);
        let mut pos = Scripted::new(vec![high, high]);

        assert!(sample(&mut neg) < 0.0);
        assert!(sample(&mut pos) > 0.0);
    }
}
