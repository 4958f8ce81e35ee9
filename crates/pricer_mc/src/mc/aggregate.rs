//! Reduction of worker results into discounted prices.

use super::params::OptionParams;
use super::worker::WorkerResult;

/// Final Monte Carlo estimate for one run.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::PricingResult;
///
/// let result = PricingResult {
///     call_price: 10.45,
///     call_std_error: 0.005,
///     ..Default::default()
/// };
///
/// assert!((result.call_confidence_95() - 0.0098).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted mean call payoff.
    pub call_price: f64,
    /// Discounted mean put payoff.
    pub put_price: f64,
    /// Standard error of the call estimate.
    pub call_std_error: f64,
    /// Standard error of the put estimate.
    pub put_std_error: f64,
    /// Discount factor `exp(-rT)` applied to both estimates.
    pub discount_factor: f64,
    /// Paths requested by the configuration.
    pub paths_requested: usize,
    /// Paths actually simulated (the divisor used for the means).
    pub paths_executed: usize,
    /// Number of workers that contributed.
    pub worker_count: usize,
    /// Base seed the worker streams were derived from.
    pub seed: u64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width of the call.
    #[inline]
    pub fn call_confidence_95(&self) -> f64 {
        1.96 * self.call_std_error
    }

    /// Returns the 95% confidence interval half-width of the put.
    #[inline]
    pub fn put_confidence_95(&self) -> f64 {
        1.96 * self.put_std_error
    }

    /// Monte Carlo estimate of `C - P`, which should be close to `S - K e^{-rT}`.
    #[inline]
    pub fn parity_spread(&self) -> f64 {
        self.call_price - self.put_price
    }
}

/// Sums of payoffs across all workers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffTotals {
    /// Total number of simulated paths.
    pub paths: usize,
    /// Σ call payoffs.
    pub call_sum: f64,
    /// Σ put payoffs.
    pub put_sum: f64,
    /// Σ call payoffs squared.
    pub call_sum_sq: f64,
    /// Σ put payoffs squared.
    pub put_sum_sq: f64,
}

impl PayoffTotals {
    /// Sums worker results in the order given.
    pub fn from_workers(results: &[WorkerResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.paths += r.path_count;
            acc.call_sum += r.call_sum;
            acc.put_sum += r.put_sum;
            acc.call_sum_sq += r.call_sum_sq;
            acc.put_sum_sq += r.put_sum_sq;
            acc
        })
    }
}

/// Mean and standard error of the mean from a sum and a sum of squares.
fn mean_and_std_error(sum: f64, sum_sq: f64, n: usize) -> (f64, f64) {
    if n == 0 {
        return (0.0, 0.0);
    }
    let n_f = n as f64;
    let mean = sum / n_f;
    if n < 2 {
        return (mean, 0.0);
    }
    // Clamp tiny negative values from cancellation when all payoffs are equal
    let variance = ((sum_sq - sum * mean) / (n_f - 1.0)).max(0.0);
    (mean, (variance / n_f).sqrt())
}

/// Joins worker results into discounted call and put prices.
///
/// ```text
/// call = (Σ call / N) × exp(-rT)
/// put  = (Σ put  / N) × exp(-rT)
/// ```
/// where `N` is the number of paths the workers actually executed.
///
/// `paths_requested` and `seed` are recorded on the result as-is.
pub fn aggregate(
    results: &[WorkerResult],
    params: &OptionParams,
    paths_requested: usize,
    seed: u64,
) -> PricingResult {
    let totals = PayoffTotals::from_workers(results);
    let df = params.discount_factor();

    let (call_mean, call_se) = mean_and_std_error(totals.call_sum, totals.call_sum_sq, totals.paths);
    let (put_mean, put_se) = mean_and_std_error(totals.put_sum, totals.put_sum_sq, totals.paths);

    PricingResult {
        call_price: call_mean * df,
        put_price: put_mean * df,
        call_std_error: call_se * df,
        put_std_error: put_se * df,
        discount_factor: df,
        paths_requested,
        paths_executed: totals.paths,
        worker_count: results.len(),
        seed,
    }
}
