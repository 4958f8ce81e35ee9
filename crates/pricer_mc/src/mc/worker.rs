//! Single-worker simulation loop.
//!
//! A [`WorkerTask`] owns its stream and its accumulators for the whole run;
//! nothing is shared with other workers until the result is handed back.

use tracing::trace;

use super::params::OptionParams;
use super::payoff::TerminalPriceModel;
use crate::rng::{polar, PathRng};

/// Payoff sums produced by one worker.
///
/// Sums of squares are carried alongside the sums so the aggregator can
/// report standard errors without a second pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerResult {
    /// Index of the worker that produced this result.
    pub worker_index: usize,
    /// Number of paths simulated.
    pub path_count: usize,
    /// Σ max(S_T - K, 0).
    pub call_sum: f64,
    /// Σ max(K - S_T, 0).
    pub put_sum: f64,
    /// Σ max(S_T - K, 0)².
    pub call_sum_sq: f64,
    /// Σ max(K - S_T, 0)².
    pub put_sum_sq: f64,
}

impl WorkerResult {
    /// Creates an empty result for the given worker.
    #[inline]
    pub fn empty(worker_index: usize) -> Self {
        Self {
            worker_index,
            ..Default::default()
        }
    }

    /// Adds one path's payoffs.
    #[inline]
    pub fn record(&mut self, call: f64, put: f64) {
        self.path_count += 1;
        self.call_sum += call;
        self.put_sum += put;
        self.call_sum_sq += call * call;
        self.put_sum_sq += put * put;
    }
}

/// One worker's share of the simulation.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{OptionParams, WorkerTask};
/// use pricer_mc::rng::PathRng;
///
/// let task = WorkerTask::new(0, 1_000, OptionParams::default(), PathRng::new(42, 0));
/// let result = task.run();
///
/// assert_eq!(result.path_count, 1_000);
/// assert!(result.call_sum >= 0.0 && result.put_sum >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct WorkerTask {
    index: usize,
    path_count: usize,
    params: OptionParams,
    rng: PathRng,
}

impl WorkerTask {
    /// Creates a task that will simulate `path_count` paths.
    #[inline]
    pub fn new(index: usize, path_count: usize, params: OptionParams, rng: PathRng) -> Self {
        Self {
            index,
            path_count,
            params,
            rng,
        }
    }

    /// Worker index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of paths this task will simulate.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Runs exactly `path_count` paths and returns the accumulated sums.
    ///
    /// # Algorithm
    ///
    /// 1. Precompute the terminal price model once
    /// 2. Per path: one polar Gaussian draw → terminal price → call and put
    /// 3. Accumulate both payoffs (and their squares) locally
    pub fn run(mut self) -> WorkerResult {
        let model = TerminalPriceModel::new(&self.params);
        let mut result = WorkerResult::empty(self.index);

        for _ in 0..self.path_count {
            let z = polar::sample(&mut self.rng);
            let path = model.evaluate(z);
            result.record(path.call, path.put);
        }

        trace!(
            worker = self.index,
            seed = self.rng.seed(),
            stream = self.rng.stream(),
            paths = result.path_count,
            "worker finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_paths_is_empty() {
        let result = WorkerTask::new(5, 0, OptionParams::default(), PathRng::new(1, 5)).run();
        assert_eq!(result, WorkerResult::empty(5));
    }

    #[test]
    fn test_exact_trip_count() {
        let result = WorkerTask::new(0, 12_345, OptionParams::default(), PathRng::new(1, 0)).run();
        assert_eq!(result.path_count, 12_345);
    }

    #[test]
    fn test_sums_match_manual_loop() {
        let params = OptionParams::default();
        let result = WorkerTask::new(0, 500, params, PathRng::new(9, 2)).run();

        let mut rng = PathRng::new(9, 2);
        let model = TerminalPriceModel::new(&params);
        let (mut call, mut put) = (0.0, 0.0);
        for _ in 0..500 {
            let path = model.evaluate(polar::sample(&mut rng));
            call += path.call;
            put += path.put;
        }

        assert_eq!(result.call_sum, call);
        assert_eq!(result.put_sum, put);
    }

    #[test]
    fn test_sums_are_monotone() {
        let mut result = WorkerResult::empty(0);
        let mut last = (0.0, 0.0);
        for (c, p) in [(1.0, 0.0), (0.0, 2.5), (0.0, 0.0), (3.0, 0.0)] {
            result.record(c, p);
            assert!(result.call_sum >= last.0 && result.put_sum >= last.1);
            last = (result.call_sum, result.put_sum);
        }
        assert_eq!(result.path_count, 4);
        assert_eq!(result.call_sum_sq, 10.0);
        assert_eq!(result.put_sum_sq, 6.25);
    }

    #[test]
    fn test_deep_itm_call_never_pays_put() {
        let params = OptionParams::new(200.0, 10.0, 0.05, 0.2, 1.0);
        let result = WorkerTask::new(0, 10_000, params, PathRng::new(3, 0)).run();

        assert_eq!(result.put_sum, 0.0);
        assert!(result.call_sum > 0.0);
    }
}
