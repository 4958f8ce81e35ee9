//! Splitting a path budget across workers.

use super::config::RemainderPolicy;

/// Per-worker path counts for one run.
///
/// The executed total is always the sum of the per-worker counts; it may be
/// below the requested count under [`RemainderPolicy::Truncate`].
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{PathPartition, RemainderPolicy};
///
/// let plan = PathPartition::new(10, 4, RemainderPolicy::Truncate);
/// assert_eq!(plan.counts(), &[2, 2, 2, 2]);
/// assert_eq!(plan.executed(), 8);
/// assert_eq!(plan.discarded(), 2);
///
/// let plan = PathPartition::new(10, 4, RemainderPolicy::Distribute);
/// assert_eq!(plan.counts(), &[3, 3, 2, 2]);
/// assert_eq!(plan.executed(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPartition {
    requested: usize,
    counts: Vec<usize>,
}

impl PathPartition {
    /// Partitions `requested` paths over `workers` workers.
    ///
    /// `workers` of zero yields an empty plan.
    pub fn new(requested: usize, workers: usize, policy: RemainderPolicy) -> Self {
        if workers == 0 {
            return Self {
                requested,
                counts: Vec::new(),
            };
        }

        let base = requested / workers;
        let remainder = requested % workers;
        let counts = (0..workers)
            .map(|i| match policy {
                RemainderPolicy::Distribute if i < remainder => base + 1,
                _ => base,
            })
            .collect();

        Self { requested, counts }
    }

    /// Requested number of paths.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of paths that will actually run.
    #[inline]
    pub fn executed(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of requested paths that will not run.
    #[inline]
    pub fn discarded(&self) -> usize {
        self.requested - self.executed()
    }

    /// Number of workers in the plan.
    #[inline]
    pub fn workers(&self) -> usize {
        self.counts.len()
    }

    /// Per-worker path counts, indexed by worker.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}
