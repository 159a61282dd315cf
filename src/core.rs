//! Core types and tunables for psort.
//!
//! This module defines:
//! - [`SortConfig`]: thresholds, pool size and strategy selection.
//! - [`Scheduler`] and [`SmallSort`]: the swappable strategies behind the partitioner.
//! - [`SortError`]: failures raised before any element is touched.
//! - [`SortStats`]: what a single call did.
//! - Counters: internal per-call counters shared by all tasks.

use cuneiform::cuneiform;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use thiserror::Error;

/// Inputs at or below this length skip parallel setup entirely.
pub const SERIAL_THRESHOLD: usize = 5000;

/// Sub-ranges below this size are sorted serially instead of forking further.
pub const TASK_THRESHOLD: usize = 10000;

/// Default size of the worker pool used for the parallel path.
pub const THREAD_COUNT: usize = 16;

/// How the parallel path forks work after each partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheduler {
    /// Every partition submits both sides as independent tasks to the pool and returns
    /// without waiting. Completion is detected once, at the pool scope.
    #[default]
    Tasks,
    /// Every partition forks a two-way region and waits for both sides before returning.
    ///
    /// Fan-out is fixed at two per level, so the number of live contexts doubles with
    /// depth. Kept for benchmarking against [`Scheduler::Tasks`].
    NestedJoin,
}

/// Strategy used for very small ranges inside the serial sorter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmallSort {
    /// Partition all the way down.
    #[default]
    Off,
    /// Insertion-sort ranges whose length is at most `max_len`.
    ///
    /// Measured slower than plain partitioning on the hardware this was tuned on,
    /// hence not the default.
    Insertion { max_len: usize },
}

/// Tunables for a [`Sorter`](crate::algo::Sorter).
///
/// # Examples
///
/// ```
/// use psort::{Scheduler, SortConfig};
///
/// let config = SortConfig::default()
///     .with_thread_count(4)
///     .with_scheduler(Scheduler::NestedJoin);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub serial_threshold: usize,
    pub task_threshold: usize,
    pub thread_count: usize,
    pub scheduler: Scheduler,
    pub small_sort: SmallSort,
    /// Switch to heapsort once recursion depth exceeds `2 * floor(log2(n))`.
    pub depth_limited: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            serial_threshold: SERIAL_THRESHOLD,
            task_threshold: TASK_THRESHOLD,
            thread_count: THREAD_COUNT,
            scheduler: Scheduler::Tasks,
            small_sort: SmallSort::Off,
            depth_limited: true,
        }
    }
}

impl SortConfig {
    /// Default configuration with the pool sized from the available hardware parallelism.
    ///
    /// Falls back to [`THREAD_COUNT`] when the parallelism cannot be queried.
    pub fn detect() -> Self {
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(THREAD_COUNT);
        Self::default().with_thread_count(thread_count)
    }

    pub fn with_serial_threshold(mut self, serial_threshold: usize) -> Self {
        self.serial_threshold = serial_threshold;
        self
    }

    pub fn with_task_threshold(mut self, task_threshold: usize) -> Self {
        self.task_threshold = task_threshold;
        self
    }

    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_small_sort(mut self, small_sort: SmallSort) -> Self {
        self.small_sort = small_sort;
        self
    }

    pub fn with_depth_limit(mut self, depth_limited: bool) -> Self {
        self.depth_limited = depth_limited;
        self
    }

    /// Checks the configuration for values that cannot drive a sort.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.thread_count == 0 {
            return Err(SortError::InvalidConfig("thread_count must be at least 1"));
        }
        if self.small_sort == (SmallSort::Insertion { max_len: 0 }) {
            return Err(SortError::InvalidConfig(
                "insertion small-sort max_len must be at least 1",
            ));
        }
        Ok(())
    }

    /// Recursion depth after which a range is handed to heapsort, if enabled.
    pub(crate) fn depth_limit(&self, len: usize) -> usize {
        if self.depth_limited {
            2 * floor_log2(len) + 1
        } else {
            usize::MAX
        }
    }
}

/// Errors raised before the input is touched.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid sort configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Strategy the dispatcher picked for a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortPath {
    /// Fewer than two elements.
    Noop,
    /// Serial recursive quicksort on the calling thread.
    Serial,
    /// Fork-join over a worker pool.
    Parallel,
}

/// Summary of a single sort call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortStats {
    pub path: SortPath,
    /// Tasks submitted to the pool, excluding the root.
    pub tasks_spawned: usize,
    /// Ranges handed to the serial sorter from the parallel path.
    pub serial_leaves: usize,
    /// Ranges that hit the depth limit and were heapsorted.
    pub heapsort_fallbacks: usize,
}

impl SortStats {
    pub(crate) fn empty(path: SortPath) -> Self {
        Self {
            path,
            tasks_spawned: 0,
            serial_leaves: 0,
            heapsort_fallbacks: 0,
        }
    }
}

// Bumped concurrently by every worker; keep it on its own cache line.
#[cuneiform]
#[derive(Debug, Default)]
pub(crate) struct Counters {
    tasks_spawned: AtomicUsize,
    serial_leaves: AtomicUsize,
    heapsort_fallbacks: AtomicUsize,
}

impl Counters {
    #[inline]
    pub(crate) fn task_spawned(&self) {
        self.tasks_spawned.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn serial_leaf(&self) {
        self.serial_leaves.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn heapsort_fallback(&self) {
        self.heapsort_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, path: SortPath) -> SortStats {
        SortStats {
            path,
            tasks_spawned: self.tasks_spawned.load(Ordering::Relaxed),
            serial_leaves: self.serial_leaves.load(Ordering::Relaxed),
            heapsort_fallbacks: self.heapsort_fallbacks.load(Ordering::Relaxed),
        }
    }
}

#[inline]
pub(crate) fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}
