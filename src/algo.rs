//! Top-level dispatcher.
//!
//! Picks one of three strategies from the input length:
//! - **No-op** for fewer than two elements.
//! - **Serial quicksort** up to the serial threshold, avoiding pool setup on small inputs.
//! - **Parallel quicksort** above it, over a worker pool built for the call and joined
//!   before returning.
//!
//! The main entry points are [`psort`], [`psort_by`] and [`Sorter`].

use crate::core::{Counters, Scheduler, SortConfig, SortError, SortPath, SortStats};
use crate::parallel::Parallel;
use crate::serial::{self, Serial};
use log::{debug, warn};
use rayon::ThreadPoolBuilder;

/// Sorts a mutable slice in place, ascending.
///
/// Uses the default [`SortConfig`]. The sort is not stable.
///
/// # Examples
///
/// ```
/// use psort::psort;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// psort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
/// ```
pub fn psort<T: Ord + Send>(v: &mut [T]) {
    psort_by(v, &|a: &T, b: &T| a.lt(b));
}

/// Sorts a mutable slice in place using `is_less` as the strict ordering.
///
/// `is_less(a, b)` must return `true` exactly when `a` orders before `b`. A predicate that
/// is not a strict weak order leaves the slice in an unspecified permutation of its input.
///
/// # Panics
///
/// If `is_less` panics, the panic is re-raised here once running tasks have stopped. The
/// slice is left as some permutation of its input.
///
/// # Examples
///
/// ```
/// use psort::psort_by;
///
/// let mut data = vec!["bb", "a", "ccc"];
/// psort_by(&mut data, &|a: &&str, b: &&str| a.len() > b.len());
///
/// assert_eq!(data, vec!["ccc", "bb", "a"]);
/// ```
pub fn psort_by<T, F>(v: &mut [T], is_less: &F)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    let sorter = Sorter::default();
    if let Err(err) = sorter.sort_by(v, is_less) {
        warn!("{}; sorting {} elements serially", err, v.len());
        sorter.sort_serial(v, is_less, &Counters::default());
    }
}

/// Sorts a mutable slice in place by the key `f` extracts from each element.
///
/// The key is recomputed on every comparison.
pub fn psort_by_key<T, K, F>(v: &mut [T], f: F)
where
    T: Send,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    psort_by(v, &|a: &T, b: &T| f(a).lt(&f(b)));
}

/// A parallel quicksort with explicit tunables.
///
/// # Examples
///
/// ```
/// use psort::{SortConfig, SortPath, Sorter};
///
/// let sorter = Sorter::new(SortConfig::default().with_thread_count(4))?;
///
/// let mut data: Vec<u32> = (0..20_000).rev().collect();
/// let stats = sorter.sort(&mut data)?;
///
/// assert_eq!(stats.path, SortPath::Parallel);
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// # Ok::<(), psort::SortError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Creates a sorter, rejecting configurations that cannot drive a sort.
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `v` ascending by `Ord`.
    pub fn sort<T: Ord + Send>(&self, v: &mut [T]) -> Result<SortStats, SortError> {
        self.sort_by(v, &|a: &T, b: &T| a.lt(b))
    }

    /// Sorts `v` with `is_less` as the strict ordering and reports which path ran.
    ///
    /// Fails only if the worker pool cannot be built, in which case `v` is untouched.
    pub fn sort_by<T, F>(&self, v: &mut [T], is_less: &F) -> Result<SortStats, SortError>
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        let len = v.len();
        if len < 2 {
            return Ok(SortStats::empty(SortPath::Noop));
        }

        let counters = Counters::default();
        if len <= self.config.serial_threshold {
            debug!("sorting {} elements serially", len);
            self.sort_serial(v, is_less, &counters);
            return Ok(counters.snapshot(SortPath::Serial));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.thread_count)
            .thread_name(|i| format!("psort-worker-{i}"))
            .build()?;
        debug!(
            "sorting {} elements on {} workers with {:?} scheduler",
            len, self.config.thread_count, self.config.scheduler
        );

        let parallel = Parallel {
            task_threshold: self.config.task_threshold,
            depth_limit: self.config.depth_limit(len),
            serial: Serial {
                small_sort: self.config.small_sort,
                counters: &counters,
            },
        };
        match self.config.scheduler {
            Scheduler::Tasks => pool.scope(|scope| parallel.spawn_tasks(scope, v, is_less, 0)),
            Scheduler::NestedJoin => pool.install(|| parallel.join(v, is_less, 0)),
        }

        let stats = counters.snapshot(SortPath::Parallel);
        debug!(
            "parallel sort done: {} tasks, {} serial leaves, {} heapsort fallbacks",
            stats.tasks_spawned, stats.serial_leaves, stats.heapsort_fallbacks
        );
        Ok(stats)
    }

    fn sort_serial<T, F>(&self, v: &mut [T], is_less: &F, counters: &Counters)
    where
        F: Fn(&T, &T) -> bool,
    {
        let serial = Serial {
            small_sort: self.config.small_sort,
            counters,
        };
        serial.sort(v, is_less, 0, self.config.depth_limit(v.len()));
    }
}

/// Sorts `v` with the plain serial quicksort, bypassing the dispatcher.
///
/// Equivalent to [`serial::quicksort`] with `Ord` as the ordering.
pub fn psort_serial<T: Ord>(v: &mut [T]) {
    serial::quicksort(v, &|a: &T, b: &T| a.lt(b));
}
