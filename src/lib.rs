//! # psort
//!
//! `psort` is an in-place parallel quicksort for mutable slices of totally ordered
//! elements. It trades the guarantees of a serial sort for throughput on large inputs
//! by spreading partitions across a fixed-size worker pool.
//!
//! ## Key Features
//!
//! - **Median-of-three Hoare partitioning**: the pivot is followed by index, so elements
//!   are only ever swapped, never cloned.
//! - **Fork-join scheduling**: each partition submits its two sides as independent tasks
//!   on a [`rayon`] scope. Sides below a task threshold are sorted serially inside their task.
//! - **Size-based dispatch**: tiny inputs are a no-op, small ones are sorted serially, and
//!   only large ones pay for a worker pool.
//! - **Swappable strategies**: a nested two-way join scheduler, an insertion-sort
//!   small-range cutoff and a heapsort depth-limit fallback sit behind [`SortConfig`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use psort::psort;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! psort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```
//!
//! ### Custom Ordering
//!
//! ```rust
//! use psort::psort_by;
//!
//! let mut data = vec![1, 4, 2, 3];
//! psort_by(&mut data, &|a: &i32, b: &i32| a > b);
//!
//! assert_eq!(data, vec![4, 3, 2, 1]);
//! ```
//!
//! ### Tuning
//!
//! ```rust
//! use psort::{Scheduler, SortConfig, SortPath, Sorter};
//!
//! let config = SortConfig::detect()
//!     .with_serial_threshold(1000)
//!     .with_scheduler(Scheduler::NestedJoin);
//! let sorter = Sorter::new(config)?;
//!
//! let mut data: Vec<u64> = (0..50_000).rev().collect();
//! let stats = sorter.sort(&mut data)?;
//!
//! assert_eq!(stats.path, SortPath::Parallel);
//! # Ok::<(), psort::SortError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N) work, spread over the pool once partitions exceed the
//!   task threshold.
//! - **Worst Case**: quadratic for plain quicksort on adversarial inputs. With the depth
//!   limit enabled (the default) deep ranges switch to heapsort, bounding both time and stack.
//! - **Memory Overhead**: none for the data; one worker pool per parallel call.
//!
//! The sort is not stable: elements equal to a pivot may land on either side of it.

pub mod algo;
pub mod core;
mod parallel;
pub mod partition;
pub mod serial;

pub use crate::algo::{Sorter, psort, psort_by, psort_by_key, psort_serial};
pub use crate::core::{
    SERIAL_THRESHOLD, Scheduler, SmallSort, SortConfig, SortError, SortPath, SortStats,
    TASK_THRESHOLD, THREAD_COUNT,
};

pub mod prelude {
    pub use crate::algo::{Sorter, psort, psort_by, psort_by_key};
    pub use crate::core::{Scheduler, SmallSort, SortConfig, SortError};
}
