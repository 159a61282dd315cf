//! Serial recursive quicksort.
//!
//! This is the baseline the parallel schedulers fall back to for small ranges. Two
//! optional behaviours hang off it:
//! - **Insertion sort** for tiny ranges ([`SmallSort::Insertion`]).
//! - **Heapsort** once recursion runs deeper than the configured limit, which bounds
//!   stack use on adversarial inputs.

use crate::core::{Counters, SmallSort};
use crate::partition::partition;
use log::warn;

/// Sorts `v` with plain serial quicksort: median-of-three Hoare partitioning, both sides
/// recursed, no small-range or depth-limit special cases.
///
/// # Examples
///
/// ```
/// use psort::serial::quicksort;
///
/// let mut v = [5, 3, 8, 1, 9, 2];
/// quicksort(&mut v, &|a: &i32, b: &i32| a < b);
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn quicksort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let (left_len, right_start) = partition(v, is_less);
    let (left, right) = v.split_at_mut(right_start);
    if left_len > 1 {
        quicksort(&mut left[..left_len], is_less);
    }
    if right.len() > 1 {
        quicksort(right, is_less);
    }
}

/// Per-call settings threaded through the serial recursion.
#[derive(Clone, Copy)]
pub(crate) struct Serial<'a> {
    pub small_sort: SmallSort,
    pub counters: &'a Counters,
}

impl Serial<'_> {
    /// Sorts `v` having already used `depth` levels of a `limit`-deep budget.
    pub(crate) fn sort<T, F>(&self, v: &mut [T], is_less: &F, depth: usize, limit: usize)
    where
        F: Fn(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return;
        }
        if let SmallSort::Insertion { max_len } = self.small_sort {
            if v.len() <= max_len {
                insertion_sort(v, is_less);
                return;
            }
        }
        if depth >= limit {
            self.fallback(v, is_less, depth);
            return;
        }

        let (left_len, right_start) = partition(v, is_less);
        let (left, right) = v.split_at_mut(right_start);
        if left_len > 1 {
            self.sort(&mut left[..left_len], is_less, depth + 1, limit);
        }
        if right.len() > 1 {
            self.sort(right, is_less, depth + 1, limit);
        }
    }

    pub(crate) fn fallback<T, F>(&self, v: &mut [T], is_less: &F, depth: usize)
    where
        F: Fn(&T, &T) -> bool,
    {
        warn!(
            "quicksort depth {} exceeded on {} elements, switching to heapsort",
            depth,
            v.len()
        );
        self.counters.heapsort_fallback();
        heapsort(v, is_less);
    }
}

/// Insertion sort; quadratic, only worth it on very short ranges.
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// In-place heapsort. O(n log n) regardless of input order.
pub fn heapsort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(v, root, len, is_less);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, is_less);
    }
}

fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !is_less(&v[root], &v[child]) {
            break;
        }
        v.swap(root, child);
        root = child;
    }
}
