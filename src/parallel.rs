//! Fork-join schedulers for the parallel path.
//!
//! Both schedulers partition a range and hand the two sides off to the worker pool.
//! The sides are disjoint sub-slices obtained through `split_at_mut`, so concurrent
//! tasks never alias and no locking is needed on the data.
//!
//! - [`Scheduler::Tasks`](crate::core::Scheduler::Tasks): each side becomes a task on the
//!   enclosing [`rayon::Scope`]; nothing waits until the scope itself ends.
//! - [`Scheduler::NestedJoin`](crate::core::Scheduler::NestedJoin): each split opens a
//!   two-way [`rayon::join`] and waits for both sides.

use crate::core::Counters;
use crate::partition::partition;
use crate::serial::Serial;
use log::trace;
use rayon::Scope;

/// Per-call settings shared by every task of one parallel sort.
pub(crate) struct Parallel<'a> {
    pub task_threshold: usize,
    pub depth_limit: usize,
    pub serial: Serial<'a>,
}

impl<'a> Parallel<'a> {
    fn counters(&self) -> &'a Counters {
        self.serial.counters
    }

    /// Partitions `v` and submits each side with more than one element as its own task.
    ///
    /// Returns as soon as both tasks are queued; completion is tracked by `scope`.
    pub(crate) fn spawn_tasks<'s, T, F>(
        &'s self,
        scope: &Scope<'s>,
        v: &'s mut [T],
        is_less: &'s F,
        depth: usize,
    ) where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        if depth >= self.depth_limit {
            self.serial.fallback(v, is_less, depth);
            return;
        }

        let (left_len, right_start) = partition(v, is_less);
        let (left, right) = v.split_at_mut(right_start);
        let left = &mut left[..left_len];

        if left.len() > 1 {
            self.submit(scope, left, is_less, depth + 1);
        }
        if right.len() > 1 {
            self.submit(scope, right, is_less, depth + 1);
        }
    }

    fn submit<'s, T, F>(&'s self, scope: &Scope<'s>, v: &'s mut [T], is_less: &'s F, depth: usize)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        self.counters().task_spawned();
        trace!("spawning task for {} elements at depth {}", v.len(), depth);

        scope.spawn(move |scope| {
            if v.len() - 1 < self.task_threshold {
                self.leaf(v, is_less, depth);
            } else {
                self.spawn_tasks(scope, v, is_less, depth);
            }
        });
    }

    /// Partitions `v` and sorts both sides, forking them with [`rayon::join`] when the
    /// range is above the task threshold. Returns only once `v` is fully sorted.
    pub(crate) fn join<T, F>(&self, v: &mut [T], is_less: &F, depth: usize)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        if depth >= self.depth_limit {
            self.serial.fallback(v, is_less, depth);
            return;
        }

        let fork = v.len() - 1 > self.task_threshold;
        let (left_len, right_start) = partition(v, is_less);
        let (left, right) = v.split_at_mut(right_start);
        let left = &mut left[..left_len];

        if fork {
            self.counters().task_spawned();
            self.counters().task_spawned();
            trace!(
                "forking {} and {} elements at depth {}",
                left.len(),
                right.len(),
                depth
            );
            rayon::join(
                || self.join_side(left, is_less, depth + 1),
                || self.join_side(right, is_less, depth + 1),
            );
        } else {
            self.join_side(left, is_less, depth + 1);
            self.join_side(right, is_less, depth + 1);
        }
    }

    fn join_side<T, F>(&self, v: &mut [T], is_less: &F, depth: usize)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        if v.len() < 2 {
            return;
        }
        if v.len() - 1 < self.task_threshold {
            self.leaf(v, is_less, depth);
        } else {
            self.join(v, is_less, depth);
        }
    }

    fn leaf<T, F>(&self, v: &mut [T], is_less: &F, depth: usize)
    where
        F: Fn(&T, &T) -> bool,
    {
        self.counters().serial_leaf();
        self.serial.sort(v, is_less, depth, self.depth_limit);
    }
}
