//! Median-of-three pivot selection and Hoare partitioning.
//!
//! Both operate on a whole slice; callers pass the sub-slice for the range they own.

/// Orders `v[0]`, `v[len / 2]` and `v[len - 1]` so that
/// `v[0] <= v[mid] <= v[len - 1]` and returns `mid`, the pivot position.
///
/// `v` must hold at least two elements.
#[inline]
pub fn median_of_three<T, F>(v: &mut [T], is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);
    let end = v.len() - 1;
    let mid = end / 2;

    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if is_less(&v[end], &v[0]) {
        v.swap(0, end);
    }
    if is_less(&v[end], &v[mid]) {
        v.swap(mid, end);
    }
    mid
}

/// Partitions `v` around its median-of-three pivot.
///
/// Returns the crossover `(left_len, right_start)` with `left_len <= right_start`:
/// every element of `v[..left_len]` is `<=` the pivot and every element of
/// `v[right_start..]` is `>=` it. Anything in between equals the pivot and is already
/// in its final place.
///
/// The pivot is never copied out. Its position is followed as swaps move it, so `T`
/// needs no `Clone`.
///
/// # Examples
///
/// ```
/// use psort::partition::partition;
///
/// let mut v = [5, 3, 8, 1, 9, 2];
/// let (left_len, right_start) = partition(&mut v, &|a: &i32, b: &i32| a < b);
///
/// let pivot = 5;
/// assert!(v[..left_len].iter().all(|&x| x <= pivot));
/// assert!(v[right_start..].iter().all(|&x| x >= pivot));
/// ```
pub fn partition<T, F>(v: &mut [T], is_less: &F) -> (usize, usize)
where
    F: Fn(&T, &T) -> bool,
{
    let mut pivot = median_of_three(v, is_less);

    // `hi` is one past the right cursor so an empty left side never underflows.
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        while is_less(&v[lo], &v[pivot]) {
            lo += 1;
        }
        while is_less(&v[pivot], &v[hi - 1]) {
            hi -= 1;
        }

        if lo < hi {
            let j = hi - 1;
            v.swap(lo, j);
            if pivot == lo {
                pivot = j;
            } else if pivot == j {
                pivot = lo;
            }
            lo += 1;
            hi -= 1;
        }
    }

    (hi, lo)
}
