//! Binary search over ascending slices.

use std::cmp::Ordering;

/// the classic "not found" marker returned by [binary_search_or_sentinel()]
pub const NOT_FOUND: isize = -1;

/// Looks for `target` in the ascending `sorted` slice, halving the `[low, high]` window on each step.\
/// Returns the index of *an* element equal to `target` -- or `None` if there is none.
/// If `sorted` is not in ascending order the result is unspecified (but the call still terminates).
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    // `high` is exclusive, so the window is empty when `low == high` -- no underflow on `mid - 1`
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal   => return Some(mid),
            Ordering::Less    => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Same as [binary_search()], but reporting absence with the [NOT_FOUND] sentinel
pub fn binary_search_or_sentinel<T: Ord>(sorted: &[T], target: &T) -> isize {
    binary_search(sorted, target)
        .map_or(NOT_FOUND, |index| index as isize)
}
