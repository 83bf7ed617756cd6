//! Sliding window algorithms: a contiguous `[left, right]` sub-range moving along a sequence,
//! updated incrementally instead of being recomputed on every step.

use std::{
    collections::HashSet,
    ops::{Add, Sub},
};
use crate::errors::{KataError, KataResult};

/// Returns the maximum sum over all contiguous windows of `k` elements.\
/// The first window is summed up once; after that, each slide adds the entering element
/// and subtracts the leaving one -- O(n) regardless of `k`.
///
/// Fails with [KataError::InvalidArgument] if `k` is 0 or exceeds `sequence.len()`.
///
/// Sums use `T`'s own `+` & `-`: every window sum, as well as the sum of the `k-1` elements shared
/// by consecutive windows, must fit in `T` (for primitive integers, an overflow panics on debug builds).
pub fn max_window_sum<T>(sequence: &[T], k: usize) -> KataResult<T>
                        where T: Copy + PartialOrd + Add<Output=T> + Sub<Output=T> {
    if k == 0 {
        return Err(KataError::invalid_argument("k", "the window must hold at least 1 element"));
    }
    if k > sequence.len() {
        return Err(KataError::invalid_argument("k", format!("window of {k} elements exceeds the sequence length of {}", sequence.len())));
    }

    let mut window_sum = sequence[0];
    for &e in &sequence[1..k] {
        window_sum = window_sum + e;
    }
    let mut max_sum = window_sum;

    for i in k..sequence.len() {
        window_sum = window_sum - sequence[i - k] + sequence[i];
        if window_sum > max_sum {
            max_sum = window_sum;
        }
    }
    Ok(max_sum)
}

/// Length, in characters, of the longest run of `text` in which no character repeats.\
/// The window grows to the right; whenever the entering character is already inside it,
/// the window shrinks from the left -- forgetting characters -- until the duplicate is gone.
pub fn longest_unique_substring(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut in_window = HashSet::with_capacity(chars.len());
    let mut left = 0;
    let mut max_len = 0;
    for right in 0..chars.len() {
        while in_window.contains(&chars[right]) {
            in_window.remove(&chars[left]);
            left += 1;
        }
        in_window.insert(chars[right]);
        max_len = max_len.max(right - left + 1);
    }
    max_len
}
