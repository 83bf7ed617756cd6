//! Two pointers converging from both ends of a sequence.

use std::ops::Add;

/// Finds a pair of indices `(left, right)` in the ascending `sorted` slice whose elements add up to `target`.\
/// Only the first pair met by the converging pointers is returned: if the sum is short the left pointer
/// advances, if it overshoots the right one retreats -- `None` once they meet.
///
/// Elements are added with `T`'s own `+`: the sums of the two smallest and of the two greatest elements
/// must fit in `T`, bounding every other pair (for primitive integers, an overflow panics on debug builds
/// and wraps on release ones).
pub fn pair_sum<T>(sorted: &[T], target: T) -> Option<(usize, usize)>
                  where T: Copy + Ord + Add<Output=T> {
    if sorted.len() < 2 {
        return None;
    }
    let mut left = 0;
    let mut right = sorted.len() - 1;
    while left < right {
        let sum = sorted[left] + sorted[right];
        if sum == target {
            return Some((left, right));
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}

/// Exact, character-wise palindrome check: pointers at both ends walk towards the middle
/// and any mismatch ends the comparison.
/// See [crate::catalogue::strings::is_palindrome()] for the forgiving, "human" version.
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return true;
    }
    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}
