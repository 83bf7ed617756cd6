//! The two textbook sorts everybody is asked about: a (non in-place) quicksort and the bubble sort.

/// Sorts `sequence` into a new, ascending `Vec`, leaving the input untouched.\
/// The last element is the pivot; the others are split -- keeping their relative order -- into the
/// ones strictly less than the pivot and the ones greater or equal to it, producing `less + pivot + greater`
/// with each side sorted the same way.
///
/// O(n log(n)) on average, but O(n²) for already sorted inputs, in either direction, due to the
/// last-element pivot. Pending buckets live on an explicit work stack rather than on the call stack,
/// so those inputs cost time, not stack depth: each bucket is moved out of the stack when it is split.
pub fn quick_sort<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<T> {
    /// a unit of pending work -- popped in sorted order
    enum Pending<T> {
        Bucket(Vec<T>),
        Pivot(T),
    }
    let mut sorted = Vec::with_capacity(sequence.len());
    let mut pending = vec![Pending::Bucket(sequence.to_vec())];
    while let Some(work) = pending.pop() {
        let mut bucket = match work {
            Pending::Pivot(pivot) => {
                sorted.push(pivot);
                continue
            },
            Pending::Bucket(bucket) => bucket,
        };
        let Some(pivot) = bucket.pop() else {
            continue
        };
        if bucket.is_empty() {
            sorted.push(pivot);
            continue
        }
        let (less, greater_or_equal): (Vec<T>, Vec<T>) = bucket.into_iter()
            .partition(|e| e < &pivot);
        // LIFO: `less` is popped first, then the pivot, then `greater_or_equal`
        if !greater_or_equal.is_empty() {
            pending.push(Pending::Bucket(greater_or_equal));
        }
        pending.push(Pending::Pivot(pivot));
        if !less.is_empty() {
            pending.push(Pending::Bucket(less));
        }
    }
    sorted
}

/// In-place, stable, always O(n²) sort: `n-1` passes comparing & swapping adjacent pairs, each pass
/// bubbling the greatest remaining element to the end of the still unsorted prefix.
pub fn bubble_sort<T: PartialOrd>(sequence: &mut [T]) {
    let n = sequence.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if sequence[j] > sequence[j + 1] {
                sequence.swap(j, j + 1);
            }
        }
    }
}
