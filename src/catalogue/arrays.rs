//! Sequence katas: transformations, deduplication, rotations and a few "implement it yourself" classics.\
//! Unless told otherwise, functions here borrow their input and return a new `Vec`.

use std::{
    collections::{BTreeMap, HashSet},
    hash::Hash,
    ops::{Add, Rem},
};
use crate::errors::{KataError, KataResult};


/// An arbitrarily nested sequence -- `[1, [2, [3, 4]], 5]`
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

/// the elements in reverse order, built by walking the input from its end
pub fn reverse<T: Clone>(sequence: &[T]) -> Vec<T> {
    let mut reversed = Vec::with_capacity(sequence.len());
    for i in (0..sequence.len()).rev() {
        reversed.push(sequence[i].clone());
    }
    reversed
}

/// Depth-first flattening of `nested`, keeping the left-to-right order of the leaves
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fn walk<T: Clone>(nested: &[Nested<T>], flattened: &mut Vec<T>) {
        for element in nested {
            match element {
                Nested::Item(item) => flattened.push(item.clone()),
                Nested::List(list) => walk(list, flattened),
            }
        }
    }
    let mut flattened = Vec::new();
    walk(nested, &mut flattened);
    flattened
}

/// row by row concatenation of a matrix -- rows may have different lengths
pub fn flatten_2d<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    matrix.iter()
        .flat_map(|row| row.iter().cloned())
        .collect()
}

/// Splits `sequence` into consecutive pieces of `size` elements -- the last one may be shorter.\
/// A `size` of 0 is refused with [KataError::InvalidArgument].
pub fn chunk<T: Clone>(sequence: &[T], size: usize) -> KataResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(KataError::invalid_argument("size", "chunks must have at least 1 element"));
    }
    Ok(sequence.chunks(size)
        .map(<[T]>::to_vec)
        .collect())
}

/// how many times each distinct element appears
pub fn count_frequencies<T: Ord + Clone>(sequence: &[T]) -> BTreeMap<T, usize> {
    sequence.iter()
        .fold(BTreeMap::new(), |mut frequencies, element| {
            *frequencies.entry(element.clone()).or_insert(0) += 1;
            frequencies
        })
}

/// distinct elements, in the order of their first occurrence
pub fn remove_duplicates<T: Eq + Hash + Clone>(sequence: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(sequence.len());
    sequence.iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// distinct elements of `a` that are also in `b`, in `a`'s order
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let in_b: HashSet<&T> = b.iter().collect();
    let common: Vec<T> = a.iter()
        .filter(|element| in_b.contains(element))
        .cloned()
        .collect();
    remove_duplicates(&common)
}

/// distinct elements of `a` followed by the distinct elements of `b` not in `a`
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let both: Vec<T> = a.iter().chain(b).cloned().collect();
    remove_duplicates(&both)
}

/// `sequence` rotated `k` positions to the left -- `k` is taken modulo the length, so any `k` is accepted
pub fn rotate_left<T: Clone>(sequence: &[T], k: usize) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let k = k % sequence.len();
    sequence[k..].iter()
        .chain(&sequence[..k])
        .cloned()
        .collect()
}

/// `sequence` rotated `k` positions to the right. See [rotate_left()]
pub fn rotate_right<T: Clone>(sequence: &[T], k: usize) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let len = sequence.len();
    rotate_left(sequence, len - k % len)
}

/// The second greatest **distinct** value -- `None` if there are less than 2 distinct values
pub fn second_largest<T: Ord + Copy>(sequence: &[T]) -> Option<T> {
    let mut largest: Option<T> = None;
    let mut second:  Option<T> = None;
    for &element in sequence {
        match largest {
            None => largest = Some(element),
            Some(max) if element > max => {
                second = largest;
                largest = Some(element);
            },
            Some(max) if element < max && second.map_or(true, |second| element > second) => second = Some(element),
            _ => (),
        }
    }
    second
}

/// Length of the longest strictly increasing (not necessarily contiguous) subsequence.\
/// Classic O(n²) dynamic programming: `lengths[i]` is the longest run ending at `i`.
pub fn longest_increasing_subsequence<T: PartialOrd>(sequence: &[T]) -> usize {
    let mut lengths = vec![1_usize; sequence.len()];
    for i in 1..sequence.len() {
        for j in 0..i {
            if sequence[i] > sequence[j] {
                lengths[i] = lengths[i].max(lengths[j] + 1);
            }
        }
    }
    lengths.into_iter().max().unwrap_or(0)
}

/// The result of [partition_even_odd()]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvenOdd<T> {
    pub even: Vec<T>,
    pub odd:  Vec<T>,
}

/// splits the numbers into evens & odds, each keeping the input order
pub fn partition_even_odd<T>(numbers: &[T]) -> EvenOdd<T>
                             where T: Copy + Rem<Output=T> + PartialEq + From<u8> {
    let (even, odd) = numbers.iter()
        .copied()
        .partition(|&n| n % T::from(2) == T::from(0));
    EvenOdd { even, odd }
}

/// a copy of `sequence` without any element equal to `value`
pub fn remove_occurrences<T: PartialEq + Clone>(sequence: &[T], value: &T) -> Vec<T> {
    sequence.iter()
        .filter(|&element| element != value)
        .cloned()
        .collect()
}

/// the in-place version of [remove_occurrences()], returning how many elements were removed
pub fn remove_occurrences_in_place<T: PartialEq>(sequence: &mut Vec<T>, value: &T) -> usize {
    let len_before = sequence.len();
    sequence.retain(|element| element != value);
    len_before - sequence.len()
}

/// Moves, in place, every zero to the end, keeping the relative order of the other elements.\
/// A single pass swapping each non-zero element into the next "write" position.
pub fn move_zeros_to_end<T: PartialEq + Default>(sequence: &mut [T]) {
    let zero = T::default();
    let mut non_zero_index = 0;
    for i in 0..sequence.len() {
        if sequence[i] != zero {
            sequence.swap(non_zero_index, i);
            non_zero_index += 1;
        }
    }
}

/// In an ascending run of numbers, the first one missing -- `[1, 2, 4, 5]` gives `3`.\
/// `None` when there are no gaps.
pub fn find_missing<T>(ascending: &[T]) -> Option<T>
                       where T: Copy + PartialOrd + Add<Output=T> + From<u8> {
    let one = T::from(1);
    ascending.windows(2)
        .find(|pair| pair[1] > pair[0] + one)
        .map(|pair| pair[0] + one)
}

/// Element-wise equality: same length and equal elements at every position.\
/// Equivalent to `a == b` on slices, spelled out.
pub fn are_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// `map()`, the interview way: `callback` receives each element and its index
pub fn custom_map<T, U>(sequence: &[T], mut callback: impl FnMut(&T, usize) -> U) -> Vec<U> {
    let mut mapped = Vec::with_capacity(sequence.len());
    for (i, element) in sequence.iter().enumerate() {
        mapped.push(callback(element, i));
    }
    mapped
}

/// `filter()`, the interview way: `predicate` receives each element and its index
pub fn custom_filter<T: Clone>(sequence: &[T], mut predicate: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    let mut filtered = Vec::new();
    for (i, element) in sequence.iter().enumerate() {
        if predicate(element, i) {
            filtered.push(element.clone());
        }
    }
    filtered
}
