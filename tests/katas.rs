//! Checks the katas' properties on random inputs, through the crate's public API only

use interview_katas::*;
use rand::{Rng, seq::SliceRandom};


const ROUNDS: usize = 200;

/// sorted, distinct random numbers
fn random_sorted_distinct(rng: &mut impl Rng, max_len: usize) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    let mut numbers: Vec<i64> = (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

#[test]
fn binary_search_finds_every_present_element_and_nothing_else() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let sorted = random_sorted_distinct(&mut rng, 64);
        for (i, element) in sorted.iter().enumerate() {
            assert_eq!(binary_search(&sorted, element), Some(i));
            assert_eq!(binary_search_or_sentinel(&sorted, element), i as isize);
        }
        let absent = 1_000_000;
        assert_eq!(binary_search(&sorted, &absent), None);
        assert_eq!(binary_search_or_sentinel(&sorted, &absent), NOT_FOUND);
    }
}

#[test]
fn pair_sum_results_always_add_up() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let sorted = random_sorted_distinct(&mut rng, 32);
        let target = rng.gen_range(-2_000..2_000);
        let brute_force_has_pair = (0..sorted.len())
            .any(|i| (i + 1..sorted.len()).any(|j| sorted[i] + sorted[j] == target));
        match pair_sum(&sorted, target) {
            Some((left, right)) => {
                assert!(left < right);
                assert_eq!(sorted[left] + sorted[right], target);
            },
            None => assert!(!brute_force_has_pair, "a pair adding up to {target} was missed in {sorted:?}"),
        }
    }
}

#[test]
fn max_window_sum_matches_the_brute_force() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..50);
        let sequence: Vec<i32> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
        let k = rng.gen_range(1..=len);
        let brute_force = sequence.windows(k)
            .map(|window| window.iter().sum::<i32>())
            .max();
        assert_eq!(max_window_sum(&sequence, k).ok(), brute_force, "k={k}, sequence={sequence:?}");
    }
    assert!(matches!(max_window_sum(&[1, 2], 3), Err(KataError::InvalidArgument { .. })));
}

#[test]
fn longest_unique_substring_matches_the_brute_force() {
    let mut rng = rand::thread_rng();
    let alphabet = ['a', 'b', 'c', 'd', 'é'];
    for _ in 0..ROUNDS {
        let text: String = (0..rng.gen_range(0..20))
            .map(|_| *alphabet.choose(&mut rng).unwrap_or(&'a'))
            .collect();
        let chars: Vec<char> = text.chars().collect();
        let brute_force = (0..chars.len())
            .flat_map(|i| (i..chars.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| {
                let window = &chars[i..=j];
                window.iter().enumerate().all(|(a, c)| !window[a + 1..].contains(c))
            })
            .map(|(i, j)| j - i + 1)
            .max()
            .unwrap_or(0);
        assert_eq!(longest_unique_substring(&text), brute_force, "text={text:?}");
    }
}

#[test]
fn bracket_nesting() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        // a balanced text, built by wrapping & concatenating balanced pieces
        let mut text = String::new();
        for _ in 0..rng.gen_range(0..10) {
            let (opener, closer) = *[('(', ')'), ('[', ']'), ('{', '}')].choose(&mut rng).unwrap_or(&('(', ')'));
            text = if rng.gen_bool(0.5) { format!("{opener}{text}{closer}") } else { format!("{text}{opener}{closer}") };
        }
        assert!(is_balanced(&text), "{text}");
        assert!(is_balanced_with(&text, ForeignChars::Reject), "{text}");
        if !text.is_empty() {
            assert!(!is_balanced(&text[1..]), "{text} without its first char");
            assert!(!is_balanced(&text[..text.len() - 1]), "{text} without its last char");
        }
    }
}

#[test]
fn sorts_agree_with_the_standard_library() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let mut sequence: Vec<i16> = (0..rng.gen_range(0..100)).map(|_| rng.gen()).collect();
        let mut expected = sequence.clone();
        expected.sort();
        assert_eq!(quick_sort(&sequence), expected);
        bubble_sort(&mut sequence);
        assert_eq!(sequence, expected);
    }
}

/// random operations applied to both a [SinglyLinkedList] and a `Vec`, which must always agree
#[test]
fn linked_list_behaves_like_a_vec() {
    let mut rng = rand::thread_rng();
    let mut list = SinglyLinkedList::new();
    let mut model: Vec<u32> = Vec::new();
    for operation in 0..5_000_u32 {
        if rng.gen_bool(0.6) {
            list.add(operation);
            model.push(operation);
        } else {
            let index = rng.gen_range(0..=model.len());
            let expected = if index < model.len() {
                Ok(model.remove(index))
            } else {
                Err(KataError::IndexOutOfRange { index, len: model.len() })
            };
            assert_eq!(list.remove_at(index), expected);
        }
        assert_eq!(list.len(), model.len());
    }
    assert_eq!(list.to_vec(), model);
    assert_eq!(list.iter().count(), model.len());
}

#[test]
fn the_catalogue_runs() {
    let mut report = String::new();
    assert_eq!(run_topic("sorting", |text| report.push_str(text)), Ok(2));
    assert!(report.contains("Quick Sort: [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]"), "report was:\n{report}");
    assert!(matches!(run_topic("nope", |_| {}), Err(KataError::NotFound { .. })));
    assert!(run_catalogue() > 0);
}
