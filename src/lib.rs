#![doc = include_str!("../README.md")]

pub mod algorithms;
pub mod data_structures;
pub mod catalogue;
pub mod complexity;
pub mod errors;
pub mod features;


// exported symbols
pub use {
    algorithms::{
        brackets::{is_balanced, is_balanced_with, ForeignChars},
        search::{binary_search, binary_search_or_sentinel, NOT_FOUND},
        sliding_window::{longest_unique_substring, max_window_sum},
        sorting::{bubble_sort, quick_sort},
        two_pointers::pair_sum,
    },
    catalogue::runner::{run_catalogue, run_topic},
    complexity::{
        types::BigOAlgorithmComplexity,
        runners::{test_algorithm, test_constant_set_iterator_algorithm, timed, Timed},
    },
    data_structures::linked_list::SinglyLinkedList,
    errors::{KataError, KataResult},
    features::OUTPUT,
};
