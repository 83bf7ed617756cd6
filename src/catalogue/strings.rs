//! Text katas. Everything here works on Unicode scalar values (`char`s), never on bytes.

use std::collections::{BTreeMap, HashMap};

/// Letter case, for [alphabet()]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

/// the characters of `text`, last to first
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverses the characters of every space separated word, keeping the words where they are:
/// `"hello world"` becomes `"olleh dlrow"`. Runs of spaces are preserved.
pub fn reverse_words(text: &str) -> String {
    text.split(' ')
        .map(reverse)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The longest space separated word -- the first one, on ties. An empty `text` gives `""`
pub fn longest_word(text: &str) -> &str {
    text.split(' ')
        .fold("", |longest, word| if word.chars().count() > longest.chars().count() { word } else { longest })
}

/// Case-insensitive anagram check: both texts, lowercased, have the very same characters
pub fn is_anagram(a: &str, b: &str) -> bool {
    let sorted_lowercase = |text: &str| {
        let mut chars: Vec<char> = text.to_lowercase().chars().collect();
        chars.sort_unstable();
        chars
    };
    sorted_lowercase(a) == sorted_lowercase(b)
}

/// The forgiving palindrome check people expect: only letters & digits count, regardless of case
/// -- `"A man a plan a canal Panama"` is one.\
/// See [crate::algorithms::two_pointers::is_palindrome()] for the exact version.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: String = text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    crate::algorithms::two_pointers::is_palindrome(&cleaned)
}

/// the first character appearing only once in `text`
pub fn first_non_repeated(text: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    text.chars().find(|c| counts.get(c) == Some(&1))
}

/// how many times each character appears in `text`
pub fn char_frequencies(text: &str) -> BTreeMap<char, usize> {
    text.chars()
        .fold(BTreeMap::new(), |mut frequencies, c| {
            *frequencies.entry(c).or_insert(0) += 1;
            frequencies
        })
}

/// the 26 letters of the latin alphabet, in the requested `case`
pub fn alphabet(case: Case) -> Vec<char> {
    match case {
        Case::Lower => ('a'..='z').collect(),
        Case::Upper => ('A'..='Z').collect(),
    }
}

/// keeps only the ASCII letters of `text` -- `"abc123!@#"` gives `"abc"`
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}

/// the Unicode code point of each character
pub fn char_codes(text: &str) -> Vec<u32> {
    text.chars()
        .map(u32::from)
        .collect()
}
