//! The catalogue's demo: every kata run on a sample input, grouped by topic, with its result reported through an output sink.

use once_cell::sync::Lazy;
use crate::{
    algorithms::{
        brackets::is_balanced,
        search::binary_search_or_sentinel,
        sliding_window::{longest_unique_substring, max_window_sum},
        sorting::{bubble_sort, quick_sort},
        two_pointers,
    },
    complexity::{measurements::duration_measurement, runners::timed},
    data_structures::linked_list::SinglyLinkedList,
    errors::{KataError, KataResult},
    features::OUTPUT,
};
use super::{arrays, numbers, objects, strings};


/// A sample run of a kata: its name and a function rendering its result
pub type Example = (&'static str, fn() -> String);

fn example(name: &'static str, run: fn() -> String) -> Example {
    (name, run)
}

/// A named group of [Example]s
pub struct Topic {
    pub name:     &'static str,
    pub examples: Vec<Example>,
}

static CATALOGUE: Lazy<Vec<Topic>> = Lazy::new(|| vec![
    Topic { name: "algorithms", examples: vec![
        example("Binary Search",            || format!("{}", binary_search_or_sentinel(&[1, 2, 3, 4, 5], &3))),
        example("Two Sum (sorted)",         || format!("{:?}", two_pointers::pair_sum(&[1, 2, 3, 4, 5], 6))),
        example("Two Pointers Palindrome",  || format!("{}", two_pointers::is_palindrome("racecar"))),
        example("Max Window Sum (k=3)",     || format!("{:?}", max_window_sum(&[2, 1, 5, 1, 3, 2], 3))),
        example("Longest Unique Substring", || format!("{}", longest_unique_substring("abcabcbb"))),
        example("Valid Parentheses",        || format!("{}", is_balanced("({[]})"))),
    ]},
    Topic { name: "sorting", examples: vec![
        example("Quick Sort",  || format!("{:?}", quick_sort(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]))),
        example("Bubble Sort", || {
            let mut sequence = [64, 34, 25, 12, 22, 11, 90];
            bubble_sort(&mut sequence);
            format!("{:?}", sequence)
        }),
    ]},
    Topic { name: "data structures", examples: vec![
        example("Linked List", || {
            let mut list = SinglyLinkedList::new();
            list.add(1);
            list.add(2);
            list.add(3);
            list.to_string()
        }),
        example("Linked List after removing index 1", || {
            let mut list: SinglyLinkedList<u32> = (1..=3).collect();
            match list.remove_at(1) {
                Ok(removed) => format!("{list} (removed {removed})"),
                Err(err)    => err.to_string(),
            }
        }),
    ]},
    Topic { name: "arrays", examples: vec![
        example("Array Reversal",      || format!("{:?}", arrays::reverse(&[1, 2, 3, 4, 5]))),
        example("Flatten Array",       || {
            use arrays::Nested::{Item, List};
            format!("{:?}", arrays::flatten(&[Item(1), List(vec![Item(2), List(vec![Item(3), Item(4)])]), Item(5)]))
        }),
        example("Array Union",         || format!("{:?}", arrays::union(&[1, 2, 3, 4, 5], &[4, 5, 6, 7, 8]))),
        example("Array Intersection",  || format!("{:?}", arrays::intersection(&[1, 2, 3, 4, 5], &[4, 5, 6, 7, 8]))),
        example("Element Frequencies", || format!("{:?}", arrays::count_frequencies(&[1, 2, 2, 3, 3, 3]))),
        example("Chunk (size 2)",      || format!("{:?}", arrays::chunk(&[1, 2, 3, 4, 5], 2))),
        example("Rotate Left (k=2)",   || format!("{:?}", arrays::rotate_left(&[1, 2, 3, 4, 5], 2))),
        example("Second Largest",      || format!("{:?}", arrays::second_largest(&[10, 5, 8, 20, 20]))),
        example("Custom Map (x2)",     || format!("{:?}", arrays::custom_map(&[1, 2, 3, 4, 5], |x, _| x * 2))),
        example("Even/Odd Partition",  || format!("{:?}", arrays::partition_even_odd(&[1, 2, 3, 4, 5]))),
        example("Flatten 2D",          || format!("{:?}", arrays::flatten_2d(&[vec![1, 2], vec![3, 4], vec![5, 6]]))),
        example("Longest Increasing Subsequence", || format!("{}", arrays::longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]))),
        example("Move Zeros to End",   || {
            let mut sequence = [0, 1, 0, 3, 12];
            arrays::move_zeros_to_end(&mut sequence);
            format!("{:?}", sequence)
        }),
        example("Find Missing",        || format!("{:?}", arrays::find_missing(&[1, 2, 4, 5]))),
        example("Arrays Equal",        || format!("{}", arrays::are_equal(&[1, 2, 3], &[1, 2, 3]))),
    ]},
    Topic { name: "strings", examples: vec![
        example("String Reverse",          || strings::reverse("hello")),
        example("Reverse Words",           || strings::reverse_words("hello world")),
        example("Longest Word",            || strings::longest_word("the quick brown fox").to_string()),
        example("Anagram Check",           || format!("{}", strings::is_anagram("listen", "silent"))),
        example("Palindrome Check",        || format!("{}", strings::is_palindrome("A man a plan a canal Panama"))),
        example("First Non-Repeated",      || format!("{:?}", strings::first_non_repeated("swiss"))),
        example("Character Count",         || format!("{:?}", strings::char_frequencies("hello world"))),
        example("Lowercase Alphabet",      || strings::alphabet(strings::Case::Lower).into_iter().collect()),
        example("Letters Only",            || strings::letters_only("abc123!@#")),
        example("Char Codes",              || format!("{:?}", strings::char_codes("hello"))),
    ]},
    Topic { name: "numbers", examples: vec![
        example("Prime Check (17)",  || format!("{}", numbers::is_prime(17))),
        example("Digital Root (38)", || format!("{}", numbers::digital_root(38))),
        example("Fibonacci (50)",    || format!("{:?}", numbers::fibonacci(50))),
        example("FizzBuzz (1..=5)",  || numbers::fizz_buzz(5).iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")),
    ]},
    Topic { name: "objects", examples: vec![
        example("Flatten Object", || {
            use objects::Field;
            let Field::Object(person) = Field::object([
                ("name",    Field::Value("John")),
                ("address", Field::object([("city", Field::Value("New York")), ("country", Field::Value("USA"))])),
            ]) else {
                return String::new()
            };
            format!("{:?}", objects::flatten_object(&person))
        }),
        example("Zip Arrays",      || format!("{:?}", objects::zip_to_map(&["name", "age"], &["John", "30"]))),
        example("Group Anagrams",  || format!("{:?}", objects::group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]))),
        example("Deep Equal (key order ignored)", || {
            use objects::Field;
            let a = Field::object([("a", Field::Value(1)), ("b", Field::Value(2))]);
            let b = Field::object([("b", Field::Value(2)), ("a", Field::Value(1))]);
            format!("{}", objects::deep_equal(&a, &b))
        }),
        example("Unique by Key",   || format!("{:?}", objects::unique_by_key(&[(1, "ann"), (2, "bob"), (1, "ann v2")], |&(id, _)| id))),
    ]},
    Topic { name: "performance", examples: vec![
        example("Squares of 0..1000", || {
            let squares = timed(|| (0..1000_u64).map(|i| i * i).collect::<Vec<_>>());
            format!("last={:?}, took {}", squares.result.last(), duration_measurement(squares.elapsed))
        }),
    ]},
]);

/// The available topics, in presentation order
pub fn topics() -> impl Iterator<Item=&'static str> {
    CATALOGUE.iter().map(|topic| topic.name)
}

/// Runs every example of the topic `name` (compared case-insensitively), reporting each result through `output`.\
/// Returns how many examples were run or [KataError::NotFound] for unknown topics.
pub fn run_topic(name: &str, mut output: impl FnMut(&str)) -> KataResult<usize> {
    let topic = CATALOGUE.iter()
        .find(|topic| topic.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| KataError::not_found(format!("topic '{name}'")))?;
    output(&format!("\n=== {} ===\n", topic.name));
    for (example_name, example) in &topic.examples {
        output(&format!("{}: {}\n", example_name, example()));
    }
    Ok(topic.examples.len())
}

/// Runs the whole catalogue, topic after topic, reporting through [OUTPUT].
/// Returns the number of examples run.
pub fn run_catalogue() -> usize {
    OUTPUT("=== Interview Katas Demo ===\n");
    CATALOGUE.iter()
        .map(|topic| run_topic(topic.name, OUTPUT).unwrap_or(0))
        .sum()
}


#[cfg(test)]
mod tests {

    //! Unit tests for [runner](super) module

    use super::*;

    /// runs `topic`, returning the report it produced
    fn report_for(topic: &str) -> (KataResult<usize>, String) {
        let mut report = String::new();
        let result = run_topic(topic, |text| report.push_str(text));
        (result, report)
    }

    #[test]
    fn every_topic_runs_all_of_its_examples() {
        for topic in topics() {
            let (result, report) = report_for(topic);
            let examples = result.expect("listed topics exist");
            assert!(examples > 0, "topic '{topic}' has no examples");
            // a title line plus one line per example
            assert_eq!(report.trim().lines().count(), examples + 1, "report for '{topic}' was:\n{report}");
        }
    }

    #[test]
    fn known_results_are_reported() {
        let (_, algorithms) = report_for("algorithms");
        assert!(algorithms.contains("Binary Search: 2\n"), "report was:\n{algorithms}");
        assert!(algorithms.contains("Two Sum (sorted): Some((0, 4))\n"), "report was:\n{algorithms}");
        assert!(algorithms.contains("Longest Unique Substring: 3\n"), "report was:\n{algorithms}");
        assert!(algorithms.contains("Valid Parentheses: true\n"), "report was:\n{algorithms}");

        let (_, structures) = report_for("Data Structures");
        assert!(structures.contains("Linked List: 1 -> 2 -> 3\n"), "report was:\n{structures}");
        assert!(structures.contains("(removed 2)"), "report was:\n{structures}");

        let (_, numbers) = report_for("numbers");
        assert!(numbers.contains("Fibonacci (50): Ok(12586269025)\n"), "report was:\n{numbers}");
        assert!(numbers.contains("FizzBuzz (1..=5): 1, 2, Fizz, 4, Buzz\n"), "report was:\n{numbers}");

        let (_, arrays) = report_for("arrays");
        assert!(arrays.contains("Arrays Equal: true\n"), "report was:\n{arrays}");
        let (_, objects) = report_for("objects");
        assert!(objects.contains("Deep Equal (key order ignored): true\n"), "report was:\n{objects}");
    }

    #[test]
    fn unknown_topics_are_not_found() {
        let (result, report) = report_for("astrology");
        assert_eq!(result, Err(KataError::NotFound { what: "topic 'astrology'".to_string() }));
        assert!(report.is_empty());
    }

    #[test]
    fn whole_catalogue() {
        let total: usize = topics()
            .map(|topic| report_for(topic).0.unwrap_or(0))
            .sum();
        assert_eq!(run_catalogue(), total);
    }
}
