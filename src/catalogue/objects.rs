//! Katas on keyed records: flattening nested records, zipping keys & values and grouping / deduplicating by key.

use std::{
    collections::{BTreeMap, HashMap, hash_map::Entry},
    hash::Hash,
};


/// A record field: either a plain value or a nested record, whose fields keep their declaration order
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Value(T),
    Object(Vec<(String, Field<T>)>),
}

impl<T> Field<T> {
    /// shorthand for building nested records in place
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item=(K, Field<T>)>) -> Self {
        Self::Object(fields.into_iter()
            .map(|(key, field)| (key.into(), field))
            .collect())
    }
}

/// Structural equality of records regardless of the order of their keys, at every nesting level:
/// `{a: 1, b: 2}` equals `{b: 2, a: 1}`.\
/// A key repeated inside one record counts once, with its last field -- as assigning it twice would leave it.
/// (The derived `==` is order-sensitive.)
pub fn deep_equal<T: PartialEq>(a: &Field<T>, b: &Field<T>) -> bool {
    fn by_key<T>(fields: &[(String, Field<T>)]) -> HashMap<&str, &Field<T>> {
        fields.iter()
            .map(|(key, field)| (key.as_str(), field))
            .collect()
    }
    match (a, b) {
        (Field::Value(a), Field::Value(b)) => a == b,
        (Field::Object(a), Field::Object(b)) => {
            let (a, b) = (by_key(a), by_key(b));
            a.len() == b.len() &&
                a.iter().all(|(key, field_a)| b.get(key).is_some_and(|field_b| deep_equal(*field_a, *field_b)))
        },
        _ => false,
    }
}

/// Flattens a nested record into `(dotted.path, value)` pairs, in declaration order:
/// `{a: 1, b: {c: 2}}` becomes `[("a", 1), ("b.c", 2)]`.\
/// Empty nested records contribute no entries.
pub fn flatten_object<T: Clone>(fields: &[(String, Field<T>)]) -> Vec<(String, T)> {
    fn walk<T: Clone>(fields: &[(String, Field<T>)], path: &str, flattened: &mut Vec<(String, T)>) {
        for (key, field) in fields {
            let key_path = format!("{path}{key}");
            match field {
                Field::Value(value)  => flattened.push((key_path, value.clone())),
                Field::Object(inner) => walk(inner, &format!("{key_path}."), flattened),
            }
        }
    }
    let mut flattened = Vec::new();
    walk(fields, "", &mut flattened);
    flattened
}

/// Pairs each key with the value at the same position. Keys without a value are left out
/// and, for repeated keys, the last pairing wins.
pub fn zip_to_map<K: Ord + Clone, V: Clone>(keys: &[K], values: &[V]) -> BTreeMap<K, V> {
    keys.iter()
        .cloned()
        .zip(values.iter().cloned())
        .collect()
}

/// Groups the words that are anagrams of each other -- same characters, case-sensitive.\
/// Groups appear in the order their first word was seen, as do the words inside each group.
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut group_index_by_signature: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();
    for word in words {
        let word = word.as_ref();
        let mut signature: Vec<char> = word.chars().collect();
        signature.sort_unstable();
        let group_index = *group_index_by_signature.entry(signature)
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
        groups[group_index].push(word.to_string());
    }
    groups
}

/// Keeps one item per distinct `key`: keys keep the position of their first appearance
/// while the item kept is the last one seen with that key.
pub fn unique_by_key<T: Clone, K: Eq + Hash>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut position_by_key: HashMap<K, usize> = HashMap::new();
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        match position_by_key.entry(key(item)) {
            Entry::Occupied(position) => unique[*position.get()] = item.clone(),
            Entry::Vacant(position) => {
                position.insert(unique.len());
                unique.push(item.clone());
            },
        }
    }
    unique
}
