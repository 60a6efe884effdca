//! Desired-order reconciliation.
//!
//! The desired-order list names tokens in the order they should come first.
//! Each mention consumes one remaining occurrence from the reference list;
//! whatever is left afterwards keeps its original relative order. The
//! placeholder token is skipped, and mentions with nothing left to consume
//! are ignored.

use std::collections::{HashMap, VecDeque};

use cura_types::PLACEHOLDER;
use tracing::debug;

/// Reorder `list` by `order`, skipping the default [`PLACEHOLDER`].
///
/// The result is always a permutation of `list`.
///
/// # Examples
///
/// ```
/// use cura_merge::reorder;
///
/// let out = reorder(&["a", "b", "a"], &["b", "_", "a"]);
/// assert_eq!(out, vec!["b", "a", "a"]);
/// ```
pub fn reorder<T, U>(list: &[T], order: &[U]) -> Vec<T>
where
    T: AsRef<str> + Clone,
    U: AsRef<str>,
{
    reorder_with_placeholder(list, order, PLACEHOLDER)
}

/// Reorder `list` by `order`, treating `placeholder` as "no constraint".
pub fn reorder_with_placeholder<T, U>(list: &[T], order: &[U], placeholder: &str) -> Vec<T>
where
    T: AsRef<str> + Clone,
    U: AsRef<str>,
{
    reorder_by_key(list, order, placeholder, |item| item.as_ref())
}

/// Reorder arbitrary items whose identity token is given by `key`.
///
/// Items sharing a key are interchangeable for ordering purposes, but each
/// input item is emitted exactly once: the n-th consumption of a key yields
/// the n-th item carrying that key.
pub fn reorder_by_key<T, U, F>(list: &[T], order: &[U], placeholder: &str, key: F) -> Vec<T>
where
    T: Clone,
    U: AsRef<str>,
    F: Fn(&T) -> &str,
{
    // Multiplicity map: the queue length is the remaining count of a token,
    // its entries are the positions in `list` not yet emitted.
    let mut remaining: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (index, item) in list.iter().enumerate() {
        remaining.entry(key(item)).or_default().push_back(index);
    }

    let mut out = Vec::with_capacity(list.len());
    let mut ignored = 0usize;

    for token in order {
        let token: &str = token.as_ref();
        if token == placeholder {
            continue;
        }
        match remaining.get_mut(token).and_then(VecDeque::pop_front) {
            Some(index) => out.push(list[index].clone()),
            None => ignored += 1,
        }
    }

    for item in list {
        if let Some(index) = remaining.get_mut(key(item)).and_then(VecDeque::pop_front) {
            out.push(list[index].clone());
        }
    }

    if ignored > 0 {
        debug!(ignored, "order tokens had no remaining occurrence");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn placeholder_and_duplicates() {
        assert_eq!(reorder(&["a", "b", "a"], &["b", "_", "a"]), vec!["b", "a", "a"]);
    }

    #[test]
    fn empty_order_is_identity() {
        let empty: [&str; 0] = [];
        assert_eq!(reorder(&["c", "a", "b"], &empty), vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_list_yields_empty() {
        let empty: [&str; 0] = [];
        assert!(reorder(&empty, &["a", "b"]).is_empty());
    }

    #[test]
    fn unknown_tokens_ignored() {
        assert_eq!(reorder(&["a", "b"], &["x", "b", "y"]), vec!["b", "a"]);
    }

    #[test]
    fn over_mentioned_tokens_ignored() {
        assert_eq!(reorder(&["a", "b"], &["a", "a", "a"]), vec!["a", "b"]);
    }

    #[test]
    fn leftovers_follow_first_occurrence_positions() {
        // One "a" is consumed up front; the remaining "a" is emitted at the
        // first position in the original list that still has a count.
        assert_eq!(reorder(&["a", "b", "a", "c"], &["c", "a"]), vec!["c", "a", "a", "b"]);
    }

    #[test]
    fn only_placeholders_is_identity() {
        assert_eq!(reorder(&["x", "y"], &["_", "_", "_"]), vec!["x", "y"]);
    }

    #[test]
    fn custom_placeholder() {
        let out = reorder_with_placeholder(&["_", "a"], &["*", "_"], "*");
        assert_eq!(out, vec!["_", "a"]);
    }

    #[test]
    fn owned_strings_against_str_order() {
        let list = vec!["nurse".to_string(), "doctor".to_string(), "admin".to_string()];
        let out = reorder(&list, &["admin", "doctor"]);
        assert_eq!(out, vec!["admin", "doctor", "nurse"]);
    }

    #[test]
    fn keyed_items_are_each_emitted_once() {
        #[derive(Clone, Debug, PartialEq)]
        struct Row {
            key: &'static str,
            n: u32,
        }
        let rows = vec![
            Row { key: "a", n: 1 },
            Row { key: "b", n: 2 },
            Row { key: "a", n: 3 },
        ];
        let out = reorder_by_key(&rows, &["a"], PLACEHOLDER, |r| r.key);
        let ns: Vec<u32> = out.iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![1, 3, 2]);
    }

    fn token() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["a", "b", "c", "d", "_"]).prop_map(String::from)
    }

    proptest! {
        #[test]
        fn preserves_multiset(
            list in prop::collection::vec(token(), 0..16),
            order in prop::collection::vec(token(), 0..16),
        ) {
            let out = reorder(&list, &order);
            prop_assert_eq!(sorted(out), sorted(list));
        }

        #[test]
        fn empty_order_preserves_list(list in prop::collection::vec(token(), 0..16)) {
            let empty: Vec<String> = Vec::new();
            prop_assert_eq!(reorder(&list, &empty), list);
        }

        #[test]
        fn mentioned_tokens_come_first(
            list in prop::collection::vec(token(), 0..16),
            order in prop::collection::vec(token(), 0..16),
        ) {
            let out = reorder(&list, &order);
            let mut counts = std::collections::HashMap::new();
            for t in &list {
                *counts.entry(t.as_str()).or_insert(0usize) += 1;
            }
            let mut expected_prefix = Vec::new();
            for t in &order {
                if t == "_" {
                    continue;
                }
                if let Some(c) = counts.get_mut(t.as_str()) {
                    if *c > 0 {
                        *c -= 1;
                        expected_prefix.push(t.clone());
                    }
                }
            }
            prop_assert_eq!(&out[..expected_prefix.len()], &expected_prefix[..]);
        }
    }
}
