//! Ordered merge over loosely typed JSON input.
//!
//! These entry points accept whatever a caller decoded and never fail:
//!
//! - a reference list that is not an array reorders to `[]`
//! - an order list that is not an array leaves the reference list unchanged
//! - option lists that are not arrays count as empty
//!
//! Elements are matched by [`token_text`], so `1` and `"1"` are the same
//! token in an order list and the same `value` in an option list. An option
//! entry counts when [`SelectOption::from_json`] accepts it; `null`, bare
//! scalars, and objects without a `value` are dropped with a debug trace.
//! Kept entries are returned as-is, including any extra keys they carry.

use std::collections::HashSet;

use cura_types::{token_text, SelectOption, PLACEHOLDER};
use serde_json::Value;
use tracing::debug;

use crate::options::union_by;
use crate::reorder::reorder_by_key;

/// Reorder the JSON array `list` by the JSON array `order`.
///
/// Only the string `"_"` is a placeholder.
pub fn reorder_values(list: &Value, order: &Value) -> Vec<Value> {
    let Some(items) = list.as_array() else {
        debug!("reorder input is not an array; returning empty");
        return Vec::new();
    };
    let Some(order) = order.as_array() else {
        debug!("order is not an array; keeping input order");
        return items.clone();
    };

    let keyed: Vec<(String, &Value)> = items.iter().map(|v| (token_text(v), v)).collect();
    let tokens: Vec<String> = order.iter().map(token_text).collect();

    reorder_by_key(&keyed, &tokens, PLACEHOLDER, |(token, _)| token.as_str())
        .into_iter()
        .map(|(_, v)| v.clone())
        .collect()
}

/// Union two JSON option arrays by `value`; entries from `second` win.
pub fn union_values(first: &Value, second: &Value) -> Vec<Value> {
    let first = option_entries(first);
    let second = option_entries(second);
    union_by(&first, &second, |(value, _)| value.as_str())
        .into_iter()
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Deduplicate a JSON option array by `value`, keeping first occurrences.
pub fn dedupe_values(options: &Value) -> Vec<Value> {
    let entries = option_entries(options);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(entries.len());
    for (value, entry) in &entries {
        if seen.insert(value.as_str()) {
            kept.push((*entry).clone());
        }
    }
    kept
}

/// Option entries of `list` paired with their `value` key.
fn option_entries(list: &Value) -> Vec<(String, &Value)> {
    let Some(entries) = list.as_array() else {
        if !list.is_null() {
            debug!("option list is not an array; treating as empty");
        }
        return Vec::new();
    };
    let kept: Vec<(String, &Value)> = entries
        .iter()
        .filter_map(|entry| SelectOption::from_json(entry).map(|opt| (opt.value, entry)))
        .collect();
    if kept.len() < entries.len() {
        debug!(skipped = entries.len() - kept.len(), "dropped entries that are not options");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reorder_with_placeholder_and_duplicates() {
        let out = reorder_values(&json!(["a", "b", "a"]), &json!(["b", "_", "a"]));
        assert_eq!(out, vec![json!("b"), json!("a"), json!("a")]);
    }

    #[test]
    fn reorder_non_array_list_is_empty() {
        assert!(reorder_values(&json!("not-an-array"), &json!(["x"])).is_empty());
        assert!(reorder_values(&json!(null), &json!(["x"])).is_empty());
    }

    #[test]
    fn reorder_non_array_order_keeps_list() {
        let out = reorder_values(&json!(["a", "b"]), &json!("not-an-array"));
        assert_eq!(out, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn reorder_empty_order_keeps_list() {
        let out = reorder_values(&json!(["b", "a"]), &json!([]));
        assert_eq!(out, vec![json!("b"), json!("a")]);
    }

    #[test]
    fn reorder_numbers_match_by_text() {
        let out = reorder_values(&json!([1, 2, 3]), &json!([3, "2"]));
        assert_eq!(out, vec![json!(3), json!(2), json!(1)]);
    }

    #[test]
    fn union_second_wins() {
        let out = union_values(
            &json!([{"value": "yes", "label": "Yes"}]),
            &json!([{"value": "yes", "label": "Y"}, {"value": "no", "label": "No"}]),
        );
        assert_eq!(
            out,
            vec![
                json!({"value": "yes", "label": "Y"}),
                json!({"value": "no", "label": "No"}),
            ]
        );
    }

    #[test]
    fn union_numeric_values() {
        let out = union_values(
            &json!([{"value": 1, "label": "One"}]),
            &json!([{"value": 1, "label": "Uno"}, {"value": 2, "label": "Two"}]),
        );
        assert_eq!(
            out,
            vec![
                json!({"value": 1, "label": "Uno"}),
                json!({"value": 2, "label": "Two"}),
            ]
        );
    }

    #[test]
    fn union_number_and_string_with_same_text_collide() {
        let out = union_values(
            &json!([{"value": 1, "label": "One"}]),
            &json!([{"value": "1", "label": "one"}]),
        );
        assert_eq!(out, vec![json!({"value": "1", "label": "one"})]);
    }

    #[test]
    fn union_tolerates_non_arrays_and_junk() {
        let out = union_values(&json!(null), &json!([null, 7, {"value": "a", "label": "A"}]));
        assert_eq!(out, vec![json!({"value": "a", "label": "A"})]);
        assert!(union_values(&json!({}), &json!("x")).is_empty());
    }

    #[test]
    fn dedupe_skips_null_keeps_first() {
        let out = dedupe_values(&json!([
            {"value": "a", "label": "A"},
            null,
            {"value": "a", "label": "A2"}
        ]));
        assert_eq!(out, vec![json!({"value": "a", "label": "A"})]);
    }

    #[test]
    fn dedupe_numeric_values() {
        let out = dedupe_values(&json!([
            {"value": 1, "label": "One"},
            {"value": 2, "label": "Two"},
            {"value": 1, "label": "Uno"}
        ]));
        assert_eq!(
            out,
            vec![
                json!({"value": 1, "label": "One"}),
                json!({"value": 2, "label": "Two"}),
            ]
        );
    }

    #[test]
    fn dedupe_number_and_string_with_same_text_collide() {
        let out = dedupe_values(&json!([
            {"value": "1", "label": "one"},
            {"value": 1, "label": "One"}
        ]));
        assert_eq!(out, vec![json!({"value": "1", "label": "one"})]);
    }

    #[test]
    fn dedupe_skips_falsy_and_valueless_entries() {
        let out = dedupe_values(&json!([
            false,
            0,
            "",
            "x",
            {"label": "no value"},
            {"value": "b", "label": "B"}
        ]));
        assert_eq!(out, vec![json!({"value": "b", "label": "B"})]);
    }

    #[test]
    fn dedupe_keeps_extra_keys() {
        let out = dedupe_values(&json!([{"value": "a", "label": "A", "disabled": true}]));
        assert_eq!(out[0]["disabled"], json!(true));
    }

    #[test]
    fn dedupe_non_array_is_empty() {
        assert!(dedupe_values(&json!({"value": "a"})).is_empty());
    }
}
