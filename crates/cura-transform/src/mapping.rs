//! Value-wise transforms over key/value collections.
//!
//! The input can be any iterable of pairs and the output any collection that
//! can be built from pairs, so the same helper serves `HashMap`, `BTreeMap`,
//! `serde_json::Map`, or a plain `Vec<(K, V)>`.

use serde_json::{Map, Value};

/// Apply `f` to every value, keeping keys.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use cura_transform::map_values;
///
/// let counts = BTreeMap::from([("a", 1), ("b", 2)]);
/// let doubled: BTreeMap<_, _> = map_values(counts, |v| v * 2);
/// assert_eq!(doubled[&"b"], 4);
/// ```
pub fn map_values<K, V, W, I, O, F>(mapping: I, mut f: F) -> O
where
    I: IntoIterator<Item = (K, V)>,
    O: FromIterator<(K, W)>,
    F: FnMut(V) -> W,
{
    mapping.into_iter().map(|(k, v)| (k, f(v))).collect()
}

/// Like [`map_values`], but `f` also sees the key.
pub fn map_values_with_key<K, V, W, I, O, F>(mapping: I, mut f: F) -> O
where
    I: IntoIterator<Item = (K, V)>,
    O: FromIterator<(K, W)>,
    F: FnMut(&K, V) -> W,
{
    mapping
        .into_iter()
        .map(|(k, v)| {
            let w = f(&k, v);
            (k, w)
        })
        .collect()
}

/// Apply `f` to every value of a JSON object, returning a new object.
pub fn map_object_values<F>(object: &Map<String, Value>, mut f: F) -> Map<String, Value>
where
    F: FnMut(&Value) -> Value,
{
    object.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}
