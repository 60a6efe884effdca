//! Top-N frequency aggregation.

use std::collections::HashMap;
use std::hash::Hash;

/// The `n` most frequent items with their counts.
///
/// Sorted by count, highest first; equal counts keep the order in which each
/// item was first seen.
///
/// # Examples
///
/// ```
/// use cura_transform::top_n;
///
/// let top = top_n(["flu", "cold", "flu", "covid", "cold", "flu"], 2);
/// assert_eq!(top, vec![("flu", 3), ("cold", 2)]);
/// ```
pub fn top_n<I, K>(items: I, n: usize) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash,
{
    top_n_by(items, n, |item| item)
}

/// The `n` most frequent keys derived from `items` by `key`.
pub fn top_n_by<I, T, K, F>(items: I, n: usize, mut key: F) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(T) -> K,
{
    if n == 0 {
        return Vec::new();
    }

    // key -> slot in `tally`; `tally` keeps first-seen order.
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut tally: Vec<usize> = Vec::new();
    for item in items {
        let k = key(item);
        match slots.get(&k) {
            Some(&slot) => tally[slot] += 1,
            None => {
                slots.insert(k, tally.len());
                tally.push(1);
            }
        }
    }

    let mut ranked: Vec<(K, usize, usize)> = slots
        .into_iter()
        .map(|(k, slot)| (k, tally[slot], slot))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);
    ranked.into_iter().map(|(k, count, _)| (k, count)).collect()
}
