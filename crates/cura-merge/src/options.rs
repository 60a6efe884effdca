//! Value-keyed union and deduplication of option lists.

use std::collections::{HashMap, HashSet};

use cura_types::SelectOption;

/// Merge two lists keyed by `key`, with later entries overwriting earlier ones.
///
/// The result holds one entry per distinct key, in the order each key was
/// first inserted. When a key reappears (in `second`, or later in `first`),
/// the newer entry replaces the stored one in place.
pub fn union_by<T, F>(first: &[T], second: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut merged: Vec<T> = Vec::with_capacity(first.len() + second.len());
    let mut position: HashMap<&str, usize> = HashMap::new();

    for item in first.iter().chain(second) {
        match position.get(key(item)) {
            Some(&index) => merged[index] = item.clone(),
            None => {
                position.insert(key(item), merged.len());
                merged.push(item.clone());
            }
        }
    }
    merged
}

/// Keep the first item for each key, skipping `None` entries.
pub fn dedupe_by<'a, T, I, F>(items: I, key: F) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = Option<&'a T>>,
    F: Fn(&T) -> &str,
{
    let mut seen: HashSet<&str> = HashSet::new();
    items
        .into_iter()
        .flatten()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}

/// Union of two option lists by `value`; entries from `second` win.
///
/// # Examples
///
/// ```
/// use cura_merge::union_by_value;
/// use cura_types::SelectOption;
///
/// let merged = union_by_value(
///     &[SelectOption::new("yes", "Yes")],
///     &[SelectOption::new("yes", "Y"), SelectOption::new("no", "No")],
/// );
/// assert_eq!(merged, vec![SelectOption::new("yes", "Y"), SelectOption::new("no", "No")]);
/// ```
pub fn union_by_value(first: &[SelectOption], second: &[SelectOption]) -> Vec<SelectOption> {
    union_by(first, second, |opt| opt.value.as_str())
}

/// Drop missing entries and repeated `value`s, keeping first occurrences.
pub fn dedupe_by_value(options: &[Option<SelectOption>]) -> Vec<SelectOption> {
    dedupe_by(options.iter().map(Option::as_ref), |opt| opt.value.as_str())
}

/// [`dedupe_by_value`] for a list with no missing entries.
pub fn dedupe_options(options: &[SelectOption]) -> Vec<SelectOption> {
    dedupe_by(options.iter().map(Some), |opt| opt.value.as_str())
}
