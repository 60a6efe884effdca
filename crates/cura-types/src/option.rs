use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::token::token_text;

/// A selectable choice rendered by a dropdown, radio group, or checkbox set.
///
/// Identity is `value`; `label` is display metadata only. Uniqueness of
/// `value` is not enforced here: it is an output guarantee of the merge
/// operations, not an input invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl SelectOption {
    /// Create an option from a value and a label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Read an option out of a loosely typed JSON entry.
    ///
    /// Returns `None` unless `entry` is an object with a non-null `value`.
    /// A non-string `value` or `label` is kept as its [`token_text`], so
    /// `{"value": 1}` and `{"value": "1"}` read as the same option. A
    /// missing `label` becomes the empty string.
    pub fn from_json(entry: &Value) -> Option<Self> {
        let obj = entry.as_object()?;
        let value = match obj.get("value")? {
            Value::Null => return None,
            value => token_text(value),
        };
        let label = obj.get("label").map(token_text).unwrap_or_default();
        Some(Self { value, label })
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.value)
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for SelectOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}
