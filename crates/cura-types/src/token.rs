//! Tokens of a desired-order list.

use serde_json::Value;

/// Reserved sentinel meaning "no constraint at this position".
pub const PLACEHOLDER: &str = "_";

/// The string form a JSON element is matched by.
///
/// A string matches by its contents, anything else by its serialized text,
/// so `1` and `"1"` are the same token.
pub fn token_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
