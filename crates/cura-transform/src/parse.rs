//! JSON parsing that never fails.
//!
//! Values read back from local storage or query strings may be missing,
//! truncated, or plain text. These helpers return a fallback instead of an
//! error and leave a debug trace behind.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Parse `input` as JSON, returning `None` if it is not valid JSON.
pub fn safe_parse(input: &str) -> Option<Value> {
    safe_parse_as(input)
}

/// Parse `input` as JSON, returning `fallback` if it is not valid JSON.
pub fn safe_parse_or(input: &str, fallback: Value) -> Value {
    safe_parse(input).unwrap_or(fallback)
}

/// Parse `input` into `T`, returning `None` on malformed or mistyped input.
pub fn safe_parse_as<T: DeserializeOwned>(input: &str) -> Option<T> {
    match serde_json::from_str(input) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, len = input.len(), "falling back on unparsable input");
            None
        }
    }
}
