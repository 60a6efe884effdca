//! Recursive key-casing conversion.
//!
//! Admin APIs speak snake_case while screens bind camelCase. [`convert_keys`]
//! renames every object key in a nested document, descending through arrays,
//! and leaves scalar values untouched.
//!
//! Word boundaries are separators (`_`, `-`, whitespace), a lowercase letter
//! or digit followed by an uppercase letter, and the last capital of an
//! acronym run followed by a lowercase letter (`HTTPServer` → `http`,
//! `server`). Leading underscores are kept, so `_id` stays `_id`.
//!
//! A `serde_json::Value` owns its children, so a document is always a finite
//! tree and the traversal needs no visited set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TransformError;

/// Target casing for object keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCase {
    #[default]
    Camel,
    Snake,
}

impl KeyCase {
    /// Convert a single key.
    pub fn apply(&self, key: &str) -> String {
        match self {
            Self::Camel => to_camel_case(key),
            Self::Snake => to_snake_case(key),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camel => write!(f, "camel"),
            Self::Snake => write!(f, "snake"),
        }
    }
}

impl FromStr for KeyCase {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "snake" | "snake_case" => Ok(Self::Snake),
            _ => Err(TransformError::UnknownKeyCase(s.to_string())),
        }
    }
}

/// Rename every object key in `value` to `case`, recursively.
///
/// When two keys of one object convert to the same name, the one that
/// iterates last wins.
pub fn convert_keys(value: &Value, case: KeyCase) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (case.apply(k), convert_keys(v, case)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|v| convert_keys(v, case)).collect()),
        other => other.clone(),
    }
}

/// `user_id` → `userId`, `HTTPServer` → `httpServer`.
pub fn to_camel_case(s: &str) -> String {
    let (prefix, rest) = split_leading_underscores(s);
    let mut out = String::from(prefix);
    for (i, word) in split_words(rest).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `userId` → `user_id`, `userID` → `user_id`.
pub fn to_snake_case(s: &str) -> String {
    let (prefix, rest) = split_leading_underscores(s);
    let words: Vec<String> = split_words(rest).iter().map(|w| w.to_lowercase()).collect();
    format!("{prefix}{}", words.join("_"))
}

fn split_leading_underscores(s: &str) -> (&str, &str) {
    let rest = s.trim_start_matches('_');
    (&s[..s.len() - rest.len()], rest)
}

fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        // `current` is non-empty only if the previous char was part of it.
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_from_snake() {
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("created_at_utc"), "createdAtUtc");
        assert_eq!(to_camel_case("already"), "already");
    }

    #[test]
    fn camel_from_other_separators() {
        assert_eq!(to_camel_case("first-name"), "firstName");
        assert_eq!(to_camel_case("Last Name"), "lastName");
    }

    #[test]
    fn camel_is_stable() {
        assert_eq!(to_camel_case("userId"), "userId");
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
    }

    #[test]
    fn snake_from_camel() {
        assert_eq!(to_snake_case("userId"), "user_id");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("HTTPServerError"), "http_server_error");
        assert_eq!(to_snake_case("address2Line"), "address2_line");
        assert_eq!(to_snake_case("user_id"), "user_id");
    }

    #[test]
    fn leading_underscores_kept() {
        assert_eq!(to_snake_case("_id"), "_id");
        assert_eq!(to_camel_case("__private_field"), "__privateField");
        assert_eq!(to_snake_case("___"), "___");
    }

    #[test]
    fn empty_key() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(to_snake_case("prénomÉtudiant"), "prénom_étudiant");
    }

    #[test]
    fn convert_nested_document() {
        let doc = json!({
            "patient_id": 7,
            "contact_info": {"phone_number": "555", "tags": ["a_b"]},
            "visits": [{"visit_date": "2024-01-01"}, 3, null]
        });
        let out = convert_keys(&doc, KeyCase::Camel);
        assert_eq!(
            out,
            json!({
                "patientId": 7,
                "contactInfo": {"phoneNumber": "555", "tags": ["a_b"]},
                "visits": [{"visitDate": "2024-01-01"}, 3, null]
            })
        );
    }

    #[test]
    fn convert_back_to_snake() {
        let doc = json!({"patientId": {"firstName": "Ann"}});
        assert_eq!(
            convert_keys(&doc, KeyCase::Snake),
            json!({"patient_id": {"first_name": "Ann"}})
        );
    }

    #[test]
    fn scalars_untouched() {
        assert_eq!(convert_keys(&json!("some_value"), KeyCase::Camel), json!("some_value"));
        assert_eq!(convert_keys(&json!(null), KeyCase::Snake), json!(null));
    }

    #[test]
    fn input_not_mutated() {
        let doc = json!({"a_b": 1});
        let _ = convert_keys(&doc, KeyCase::Camel);
        assert_eq!(doc, json!({"a_b": 1}));
    }

    #[test]
    fn parse_key_case() {
        assert_eq!("camel".parse::<KeyCase>().unwrap(), KeyCase::Camel);
        assert_eq!("SNAKE".parse::<KeyCase>().unwrap(), KeyCase::Snake);
        assert_eq!(
            "kebab".parse::<KeyCase>().unwrap_err(),
            TransformError::UnknownKeyCase("kebab".into())
        );
        assert_eq!(KeyCase::default(), KeyCase::Camel);
    }
}
