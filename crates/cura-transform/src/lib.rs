//! Document transforms for cura.
//!
//! Small, pure helpers applied to API payloads before they reach a screen or
//! after a form is submitted.
//!
//! # Key Functions
//!
//! - [`convert_keys`] / [`KeyCase`] -- Recursive camelCase/snake_case key normalization
//! - [`map_values`] -- Value-wise transform of any key/value collection
//! - [`safe_parse`] -- JSON parsing that falls back instead of failing
//! - [`top_n`] -- Frequency ranking with stable tie-breaking

pub mod aggregate;
pub mod case;
pub mod error;
pub mod mapping;
pub mod parse;

pub use aggregate::{top_n, top_n_by};
pub use case::{convert_keys, to_camel_case, to_snake_case, KeyCase};
pub use error::TransformError;
pub use mapping::{map_object_values, map_values, map_values_with_key};
pub use parse::{safe_parse, safe_parse_as, safe_parse_or};
