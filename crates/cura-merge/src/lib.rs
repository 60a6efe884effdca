//! Ordered merge for cura.
//!
//! Reconciles a list against a desired order and merges option lists keyed by
//! `value`. Every operation is pure: inputs are borrowed, results are new
//! owned values, and nothing here returns an error. Malformed input degrades
//! to a defined fallback instead.
//!
//! # Key Functions
//!
//! - [`reorder`] / [`reorder_by_key`] -- Multiset-preserving reorder by a desired-order list
//! - [`union_by_value`] -- Last-write-wins union of two option lists
//! - [`dedupe_by_value`] -- First-wins deduplication that skips missing entries
//! - [`json`] -- The same operations over loosely typed `serde_json::Value` input

pub mod json;
pub mod options;
pub mod reorder;

pub use json::{dedupe_values, reorder_values, union_values};
pub use options::{dedupe_by, dedupe_by_value, dedupe_options, union_by, union_by_value};
pub use reorder::{reorder, reorder_by_key, reorder_with_placeholder};
