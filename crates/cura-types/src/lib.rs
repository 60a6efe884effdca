//! Foundation types for cura.
//!
//! This crate provides the plain data types shared by the ordering, transform,
//! and form-builder crates. Every other cura crate depends on `cura-types`.
//!
//! # Key Types
//!
//! - [`SelectOption`] — A `{ value, label }` choice; identity is `value`
//! - [`PLACEHOLDER`] — The "skip this position" token in desired-order lists
//! - [`token_text`] — The string form JSON elements and option values are matched by
//! - [`FieldKind`] — The input kinds a form builder can place on a canvas
//! - [`FormField`] — A single field of a form under construction

pub mod error;
pub mod field;
pub mod option;
pub mod token;

pub use error::TypeError;
pub use field::{FieldKind, FormField};
pub use option::SelectOption;
pub use token::{token_text, PLACEHOLDER};
