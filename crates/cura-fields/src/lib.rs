//! Form-builder field lists for cura.
//!
//! A form under construction is an ordered list of [`FormField`]s with unique
//! ids. The canvas edits it by dropping new fields from the palette, dragging
//! existing fields to a new position, removing fields, and reconciling against
//! a saved field order.
//!
//! # Modules
//!
//! - [`error`] — Error types for field list edits
//! - [`list`] — The [`FieldList`] container
//!
//! [`FormField`]: cura_types::FormField

pub mod error;
pub mod list;

pub use error::{FieldError, Result};
pub use list::FieldList;
