//! Error types for field list edits.

use cura_types::FieldKind;
use thiserror::Error;

/// Errors that can occur while editing a field list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// No field with this id exists.
    #[error("field not found: {id}")]
    NotFound { id: String },

    /// A field with this id already exists.
    #[error("duplicate field id: {id}")]
    DuplicateId { id: String },

    /// A position was outside the list.
    #[error("index {index} out of bounds for {len} fields")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Options were supplied for a field kind that has none.
    #[error("field {id} of kind {kind} does not take options")]
    NotChoiceField { id: String, kind: FieldKind },
}

/// Convenience type alias for field list operations.
pub type Result<T> = std::result::Result<T, FieldError>;
