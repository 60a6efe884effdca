//! Error types for the transform crate.

/// Errors that can occur when configuring a transform.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// The requested key case is not supported.
    #[error("unknown key case: {0} (expected `camel` or `snake`)")]
    UnknownKeyCase(String),
}
