use thiserror::Error;

/// Error types for date range formatter operations
///
/// The formatting path itself is total and never fails: malformed
/// placeholders pass through as literal text and unset settings resolve to
/// their defaults before formatting runs. These errors are only produced by
/// the advisory settings validation surface.
#[derive(Error, Debug)]
pub enum FormatterError {
    /// A template setting resolved to an empty string
    #[error("Template '{field}' must not be empty")]
    EmptyTemplate { field: &'static str },

    /// A template setting contains unbalanced braces
    #[error("Template '{field}' has unbalanced braces: {template}")]
    UnbalancedBraces {
        field: &'static str,
        template: String,
    },
}

pub type Result<T> = core::result::Result<T, FormatterError>;
