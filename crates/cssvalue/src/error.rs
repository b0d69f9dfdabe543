//! Error types for CSS value parsing.

use thiserror::Error;

/// Errors that can occur when parsing CSS value text.
///
/// # Examples
///
/// ```rust
/// use cssvalue::{parse_value, CssValueError};
///
/// assert_eq!(parse_value("   "), Err(CssValueError::Empty));
/// assert!(matches!(
///     parse_value("10px @@"),
///     Err(CssValueError::InvalidSyntax(_))
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CssValueError {
    /// Invalid value syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected.
    #[error("CSS value syntax error: {0}")]
    InvalidSyntax(String),

    /// The value text was empty or contained only whitespace.
    #[error("empty CSS value")]
    Empty,
}
