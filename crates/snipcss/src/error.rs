//! Error types for snippet building.

use cssvalue::CssValueError;
use thiserror::Error;

/// Errors that can occur when building snippets.
///
/// Free-text definitions never fail - they fall back to the raw snippet
/// variant. The only fatal condition is a definition with property shape
/// whose value payload the value grammar rejects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnippetError {
    /// A property definition carried a value payload that could not be
    /// parsed by the value grammar.
    #[error("invalid value in snippet '{key}': {source}")]
    InvalidValue {
        /// Lookup key of the offending definition.
        key: String,
        source: CssValueError,
    },
}
