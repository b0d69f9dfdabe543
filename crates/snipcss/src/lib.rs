//! # snipcss - CSS Snippet Resolution
//!
//! Resolves CSS property/value *snippet definitions* (short textual aliases
//! used by abbreviation-expansion tooling) into a structured, queryable form,
//! and builds a shorthand-to-longhand dependency graph among CSS properties
//! (`background` -> `background-position` -> `background-position-x`).
//!
//! Three stages, in dependency order:
//!
//! 1. **Builder** ([`Snippet::parse`]): turns one `(key, definition)` pair
//!    into a typed snippet - a structured [`PropertySnippet`] when the
//!    definition has property shape, an opaque [`RawSnippet`] otherwise.
//! 2. **Nester** ([`SnippetSet::new`]): sorts the full set of snippets by key
//!    and links each shorthand property to its longhand extensions, producing
//!    a frozen forest of property dependencies.
//! 3. **Keyword Extractor** ([`SnippetSet::keywords`]): walks one property
//!    snippet and its transitive dependencies, collecting the deduplicated
//!    keywords usable for abbreviation matching.
//!
//! ## Quick Start
//!
//! ```rust
//! use snipcss::SnippetSet;
//!
//! let set = SnippetSet::from_definitions([
//!     ("bg", "background:#000|none"),
//!     ("bgp", "background-position:0 0"),
//! ])
//! .expect("valid definitions");
//!
//! let id = set.lookup("bg").expect("registered key");
//! let keywords = set.keywords(id);
//! assert!(keywords.iter().any(|k| k.keyword == "none"));
//! ```
//!
//! A [`SnippetSet`] is build-once, read-many: all dependency edges exist
//! before the set is handed out, and every accessor takes `&self`. The value
//! text inside definitions is parsed by the [`cssvalue`] crate; a payload
//! that crate rejects is fatal for that one definition ([`SnippetError`]).
//!
//! ## Modules
//!
//! - [`snippet`]: Snippet data model and builder
//! - [`nest`]: [`SnippetSet`] construction and shorthand nesting
//! - [`keywords`]: Keyword extraction over nested snippets
//! - [`error`]: Error types for snippet building

pub mod error;
pub mod keywords;
pub mod nest;
pub mod snippet;

pub use error::SnippetError;
pub use keywords::KeywordRef;
pub use nest::SnippetSet;
pub use snippet::{PropertySnippet, RawSnippet, Snippet, SnippetId};
