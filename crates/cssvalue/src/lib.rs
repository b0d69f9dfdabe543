//! # cssvalue - CSS Value Grammar Parser
//!
//! Parses CSS property value text into a sequence of structured value nodes.
//!
//! This crate is the value-grammar half of a snippet-expansion toolchain: a
//! snippet definition like `background:#000|none` carries value text
//! (`#000`, `none`) that must be understood structurally before keywords can
//! be matched against user-typed abbreviations. `cssvalue` provides:
//!
//! - **Parsing**: Convert value text into a [`Vec<Value>`](Value) via
//!   [`parse_value`]
//! - **Types**: Value nodes for literals, numbers, colors, strings, and
//!   function calls
//!
//! ## Quick Start
//!
//! ```rust
//! use cssvalue::{parse_value, Value};
//!
//! let nodes = parse_value("1px solid red").expect("valid value");
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[2], Value::Literal("red".to_string()));
//! ```
//!
//! ## Supported Value Nodes
//!
//! - Literals: `block`, `inherit`, `solid`
//! - Numbers with optional units: `10`, `1.5em`, `.5`, `-2px`, `50%`
//! - Colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Strings: `"Fira Code"`, `'serif'`
//! - Function calls: `linear-gradient(to bottom, #fff)`
//!
//! Nodes are separated by whitespace and/or commas. Anything the grammar
//! cannot classify is a [`CssValueError`] - callers that build whole snippet
//! registries treat that as fatal for the offending definition.
//!
//! ## Modules
//!
//! - [`parser`]: Value parsing entry points and node parsers
//! - [`value`]: Value-node data structures
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod parser;
pub mod value;

pub use error::CssValueError;
pub use parser::parse_value;
pub use value::{ColorValue, FunctionCall, NumberValue, StringValue, Value};
