//! CSS value parsing.
//!
//! This module provides the parsing entry points for value text:
//!
//! - [`parse_value`]: Main entry point, parses a full value text into nodes
//! - [`parse_node`]: Parses a single value node
//!
//! Nodes are separated by whitespace and/or commas. Classification is
//! first-match-wins: color, string, number, function call, then bare literal.
//!
//! ## Submodules
//!
//! - [`values`]: Individual node parsers (number, color, string, function)

pub mod values;

pub use values::{parse_color, parse_function_call, parse_ident, parse_number, parse_string};

use crate::CssValueError;
use crate::value::Value;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    combinator::map,
    multi::many1,
    sequence::preceded,
};

/// Parses a CSS value text into its sequence of value nodes.
///
/// Empty or blank input is rejected with [`CssValueError::Empty`]; input the
/// grammar cannot fully consume is rejected with
/// [`CssValueError::InvalidSyntax`].
pub fn parse_value(input: &str) -> Result<Vec<Value>, CssValueError> {
    if input.trim().is_empty() {
        return Err(CssValueError::Empty);
    }

    let (remaining, nodes) =
        parse_value_nodes(input).map_err(|e| CssValueError::InvalidSyntax(e.to_string()))?;

    // Trailing separators are fine; anything else is not.
    let remaining = remaining.trim_matches(is_separator);
    if !remaining.is_empty() {
        return Err(CssValueError::InvalidSyntax(format!(
            "unexpected token in value: {}",
            remaining
        )));
    }

    Ok(nodes)
}

/// Parses a single value node.
pub fn parse_node(input: &str) -> IResult<&str, Value> {
    alt((
        map(values::parse_color, Value::Color),
        map(values::parse_string, Value::Str),
        map(values::parse_number, Value::Number),
        map(values::parse_function_call, Value::FunctionCall),
        map(values::parse_ident, |s: &str| Value::Literal(s.to_string())),
    ))(input)
}

fn parse_value_nodes(input: &str) -> IResult<&str, Vec<Value>> {
    many1(preceded(separators0, parse_node))(input)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Consumes zero or more node separators (whitespace and commas).
pub(crate) fn separators0(input: &str) -> IResult<&str, &str> {
    take_while(is_separator)(input)
}
