//! Value-node data structures for parsed CSS property values.
//!
//! A parsed value is a sequence of [`Value`] nodes. Five node kinds cover the
//! value grammar this toolchain cares about:
//!
//! - [`Value::Literal`]: a bare keyword such as `block` or `inherit`
//! - [`Value::Number`]: a number with an optional unit, such as `1.5em`
//! - [`Value::Color`]: a hex color such as `#f00` or `#ff000080`
//! - [`Value::Str`]: a quoted string such as `"Fira Code"`
//! - [`Value::FunctionCall`]: a call such as `linear-gradient(to bottom, #fff)`
//!
//! All nodes implement [`Display`](fmt::Display), reconstructing canonical
//! CSS text.

use std::fmt;

/// A single node within a CSS property value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A bare keyword: `block`, `solid`, `inherit`.
    Literal(String),
    /// A number with an optional unit: `10`, `1.5em`, `50%`.
    Number(NumberValue),
    /// A hex color: `#f00`, `#ff0000`, `#ff000080`.
    Color(ColorValue),
    /// A quoted string: `"Fira Code"`, `'serif'`.
    Str(StringValue),
    /// A function call: `linear-gradient(to bottom, #fff)`.
    FunctionCall(FunctionCall),
}

impl Value {
    /// Shorthand for building a literal node.
    pub fn literal(text: impl Into<String>) -> Self {
        Value::Literal(text.into())
    }
}

/// A numeric value with an optional unit suffix.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberValue {
    pub value: f64,
    /// Unit suffix (`px`, `em`, `%`), or `None` for a unitless number.
    pub unit: Option<String>,
}

impl NumberValue {
    pub fn unitless(value: f64) -> Self {
        Self { value, unit: None }
    }

    pub fn with_unit(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: Some(unit.into()),
        }
    }
}

/// An RGBA color parsed from hex notation.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorValue {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl ColorValue {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A quoted string value, stored without its quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
}

/// A function call with its name and argument nodes.
///
/// Arguments may nest arbitrarily; commas between arguments are separators
/// and are not represented as nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(text) => write!(f, "{}", text),
            Value::Number(number) => write!(f, "{}", number),
            Value::Color(color) => write!(f, "{}", color),
            Value::Str(string) => write!(f, "{}", string),
            Value::FunctionCall(call) => write!(f, "{}", call),
        }
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(unit) = &self.unit {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a < 1.0 {
            write!(f, "{:02x}", (self.a * 255.0).round() as u8)?;
        }
        Ok(())
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}
