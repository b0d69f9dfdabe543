//! Individual value-node parsers.
//!
//! Handles the node-level grammar:
//!
//! - Numbers: `10`, `1.5em`, `.5`, `-2px`, `50%`
//! - Colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Strings: `"Fira Code"`, `'serif'` (no escape handling)
//! - Function calls: `linear-gradient(to bottom, #fff)`
//! - Identifiers: generic CSS identifier parsing

use crate::value::{ColorValue, FunctionCall, NumberValue, StringValue};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    multi::many0,
    sequence::{pair, preceded},
};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
///
/// Identifiers are used for literal keywords and function names.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse a floating point or integer number with an optional unit suffix.
///
/// Accepts `10`, `-2`, `1.5`, `.5`; the unit is either `%` or an alphabetic
/// run (`px`, `em`, `vmin`).
pub fn parse_number(input: &str) -> IResult<&str, NumberValue> {
    let (input, text) = recognize(pair(
        opt(char('-')),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
    ))(input)?;

    let value = text.parse::<f64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;

    let (input, unit) = opt(parse_unit)(input)?;
    Ok((
        input,
        NumberValue {
            value,
            unit: unit.map(str::to_string),
        },
    ))
}

/// Parse the unit suffix (e.g., %, px, em).
fn parse_unit(input: &str) -> IResult<&str, &str> {
    alt((tag("%"), take_while1(|c: char| c.is_ascii_alphabetic())))(input)
}

/// Parse a hex color value.
///
/// Handles `#rgb`, `#rgba`, `#rrggbb`, and `#rrggbbaa`; any other digit count
/// after `#` is rejected.
pub fn parse_color(input: &str) -> IResult<&str, ColorValue> {
    let (input, _) = char('#')(input)?;
    let (rest, hex) = take_while1(|c: char| c.is_ascii_hexdigit())(input)?;

    match color_from_hex(hex) {
        Some(color) => Ok((rest, color)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

fn color_from_hex(hex: &str) -> Option<ColorValue> {
    fn hex_pair(hex: &str, i: usize) -> Option<u8> {
        u8::from_str_radix(&hex[i..i + 2], 16).ok()
    }
    // Single digits double up: #f0a is #ff00aa.
    fn hex_doubled(hex: &str, i: usize) -> Option<u8> {
        let digit = u8::from_str_radix(&hex[i..i + 1], 16).ok()?;
        Some(digit * 17)
    }

    match hex.len() {
        3 => Some(ColorValue::rgb(
            hex_doubled(hex, 0)?,
            hex_doubled(hex, 1)?,
            hex_doubled(hex, 2)?,
        )),
        4 => Some(ColorValue::rgba(
            hex_doubled(hex, 0)?,
            hex_doubled(hex, 1)?,
            hex_doubled(hex, 2)?,
            hex_doubled(hex, 3)? as f32 / 255.0,
        )),
        6 => Some(ColorValue::rgb(
            hex_pair(hex, 0)?,
            hex_pair(hex, 2)?,
            hex_pair(hex, 4)?,
        )),
        8 => Some(ColorValue::rgba(
            hex_pair(hex, 0)?,
            hex_pair(hex, 2)?,
            hex_pair(hex, 4)?,
            hex_pair(hex, 6)? as f32 / 255.0,
        )),
        _ => None,
    }
}

/// Parse a quoted string value.
///
/// Both single and double quotes are accepted. The quotes are stripped;
/// escape sequences are not interpreted.
pub fn parse_string(input: &str) -> IResult<&str, StringValue> {
    let quote = match input.chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )));
        }
    };

    match input[1..].find(quote) {
        Some(end) => Ok((
            &input[end + 2..],
            StringValue {
                value: input[1..end + 1].to_string(),
            },
        )),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        ))),
    }
}

/// Parse a function call: `name(arg, arg ...)`.
///
/// Arguments are value nodes separated by whitespace and/or commas and may
/// nest further calls. An empty argument list is allowed.
pub fn parse_function_call(input: &str) -> IResult<&str, FunctionCall> {
    let (input, name) = parse_ident(input)?;
    let (input, _) = char('(')(input)?;
    let (input, arguments) = many0(preceded(super::separators0, super::parse_node))(input)?;
    let (input, _) = super::separators0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((
        input,
        FunctionCall {
            name: name.to_string(),
            arguments,
        },
    ))
}
