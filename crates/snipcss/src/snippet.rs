//! Snippet data model and builder.
//!
//! A snippet maps a lookup key to either opaque text ([`RawSnippet`]) or a
//! structured CSS property definition ([`PropertySnippet`]). Classification
//! happens in [`Snippet::parse`]: a definition that matches, in full, the
//! shape `lowercase-ident[: payload]` becomes a property snippet; anything
//! else falls back to raw text.

use crate::SnippetError;
use cssvalue::{Value, parse_value};
use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::opt,
    sequence::{preceded, tuple},
};

/// Identifier of a snippet within a [`SnippetSet`](crate::SnippetSet).
///
/// Ids index the set's sorted storage and are only minted during set
/// construction; dependency edges between property snippets are stored as
/// ids rather than owned references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnippetId(pub(crate) usize);

/// A resolved snippet definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Snippet {
    /// An opaque textual snippet with no further structure.
    Raw(RawSnippet),
    /// A structured CSS property definition.
    Property(PropertySnippet),
}

/// An opaque textual snippet, stored verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSnippet {
    /// Lookup key the snippet is registered under.
    pub key: String,
    /// The definition text, unmodified.
    pub value: String,
}

/// A structured CSS property snippet.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySnippet {
    /// Lookup key the snippet is registered under.
    pub key: String,
    /// The CSS property name parsed from the definition.
    pub property: String,
    /// One entry per `|`-separated alternative, each a sequence of value
    /// nodes in source order.
    pub values: Vec<Vec<Value>>,
    /// Longhand snippets linked during nesting. Starts empty, populated
    /// exactly once by set construction, never mutated afterwards.
    pub(crate) dependencies: Vec<SnippetId>,
}

impl PropertySnippet {
    /// Longhand snippets this property was linked to during nesting.
    pub fn dependencies(&self) -> &[SnippetId] {
        &self.dependencies
    }
}

impl Snippet {
    /// Builds a snippet from a `(key, definition)` pair.
    ///
    /// A definition with property shape becomes [`Snippet::Property`]: the
    /// identifier becomes the property name and the payload is split on `|`
    /// into alternatives, each parsed by the value grammar. A definition
    /// without property shape becomes [`Snippet::Raw`] - that is permissive
    /// classification, not an error path.
    ///
    /// The one fatal condition is a property-shaped definition whose payload
    /// the value grammar rejects; the underlying parse failure propagates as
    /// [`SnippetError::InvalidValue`] for this single definition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snipcss::Snippet;
    ///
    /// let snippet = Snippet::parse("d", "display:block|flex|grid").unwrap();
    /// let property = snippet.as_property().unwrap();
    /// assert_eq!(property.property, "display");
    /// assert_eq!(property.values.len(), 3);
    ///
    /// let raw = Snippet::parse("note", "just an opaque piece of text").unwrap();
    /// assert!(!raw.is_property());
    /// ```
    pub fn parse(key: impl Into<String>, definition: &str) -> Result<Snippet, SnippetError> {
        let key = key.into();

        if let Ok(("", (property, payload))) = parse_definition(definition) {
            let mut values = Vec::new();
            if let Some(payload) = payload {
                for alternative in payload.split('|') {
                    let nodes = parse_value(alternative.trim()).map_err(|source| {
                        SnippetError::InvalidValue {
                            key: key.clone(),
                            source,
                        }
                    })?;
                    values.push(nodes);
                }
            }
            return Ok(Snippet::Property(PropertySnippet {
                key,
                property: property.to_string(),
                values,
                dependencies: Vec::new(),
            }));
        }

        Ok(Snippet::Raw(RawSnippet {
            key,
            value: definition.to_string(),
        }))
    }

    /// Lookup key the snippet is registered under.
    pub fn key(&self) -> &str {
        match self {
            Snippet::Raw(raw) => &raw.key,
            Snippet::Property(property) => &property.key,
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(self, Snippet::Property(_))
    }

    pub fn as_property(&self) -> Option<&PropertySnippet> {
        match self {
            Snippet::Property(property) => Some(property),
            Snippet::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawSnippet> {
        match self {
            Snippet::Raw(raw) => Some(raw),
            Snippet::Property(_) => None,
        }
    }
}

/// Parses the property-definition shape: a lowercase-letters-and-hyphens
/// identifier, optionally followed by a colon and a non-empty, non-newline
/// payload. Callers must additionally check that the whole input was
/// consumed.
fn parse_definition(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, property) = take_while1(|c: char| c.is_ascii_lowercase() || c == '-')(input)?;
    let (input, payload) = opt(preceded(
        tuple((space0, char(':'), space0)),
        take_while1(|c: char| c != '\n' && c != '\r'),
    ))(input)?;
    Ok((input, (property, payload)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(key: &str, definition: &str) -> Snippet {
        Snippet::parse(key, definition).unwrap()
    }

    #[test]
    fn property_with_alternatives() {
        let snippet = parse("d", "display:block|flex|grid");
        let property = snippet.as_property().unwrap();
        assert_eq!(property.key, "d");
        assert_eq!(property.property, "display");
        assert_eq!(property.values.len(), 3);
        assert_eq!(property.values[0], vec![Value::literal("block")]);
        assert_eq!(property.values[2], vec![Value::literal("grid")]);
        assert!(property.dependencies().is_empty());
    }

    #[test]
    fn property_without_payload() {
        let snippet = parse("c", "color");
        let property = snippet.as_property().unwrap();
        assert_eq!(property.property, "color");
        assert!(property.values.is_empty());
    }

    #[test]
    fn property_with_spaces_around_colon() {
        let snippet = parse("m", "margin : 0 auto");
        let property = snippet.as_property().unwrap();
        assert_eq!(property.property, "margin");
        assert_eq!(property.values.len(), 1);
        assert_eq!(property.values[0].len(), 2);
    }

    #[test]
    fn multi_node_alternatives_keep_order() {
        let snippet = parse("bd", "border:1px solid #000|none");
        let property = snippet.as_property().unwrap();
        assert_eq!(property.values.len(), 2);
        assert_eq!(property.values[0].len(), 3);
        assert_eq!(property.values[1], vec![Value::literal("none")]);
    }

    #[test]
    fn free_text_falls_back_to_raw() {
        let snippet = parse("note", "some arbitrary text");
        let raw = snippet.as_raw().unwrap();
        assert_eq!(raw.value, "some arbitrary text");
    }

    #[test]
    fn uppercase_identifier_is_raw() {
        assert!(!parse("x", "Display:block").is_property());
    }

    #[test]
    fn value_list_without_property_is_raw() {
        // No identifier-colon shape, so the whole string stays opaque.
        let snippet = parse("x", "block|flex|grid");
        assert!(!snippet.is_property());
    }

    #[test]
    fn unparseable_payload_is_fatal() {
        let result = Snippet::parse("bad", "color:@@");
        assert!(matches!(
            result,
            Err(SnippetError::InvalidValue { key, .. }) if key == "bad"
        ));
    }

    #[test]
    fn empty_alternative_is_fatal() {
        assert!(Snippet::parse("bad", "display:block||grid").is_err());
    }

    #[test]
    fn newline_in_payload_is_raw() {
        assert!(!parse("x", "color:red\nblue").is_property());
    }
}
