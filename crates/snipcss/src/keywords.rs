//! Keyword extraction over nested snippets.
//!
//! A keyword is a literal token or function name extractable from a
//! property's possible values. The extractor walks one property snippet and
//! its transitive dependencies breadth-first, so resolving an abbreviation
//! against a shorthand like `background` also surfaces the keywords of its
//! longhand extensions.

use std::collections::HashSet;

use crate::nest::SnippetSet;
use crate::snippet::{Snippet, SnippetId};
use cssvalue::Value;

/// A keyword discovered during extraction.
///
/// `index` points back into the `values` alternatives of the snippet node
/// where the keyword was first seen, letting the expansion engine
/// reconstruct the concrete matched value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordRef<'a> {
    /// Keyword text usable for abbreviation matching.
    pub keyword: &'a str,
    /// Position of the producing alternative within the originating
    /// snippet's value alternatives.
    pub index: usize,
}

impl SnippetSet {
    /// Collects the deduplicated keywords reachable from `id`.
    ///
    /// Raw snippets yield an empty list. For property snippets the walk is
    /// breadth-first over the dependency graph, using a growing worklist
    /// with a read cursor: a node already enqueued is never enqueued again,
    /// so the traversal terminates even if the graph was (malformedly)
    /// constructed with a cycle or a diamond.
    ///
    /// Keywords are deduplicated by text across the whole traversal; the
    /// first occurrence wins and records the alternative index within the
    /// node where it was found. Output order is worklist order, then
    /// alternative order, then first-seen.
    pub fn keywords(&self, id: SnippetId) -> Vec<KeywordRef<'_>> {
        let mut worklist = vec![id];
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        let mut cursor = 0;

        while cursor < worklist.len() {
            let snippet = self.get(worklist[cursor]);
            cursor += 1;

            let Snippet::Property(property) = snippet else {
                continue;
            };

            for (index, alternative) in property.values.iter().enumerate() {
                for value in alternative {
                    let Some(keyword) = keyword_of(value) else {
                        continue;
                    };
                    if seen.insert(keyword) {
                        keywords.push(KeywordRef { keyword, index });
                    }
                }
            }

            for &dependency in property.dependencies() {
                if !worklist.contains(&dependency) {
                    worklist.push(dependency);
                }
            }
        }

        keywords
    }
}

/// Keyword carried by a single value node, if any.
///
/// Literals contribute their text, function calls their name (arguments are
/// not inspected); numbers, colors, and strings carry no keyword.
fn keyword_of(value: &Value) -> Option<&str> {
    match value {
        Value::Literal(text) => Some(text),
        Value::FunctionCall(call) => Some(&call.name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_from(definitions: &[(&str, &str)]) -> SnippetSet {
        SnippetSet::from_definitions(definitions.iter().copied()).unwrap()
    }

    fn keyword_texts<'a>(set: &'a SnippetSet, key: &str) -> Vec<&'a str> {
        let id = set.lookup(key).unwrap();
        set.keywords(id).iter().map(|k| k.keyword).collect()
    }

    #[test]
    fn keyword_of_value_nodes() {
        assert_eq!(keyword_of(&Value::literal("block")), Some("block"));
        assert_eq!(
            keyword_of(&Value::FunctionCall(cssvalue::FunctionCall::new(
                "linear-gradient",
                vec![Value::literal("to"), Value::literal("bottom")],
            ))),
            Some("linear-gradient")
        );
        assert_eq!(
            keyword_of(&Value::Number(cssvalue::NumberValue::unitless(0.0))),
            None
        );
    }

    #[test]
    fn diamond_dependencies_visit_once() {
        // Forge a diamond: both parents point at the same child. The child's
        // keywords must come out once.
        let mut set = set_from(&[
            ("pad", "padding:0"),
            ("pad-x", "padding-x:auto"),
        ]);
        let child = set.lookup("pad-x").unwrap();
        let parent = set.lookup("pad").unwrap();
        if let Snippet::Property(p) = &mut set.snippets[parent.0] {
            // Second edge to the same child.
            p.dependencies.push(child);
        }

        assert_eq!(keyword_texts(&set, "pad"), vec!["auto"]);
    }

    #[test]
    fn cyclic_dependencies_terminate() {
        // Artificially construct a cycle: a -> b and b -> a. Extraction must
        // terminate and return the union of both nodes' keywords once each.
        let mut set = set_from(&[
            ("flex", "flex:auto|none"),
            ("grid", "grid:dense"),
        ]);
        let a = set.lookup("flex").unwrap();
        let b = set.lookup("grid").unwrap();
        if let Snippet::Property(p) = &mut set.snippets[a.0] {
            p.dependencies.push(b);
        }
        if let Snippet::Property(p) = &mut set.snippets[b.0] {
            p.dependencies.push(a);
        }

        assert_eq!(keyword_texts(&set, "flex"), vec!["auto", "none", "dense"]);
        assert_eq!(keyword_texts(&set, "grid"), vec!["dense", "auto", "none"]);
    }

    #[test]
    fn self_cycle_terminates() {
        let mut set = set_from(&[("flex", "flex:auto")]);
        let a = set.lookup("flex").unwrap();
        if let Snippet::Property(p) = &mut set.snippets[a.0] {
            p.dependencies.push(a);
        }
        assert_eq!(keyword_texts(&set, "flex"), vec!["auto"]);
    }
}
