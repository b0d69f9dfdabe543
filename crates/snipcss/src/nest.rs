//! [`SnippetSet`] construction and shorthand-to-longhand nesting.
//!
//! Nesting makes broader (shorthand) properties "see" their narrower
//! (longhand) properties' keywords: resolving an abbreviation against
//! `background` also exposes keywords reachable through
//! `background-position` and `background-position-x`.
//!
//! The linking pass relies on one load-bearing precondition: the snippet
//! list is sorted ascending by key in byte/code-point order. Because the
//! hyphen sorts after every letter, each shorthand lands immediately before
//! the run of its longhand extensions (`background` < `background-position`
//! < `background-position-x` < `border`), and a single ancestor stack walk
//! over the sorted list recovers the whole forest.

use crate::error::SnippetError;
use crate::snippet::{Snippet, SnippetId};

/// A sorted, frozen collection of snippets with shorthand dependency edges.
///
/// Construction is the single writer: the input list is sorted, dependency
/// edges are linked, and the result is immutable thereafter - every accessor
/// takes `&self`.
#[derive(Clone, Debug, PartialEq)]
pub struct SnippetSet {
    pub(crate) snippets: Vec<Snippet>,
}

impl SnippetSet {
    /// Builds and nests a set straight from `(key, definition)` pairs.
    ///
    /// The first definition whose value payload fails to parse aborts the
    /// whole build - partial-registry recovery is a caller concern.
    pub fn from_definitions<K, D, I>(definitions: I) -> Result<Self, SnippetError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: AsRef<str>,
    {
        let snippets = definitions
            .into_iter()
            .map(|(key, definition)| Snippet::parse(key, definition.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(snippets))
    }

    /// Sorts the snippets by key, links shorthand properties to their
    /// longhand extensions, and freezes the result.
    ///
    /// The input multiset is preserved: raw snippets pass through untouched
    /// at their sorted position, and no snippet is duplicated or dropped.
    /// Duplicate keys are tolerated (callers own key uniqueness) but logged.
    pub fn new(mut snippets: Vec<Snippet>) -> Self {
        snippets.sort_by(|a, b| a.key().cmp(b.key()));
        link_shorthands(&mut snippets);

        log::debug!(
            "nested {} snippets ({} properties)",
            snippets.len(),
            snippets.iter().filter(|s| s.is_property()).count(),
        );
        SnippetSet { snippets }
    }

    /// All snippets in ascending key order.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Resolves a snippet id minted by this set.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different set with more snippets.
    pub fn get(&self, id: SnippetId) -> &Snippet {
        &self.snippets[id.0]
    }

    /// Finds the snippet registered under `key`.
    ///
    /// If duplicate keys slipped in, the first of the run wins.
    pub fn lookup(&self, key: &str) -> Option<SnippetId> {
        let index = self.snippets.partition_point(|s| s.key() < key);
        if index < self.snippets.len() && self.snippets[index].key() == key {
            Some(SnippetId(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Iterates snippets with their ids, in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (SnippetId, &Snippet)> {
        self.snippets
            .iter()
            .enumerate()
            .map(|(index, snippet)| (SnippetId(index), snippet))
    }
}

/// Links each property snippet to its closest shorthand ancestor.
///
/// Walks the key-sorted list with an explicit ancestor stack of indices.
/// Each stack entry's property name is a strict hyphen-boundary prefix of
/// the one above it, so the structure can never cycle. Raw snippets are
/// skipped and leave the stack untouched.
fn link_shorthands(snippets: &mut [Snippet]) {
    let mut stack: Vec<usize> = Vec::new();

    for i in 0..snippets.len() {
        if i > 0 && snippets[i].key() == snippets[i - 1].key() {
            log::warn!("duplicate snippet key '{}'", snippets[i].key());
        }
        if !snippets[i].is_property() {
            continue;
        }

        loop {
            let Some(&top) = stack.last() else {
                // No shorthand ancestor among previously seen properties.
                stack.push(i);
                break;
            };

            let is_child = match (&snippets[i], &snippets[top]) {
                (Snippet::Property(cur), Snippet::Property(prev)) => {
                    is_longhand_of(&cur.property, &prev.property)
                }
                _ => false,
            };

            if is_child {
                if let Snippet::Property(parent) = &mut snippets[top] {
                    parent.dependencies.push(SnippetId(i));
                }
                stack.push(i);
                break;
            }

            // `top` cannot be an ancestor of anything sorted after `i`.
            stack.pop();
        }
    }
}

/// True when `child` extends `parent` across a hyphen boundary:
/// `background-position` extends `background`, `borderx` does not extend
/// `border`.
fn is_longhand_of(child: &str, parent: &str) -> bool {
    child.len() > parent.len()
        && child.starts_with(parent)
        && child.as_bytes()[parent.len()] == b'-'
}
