//! Integration tests for keyword extraction.
//!
//! Covers the extraction contract:
//! - keywords surface in worklist order, alternative order, first-seen
//! - deduplication is global across alternatives and dependency nodes
//! - raw snippets yield nothing; repeated calls yield equal sequences

use snipcss::{KeywordRef, SnippetSet};

fn set_from(definitions: &[(&str, &str)]) -> SnippetSet {
    SnippetSet::from_definitions(definitions.iter().copied()).unwrap()
}

fn keywords_for<'a>(set: &'a SnippetSet, key: &str) -> Vec<KeywordRef<'a>> {
    set.keywords(set.lookup(key).unwrap())
}

// ============================================================================
// SINGLE-SNIPPET EXTRACTION
// ============================================================================

#[test]
fn test_display_alternatives() {
    let set = set_from(&[("display", "display:block|flex|grid")]);
    let keywords = keywords_for(&set, "display");

    assert_eq!(
        keywords,
        vec![
            KeywordRef { keyword: "block", index: 0 },
            KeywordRef { keyword: "flex", index: 1 },
            KeywordRef { keyword: "grid", index: 2 },
        ]
    );
}

#[test]
fn test_index_is_alternative_position_not_node_position() {
    // Both keywords of the first alternative record index 0.
    let set = set_from(&[("bd", "border:1px solid red|none")]);
    let keywords = keywords_for(&set, "bd");

    assert_eq!(
        keywords,
        vec![
            KeywordRef { keyword: "solid", index: 0 },
            KeywordRef { keyword: "red", index: 0 },
            KeywordRef { keyword: "none", index: 1 },
        ]
    );
}

#[test]
fn test_function_name_is_a_keyword_but_arguments_are_not() {
    let set = set_from(&[(
        "bgi",
        "background-image:linear-gradient(to bottom, #fff)|none",
    )]);
    let keywords = keywords_for(&set, "bgi");

    // `to` and `bottom` live inside the call's arguments and are ignored.
    assert_eq!(
        keywords,
        vec![
            KeywordRef { keyword: "linear-gradient", index: 0 },
            KeywordRef { keyword: "none", index: 1 },
        ]
    );
}

#[test]
fn test_numbers_and_colors_carry_no_keywords() {
    let set = set_from(&[("p", "padding:0 10px|5%")]);
    assert!(keywords_for(&set, "p").is_empty());
}

#[test]
fn test_raw_snippet_yields_nothing() {
    let set = set_from(&[("note", "arbitrary free text")]);
    assert!(keywords_for(&set, "note").is_empty());
}

#[test]
fn test_duplicate_keyword_across_alternatives_kept_once() {
    let set = set_from(&[("ws", "white-space:nowrap|nowrap inherit")]);
    let keywords = keywords_for(&set, "ws");

    assert_eq!(
        keywords,
        vec![
            KeywordRef { keyword: "nowrap", index: 0 },
            KeywordRef { keyword: "inherit", index: 1 },
        ]
    );
}

// ============================================================================
// EXTRACTION ACROSS DEPENDENCIES
// ============================================================================

#[test]
fn test_shorthand_sees_longhand_keywords() {
    let set = set_from(&[
        ("background", "background:#000|none"),
        ("background-position", "background-position:top|bottom"),
        ("background-position-x", "background-position-x:left|right"),
    ]);
    let keywords = keywords_for(&set, "background");

    let texts: Vec<&str> = keywords.iter().map(|k| k.keyword).collect();
    assert_eq!(texts, vec!["none", "top", "bottom", "left", "right"]);
}

#[test]
fn test_longhand_does_not_see_shorthand_keywords() {
    let set = set_from(&[
        ("background", "background:#000|none"),
        ("background-position", "background-position:top|bottom"),
    ]);
    let texts: Vec<&str> = keywords_for(&set, "background-position")
        .iter()
        .map(|k| k.keyword)
        .collect();
    assert_eq!(texts, vec!["top", "bottom"]);
}

#[test]
fn test_first_seen_wins_across_nodes() {
    // `none` appears in the shorthand (alternative 1) and again in the
    // longhand (alternative 0); the shorthand's occurrence is recorded.
    let set = set_from(&[
        ("background", "background:#000|none"),
        ("background-image", "background-image:none|inherit"),
    ]);
    let keywords = keywords_for(&set, "background");

    assert_eq!(
        keywords,
        vec![
            KeywordRef { keyword: "none", index: 1 },
            KeywordRef { keyword: "inherit", index: 1 },
        ]
    );
}

#[test]
fn test_keywords_is_idempotent() {
    let set = set_from(&[
        ("background", "background:#000|none"),
        ("background-position", "background-position:top|bottom"),
    ]);
    let id = set.lookup("background").unwrap();

    assert_eq!(set.keywords(id), set.keywords(id));
}
