use crate::common::{fmt, fmt_at};

#[test]
fn test_paragraph_rewrap() {
    assert_eq!(fmt_at("aa bb cc dd ee", 8), "aa bb cc\ndd ee");
}

#[test]
fn test_paragraph_joins_source_lines() {
    assert_eq!(fmt("one\ntwo\nthree"), "one two three");
}

#[test]
fn test_h1_from_cheat_marker() {
    assert_eq!(fmt("= hello world"), "HELLO WORLD\n━━━━━━━━━━━");
}

#[test]
fn test_h2_from_cheat_marker() {
    assert_eq!(fmt("== Nice Title"), "Nice Title\n──────────");
}

#[test]
fn test_heading_then_paragraph() {
    assert_eq!(fmt("= intro\n\nSome text."), "INTRO\n━━━━━\nSome text.");
}

#[test]
fn test_heading_uppercase_is_unicode_aware() {
    assert_eq!(fmt("= héllo café"), "HÉLLO CAFÉ\n━━━━━━━━━━");
}

#[test]
fn test_heading_underline_matches_display_width() {
    // two-column ideographs get a two-column underline each
    assert_eq!(fmt("== 漢字"), "漢字\n────");
}

#[test]
fn test_compact_unordered_list() {
    assert_eq!(fmt("* one\n* two\n* three"), "• one\n• two\n• three");
}

#[test]
fn test_nested_unordered_list_by_indent() {
    assert_eq!(fmt("* one\n  * two\n* three"), "• one\n\n  ‣ two\n\n• three");
}

#[test]
fn test_nested_unordered_list_by_repeated_marker() {
    assert_eq!(fmt("* A\n** B\n* C"), "• A\n\n  ‣ B\n\n• C");
}

#[test]
fn test_bullet_cycle_at_third_level() {
    let out = fmt("* a\n  * b\n    * c");
    assert!(out.contains("• a"));
    assert!(out.contains("  ‣ b"));
    assert!(out.contains("    ⁃ c"));
}

#[test]
fn test_compact_ordered_list() {
    assert_eq!(fmt(". A\n. B\n. C"), "1. A\n2. B\n3. C");
}

#[test]
fn test_nested_ordered_list_alternates_markers() {
    assert_eq!(fmt(". A\n.. B\n. C"), "1. A\n\n   a) B\n\n2. C");
}

#[test]
fn test_ordered_numbers_right_aligned() {
    let items: Vec<String> = (1..=10).map(|n| format!(". item{n}")).collect();
    let out = fmt(&items.join("\n"));
    assert!(out.starts_with(" 1. item1\n"));
    assert!(out.ends_with("10. item10"));
}

#[test]
fn test_list_item_opening_with_bare_quote_marker() {
    // the empty quote vanishes; the bullet lands on the text line
    assert_eq!(fmt("* >\n  x"), "• x");
}

#[test]
fn test_multi_paragraph_list_item() {
    assert_eq!(
        fmt("* first\n\n  second\n* next"),
        "• first\n\n  second\n\n• next"
    );
}

#[test]
fn test_definition_list_shared_body() {
    assert_eq!(
        fmt("Apples:\nOranges:\n    Nice fruits."),
        "Apples:\nOranges:\n    Nice fruits."
    );
}

#[test]
fn test_definition_list_single_line_form() {
    assert_eq!(fmt("Online:: On the web."), "Online:\n    On the web.");
}

#[test]
fn test_definition_body_rewraps() {
    // 4 columns of indentation leave 8 for the definition text; runt
    // avoidance pulls "cc" down next to "dd"
    assert_eq!(fmt_at("Term:\n    aa bb cc dd", 12), "Term:\n    aa bb\n    cc dd");
}

#[test]
fn test_blockquote_prefixed() {
    assert_eq!(fmt("> A\n>\n> B"), "> A\n>\n> B");
}

#[test]
fn test_blockquote_nested_depth() {
    assert_eq!(fmt(">> deep"), "> > deep");
}

#[test]
fn test_blockquote_fenced() {
    assert_eq!(fmt(">>>\nquoted text\n>>>"), "> quoted text");
}

#[test]
fn test_blockquote_narrows_margin() {
    assert_eq!(fmt_at("> aa bb cc dd", 10), "> aa bb\n> cc dd");
}

#[test]
fn test_plain_admonition_boxed() {
    assert_eq!(
        fmt("NOTE: Stay hydrated."),
        "┌──────────────────────┐\n\
         │ NOTE: Stay hydrated. │\n\
         └──────────────────────┘"
    );
}

#[test]
fn test_fenced_admonition_multi_block() {
    assert_eq!(
        fmt("!!!\nWARNING: Thin ice.\n\nStay away.\n!!!"),
        "┌────────────────────┐\n\
         │ WARNING: Thin ice. │\n\
         │                    │\n\
         │ Stay away.         │\n\
         └────────────────────┘"
    );
}

#[test]
fn test_box_shrinks_to_edited_content() {
    // interior text was shortened by hand; the box refits around it
    let edited = "┌──────────────────────────────────┐\n\
                  │ TIP: Less.                       │\n\
                  └──────────────────────────────────┘";
    assert_eq!(
        fmt(edited),
        "┌────────────┐\n\
         │ TIP: Less. │\n\
         └────────────┘"
    );
}

#[test]
fn test_fenced_admonition_without_label_splices() {
    assert_eq!(fmt("!!!\njust text\n!!!"), "just text");
}

#[test]
fn test_break_spans_margin() {
    assert_eq!(fmt_at("***", 10), "┄┄┄┄┄┄┄┄┄┄");
}

#[test]
fn test_fenced_code_renders_indented() {
    assert_eq!(fmt("```\nlet x = 1;\n```"), "    let x = 1;");
}

#[test]
fn test_indented_code_kept_verbatim() {
    let code = "    if (x) {\n        y();\n    }";
    assert_eq!(fmt(code), code);
}

#[test]
fn test_code_never_rewrapped() {
    let code = "    one two three four five six seven eight nine ten";
    assert_eq!(fmt_at(code, 10), code);
}

#[test]
fn test_footnote_link_passes_through() {
    let line = "[1]: https://example.com/a";
    assert_eq!(fmt_at(line, 10), line);
}

#[test]
fn test_passthrough_after_paragraph() {
    assert_eq!(
        fmt("some text\n[1]: https://example.com"),
        "some text\n\n[1]: https://example.com"
    );
}

#[test]
fn test_unlabeled_box_passes_through() {
    let text = "┌────┐\n│ ?? │\n└────┘";
    assert_eq!(fmt(text), text);
}

#[test]
fn test_literal_span_not_broken() {
    assert_eq!(fmt_at("see `a b c` end", 8), "see\n`a b c`\nend");
}

#[test]
fn test_trailing_whitespace_dropped() {
    assert_eq!(fmt("hello   \n"), "hello");
}
