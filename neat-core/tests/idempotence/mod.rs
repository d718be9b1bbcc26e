//! Formatting is a fixed point: rendering a rendered document must
//! reproduce it byte for byte.

use crate::common::{fmt, fmt_at};

fn assert_fixed_point(text: &str) {
    let once = fmt(text);
    assert_eq!(fmt(&once), once, "not a fixed point:\n{once}");
}

#[test]
fn test_headings() {
    assert_fixed_point("= main title\n\n== a section");
}

#[test]
fn test_paragraphs() {
    assert_fixed_point("First paragraph here.\n\nSecond one, a bit longer than the first.");
}

#[test]
fn test_lists() {
    assert_fixed_point("* one\n* two\n\n. A\n. B\n\n* outer\n  * inner\n    * deepest");
}

#[test]
fn test_definition_lists() {
    assert_fixed_point("Apples:\nOranges:\n    Nice fruits.\n\nOnline:: On the web.");
}

#[test]
fn test_blockquotes() {
    assert_fixed_point("> level one\n\n>> level two");
}

#[test]
fn test_admonitions() {
    assert_fixed_point("NOTE: Stay hydrated.");
    assert_fixed_point("!!!\nWARNING: Thin ice.\n\nStay away.\n!!!");
}

#[test]
fn test_code_blocks() {
    assert_fixed_point("```\nlet x = 1;\n\nlet y = 2;\n```");
    assert_fixed_point("    indented();");
}

#[test]
fn test_breaks_and_passthrough() {
    assert_fixed_point("before\n\n***\n\nafter");
    assert_fixed_point("see the link [1]\n\n[1]: https://example.com/a");
}

#[test]
fn test_kitchen_sink() {
    let doc = "\
= user guide

Welcome to the guide, a `truly great` document.

== setup

Install it:

    $ make install

NOTE: Root is not required.

Steps:

. download
. build
. enjoy

Terms:
    Words defined _below_ the line.

> Simplicity is the ultimate sophistication.

***

* alpha
* beta
  * gamma
";
    assert_fixed_point(doc);
}

#[test]
fn test_kitchen_sink_narrow() {
    let doc = "some words that will wrap when the margin narrows down\n\n* item one here\n* item two here";
    let once = fmt_at(doc, 24);
    assert_eq!(fmt_at(&once, 24), once);
}
