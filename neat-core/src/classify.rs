//! Line classification
//!
//! Tags one raw input line with the block construct it most likely
//! introduces. Classification is a pure function over the line plus the
//! tag of the line before it; the parser owns all lookahead and every
//! ambiguous case degrades to [`LineTag::Text`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading prefix cheats: `= Title` and `== Title`.
pub(crate) static H1_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^= (\S.*)$").unwrap());
pub(crate) static H2_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^== (\S.*)$").unwrap());

/// Already-rendered heading underlines.
pub(crate) static H1_UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^━+\s*$").unwrap());
pub(crate) static H2_UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^─+\s*$").unwrap());

/// Unordered item start. The marker may be a rendered bullet, a `*`
/// cheat or any dash-class character; a repeated marker signals nesting
/// depth when the author did not indent.
pub(crate) static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([*•‣⁃‐‑‒–—―−-]+) (\S.*)$").unwrap());

/// Ordered item start: `. `, `1. ` (possibly right-aligned with leading
/// spaces), repeated `..` cheats, or `a) ` letter markers. The captured
/// prefix includes the separating space so its length is the content
/// column of the item.
pub(crate) static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((?: *\d+\.|\.+|[a-z]\)) )(\S.*)$").unwrap());

/// Definition term line (`Term:`) and single-line entry (`Term:: def`).
pub(crate) static DEFINITION_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S.*):$").unwrap());
pub(crate) static DEFINITION_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S.*):: (\S.*)$").unwrap());

/// Blockquote line: one or more `>` followed by a space or end of line.
pub(crate) static QUOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(>+)(?: (.*))?$").unwrap());

/// Thematic break: the `***` cheat or an already-rendered `┄` rule.
pub(crate) static BREAK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\*{3,}|┄{3,})$").unwrap());

/// Lines passed through untouched: link references and anything opening
/// with a box-drawing character (tables, diagrams) outside a recognized
/// admonition box.
pub(crate) static PASSTHROUGH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?: *\[\d+\]: [hf]|[│┃┆┇┊┋┌┍┎┏└┕┖┗├┝┞┟┠┡┢┣╎╏║╒╓╔╘╙╚╞╟╠╽╿]).+").unwrap()
});

/// First content line of a rendered admonition box.
pub(crate) static BOX_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^│ (CAUTION|IMPORTANT|NOTE|TIP|WARNING): ").unwrap());

/// Plain-form admonition start.
pub(crate) static ADMONITION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(CAUTION|IMPORTANT|NOTE|TIP|WARNING): \S").unwrap());

/// Four-space indented content (code block lines, definition bodies).
pub(crate) static INDENTED_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^    \S").unwrap());
pub(crate) static INDENTED_CONT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^    .").unwrap());

/// Two-space indented continuation of an unordered list item.
pub(crate) static ITEM_CONT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^  .").unwrap());

/// Provisional block kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    Blank,
    Heading1,
    Heading2,
    HeadingUnderline,
    UnorderedItem,
    OrderedItem,
    DefinitionTerm,
    QuoteLine,
    QuoteFence,
    AdmonitionFence,
    AdmonitionLabel,
    CodeFence,
    Indented,
    Break,
    BoxTop,
    Passthrough,
    Text,
}

/// Classifies `line` given the tag of the immediately preceding line.
///
/// `prev` disambiguates the context-sensitive cases: a heading
/// underline is only an underline when a text line precedes it, and an
/// indented line continues a paragraph instead of opening a code block
/// when it follows text directly.
pub fn classify(line: &str, prev: LineTag) -> LineTag {
    if line.is_empty() {
        return LineTag::Blank;
    }

    if line == "```" {
        return LineTag::CodeFence;
    }

    if line == ">>>" {
        return LineTag::QuoteFence;
    }

    if line == "!!!" {
        return LineTag::AdmonitionFence;
    }

    if BREAK_LINE.is_match(line) {
        return LineTag::Break;
    }

    if line.starts_with('┌') && PASSTHROUGH_LINE.is_match(line) {
        return LineTag::BoxTop;
    }

    if PASSTHROUGH_LINE.is_match(line) {
        return LineTag::Passthrough;
    }

    if H2_PREFIX.is_match(line) {
        return LineTag::Heading2;
    }

    if H1_PREFIX.is_match(line) {
        return LineTag::Heading1;
    }

    if H1_UNDERLINE.is_match(line) || H2_UNDERLINE.is_match(line) {
        // only an underline when there is a title line to underline
        return if prev == LineTag::Text {
            LineTag::HeadingUnderline
        } else {
            LineTag::Text
        };
    }

    if UNORDERED_ITEM.is_match(line) {
        return LineTag::UnorderedItem;
    }

    if ORDERED_ITEM.is_match(line) {
        return LineTag::OrderedItem;
    }

    if QUOTE_LINE.is_match(line) {
        return LineTag::QuoteLine;
    }

    if ADMONITION_LABEL.is_match(line) {
        return LineTag::AdmonitionLabel;
    }

    if DEFINITION_SINGLE.is_match(line) || DEFINITION_TERM.is_match(line) {
        return LineTag::DefinitionTerm;
    }

    if INDENTED_CONT.is_match(line) && prev != LineTag::Text {
        return LineTag::Indented;
    }

    LineTag::Text
}
