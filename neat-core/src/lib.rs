//! Cheated plain text beautifier.
//!
//! Parses a loosely-written plain text document, where structure may
//! be "cheated" with lightweight markers (`= Title`, `* item`,
//! `. item`, `> quote`, `NOTE: ...`), and renders it back as strictly
//! aligned plain text: underlined headings, wrapped paragraphs,
//! bulleted and numbered lists, boxed admonitions.
//!
//! The output is a fixed point: feeding a rendered document back in
//! reproduces it byte for byte, so already-beautified text (and text
//! mixing cheated and beautified constructs) is safe to reformat.
//!
//! The main entry point is [`format`]; [`format_c_block_comment`] and
//! [`format_prefixed_block_comment`] apply the same formatting to
//! comments embedded in source code.

pub mod classify;
pub mod comment;
pub mod error;
pub mod parse;
pub mod reflow;
mod render;
pub mod rules;
pub mod span;

pub use comment::{format_c_block_comment, format_prefixed_block_comment};
pub use error::FormatError;
pub use rules::RenderRules;

/// Margin used when no explicit line length is given.
pub const DEFAULT_LINE_LEN: usize = 72;

/// Narrowest accepted margin; anything below cannot hold a box border
/// around a single column of content.
pub const MIN_LINE_LEN: usize = 8;

/// Formats the document `text` against a `max_line_len`-column margin.
///
/// The returned string has no trailing newline.
pub fn format(text: &str, max_line_len: usize) -> Result<String, FormatError> {
    format_with_rules(text, &RenderRules::with_max_line_len(max_line_len))
}

/// Formats the document `text` with full control over the rendering
/// rules.
pub fn format_with_rules(text: &str, rules: &RenderRules) -> Result<String, FormatError> {
    if rules.max_line_len < MIN_LINE_LEN {
        return Err(FormatError::LineLenTooSmall(rules.max_line_len));
    }

    let blocks = parse::parse_document(text);
    Ok(render::Renderer::render(&blocks, rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_tiny_margin() {
        assert!(matches!(
            format("hello", 3),
            Err(FormatError::LineLenTooSmall(3))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format("", 72).unwrap(), "");
    }
}
