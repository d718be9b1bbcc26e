//! Inline span tokenization
//!
//! Splits paragraph text into the spans the reflow engine may never
//! break: backtick literals, emphasized runs, bare call tokens and
//! plain words. Spans keep their source delimiters so rendering them is
//! a plain join and reformatting the output tokenizes back to the same
//! spans.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

// A literal may open with a bracket and absorbs trailing punctuation,
// so "(`vec.size()`)," stays one unbreakable token.
static LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[(\[{]?`[^`]*`\S*").unwrap());
static EMPHASIS_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[(\[{]?_[^_]+_\S*").unwrap());
static EMPHASIS_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[(\[{]?\*[^*]+\*\S*").unwrap());
static CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*\(\)\S*").unwrap());

/// One inline span. Immutable once tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain word; breakable between words only.
    Word(String),
    /// Backtick-delimited literal, verbatim content, never split.
    Literal(String),
    /// `_..._`/`*...*` run or an all-uppercase word, never split.
    Emphasis(String),
    /// A bare `name()` token, never split.
    Call(String),
}

impl Span {
    /// Source text of the span, delimiters included.
    pub fn text(&self) -> &str {
        match self {
            Span::Word(text) | Span::Literal(text) | Span::Emphasis(text) | Span::Call(text) => {
                text
            }
        }
    }

    /// Display width of the span in terminal columns.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text())
    }
}

/// An ordered sequence of spans, the unit of text the reflow engine
/// lays out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRun {
    pub spans: Vec<Span>,
}

impl TextRun {
    /// Tokenizes one logical line of text (paragraph lines are joined
    /// before tokenization, so a span can never straddle a source line
    /// break).
    pub fn tokenize(text: &str) -> Self {
        let mut spans = Vec::new();
        let mut at = 0;

        while at < text.len() {
            let rest = &text[at..];

            if let Some(ch) = rest.chars().next().filter(|ch| ch.is_whitespace()) {
                at += ch.len_utf8();
                continue;
            }

            if let Some(m) = LITERAL.find(rest) {
                spans.push(Span::Literal(m.as_str().to_string()));
                at += m.end();
                continue;
            }

            if let Some(m) = EMPHASIS_UNDERSCORE
                .find(rest)
                .or_else(|| EMPHASIS_STAR.find(rest))
            {
                spans.push(Span::Emphasis(m.as_str().to_string()));
                at += m.end();
                continue;
            }

            if let Some(m) = CALL.find(rest) {
                spans.push(Span::Call(m.as_str().to_string()));
                at += m.end();
                continue;
            }

            let word = next_word(rest);
            at += word.len();

            if word.len() >= 2 && word.chars().all(|ch| ch.is_ascii_uppercase()) {
                spans.push(Span::Emphasis(word.to_string()));
            } else {
                spans.push(Span::Word(word.to_string()));
            }
        }

        TextRun { spans }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Joins the spans back into plain text with single spaces.
    pub fn plain(&self) -> String {
        let words: Vec<&str> = self.spans.iter().map(Span::text).collect();
        words.join(" ")
    }
}

// Scans a plain word: everything up to the next whitespace or the next
// literal opener (a backtick, possibly behind a bracket). An
// unterminated delimiter falls in here and stays part of the word. The
// first character is always consumed so the scan makes progress.
fn next_word(rest: &str) -> &str {
    let mut chars = rest.char_indices().peekable();
    chars.next();

    while let Some(&(idx, ch)) = chars.peek() {
        if ch.is_whitespace() || ch == '`' {
            return &rest[..idx];
        }

        if matches!(ch, '(' | '[' | '{') && rest[idx + ch.len_utf8()..].starts_with('`') {
            return &rest[..idx];
        }

        chars.next();
    }

    rest
}
