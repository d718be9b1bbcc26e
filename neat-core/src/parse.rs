//! Block structure parsing
//!
//! Recursive-descent parser over classified lines. List item bodies,
//! blockquote bodies and definition bodies are unindented and re-parsed
//! as independent sub-documents, so nesting depth falls out of the
//! recursion and child block columns are always relative to 0.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{
    classify, LineTag, BOX_LABEL, DEFINITION_SINGLE, DEFINITION_TERM, H1_PREFIX, H1_UNDERLINE,
    H2_PREFIX, H2_UNDERLINE, INDENTED_CONT, INDENTED_START, ITEM_CONT, ORDERED_ITEM,
    PASSTHROUGH_LINE, QUOTE_LINE, UNORDERED_ITEM,
};
use crate::span::TextRun;

// Interior lines of an already-rendered admonition box.
static BOX_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^│?\s*$").unwrap());
static BOX_CONTENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[│ ] ([^│]*)").unwrap());

/// Heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
}

/// The five recognized admonition labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmonitionKind {
    Caution,
    Important,
    Note,
    Tip,
    Warning,
}

impl AdmonitionKind {
    pub fn label(self) -> &'static str {
        match self {
            AdmonitionKind::Caution => "CAUTION",
            AdmonitionKind::Important => "IMPORTANT",
            AdmonitionKind::Note => "NOTE",
            AdmonitionKind::Tip => "TIP",
            AdmonitionKind::Warning => "WARNING",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "CAUTION" => Some(AdmonitionKind::Caution),
            "IMPORTANT" => Some(AdmonitionKind::Important),
            "NOTE" => Some(AdmonitionKind::Note),
            "TIP" => Some(AdmonitionKind::Tip),
            "WARNING" => Some(AdmonitionKind::Warning),
            _ => None,
        }
    }
}

/// One node of the block tree. Ownership is strictly tree-shaped: a
/// child block belongs to exactly one parent container.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    Break,
    List(List),
    DefinitionList(DefinitionList),
    Blockquote(Blockquote),
    Admonition(Admonition),
    CodeBlock(CodeBlock),
    Passthrough(Passthrough),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: TextRun,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: TextRun,
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// A list item body is itself a mini-document: nested lists,
/// paragraphs, code blocks and breaks are all permitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionList {
    pub entries: Vec<DefinitionEntry>,
}

/// One or more term lines sharing one definition body.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionEntry {
    pub terms: Vec<TextRun>,
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blockquote {
    pub depth: usize,
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Admonition {
    pub kind: AdmonitionKind,
    pub body: Vec<Block>,
}

/// Verbatim code lines; never reflowed or span-tokenized.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub lines: Vec<String>,
}

/// A line emitted unchanged, in its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct Passthrough {
    pub line: String,
}

/// Parses a whole document into its block tree.
pub fn parse_document(text: &str) -> Vec<Block> {
    let lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    Parser::parse_lines(lines, true)
}

pub(crate) struct Parser {
    lines: Vec<String>,
    at: usize,
    blocks: Vec<Block>,
    // Plain-form label paragraphs become boxed admonitions only at the
    // document level and inside item/quote bodies; inside an admonition
    // body they stay paragraphs so boxes never nest by accident.
    wrap_admonitions: bool,
}

impl Parser {
    pub(crate) fn parse_lines(lines: Vec<String>, wrap_admonitions: bool) -> Vec<Block> {
        let mut parser = Parser {
            lines,
            at: 0,
            blocks: Vec::new(),
            wrap_admonitions,
        };
        parser.run();
        parser.blocks
    }

    fn cur(&self) -> &str {
        self.lines.get(self.at).map(String::as_str).unwrap_or("")
    }

    fn next_line(&self) -> &str {
        self.lines
            .get(self.at + 1)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn advance(&mut self, count: usize) {
        self.at += count;
    }

    fn is_done(&self) -> bool {
        self.at >= self.lines.len()
    }

    fn skip_blank_lines(&mut self) {
        while !self.is_done() && self.cur().is_empty() {
            self.at += 1;
        }
    }

    fn run(&mut self) {
        loop {
            self.skip_blank_lines();

            if self.is_done() {
                break;
            }

            let before = self.at;

            if let Some(block) = self.parse_block() {
                self.blocks.push(block);
            } else if self.at == before {
                // nothing structured matched: degrade to paragraph text
                if let Some(block) = self.parse_paragraph() {
                    self.blocks.push(block);
                } else {
                    self.advance(1);
                }
            }
        }
    }

    // Dispatches on the classification of the current line. A `None`
    // return either consumed nothing (the caller degrades to a
    // paragraph) or spliced blocks into `self.blocks` directly.
    fn parse_block(&mut self) -> Option<Block> {
        match classify(self.cur(), LineTag::Blank) {
            LineTag::Heading1 => self.parse_prefixed_heading(HeadingLevel::H1),
            LineTag::Heading2 => self.parse_prefixed_heading(HeadingLevel::H2),
            LineTag::UnorderedItem => self.parse_list(false),
            LineTag::OrderedItem => self.parse_list(true),
            LineTag::DefinitionTerm => self
                .parse_definition_list()
                .or_else(|| self.parse_underlined_heading()),
            LineTag::CodeFence => self.parse_fenced_code(),
            LineTag::Indented => self.parse_indented_code(),
            LineTag::Break => {
                self.advance(1);
                Some(Block::Break)
            }
            LineTag::QuoteFence => self.parse_fenced_blockquote(),
            LineTag::QuoteLine => self.parse_prefixed_blockquote(),
            LineTag::AdmonitionFence => self.parse_fenced_admonition(),
            LineTag::BoxTop => self
                .parse_boxed_admonition()
                .or_else(|| self.parse_passthrough()),
            LineTag::Passthrough => self.parse_passthrough(),
            LineTag::AdmonitionLabel if self.wrap_admonitions => self.parse_plain_admonition(),
            LineTag::Blank
            | LineTag::HeadingUnderline
            | LineTag::AdmonitionLabel
            | LineTag::Text => self
                .parse_underlined_heading()
                .or_else(|| self.parse_paragraph()),
        }
    }

    // `= Title` / `== Title` prefix form; requires the following line to
    // be blank so a heading never swallows the start of a paragraph.
    fn parse_prefixed_heading(&mut self, level: HeadingLevel) -> Option<Block> {
        let prefix = match level {
            HeadingLevel::H1 => &H1_PREFIX,
            HeadingLevel::H2 => &H2_PREFIX,
        };

        let caps = prefix.captures(self.cur())?;

        if !self.next_line().is_empty() {
            return None;
        }

        let text = TextRun::tokenize(&caps[1]);
        self.advance(1);
        Some(Block::Heading(Heading { level, text }))
    }

    // Already-rendered form: a title line underlined with the rule
    // character of its level. The underline is absorbed and recomputed
    // at render time.
    fn parse_underlined_heading(&mut self) -> Option<Block> {
        let next = self.next_line();

        let level = if H1_UNDERLINE.is_match(next) {
            HeadingLevel::H1
        } else if H2_UNDERLINE.is_match(next) {
            HeadingLevel::H2
        } else {
            return None;
        };

        let text = TextRun::tokenize(self.cur());
        self.advance(2);
        Some(Block::Heading(Heading { level, text }))
    }

    fn parse_list(&mut self, ordered: bool) -> Option<Block> {
        let mut items = Vec::new();

        loop {
            // a blank line between items does not end the list
            self.skip_blank_lines();

            if self.is_done() {
                break;
            }

            let item = if ordered {
                self.parse_ordered_item()
            } else {
                self.parse_unordered_item()
            };

            match item {
                Some(item) => items.push(item),
                None => break,
            }
        }

        if items.is_empty() {
            return None;
        }

        Some(Block::List(List { ordered, items }))
    }

    fn parse_unordered_item(&mut self) -> Option<ListItem> {
        let caps = UNORDERED_ITEM.captures(self.cur())?;
        let marker_count = caps[1].chars().count();
        let mut lines = vec![caps[2].to_string()];
        self.advance(1);

        while !self.is_done() {
            let line = self.cur().to_string();

            if line.is_empty() {
                lines.push(line);
                self.advance(1);
                continue;
            }

            if ITEM_CONT.is_match(&line) {
                lines.push(line);
                self.advance(1);
                continue;
            }

            // Repeated-marker fallback: an unindented item whose cheat
            // marker is longer than ours nests under this item.
            if let Some(deeper) = UNORDERED_ITEM.captures(&line) {
                let count = deeper[1].chars().count();

                if count > marker_count {
                    let reduced: String = deeper[1].chars().skip(marker_count).collect();
                    lines.push(format!("{reduced} {}", &deeper[2]));
                    self.advance(1);
                    continue;
                }
            }

            break;
        }

        trim_trailing_blank_lines(&mut lines);

        Some(ListItem {
            body: Parser::parse_lines(unindent(lines, 2), self.wrap_admonitions),
        })
    }

    fn parse_ordered_item(&mut self) -> Option<ListItem> {
        let caps = ORDERED_ITEM.captures(self.cur())?;
        let prefix_len = caps[1].len();
        let dot_count = dot_marker_count(&caps[1]);
        let mut lines = vec![caps[2].to_string()];
        self.advance(1);

        let cont_prefix = " ".repeat(prefix_len);

        while !self.is_done() {
            let line = self.cur().to_string();

            if line.is_empty() {
                lines.push(line);
                self.advance(1);
                continue;
            }

            if line.starts_with(&cont_prefix) && line.len() > prefix_len {
                lines.push(line);
                self.advance(1);
                continue;
            }

            // Repeated-dot fallback, mirroring the unordered case.
            if let (Some(count), Some(deeper)) = (dot_count, ORDERED_ITEM.captures(&line)) {
                if let Some(deeper_count) = dot_marker_count(&deeper[1]) {
                    if deeper_count > count {
                        let reduced = ".".repeat(deeper_count - count);
                        lines.push(format!("{reduced} {}", &deeper[2]));
                        self.advance(1);
                        continue;
                    }
                }
            }

            break;
        }

        trim_trailing_blank_lines(&mut lines);

        Some(ListItem {
            body: Parser::parse_lines(unindent(lines, prefix_len), self.wrap_admonitions),
        })
    }

    fn parse_definition_list(&mut self) -> Option<Block> {
        let mut entries = Vec::new();

        loop {
            self.skip_blank_lines();

            if self.is_done() {
                break;
            }

            match self.parse_definition_entry() {
                Some(entry) => entries.push(entry),
                None => break,
            }
        }

        if entries.is_empty() {
            return None;
        }

        Some(Block::DefinitionList(DefinitionList { entries }))
    }

    fn parse_definition_entry(&mut self) -> Option<DefinitionEntry> {
        // single-line form: `Term:: definition`
        if let Some(caps) = DEFINITION_SINGLE.captures(self.cur()) {
            let terms = vec![TextRun::tokenize(&caps[1])];
            let body = vec![caps[2].to_string()];
            self.advance(1);

            return Some(DefinitionEntry {
                terms,
                body: Parser::parse_lines(body, self.wrap_admonitions),
            });
        }

        let begin = self.at;
        let mut terms = Vec::new();

        while !self.is_done() {
            match DEFINITION_TERM.captures(self.cur()) {
                Some(caps) => {
                    terms.push(TextRun::tokenize(&caps[1]));
                    self.advance(1);
                }
                None => break,
            }
        }

        if terms.is_empty() {
            self.at = begin;
            return None;
        }

        if self.is_done() || !INDENTED_START.is_match(self.cur()) {
            // terms without a definition body are ordinary text
            self.at = begin;
            return None;
        }

        let mut lines = Vec::new();

        while !self.is_done() {
            let line = self.cur().to_string();

            if line.is_empty() {
                lines.push(line);
                self.advance(1);
                continue;
            }

            if INDENTED_CONT.is_match(&line) {
                lines.push(line);
                self.advance(1);
                continue;
            }

            break;
        }

        trim_trailing_blank_lines(&mut lines);

        Some(DefinitionEntry {
            terms,
            body: Parser::parse_lines(unindent(lines, 4), self.wrap_admonitions),
        })
    }

    fn parse_fenced_code(&mut self) -> Option<Block> {
        let lines = self.parse_delim_block("```")?;
        Some(Block::CodeBlock(CodeBlock { lines }))
    }

    fn parse_indented_code(&mut self) -> Option<Block> {
        if !INDENTED_START.is_match(self.cur()) {
            return None;
        }

        let mut lines = Vec::new();

        while !self.is_done() {
            let line = self.cur().to_string();

            if line.is_empty() {
                lines.push(line);
                self.advance(1);
                continue;
            }

            if INDENTED_CONT.is_match(&line) {
                lines.push(line);
                self.advance(1);
                continue;
            }

            break;
        }

        trim_trailing_blank_lines(&mut lines);

        Some(Block::CodeBlock(CodeBlock {
            lines: unindent(lines, 4),
        }))
    }

    // Consumes a `delim`-to-`delim` block and returns its content
    // lines, or `None` when the content is empty (the block simply
    // vanishes) or the cursor is not at `delim`.
    fn parse_delim_block(&mut self, delim: &str) -> Option<Vec<String>> {
        if self.cur() != delim {
            return None;
        }

        self.advance(1);

        let mut lines = Vec::new();

        while !self.is_done() {
            if self.cur() == delim {
                self.advance(1);
                break;
            }

            lines.push(self.cur().to_string());
            self.advance(1);
        }

        trim_trailing_blank_lines(&mut lines);

        if lines.is_empty() {
            return None;
        }

        Some(lines)
    }

    fn parse_fenced_blockquote(&mut self) -> Option<Block> {
        let lines = self.parse_delim_block(">>>")?;
        let body = Parser::parse_lines(lines, self.wrap_admonitions);
        Some(Block::Blockquote(nest_quote(body)))
    }

    fn parse_prefixed_blockquote(&mut self) -> Option<Block> {
        let mut lines = Vec::new();

        while !self.is_done() {
            let line = self.cur();

            if line == ">>>" || !QUOTE_LINE.is_match(line) {
                break;
            }

            // strip exactly one quote level and recurse on the rest
            let stripped = &line[1..];
            let stripped = stripped.strip_prefix(' ').unwrap_or(stripped);
            lines.push(stripped.to_string());
            self.advance(1);
        }

        if lines.is_empty() {
            return None;
        }

        let body = Parser::parse_lines(lines, self.wrap_admonitions);
        Some(Block::Blockquote(nest_quote(body)))
    }

    fn parse_fenced_admonition(&mut self) -> Option<Block> {
        let lines = self.parse_delim_block("!!!")?;
        let body = Parser::parse_lines(lines, false);

        match admonition_kind(&body) {
            Some(kind) => Some(Block::Admonition(Admonition { kind, body })),
            None => {
                // no label, so a box could not be re-parsed: splice the
                // contents in as ordinary blocks
                self.blocks.extend(body);
                None
            }
        }
    }

    // A paragraph opening with `LABEL: ` renders as a boxed admonition.
    fn parse_plain_admonition(&mut self) -> Option<Block> {
        let paragraph = self.parse_paragraph()?;
        let body = vec![paragraph];

        match admonition_kind(&body) {
            Some(kind) => Some(Block::Admonition(Admonition { kind, body })),
            None => body.into_iter().next(),
        }
    }

    // Re-parses an already-rendered box: border stripped, interior
    // padding removed, wrapped lines rejoined by the recursive parse.
    fn parse_boxed_admonition(&mut self) -> Option<Block> {
        if !self.cur().starts_with('┌') || !BOX_LABEL.is_match(self.next_line()) {
            return None;
        }

        self.advance(1);

        let mut lines = Vec::new();

        while !self.is_done() {
            let line = self.cur().to_string();

            if line.starts_with('└') {
                self.advance(1);
                break;
            }

            if BOX_BLANK.is_match(&line) {
                lines.push(String::new());
                self.advance(1);
                continue;
            }

            if let Some(caps) = BOX_CONTENT.captures(&line) {
                lines.push(caps[1].trim_end().to_string());
            }

            self.advance(1);
        }

        let body = Parser::parse_lines(lines, false);

        match admonition_kind(&body) {
            Some(kind) => Some(Block::Admonition(Admonition { kind, body })),
            None => {
                self.blocks.extend(body);
                None
            }
        }
    }

    fn parse_passthrough(&mut self) -> Option<Block> {
        while !self.is_done() && PASSTHROUGH_LINE.is_match(self.cur()) {
            self.blocks.push(Block::Passthrough(Passthrough {
                line: self.cur().to_string(),
            }));
            self.advance(1);
        }

        None
    }

    fn parse_paragraph(&mut self) -> Option<Block> {
        let mut lines: Vec<String> = Vec::new();

        while !self.is_done() {
            let tag = classify(self.cur(), LineTag::Text);

            if matches!(
                tag,
                LineTag::Blank
                    | LineTag::UnorderedItem
                    | LineTag::OrderedItem
                    | LineTag::Passthrough
                    | LineTag::BoxTop
            ) {
                break;
            }

            lines.push(self.cur().to_string());
            self.advance(1);
        }

        if lines.is_empty() {
            return None;
        }

        // join continuation lines with single spaces and re-tokenize,
        // so a span is never torn by the original line breaks
        Some(Block::Paragraph(Paragraph {
            text: TextRun::tokenize(&lines.join(" ")),
        }))
    }
}

// Collapses a body that is exactly one nested quote into its parent,
// so `>> deep` parses to a single quote of depth 2.
fn nest_quote(mut body: Vec<Block>) -> Blockquote {
    if body.len() == 1 && matches!(body[0], Block::Blockquote(_)) {
        if let Some(Block::Blockquote(inner)) = body.pop() {
            return Blockquote {
                depth: inner.depth + 1,
                body: inner.body,
            };
        }
    }

    Blockquote { depth: 1, body }
}

fn admonition_kind(blocks: &[Block]) -> Option<AdmonitionKind> {
    let Some(Block::Paragraph(paragraph)) = blocks.first() else {
        return None;
    };

    let first = paragraph.text.spans.first()?;
    AdmonitionKind::from_label(first.text().strip_suffix(':')?)
}

// Number of repeated-dot cheat characters in an ordered marker, or
// `None` for the numeric/letter forms.
fn dot_marker_count(prefix: &str) -> Option<usize> {
    let marker = prefix.trim_end();

    if !marker.is_empty() && marker.chars().all(|ch| ch == '.') {
        Some(marker.len())
    } else {
        None
    }
}

// Unindents by `count` spaces when possible, keeping unindentable
// lines as is.
fn unindent(lines: Vec<String>, count: usize) -> Vec<String> {
    let prefix = " ".repeat(count);

    lines
        .into_iter()
        .map(|line| match line.strip_prefix(&prefix) {
            Some(rest) => rest.to_string(),
            None => line,
        })
        .collect()
}

pub(crate) fn trim_trailing_blank_lines(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
}
