//! Block tree rendering
//!
//! Rendering is width-driven: every container narrows the margin by
//! its own indentation before rendering children, then prepends the
//! indentation to the child lines. Line ends are stripped once, at the
//! container level, so blank child lines and chunk padding never leak
//! trailing spaces.

use unicode_width::UnicodeWidthStr;

use crate::parse::{
    trim_trailing_blank_lines, Admonition, Block, Blockquote, CodeBlock, DefinitionList, Heading,
    HeadingLevel, List, ListItem, Paragraph,
};
use crate::reflow::reflow;
use crate::rules::RenderRules;

const BULLETS: [char; 3] = ['•', '‣', '⁃'];

pub(crate) struct Renderer<'a> {
    rules: &'a RenderRules,
    // how many unordered/ordered lists enclose the current block
    ul_depth: usize,
    ol_depth: usize,
}

impl<'a> Renderer<'a> {
    pub(crate) fn render(blocks: &[Block], rules: &RenderRules) -> String {
        let mut renderer = Renderer {
            rules,
            ul_depth: 0,
            ol_depth: 0,
        };

        renderer
            .blocks_lines(blocks, rules.max_line_len)
            .join("\n")
    }

    fn blocks_lines(&mut self, blocks: &[Block], width: usize) -> Vec<String> {
        let mut lines = Vec::new();

        for block in blocks {
            lines.extend(self.block_lines(block, width));
        }

        for line in &mut lines {
            let stripped = line.trim_end();

            if stripped.len() != line.len() {
                *line = stripped.to_string();
            }
        }

        trim_trailing_blank_lines(&mut lines);
        lines
    }

    fn block_lines(&mut self, block: &Block, width: usize) -> Vec<String> {
        match block {
            Block::Heading(heading) => self.heading_lines(heading),
            Block::Paragraph(paragraph) => self.paragraph_lines(paragraph, width),
            Block::Break => vec!["┄".repeat(width), String::new()],
            Block::List(list) => self.list_lines(list, width),
            Block::DefinitionList(dl) => self.definition_list_lines(dl, width),
            Block::Blockquote(quote) => self.blockquote_lines(quote, width),
            Block::Admonition(admon) => self.admonition_lines(admon, width),
            Block::CodeBlock(code) => code_lines(code),
            Block::Passthrough(pass) => vec![pass.line.clone()],
        }
    }

    // Headings carry no trailing blank line; the underline itself
    // separates them from the following block.
    fn heading_lines(&self, heading: &Heading) -> Vec<String> {
        let (title, rule) = match heading.level {
            HeadingLevel::H1 => (heading.text.plain().to_uppercase(), '━'),
            HeadingLevel::H2 => (heading.text.plain(), '─'),
        };

        let underline: String = std::iter::repeat(rule).take(title.width()).collect();
        vec![title, underline]
    }

    fn paragraph_lines(&self, paragraph: &Paragraph, width: usize) -> Vec<String> {
        let mut lines = reflow(&paragraph.text, width, self.rules.avoid_runts);
        lines.push(String::new());
        lines
    }

    fn list_lines(&mut self, list: &List, width: usize) -> Vec<String> {
        if list.ordered {
            self.ordered_lines(list, width)
        } else {
            self.unordered_lines(list, width)
        }
    }

    fn unordered_lines(&mut self, list: &List, width: usize) -> Vec<String> {
        let bullet = BULLETS[self.ul_depth % BULLETS.len()];
        self.ul_depth += 1;

        let mut lines = Vec::new();

        for item in &list.items {
            lines.extend(self.item_lines(item, &bullet.to_string(), width));
        }

        self.ul_depth -= 1;
        self.compact(list.items.len(), lines)
    }

    fn ordered_lines(&mut self, list: &List, width: usize) -> Vec<String> {
        // marker style alternates with depth so adjacent levels stay
        // visually distinct
        let numbered = self.ol_depth % 2 == 0;
        let num_width = list.items.len().to_string().len();
        self.ol_depth += 1;

        let mut lines = Vec::new();

        for (index, item) in list.items.iter().enumerate() {
            let marker = if numbered {
                format!("{:>num_width$}.", index + 1)
            } else {
                format!("{})", letter(index))
            };

            lines.extend(self.item_lines(item, &marker, width));
        }

        self.ol_depth -= 1;
        self.compact(list.items.len(), lines)
    }

    fn item_lines(&mut self, item: &ListItem, marker: &str, width: usize) -> Vec<String> {
        // bullets are multibyte, so indentation follows display width
        let indent = marker.width() + 1;
        let mut lines = self.indented_lines(&item.body, width, indent);

        // a body opening with an empty block (a bare `>`, say) renders
        // blank leading lines; the marker needs a content line
        while lines.first().is_some_and(|line| line.is_empty()) {
            lines.remove(0);
        }

        // the marker replaces the first line's indentation
        if lines.is_empty() {
            lines.push(marker.to_string());
        } else {
            lines[0] = format!("{marker} {}", &lines[0][indent..]);
        }

        lines.push(String::new());
        lines
    }

    // Single-line items separated by single blanks collapse to one
    // line apiece.
    fn compact(&self, item_count: usize, lines: Vec<String>) -> Vec<String> {
        if !self.rules.compact_lists || lines.len() != 2 * item_count {
            return lines;
        }

        let mut compacted: Vec<String> = lines.into_iter().filter(|line| !line.is_empty()).collect();
        compacted.push(String::new());
        compacted
    }

    fn definition_list_lines(&mut self, dl: &DefinitionList, width: usize) -> Vec<String> {
        let mut lines = Vec::new();

        for entry in &dl.entries {
            for term in &entry.terms {
                lines.push(format!("{}:", term.plain()));
            }

            lines.extend(self.indented_lines(&entry.body, width, 4));
            trim_trailing_blank_lines(&mut lines);
            lines.push(String::new());
        }

        lines
    }

    fn blockquote_lines(&mut self, quote: &Blockquote, width: usize) -> Vec<String> {
        let prefix = "> ".repeat(quote.depth);
        let inner_width = narrow(width, 2 * quote.depth);

        let mut lines: Vec<String> = self
            .blocks_lines(&quote.body, inner_width)
            .into_iter()
            .map(|line| format!("{prefix}{line}"))
            .collect();

        lines.push(String::new());
        lines
    }

    fn admonition_lines(&mut self, admon: &Admonition, width: usize) -> Vec<String> {
        let content = self.blocks_lines(&admon.body, narrow(width, 4));
        let longest = content.iter().map(|line| line.width()).max().unwrap_or(0);
        let rule = "─".repeat(longest);

        let mut lines = vec![format!("┌─{rule}─┐")];

        for line in &content {
            let pad = " ".repeat(longest - line.width());
            lines.push(format!("│ {line}{pad} │"));
        }

        lines.push(format!("└─{rule}─┘"));
        lines.push(String::new());
        lines
    }

    fn indented_lines(&mut self, blocks: &[Block], width: usize, indent: usize) -> Vec<String> {
        let pad = " ".repeat(indent);

        self.blocks_lines(blocks, narrow(width, indent))
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    format!("{pad}{line}")
                }
            })
            .collect()
    }
}

fn code_lines(code: &CodeBlock) -> Vec<String> {
    let mut lines: Vec<String> = code
        .lines
        .iter()
        .map(|line| format!("    {line}"))
        .collect();

    lines.push(String::new());
    lines
}

fn letter(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}

// Margins never narrow to nothing; one column always remains.
fn narrow(width: usize, by: usize) -> usize {
    width.saturating_sub(by).max(1)
}
