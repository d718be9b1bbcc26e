//! Block comment formatting
//!
//! Wrappers around the document formatter for comments embedded in
//! source code. The comment decoration is stripped, the content is
//! formatted against the margin that remains once the decoration and
//! the comment's starting column are paid for, and the decoration is
//! put back.

use crate::error::FormatError;
use crate::parse::parse_document;
use crate::render::Renderer;
use crate::rules::RenderRules;
use crate::MIN_LINE_LEN;

/// Reformats a C/C++ block comment, `/*` through `*/`, whose opening
/// delimiter sits at column `start_col` in its source file.
///
/// Every content line must carry the leading ` * ` joint. The returned
/// string starts at the `/*` itself; the caller re-inserts it at
/// `start_col`.
pub fn format_c_block_comment(
    comment: &str,
    start_col: usize,
    max_line_len: usize,
) -> Result<String, FormatError> {
    if max_line_len < MIN_LINE_LEN {
        return Err(FormatError::LineLenTooSmall(max_line_len));
    }

    let mut content_lines: Vec<&str> = Vec::new();

    for line in comment.lines() {
        let trimmed = line.trim();

        if trimmed == "/*" || trimmed == "*/" {
            continue;
        }

        if trimmed == "*" {
            content_lines.push("");
            continue;
        }

        match trimmed.strip_prefix("* ") {
            Some(rest) if !rest.is_empty() => content_lines.push(rest),
            _ => return Err(FormatError::CommentSyntax(trimmed.to_string())),
        }
    }

    // three columns of decoration: ` * `
    let formatted = format_content(&content_lines, content_width(max_line_len, start_col, 3));

    let indent = " ".repeat(start_col);
    let mut lines = vec!["/*".to_string()];

    for line in formatted.lines() {
        lines.push(format!("{indent} * {line}").trim_end().to_string());
    }

    lines.push(format!("{indent} */"));
    Ok(lines.join("\n"))
}

/// Reformats a line-prefixed block comment (for example `# ` lines in
/// a shell script) starting at column `start_col`.
///
/// Every line must carry `prefix`; a line holding just the trimmed
/// prefix is a blank content line.
pub fn format_prefixed_block_comment(
    comment: &str,
    start_col: usize,
    max_line_len: usize,
    prefix: &str,
) -> Result<String, FormatError> {
    if max_line_len < MIN_LINE_LEN {
        return Err(FormatError::LineLenTooSmall(max_line_len));
    }

    let bare_prefix = prefix.trim_end();
    let mut content_lines: Vec<&str> = Vec::new();

    for line in comment.lines() {
        let trimmed = line.trim();

        if trimmed == bare_prefix {
            content_lines.push("");
            continue;
        }

        match trimmed.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() => content_lines.push(rest),
            _ => return Err(FormatError::CommentSyntax(trimmed.to_string())),
        }
    }

    let formatted = format_content(
        &content_lines,
        content_width(max_line_len, start_col, prefix.len()),
    );

    let indent = " ".repeat(start_col);

    let lines: Vec<String> = formatted
        .lines()
        .map(|line| format!("{indent}{prefix}{line}").trim_end().to_string())
        .collect();

    Ok(lines.join("\n"))
}

fn format_content(content_lines: &[&str], width: usize) -> String {
    let blocks = parse_document(&content_lines.join("\n"));
    let rules = RenderRules::with_max_line_len(width);
    Renderer::render(&blocks, &rules)
}

fn content_width(max_line_len: usize, start_col: usize, decoration: usize) -> usize {
    max_line_len.saturating_sub(start_col + decoration).max(1)
}
