//! Error types for formatting operations

use std::fmt;

/// Errors that can surface from the formatting entry points.
///
/// Malformed markup never fails: classification ambiguity, unterminated
/// span delimiters and unbalanced boxes all degrade to plain text. The
/// only hard errors are an unusable target width and, at the comment
/// boundary, a line that does not carry the expected comment prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Requested line length is below the renderable minimum
    LineLenTooSmall(usize),
    /// A block comment line did not match the expected comment syntax
    CommentSyntax(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::LineLenTooSmall(len) => {
                write!(
                    f,
                    "Line length {len} is too small (minimum is {})",
                    crate::MIN_LINE_LEN
                )
            }
            FormatError::CommentSyntax(line) => {
                write!(f, "Invalid block comment line: {line:?}")
            }
        }
    }
}

impl std::error::Error for FormatError {}
