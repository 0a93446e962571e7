//! Lexer error type with source context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error produced when the scanner cannot tokenize the source.
///
/// Carries the position of the failure (1-based line and column plus the
/// byte offset) and a snippet of the surrounding source with a caret row
/// under the offending column. One error per parse; the scanner stops at
/// the first failure and no partial token stream is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub message: String,
    pub context: String,
}

impl SyntaxError {
    /// Build an error from 0-based scanner coordinates.
    pub(crate) fn at(source: &str, line: usize, column: usize, offset: usize, message: &str) -> Self {
        SyntaxError {
            line: line + 1,
            column: column + 1,
            offset,
            message: message.to_string(),
            context: format_source_context(source, line, column),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.line, self.column, self.message
        )?;
        writeln!(f)?;
        write!(f, "{}", self.context)
    }
}

impl std::error::Error for SyntaxError {}

/// Format source code context around an error location.
///
/// Shows the line before the error, the error line, a caret row under the
/// error column, and the line after. All lines are numbered for easy
/// reference. `line` and `column` are 0-based.
pub fn format_source_context(source: &str, line: usize, column: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() {
        return String::new();
    }
    // Errors raised at end of input sit one past the last line.
    let line = line.min(lines.len() - 1);
    let start_line = line.saturating_sub(1);
    let end_line = (line + 2).min(lines.len());

    let mut context = String::new();
    for line_num in start_line..end_line {
        if line_num >= lines.len() {
            break;
        }
        context.push_str(&format!("{:3} | {}\n", line_num + 1, lines[line_num]));
        if line_num == line {
            context.push_str(&format!("    | {}^^^^^^^^\n", " ".repeat(column)));
        }
    }
    context
}
