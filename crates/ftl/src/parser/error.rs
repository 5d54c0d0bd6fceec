//! Parse error types for FTL resources.

use thiserror::Error;

/// An error that occurred while parsing a resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// Location of the error as `(line, column)`.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column } => (*line, *column),
        }
    }
}
