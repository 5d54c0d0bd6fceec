//! Error types for the resolver.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// Compute "did you mean" suggestions for a name using Levenshtein distance.
///
/// Returns up to 3 suggestions with edit distance <= 2 (or <= 1 for short
/// names).
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.len() <= 3 { 1 } else { 2 };

    let mut scored: Vec<_> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(target, candidate);
            if dist <= max_distance && dist > 0 {
                Some((candidate.clone(), dist))
            } else {
                None
            }
        })
        .collect();

    scored.sort();
    scored.sort_by_key(|(_, dist)| *dist);
    scored.truncate(3);
    scored.into_iter().map(|(s, _)| s).collect()
}

pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// An error recorded during message resolution.
///
/// All resolution errors are non-fatal: the resolver appends them to the
/// caller's error list and substitutes a best-effort fallback value.
/// Formatting never panics and never aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    /// A reference to an unknown message, argument, attribute, variant, or
    /// function.
    #[error("reference error: {0}")]
    Reference(String),

    /// A structural bound was hit: a value-less message used as a value, a
    /// cyclic reference, or a placeable over the length cap.
    #[error("range error: {0}")]
    Range(String),

    /// An external argument or callable slot of an unsupported kind.
    #[error("type error: {0}")]
    Type(String),

    /// A syntax error raised by the parser during message installation.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<ParseError> for ResolverError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Syntax {
                line,
                column,
                message,
            } => ResolverError::Syntax {
                line,
                column,
                message,
            },
            ParseError::UnexpectedEof { line, column } => ResolverError::Syntax {
                line,
                column,
                message: "unexpected end of input".to_string(),
            },
        }
    }
}
