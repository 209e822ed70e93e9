//! Error types for anchor resolution

use thiserror::Error;

use crate::error::ParseError;

use super::types::DegenerateSegment;

/// Errors that can occur while resolving a table anchor
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnchorError {
    /// The path string is malformed
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// A segment command is unsupported and the policy rejects the fallback
    #[error("{0}")]
    Degenerate(DegenerateSegment),
}

impl AnchorError {
    /// Parse errors, if this is a parse failure
    pub fn parse_errors(&self) -> &[ParseError] {
        match self {
            Self::Parse(errors) => errors,
            Self::Degenerate(_) => &[],
        }
    }
}

impl From<Vec<ParseError>> for AnchorError {
    fn from(errors: Vec<ParseError>) -> Self {
        AnchorError::Parse(errors)
    }
}

impl From<ParseError> for AnchorError {
    fn from(error: ParseError) -> Self {
        AnchorError::Parse(vec![error])
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
