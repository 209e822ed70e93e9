//! Error types for path parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("unexpected character {found:?} at {span:?}")]
    UnexpectedCharacter { span: Span, found: String },

    #[error("number {text} at {span:?} is out of range")]
    InvalidNumber { span: Span, text: String },

    #[error("expected at least {expected} path commands, found {found}")]
    TooFewCommands {
        span: Span,
        expected: usize,
        found: usize,
    },

    #[error("path must start with an absolute move 'M', found '{found}'")]
    ExpectedMoveTo { span: Span, found: char },

    #[error("command '{command}' takes {expected} operand(s), found {found}")]
    OperandCount {
        span: Span,
        command: char,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    /// Create an unexpected character error for the given source span
    pub fn unexpected_character(source: &str, span: Span) -> Self {
        let found = source.get(span.clone()).unwrap_or_default().to_string();
        Self::UnexpectedCharacter { span, found }
    }

    /// Classify a span the lexer could not turn into a token
    ///
    /// Well-formed numbers only fail to lex when they overflow `f64`.
    pub fn lex_error(source: &str, span: Span) -> Self {
        let text = source.get(span.clone()).unwrap_or_default();
        if text.parse::<f64>().is_ok() {
            Self::InvalidNumber {
                span,
                text: text.to_string(),
            }
        } else {
            Self::unexpected_character(source, span)
        }
    }

    /// Source span the error points at
    pub fn span(&self) -> &Span {
        match self {
            Self::Syntax { span, .. }
            | Self::UnexpectedCharacter { span, .. }
            | Self::InvalidNumber { span, .. }
            | Self::TooFewCommands { span, .. }
            | Self::ExpectedMoveTo { span, .. }
            | Self::OperandCount { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let label_message = match self {
            ParseError::Syntax {
                message, expected, ..
            } if !expected.is_empty() => {
                format!("{}\nExpected: {}", message, expected.join(", "))
            }
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label_message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::parser::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::parser::lexer::Token>) -> Self {
        use crate::parser::lexer::format_token;
        use chumsky::error::{RichPattern, RichReason};

        let message = match err.reason() {
            RichReason::Custom(msg) => msg.to_string(),
            _ => match err.found() {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of input".to_string(),
            },
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(tok) => Some(format_token(tok)),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of input".to_string()),
                _ => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}
