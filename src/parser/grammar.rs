//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::parser::ast::*;
use crate::parser::lexer::{lex, Token};

/// Parse a path command string into its command list
///
/// Only the token structure is checked here (letters followed by numbers);
/// which commands are required is decided by the anchor resolver.
pub fn parse(input: &str) -> Result<PathData, Vec<ParseError>> {
    let len = input.len();

    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for item in lex(input) {
        match item {
            Ok(pair) => tokens.push(pair),
            Err(span) => errors.push(ParseError::lex_error(input, span)),
        }
    }
    if !errors.is_empty() {
        debug!(errors = errors.len(), "path lexing failed");
        return Err(errors);
    }
    trace!(tokens = tokens.len(), "lexed path");

    let token_iter = tokens
        .into_iter()
        .map(|(tok, span)| (tok, SimpleSpan::from(span)));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    path_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn path_parser<'a, I>() -> impl Parser<'a, I, PathData, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    }
    .map_with(|n, e| Spanned::new(n, span_range(&e.span())));

    // A comma may follow any operand (`M10,20`)
    let operand = number.then_ignore(just(Token::Comma).or_not());

    let command = select! {
        Token::Command(c) => c,
    }
    .then(operand.repeated().collect::<Vec<_>>())
    .map_with(|(letter, operands), e| PathCommand {
        letter,
        operands,
        span: span_range(&e.span()),
    });

    command
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .map(|commands| PathData { commands })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangle() {
        let path = parse("M10,20v5h8h-8").expect("Should parse");
        assert_eq!(path.letters(), "Mvhh");
        assert_eq!(path.commands[0].values(), vec![10.0, 20.0]);
        assert_eq!(path.commands[1].values(), vec![5.0]);
        assert_eq!(path.commands[3].values(), vec![-8.0]);
    }

    #[test]
    fn test_command_spans() {
        let path = parse("M10,20 v5").expect("Should parse");
        assert_eq!(path.commands[0].span, 0..6);
        assert_eq!(path.commands[1].span, 7..9);
        assert_eq!(path.commands[1].letter_span(), 7..8);
        assert_eq!(path.commands[1].operands[0].span, 8..9);
    }

    #[test]
    fn test_closing_command_without_operands() {
        let path = parse("M0 0h10v6h-10z").expect("Should parse");
        assert_eq!(path.letters(), "Mhvhz");
        assert!(path.commands[4].operands.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let path = parse("").expect("Should parse");
        assert!(path.commands.is_empty());
    }

    #[test]
    fn test_number_before_command_is_error() {
        let errors = parse("10 M1,2").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ParseError::Syntax { .. }));
        assert_eq!(errors[0].span(), &(0..2));
    }

    #[test]
    fn test_double_comma_is_error() {
        let errors = parse("M1,,2").unwrap_err();
        assert!(matches!(errors[0], ParseError::Syntax { .. }));
    }

    #[test]
    fn test_unexpected_characters_collected() {
        let errors = parse("M1;2v#").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ParseError::UnexpectedCharacter { .. })));
    }

    #[test]
    fn test_overflowing_numbers_rejected() {
        let errors = parse("M0,1e999v-1e999h1").unwrap_err();
        assert_eq!(
            errors,
            vec![
                ParseError::InvalidNumber {
                    span: 3..8,
                    text: "1e999".to_string()
                },
                ParseError::InvalidNumber {
                    span: 9..15,
                    text: "-1e999".to_string()
                },
            ]
        );
    }
}
