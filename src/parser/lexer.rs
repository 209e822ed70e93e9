//! Lexer for path command strings using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    #[token(",")]
    Comma,

    // Every ASCII letter lexes as a command; unsupported ones are handled by the resolver
    #[regex(r"[A-Za-z]", |lex| lex.slice().chars().next())]
    Command(char),

    // Compact SVG numbers: signs, leading dots and exponents (`-8`, `.5`, `1e3`)
    #[regex(r"[-+]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][-+]?[0-9]+)?", finite_number)]
    Number(f64),
}

/// Numbers that overflow `f64` are lexer errors rather than infinities
fn finite_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Lex input string into tokens with spans
///
/// Characters that do not start any token are yielded as `Err(span)`.
pub fn lex(input: &str) -> impl Iterator<Item = Result<(Token, Span), Span>> + '_ {
    Token::lexer(input).spanned().map(|(tok, span)| match tok {
        Ok(t) => Ok((t, span)),
        Err(()) => Err(span),
    })
}

/// Format a token for human-readable error messages
pub fn format_token(tok: &Token) -> String {
    match tok {
        Token::Comma => "','".to_string(),
        Token::Command(c) => format!("command '{}'", c),
        Token::Number(n) => format!("number {}", n),
    }
}
