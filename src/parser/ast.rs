//! Syntax tree for path command strings

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A single drawing command and the numbers that follow it
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    /// Command letter exactly as written (`M`, `v`, `h`, `H`, ...)
    pub letter: char,
    pub operands: Vec<Spanned<f64>>,
    /// Span covering the letter and all of its operands
    pub span: Span,
}

impl PathCommand {
    /// Span of the command letter alone
    pub fn letter_span(&self) -> Span {
        self.span.start..self.span.start + self.letter.len_utf8()
    }

    /// Operand values without their spans
    #[cfg(test)]
    pub fn values(&self) -> Vec<f64> {
        self.operands.iter().map(|o| o.node).collect()
    }
}

/// Root AST node - a parsed path command string
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    /// Command letters in order, ignoring operands
    pub fn letters(&self) -> String {
        self.commands.iter().map(|c| c.letter).collect()
    }
}
