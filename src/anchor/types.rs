//! Core geometry types for anchor resolution

use std::fmt;

use crate::parser::ast::Span;

/// A 2D point in the path's coordinate system (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, used as the legacy fallback for unresolved corners
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which of the two interpreted line segments a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    /// The command right after the move; also drives the fourth corner
    Second,
    Third,
}

impl fmt::Display for SegmentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentPosition::Second => write!(f, "second"),
            SegmentPosition::Third => write!(f, "third"),
        }
    }
}

/// A segment whose command letter is outside the supported set
///
/// Its corner (and the fourth corner, for the second segment) falls back
/// to the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DegenerateSegment {
    pub position: SegmentPosition,
    pub letter: char,
    pub span: Span,
}

impl fmt::Display for DegenerateSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported {} segment command '{}' at {:?}",
            self.position, self.letter, self.span
        )
    }
}

/// The four reconstructed corners of a table outline, in traversal order
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub corners: [Point; 4],
    /// Segments that took the zero-point fallback
    pub degenerate: Vec<DegenerateSegment>,
}

impl Quad {
    pub fn new(corners: [Point; 4]) -> Self {
        Self {
            corners,
            degenerate: Vec::new(),
        }
    }

    /// Attach the segments that took the zero-point fallback
    pub fn with_degenerate(mut self, degenerate: Vec<DegenerateSegment>) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn first(&self) -> Point {
        self.corners[0]
    }

    pub fn second(&self) -> Point {
        self.corners[1]
    }

    pub fn third(&self) -> Point {
        self.corners[2]
    }

    pub fn fourth(&self) -> Point {
        self.corners[3]
    }

    /// Whether any corner came from the zero-point fallback
    pub fn is_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }

    /// Smallest x and smallest y over all four corners
    pub fn top_left(&self) -> Point {
        let x = self.corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let y = self.corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        Point::new(x, y)
    }

    /// Largest x and largest y over all four corners
    pub fn bottom_right(&self) -> Point {
        let x = self
            .corners
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let y = self
            .corners
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        Point::new(x, y)
    }
}
