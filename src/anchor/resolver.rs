//! Rectangle reconstruction from parsed path commands
//!
//! A table outline is drawn as an absolute move followed by axis-aligned
//! line segments. Only the move and the next two commands are interpreted;
//! the fourth corner mirrors the second command's delta from the third.

use tracing::{trace, warn};

use crate::error::ParseError;
use crate::parser::ast::{PathCommand, PathData};

use super::config::{AnchorConfig, DegeneratePolicy};
use super::error::AnchorError;
use super::types::{DegenerateSegment, Point, Quad, SegmentPosition};

/// Move plus the two interpreted segments
const REQUIRED_COMMANDS: usize = 3;

/// An interpreted line segment
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// `v dy`
    Vertical(f64),
    /// `h dx`
    Horizontal(f64),
    /// `H x`
    HorizontalTo(f64),
    /// Unsupported letter; the corner falls back to the origin
    Degenerate(DegenerateSegment),
}

impl Segment {
    fn classify(
        command: &PathCommand,
        position: SegmentPosition,
    ) -> Result<Segment, ParseError> {
        // Operands of unsupported letters are never read
        let segment = match (position, command.letter) {
            (_, 'v') => Segment::Vertical(single_operand(command)?),
            (_, 'h') => Segment::Horizontal(single_operand(command)?),
            (SegmentPosition::Third, 'H') => Segment::HorizontalTo(single_operand(command)?),
            (position, letter) => Segment::Degenerate(DegenerateSegment {
                position,
                letter,
                span: command.letter_span(),
            }),
        };
        Ok(segment)
    }

    /// Corner reached by drawing this segment from `from`
    fn apply(&self, from: Point) -> Point {
        match self {
            Segment::Vertical(dy) => Point::new(from.x, from.y + dy),
            Segment::Horizontal(dx) => Point::new(from.x + dx, from.y),
            Segment::HorizontalTo(x) => Point::new(*x, from.y),
            Segment::Degenerate(_) => Point::zero(),
        }
    }

    /// Corner reached by undoing this segment's delta from `from`
    fn undo(&self, from: Point) -> Point {
        match self {
            Segment::Vertical(dy) => Point::new(from.x, from.y - dy),
            Segment::Horizontal(dx) => Point::new(from.x - dx, from.y),
            // Never produced for the second position
            Segment::HorizontalTo(_) | Segment::Degenerate(_) => Point::zero(),
        }
    }

    fn degenerate(&self) -> Option<&DegenerateSegment> {
        match self {
            Segment::Degenerate(d) => Some(d),
            _ => None,
        }
    }
}

fn single_operand(command: &PathCommand) -> Result<f64, ParseError> {
    match command.operands.as_slice() {
        [value] => Ok(value.node),
        operands => Err(ParseError::OperandCount {
            span: command.span.clone(),
            command: command.letter,
            expected: 1,
            found: operands.len(),
        }),
    }
}

fn move_to(command: &PathCommand) -> Result<Point, ParseError> {
    if command.letter != 'M' {
        return Err(ParseError::ExpectedMoveTo {
            span: command.letter_span(),
            found: command.letter,
        });
    }
    match command.operands.as_slice() {
        [x, y] => Ok(Point::new(x.node, y.node)),
        operands => Err(ParseError::OperandCount {
            span: command.span.clone(),
            command: command.letter,
            expected: 2,
            found: operands.len(),
        }),
    }
}

/// Reconstruct the four corners of a rectangle outline
pub fn resolve_quad(path: &PathData, config: &AnchorConfig) -> Result<Quad, AnchorError> {
    let [mv, second, third] = match path.commands.get(..REQUIRED_COMMANDS) {
        Some([mv, second, third]) => [mv, second, third],
        _ => {
            let span = match (path.commands.first(), path.commands.last()) {
                (Some(first), Some(last)) => first.span.start..last.span.end,
                _ => 0..0,
            };
            return Err(ParseError::TooFewCommands {
                span,
                expected: REQUIRED_COMMANDS,
                found: path.commands.len(),
            }
            .into());
        }
    };

    let first_point = move_to(mv)?;
    let first_segment = Segment::classify(second, SegmentPosition::Second)?;
    let second_segment = Segment::classify(third, SegmentPosition::Third)?;

    let degenerate: Vec<DegenerateSegment> = [&first_segment, &second_segment]
        .into_iter()
        .filter_map(Segment::degenerate)
        .cloned()
        .collect();

    for segment in &degenerate {
        match config.degenerate {
            DegeneratePolicy::Reject => return Err(AnchorError::Degenerate(segment.clone())),
            DegeneratePolicy::ZeroFallback => {
                warn!(
                    letter = %segment.letter,
                    position = %segment.position,
                    "unsupported segment command, corner falls back to origin"
                );
            }
        }
    }

    let second_point = first_segment.apply(first_point);
    let third_point = second_segment.apply(second_point);
    let fourth_point = first_segment.undo(third_point);

    trace!(
        commands = %path.letters(),
        first = %first_point,
        second = %second_point,
        third = %third_point,
        fourth = %fourth_point,
        "reconstructed quad"
    );

    let quad = Quad::new([first_point, second_point, third_point, fourth_point]);
    Ok(quad.with_degenerate(degenerate))
}
