//! Anchor resolution: path string to top-left corner
//!
//! This module takes a path command string describing a table outline and
//! reconstructs its corners to find where an overlay marker is anchored.

pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use config::{AnchorConfig, DegeneratePolicy};
pub use error::AnchorError;
pub use resolver::resolve_quad;
pub use types::{DegenerateSegment, Point, Quad, SegmentPosition};

use crate::parser::parse;

/// Parse a path string and reconstruct its four corners
pub fn quad_from_path(source: &str, config: &AnchorConfig) -> Result<Quad, AnchorError> {
    let path = parse(source)?;
    resolve_quad(&path, config)
}

/// Top-left anchor of a rectangle path with the default (legacy) policy
///
/// # Example
///
/// ```rust
/// use floorplan_anchor::{resolve_top_left_anchor, Point};
///
/// let anchor = resolve_top_left_anchor("M10,20v5h8h-8").unwrap();
/// assert_eq!(anchor, Point::new(10.0, 20.0));
/// ```
pub fn resolve_top_left_anchor(source: &str) -> Result<Point, AnchorError> {
    resolve_top_left_anchor_with_config(source, &AnchorConfig::default())
}

/// Top-left anchor of a rectangle path with a custom configuration
pub fn resolve_top_left_anchor_with_config(
    source: &str,
    config: &AnchorConfig,
) -> Result<Point, AnchorError> {
    quad_from_path(source, config).map(|quad| quad.top_left())
}
