//! Floor-plan table anchors
//!
//! Derives overlay marker positions for restaurant tables from the raw path
//! data of their outlines, and renders the marker overlay as SVG.
//!
//! # Example
//!
//! ```rust
//! use floorplan_anchor::{resolve_top_left_anchor, Point};
//!
//! let anchor = resolve_top_left_anchor("M0,0h10v6h-10").unwrap();
//! assert_eq!(anchor, Point::new(0.0, 0.0));
//! ```

pub mod anchor;
pub mod error;
pub mod floorplan;
pub mod parser;
pub mod renderer;

pub use anchor::{
    quad_from_path, resolve_top_left_anchor, resolve_top_left_anchor_with_config, AnchorConfig,
    AnchorError, DegeneratePolicy, DegenerateSegment, Point, Quad, SegmentPosition,
};
pub use error::ParseError;
pub use floorplan::{FloorPlan, FloorPlanError, MarkerStyle, Orientation, TableAnchor, TableRecord};
pub use parser::{parse, PathData};
pub use renderer::{render_svg, SvgConfig};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the floor plan
    #[error("floor plan error: {0}")]
    FloorPlan(#[from] FloorPlanError),

    /// A table's outline could not be resolved
    #[error("table '{id}': {source}")]
    Table {
        id: String,
        #[source]
        source: AnchorError,
    },
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Anchor resolution configuration
    pub anchor: AnchorConfig,
    /// Zoom factor reported by the viewport; selects the marker fill
    pub zoom: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            svg: SvgConfig::default(),
            anchor: AnchorConfig::default(),
            zoom: 1.0,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the anchor resolution configuration
    pub fn with_anchor(mut self, config: AnchorConfig) -> Self {
        self.anchor = config;
        self
    }

    /// Set the viewport zoom factor
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }
}

/// Render a TOML floor plan to an SVG overlay with default configuration
///
/// # Example
///
/// ```rust
/// use floorplan_anchor::render;
///
/// let svg = render(r#"
///     [[tables]]
///     id = "T1"
///     d = "M10 20v5h8h-8z"
///     orientation = "vertical"
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"x="10" y="20""#));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML floor plan to an SVG overlay with custom configuration
///
/// # Example
///
/// ```rust
/// use floorplan_anchor::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_zoom(12.0)
///     .with_svg(SvgConfig::default().with_pretty_print(false));
///
/// let svg = render_with_config(r#"
///     [[tables]]
///     id = "T1"
///     d = "M0 0h10v6h-10z"
///     orientation = "horizontal"
/// "#, config).unwrap();
/// assert!(svg.contains(r#"fill="red""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let plan = FloorPlan::from_str(source)?;
    render_svg(&plan, config.zoom, &config.svg, &config.anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"
[[tables]]
id = "T1"
d = "M10 20v5h8h-8z"
orientation = "vertical"

[[tables]]
id = "T2"
d = "M1,1x5h3"
orientation = "horizontal"
"#;

    #[test]
    fn test_render_plan() {
        let svg = render(PLAN).unwrap();
        assert!(svg.contains(r#"id="T1""#));
        assert!(svg.contains(r#"id="T2""#));
        // Legacy fallback anchors the degenerate table at the origin
        assert!(svg.contains(r#"<svg class="fp-marker" x="0" y="0">"#));
    }

    #[test]
    fn test_strict_render_rejects_degenerate_table() {
        let config = RenderConfig::new().with_anchor(AnchorConfig::strict());
        let err = render_with_config(PLAN, config).unwrap_err();
        match err {
            RenderError::Table { id, source } => {
                assert_eq!(id, "T2");
                assert!(matches!(source, AnchorError::Degenerate(_)));
            }
            other => panic!("Expected table error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_error() {
        let err = render("this is not valid toml {{{{").unwrap_err();
        assert!(matches!(err, RenderError::FloorPlan(FloorPlanError::ParseError(_))));
    }
}
