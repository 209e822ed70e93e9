//! Floor plan definitions: table records and marker styling
//!
//! A floor plan is loaded from TOML. Each table carries the raw path data of
//! its outline; marker positions are derived from that path rather than
//! stored alongside it.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::anchor::{resolve_top_left_anchor_with_config, AnchorConfig, AnchorError, Point};

/// Errors that can occur when loading or parsing floor plans
#[derive(Error, Debug)]
pub enum FloorPlanError {
    #[error("Failed to read floor plan file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse floor plan TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("duplicate table id '{0}'")]
    DuplicateTable(String),
}

/// How a table is drawn on the plan; decides where the marker sits inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Offset of the marker's dot pattern from the table's anchor
    pub fn marker_offset(self) -> Point {
        match self {
            Orientation::Vertical => Point::new(1.0, 2.65),
            Orientation::Horizontal => Point::new(2.8, 1.05),
        }
    }
}

/// A single table on the plan
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableRecord {
    pub id: String,
    /// Outline path data (`M x y v .. h .. h ..`)
    pub d: String,
    pub orientation: Orientation,
}

impl TableRecord {
    /// Resolve the marker anchor for this table
    pub fn anchor(&self, config: &AnchorConfig) -> Result<Point, AnchorError> {
        resolve_top_left_anchor_with_config(&self.d, config)
    }
}

/// Dot positions of the marker icon, relative to the marker offset
const DOT_PATTERN: [(f64, f64); 5] = [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (0.0, 2.0), (2.0, 2.0)];

/// Marker styling owned by the rendering layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Zoom factors at or below this use `fill_at_or_below`
    pub zoom_threshold: f64,
    pub fill_at_or_below: String,
    pub fill_above: String,
    pub dot_radius: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            zoom_threshold: 8.0,
            fill_at_or_below: "black".to_string(),
            fill_above: "red".to_string(),
            dot_radius: 0.45,
        }
    }
}

impl MarkerStyle {
    /// Marker fill for the current zoom factor
    ///
    /// A NaN zoom (or threshold) is neither at/below nor above the threshold,
    /// so no fill is chosen and no marker is drawn.
    pub fn fill_for_zoom(&self, zoom: f64) -> Option<&str> {
        match zoom.partial_cmp(&self.zoom_threshold)? {
            Ordering::Less | Ordering::Equal => Some(self.fill_at_or_below.as_str()),
            Ordering::Greater => Some(self.fill_above.as_str()),
        }
    }

    /// Dot centers of the marker icon
    pub fn dots(&self) -> impl Iterator<Item = Point> {
        DOT_PATTERN.into_iter().map(|(x, y)| Point::new(x, y))
    }
}

/// A table together with its resolved anchor
#[derive(Debug, Clone, PartialEq)]
pub struct TableAnchor<'a> {
    pub table: &'a TableRecord,
    pub anchor: Result<Point, AnchorError>,
}

/// A complete floor plan
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloorPlan {
    /// Optional name for the floor plan
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub marker: MarkerStyle,
    pub tables: Vec<TableRecord>,
}

/// TOML structure for deserializing floor plans
#[derive(Deserialize)]
struct TomlFloorPlan {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    marker: MarkerStyle,
    #[serde(default)]
    tables: Vec<TableRecord>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl FloorPlan {
    /// Load floor plan from TOML file
    pub fn from_file(path: &Path) -> Result<Self, FloorPlanError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load floor plan from TOML string
    pub fn from_str(content: &str) -> Result<Self, FloorPlanError> {
        let parsed: TomlFloorPlan = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for table in &parsed.tables {
            if !seen.insert(table.id.as_str()) {
                return Err(FloorPlanError::DuplicateTable(table.id.clone()));
            }
        }
        debug!(tables = parsed.tables.len(), "loaded floor plan");

        Ok(FloorPlan {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            marker: parsed.marker,
            tables: parsed.tables,
        })
    }

    /// Look up a table by id
    pub fn table(&self, id: &str) -> Option<&TableRecord> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Resolve every table's anchor, keeping failures per table
    pub fn anchors(&self, config: &AnchorConfig) -> Vec<TableAnchor<'_>> {
        self.tables
            .iter()
            .map(|table| TableAnchor {
                table,
                anchor: table.anchor(config),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"
[metadata]
name = "Terrace"
description = "Outdoor seating"

[marker]
zoom_threshold = 4.0

[[tables]]
id = "T1"
d = "M10 20v5h8h-8z"
orientation = "vertical"

[[tables]]
id = "T2"
d = "M30 20h8v5h-8z"
orientation = "horizontal"
"#;

    #[test]
    fn test_parse_plan_with_metadata() {
        let plan = FloorPlan::from_str(PLAN).expect("Should parse");
        assert_eq!(plan.name, Some("Terrace".to_string()));
        assert_eq!(plan.description, Some("Outdoor seating".to_string()));
        assert_eq!(plan.tables.len(), 2);
        assert_eq!(plan.table("T2").map(|t| t.orientation), Some(Orientation::Horizontal));
        assert!(plan.table("T3").is_none());
    }

    #[test]
    fn test_partial_marker_table_keeps_defaults() {
        let plan = FloorPlan::from_str(PLAN).expect("Should parse");
        assert_eq!(plan.marker.zoom_threshold, 4.0);
        assert_eq!(plan.marker.fill_at_or_below, "black");
        assert_eq!(plan.marker.fill_above, "red");
        assert_eq!(plan.marker.dot_radius, 0.45);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let plan = FloorPlan::from_str("").expect("Should parse");
        assert_eq!(plan, FloorPlan::default());
    }

    #[test]
    fn test_zoom_threshold_is_inclusive() {
        let style = MarkerStyle::default();
        assert_eq!(style.fill_for_zoom(1.0), Some("black"));
        assert_eq!(style.fill_for_zoom(8.0), Some("black"));
        assert_eq!(style.fill_for_zoom(8.01), Some("red"));
        assert_eq!(style.fill_for_zoom(f64::INFINITY), Some("red"));
    }

    #[test]
    fn test_nan_zoom_has_no_fill() {
        let style = MarkerStyle::default();
        assert_eq!(style.fill_for_zoom(f64::NAN), None);
    }

    #[test]
    fn test_marker_offsets() {
        assert_eq!(Orientation::Vertical.marker_offset(), Point::new(1.0, 2.65));
        assert_eq!(Orientation::Horizontal.marker_offset(), Point::new(2.8, 1.05));
    }

    #[test]
    fn test_dot_pattern() {
        let dots: Vec<_> = MarkerStyle::default().dots().collect();
        assert_eq!(dots.len(), 5);
        assert_eq!(dots[2], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_anchors_resolved_per_table() {
        let mut plan = FloorPlan::from_str(PLAN).expect("Should parse");
        plan.tables.push(TableRecord {
            id: "broken".to_string(),
            d: "oops".to_string(),
            orientation: Orientation::Vertical,
        });

        let anchors = plan.anchors(&AnchorConfig::default());
        assert_eq!(anchors.len(), 3);
        assert_eq!(anchors[0].anchor, Ok(Point::new(10.0, 20.0)));
        assert_eq!(anchors[1].anchor, Ok(Point::new(30.0, 20.0)));
        assert!(anchors[2].anchor.is_err());
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let toml_str = r#"
[[tables]]
id = "A"
d = "M0 0v1h1h-1z"
orientation = "vertical"

[[tables]]
id = "A"
d = "M5 5v1h1h-1z"
orientation = "vertical"
"#;
        let err = FloorPlan::from_str(toml_str).unwrap_err();
        assert!(matches!(err, FloorPlanError::DuplicateTable(id) if id == "A"));
    }

    #[test]
    fn test_unknown_orientation_is_error() {
        let toml_str = r#"
[[tables]]
id = "A"
d = "M0 0v1h1h-1z"
orientation = "diagonal"
"#;
        assert!(matches!(
            FloorPlan::from_str(toml_str),
            Err(FloorPlanError::ParseError(_))
        ));
    }
}
