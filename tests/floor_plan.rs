//! Integration tests for floor plan loading and overlay rendering

use std::path::Path;

use floorplan_anchor::{
    render_svg, render_with_config, AnchorConfig, FloorPlan, Orientation, Point, RenderConfig,
    RenderError, SvgConfig,
};
use pretty_assertions::assert_eq;

fn fixture() -> FloorPlan {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ground-floor.toml");
    FloorPlan::from_file(&path).expect("Fixture should load")
}

#[test]
fn test_fixture_loads() {
    let plan = fixture();
    assert_eq!(plan.name.as_deref(), Some("Ground floor"));
    assert_eq!(plan.tables.len(), 4);
    assert_eq!(plan.marker.zoom_threshold, 8.0);
    assert_eq!(
        plan.table("B1").map(|t| t.orientation),
        Some(Orientation::Horizontal)
    );
}

#[test]
fn test_fixture_anchors() {
    let plan = fixture();
    let anchors: Vec<(String, Point)> = plan
        .anchors(&AnchorConfig::default())
        .into_iter()
        .map(|a| (a.table.id.clone(), a.anchor.expect("Should resolve")))
        .collect();

    assert_eq!(anchors[0], ("S1".to_string(), Point::new(64.5, 39.25)));
    assert_eq!(anchors[1], ("S2".to_string(), Point::new(70.5, 39.25)));
    assert_eq!(anchors[2], ("B1".to_string(), Point::new(40.25, 12.0)));
    // Starts bottom-right and draws up, then jumps left with an absolute H
    assert_eq!(anchors[3], ("B2".to_string(), Point::new(47.25, 12.0)));
}

#[test]
fn test_one_marker_per_table() {
    let plan = fixture();
    let svg = render_svg(&plan, 1.0, &SvgConfig::default(), &AnchorConfig::default())
        .expect("Should render");
    assert_eq!(svg.matches("<path ").count(), 4);
    assert_eq!(svg.matches(r#"class="fp-marker""#).count(), 4);
    assert_eq!(svg.matches("<circle ").count(), 20);
    assert!(svg.contains(r#"<svg class="fp-marker" x="64.5" y="39.25">"#));
    assert!(svg.contains("<title>B2</title>"));
}

#[test]
fn test_marker_fill_follows_zoom() {
    let plan = fixture();
    let config = SvgConfig::default();

    let at_threshold = render_svg(&plan, 8.0, &config, &AnchorConfig::default()).unwrap();
    assert_eq!(at_threshold.matches(r#"fill="black""#).count(), 20);

    let zoomed_in = render_svg(&plan, 8.5, &config, &AnchorConfig::default()).unwrap();
    assert_eq!(zoomed_in.matches(r#"fill="red""#).count(), 20);
}

#[test]
fn test_custom_marker_style() {
    let source = r##"
[marker]
zoom_threshold = 2.0
fill_at_or_below = "#222222"
fill_above = "#ff5722"
dot_radius = 0.3

[[tables]]
id = "T1"
d = "M0 0v4h2h-2z"
orientation = "vertical"
"##;
    let config = RenderConfig::new()
        .with_zoom(3.0)
        .with_svg(SvgConfig::default().with_pretty_print(false));
    let svg = render_with_config(source, config).expect("Should render");
    assert!(svg.contains(r##"r="0.3" fill="#ff5722""##));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FloorPlan::from_file(Path::new("tests/fixtures/missing.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read floor plan file"));
}

#[test]
fn test_render_error_names_table() {
    let source = r#"
[[tables]]
id = "bar-3"
d = "M10 10"
orientation = "vertical"
"#;
    let err = render_with_config(source, RenderConfig::default()).unwrap_err();
    assert!(matches!(err, RenderError::Table { .. }));
    assert!(err.to_string().starts_with("table 'bar-3':"));
}
