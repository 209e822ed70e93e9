//! SVG generation for table outlines and markers

use tracing::debug;

use crate::anchor::{quad_from_path, AnchorConfig, Point};
use crate::floorplan::{FloorPlan, MarkerStyle, TableRecord};
use crate::RenderError;

use super::SvgConfig;

/// Extent of everything drawn, used for the viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    min: Point,
    max: Point,
}

impl Extent {
    fn union(self, min: Point, max: Point) -> Extent {
        Extent {
            min: Point::new(self.min.x.min(min.x), self.min.y.min(min.y)),
            max: Point::new(self.max.x.max(max.x), self.max.y.max(max.y)),
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push(&mut self, element: String) {
        self.elements.push(format!("{}{}", self.indent_str(), element));
    }

    fn open(&mut self, element: String) {
        self.push(element);
        self.indent += 1;
    }

    fn close(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push(format!("</{}>", tag));
    }

    /// Open the group holding one table
    pub fn start_table(&mut self, id: &str) {
        let prefix = self.prefix();
        self.open(format!(
            r#"<g class="{}table" id="{}">"#,
            prefix,
            escape_xml(id)
        ));
    }

    /// Close a table group
    pub fn end_table(&mut self) {
        self.close("g");
    }

    /// Add a table outline with its id as tooltip
    pub fn add_outline(&mut self, id: &str, d: &str) {
        let prefix = self.prefix();
        self.push(format!(
            r#"<path class="{}outline" d="{}" fill="{}" stroke="{}" stroke-linecap="round" stroke-width="{}"><title>{}</title></path>"#,
            prefix,
            escape_xml(d),
            escape_xml(&self.config.outline_fill),
            escape_xml(&self.config.outline_stroke),
            self.config.outline_stroke_width,
            escape_xml(id)
        ));
    }

    /// Add the five-dot marker at `anchor`, shifted by `offset`
    pub fn add_marker(&mut self, anchor: Point, offset: Point, style: &MarkerStyle, fill: &str) {
        let prefix = self.prefix();
        self.open(format!(
            r#"<svg class="{}marker" x="{}" y="{}">"#,
            prefix, anchor.x, anchor.y
        ));
        self.open(format!(
            r#"<g transform="translate({}, {})">"#,
            offset.x, offset.y
        ));
        for dot in style.dots() {
            self.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                dot.x,
                dot.y,
                style.dot_radius,
                escape_xml(fill)
            ));
        }
        self.close("g");
        self.close("svg");
    }

    /// Build the final SVG string
    fn build(self, extent: Option<Extent>) -> String {
        let padding = self.config.viewbox_padding;
        let (min, max) = extent
            .map(|e| (e.min, e.max))
            .unwrap_or((Point::zero(), Point::zero()));
        let vb_x = min.x - padding;
        let vb_y = min.y - padding;
        let vb_w = max.x - min.x + 2.0 * padding;
        let vb_h = max.y - min.y + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render the table overlay of a floor plan at the given zoom factor
pub fn render_svg(
    plan: &FloorPlan,
    zoom: f64,
    config: &SvgConfig,
    anchor_config: &AnchorConfig,
) -> Result<String, RenderError> {
    let mut builder = SvgBuilder::new(config.clone());
    let fill = plan.marker.fill_for_zoom(zoom);
    debug!(zoom, ?fill, tables = plan.tables.len(), "rendering floor plan overlay");

    let mut extent: Option<Extent> = None;
    for table in &plan.tables {
        let (min, max) = render_table(table, &plan.marker, fill, anchor_config, &mut builder)?;
        extent = Some(match extent {
            Some(e) => e.union(min, max),
            None => Extent { min, max },
        });
    }

    Ok(builder.build(extent))
}

/// Render one table; returns the outline's corner extent
///
/// Without a fill the outline is drawn but the marker is left out.
fn render_table(
    table: &TableRecord,
    style: &MarkerStyle,
    fill: Option<&str>,
    anchor_config: &AnchorConfig,
    builder: &mut SvgBuilder,
) -> Result<(Point, Point), RenderError> {
    let quad = quad_from_path(&table.d, anchor_config).map_err(|source| RenderError::Table {
        id: table.id.clone(),
        source,
    })?;
    let anchor = quad.top_left();

    builder.start_table(&table.id);
    builder.add_outline(&table.id, &table.d);
    if let Some(fill) = fill {
        builder.add_marker(anchor, table.orientation.marker_offset(), style, fill);
    }
    builder.end_table();

    Ok((anchor, quad.bottom_right()))
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
