//! Output options for the table overlay SVG

/// How the overlay document and the table outlines are written
///
/// Marker geometry and fills live in [`crate::MarkerStyle`], since they come
/// from the floor plan file; everything here is a property of the output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Margin around the union of all table outlines, in plan units
    pub viewbox_padding: f64,

    /// Emit an `<?xml ...?>` declaration so the overlay can be saved on its own
    pub standalone: bool,

    /// One element per line, nested by table and marker
    pub pretty_print: bool,

    /// Prepended to the `table`, `outline` and `marker` class names
    pub class_prefix: Option<String>,

    /// Table outline fill
    pub outline_fill: String,

    /// Table outline stroke color
    pub outline_stroke: String,

    /// Table outline stroke width, in plan units
    pub outline_stroke_width: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 1.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("fp-".to_string()),
            outline_fill: "#fff".to_string(),
            outline_stroke: "#636363".to_string(),
            outline_stroke_width: 0.106,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Leave out the XML declaration when embedding the overlay in a page
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Use bare `table`/`outline`/`marker` class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Restyle the table outlines drawn under each marker
    pub fn with_outline(
        mut self,
        fill: impl Into<String>,
        stroke: impl Into<String>,
        stroke_width: f64,
    ) -> Self {
        self.outline_fill = fill.into();
        self.outline_stroke = stroke.into();
        self.outline_stroke_width = stroke_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_floor_plan_artwork() {
        let config = SvgConfig::default();
        assert_eq!(config.viewbox_padding, 1.0);
        assert!(config.standalone);
        assert_eq!(config.class_prefix.as_deref(), Some("fp-"));
        assert_eq!(config.outline_fill, "#fff");
        assert_eq!(config.outline_stroke, "#636363");
        assert_eq!(config.outline_stroke_width, 0.106);
    }

    #[test]
    fn test_embedded_overlay_config() {
        let config = SvgConfig::new()
            .with_viewbox_padding(0.5)
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("plan-")
            .with_outline("none", "#333", 0.2);

        assert_eq!(config.viewbox_padding, 0.5);
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix.as_deref(), Some("plan-"));
        assert_eq!(config.outline_fill, "none");
        assert_eq!(config.outline_stroke_width, 0.2);
        assert_eq!(config.without_class_prefix().class_prefix, None);
    }
}
