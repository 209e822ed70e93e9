//! SVG renderer for the table overlay layer
//!
//! This module takes a FloorPlan and produces an SVG string with each
//! table outline and its marker placed at the resolved anchor.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
