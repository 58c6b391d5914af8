//! SVG output for clipping scenes.
//!
//! # Example
//!
//! ```
//! use rectclip::render::{SvgRenderer, SvgStyle};
//! use rectclip::{ClipWindow, Scene, Segment2};
//!
//! let mut scene = Scene::new();
//! scene.add_segment(Segment2::from_coords(-10.0, -10.0, 10.0, 10.0));
//! scene.set_window(ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap());
//!
//! let mut svg = SvgRenderer::new(SvgStyle::default());
//! scene.draw(&mut svg);
//! scene.run_clip(&mut svg);
//!
//! let document = svg.finish();
//! assert!(document.starts_with("<svg"));
//! assert!(document.contains("M -5 -5 L 5 5"));
//! ```

use super::{Layer, Renderer};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline vertices
/// * `closed` - Whether to close the path with 'Z'
///
/// # Returns
///
/// An SVG path string using M and L commands, or an empty string for no points.
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in rest {
        result.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to a closed SVG path string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    polyline_to_svg_path(polygon.open_vertices(), true)
}

/// Appearance of an [`SvgRenderer`] document.
///
/// Coordinates are in scene units with y pointing up. The defaults reproduce a
/// 50 x 50 unit plot centred on the origin with a unit grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Lower-left corner of the visible area.
    pub view_min: (f64, f64),
    /// Upper-right corner of the visible area.
    pub view_max: (f64, f64),
    /// Width of the document in pixels; height follows the aspect ratio.
    pub pixel_width: f64,
    /// Grid line spacing in scene units; `None` disables the grid and axes.
    pub grid_step: Option<f64>,
    /// Stroke width in scene units.
    pub stroke_width: f64,
    pub window_color: String,
    pub source_color: String,
    pub outline_color: String,
    pub clipped_color: String,
    /// Opacity of filled clipped polygons.
    pub fill_opacity: f64,
}

impl SvgStyle {
    fn color(&self, layer: Layer) -> &str {
        match layer {
            Layer::Window => self.window_color.as_str(),
            Layer::Source => self.source_color.as_str(),
            Layer::Outline => self.outline_color.as_str(),
            Layer::Clipped => self.clipped_color.as_str(),
        }
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            view_min: (-25.0, -25.0),
            view_max: (25.0, 25.0),
            pixel_width: 600.0,
            grid_step: Some(1.0),
            stroke_width: 0.1,
            window_color: "green".to_string(),
            source_color: "black".to_string(),
            outline_color: "red".to_string(),
            clipped_color: "blue".to_string(),
            fill_opacity: 0.5,
        }
    }
}

/// A [`Renderer`] that builds an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    style: SvgStyle,
    content: String,
}

impl SvgRenderer {
    /// Creates a renderer with an empty canvas.
    pub fn new(style: SvgStyle) -> Self {
        Self {
            style,
            content: String::new(),
        }
    }

    /// Returns the complete SVG document.
    pub fn finish(&self) -> String {
        let (x0, y0) = self.style.view_min;
        let (x1, y1) = self.style.view_max;
        let width = (x1 - x0).max(f64::EPSILON);
        let height = (y1 - y0).max(f64::EPSILON);
        let pixel_height = self.style.pixel_width * height / width;

        let mut doc = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            self.style.pixel_width, pixel_height, x0, -y1, width, height
        );
        doc.push('\n');
        doc.push_str(r#"<rect x="-1e6" y="-1e6" width="2e6" height="2e6" fill="white"/>"#);
        doc.push('\n');
        doc.push_str(r#"<g transform="scale(1,-1)">"#);
        doc.push('\n');
        if let Some(step) = self.style.grid_step {
            doc.push_str(&self.grid(step));
        }
        doc.push_str(&self.content);
        doc.push_str("</g>\n</svg>\n");
        doc
    }

    fn grid(&self, step: f64) -> String {
        let (x0, y0) = self.style.view_min;
        let (x1, y1) = self.style.view_max;
        let thin = self.style.stroke_width * 0.2;
        let mut grid = String::new();

        if step > 0.0 {
            let mut i = (x0 / step).ceil();
            while i * step <= x1 {
                grid.push_str(&format!(
                    r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#ccc" stroke-width="{}"/>"##,
                    i * step, y0, i * step, y1, thin
                ));
                grid.push('\n');
                i += 1.0;
            }
            let mut j = (y0 / step).ceil();
            while j * step <= y1 {
                grid.push_str(&format!(
                    r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#ccc" stroke-width="{}"/>"##,
                    x0, j * step, x1, j * step, thin
                ));
                grid.push('\n');
                j += 1.0;
            }
        }

        // Axes
        let axis = self.style.stroke_width * 0.5;
        grid.push_str(&format!(
            r#"<line x1="{}" y1="0" x2="{}" y2="0" stroke="black" stroke-width="{}"/>"#,
            x0, x1, axis
        ));
        grid.push('\n');
        grid.push_str(&format!(
            r#"<line x1="0" y1="{}" x2="0" y2="{}" stroke="black" stroke-width="{}"/>"#,
            y0, y1, axis
        ));
        grid.push('\n');
        grid
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(SvgStyle::default())
    }
}

impl<F: Float + fmt::Display> Renderer<F> for SvgRenderer {
    fn stroke(&mut self, layer: Layer, points: &[Point2<F>], closed: bool) {
        if points.is_empty() {
            return;
        }
        self.content.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            polyline_to_svg_path(points, closed),
            self.style.color(layer),
            self.style.stroke_width
        ));
        self.content.push('\n');
    }

    fn fill(&mut self, layer: Layer, points: &[Point2<F>]) {
        if points.is_empty() {
            return;
        }
        self.content.push_str(&format!(
            r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            polyline_to_svg_path(points, true),
            self.style.color(layer),
            self.style.fill_opacity
        ));
        self.content.push('\n');
    }
}
