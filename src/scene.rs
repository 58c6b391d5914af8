//! Interactive clipping scene.
//!
//! A [`Scene`] collects what the user enters (segments, polygon vertices and
//! a clip window) and runs both clippers over it on request. Every method
//! returns immediately; the host UI calls them from its own event loop.
//!
//! # Example
//!
//! ```
//! use rectclip::{Point2, Scene};
//!
//! let mut scene: Scene<f64> = Scene::new();
//! scene.add_segment_str("-10 -10 10 10").unwrap();
//! assert!(scene.add_segment_str("not a segment").is_err());
//!
//! for (x, y) in [(-20.0, 0.0), (0.0, 20.0), (20.0, 0.0)] {
//!     scene.push_vertex(Point2::new(x, y));
//! }
//! assert!(scene.finish_polygon());
//!
//! // Nothing to clip against yet.
//! assert!(scene.clip().is_none());
//!
//! scene.set_window_str("-5 -5 5 5").unwrap();
//! let output = scene.clip().unwrap();
//! assert_eq!(output.visible_segments().count(), 1);
//! assert_eq!(output.polygon.unwrap().area(), 50.0);
//! ```

use crate::clip::cohen_sutherland;
use crate::error::ClipError;
use crate::input::{parse_segment, parse_window};
use crate::polygon::{sutherland_hodgman, Polygon};
use crate::primitives::{Point2, Segment2};
use crate::render::{Layer, Renderer};
use crate::window::ClipWindow;
use log::{debug, warn};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Minimum number of vertices a polygon needs before it can be finished.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// User-entered geometry awaiting clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<F> {
    segments: Vec<Segment2<F>>,
    polygon: Vec<Point2<F>>,
    polygon_closed: bool,
    window: Option<ClipWindow<F>>,
}

/// The result of clipping a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutput<F> {
    /// One entry per stored segment, in insertion order; `None` where the
    /// segment lies entirely outside the window.
    pub segments: Vec<Option<Segment2<F>>>,
    /// The clipped polygon, or `None` if there is no polygon or it was
    /// clipped away entirely.
    pub polygon: Option<Polygon<F>>,
}

impl<F: Float> ClipOutput<F> {
    /// Iterates over the segments that remain visible.
    pub fn visible_segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.segments.iter().flatten().copied()
    }

    /// Returns true if nothing is left to draw.
    pub fn is_empty(&self) -> bool {
        self.polygon.is_none() && self.segments.iter().all(Option::is_none)
    }
}

impl<F: Float> Scene<F> {
    /// Creates an empty scene with no window.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            polygon: Vec::new(),
            polygon_closed: false,
            window: None,
        }
    }

    /// Returns the stored segments in insertion order.
    pub fn segments(&self) -> &[Segment2<F>] {
        &self.segments
    }

    /// Returns the polygon vertices entered so far, without a closing vertex.
    pub fn polygon_vertices(&self) -> &[Point2<F>] {
        &self.polygon
    }

    /// Returns true once [`Scene::finish_polygon`] has succeeded.
    pub fn is_polygon_closed(&self) -> bool {
        self.polygon_closed
    }

    /// Returns the current clip window, if one has been set.
    pub fn window(&self) -> Option<&ClipWindow<F>> {
        self.window.as_ref()
    }

    /// Returns true if the scene holds no segments, vertices or window.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.polygon.is_empty() && self.window.is_none()
    }

    /// Appends a segment.
    pub fn add_segment(&mut self, segment: Segment2<F>) {
        self.segments.push(segment);
        debug!("added segment #{}", self.segments.len());
    }

    /// Appends a polygon vertex.
    ///
    /// Returns `false` and ignores the vertex once the polygon is finished.
    pub fn push_vertex(&mut self, point: Point2<F>) -> bool {
        if self.polygon_closed {
            debug!("polygon already finished; ignoring vertex");
            return false;
        }
        self.polygon.push(point);
        debug!("added polygon vertex #{}", self.polygon.len());
        true
    }

    /// Closes the polygon.
    ///
    /// Requires at least [`MIN_POLYGON_VERTICES`] vertices; otherwise nothing
    /// changes and `false` is returned. Finishing an already finished polygon
    /// also returns `false`.
    pub fn finish_polygon(&mut self) -> bool {
        if self.polygon_closed {
            debug!("polygon already finished");
            return false;
        }
        if self.polygon.len() < MIN_POLYGON_VERTICES {
            debug!(
                "cannot finish polygon with {} vertices; need {}",
                self.polygon.len(),
                MIN_POLYGON_VERTICES
            );
            return false;
        }
        self.polygon_closed = true;
        debug!("finished polygon with {} vertices", self.polygon.len());
        true
    }

    /// Replaces the clip window.
    pub fn set_window(&mut self, window: ClipWindow<F>) {
        debug!(
            "clip window set to ({}, {}) - ({}, {})",
            as_f64(window.xmin()),
            as_f64(window.ymin()),
            as_f64(window.xmax()),
            as_f64(window.ymax())
        );
        self.window = Some(window);
    }

    /// Discards all segments, polygon vertices and the window.
    pub fn clear(&mut self) {
        *self = Self::new();
        debug!("scene cleared");
    }

    /// Clips every segment and the polygon against the window.
    ///
    /// Returns `None` when no window has been set. The polygon is clipped
    /// whether or not it has been finished.
    pub fn clip(&self) -> Option<ClipOutput<F>> {
        let Some(window) = self.window.as_ref() else {
            debug!("clip requested without a window; nothing to do");
            return None;
        };

        let segments = self
            .segments
            .iter()
            .map(|&segment| cohen_sutherland(segment, window))
            .collect();

        let polygon = if self.polygon.is_empty() {
            None
        } else {
            let subject = Polygon::new(self.polygon.clone());
            Some(sutherland_hodgman(&subject, window)).filter(|p| !p.is_empty())
        };

        Some(ClipOutput { segments, polygon })
    }

    /// Clips the scene and hands the result to a renderer.
    ///
    /// Visible segments are stroked and the clipped polygon is filled on
    /// [`Layer::Clipped`]. Returns `false` without drawing when no window is
    /// set.
    pub fn run_clip<R: Renderer<F> + ?Sized>(&self, renderer: &mut R) -> bool {
        let Some(output) = self.clip() else {
            return false;
        };

        if let Some(polygon) = &output.polygon {
            renderer.fill(Layer::Clipped, &polygon.vertices);
        }
        for segment in output.visible_segments() {
            renderer.stroke(Layer::Clipped, &segment.points(), false);
        }
        true
    }

    /// Hands the unclipped scene to a renderer: the window outline, the
    /// source segments and the polygon outline.
    pub fn draw<R: Renderer<F> + ?Sized>(&self, renderer: &mut R) {
        if let Some(window) = &self.window {
            renderer.stroke(Layer::Window, &window.corners(), true);
        }
        for segment in &self.segments {
            renderer.stroke(Layer::Source, &segment.points(), false);
        }
        if self.polygon.len() > 1 {
            renderer.stroke(Layer::Outline, &self.polygon, self.polygon_closed);
        }
    }
}

impl<F: Float + FromStr> Scene<F> {
    /// Parses `x1 y1 x2 y2` and appends the segment.
    ///
    /// On malformed input the scene is left unchanged.
    pub fn add_segment_str(&mut self, text: &str) -> Result<Segment2<F>, ClipError> {
        let segment = parse_segment(text).map_err(|e| {
            warn!("rejected segment input {:?}: {}", text, e);
            e
        })?;
        self.add_segment(segment);
        Ok(segment)
    }

    /// Parses `xmin ymin xmax ymax` and replaces the clip window.
    ///
    /// On malformed input the scene is left unchanged.
    pub fn set_window_str(&mut self, text: &str) -> Result<ClipWindow<F>, ClipError> {
        let window = parse_window(text).map_err(|e| {
            warn!("rejected window input {:?}: {}", text, e);
            e
        })?;
        self.set_window(window);
        Ok(window)
    }
}

impl<F: Float> Default for Scene<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn as_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

impl<F: Float + fmt::Display> fmt::Display for Scene<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.window {
            Some(w) => writeln!(
                f,
                "window: {} {} {} {}",
                w.xmin(),
                w.ymin(),
                w.xmax(),
                w.ymax()
            )?,
            None => writeln!(f, "window: none")?,
        }
        writeln!(f, "segments: {}", self.segments.len())?;
        write!(
            f,
            "polygon: {} vertices{}",
            self.polygon.len(),
            if self.polygon_closed { " (closed)" } else { "" }
        )
    }
}
