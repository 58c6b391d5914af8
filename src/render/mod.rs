//! Handing clipping geometry to a host renderer.
//!
//! The clipping core never draws. A [`Scene`](crate::Scene) passes its inputs
//! and results to a [`Renderer`] supplied by the host, tagged with the
//! [`Layer`] they belong to so the host can style them.
//!
//! [`DrawList`] records the calls for hosts that render later (or tests), and
//! [`SvgRenderer`] writes a standalone SVG document.

mod svg;

pub use svg::{polygon_to_svg_path, polyline_to_svg_path, SvgRenderer, SvgStyle};

use crate::primitives::Point2;

/// What a piece of drawn geometry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Outline of the clip window.
    Window,
    /// Segments as entered, before clipping.
    Source,
    /// Outline of the polygon as entered, before clipping.
    Outline,
    /// Clipped segments and the clipped polygon.
    Clipped,
}

/// Receives geometry to draw.
pub trait Renderer<F> {
    /// Strokes a polyline, closing it back to its first point if `closed`.
    fn stroke(&mut self, layer: Layer, points: &[Point2<F>], closed: bool);

    /// Fills the area enclosed by a ring of points.
    fn fill(&mut self, layer: Layer, points: &[Point2<F>]);
}

impl<F, R: Renderer<F> + ?Sized> Renderer<F> for &mut R {
    fn stroke(&mut self, layer: Layer, points: &[Point2<F>], closed: bool) {
        (**self).stroke(layer, points, closed);
    }

    fn fill(&mut self, layer: Layer, points: &[Point2<F>]) {
        (**self).fill(layer, points);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<F> {
    Stroke {
        layer: Layer,
        points: Vec<Point2<F>>,
        closed: bool,
    },
    Fill {
        layer: Layer,
        points: Vec<Point2<F>>,
    },
}

impl<F> DrawCommand<F> {
    /// Returns the layer this command draws on.
    pub fn layer(&self) -> Layer {
        match self {
            DrawCommand::Stroke { layer, .. } | DrawCommand::Fill { layer, .. } => *layer,
        }
    }

    /// Returns the points this command draws.
    pub fn points(&self) -> &[Point2<F>] {
        match self {
            DrawCommand::Stroke { points, .. } | DrawCommand::Fill { points, .. } => points.as_slice(),
        }
    }
}

/// A renderer that records draw calls in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList<F> {
    pub commands: Vec<DrawCommand<F>>,
}

impl<F> DrawList<F> {
    /// Creates an empty draw list.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Returns true if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Iterates over the commands drawn on one layer.
    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand<F>> {
        self.commands.iter().filter(move |c| c.layer() == layer)
    }

    /// Discards all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<F> Default for DrawList<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Copy> Renderer<F> for DrawList<F> {
    fn stroke(&mut self, layer: Layer, points: &[Point2<F>], closed: bool) {
        self.commands.push(DrawCommand::Stroke {
            layer,
            points: points.to_vec(),
            closed,
        });
    }

    fn fill(&mut self, layer: Layer, points: &[Point2<F>]) {
        self.commands.push(DrawCommand::Fill {
            layer,
            points: points.to_vec(),
        });
    }
}
