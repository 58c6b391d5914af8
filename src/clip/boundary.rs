//! The four edges of a clip window and their half-planes.

use super::Outcode;
use crate::primitives::Point2;
use crate::window::ClipWindow;
use num_traits::Float;

/// One edge of a clip window.
///
/// Each edge bounds a half-plane that contains the window: `Left` keeps
/// `x >= xmin`, `Right` keeps `x <= xmax`, `Bottom` keeps `y >= ymin` and
/// `Top` keeps `y <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

impl Boundary {
    /// Order in which polygon clipping visits the half-planes.
    pub const CLIP_ORDER: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    /// Order in which segment clipping picks an edge for an endpoint that is
    /// outside on two sides.
    pub const PRIORITY: [Boundary; 4] = [
        Boundary::Top,
        Boundary::Bottom,
        Boundary::Right,
        Boundary::Left,
    ];

    /// Returns the outcode bit marking a point as outside this edge.
    #[inline]
    pub fn outcode(self) -> Outcode {
        match self {
            Boundary::Left => Outcode::LEFT,
            Boundary::Right => Outcode::RIGHT,
            Boundary::Bottom => Outcode::BOTTOM,
            Boundary::Top => Outcode::TOP,
        }
    }

    /// Picks the edge to clip an outside endpoint against.
    ///
    /// Returns `None` for an inside code.
    pub fn select(code: Outcode) -> Option<Boundary> {
        Self::PRIORITY
            .iter()
            .copied()
            .find(|edge| code.contains(edge.outcode()))
    }

    /// Returns the fixed coordinate of this edge.
    #[inline]
    pub fn coordinate<F: Float>(self, window: &ClipWindow<F>) -> F {
        match self {
            Boundary::Left => window.xmin(),
            Boundary::Right => window.xmax(),
            Boundary::Bottom => window.ymin(),
            Boundary::Top => window.ymax(),
        }
    }

    /// Tests whether a point lies in this edge's half-plane (boundary inclusive).
    #[inline]
    pub fn contains<F: Float>(self, p: Point2<F>, window: &ClipWindow<F>) -> bool {
        let c = self.coordinate(window);
        match self {
            Boundary::Left => p.x >= c,
            Boundary::Right => p.x <= c,
            Boundary::Bottom => p.y >= c,
            Boundary::Top => p.y <= c,
        }
    }

    /// Intersects the line through `a` and `b` with this edge's line.
    ///
    /// The fixed coordinate is copied exactly from the window; the other is
    /// solved from the parametric form of the line. Callers must only pass
    /// points on opposite sides of the edge, so the denominator is non-zero.
    ///
    /// Finite inputs always give a finite result, even when differences
    /// between coordinates near `F::max_value()` overflow.
    #[inline]
    pub fn intersect<F: Float>(self, a: Point2<F>, b: Point2<F>, window: &ClipWindow<F>) -> Point2<F> {
        let c = self.coordinate(window);
        match self {
            Boundary::Left | Boundary::Right => Point2::new(c, solve(a.x, b.x, a.y, b.y, c)),
            Boundary::Bottom | Boundary::Top => Point2::new(solve(a.y, b.y, a.x, b.x, c), c),
        }
    }
}

/// Solves for the free coordinate where the line from `(a0, a1)` to `(b0, b1)`
/// crosses `c` on the fixed axis.
fn solve<F: Float>(a0: F, b0: F, a1: F, b1: F, c: F) -> F {
    let span = b0 - a0;
    let rise = b1 - a1;
    let offset = c - a0;
    if span.is_finite() && rise.is_finite() && offset.is_finite() {
        let value = a1 + rise * offset / span;
        if value.is_finite() {
            return value;
        }
    }

    // Halved coordinates cannot overflow when subtracted, and `t` is in [0, 1].
    let two = F::one() + F::one();
    let t = ((c / two - a0 / two) / (b0 / two - a0 / two))
        .max(F::zero())
        .min(F::one());
    a1 * (F::one() - t) + b1 * t
}
