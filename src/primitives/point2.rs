//! 2D point type.

use num_traits::Float;

/// A 2D point.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Point2<F>> for (F, F) {
    fn from(p: Point2<F>) -> Self {
        (p.x, p.y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::new(F::zero(), F::zero())
    }
}
