//! 2D line segment type.

use super::Point2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Endpoint order carries no meaning for clipping, but it is preserved so a
/// clipped segment is drawn in the same direction as its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if both endpoints are exactly the same point.
    #[inline]
    pub fn is_point(self) -> bool {
        self.start == self.end
    }

    /// Returns the endpoints as a two-element array, ready to be stroked.
    #[inline]
    pub fn points(self) -> [Point2<F>; 2] {
        [self.start, self.end]
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
