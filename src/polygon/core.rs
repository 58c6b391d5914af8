//! Core polygon type.

use crate::primitives::Point2;
use num_traits::Float;

/// A polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first. A trailing copy of the first vertex, as left behind by outline
/// drawing, is tolerated and ignored by [`Polygon::open_vertices`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in drawing order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of stored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertices without a trailing duplicate of the first one.
    pub fn open_vertices(&self) -> &[Point2<F>] {
        match self.vertices.as_slice() {
            [first, rest @ .., last] if !rest.is_empty() && first == last => {
                &self.vertices[..self.vertices.len() - 1]
            }
            all => all,
        }
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        let vertices = self.open_vertices();
        if vertices.len() < 3 {
            return F::zero();
        }

        let n = vertices.len();
        let mut area = F::zero();
        for i in 0..n {
            let j = (i + 1) % n;
            area = area + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        }

        area / (F::one() + F::one())
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
