//! Axis-aligned clip window.

use crate::error::ClipError;
use crate::primitives::Point2;
use num_traits::Float;

/// The axis-aligned rectangle that segments and polygons are clipped against.
///
/// Always satisfies `min.x <= max.x` and `min.y <= max.y` with finite bounds.
/// Zero-width and zero-height windows are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow<F> {
    min: Point2<F>,
    max: Point2<F>,
}

impl<F: Float> ClipWindow<F> {
    /// Creates a window from its bounds.
    ///
    /// Fails with [`ClipError::InvalidWindow`] if a minimum exceeds its maximum
    /// or any bound is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use rectclip::ClipWindow;
    ///
    /// let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
    /// assert_eq!(window.width(), 10.0);
    ///
    /// assert!(ClipWindow::new(5.0, 0.0, -5.0, 1.0).is_err());
    /// ```
    pub fn new(xmin: F, ymin: F, xmax: F, ymax: F) -> Result<Self, ClipError> {
        let finite = [xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite());
        if !finite || xmin > xmax || ymin > ymax {
            return Err(ClipError::InvalidWindow {
                xmin: xmin.to_f64().unwrap_or(f64::NAN),
                ymin: ymin.to_f64().unwrap_or(f64::NAN),
                xmax: xmax.to_f64().unwrap_or(f64::NAN),
                ymax: ymax.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            min: Point2::new(xmin, ymin),
            max: Point2::new(xmax, ymax),
        })
    }

    /// Creates a window from two arbitrary opposite corners.
    ///
    /// Correctly handles corners in any orientation. Fails only on non-finite
    /// coordinates.
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Result<Self, ClipError> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Minimum corner (smallest x and y values).
    #[inline]
    pub fn min(&self) -> Point2<F> {
        self.min
    }

    /// Maximum corner (largest x and y values).
    #[inline]
    pub fn max(&self) -> Point2<F> {
        self.max
    }

    #[inline]
    pub fn xmin(&self) -> F {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> F {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> F {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> F {
        self.max.y
    }

    /// Returns the width of the window.
    #[inline]
    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the window.
    #[inline]
    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the area of the window.
    #[inline]
    pub fn area(&self) -> F {
        self.width() * self.height()
    }

    /// Returns `true` if the window contains the point (boundary inclusive).
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Moves a point onto the nearest location inside the window.
    #[inline]
    pub fn clamp(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            p.x.max(self.min.x).min(self.max.x),
            p.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Returns the corners counter-clockwise, starting at the minimum corner.
    pub fn corners(&self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}
