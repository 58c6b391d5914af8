//! Cohen-Sutherland region codes.

use crate::primitives::Point2;
use crate::window::ClipWindow;
use num_traits::Float;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A 4-bit region code locating a point relative to a clip window.
///
/// Each bit marks the point as outside the window on one side. At most one of
/// `LEFT`/`RIGHT` and at most one of `BOTTOM`/`TOP` is ever set by [`outcode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is also set in `self`.
    #[inline]
    pub fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if the two codes share at least one outside side.
    ///
    /// Two endpoints sharing a side cannot span the window, which is the
    /// trivial-reject test.
    #[inline]
    pub fn intersects(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        Outcode(self.0 | other.0)
    }
}

impl BitOrAssign for Outcode {
    #[inline]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    #[inline]
    fn bitand(self, other: Self) -> Self {
        Outcode(self.0 & other.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            return f.write_str("Outcode(INSIDE)");
        }
        let names = [
            (Outcode::LEFT, "LEFT"),
            (Outcode::RIGHT, "RIGHT"),
            (Outcode::BOTTOM, "BOTTOM"),
            (Outcode::TOP, "TOP"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Outcode({})", set.join(" | "))
    }
}

/// Classifies a point against a clip window.
///
/// Points on an edge count as inside on that axis.
///
/// # Example
///
/// ```
/// use rectclip::{outcode, ClipWindow, Outcode, Point2};
///
/// let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
/// assert_eq!(outcode(Point2::new(0.0, 5.0), &window), Outcode::INSIDE);
/// assert_eq!(
///     outcode(Point2::new(-6.0, 9.0), &window),
///     Outcode::LEFT | Outcode::TOP
/// );
/// ```
pub fn outcode<F: Float>(p: Point2<F>, window: &ClipWindow<F>) -> Outcode {
    let mut code = Outcode::INSIDE;

    if p.x < window.xmin() {
        code |= Outcode::LEFT;
    } else if p.x > window.xmax() {
        code |= Outcode::RIGHT;
    }

    if p.y < window.ymin() {
        code |= Outcode::BOTTOM;
    } else if p.y > window.ymax() {
        code |= Outcode::TOP;
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow<f64> {
        ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap()
    }

    #[test]
    fn test_inside_and_boundary() {
        let w = window();
        assert!(outcode(Point2::new(0.0, 0.0), &w).is_inside());
        assert!(outcode(Point2::new(-5.0, -5.0), &w).is_inside());
        assert!(outcode(Point2::new(5.0, 5.0), &w).is_inside());
        assert!(outcode(Point2::new(5.0, 0.0), &w).is_inside());
    }

    #[test]
    fn test_single_sides() {
        let w = window();
        assert_eq!(outcode(Point2::new(-6.0, 0.0), &w), Outcode::LEFT);
        assert_eq!(outcode(Point2::new(6.0, 0.0), &w), Outcode::RIGHT);
        assert_eq!(outcode(Point2::new(0.0, -6.0), &w), Outcode::BOTTOM);
        assert_eq!(outcode(Point2::new(0.0, 6.0), &w), Outcode::TOP);
    }

    #[test]
    fn test_corners_regions() {
        let w = window();
        assert_eq!(
            outcode(Point2::new(-6.0, -6.0), &w),
            Outcode::LEFT | Outcode::BOTTOM
        );
        assert_eq!(
            outcode(Point2::new(6.0, 6.0), &w),
            Outcode::RIGHT | Outcode::TOP
        );
    }

    #[test]
    fn test_degenerate_window() {
        let w: ClipWindow<f64> = ClipWindow::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert!(outcode(Point2::new(1.0, 1.0), &w).is_inside());
        assert_eq!(
            outcode(Point2::new(2.0, 0.0), &w),
            Outcode::RIGHT | Outcode::BOTTOM
        );
    }

    #[test]
    fn test_set_operations() {
        let a = Outcode::LEFT | Outcode::TOP;
        assert!(a.contains(Outcode::LEFT));
        assert!(!a.contains(Outcode::RIGHT));
        assert!(a.intersects(Outcode::TOP | Outcode::RIGHT));
        assert!(!a.intersects(Outcode::RIGHT | Outcode::BOTTOM));
        assert_eq!(a & Outcode::TOP, Outcode::TOP);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Outcode::INSIDE), "Outcode(INSIDE)");
        assert_eq!(
            format!("{:?}", Outcode::RIGHT | Outcode::TOP),
            "Outcode(RIGHT | TOP)"
        );
    }
}
