//! Polygon clipping against a rectangular window.

use crate::clip::Boundary;
use crate::polygon::core::Polygon;
use crate::primitives::Point2;
use crate::window::ClipWindow;
use log::trace;
use num_traits::Float;

/// Clips a polygon to a window using the Sutherland-Hodgman algorithm.
///
/// The polygon is clipped against the left, right, bottom and top half-planes
/// in that order, each stage feeding the next. The result keeps the input's
/// vertex order (up to rotation) and is empty if the polygon lies entirely
/// outside the window. Concave inputs may produce degenerate slivers along the
/// window edges; single points and collinear results are returned as-is.
///
/// # Arguments
///
/// * `subject` - The polygon to be clipped, implicitly closed
/// * `window` - The clip window
///
/// # Example
///
/// ```
/// use rectclip::{sutherland_hodgman, ClipWindow, Point2, Polygon};
///
/// let square = Polygon::new(vec![
///     Point2::new(-10.0, -10.0),
///     Point2::new(-10.0, 10.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(10.0, -10.0),
/// ]);
/// let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
///
/// let clipped = sutherland_hodgman(&square, &window);
/// assert_eq!(clipped.len(), 4);
/// assert_eq!(clipped.area(), 100.0);
/// ```
pub fn sutherland_hodgman<F: Float>(subject: &Polygon<F>, window: &ClipWindow<F>) -> Polygon<F> {
    let mut output = subject.open_vertices().to_vec();

    for edge in Boundary::CLIP_ORDER {
        if output.is_empty() {
            break;
        }
        output = clip_half_plane(&output, edge, window);
        trace!(
            "sutherland-hodgman: {} vertices after {:?} edge",
            output.len(),
            edge
        );
    }

    Polygon::new(output)
}

/// Clips a closed vertex ring against the half-plane of a single edge.
fn clip_half_plane<F: Float>(
    input: &[Point2<F>],
    edge: Boundary,
    window: &ClipWindow<F>,
) -> Vec<Point2<F>> {
    let Some(&last) = input.last() else {
        return Vec::new();
    };

    let mut output = Vec::with_capacity(input.len() + 1);
    let mut previous = last;
    let mut previous_inside = edge.contains(previous, window);

    for &current in input {
        let current_inside = edge.contains(current, window);

        if current_inside {
            if !previous_inside {
                // Entering: add intersection
                output.push(edge.intersect(previous, current, window));
            }
            output.push(current);
        } else if previous_inside {
            // Exiting: add intersection
            output.push(edge.intersect(previous, current, window));
        }

        previous = current;
        previous_inside = current_inside;
    }

    output
}
