//! Cohen-Sutherland segment clipping.

use super::{outcode, Boundary};
use crate::primitives::Segment2;
use crate::window::ClipWindow;
use log::{debug, trace};
use num_traits::Float;

/// Upper bound on endpoint moves. Exact arithmetic needs at most two moves per
/// endpoint (four in total); the rest is headroom for rounding at corners.
const MAX_ITERATIONS: usize = 8;

/// Clips a segment to a window using the Cohen-Sutherland algorithm.
///
/// Returns the visible part of the segment with its direction preserved, or
/// `None` if no part of it lies inside the window. A segment already inside
/// the window is returned unchanged.
///
/// When both endpoints are outside, the first endpoint is moved first. An
/// endpoint outside on two sides is moved to the top or bottom edge before
/// the right or left edge.
///
/// # Example
///
/// ```
/// use rectclip::{cohen_sutherland, ClipWindow, Segment2};
///
/// let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
///
/// let diagonal = Segment2::from_coords(-10.0, -10.0, 10.0, 10.0);
/// let clipped = cohen_sutherland(diagonal, &window).unwrap();
/// assert_eq!(clipped, Segment2::from_coords(-5.0, -5.0, 5.0, 5.0));
///
/// let far_away = Segment2::from_coords(100.0, 100.0, 200.0, 200.0);
/// assert!(cohen_sutherland(far_away, &window).is_none());
/// ```
pub fn cohen_sutherland<F: Float>(
    segment: Segment2<F>,
    window: &ClipWindow<F>,
) -> Option<Segment2<F>> {
    clip_with_limit(segment, window, MAX_ITERATIONS)
}

/// Runs the clip loop, clamping both endpoints into the window if they have
/// not settled after `max_iterations` moves.
fn clip_with_limit<F: Float>(
    segment: Segment2<F>,
    window: &ClipWindow<F>,
    max_iterations: usize,
) -> Option<Segment2<F>> {
    // A point has no direction to intersect along.
    if segment.is_point() {
        return window.contains_point(segment.start).then_some(segment);
    }

    let mut start = segment.start;
    let mut end = segment.end;
    let mut code_start = outcode(start, window);
    let mut code_end = outcode(end, window);
    let mut iterations = 0;

    loop {
        if code_start.is_inside() && code_end.is_inside() {
            return Some(Segment2::new(start, end));
        }
        if code_start.intersects(code_end) {
            return None;
        }
        if iterations == max_iterations {
            // Only reachable through rounding at a window corner.
            debug!(
                "segment clip did not settle after {} iterations; clamping to window",
                max_iterations
            );
            return Some(Segment2::new(window.clamp(start), window.clamp(end)));
        }
        iterations += 1;

        let move_start = !code_start.is_inside();
        let code_out = if move_start { code_start } else { code_end };
        let edge = Boundary::select(code_out)?;
        let p = edge.intersect(start, end, window);

        trace!(
            "cohen-sutherland step {}: moving {} endpoint to {:?} edge",
            iterations,
            if move_start { "first" } else { "second" },
            edge
        );

        if move_start {
            start = p;
            code_start = outcode(start, window);
        } else {
            end = p;
            code_end = outcode(end, window);
        }
    }
}
