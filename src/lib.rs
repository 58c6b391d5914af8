//! rectclip - Segment and polygon clipping against a rectangular window
//!
//! Two classic algorithms, small enough to read in one sitting:
//! Cohen-Sutherland for line segments and Sutherland-Hodgman for polygons,
//! both clipping against an axis-aligned [`ClipWindow`]. A [`Scene`] collects
//! interactively entered geometry and hands the clipped result to a
//! [`Renderer`](render::Renderer) supplied by the host.
//!
//! # Example
//!
//! ```
//! use rectclip::{cohen_sutherland, sutherland_hodgman, ClipWindow, Point2, Polygon, Segment2};
//!
//! let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
//!
//! let segment = Segment2::from_coords(-10.0, -10.0, 10.0, 10.0);
//! assert_eq!(
//!     cohen_sutherland(segment, &window),
//!     Some(Segment2::from_coords(-5.0, -5.0, 5.0, 5.0))
//! );
//!
//! let outside = Polygon::new(vec![
//!     Point2::new(10.0, 10.0),
//!     Point2::new(11.0, 10.0),
//!     Point2::new(11.0, 11.0),
//! ]);
//! assert!(sutherland_hodgman(&outside, &window).is_empty());
//! ```

pub mod clip;
pub mod error;
pub mod input;
pub mod polygon;
pub mod primitives;
pub mod render;
pub mod scene;
pub mod window;

pub use clip::{cohen_sutherland, outcode, Boundary, Outcode};
pub use error::ClipError;
pub use polygon::{sutherland_hodgman, Polygon};
pub use primitives::{Point2, Segment2};
pub use scene::{ClipOutput, Scene};
pub use window::ClipWindow;
