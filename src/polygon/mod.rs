//! Polygons and their clipping against a rectangular window.
//!
//! # Example
//!
//! ```
//! use rectclip::polygon::{sutherland_hodgman, Polygon};
//! use rectclip::{ClipWindow, Point2};
//!
//! let triangle = Polygon::new(vec![
//!     Point2::new(-20.0, 0.0),
//!     Point2::new(0.0, 20.0),
//!     Point2::new(20.0, 0.0),
//! ]);
//! let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
//!
//! let clipped = sutherland_hodgman(&triangle, &window);
//! assert!(clipped.vertices.iter().all(|&v| window.contains_point(v)));
//! ```

mod clip;
mod core;

pub use self::clip::sutherland_hodgman;
pub use self::core::Polygon;
