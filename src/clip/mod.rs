//! Region codes, window edges, and Cohen-Sutherland segment clipping.
//!
//! Polygon clipping lives in [`crate::polygon`] and shares the [`Boundary`]
//! edges defined here.

mod boundary;
mod region;
mod segment;

pub use boundary::Boundary;
pub use region::{outcode, Outcode};
pub use segment::cohen_sutherland;
