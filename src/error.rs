//! Error types for rectclip operations.

use thiserror::Error;

/// Errors that can occur while turning user input into clipping geometry.
///
/// Degenerate geometry (zero-length segments, zero-area windows, shapes that
/// clip away entirely) is never an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// The input did not contain the expected number of values.
    #[error("expected {expected} numbers, found {found}")]
    WrongArity {
        /// Number of values required.
        expected: usize,
        /// Number of whitespace-separated tokens present.
        found: usize,
    },

    /// A token could not be parsed as a number.
    #[error("invalid number '{token}' at token {index}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// One-based position of the token.
        index: usize,
    },

    /// A token parsed to NaN or infinity.
    #[error("non-finite value '{token}' at token {index}")]
    NonFinite {
        /// The offending token.
        token: String,
        /// One-based position of the token.
        index: usize,
    },

    /// Window bounds are inverted or not finite.
    #[error("invalid clip window ({xmin}, {ymin}, {xmax}, {ymax}): bounds must be finite with min <= max")]
    InvalidWindow {
        /// Requested left edge.
        xmin: f64,
        /// Requested bottom edge.
        ymin: f64,
        /// Requested right edge.
        xmax: f64,
        /// Requested top edge.
        ymax: f64,
    },
}
