//! Parsing of typed coordinate entry.
//!
//! Coordinates are entered as whitespace-separated numbers: `x y` for a point,
//! `x1 y1 x2 y2` for a segment and `xmin ymin xmax ymax` for a clip window.
//! Anything else is rejected with a [`ClipError`] the caller can show to the
//! user.
//!
//! # Example
//!
//! ```
//! use rectclip::input::{parse_segment, parse_window};
//!
//! let segment = parse_segment::<f64>("-10 -10 10 10").unwrap();
//! assert_eq!(segment.end.x, 10.0);
//!
//! let window = parse_window::<f64>("-5 -5 5 5").unwrap();
//! assert_eq!(window.width(), 10.0);
//!
//! assert!(parse_segment::<f64>("1 2 3").is_err());
//! ```

use crate::error::ClipError;
use crate::primitives::{Point2, Segment2};
use crate::window::ClipWindow;
use num_traits::Float;
use std::str::FromStr;

/// Parses exactly `N` whitespace-separated finite numbers.
pub fn parse_numbers<F, const N: usize>(s: &str) -> Result<[F; N], ClipError>
where
    F: Float + FromStr,
{
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ClipError::WrongArity {
            expected: N,
            found: tokens.len(),
        });
    }

    let mut values = [F::zero(); N];
    for (i, (slot, token)) in values.iter_mut().zip(&tokens).enumerate() {
        let value: F = token.parse().map_err(|_| ClipError::InvalidNumber {
            token: token.to_string(),
            index: i + 1,
        })?;
        if !value.is_finite() {
            return Err(ClipError::NonFinite {
                token: token.to_string(),
                index: i + 1,
            });
        }
        *slot = value;
    }

    Ok(values)
}

/// Parses `x y` into a point.
pub fn parse_point<F: Float + FromStr>(s: &str) -> Result<Point2<F>, ClipError> {
    let [x, y] = parse_numbers::<F, 2>(s)?;
    Ok(Point2::new(x, y))
}

/// Parses `x1 y1 x2 y2` into a segment.
pub fn parse_segment<F: Float + FromStr>(s: &str) -> Result<Segment2<F>, ClipError> {
    let [x1, y1, x2, y2] = parse_numbers::<F, 4>(s)?;
    Ok(Segment2::from_coords(x1, y1, x2, y2))
}

/// Parses `xmin ymin xmax ymax` into a clip window.
pub fn parse_window<F: Float + FromStr>(s: &str) -> Result<ClipWindow<F>, ClipError> {
    let [xmin, ymin, xmax, ymax] = parse_numbers::<F, 4>(s)?;
    ClipWindow::new(xmin, ymin, xmax, ymax)
}

impl<F: Float + FromStr> FromStr for Point2<F> {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_point(s)
    }
}

impl<F: Float + FromStr> FromStr for Segment2<F> {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_segment(s)
    }
}

impl<F: Float + FromStr> FromStr for ClipWindow<F> {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_window(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment() {
        let s: Segment2<f64> = parse_segment("1 2.5 -3 4e1").unwrap();
        assert_eq!(s, Segment2::from_coords(1.0, 2.5, -3.0, 40.0));
    }

    #[test]
    fn test_extra_whitespace() {
        let s: Segment2<f64> = parse_segment("  1\t2\n 3   4 ").unwrap();
        assert_eq!(s, Segment2::from_coords(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse_segment::<f64>("1 2 3"),
            Err(ClipError::WrongArity {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            parse_window::<f64>("1 2 3 4 5"),
            Err(ClipError::WrongArity {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            parse_point::<f64>(""),
            Err(ClipError::WrongArity {
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            parse_segment::<f64>("1 2 three 4"),
            Err(ClipError::InvalidNumber {
                token: "three".to_string(),
                index: 3
            })
        );
        // Commas are not separators.
        assert!(parse_segment::<f64>("1, 2, 3, 4").is_err());
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            parse_point::<f64>("NaN 1"),
            Err(ClipError::NonFinite {
                token: "NaN".to_string(),
                index: 1
            })
        );
        assert!(parse_window::<f64>("0 0 inf 1").is_err());
    }

    #[test]
    fn test_parse_window_validates() {
        let w: ClipWindow<f64> = parse_window("-5 -5 5 5").unwrap();
        assert_eq!(w.xmin(), -5.0);
        assert_eq!(w.ymax(), 5.0);

        assert!(matches!(
            parse_window::<f64>("5 -5 -5 5"),
            Err(ClipError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let p: Point2<f32> = "3 -4".parse().unwrap();
        assert_eq!(p, Point2::new(3.0, -4.0));

        let s: Segment2<f64> = "0 0 1 1".parse().unwrap();
        assert_eq!(s.end, Point2::new(1.0, 1.0));

        let w: Result<ClipWindow<f64>, _> = "0 0 1".parse();
        assert!(w.is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = parse_segment::<f64>("1 2 x 4").unwrap_err();
        assert_eq!(err.to_string(), "invalid number 'x' at token 3");

        let err = parse_window::<f64>("1 2").unwrap_err();
        assert_eq!(err.to_string(), "expected 4 numbers, found 2");
    }
}
