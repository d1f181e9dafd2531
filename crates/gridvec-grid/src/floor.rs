//! Quantization of a coordinate to the left edge of its bucket.
//!
//! The number line is split into half-open buckets of length `size`, shifted
//! by `offset`:
//!
//! ```text
//!      -200  -100    0    100   200
//!     <--|--a--|-----|--b--|--c--|-->
//! ```
//!
//! With offset 200 and size 100 the floor of `a` is -200, of `b` is 0 and of
//! `c` is 100.

use tracing::debug;

use crate::error::GridError;

/// Offset used by [`floor`].
pub const DEFAULT_OFFSET: f64 = 200.0;

/// Floor of `value` for buckets of length `size`, using [`DEFAULT_OFFSET`].
///
/// # Errors
///
/// Returns `Err(GridError::InvalidSize)` if `size` is zero or NaN.
///
/// # Examples
///
/// ```
/// use gridvec_grid::floor;
///
/// assert_eq!(floor(120.0, 100.0), Ok(100.0));
/// assert_eq!(floor(-10.0, 100.0), Ok(-100.0));
/// ```
pub fn floor(value: f64, size: f64) -> Result<f64, GridError> {
    floor_with_offset(value, size, DEFAULT_OFFSET)
}

/// Computes `((value + offset) // size) * size - offset`, where `//` rounds
/// toward negative infinity.
///
/// # Arguments
///
/// * `value` - Coordinate to quantize
/// * `size` - Bucket length; may be negative, must not be zero
/// * `offset` - Shift applied before bucketing
///
/// # Errors
///
/// Returns `Err(GridError::InvalidSize)` if `size` is zero or NaN.
pub fn floor_with_offset(value: f64, size: f64, offset: f64) -> Result<f64, GridError> {
    validate_size(size)?;
    Ok(bucket_left_edge(value, size, offset))
}

pub(crate) fn validate_size(size: f64) -> Result<(), GridError> {
    if size == 0.0 || size.is_nan() {
        debug!(size, "rejecting bucket size");
        return Err(GridError::InvalidSize("size must be non-zero"));
    }
    Ok(())
}

/// `size` must already be validated.
pub(crate) fn bucket_left_edge(value: f64, size: f64, offset: f64) -> f64 {
    floor_div(value + offset, size) * size - offset
}

/// Float floor division. Derives the quotient from `a - a % b`, which is exact,
/// instead of flooring `a / b`, whose rounding can cross an integer.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 { floored + 1.0 } else { floored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_floor_literal_cases() {
        assert_eq!(floor(10.0, 100.0), Ok(0.0));
        assert_eq!(floor(120.0, 100.0), Ok(100.0));
        assert_eq!(floor(-10.0, 100.0), Ok(-100.0));
        assert_eq!(floor(-150.0, 100.0), Ok(-200.0));
        assert_eq!(floor(50.0, 167.0), Ok(-33.0));
    }

    #[test]
    fn test_floor_bucket_edges() {
        // Left edges belong to their own bucket
        assert_eq!(floor(0.0, 100.0), Ok(0.0));
        assert_eq!(floor(-200.0, 100.0), Ok(-200.0));
        assert_eq!(floor(99.999, 100.0), Ok(0.0));
        // Below the offset origin still floors toward negative infinity
        assert_eq!(floor(-250.0, 100.0), Ok(-300.0));
        assert_eq!(floor(-201.0, 100.0), Ok(-300.0));
    }

    #[test]
    fn test_floor_with_offset() {
        assert_eq!(floor_with_offset(10.0, 100.0, 0.0), Ok(0.0));
        assert_eq!(floor_with_offset(-10.0, 100.0, 0.0), Ok(-100.0));
        assert_eq!(floor_with_offset(7.5, 2.5, 1.0), Ok(6.5));
        // 0.3 is just below three steps of 0.1
        assert_eq!(floor_with_offset(0.3, 0.1, 0.0), Ok(0.2));
    }

    #[test]
    fn test_floor_negative_size() {
        // (250 // -100) == -3
        assert_eq!(floor(50.0, -100.0), Ok(100.0));
    }

    #[test]
    fn test_floor_zero_size() {
        for value in [0.0, 10.0, -150.0, 1.0e9] {
            assert!(matches!(floor(value, 0.0), Err(GridError::InvalidSize(_))));
            assert!(matches!(floor(value, -0.0), Err(GridError::InvalidSize(_))));
            assert!(matches!(
                floor_with_offset(value, 0.0, 0.0),
                Err(GridError::InvalidSize("size must be non-zero"))
            ));
        }
        assert!(matches!(floor(1.0, f64::NAN), Err(GridError::InvalidSize(_))));
    }

    #[test]
    fn test_floor_contains_value_random() {
        let mut rng = StdRng::seed_from_u64(0xf100);
        for _ in 0..1_000 {
            let value: f64 = rng.random_range(-1.0e4..1.0e4);
            let size: f64 = rng.random_range(1.0..500.0);
            let offset: f64 = rng.random_range(0.0..1_000.0);
            let edge = floor_with_offset(value, size, offset).unwrap();
            assert!(edge <= value + 1e-9, "{edge} > {value}");
            assert!(value < edge + size + 1e-9, "{value} outside [{edge}, {edge} + {size})");
            let buckets = (edge + offset) / size;
            assert!((buckets - buckets.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_floor_div_matches_integer_division() {
        for a in -20..=20 {
            for b in [-7, -3, 1, 4, 9] {
                let expected = (f64::from(a) / f64::from(b)).floor();
                assert_eq!(floor_div(f64::from(a), f64::from(b)), expected, "{a} // {b}");
            }
        }
    }
}
