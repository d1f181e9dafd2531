#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` two-dimensional vector value type."]
#![doc = ""]
#![doc = "Every component write is rounded to [`PRECISION`] decimal digits, so equality"]
#![doc = "and hashing always see the same canonical representation. A [`Vector2D`] becomes"]
#![doc = "immutable the first time its hash is computed; [`Vector2D::freeze`] turns it into a"]
#![doc = "[`FrozenVector2D`] that can be used directly as a key in hash-based containers."]

use core::fmt::{self, Write};
use core::hash::BuildHasher;
use libm::fabs;

pub mod error;
pub mod frozen;
pub mod operand;
mod ops;
pub mod vector;

pub use error::VectorError;
pub use frozen::FrozenVector2D;
pub use operand::Operand;
pub use vector::Vector2D;

/// Number of decimal digits every component is rounded to.
pub const PRECISION: i32 = 6;

/// Hash of a vector's rounded `(x, y)` pair.
pub type HashValue = u64;

/// Magnitudes at or above this are whole numbers, so rounding leaves them unchanged.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

// Fixed seeds keep the hash identical for equal pairs across instances and calls.
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Fixed-capacity text buffer. Below [`INTEGRAL_LIMIT`] a value has at most
/// 16 integer digits, so sign, point and `PRECISION` decimals always fit.
struct DecimalBuf {
    bytes: [u8; 32],
    len: usize,
}

impl DecimalBuf {
    fn new() -> Self {
        DecimalBuf { bytes: [0; 32], len: 0 }
    }

    fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes[..self.len]).ok()
    }
}

impl Write for DecimalBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Rounds `value` to [`PRECISION`] decimal digits.
///
/// The exact binary value is rounded in decimal, half to even, and the
/// result is the `f64` nearest to that decimal. Non-finite and whole-number
/// magnitudes are returned unchanged. A zero result is always `+0.0`.
///
/// ```
/// use gridvec_vector::round_component;
///
/// assert_eq!(round_component(2.5e-6), 3e-6);
/// assert_eq!(round_component(0.1 + 0.2), 0.3);
/// ```
pub fn round_component(value: f64) -> f64 {
    if !value.is_finite() || fabs(value) >= INTEGRAL_LIMIT {
        return value;
    }
    let mut buf = DecimalBuf::new();
    if write!(buf, "{:.*}", PRECISION as usize, value).is_err() {
        return value;
    }
    let rounded = match buf.as_str().map(str::parse::<f64>) {
        Some(Ok(rounded)) => rounded,
        _ => return value,
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Bit pattern used for equality and hashing; every NaN maps to one pattern.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

pub(crate) fn hash_pair(x: f64, y: f64) -> HashValue {
    let [k0, k1, k2, k3] = HASH_SEEDS;
    let state = ahash::RandomState::with_seeds(k0, k1, k2, k3);
    BuildHasher::hash_one(&state, (canonical_bits(x), canonical_bits(y)))
}
