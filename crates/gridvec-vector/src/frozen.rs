//! Read-only vectors for use as keys in hash-based containers.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;
use libm::sqrt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{HashValue, Vector2D, VectorError, canonical_bits};

/// A vector whose hash has been computed and whose components can no longer change.
///
/// Obtained from [`Vector2D::freeze`]. It has no mutating methods; call
/// [`FrozenVector2D::copy`] to get a mutable [`Vector2D`] with the same value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Debug, Clone)]
pub struct FrozenVector2D {
    x: f64,
    y: f64,
    hash_value: HashValue,
}

impl FrozenVector2D {
    /// `x` and `y` must already be rounded and `hash_value` computed from them.
    pub(crate) fn from_parts(x: f64, y: f64, hash_value: HashValue) -> Self {
        FrozenVector2D { x, y, hash_value }
    }

    /// Returns the x component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the cached hash.
    pub fn hash_value(&self) -> HashValue {
        self.hash_value
    }

    /// Returns a mutable, unhashed vector with the same components.
    pub fn copy(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Always `2`.
    pub const fn len(&self) -> usize {
        2
    }

    /// Always `false`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `x` for index `0` and `y` for index `1`.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::IndexOutOfRange)` for any other index.
    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(VectorError::IndexOutOfRange(index)),
        }
    }

    /// Returns `[x, y]`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns a new mutable vector with both components negated.
    pub fn negate(&self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }

    /// Euclidean norm `sqrt(x² + y²)`.
    pub fn magnitude(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }
}

/// Key equality. Unlike [`Vector2D`], NaN components compare equal to each
/// other so that lookups of a NaN key still find it.
impl PartialEq for FrozenVector2D {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.x) == canonical_bits(other.x)
            && canonical_bits(self.y) == canonical_bits(other.y)
    }
}

impl Eq for FrozenVector2D {}

impl PartialEq<Vector2D> for FrozenVector2D {
    fn eq(&self, other: &Vector2D) -> bool {
        other == self
    }
}

// Equal pairs carry equal cached hashes, so this agrees with `Eq`.
impl Hash for FrozenVector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value);
    }
}

impl Index<usize> for FrozenVector2D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of range for FrozenVector2D: the len is 2 but the index is {}", index),
        }
    }
}

impl From<[f64; 2]> for FrozenVector2D {
    fn from(value: [f64; 2]) -> Self {
        Vector2D::from(value).freeze()
    }
}

impl From<FrozenVector2D> for [f64; 2] {
    fn from(v: FrozenVector2D) -> Self {
        v.to_array()
    }
}

impl fmt::Display for FrozenVector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}
