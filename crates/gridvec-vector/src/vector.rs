//! The rounded, mutable-until-hashed vector type.

use core::any::Any;
use core::f64::consts::PI;
use core::fmt;
use core::ops::Index;
use libm::{cos, sin, sqrt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FrozenVector2D, HashValue, Operand, VectorError, hash_pair, round_component};

/// A two-dimensional vector `(x, y)`.
///
/// Both components are rounded to [`PRECISION`](crate::PRECISION) decimal digits
/// on every write. Mutation is allowed until [`Vector2D::hash`] is first called;
/// from then on every mutating method returns [`VectorError::Frozen`]. Use
/// [`Vector2D::copy`] to get a mutable vector with the same value back.
///
/// With the `serde` feature the vector (de)serializes as `[x, y]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Debug, Default)]
pub struct Vector2D {
    x: f64,
    y: f64,
    /// Memoized hash. `Some` means the vector is frozen.
    hash_value: Option<HashValue>,
}

impl Vector2D {
    /// Construct a new, unhashed vector.
    ///
    /// # Arguments
    ///
    /// * `x`: X component, rounded to `PRECISION` digits.
    /// * `y`: Y component, rounded to `PRECISION` digits.
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D {
            x: round_component(x),
            y: round_component(y),
            hash_value: None,
        }
    }

    /// Returns the x component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Sets the x component, rounded to `PRECISION` digits.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn set_x(&mut self, value: f64) -> Result<(), VectorError> {
        self.ensure_mutable("cannot set x after hashing")?;
        self.x = round_component(value);
        Ok(())
    }

    /// Sets the y component, rounded to `PRECISION` digits.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn set_y(&mut self, value: f64) -> Result<(), VectorError> {
        self.ensure_mutable("cannot set y after hashing")?;
        self.y = round_component(value);
        Ok(())
    }

    /// Returns the hash of the `(x, y)` pair, computing and caching it on first use.
    ///
    /// This freezes the vector: afterwards all mutating methods fail. Equal
    /// vectors always produce equal hashes.
    pub fn hash(&mut self) -> HashValue {
        if let Some(hash) = self.hash_value {
            return hash;
        }
        let hash = hash_pair(self.x, self.y);
        self.hash_value = Some(hash);
        hash
    }

    /// Returns the cached hash without computing it.
    pub fn hash_value(&self) -> Option<HashValue> {
        self.hash_value
    }

    /// Whether the hash has been computed and the vector is read-only.
    pub fn is_frozen(&self) -> bool {
        self.hash_value.is_some()
    }

    /// Hashes the vector (if it was not already) and converts it into a
    /// [`FrozenVector2D`], which has no mutating methods at all.
    pub fn freeze(mut self) -> FrozenVector2D {
        let hash = self.hash();
        FrozenVector2D::from_parts(self.x, self.y, hash)
    }

    /// Returns an independent, unhashed copy with the same components.
    pub fn copy(&self) -> Vector2D {
        Vector2D {
            x: self.x,
            y: self.y,
            hash_value: None,
        }
    }

    /// Structural equality of the rounded components. NaN components never compare equal.
    pub fn equals(&self, other: &Vector2D) -> bool {
        self == other
    }

    /// Negation of [`Vector2D::equals`].
    pub fn not_equals(&self, other: &Vector2D) -> bool {
        self != other
    }

    /// Compares against a value of any type.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::NotComparable)` unless `other` is a
    /// [`Vector2D`] or a [`FrozenVector2D`].
    pub fn try_eq(&self, other: &dyn Any) -> Result<bool, VectorError> {
        if let Some(v) = other.downcast_ref::<Vector2D>() {
            Ok(self == v)
        } else if let Some(v) = other.downcast_ref::<FrozenVector2D>() {
            Ok(self == v)
        } else {
            Err(VectorError::NotComparable)
        }
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

    /// Iterates over `x` then `y`.
    pub fn iter(&self) -> core::array::IntoIter<f64, 2> {
        self.to_array().into_iter()
    }

    /// Returns `[x, y]`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Adds `other` in place: component-wise for a vector, broadcast for a scalar.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn add_in_place(&mut self, other: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        self.ensure_mutable("cannot add vector after hashing")?;
        self.combine(other.into(), |a, b| a + b);
        Ok(self)
    }

    /// Subtracts `other` in place.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn subtract_in_place(&mut self, other: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        self.ensure_mutable("cannot subtract vector after hashing")?;
        self.combine(other.into(), |a, b| a - b);
        Ok(self)
    }

    /// Multiplies by `other` in place.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn multiply_in_place(&mut self, other: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        self.ensure_mutable("cannot multiply vector after hashing")?;
        self.combine(other.into(), |a, b| a * b);
        Ok(self)
    }

    /// Divides by `other` in place.
    ///
    /// # Errors
    ///
    /// * `Err(VectorError::Frozen)` if the vector has been hashed.
    /// * `Err(VectorError::DivisionByZero)` if the scalar, or either component
    ///   of the divisor vector, is zero. Neither component is changed.
    pub fn divide_in_place(&mut self, other: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        self.ensure_mutable("cannot divide vector after hashing")?;
        let divisor = nonzero_divisor(other.into())?;
        self.combine(divisor, |a, b| a / b);
        Ok(self)
    }

    /// Returns `self + other` without modifying `self`.
    pub fn add(&self, other: impl Into<Operand>) -> Vector2D {
        let mut copy = self.copy();
        copy.combine(other.into(), |a, b| a + b);
        copy
    }

    /// Returns `self - other` without modifying `self`.
    pub fn subtract(&self, other: impl Into<Operand>) -> Vector2D {
        let mut copy = self.copy();
        copy.combine(other.into(), |a, b| a - b);
        copy
    }

    /// Returns `self * other` without modifying `self`.
    pub fn multiply(&self, other: impl Into<Operand>) -> Vector2D {
        let mut copy = self.copy();
        copy.combine(other.into(), |a, b| a * b);
        copy
    }

    /// Returns `self / other` without modifying `self`.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::DivisionByZero)` if the scalar, or either
    /// component of the divisor vector, is zero.
    pub fn divide(&self, other: impl Into<Operand>) -> Result<Vector2D, VectorError> {
        let mut copy = self.copy();
        copy.combine(nonzero_divisor(other.into())?, |a, b| a / b);
        Ok(copy)
    }

    /// Moves the vector by `other` in place. Same as [`Vector2D::add_in_place`].
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn move_by(&mut self, other: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        self.add_in_place(other)
    }

    /// Scales the vector by `other` in place. Same as [`Vector2D::multiply_in_place`].
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn scale(&mut self, other: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        self.multiply_in_place(other)
    }

    /// Returns a new vector with both components negated.
    pub fn negate(&self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }

    /// Euclidean norm `sqrt(x² + y²)`.
    pub fn magnitude(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    /// Rotates the vector counter-clockwise about the origin, in place.
    ///
    /// # Arguments
    ///
    /// * `angle_degrees`: Rotation angle in degrees; positive is counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns `Err(VectorError::Frozen)` if the vector has been hashed.
    pub fn rotate(&mut self, angle_degrees: f64) -> Result<&mut Self, VectorError> {
        self.ensure_mutable("cannot rotate vector after hashing")?;
        let radians = angle_degrees * PI / 180.0;
        let cosine = cos(radians);
        let sine = sin(radians);
        let (x, y) = (self.x, self.y);
        self.x = round_component(x * cosine - y * sine);
        self.y = round_component(y * cosine + x * sine);
        Ok(self)
    }

    fn ensure_mutable(&self, operation: &'static str) -> Result<(), VectorError> {
        if self.is_frozen() {
            Err(VectorError::Frozen(operation))
        } else {
            Ok(())
        }
    }

    /// Applies `op` to each component and its operand value, rounding the result.
    /// Callers are responsible for the freeze check.
    fn combine(&mut self, operand: Operand, op: impl Fn(f64, f64) -> f64) {
        let (ox, oy) = operand.components();
        self.x = round_component(op(self.x, ox));
        self.y = round_component(op(self.y, oy));
    }
}

fn nonzero_divisor(operand: Operand) -> Result<Operand, VectorError> {
    let (dx, dy) = operand.components();
    if dx == 0.0 || dy == 0.0 {
        return Err(VectorError::DivisionByZero);
    }
    Ok(operand)
}

/// Cloning is [`Vector2D::copy`]: the clone starts out unhashed.
impl Clone for Vector2D {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Component-wise `f64` equality: a vector with a NaN component is not
/// equal to anything, itself included.
impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialEq<FrozenVector2D> for Vector2D {
    fn eq(&self, other: &FrozenVector2D) -> bool {
        self.x == other.x() && self.y == other.y()
    }
}

impl Index<usize> for Vector2D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of range for Vector2D: the len is 2 but the index is {}", index),
        }
    }
}

impl<'a> IntoIterator for &'a Vector2D {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}
