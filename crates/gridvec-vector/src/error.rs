//! Error types for the vector library.
//!
//! This module defines the errors returned by fallible [`Vector2D`](crate::Vector2D)
//! operations: mutating a frozen vector, dividing by a zero component,
//! indexing past its two components and comparing against a foreign type.

use core::fmt;

/// Errors that can occur when reading, mutating or comparing vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Error for mutating a frozen vector.
    /// This variant is returned by setters, in-place arithmetic and rotation once
    /// the vector's hash has been computed. The message names the blocked operation.
    Frozen(&'static str),
    /// Error for dividing by a zero scalar or a vector with a zero component.
    /// The vector is left unchanged.
    DivisionByZero,
    /// Error for an index other than `0` or `1`.
    IndexOutOfRange(usize),
    /// Error for comparing a vector with a value that is not a vector.
    NotComparable,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::Frozen(msg) => write!(f, "Frozen vector: {}", msg),
            VectorError::DivisionByZero => write!(f, "Vector division by zero"),
            VectorError::IndexOutOfRange(index) => {
                write!(f, "Vector index out of range: {} (length is 2)", index)
            }
            VectorError::NotComparable => write!(f, "Vector is not comparable with this type"),
        }
    }
}

impl core::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let frozen = VectorError::Frozen("cannot set x after hashing");
        assert_eq!(frozen.to_string(), "Frozen vector: cannot set x after hashing");
        assert_eq!(
            VectorError::IndexOutOfRange(2).to_string(),
            "Vector index out of range: 2 (length is 2)"
        );
        assert_eq!(VectorError::DivisionByZero.to_string(), "Vector division by zero");
        assert_eq!(
            VectorError::NotComparable.to_string(),
            "Vector is not comparable with this type"
        );
    }
}
