//! This module defines the error types used by the `gridvec-grid` crate.

#![warn(missing_docs)]

/// Error type for grid quantization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error for an invalid bucket size.
    /// This variant is returned when the bucket size is zero or NaN.
    InvalidSize(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidSize(msg) => write!(f, "Invalid bucket size: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
