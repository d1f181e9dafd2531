#![warn(missing_docs)]

//! Per-axis quantization of points into grid cells.

use gridvec_vector::{FrozenVector2D, Vector2D};

use crate::error::GridError;
use crate::floor::{DEFAULT_OFFSET, bucket_left_edge, validate_size};

/// Bucket geometry shared by both axes: bucket length and offset.
///
/// The size is validated once on construction, so quantizing through a
/// `GridSpec` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridSpec"))]
pub struct GridSpec {
    /// Bucket length in world units
    size: f64,
    /// Shift applied before bucketing
    offset: f64,
}

impl GridSpec {
    /// Creates a new `GridSpec`.
    ///
    /// # Arguments
    /// * `size` - Bucket length; must not be zero
    /// * `offset` - Shift applied before bucketing
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid or `GridError::InvalidSize` if `size` is zero or NaN
    pub fn new(size: f64, offset: f64) -> Result<Self, GridError> {
        validate_size(size)?;
        Ok(GridSpec { size, offset })
    }

    /// Creates a `GridSpec` with [`DEFAULT_OFFSET`].
    pub fn with_default_offset(size: f64) -> Result<Self, GridError> {
        Self::new(size, DEFAULT_OFFSET)
    }

    /// Bucket length.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Offset applied before bucketing.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Left edge of the bucket containing `value`.
    pub fn floor(&self, value: f64) -> f64 {
        bucket_left_edge(value, self.size, self.offset)
    }

    /// Quantizes both axes of `point` and returns the cell as a frozen vector,
    /// ready to be used as a key.
    ///
    /// # Arguments
    /// * `point` - Point in world coordinates
    ///
    /// # Returns
    /// * `FrozenVector2D` - Bottom-left corner of the cell containing `point`
    pub fn cell_of(&self, point: &Vector2D) -> FrozenVector2D {
        Vector2D::new(self.floor(point.x()), self.floor(point.y())).freeze()
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GridSpec (size: {}, offset: {})", self.size, self.offset)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridSpec {
    size: f64,
    #[serde(default = "default_offset")]
    offset: f64,
}

#[cfg(feature = "serde")]
fn default_offset() -> f64 {
    DEFAULT_OFFSET
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridSpec> for GridSpec {
    type Error = GridError;

    fn try_from(raw: RawGridSpec) -> Result<Self, Self::Error> {
        GridSpec::new(raw.size, raw.offset)
    }
}
