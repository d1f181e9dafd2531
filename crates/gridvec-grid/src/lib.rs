//! Grid quantization for spatial bucketing.
//!
//! [`floor`] maps a coordinate to the left edge of the bucket that contains
//! it. [`GridSpec`] fixes a bucket size and offset once and quantizes whole
//! points into frozen cell keys.

pub mod cell;
pub mod error;
pub mod floor;

pub use cell::GridSpec;
pub use error::GridError;
pub use floor::{DEFAULT_OFFSET, floor, floor_with_offset};
