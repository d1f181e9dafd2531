//! Right-hand operand of vector arithmetic.

use crate::{FrozenVector2D, Vector2D};

/// The right-hand side of an arithmetic operation.
///
/// A `Pair` is combined component-wise; a `Scalar` is broadcast to both
/// components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A single number applied to `x` and `y` alike.
    Scalar(f64),
    /// An `(x, y)` pair applied component-wise.
    Pair(f64, f64),
}

impl Operand {
    /// Returns the values applied to `x` and `y` respectively.
    pub const fn components(self) -> (f64, f64) {
        match self {
            Operand::Scalar(s) => (s, s),
            Operand::Pair(x, y) => (x, y),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<&Vector2D> for Operand {
    fn from(v: &Vector2D) -> Self {
        Operand::Pair(v.x(), v.y())
    }
}

impl From<Vector2D> for Operand {
    fn from(v: Vector2D) -> Self {
        Operand::from(&v)
    }
}

impl From<&FrozenVector2D> for Operand {
    fn from(v: &FrozenVector2D) -> Self {
        Operand::Pair(v.x(), v.y())
    }
}

impl From<FrozenVector2D> for Operand {
    fn from(v: FrozenVector2D) -> Self {
        Operand::from(&v)
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<[f64; 2]> for Operand {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand::Pair(x, y)
    }
}
