//! Operator overloads, wired to the named methods on [`Vector2D`].
//!
//! `+` and `*` also accept a scalar on the left and delegate to the
//! vector-on-the-left form. `-` and `/` only take the vector on the left.
//! There are no compound-assignment operators: in-place arithmetic can fail
//! on a frozen vector, so it stays on the fallible `*_in_place` methods.
//!
//! # Panics
//!
//! Like integer division, `/` panics when the divisor is zero or has a zero
//! component. Use [`Vector2D::divide`] to get the error instead.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::{Operand, Vector2D};

macro_rules! impl_binary_op {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl<T: Into<Operand>> $trait<T> for Vector2D {
            type Output = Vector2D;

            fn $fn(self, rhs: T) -> Vector2D {
                Vector2D::$method(&self, rhs)
            }
        }

        impl<T: Into<Operand>> $trait<T> for &Vector2D {
            type Output = Vector2D;

            fn $fn(self, rhs: T) -> Vector2D {
                Vector2D::$method(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, subtract);
impl_binary_op!(Mul, mul, multiply);

macro_rules! impl_div {
    ($lhs:ty) => {
        impl<T: Into<Operand>> Div<T> for $lhs {
            type Output = Vector2D;

            fn div(self, rhs: T) -> Vector2D {
                match Vector2D::divide(&self, rhs) {
                    Ok(quotient) => quotient,
                    Err(e) => panic!("attempt to divide a vector by zero: {}", e),
                }
            }
        }
    };
}

impl_div!(Vector2D);
impl_div!(&Vector2D);

macro_rules! impl_scalar_left_op {
    ($scalar:ty, $trait:ident, $fn:ident, $method:ident) => {
        impl $trait<Vector2D> for $scalar {
            type Output = Vector2D;

            fn $fn(self, rhs: Vector2D) -> Vector2D {
                Vector2D::$method(&rhs, self)
            }
        }

        impl $trait<&Vector2D> for $scalar {
            type Output = Vector2D;

            fn $fn(self, rhs: &Vector2D) -> Vector2D {
                Vector2D::$method(rhs, self)
            }
        }
    };
}

impl_scalar_left_op!(f64, Add, add, add);
impl_scalar_left_op!(f64, Mul, mul, multiply);
impl_scalar_left_op!(i32, Add, add, add);
impl_scalar_left_op!(i32, Mul, mul, multiply);

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        self.negate()
    }
}

impl Neg for &Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        self.negate()
    }
}
