use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits used by `Display` when the formatter carries no precision.
pub const DEFAULT_PRECISION: usize = 6;

/// Per-arity primitives shared by [`Vector2`] and [`Vector3`].
///
/// The composite operations in [`crate::ops`] (unit vector, angle, vector
/// component, projection) are written once against this trait.
pub trait Vector: Copy {
    fn zero() -> Self;
    fn sum(&self, rhs: &Self) -> Self;
    fn subtract(&self, rhs: &Self) -> Self;
    fn scale(&self, k: f64) -> Self;
    fn dot(&self, rhs: &Self) -> f64;
    fn magnitude(&self) -> f64;
}

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: ops::$trait::$func(self.$e, rhs.$e), )* }
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<f64> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: f64) -> $v {
                $v { $( $e: ops::$trait::$func(self.$e, rhs), )* }
            }
        }
    }
}

macro_rules! vec_impl {
    ($v: ident, $n: expr, $($e: ident),*) => {

        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(C)]
        pub struct $v {
            $( $e: f64, )*
        }

        impl $v {
            #[inline]
            pub const fn new($( $e: f64, )*) -> $v {
                $v { $( $e, )* }
            }

            /// The origin.
            #[inline]
            pub const fn zero() -> $v {
                $v { $( $e: 0.0, )* }
            }

            $(
                #[inline]
                pub const fn $e(&self) -> f64 {
                    self.$e
                }
            )*

            #[inline]
            pub fn to_array(self) -> [f64; $n] {
                bytemuck::cast(self)
            }
        }

        impl From<[f64; $n]> for $v {
            #[inline]
            fn from(a: [f64; $n]) -> $v {
                bytemuck::cast(a)
            }
        }

        impl From<$v> for [f64; $n] {
            #[inline]
            fn from(v: $v) -> [f64; $n] {
                v.to_array()
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let prec = f.precision().unwrap_or(DEFAULT_PRECISION);
                write!(f, "({})",
                        [$(
                           format!("{:.prec$}", self.$e, prec = prec),
                        )*].join(", "))
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )* }
            }
        }

        impl ops::Mul<$v> for f64 {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                rhs * self
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);

        scalar_op_impl!(Mul, mul, $v, $($e),*);
        scalar_op_impl!(Div, div, $v, $($e),*);

        impl Vector for $v {
            #[inline]
            fn zero() -> $v {
                $v::zero()
            }

            #[inline]
            fn sum(&self, rhs: &$v) -> $v {
                *self + *rhs
            }

            #[inline]
            fn subtract(&self, rhs: &$v) -> $v {
                *self - *rhs
            }

            #[inline]
            fn scale(&self, k: f64) -> $v {
                *self * k
            }

            #[inline]
            fn dot(&self, rhs: &$v) -> f64 {
                // Adding negative zero is a nop in IEEE 754, adding positive
                // zero would turn a -0.0 product sum into 0.0.
                $( self.$e * rhs.$e + )* (-0.0)
            }

            #[inline]
            fn magnitude(&self) -> f64 {
                // hypot folds without squaring, so huge or tiny components
                // don't overflow or flush to zero.
                0.0_f64 $( .hypot(self.$e) )*
            }
        }
    }
}

vec_impl!(Vector2, 2, x, y);
vec_impl!(Vector3, 3, x, y, z);
