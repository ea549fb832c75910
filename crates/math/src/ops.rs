//! Free-function vector operations.
//!
//! Every function is pure and takes its operands by shared reference. The
//! dimension-generic ones are bounded on [`Vector`]; [`orthogonal_vector`] and
//! [`vector_area`] need a per-arity rule and are bounded on [`Orthogonal`].
//!
//! Degenerate inputs never panic. [`unit_vector`] and [`angle`] map a
//! zero-length operand to the origin and to 0 degrees. [`vector_component`]
//! and [`projection`] don't guard, so a zero-length `v2` yields NaN.

use crate::vec::{Vector, Vector2, Vector3};

/// Unit vector along the X axis, used to pick the 3D orthogonal vector.
pub const X_AXIS: Vector3 = Vector3::new(1.0, 0.0, 0.0);

/// Per-arity orthogonal vector and parallelogram area.
pub trait Orthogonal: Vector {
    fn orthogonal(&self) -> Self;
    fn area(&self, rhs: &Self) -> f64;
}

impl Orthogonal for Vector2 {
    /// Counterclockwise rotation by 90 degrees.
    #[inline]
    fn orthogonal(&self) -> Vector2 {
        Vector2::new(-self.y(), self.x())
    }

    #[inline]
    fn area(&self, rhs: &Vector2) -> f64 {
        dot_product(self, &rhs.orthogonal()).abs()
    }
}

impl Orthogonal for Vector3 {
    /// `v x X_AXIS`. Zero when `v` is parallel to the X axis.
    #[inline]
    fn orthogonal(&self) -> Vector3 {
        cross_product(self, &X_AXIS)
    }

    #[inline]
    fn area(&self, rhs: &Vector3) -> f64 {
        magnitude(&cross_product(self, rhs))
    }
}

#[inline]
pub fn sum<V: Vector>(v1: &V, v2: &V) -> V {
    v1.sum(v2)
}

/// `v1 - v2`.
#[inline]
pub fn subtract<V: Vector>(v1: &V, v2: &V) -> V {
    v1.subtract(v2)
}

/// Cross product by the rule of Sarrus. Follows the right-hand rule.
pub fn cross_product(v1: &Vector3, v2: &Vector3) -> Vector3 {
    Vector3::new(
        v1.y() * v2.z() - v1.z() * v2.y(),
        v1.z() * v2.x() - v1.x() * v2.z(),
        v1.x() * v2.y() - v1.y() * v2.x(),
    )
}

#[inline]
pub fn dot_product<V: Vector>(v1: &V, v2: &V) -> f64 {
    v1.dot(v2)
}

/// Multiplies every component by `k`. Negative `k` reverses direction.
#[inline]
pub fn scale<V: Vector>(v: &V, k: f64) -> V {
    v.scale(k)
}

/// Euclidean length.
#[inline]
pub fn magnitude<V: Vector>(v: &V) -> f64 {
    v.magnitude()
}

/// `v` scaled to length 1, or the origin if `v` has zero length.
pub fn unit_vector<V: Vector>(v: &V) -> V {
    let mag = magnitude(v);
    if mag == 0.0 {
        return V::zero();
    }
    scale(v, 1.0 / mag)
}

/// Angle between `v1` and `v2` in degrees, in `[0, 180]`.
///
/// Returns 0 whenever the arccosine is undefined: either operand has zero
/// length, or rounding pushed the cosine just outside `[-1, 1]`.
pub fn angle<V: Vector>(v1: &V, v2: &V) -> f64 {
    let cos = dot_product(v1, v2) / (magnitude(v1) * magnitude(v2));
    let angle = cos.acos().to_degrees();
    if angle.is_nan() {
        return 0.0;
    }
    angle
}

/// Signed length of the projection of `v1` onto `v2`.
///
/// Not guarded: a zero-length `v2` gives NaN.
#[inline]
pub fn vector_component<V: Vector>(v1: &V, v2: &V) -> f64 {
    dot_product(v1, v2) / magnitude(v2)
}

/// Projection of `v1` onto `v2`.
#[inline]
pub fn projection<V: Vector>(v1: &V, v2: &V) -> V {
    scale(&unit_vector(v2), vector_component(v1, v2))
}

#[inline]
pub fn orthogonal_vector<V: Orthogonal>(v: &V) -> V {
    v.orthogonal()
}

/// Area of the parallelogram spanned by `v1` and `v2`.
#[inline]
pub fn vector_area<V: Orthogonal>(v1: &V, v2: &V) -> f64 {
    v1.area(v2)
}
