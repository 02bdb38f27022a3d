//! Componentwise application of scalar functions to vectors, matrices, and quaternions.
//!
//! The functions in this module apply a scalar function to every element of a [`Tuple`],
//! producing a new tuple of the same shape. Operands may be mixed: each argument is either a
//! tuple of the result shape, or a single scalar which is *broadcast*, i.e. treated as a tuple
//! with that value in every element. At least one operand has to be an actual tuple, otherwise
//! there is no shape to produce and the call fails to compile.
//!
//! The named arithmetic functions ([`add`], [`sub`], [`mul`], [`div`]) always work elementwise.
//! The distinction matters for matrices, where the `*` operator is reserved for the
//! linear-algebra matrix product: `a * b` multiplies matrices, `mul(a, b)` multiplies their
//! corresponding elements.
//!
//! # Examples
//!
//! ```
//! # use linmath::*;
//! let v = vec3(1.0, 2.0, 3.0);
//!
//! // One tuple operand, one broadcast scalar.
//! assert_eq!(cw::add(v, 1.0), vec3(2.0, 3.0, 4.0));
//! assert_eq!(cw::sub(10.0, v), vec3(9.0, 8.0, 7.0));
//!
//! // Arbitrary scalar functions of one to three arguments.
//! assert_eq!(cw::map(v, scalar::neg), vec3(-1.0, -2.0, -3.0));
//! assert_eq!(cw::zip3(v, 1.5, 2.5, scalar::clamp), vec3(1.5, 2.0, 2.5));
//! ```

use std::ops::{Add, Div, Mul, Sub};

use crate::{scalar, Matrix, Quat, Scalar, Tuple, Vector};

/// An operand of a componentwise operation with result shape `O`.
///
/// Implemented by `O` itself and by `O`'s element type, which is broadcast to every index.
pub trait Operand<O: Tuple> {
    /// Returns the element this operand contributes at linear index `index`.
    fn at(&self, index: usize) -> O::Elem;
}

impl<O: Tuple> Operand<O> for O {
    #[inline]
    fn at(&self, index: usize) -> O::Elem {
        Tuple::at(self, index)
    }
}

impl<T: Scalar, const N: usize> Operand<Vector<T, N>> for T {
    #[inline]
    fn at(&self, _index: usize) -> T {
        *self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Operand<Matrix<T, R, C>> for T {
    #[inline]
    fn at(&self, _index: usize) -> T {
        *self
    }
}

impl<T: Scalar> Operand<Quat<T>> for T {
    #[inline]
    fn at(&self, _index: usize) -> T {
        *self
    }
}

/// Applies a unary scalar function to every element of a tuple.
///
/// The operand must be an actual tuple here; with a single scalar there would be no shape to
/// produce.
pub fn map<O: Tuple>(operand: O, mut f: impl FnMut(O::Elem) -> O::Elem) -> O {
    O::from_fn(|i| f(operand.at(i)))
}

/// Applies a binary scalar function elementwise across two operands.
///
/// Either operand (but not both) may be a scalar, which is broadcast to every element.
pub fn zip<O: Tuple>(
    lhs: impl Operand<O>,
    rhs: impl Operand<O>,
    mut f: impl FnMut(O::Elem, O::Elem) -> O::Elem,
) -> O {
    O::from_fn(|i| f(lhs.at(i), rhs.at(i)))
}

/// Applies a ternary scalar function elementwise across three operands.
///
/// Any subset of the operands may be scalars, as long as at least one is a tuple.
pub fn zip3<O: Tuple>(
    a: impl Operand<O>,
    b: impl Operand<O>,
    c: impl Operand<O>,
    mut f: impl FnMut(O::Elem, O::Elem, O::Elem) -> O::Elem,
) -> O {
    O::from_fn(|i| f(a.at(i), b.at(i), c.at(i)))
}

/// Elementwise addition.
pub fn add<O: Tuple>(lhs: impl Operand<O>, rhs: impl Operand<O>) -> O
where
    O::Elem: Add<Output = O::Elem>,
{
    zip(lhs, rhs, scalar::add)
}

/// Elementwise subtraction.
pub fn sub<O: Tuple>(lhs: impl Operand<O>, rhs: impl Operand<O>) -> O
where
    O::Elem: Sub<Output = O::Elem>,
{
    zip(lhs, rhs, scalar::sub)
}

/// Elementwise multiplication.
///
/// For matrices this is *not* the same as the `*` operator, which computes the matrix product.
pub fn mul<O: Tuple>(lhs: impl Operand<O>, rhs: impl Operand<O>) -> O
where
    O::Elem: Mul<Output = O::Elem>,
{
    zip(lhs, rhs, scalar::mul)
}

/// Elementwise division.
pub fn div<O: Tuple>(lhs: impl Operand<O>, rhs: impl Operand<O>) -> O
where
    O::Elem: Div<Output = O::Elem>,
{
    zip(lhs, rhs, scalar::div)
}

/// Invokes `f` with the elements of a 2-element vector as separate arguments.
///
/// The `split` family is the counterpart of [`zip`]: instead of applying a scalar function
/// across tuples, it feeds a single tuple's elements *into* a multi-parameter function.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// fn hypot(x: f32, y: f32) -> f32 {
///     (x * x + y * y).sqrt()
/// }
///
/// assert_eq!(cw::split2(vec2(3.0, 4.0), hypot), 5.0);
/// ```
pub fn split2<T, R>(vector: Vector<T, 2>, f: impl FnOnce(T, T) -> R) -> R {
    let [x, y] = vector.into_array();
    f(x, y)
}

/// Invokes `f` with the elements of a 3-element vector as separate arguments.
pub fn split3<T, R>(vector: Vector<T, 3>, f: impl FnOnce(T, T, T) -> R) -> R {
    let [x, y, z] = vector.into_array();
    f(x, y, z)
}

/// Invokes `f` with the elements of a 4-element vector as separate arguments.
pub fn split4<T, R>(vector: Vector<T, 4>, f: impl FnOnce(T, T, T, T) -> R) -> R {
    let [x, y, z, w] = vector.into_array();
    f(x, y, z, w)
}
