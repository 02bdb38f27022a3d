mod ops;
pub(crate) mod view;

use std::{array, fmt, slice};

use bytemuck::{Pod, Zeroable};

use crate::{Mat2, Number, One, Sqrt, Trig, Zero};

pub type Vec1<T> = Vector<T, 1>;
pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

pub type Vec1f = Vec1<f32>;
pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;

/// A statically sized vector of `N` elements of type `T`.
///
/// # Construction
///
/// - [`vec1`], [`vec2`], [`vec3`], [`vec4`] for vectors of known dimension.
/// - [`Vector::splat`] to repeat a single element.
/// - [`Vector::from_fn`] to compute each element from its index.
/// - [`From`] conversions from arrays, and from tuples that mix smaller vectors and single
///   elements (e.g. a [`Vec2`] and a `T` flatten into a [`Vec3`]).
///
/// # Element Access
///
/// - Indexing with `usize` (`v[0]`).
/// - Named fields for vectors of up to 4 elements: `v.x`, `v.y`, `v.z`, `v.w`, along with the
///   `r/g/b/a` and `s/t/p/q` alias families, and `v.w`/`v.h` for 2-element vectors used as
///   sizes.
/// - [`Vector::as_slice`] and [`Vector::as_array`] for bulk access.
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` are elementwise; `*` and `/` also accept a scalar operand. Comparison
/// with `==` is elementwise equality, while `<` and friends compare lexicographically. For
/// applying arbitrary scalar functions across elements, see the [`cw`] module.
///
/// [`cw`]: crate::cw
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with all elements set to zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the positive X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the positive Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the positive X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the positive Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the positive Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the positive X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the positive Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the positive Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the positive W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with all elements set to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector by invoking a closure with each element's index.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new [`Vector`] of the results.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Combines two vectors elementwise, returning a [`Vector`] of pairs.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying array.
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying array.
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns the elements as a slice.
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns a vector of references to this vector's elements.
    pub fn as_ref(&self) -> Vector<&T, N> {
        Vector::from_fn(|i| &self.0[i])
    }

    /// Consumes this vector and returns the contained array of elements.
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the squared length of this vector.
    ///
    /// This is cheaper to compute than [`Self::length`] and can stand in for it in many cases,
    /// e.g. when comparing distances.
    #[doc(alias = "mag2")]
    pub fn length2(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Computes the length (or magnitude) of this vector.
    #[doc(alias = "mag", alias = "magnitude")]
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a vector with the same direction, but a
    /// length of 1.
    ///
    /// The zero vector has no direction; normalizing it divides by zero.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product of two vectors.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the unsigned angle between two vectors.
    ///
    /// The returned angle is in radians, in the range [0, π].
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Sqrt + Trig,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }
}

impl<T> Vector<T, 1> {
    /// Removes the only element, leaving an empty vector.
    pub fn truncate(self) -> Vector<T, 0> {
        [].into()
    }

    /// Appends `value` to this vector, returning a 2-element vector.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element, returning a 1-element vector.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.into_array();
        [x].into()
    }

    /// Appends `value` to this vector, returning a 3-element vector.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates this vector clockwise by `radians` (in a Y-up coordinate system).
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates this vector counterclockwise by `radians` (in a Y-up coordinate system).
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the signed clockwise rotation (in radians) that aligns `self` with `other`.
    ///
    /// The result is in the range [-π, π] and assumes that the Y axis points up; if the Y axis
    /// points down, swap the arguments.
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the perpendicular dot product of `self` and `other` (the 2-dimensional analog of
    /// the cross product).
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element, returning a 2-element vector.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends `value` to this vector, returning a 4-element vector.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both inputs, oriented by the right-hand rule, and its length
    /// equals the area of the parallelogram the inputs span.
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();
        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element, returning a 3-element vector.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

// Flattening conversions: a longer vector can be assembled from any mix of shorter vectors and
// single elements, in argument order.

impl<T> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    fn from((v, z): (Vector<T, 2>, T)) -> Self {
        v.extend(z)
    }
}

impl<T> From<(T, Vector<T, 2>)> for Vector<T, 3> {
    fn from((x, v): (T, Vector<T, 2>)) -> Self {
        let [y, z] = v.into_array();
        [x, y, z].into()
    }
}

impl<T> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    fn from((v, w): (Vector<T, 3>, T)) -> Self {
        v.extend(w)
    }
}

impl<T> From<(T, Vector<T, 3>)> for Vector<T, 4> {
    fn from((x, v): (T, Vector<T, 3>)) -> Self {
        let [y, z, w] = v.into_array();
        [x, y, z, w].into()
    }
}

impl<T> From<(Vector<T, 2>, Vector<T, 2>)> for Vector<T, 4> {
    fn from((a, b): (Vector<T, 2>, Vector<T, 2>)) -> Self {
        let [x, y] = a.into_array();
        let [z, w] = b.into_array();
        [x, y, z, w].into()
    }
}

impl<T> From<(Vector<T, 2>, T, T)> for Vector<T, 4> {
    fn from((v, z, w): (Vector<T, 2>, T, T)) -> Self {
        let [x, y] = v.into_array();
        [x, y, z, w].into()
    }
}

impl<T> From<(T, Vector<T, 2>, T)> for Vector<T, 4> {
    fn from((x, v, w): (T, Vector<T, 2>, T)) -> Self {
        let [y, z] = v.into_array();
        [x, y, z, w].into()
    }
}

impl<T> From<(T, T, Vector<T, 2>)> for Vector<T, 4> {
    fn from((x, y, v): (T, T, Vector<T, 2>)) -> Self {
        let [z, w] = v.into_array();
        [x, y, z, w].into()
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        for elem in &self.0 {
            tuple.field(elem);
        }
        tuple.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tuple = f.debug_tuple("");
        for elem in &self.0 {
            tuple.field(&DebugViaDisplay(elem));
        }
        tuple.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Creates a [`Vector`] containing the given elements.
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Creates a [`Vector`] containing the given elements.
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Creates a [`Vector`] containing the given elements.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a [`Vector`] containing the given elements.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Removes the component of `v` that is parallel to `unit` and normalizes the result.
///
/// This is the Gram-Schmidt step for turning linearly independent vectors into an orthonormal
/// set: the returned vector has length 1 and is orthogonal to `unit`. `unit` must already have
/// length 1, while `v` only has to be non-collinear with it.
pub fn orthonormalize<T, const N: usize>(v: Vector<T, N>, unit: Vector<T, N>) -> Vector<T, N>
where
    T: Number + Sqrt,
{
    (v - unit * v.dot(unit)).normalize()
}

/// Completes a unit vector `i` into an orthonormal basis `(i, j, k)`.
///
/// `i` must have length 1; `almost_j` only has to be non-collinear with `i`. The returned `j` is
/// the unit vector orthogonal to `i` in the plane spanned by `i` and `almost_j`, pointing into
/// the same half-plane as `almost_j`, and `k` is orthogonal to both. The triple is oriented such
/// that `cross(i, k) == j`; with `i` pointing backward (positive Z) and `almost_j` up, `j` is up
/// and `k` points right, the usual eye-space axes.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let (j, k) = orthonormal_basis(Vec3f::Z, Vec3f::Y);
/// assert_eq!(j, Vec3f::Y);
/// assert_eq!(k, Vec3f::X);
/// ```
pub fn orthonormal_basis<T>(
    i: Vector<T, 3>,
    almost_j: Vector<T, 3>,
) -> (Vector<T, 3>, Vector<T, 3>)
where
    T: Number + Sqrt,
{
    // `i` and `almost_j` are not necessarily orthogonal, so `k` needs normalization.
    let k = almost_j.cross(i).normalize();
    // `i` and `k` are orthogonal unit vectors, so `j` comes out normalized.
    let j = i.cross(k);
    (j, k)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn access() {
        let mut v4 = Vec4f::W;
        assert_eq!(v4.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!((v4.x, v4.y, v4.z, v4.w), (0.0, 0.0, 0.0, 1.0));
        assert_eq!((v4.r, v4.g, v4.b, v4.a), (0.0, 0.0, 0.0, 1.0));
        assert_eq!((v4.s, v4.t, v4.p, v4.q), (0.0, 0.0, 0.0, 1.0));
        v4.x = 2.0;
        v4.a = 3.0;
        assert_eq!(v4, vec4(2.0, 0.0, 0.0, 3.0));

        let mut size = vec2(640, 480);
        assert_eq!((size.w, size.h), (640, 480));
        size.h += 120;
        assert_eq!(size, vec2(640, 600));

        assert_eq!(vec3(1, 2, 3)[2], 3);
    }

    #[test]
    fn fmt() {
        let v = Vec4f::W;
        assert_eq!(format!("{v}"), "(0, 0, 0, 1)");
        assert_eq!(format!("{v:?}"), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(vec3(1, 2, 3) < vec3(1, 2, 4));
        assert!(vec3(1, 2, 3) < vec3(2, 0, 0));
        assert!(vec3(1, 2, 3) <= vec3(1, 2, 3));
        assert!(vec2(2, 0) > vec2(1, 9));
        // The first element decides; a NaN only poisons the comparison once it is reached.
        assert_eq!(vec2(1.0, f32::NAN).partial_cmp(&vec2(2.0, 0.0)), Some(std::cmp::Ordering::Less));
        assert_eq!(vec2(1.0, f32::NAN).partial_cmp(&vec2(1.0, 0.0)), None);
    }

    #[test]
    fn dot_product() {
        assert_eq!(vec2(1.0, 0.0).dot(vec2(0.0, 1.0)), 0.0);
        assert_eq!(vec2(1.0, 2.0).dot(vec2(3.0, 4.0)), 11.0);
        assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
    }

    #[test]
    fn cross_product() {
        let x = Vec3f::X;
        let y = Vec3f::Y;
        let z = Vec3f::Z;
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);

        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-5.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_eq!(c.dot(a), 0.0);
        assert_eq!(c.dot(b), 0.0);
    }

    #[test]
    fn lengths() {
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_relative_eq!(vec2(3.0f32, 4.0).normalize().length(), 1.0);
        assert_eq!(vec3(0.0, -2.5, 0.0).normalize(), vec3(0.0, -1.0, 0.0));
    }

    #[test]
    fn rotate() {
        let v = vec2(1.0f32, 0.0);
        assert_abs_diff_eq!(v.rotate_counterclockwise(TAU / 4.0), vec2(0.0, 1.0), epsilon = 1e-7);
        assert_abs_diff_eq!(v.rotate_clockwise(TAU / 4.0), vec2(0.0, -1.0), epsilon = 1e-7);
        assert_abs_diff_eq!(v.rotate_counterclockwise(TAU / 2.0), vec2(-1.0, 0.0), epsilon = 1e-7);
    }

    #[test]
    fn angles() {
        let x = vec2(1.0f32, 0.0);
        let y = vec2(0.0f32, 1.0);
        assert_abs_diff_eq!(x.abs_angle_to(y), TAU / 4.0);
        assert_abs_diff_eq!(y.abs_angle_to(x), TAU / 4.0);
        assert_abs_diff_eq!(x.abs_angle_to(x), 0.0);

        assert_abs_diff_eq!(y.signed_angle_to(x), TAU / 4.0);
        assert_abs_diff_eq!(x.signed_angle_to(y), -TAU / 4.0);
    }

    #[test]
    fn truncate_extend() {
        let v = vec2(1, 2).extend(3).extend(4);
        assert_eq!(v, vec4(1, 2, 3, 4));
        assert_eq!(v.truncate(), vec3(1, 2, 3));
        assert_eq!(v.truncate().truncate(), vec2(1, 2));
    }

    #[test]
    fn flattening() {
        assert_eq!(Vec3::from((vec2(1, 2), 3)), vec3(1, 2, 3));
        assert_eq!(Vec3::from((1, vec2(2, 3))), vec3(1, 2, 3));
        assert_eq!(Vec4::from((vec3(1, 2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((1, vec3(2, 3, 4))), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((vec2(1, 2), vec2(3, 4))), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((vec2(1, 2), 3, 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((1, vec2(2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((1, 2, vec2(3, 4))), vec4(1, 2, 3, 4));
    }

    #[test]
    fn iteration() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.into_iter().sum::<i32>(), 6);
        assert_eq!((&v).into_iter().copied().max(), Some(3));

        let mut v = v;
        for elem in &mut v {
            *elem *= 10;
        }
        assert_eq!(v, vec3(10, 20, 30));
    }

    #[test]
    fn gram_schmidt() {
        let v = orthonormalize(vec3(1.0, 1.0, 0.0), Vec3f::X);
        assert_relative_eq!(v, Vec3f::Y, epsilon = 1e-6);

        let i = Vec3f::X;
        let almost_j = vec3(0.0, 1.0, 0.1);
        let (j, k) = orthonormal_basis(i, almost_j);

        assert_relative_eq!(j.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(k.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(i.dot(j), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(i.dot(k), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(j.dot(k), 0.0, epsilon = 1e-6);

        // `j` keeps pointing into the same half-plane as `almost_j`.
        assert!(j.dot(almost_j) > 0.0);

        // The triple is oriented so that i × k = j.
        assert_relative_eq!(i.cross(k), j, epsilon = 1e-6);
    }
}
