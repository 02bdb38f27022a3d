mod ops;

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::vector::view::XYZW;
use crate::{vec4, Mat4, Number, One, Sqrt, Trig, Vector, Zero};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, where `w` is the real part and is stored last. Operations that interpret a [`Quat`]
/// as a rotation expect it to have length 1; none of them enforce or check this.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Creates a quaternion from its imaginary part `xyz` and real part `w`.
    pub fn from_parts(xyz: Vector<T, 3>, w: T) -> Self {
        Self {
            vec: xyz.extend(w),
        }
    }

    /// Returns the components as a 4-dimensional [`Vector`].
    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Returns the components as a mutable 4-dimensional [`Vector`].
    pub fn as_mut_vec(&mut self) -> &mut Vector<T, 4> {
        &mut self.vec
    }

    /// Returns the imaginary part as a 3-dimensional [`Vector`].
    pub fn xyz(self) -> Vector<T, 3> {
        self.vec.truncate()
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the dot product of two quaternions.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns this quaternion with its imaginary part negated.
    ///
    /// For unit quaternions, the conjugate is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse, so that `q * q.inverse()` is the identity.
    ///
    /// Unlike [`Quat::conjugate`], this also works for non-unit quaternions.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        Self {
            vec: self.conjugate().vec / self.length2(),
        }
    }

    /// Rotates a vector by this quaternion.
    ///
    /// `self` must have length 1 for this to be a pure rotation.
    pub fn rotate(self, vec: Vector<T, 3>) -> Vector<T, 3>
    where
        T: Number,
    {
        // Expanded sandwich product `q * v * q^-1` for unit quaternions.
        let two = T::ONE + T::ONE;
        let imag = self.xyz();
        let cross = imag.cross(vec);
        vec + cross * (two * self.w) + imag.cross(cross) * two
    }
}

/// Converts a unit quaternion into the equivalent rotation matrix for homogeneous coordinates.
impl<T: Number> From<Quat<T>> for Mat4<T> {
    fn from(quat: Quat<T>) -> Self {
        let two = T::ONE + T::ONE;
        let [x, y, z, w] = quat.vec.into_array();
        Mat4::from_rows([
            [
                T::ONE - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
                T::ZERO,
            ],
            [
                two * (x * y + z * w),
                T::ONE - two * (x * x + z * z),
                two * (y * z - x * w),
                T::ZERO,
            ],
            [
                two * (x * z - y * w),
                two * (y * z + x * w),
                T::ONE - two * (x * x + y * y),
                T::ZERO,
            ],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(quat: Quat<T>) -> Self {
        quat.vec
    }
}

/// Gives access to the `x`/`y`/`z`/`w` components as fields, like for vectors.
impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.vec, f)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{vec3, Mat2f, Mat4f, Vec3f};

    use super::*;

    #[test]
    fn components() {
        let mut q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
        q.w = 0.5;
        assert_eq!(q, Quat::from_vec(vec4(1.0, 2.0, 3.0, 0.5)));
        assert_eq!(q.xyz(), vec3(1.0, 2.0, 3.0));
        assert_eq!(Quat::from_parts(vec3(1.0, 2.0, 3.0), 0.5), q);
        assert_eq!(Quatf::default(), Quatf::IDENTITY);
    }

    #[test]
    fn lengths() {
        let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.length2(), 30.0);
        assert_abs_diff_eq!(q.length(), 30.0f32.sqrt());
        assert_abs_diff_eq!(q.normalize().length(), 1.0);
    }

    #[test]
    fn axis_rotations() {
        let x = Quatf::from_rotation_x(FRAC_PI_2);
        let y = Quatf::from_rotation_y(FRAC_PI_2);
        let z = Quatf::from_rotation_z(FRAC_PI_2);

        assert_abs_diff_eq!(x.rotate(Vec3f::Y), Vec3f::Z, epsilon = 1e-6);
        assert_abs_diff_eq!(y.rotate(Vec3f::Z), Vec3f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(z.rotate(Vec3f::X), Vec3f::Y, epsilon = 1e-6);

        // A half turn, as two quarter turns.
        assert_abs_diff_eq!((z * z).rotate(Vec3f::X), -Vec3f::X, epsilon = 1e-6);
    }

    #[test]
    fn hamilton_units() {
        let i = Quat::from_components(1, 0, 0, 0);
        let j = Quat::from_components(0, 1, 0, 0);
        let k = Quat::from_components(0, 0, 1, 0);
        let minus_one = Quat::from_components(0, 0, 0, -1);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
    }

    #[test]
    fn composition_applies_right_factor_first() {
        let first = Quatf::from_rotation_z(FRAC_PI_2);
        let then = Quatf::from_rotation_x(0.8);
        let v = vec3(0.3, -1.2, 2.5);
        assert_relative_eq!(
            (then * first).rotate(v),
            then.rotate(first.rotate(v)),
            max_relative = 1e-5
        );
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = Quatf::from_rotation_xyz(0.3, -0.6, 1.1);
        let v = vec3(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(q.conjugate().rotate(q.rotate(v)), v, epsilon = 1e-5);

        // `inverse` also handles non-unit quaternions.
        let scaled = Quat::from_vec(Vector::from(q) * 3.0);
        assert_abs_diff_eq!(scaled * scaled.inverse(), Quatf::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn z_rotation_matches_2d_rotation() {
        let angle = 0.7;
        let v = vec3(1.5, -0.5, 2.0);
        let rotated = Quatf::from_rotation_z(angle).rotate(v);
        let xy = Mat2f::rotation_counterclockwise(angle) * v.truncate();
        assert_abs_diff_eq!(rotated.truncate(), xy, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.z, v.z, epsilon = 1e-6);
    }

    #[test]
    fn rotation_matrix() {
        fastrand::seed(0x0ddba11);
        let rand = || fastrand::f32() * 2.0 - 1.0;
        for _ in 0..16 {
            let q = Quatf::from_rotation_xyz(rand() * 3.0, rand() * 3.0, rand() * 3.0);
            let v = vec3(rand(), rand(), rand());
            let m = Mat4f::from(q);
            assert_abs_diff_eq!((m * v.extend(1.0)).truncate(), q.rotate(v), epsilon = 1e-5);
        }

        assert_eq!(Mat4f::from(Quatf::IDENTITY), Mat4f::IDENTITY);
    }

    #[test]
    fn fmt() {
        let q = Quatf::IDENTITY;
        assert_eq!(format!("{q}"), "(0, 0, 0, 1)");
        assert_eq!(format!("{q:?}"), "(0.0, 0.0, 0.0, 1.0)");
    }
}
