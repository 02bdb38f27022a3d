//! Projection, view, and viewport matrices.
//!
//! All constructors follow OpenGL conventions: the camera looks down the negative Z axis, and
//! visible points end up in `[-1, 1]` on every axis after perspective division. [`Matrix::viewport`]
//! then maps that cube to window coordinates.

use crate::{orthonormal_basis, vec4, Number, Sqrt, Trig, Vector};

use super::Matrix;

impl<T: Number> Matrix<T, 4, 4> {
    /// Creates a perspective projection matrix from a vertical field of view.
    ///
    /// - `fovy`: full vertical opening angle in radians.
    /// - `aspect`: width of the viewport divided by its height.
    /// - `near`, `far`: distances of the clip planes in front of the camera; points at `-near`
    ///   map to Z = -1, points at `-far` to Z = 1.
    pub fn perspective(fovy: T, aspect: T, near: T, far: T) -> Self
    where
        T: Trig,
    {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        let f = one / (fovy / two).tan();
        Self::from_rows([
            [f / aspect, zero, zero, zero],
            [zero, f, zero, zero],
            [
                zero,
                zero,
                (far + near) / (near - far),
                two * far * near / (near - far),
            ],
            [zero, zero, -one, zero],
        ])
    }

    /// Creates the inverse of [`Matrix::perspective`] for the same arguments, in closed form.
    pub fn perspective_inverse(fovy: T, aspect: T, near: T, far: T) -> Self
    where
        T: Trig,
    {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        let f = one / (fovy / two).tan();
        Self::from_rows([
            [aspect / f, zero, zero, zero],
            [zero, one / f, zero, zero],
            [zero, zero, zero, -one],
            [
                zero,
                zero,
                (near - far) / (two * far * near),
                (far + near) / (two * far * near),
            ],
        ])
    }

    /// Creates a perspective projection matrix from an oblique (off-center) near plane rectangle.
    ///
    /// `left`, `right`, `bottom` and `top` position the view frustum on the near plane. With a
    /// rectangle centered on the view axis this equals [`Matrix::perspective`].
    pub fn perspective_oblique(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        Self::from_rows([
            [
                two * near / (right - left),
                zero,
                (right + left) / (right - left),
                zero,
            ],
            [
                zero,
                two * near / (top - bottom),
                (top + bottom) / (top - bottom),
                zero,
            ],
            [
                zero,
                zero,
                (far + near) / (near - far),
                two * far * near / (near - far),
            ],
            [zero, zero, -one, zero],
        ])
    }

    /// Creates a perspective projection matrix without a far clip plane.
    ///
    /// This is the limit of [`Matrix::perspective`] for `far` approaching infinity: depth values
    /// approach (but never reach) 1.
    pub fn perspective_infinite(fovy: T, aspect: T, near: T) -> Self
    where
        T: Trig,
    {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        let f = one / (fovy / two).tan();
        Self::from_rows([
            [f / aspect, zero, zero, zero],
            [zero, f, zero, zero],
            [zero, zero, -one, -two * near],
            [zero, zero, -one, zero],
        ])
    }

    /// Creates an orthographic projection matrix.
    ///
    /// The box spanned by `left..right`, `bottom..top` and `-near..-far` is mapped to the
    /// `[-1, 1]` cube, without any perspective foreshortening.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let ortho = Mat4f::orthographic(-2.0, 6.0, -1.0, 3.0, 2.0, 10.0);
    /// assert_eq!(ortho * vec4(-2.0, -1.0, -2.0, 1.0), vec4(-1.0, -1.0, -1.0, 1.0));
    /// ```
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        Self::from_rows([
            [
                two / (right - left),
                zero,
                zero,
                -(right + left) / (right - left),
            ],
            [
                zero,
                two / (top - bottom),
                zero,
                -(top + bottom) / (top - bottom),
            ],
            [zero, zero, -two / (far - near), -(far + near) / (far - near)],
            [zero, zero, zero, one],
        ])
    }

    /// Creates an orthographic projection matrix for a box centered on the view axis.
    pub fn orthographic_symmetric(width: T, height: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        Self::orthographic(
            -width / two,
            width / two,
            -height / two,
            height / two,
            near,
            far,
        )
    }

    /// Creates the inverse of [`Matrix::orthographic`] for the same arguments, in closed form.
    pub fn orthographic_inverse(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        Self::from_rows([
            [(right - left) / two, zero, zero, (right + left) / two],
            [zero, (top - bottom) / two, zero, (top + bottom) / two],
            [zero, zero, (near - far) / two, -(far + near) / two],
            [zero, zero, zero, one],
        ])
    }

    /// Creates a matrix mapping the `[-1, 1]` cube to window coordinates.
    ///
    /// X and Y are mapped to the rectangle starting at `lower_left` extending by `size`, Z to the
    /// depth range `near..far`.
    pub fn viewport(lower_left: Vector<T, 2>, size: Vector<T, 2>, near: T, far: T) -> Self {
        let (zero, one, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        let half = size / two;
        Self::from_rows([
            [half.w, zero, zero, lower_left.x + half.w],
            [zero, half.h, zero, lower_left.y + half.h],
            [zero, zero, (far - near) / two, (far + near) / two],
            [zero, zero, zero, one],
        ])
    }

    /// Creates a view matrix for a camera at `eye`, looking at `center`.
    ///
    /// `up` steers the camera's roll and only has to be non-collinear with the view direction.
    /// The result maps `eye` to the origin and `center` onto the negative Z axis, so it can be
    /// multiplied with any of the projection matrices above.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// let view = Mat4f::look_at(vec3(0.0, 0.0, 5.0), Vec3f::ZERO, Vec3f::Y);
    /// let center = view * vec4(0.0, 0.0, 0.0, 1.0);
    /// assert_abs_diff_eq!(center, vec4(0.0, 0.0, -5.0, 1.0));
    /// ```
    pub fn look_at(eye: Vector<T, 3>, center: Vector<T, 3>, up: Vector<T, 3>) -> Self
    where
        T: Sqrt,
    {
        let backward = (eye - center).normalize();
        let (up, right) = orthonormal_basis(backward, up);
        Self::from_rows([
            right.extend(-right.dot(eye)),
            up.extend(-up.dot(eye)),
            backward.extend(-backward.dot(eye)),
            vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        ])
    }
}
