use crate::{Mat4, Number, Quat, Sqrt, Trig, Vec3, Vector};

/// A rotation around an arbitrary axis.
///
/// Positive angles rotate counterclockwise when the axis points towards the viewer (the
/// right-hand rule).
///
/// # Example
///
/// ```
/// # use linmath::*;
/// # use std::f32::consts::FRAC_PI_2;
/// let quarter = AxisAngle::new(Vec3f::Z, FRAC_PI_2);
/// let rotated = quarter.rotate(vec3(1.0, 0.0, 0.0));
/// assert!((rotated - vec3(0.0, 1.0, 0.0)).length() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle<T> {
    /// The axis to rotate around. Must have length 1.
    pub axis: Vector<T, 3>,
    /// The angle to rotate by, in radians.
    pub angle: T,
}

impl<T> AxisAngle<T> {
    pub fn new(axis: Vector<T, 3>, angle: T) -> Self {
        Self { axis, angle }
    }

    /// Rotates a vector around the axis, using the Rodrigues rotation formula.
    pub fn rotate(self, vec: Vector<T, 3>) -> Vector<T, 3>
    where
        T: Number + Trig,
    {
        let (sin, cos) = self.angle.sin_cos();
        vec * cos + self.axis.cross(vec) * sin + self.axis * (self.axis.dot(vec) * (T::ONE - cos))
    }
}

impl<T: Number + Trig> From<AxisAngle<T>> for Quat<T> {
    fn from(rot: AxisAngle<T>) -> Self {
        let (sin, cos) = (rot.angle / (T::ONE + T::ONE)).sin_cos();
        Quat::from_parts(rot.axis * sin, cos)
    }
}

/// Expands the rotation into a matrix for homogeneous coordinates (the Rodrigues matrix).
impl<T: Number + Trig> From<AxisAngle<T>> for Mat4<T> {
    fn from(rot: AxisAngle<T>) -> Self {
        let (sin, cos) = rot.angle.sin_cos();
        let rem = T::ONE - cos;
        let [x, y, z] = rot.axis.into_array();
        Mat4::from_rows([
            [
                cos + x * x * rem,
                x * y * rem - z * sin,
                x * z * rem + y * sin,
                T::ZERO,
            ],
            [
                y * x * rem + z * sin,
                cos + y * y * rem,
                y * z * rem - x * sin,
                T::ZERO,
            ],
            [
                z * x * rem - y * sin,
                z * y * rem + x * sin,
                cos + z * z * rem,
                T::ZERO,
            ],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

impl<T: Number + Trig + Sqrt> From<Quat<T>> for AxisAngle<T> {
    fn from(quat: Quat<T>) -> Self {
        let imag = quat.xyz();
        let len = imag.length();
        let angle = len.atan2(quat.w) * (T::ONE + T::ONE);
        if len == T::ZERO {
            // The identity rotation has no distinguished axis; X is as good as any.
            Self::new(Vec3::X, angle)
        } else {
            Self::new(imag / len, angle)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use crate::{vec3, Mat4f, Quatf, Vec3f};

    use super::*;

    #[test]
    fn quarter_turn_about_z() {
        let rot = AxisAngle::new(Vec3f::Z, FRAC_PI_2);
        assert_abs_diff_eq!(rot.rotate(Vec3f::X), Vec3f::Y, epsilon = 1e-6);
        assert_eq!(Quatf::from(rot), Quatf::from_rotation_z(FRAC_PI_2));
    }

    #[test]
    fn rodrigues_forms_agree() {
        let rot = AxisAngle::new(vec3(1.0, -2.0, 0.5).normalize(), 1.2);
        let v = vec3(0.3, 0.4, -2.0);
        let direct = rot.rotate(v);
        assert_abs_diff_eq!(Quatf::from(rot).rotate(v), direct, epsilon = 1e-5);
        assert_abs_diff_eq!(
            (Mat4f::from(rot) * v.extend(1.0)).truncate(),
            direct,
            epsilon = 1e-5
        );
    }

    #[test]
    fn quat_round_trip() {
        let rot = AxisAngle::new(vec3(2.0, 1.0, -1.0).normalize(), 0.8);
        let back = AxisAngle::from(Quatf::from(rot));
        assert_abs_diff_eq!(back.axis, rot.axis, epsilon = 1e-6);
        assert_abs_diff_eq!(back.angle, rot.angle, epsilon = 1e-6);
    }

    #[test]
    fn identity_has_x_axis() {
        let rot = AxisAngle::from(Quatf::IDENTITY);
        assert_eq!(rot.axis, Vec3f::X);
        assert_eq!(rot.angle, 0.0);
    }
}
