use std::mem;
use std::ops::{Deref, DerefMut};

use crate::{Mat4, Number, Quat, Trig};

/// Proper Euler angles in the intrinsic z-x′-z″ convention.
///
/// The rotation turns by `alpha` around the Z axis, then by `beta` around the rotated X axis,
/// then by `gamma` around the (twice) rotated Z axis. The traditional `phi`/`theta`/`psi` names
/// are available as aliases for the three fields.
///
/// All angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct EulerAngles<T> {
    pub alpha: T,
    pub beta: T,
    pub gamma: T,
}

impl<T> EulerAngles<T> {
    pub fn new(alpha: T, beta: T, gamma: T) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// View struct that gives [`EulerAngles`] its traditional field names.
#[repr(C)]
pub struct PhiThetaPsi<T> {
    pub phi: T,
    pub theta: T,
    pub psi: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for EulerAngles<T> {
    type Target = PhiThetaPsi<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for EulerAngles<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T: Number + Trig> From<EulerAngles<T>> for Quat<T> {
    fn from(angles: EulerAngles<T>) -> Self {
        Quat::from_rotation_z(angles.alpha)
            * Quat::from_rotation_x(angles.beta)
            * Quat::from_rotation_z(angles.gamma)
    }
}

impl<T: Number + Trig> From<EulerAngles<T>> for Mat4<T> {
    fn from(angles: EulerAngles<T>) -> Self {
        let (s1, c1) = angles.alpha.sin_cos();
        let (s2, c2) = angles.beta.sin_cos();
        let (s3, c3) = angles.gamma.sin_cos();
        Mat4::from_rows([
            [
                c1 * c3 - s1 * c2 * s3,
                -c1 * s3 - s1 * c2 * c3,
                s1 * s2,
                T::ZERO,
            ],
            [
                s1 * c3 + c1 * c2 * s3,
                c1 * c2 * c3 - s1 * s3,
                -c1 * s2,
                T::ZERO,
            ],
            [s2 * s3, s2 * c3, c2, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

/// Tait-Bryan angles in the aerospace z-y′-x″ convention.
///
/// The rotation turns by `yaw` around the Z axis, then by `pitch` around the rotated Y axis,
/// then by `roll` around the (twice) rotated X axis.
///
/// All angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaitBryanAngles<T> {
    pub yaw: T,
    pub pitch: T,
    pub roll: T,
}

impl<T> TaitBryanAngles<T> {
    pub fn new(yaw: T, pitch: T, roll: T) -> Self {
        Self { yaw, pitch, roll }
    }
}

impl<T: Number + Trig> From<TaitBryanAngles<T>> for Quat<T> {
    fn from(angles: TaitBryanAngles<T>) -> Self {
        Quat::from_rotation_z(angles.yaw)
            * Quat::from_rotation_y(angles.pitch)
            * Quat::from_rotation_x(angles.roll)
    }
}

impl<T: Number + Trig> From<TaitBryanAngles<T>> for Mat4<T> {
    fn from(angles: TaitBryanAngles<T>) -> Self {
        let (s1, c1) = angles.yaw.sin_cos();
        let (s2, c2) = angles.pitch.sin_cos();
        let (s3, c3) = angles.roll.sin_cos();
        Mat4::from_rows([
            [
                c1 * c2,
                c1 * s2 * s3 - s1 * c3,
                c1 * s2 * c3 + s1 * s3,
                T::ZERO,
            ],
            [
                s1 * c2,
                s1 * s2 * s3 + c1 * c3,
                s1 * s2 * c3 - c1 * s3,
                T::ZERO,
            ],
            [-s2, c2 * s3, c2 * c3, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use crate::{AxisAngle, Mat4f, Quatf, Vec3f};

    use super::*;

    #[test]
    fn named_views() {
        let mut angles = EulerAngles::new(0.1, 0.2, 0.3);
        assert_eq!((angles.phi, angles.theta, angles.psi), (0.1, 0.2, 0.3));
        angles.theta = 0.5;
        assert_eq!(angles.beta, 0.5);
    }

    #[test]
    fn euler_matrix_matches_quat() {
        let angles = EulerAngles::new(0.4, 1.1, -0.6);
        assert_abs_diff_eq!(
            Mat4f::from(angles),
            Mat4f::from(Quatf::from(angles)),
            epsilon = 1e-6
        );
    }

    #[test]
    fn tait_bryan_composes_per_axis_rotations() {
        let angles = TaitBryanAngles::new(0.7, -0.3, 1.4);
        let per_axis = Mat4f::from(AxisAngle::new(Vec3f::Z, angles.yaw))
            * Mat4f::from(AxisAngle::new(Vec3f::Y, angles.pitch))
            * Mat4f::from(AxisAngle::new(Vec3f::X, angles.roll));
        assert_abs_diff_eq!(Mat4f::from(angles), per_axis, epsilon = 1e-6);
        assert_abs_diff_eq!(Mat4f::from(Quatf::from(angles)), per_axis, epsilon = 1e-6);
    }

    #[test]
    fn yaw_is_a_z_rotation() {
        let yaw = TaitBryanAngles::new(FRAC_PI_2, 0.0, 0.0);
        assert_abs_diff_eq!(Quatf::from(yaw).rotate(Vec3f::X), Vec3f::Y, epsilon = 1e-6);
    }

    #[test]
    fn zero_angles_are_identity() {
        assert_eq!(Mat4f::from(EulerAngles::new(0.0, 0.0, 0.0)), Mat4f::IDENTITY);
        assert_eq!(Quatf::from(TaitBryanAngles::new(0.0, 0.0, 0.0)), Quatf::IDENTITY);
    }
}
