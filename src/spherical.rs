use std::mem;
use std::ops::{Deref, DerefMut};

use crate::{vec3, Number, Quat, Sqrt, Trig, Vector};

/// A direction on the unit sphere, in spherical coordinates.
///
/// `azimuthal` (θ) is the angle from the +X axis within the XY plane, and `polar` (φ) is the
/// angle from the +Z axis, following the physics (ISO 80000-2) convention. The traditional
/// `theta`/`phi` names are available as aliases for the two fields.
///
/// Both angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct SphericalDir<T> {
    pub azimuthal: T,
    pub polar: T,
}

impl<T> SphericalDir<T> {
    pub fn new(azimuthal: T, polar: T) -> Self {
        Self { azimuthal, polar }
    }
}

/// View struct that gives [`SphericalDir`] its traditional field names.
#[repr(C)]
pub struct ThetaPhi<T> {
    pub theta: T,
    pub phi: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for SphericalDir<T> {
    type Target = ThetaPhi<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for SphericalDir<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

/// A point in 3D space, in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical<T> {
    pub radius: T,
    pub dir: SphericalDir<T>,
}

impl<T> Spherical<T> {
    pub fn new(radius: T, azimuthal: T, polar: T) -> Self {
        Self {
            radius,
            dir: SphericalDir::new(azimuthal, polar),
        }
    }
}

impl<T: Number + Trig> From<SphericalDir<T>> for Vector<T, 3> {
    fn from(dir: SphericalDir<T>) -> Self {
        let (st, ct) = dir.azimuthal.sin_cos();
        let (sp, cp) = dir.polar.sin_cos();
        vec3(ct * sp, st * sp, cp)
    }
}

impl<T: Number + Trig> From<Spherical<T>> for Vector<T, 3> {
    fn from(point: Spherical<T>) -> Self {
        Vector::from(point.dir) * point.radius
    }
}

/// Computes the direction a vector points in. The vector must have length 1.
impl<T: Number + Trig> From<Vector<T, 3>> for SphericalDir<T> {
    fn from(vec: Vector<T, 3>) -> Self {
        Self {
            azimuthal: vec.y.atan2(vec.x),
            polar: vec.z.acos(),
        }
    }
}

/// Computes the spherical coordinates of a point. The zero vector has no defined direction.
impl<T: Number + Trig + Sqrt> From<Vector<T, 3>> for Spherical<T> {
    fn from(vec: Vector<T, 3>) -> Self {
        let radius = vec.length();
        Self {
            radius,
            dir: SphericalDir {
                azimuthal: vec.y.atan2(vec.x),
                polar: (vec.z / radius).acos(),
            },
        }
    }
}

/// The rotation that maps the +X axis onto the direction.
///
/// This composes a rotation around Y (tilting +X up to the direction's inclination) with a
/// rotation around Z (turning it to the direction's azimuth), in half-angle form.
impl<T: Number + Trig> From<SphericalDir<T>> for Quat<T> {
    fn from(dir: SphericalDir<T>) -> Self {
        let two = T::ONE + T::ONE;
        let (st, ct) = (dir.azimuthal / two).sin_cos();
        let (sp, cp) = ((dir.polar - T::PI / two) / two).sin_cos();
        Quat::from_components(-st * sp, ct * sp, st * cp, ct * cp)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_abs_diff_eq;

    use crate::{Quatf, Vec3f};

    use super::*;

    #[test]
    fn named_views() {
        let mut dir = SphericalDir::new(0.25, 0.5);
        assert_eq!((dir.theta, dir.phi), (0.25, 0.5));
        dir.phi = 1.0;
        assert_eq!(dir.polar, 1.0);
    }

    #[test]
    fn coordinate_axes() {
        let x = SphericalDir::new(0.0f32, FRAC_PI_2);
        let y = SphericalDir::new(FRAC_PI_2, FRAC_PI_2);
        let z = SphericalDir::new(0.0f32, 0.0);
        assert_abs_diff_eq!(Vec3f::from(x), Vec3f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3f::from(y), Vec3f::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3f::from(z), Vec3f::Z, epsilon = 1e-6);
    }

    #[test]
    fn round_trip() {
        let v = vec3(1.0, -2.0, 0.5).normalize();
        let dir = SphericalDir::from(v);
        assert_abs_diff_eq!(Vec3f::from(dir), v, epsilon = 1e-6);

        let point = vec3(1.0, -2.0, 0.5);
        let sph = Spherical::from(point);
        assert_abs_diff_eq!(sph.radius, point.length());
        assert_abs_diff_eq!(Vec3f::from(sph), point, epsilon = 1e-5);
    }

    #[test]
    fn rotation_maps_x_onto_direction() {
        for dir in [
            SphericalDir::new(0.0f32, FRAC_PI_2),
            SphericalDir::new(FRAC_PI_2, FRAC_PI_4),
            SphericalDir::new(-2.0, 2.5),
            SphericalDir::new(PI, 0.1),
        ] {
            let quat = Quatf::from(dir);
            assert_abs_diff_eq!(quat.length(), 1.0, epsilon = 1e-6);
            assert_abs_diff_eq!(quat.rotate(Vec3f::X), Vec3f::from(dir), epsilon = 1e-6);
        }
    }
}
