use crate::{vec3, vec4, AxisAngle, Mat4, Number, Quat, Trig, Vec3, Vector};

/// One of the six signed coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    XPos,
    XNeg,
    YPos,
    YNeg,
    ZPos,
    ZNeg,
}

impl Axis {
    /// Returns the unit vector pointing along this axis.
    pub fn unit_vector<T: Number>(self) -> Vector<T, 3> {
        match self {
            Axis::XPos => Vec3::<T>::X,
            Axis::XNeg => -Vec3::<T>::X,
            Axis::YPos => Vec3::<T>::Y,
            Axis::YNeg => -Vec3::<T>::Y,
            Axis::ZPos => Vec3::<T>::Z,
            Axis::ZNeg => -Vec3::<T>::Z,
        }
    }

    /// Returns the index of the coordinate this axis points along (0 for X, 1 for Y, 2 for Z).
    pub fn index(self) -> usize {
        match self {
            Axis::XPos | Axis::XNeg => 0,
            Axis::YPos | Axis::YNeg => 1,
            Axis::ZPos | Axis::ZNeg => 2,
        }
    }

    /// Returns `1` for positive axes and `-1` for negative axes.
    pub fn sign<T: Number>(self) -> T {
        match self {
            Axis::XPos | Axis::YPos | Axis::ZPos => T::ONE,
            Axis::XNeg | Axis::YNeg | Axis::ZNeg => -T::ONE,
        }
    }

    /// Creates a matrix rotating by `angle` radians around this axis.
    pub fn rotation_matrix<T: Number + Trig>(self, angle: T) -> Mat4<T> {
        AxisAngle::new(self.unit_vector(), angle).into()
    }

    /// Creates a quaternion rotating by `angle` radians around this axis.
    pub fn rotation_quat<T: Number + Trig>(self, angle: T) -> Quat<T> {
        AxisAngle::new(self.unit_vector(), angle).into()
    }
}

/// An ordered triple of signed axes, naming a coordinate convention.
///
/// Every [`Basis`] is expressed in terms of [`Basis::INITIAL`]. Values given in the initial frame
/// can be re-expressed relative to another basis with [`Basis::to_basis`] and converted back with
/// [`Basis::from_basis`].
///
/// # Example
///
/// A Z-up convention, described in terms of the initial Y-up frame:
///
/// ```
/// # use linmath::*;
/// let z_up = Basis::new(Axis::XPos, Axis::ZNeg, Axis::YPos);
/// assert!(z_up.is_right_handed());
///
/// let v = vec3(1.0, 2.0, 3.0);
/// assert_eq!(z_up.to_basis(v), vec3(1.0, -3.0, 2.0));
/// assert_eq!(z_up.from_basis(z_up.to_basis(v)), v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Basis {
    pub i: Axis,
    pub j: Axis,
    pub k: Axis,
}

impl Basis {
    /// The basis all other bases are expressed in: X, Y and Z, in their positive directions.
    pub const INITIAL: Self = Self {
        i: Axis::XPos,
        j: Axis::YPos,
        k: Axis::ZPos,
    };

    /// Creates a basis from three axes.
    ///
    /// # Panics
    ///
    /// Panics if two of the axes point along the same coordinate.
    pub fn new(i: Axis, j: Axis, k: Axis) -> Self {
        assert!(
            i.index() != j.index() && i.index() != k.index() && j.index() != k.index(),
            "basis axes must use three distinct coordinates"
        );
        Self { i, j, k }
    }

    /// Returns whether `i × j == k`, which makes the basis right-handed like [`Basis::INITIAL`].
    ///
    /// This is computed exactly, over integer unit vectors.
    pub fn is_right_handed(self) -> bool {
        let i = self.i.unit_vector::<i32>();
        let j = self.j.unit_vector();
        let k = self.k.unit_vector();
        i.cross(j) == k
    }

    /// The change-of-basis matrix `P`, which maps initial-frame coordinates to coordinates in
    /// this basis.
    ///
    /// `P` is orthogonal, so its transpose performs the reverse mapping.
    pub fn permutation_matrix<T: Number>(self) -> Mat4<T> {
        Mat4::from_rows([
            self.i.unit_vector().extend(T::ZERO),
            self.j.unit_vector().extend(T::ZERO),
            self.k.unit_vector().extend(T::ZERO),
            vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        ])
    }

    /// Re-expresses a value given in the initial frame in the coordinates of this basis.
    pub fn to_basis<V: ChangeOfBasis>(self, value: V) -> V {
        value.to_basis(self)
    }

    /// Re-expresses a value given in the coordinates of this basis in the initial frame.
    ///
    /// This is the exact inverse of [`Basis::to_basis`].
    pub fn from_basis<V: ChangeOfBasis>(self, value: V) -> V {
        value.from_basis(self)
    }
}

/// Values that can be re-expressed relative to a [`Basis`].
pub trait ChangeOfBasis {
    /// See [`Basis::to_basis`].
    fn to_basis(self, basis: Basis) -> Self;
    /// See [`Basis::from_basis`].
    fn from_basis(self, basis: Basis) -> Self;
}

impl<T: Number> ChangeOfBasis for Vector<T, 3> {
    fn to_basis(self, basis: Basis) -> Self {
        vec3(
            self.dot(basis.i.unit_vector()),
            self.dot(basis.j.unit_vector()),
            self.dot(basis.k.unit_vector()),
        )
    }

    fn from_basis(self, basis: Basis) -> Self {
        basis.i.unit_vector() * self.x
            + basis.j.unit_vector() * self.y
            + basis.k.unit_vector() * self.z
    }
}

impl<T: Number> ChangeOfBasis for Mat4<T> {
    fn to_basis(self, basis: Basis) -> Self {
        let p = basis.permutation_matrix();
        p * self * p.transpose()
    }

    fn from_basis(self, basis: Basis) -> Self {
        let p = basis.permutation_matrix();
        p.transpose() * self * p
    }
}

/// Rotations transform their axis like a vector, except that re-expressing in a basis of the
/// opposite handedness also reverses the sense of rotation. The real part is unaffected.
impl<T: Number> ChangeOfBasis for Quat<T> {
    fn to_basis(self, basis: Basis) -> Self {
        let mut xyz = self.xyz().to_basis(basis);
        if !basis.is_right_handed() {
            xyz = -xyz;
        }
        Quat::from_parts(xyz, self.w)
    }

    fn from_basis(self, basis: Basis) -> Self {
        let mut xyz = self.xyz().from_basis(basis);
        if !basis.is_right_handed() {
            xyz = -xyz;
        }
        Quat::from_parts(xyz, self.w)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{Mat4f, Quatf};

    use super::*;

    fn z_up() -> Basis {
        Basis::new(Axis::XPos, Axis::ZNeg, Axis::YPos)
    }

    fn mirrored() -> Basis {
        Basis::new(Axis::XNeg, Axis::YPos, Axis::ZPos)
    }

    #[test]
    fn axes() {
        assert_eq!(Axis::XPos.unit_vector::<i32>(), vec3(1, 0, 0));
        assert_eq!(Axis::XNeg.unit_vector::<i32>(), vec3(-1, 0, 0));
        assert_eq!(Axis::YPos.unit_vector::<i32>(), vec3(0, 1, 0));
        assert_eq!(Axis::YNeg.unit_vector::<i32>(), vec3(0, -1, 0));
        assert_eq!(Axis::ZPos.unit_vector::<f32>(), vec3(0.0, 0.0, 1.0));
        assert_eq!(Axis::ZNeg.unit_vector::<f32>(), vec3(0.0, 0.0, -1.0));
        assert_eq!(Axis::YNeg.index(), 1);
        assert_eq!(Axis::YNeg.sign::<i32>(), -1);
        assert_eq!(Axis::ZPos.sign::<f32>(), 1.0);
    }

    #[test]
    fn handedness() {
        assert!(Basis::INITIAL.is_right_handed());
        assert!(z_up().is_right_handed());
        assert!(!mirrored().is_right_handed());
    }

    #[test]
    #[should_panic = "distinct coordinates"]
    fn degenerate_basis() {
        Basis::new(Axis::XPos, Axis::XNeg, Axis::ZPos);
    }

    #[test]
    fn vector_round_trip() {
        let v = vec3(1.0, 2.0, 3.0);
        for basis in [Basis::INITIAL, z_up(), mirrored()] {
            assert_eq!(basis.from_basis(basis.to_basis(v)), v);
        }
        assert_eq!(z_up().to_basis(v), vec3(1.0, -3.0, 2.0));
        assert_eq!(Basis::INITIAL.to_basis(v), v);
    }

    #[test]
    fn permutation_matrix_matches_to_basis() {
        let basis = z_up();
        let v = vec3(1.0f32, 2.0, 3.0);
        let p = basis.permutation_matrix::<f32>();
        assert_eq!((p * v.extend(1.0)).truncate(), basis.to_basis(v));
        assert_eq!(Basis::INITIAL.permutation_matrix::<f32>(), Mat4f::IDENTITY);
    }

    #[test]
    fn matrix_conjugation() {
        let rot = Quatf::from_rotation_xyz(0.3, 0.7, -0.2);
        let m = Mat4f::from(rot);
        let basis = z_up();

        // Rotating and re-expressing commute.
        let v = vec3(0.5, -1.0, 2.0);
        let rotated = basis.to_basis(m) * basis.to_basis(v).extend(1.0);
        assert_abs_diff_eq!(
            rotated.truncate(),
            basis.to_basis(rot.rotate(v)),
            epsilon = 1e-6
        );

        assert_abs_diff_eq!(basis.from_basis(basis.to_basis(m)), m, epsilon = 1e-6);
    }

    #[test]
    fn quat_conjugation_matches_matrix() {
        let rot = Quatf::from_rotation_xyz(0.3, 0.7, -0.2);
        for basis in [z_up(), mirrored()] {
            let q = basis.to_basis(rot);
            assert_abs_diff_eq!(
                Mat4f::from(q),
                basis.to_basis(Mat4f::from(rot)),
                epsilon = 1e-6
            );
            assert_abs_diff_eq!(basis.from_basis(q), rot, epsilon = 1e-6);
        }
    }

    #[test]
    fn axis_rotations_match_axis_angle() {
        let angle = 0.9f32;
        let v = vec3(0.2, -0.4, 1.0);
        for axis in [
            Axis::XPos,
            Axis::XNeg,
            Axis::YPos,
            Axis::YNeg,
            Axis::ZPos,
            Axis::ZNeg,
        ] {
            let quat = axis.rotation_quat(angle);
            let mat = axis.rotation_matrix(angle);
            assert_abs_diff_eq!(
                (mat * v.extend(1.0)).truncate(),
                quat.rotate(v),
                epsilon = 1e-6
            );
        }
        assert_abs_diff_eq!(
            Axis::ZNeg.rotation_quat(0.5f32),
            Quatf::from_rotation_z(-0.5),
            epsilon = 1e-6
        );
    }
}
