//! Implementations of `std::ops` and the `approx` comparison traits.

use std::cmp::Ordering;
use std::ops::{Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Number;

use super::Quat;

// More general `PartialEq` impl than what the derive generates.
impl<T: PartialEq<U>, U> PartialEq<Quat<U>> for Quat<T> {
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

/// Lexicographic ordering over the `x`, `y`, `z` and `w` components, in that order.
impl<T: PartialOrd> PartialOrd for Quat<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.vec.partial_cmp(&other.vec)
    }
}

impl<T: Ord> Ord for Quat<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vec.cmp(&other.vec)
    }
}

/// The Hamilton product, which composes two rotations.
///
/// Like for matrices, the right-hand factor is the rotation that is applied first. The product is
/// not commutative.
impl<T: Number> Mul for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let [x1, y1, z1, w1] = self.vec.into_array();
        let [x2, y2, z2, w2] = rhs.vec.into_array();
        Quat::from_components(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Quat::from_components(0, 0, 0, 1) < Quat::from_components(0, 0, 1, 0));
        assert!(Quat::from_components(1, 0, 0, 0) > Quat::from_components(0, 9, 9, 9));
        assert_eq!(
            Quat::from_components(1, 2, 3, 4),
            Quat::from_components(1, 2, 3, 4)
        );
    }

    #[test]
    fn mul_assign() {
        let mut q = Quat::from_components(1, 0, 0, 0);
        q *= q;
        assert_eq!(q, Quat::from_components(0, 0, 0, -1));
    }
}
