//! Implementations of `std::ops` and the `approx` comparison traits.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, DivAssign, Index, IndexMut,
    Mul, MulAssign, Neg, Not, Shl, Shr, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impls than what the derive generates, so that vectors can also be compared
// against plain arrays and slices.
impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        &self.0 == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for [T; N] {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self == &other.0
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for Vector<T, N> {
    fn eq(&self, other: &[U]) -> bool {
        self.0 == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<&[U]> for Vector<T, N> {
    fn eq(&self, other: &&[U]) -> bool {
        self.0 == **other
    }
}

/// Lexicographic ordering: elements are compared left to right, and the first unequal pair
/// decides.
impl<T: PartialOrd, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord, const N: usize> Ord for Vector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Elementwise negation.
impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Elementwise logical/bitwise negation.
impl<T: Not, const N: usize> Not for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

impl<T: Add<U>, U, const N: usize> Add<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l + r)
    }
}

impl<T: AddAssign<U>, U, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N> {
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

impl<T: Sub<U>, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l - r)
    }
}

impl<T: SubAssign<U>, U, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Elementwise multiplication.
impl<T: Mul + Copy, const N: usize> Mul for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Self) -> Self::Output {
        Vector::zip(self, rhs).map(|(a, b)| a * b)
    }
}

impl<T: MulAssign + Copy, const N: usize> MulAssign for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

/// Elementwise division.
impl<T: Div + Copy, const N: usize> Div for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Self) -> Self::Output {
        Vector::zip(self, rhs).map(|(a, b)| a / b)
    }
}

// NB: `Mul` and `Div` exist both for two vectors (elementwise) and for a vector and a scalar.
// That forces the elementwise impls to require `T: Mul + Copy` instead of the fully generic
// `T: Mul<U>` used by `Add`: a generic impl would overlap with the scalar one.

/// Multiplies each element by a scalar.
impl<T: Mul + Copy, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: MulAssign + Copy, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Divides each element by a scalar.
impl<T: Div + Copy, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: DivAssign + Copy, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// `scalar * vector` cannot be written as one generic impl (the scalar is the `Self` type), so
// every primitive scalar type gets its own.
macro_rules! scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}

scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Elementwise left shift.
impl<T: Shl + Copy, const N: usize> Shl for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn shl(self, rhs: Self) -> Self::Output {
        Vector::zip(self, rhs).map(|(a, b)| a << b)
    }
}

/// Shifts each element left by a scalar amount.
impl<T: Shl + Copy, const N: usize> Shl<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn shl(self, rhs: T) -> Self::Output {
        self.map(|elem| elem << rhs)
    }
}

/// Elementwise right shift.
impl<T: Shr + Copy, const N: usize> Shr for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn shr(self, rhs: Self) -> Self::Output {
        Vector::zip(self, rhs).map(|(a, b)| a >> b)
    }
}

/// Shifts each element right by a scalar amount.
impl<T: Shr + Copy, const N: usize> Shr<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn shr(self, rhs: T) -> Self::Output {
        self.map(|elem| elem >> rhs)
    }
}

impl<T: BitAnd<U>, U, const N: usize> BitAnd<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn bitand(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l & r)
    }
}

impl<T: BitAndAssign<U>, U, const N: usize> BitAndAssign<Vector<U, N>> for Vector<T, N> {
    fn bitand_assign(&mut self, rhs: Vector<U, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs &= rhs);
    }
}

impl<T: BitOr<U>, U, const N: usize> BitOr<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn bitor(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l | r)
    }
}

impl<T: BitOrAssign<U>, U, const N: usize> BitOrAssign<Vector<U, N>> for Vector<T, N> {
    fn bitor_assign(&mut self, rhs: Vector<U, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs |= rhs);
    }
}

// NB: `Rem` is deliberately not implemented. Neither the elementwise nor the scalar reading is
// clearly the more useful one, so the choice is left to `cw::zip` with `scalar::rem`.

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn arithmetic() {
        let v = vec3(1, 2, 3);
        assert_eq!(v + vec3(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(v - vec3(3, 2, 1), vec3(-2, 0, 2));
        assert_eq!(v * vec3(2, 3, 4), vec3(2, 6, 12));
        assert_eq!(vec3(4, 9, 16) / vec3(2, 3, 4), vec3(2, 3, 4));
        assert_eq!(-v, vec3(-1, -2, -3));

        assert_eq!(v * 2, vec3(2, 4, 6));
        assert_eq!(2 * v, vec3(2, 4, 6));
        assert_eq!(vec2(2.0, 4.0) / 2.0, vec2(1.0, 2.0));

        let mut v = v;
        v += vec3(1, 1, 1);
        v *= 2;
        assert_eq!(v, vec3(4, 6, 8));
        v *= vec3(1, 2, 3);
        assert_eq!(v, vec3(4, 12, 24));
        v /= 4;
        v -= vec3(0, 1, 3);
        assert_eq!(v, vec3(1, 2, 3));
    }

    #[test]
    fn comparisons_against_arrays_and_slices() {
        let v = vec3(1, 2, 3);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!([1, 2, 3], v);
        assert_eq!(v, [1, 2, 3][..]);
        assert_eq!(v, &[1, 2, 3][..]);
    }

    #[test]
    fn bit_ops() {
        let v = vec2(0b1100u8, 0b1010);
        assert_eq!(v & vec2(0b1010, 0b1010), vec2(0b1000, 0b1010));
        assert_eq!(v | vec2(0b0011, 0b0101), vec2(0b1111, 0b1111));
        assert_eq!(!vec2(false, true), vec2(true, false));

        assert_eq!(vec2(1u8, 2) << 2, vec2(4, 8));
        assert_eq!(vec2(8u8, 4) >> vec2(3, 2), vec2(1, 1));
        assert_eq!(vec2(-8i32, 8) >> 2, vec2(-2, 2));
    }
}
