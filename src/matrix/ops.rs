//! Implementations of `std::ops` and the `approx` comparison traits.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Vector};

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Lexicographic ordering over the elements in storage order (column-major): the first unequal
/// pair decides.
impl<T: PartialOrd, const R: usize, const C: usize> PartialOrd for Matrix<T, R, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord, const R: usize, const C: usize> Ord for Matrix<T, R, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Elementwise negation.
impl<T: Neg, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Combines two same-shape matrices element by element.
fn zip_map<T, U, V, const R: usize, const C: usize>(
    lhs: Matrix<T, R, C>,
    rhs: Matrix<U, R, C>,
    mut f: impl FnMut(T, U) -> V,
) -> Matrix<V, R, C> {
    let mut rhs = rhs.0.into_iter().flatten();
    Matrix(lhs.0.map(|column| column.map(|lhs| f(lhs, rhs.next().unwrap()))))
}

impl<T: Add<U>, U, const R: usize, const C: usize> Add<Matrix<U, R, C>> for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Matrix<U, R, C>) -> Self::Output {
        zip_map(self, rhs, |l, r| l + r)
    }
}

impl<T: AddAssign<U>, U, const R: usize, const C: usize> AddAssign<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn add_assign(&mut self, rhs: Matrix<U, R, C>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.0.into_iter().flatten())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

impl<T: Sub<U>, U, const R: usize, const C: usize> Sub<Matrix<U, R, C>> for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Matrix<U, R, C>) -> Self::Output {
        zip_map(self, rhs, |l, r| l - r)
    }
}

impl<T: SubAssign<U>, U, const R: usize, const C: usize> SubAssign<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn sub_assign(&mut self, rhs: Matrix<U, R, C>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.0.into_iter().flatten())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

// NB: unlike vectors, matrices do not implement elementwise `Mul` and `Div`: `*` means the matrix
// product, and an elementwise impl for same-shape operands would overlap with it for square
// matrices. The named functions `cw::mul` and `cw::div` provide the elementwise versions.

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: MulAssign + Copy, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Replaces a square matrix with the matrix product `self * rhs`.
impl<T: Number, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: DivAssign + Copy, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    fn div_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// `scalar * matrix` cannot be written as one generic impl (the scalar is the `Self` type), so
// every primitive scalar type gets its own.
macro_rules! scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                fn mul(self, rhs: Matrix<$scalar, R, C>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}

scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Elementwise left shift.
impl<T: Shl + Copy, const R: usize, const C: usize> Shl for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn shl(self, rhs: Self) -> Self::Output {
        zip_map(self, rhs, |a, b| a << b)
    }
}

/// Shifts each element left by a scalar amount.
impl<T: Shl + Copy, const R: usize, const C: usize> Shl<T> for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn shl(self, rhs: T) -> Self::Output {
        self.map(|elem| elem << rhs)
    }
}

/// Elementwise right shift.
impl<T: Shr + Copy, const R: usize, const C: usize> Shr for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn shr(self, rhs: Self) -> Self::Output {
        zip_map(self, rhs, |a, b| a >> b)
    }
}

/// Shifts each element right by a scalar amount.
impl<T: Shr + Copy, const R: usize, const C: usize> Shr<T> for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn shr(self, rhs: T) -> Self::Output {
        self.map(|elem| elem >> rhs)
    }
}
