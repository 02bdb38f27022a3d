//! Scalar functions, usable on their own or through the componentwise machinery in [`cw`].
//!
//! Every function here operates on plain scalars and is shaped so that it can be passed directly
//! to [`cw::map`], [`cw::zip`] or [`cw::zip3`]: same-typed arguments, by value, one result.
//!
//! [`cw`]: crate::cw
//! [`cw::map`]: crate::cw::map
//! [`cw::zip`]: crate::cw::zip
//! [`cw::zip3`]: crate::cw::zip3

use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use crate::{Abs, Number, One, Round, Zero};

/// Adds two values.
#[inline]
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Subtracts `b` from `a`.
#[inline]
pub fn sub<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// Multiplies two values.
#[inline]
pub fn mul<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Divides `a` by `b`.
#[inline]
pub fn div<T: Div<Output = T>>(a: T, b: T) -> T {
    a / b
}

/// Negates a value.
#[inline]
pub fn neg<T: Neg<Output = T>>(value: T) -> T {
    -value
}

/// Computes the remainder of `a / b`.
///
/// The result has the same sign as the dividend `a`, which is how the `%` operator behaves for
/// both integer and floating-point types.
#[inline]
pub fn rem<T: Rem<Output = T>>(a: T, b: T) -> T {
    a % b
}

/// Shifts the bits of `value` left by `amount`.
#[inline]
pub fn shl<T: Shl<Output = T>>(value: T, amount: T) -> T {
    value << amount
}

/// Shifts the bits of `value` right by `amount`.
#[inline]
pub fn shr<T: Shr<Output = T>>(value: T, amount: T) -> T {
    value >> amount
}

/// Returns the sign of `value` as `-1`, `0`, or `1`.
///
/// Unlike the inherent `signum` methods, this is also defined for unsigned integers (where it
/// returns `0` or `1`), and it returns `0` for float NaNs.
pub fn signum<T>(value: T) -> T
where
    T: Zero + One + PartialOrd + Sub<Output = T>,
{
    let gt = if T::ZERO < value { T::ONE } else { T::ZERO };
    let lt = if value < T::ZERO { T::ONE } else { T::ZERO };
    gt - lt
}

/// Computes the absolute value.
#[inline]
pub fn abs<T: Abs>(value: T) -> T {
    value.abs()
}

/// Returns the whole part of `value`, discarding any fraction.
#[inline]
pub fn trunc<T: Round>(value: T) -> T {
    value.trunc()
}

/// Rounds to the nearest whole value, with halfway cases rounding away from zero.
#[inline]
pub fn round<T: Round>(value: T) -> T {
    value.round()
}

/// Rounds down to the nearest whole value.
#[inline]
pub fn floor<T: Round>(value: T) -> T {
    value.floor()
}

/// Rounds up to the nearest whole value.
#[inline]
pub fn ceil<T: Round>(value: T) -> T {
    value.ceil()
}

/// Rounds `value` down to the nearest multiple of `significance`.
///
/// `significance` must be positive. The result is the greatest multiple of `significance` that
/// is less than or equal to `value`, so negative values round away from zero.
///
/// # Examples
///
/// ```
/// # use linmath::scalar;
/// assert_eq!(scalar::floor_to(7, 3), 6);
/// assert_eq!(scalar::floor_to(-7, 3), -9);
/// assert_eq!(scalar::floor_to(7.25, 0.5), 7.0);
/// ```
pub fn floor_to<T>(value: T, significance: T) -> T
where
    T: Zero + PartialOrd + Copy + Rem<Output = T> + Sub<Output = T>,
{
    let rem = value % significance;
    if rem < T::ZERO {
        value - rem - significance
    } else {
        value - rem
    }
}

/// Rounds `value` up to the nearest multiple of `significance`.
///
/// `significance` must be positive. The result is the smallest multiple of `significance` that
/// is greater than or equal to `value`, so negative values round towards zero.
///
/// # Examples
///
/// ```
/// # use linmath::scalar;
/// assert_eq!(scalar::ceil_to(7, 3), 9);
/// assert_eq!(scalar::ceil_to(-7, 3), -6);
/// assert_eq!(scalar::ceil_to(7.25, 0.5), 7.5);
/// ```
pub fn ceil_to<T>(value: T, significance: T) -> T
where
    T: Zero + PartialOrd + Copy + Add<Output = T> + Rem<Output = T> + Sub<Output = T>,
{
    let rem = value % significance;
    if T::ZERO < rem {
        value - rem + significance
    } else {
        value - rem
    }
}

/// Returns the smaller of two values.
///
/// Only `<` is used for the comparison: when the values are equal or unordered (NaN), the first
/// argument is returned.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the larger of two values.
///
/// Only `<` is used for the comparison: when the values are equal or unordered (NaN), the first
/// argument is returned.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// Returns the smallest of the given values.
///
/// At least one value is required; `N == 0` fails to compile.
pub fn min_of<T: PartialOrd + Copy, const N: usize>(values: [T; N]) -> T {
    const { assert!(N > 0, "`min_of` requires at least one value") };
    values.into_iter().reduce(min).unwrap()
}

/// Returns the largest of the given values.
///
/// At least one value is required; `N == 0` fails to compile.
pub fn max_of<T: PartialOrd + Copy, const N: usize>(values: [T; N]) -> T {
    const { assert!(N > 0, "`max_of` requires at least one value") };
    values.into_iter().reduce(max).unwrap()
}

/// Sums all values, starting from zero.
pub fn sum<T, const N: usize>(values: [T; N]) -> T
where
    T: Zero + Add<Output = T>,
{
    values.into_iter().fold(T::ZERO, |acc, value| acc + value)
}

/// Multiplies all values together, starting from one.
pub fn product<T, const N: usize>(values: [T; N]) -> T
where
    T: One + Mul<Output = T>,
{
    values.into_iter().fold(T::ONE, |acc, value| acc * value)
}

/// Clamps `value` into the range `[lo, hi]`.
///
/// Computed as `min(max(value, lo), hi)`. Unlike [`Ord::clamp`], crossed bounds do not panic:
/// when `lo > hi`, the result is `hi`.
///
/// # Examples
///
/// ```
/// # use linmath::scalar;
/// assert_eq!(scalar::clamp(5, 1, 3), 3);
/// assert_eq!(scalar::clamp(-5, 1, 3), 1);
/// assert_eq!(scalar::clamp(2, 1, 3), 2);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    min(max(value, lo), hi)
}

/// Linearly interpolates between `a` and `b`.
///
/// Computed as `a * (1 - weight) + b * weight`, which returns exactly `a` at `weight == 0` and
/// exactly `b` at `weight == 1`. The shorter `a + weight * (b - a)` form does not guarantee the
/// latter under floating-point rounding.
pub fn lerp<T: Number>(a: T, b: T, weight: T) -> T {
    a * (T::ONE - weight) + b * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_to_significance() {
        assert_eq!(floor_to(7, 3), 6);
        assert_eq!(ceil_to(7, 3), 9);
        assert_eq!(floor_to(-7, 3), -9);
        assert_eq!(ceil_to(-7, 3), -6);

        assert_eq!(floor_to(7.0, 3.0), 6.0);
        assert_eq!(ceil_to(7.0, 3.0), 9.0);
        assert_eq!(floor_to(-7.0, 3.0), -9.0);
        assert_eq!(ceil_to(-7.0, 3.0), -6.0);

        // Exact multiples stay put.
        assert_eq!(floor_to(6, 3), 6);
        assert_eq!(ceil_to(6, 3), 6);
        assert_eq!(floor_to(0.75, 0.25), 0.75);
        assert_eq!(ceil_to(0.75, 0.25), 0.75);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 1, 3), 3);
        assert_eq!(clamp(-5, 1, 3), 1);
        assert_eq!(clamp(2, 1, 3), 2);

        // Crossed bounds resolve to `hi`.
        assert_eq!(clamp(2, 3, 1), 1);
    }

    #[test]
    fn lerp_exact_at_bounds() {
        let a = 0.1f32;
        let b = 7.3f32;
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(0.0f32, 10.0, 0.5), 5.0);
    }

    #[test]
    fn ties_prefer_first_argument() {
        assert!(min(0.0f32, -0.0).is_sign_positive());
        assert!(min(-0.0f32, 0.0).is_sign_negative());
        assert!(max(0.0f32, -0.0).is_sign_positive());
    }

    #[test]
    fn sign() {
        assert_eq!(signum(-3), -1);
        assert_eq!(signum(0), 0);
        assert_eq!(signum(17), 1);
        assert_eq!(signum(0u32), 0);
        assert_eq!(signum(3u32), 1);
        assert_eq!(signum(-0.5), -1.0);
        assert_eq!(signum(f64::NAN), 0.0);
    }

    #[test]
    fn folds() {
        assert_eq!(sum([1, 2, 3, 4]), 10);
        assert_eq!(product([1, 2, 3, 4]), 24);
        assert_eq!(sum::<i32, 0>([]), 0);
        assert_eq!(product::<i32, 0>([]), 1);

        assert_eq!(min_of([3, 1, 2]), 1);
        assert_eq!(max_of([3, 1, 2]), 3);
        assert_eq!(min_of([5]), 5);
        assert_eq!(max_of([5]), 5);
    }

    #[test]
    fn remainder_sign_follows_dividend() {
        assert_eq!(rem(7, 3), 1);
        assert_eq!(rem(-7, 3), -1);
        assert_eq!(rem(7, -3), 1);
        assert_eq!(rem(7.5, 2.0), 1.5);
        assert_eq!(rem(-7.5, 2.0), -1.5);
    }

    #[test]
    fn shifts() {
        assert_eq!(shl(1u8, 3), 8);
        assert_eq!(shr(16u8, 2), 4);
        assert_eq!(shr(-8i32, 2), -2);
    }
}
