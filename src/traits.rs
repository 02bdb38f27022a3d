use std::ops::{Add, Div, Mul, Neg, Sub};

/// Types that have a zero value.
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a one value.
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Primitive number types that can act as tuple elements.
///
/// [`Vector`], [`Matrix`] and [`Quat`] accept arbitrary payload types for plain storage, but the
/// generic tuple machinery ([`Tuple`], [`cw`]) requires elements to be plain scalars, which is
/// what this trait captures. It is implemented for all built-in integer and floating-point types.
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
/// [`Quat`]: crate::Quat
/// [`Tuple`]: crate::Tuple
/// [`cw`]: crate::cw
pub trait Scalar: Zero + One + Copy {}

macro_rules! zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }

            impl Scalar for $types {}
        )+
    };
}

zero_one!(0, 1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0; f32, f64);

/// A trait for "number-like" types, mostly useful for writing generic code.
///
/// This trait is automatically implemented for any type that implements the [`Zero`] and [`One`]
/// traits, as well as the standard arithmetic operations.
pub trait Number:
    Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialEq
    + Copy
{
}

impl<T> Number for T where
    T: Zero
        + One
        + Neg<Output = Self>
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support trigonometric operations.
pub trait Trig: Sized {
    /// Archimedes' constant, the ratio of a circle's circumference to its diameter.
    const PI: Self;
    /// The full circle constant, equal to 2π.
    const TAU: Self;

    /// Computes the sine of `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the sine and cosine of `self` (in radians) at once.
    fn sin_cos(self) -> (Self, Self);
    /// Computes the tangent of `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// Converts an angle in degrees to radians.
    fn to_radians(self) -> Self;
    /// Converts an angle in radians to degrees.
    fn to_degrees(self) -> Self;
}

impl Trig for f32 {
    const PI: Self = std::f32::consts::PI;
    const TAU: Self = std::f32::consts::TAU;

    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn sin_cos(self) -> (Self, Self) {
        self.sin_cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn asin(self) -> Self {
        self.asin()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn atan(self) -> Self {
        self.atan()
    }

    fn atan2(self, other: Self) -> Self {
        self.atan2(other)
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }
}

impl Trig for f64 {
    const PI: Self = std::f64::consts::PI;
    const TAU: Self = std::f64::consts::TAU;

    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn sin_cos(self) -> (Self, Self) {
        self.sin_cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn asin(self) -> Self {
        self.asin()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn atan(self) -> Self {
        self.atan()
    }

    fn atan2(self, other: Self) -> Self {
        self.atan2(other)
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }
}

/// Types that have a square root operation.
pub trait Sqrt {
    /// Computes the square root of `self`.
    fn sqrt(self) -> Self;
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

/// Types that can be rounded to a whole value.
///
/// Integer types are already whole, so their implementations return `self` unchanged.
pub trait Round {
    /// Returns the whole part of `self`, discarding any fraction.
    fn trunc(self) -> Self;
    /// Rounds to the nearest whole value, with halfway cases rounding away from zero.
    fn round(self) -> Self;
    /// Returns the largest whole value less than or equal to `self`.
    fn floor(self) -> Self;
    /// Returns the smallest whole value greater than or equal to `self`.
    fn ceil(self) -> Self;
}

macro_rules! round_is_identity {
    ($($types:ty),+) => {
        $(
            impl Round for $types {
                fn trunc(self) -> Self {
                    self
                }

                fn round(self) -> Self {
                    self
                }

                fn floor(self) -> Self {
                    self
                }

                fn ceil(self) -> Self {
                    self
                }
            }
        )+
    };
}

round_is_identity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Round for f32 {
    fn trunc(self) -> Self {
        self.trunc()
    }

    fn round(self) -> Self {
        self.round()
    }

    fn floor(self) -> Self {
        self.floor()
    }

    fn ceil(self) -> Self {
        self.ceil()
    }
}

impl Round for f64 {
    fn trunc(self) -> Self {
        self.trunc()
    }

    fn round(self) -> Self {
        self.round()
    }

    fn floor(self) -> Self {
        self.floor()
    }

    fn ceil(self) -> Self {
        self.ceil()
    }
}

/// Types that have an absolute value operation.
///
/// Unsigned integers are their own absolute value, so their implementations return `self`
/// unchanged.
pub trait Abs {
    /// Computes the absolute value of `self`.
    fn abs(self) -> Self;
}

macro_rules! abs_via_inherent {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}

macro_rules! abs_is_identity {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self
                }
            }
        )+
    };
}

abs_via_inherent!(i8, i16, i32, i64, i128, isize, f32, f64);
abs_is_identity!(u8, u16, u32, u64, u128, usize);
