//! Zero-cost views that give [`Vector`]s named fields.
//!
//! Each `Vector<T, N>` with `N` between 1 and 4 derefs to a `#[repr(C)]` struct whose fields
//! alias the vector's elements, so `v.x` and `v[0]` refer to the same memory. The views chain:
//! the positional `x/y/z/w` names deref further to the color names `r/g/b/a`, those to the
//! texture-coordinate names `s/t/p/q`, and for 2-element vectors `w/h` (width and height) are
//! available at the end of the chain.

use std::mem;
use std::ops::{Deref, DerefMut};

use super::Vector;

// The reasonable part:

/// View struct for [`Vector`]s with 1 element.
#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

/// View struct for [`Vector`]s with 2 elements.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (),
}

/// View struct for [`Vector`]s with 3 elements.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

/// View struct for [`Vector`]s with 4 elements.
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

// The funny part:

/// Color channel names for 1-element [`Vector`]s.
#[repr(C)]
pub struct R<T> {
    pub r: T,
    _priv: (),
}

/// Color channel names for 2-element [`Vector`]s.
#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (),
}

/// Color channel names for 3-element [`Vector`]s.
#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

/// Color channel names for 4-element [`Vector`]s.
#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

/// Texture coordinate names for 1-element [`Vector`]s.
#[repr(C)]
pub struct S<T> {
    pub s: T,
    _priv: (),
}

/// Texture coordinate names for 2-element [`Vector`]s.
#[repr(C)]
pub struct ST<T> {
    pub s: T,
    pub t: T,
    _priv: (),
}

/// Texture coordinate names for 3-element [`Vector`]s.
#[repr(C)]
pub struct STP<T> {
    pub s: T,
    pub t: T,
    pub p: T,
    _priv: (),
}

/// Texture coordinate names for 4-element [`Vector`]s.
#[repr(C)]
pub struct STPQ<T> {
    pub s: T,
    pub t: T,
    pub p: T,
    pub q: T,
    _priv: (),
}

// The "taking it too far" part:

/// Width/height names for 2-element [`Vector`]s storing a size.
#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (),
}

macro_rules! chain {
    ($({ $from:ty => $to:ty },)+) => {
        $(
            impl<T> Deref for $from {
                type Target = $to;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

chain! {
    { Vector<T, 1> => X<T> },
    { Vector<T, 2> => XY<T> },
    { Vector<T, 3> => XYZ<T> },
    { Vector<T, 4> => XYZW<T> },
    { X<T> => R<T> },
    { XY<T> => RG<T> },
    { XYZ<T> => RGB<T> },
    { XYZW<T> => RGBA<T> },
    { R<T> => S<T> },
    { RG<T> => ST<T> },
    { RGB<T> => STP<T> },
    { RGBA<T> => STPQ<T> },
    { ST<T> => WH<T> },
}
