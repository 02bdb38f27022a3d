//! A small linear algebra library with compile-time dimensions.
//!
//! The building blocks are [`Vector<T, N>`], [`Matrix<T, R, C>`] and [`Quat<T>`], all generic
//! over their element type and sized at compile time via const generics. On top of those, the
//! library provides conversions between rotation representations ([`AxisAngle`], [`EulerAngles`],
//! [`TaitBryanAngles`], [`SphericalDir`], [`Basis`]) and the usual projection and view matrices
//! for rendering.
//!
//! # Example
//!
//! ```
//! use linmath::*;
//!
//! let camera = Mat4f::perspective(90.0f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0)
//!     * Mat4f::look_at(vec3(0.0, 2.0, 5.0), Vec3f::ZERO, Vec3f::Y);
//! let clip = camera * vec4(0.0, 0.0, 0.0, 1.0);
//! let ndc = (clip / clip.w).truncate();
//! assert!(ndc.z < 1.0);
//! ```
//!
//! # Elementwise operations
//!
//! `+` and `-` on vectors and matrices are elementwise, and so are `*` and `/` with a scalar
//! operand. `*` between two vectors is elementwise too, while `*` between matrices (and between a
//! matrix and a vector) is the matrix product; matrices multiply and divide elementwise through
//! [`cw::mul`] and [`cw::div`], which are available for every tuple type. The [`cw`] module also
//! maps arbitrary scalar functions over tuples, and [`scalar`] collects the scalar functions
//! themselves.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors, further
//!   simplifying their API.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No SIMD-specific code paths and no heap allocation; every type is a plain `repr` struct that
//!   can be handed to GPU APIs via [`bytemuck`].
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

pub mod cw;
pub mod scalar;
mod axis_angle;
mod basis;
mod euler;
mod matrix;
mod quat;
mod spherical;
mod traits;
mod tuple;
mod vector;

pub use axis_angle::*;
pub use basis::*;
pub use euler::*;
pub use matrix::*;
pub use quat::*;
pub use spherical::*;
pub use traits::*;
pub use tuple::*;
pub use vector::*;
