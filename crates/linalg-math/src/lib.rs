//! # linalg-math
//!
//! Vector and matrix value types for small dense linear algebra.
//!
//! - [`Vector`] - Fixed-size vector of reals (dot/cross product, normalization)
//! - [`Matrix`] - Row-major `m x n` matrix (product, determinant, eigenvalues)
//! - [`Operand`] - Dynamically-typed operand with a mixed-kind operator table
//!
//! # Design
//!
//! Values are immutable apart from indexed assignment. Every fallible
//! operation returns [`linalg_core::Result`], including the `std::ops`
//! operators whose shapes can disagree:
//!
//! ```rust
//! use linalg_math::{Matrix, Vector};
//!
//! let a = Vector::new([1.0, 2.0]).unwrap();
//! let b = Vector::new([1.0, 2.0, 3.0]).unwrap();
//! assert!((&a + &b).is_err());
//!
//! let m = Matrix::new([[4, 3], [7, 1]]).unwrap();
//! let col = (&m * &a).unwrap();
//! assert_eq!(col.size(), (2, 1));
//! ```
//!
//! Operations that cannot fail (scaling, negation) return the value directly.
//!
//! # Dependencies
//!
//! - [`linalg_core`] - Error taxonomy, access keys, rounding
//! - [`tracing`] - Debug/trace events for determinant and eigenvalue solvers
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize `Vector` as a list of reals and `Matrix` as a list of
//!   rows; deserialization re-validates the shape

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

mod eigen;
mod matrix;
mod operand;
mod vector;

pub use matrix::*;
pub use operand::*;
pub use vector::*;

pub use linalg_core::{Error, ErrorKind, Key, Result, Span};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use linalg_math::prelude::*;
///
/// let v = Vector::zeros(3).unwrap();
/// assert!(v.is_zero());
/// ```
pub mod prelude {
    pub use crate::{Matrix, Operand, Vector};
    pub use linalg_core::prelude::*;
}
