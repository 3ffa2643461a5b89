//! # linalg-core
//!
//! Core types shared by the linalg-rs crates.
//!
//! - [`Error`], [`ErrorKind`], [`Result`] - Failure taxonomy for every vector/matrix operation
//! - [`Key`], [`Span`], [`resolve_index`] - Access keys with negative-index wraparound
//! - [`round_to`], [`format_real`] - Scalar helpers for transforms and rendering
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. `linalg-math` builds the
//! [`Vector`]/[`Matrix`] value types on top of it:
//!
//! ```text
//! linalg-core (this crate)
//!    ^
//!    |
//!    +-- linalg-math (Vector, Matrix, Operand)
//! ```
//!
//! [`Vector`]: https://docs.rs/linalg-math
//! [`Matrix`]: https://docs.rs/linalg-math

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod key;
pub mod scalar;

pub use error::*;
pub use key::*;
pub use scalar::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use linalg_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::key::{resolve_index, Key, Span};
}
