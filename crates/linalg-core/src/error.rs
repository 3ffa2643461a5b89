//! Error types for linalg-rs operations.
//!
//! Every fallible operation on a `Vector` or `Matrix` (see `linalg-math`)
//! reports one of the variants below. Callers branch on the class of the
//! failure ([`Error::kind`]); message text is informational only.
//!
//! # Usage
//!
//! ```rust
//! use linalg_core::{Error, ErrorKind, Result};
//!
//! fn checked_len(len: i64) -> Result<usize> {
//!     if len <= 0 {
//!         return Err(Error::invalid_argument(format!("size must be > 0, got {len}")));
//!     }
//!     Ok(len as usize)
//! }
//!
//! assert_eq!(checked_len(-2).unwrap_err().kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by vector and matrix operations.
///
/// # Categories
///
/// - **Kind errors**: [`WrongType`](Error::WrongType)
/// - **Value errors**: [`InvalidArgument`](Error::InvalidArgument), [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Shape errors**: [`ShapeMismatch`](Error::ShapeMismatch)
/// - **Arithmetic errors**: [`DivisionByZero`](Error::DivisionByZero)
/// - **Capability errors**: [`NotSupported`](Error::NotSupported)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Operand or argument kind is incompatible with the operation.
    ///
    /// Returned when, for example, a string is passed where a size is
    /// expected, or a vector is divided by a vector.
    ///
    /// ```rust
    /// use linalg_core::Error;
    ///
    /// let err = Error::wrong_type("Vector", "str");
    /// assert!(err.to_string().contains("expected Vector"));
    /// ```
    #[error("wrong type: expected {expected}, found {found}")]
    WrongType {
        /// What the operation accepts
        expected: String,
        /// Kind of the operand that was passed
        found: String,
    },

    /// Argument has the right kind but an invalid value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Index lies outside `0..len` after negative wraparound.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Index as passed by the caller (before wraparound)
        index: isize,
        /// Length of the indexed axis
        len: usize,
    },

    /// Operands are of compatible kinds but incompatible shapes.
    ///
    /// Also used for construction input that cannot form a valid shape
    /// (empty sequences, ragged rows, non-numeric components).
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Division or normalization by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Operation is not available for this shape, or is a reserved placeholder.
    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Fieldless classification of an [`Error`].
///
/// Handy for assertions that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::WrongType`].
    WrongType,
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::IndexOutOfRange`].
    IndexOutOfRange,
    /// See [`Error::ShapeMismatch`].
    ShapeMismatch,
    /// See [`Error::DivisionByZero`].
    DivisionByZero,
    /// See [`Error::NotSupported`].
    NotSupported,
}

impl Error {
    /// Creates an [`Error::WrongType`] error.
    ///
    /// # Arguments
    ///
    /// * `expected` - Description of the accepted operand kinds
    /// * `found` - Kind name of the rejected operand
    #[inline]
    pub fn wrong_type(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::WrongType {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Creates an [`Error::NotSupported`] error.
    #[inline]
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    /// Returns the failure class of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongType { .. } => ErrorKind::WrongType,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::NotSupported(_) => ErrorKind::NotSupported,
        }
    }

    /// Returns `true` if this is an index error.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a shape error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch(_))
    }

    /// Returns `true` if the operand kind was rejected.
    #[inline]
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::WrongType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_type() {
        let err = Error::wrong_type("Vector or number", "str");
        let msg = err.to_string();
        assert!(msg.contains("Vector or number"));
        assert!(msg.contains("str"));
        assert!(err.is_type_error());
        assert_eq!(err.kind(), ErrorKind::WrongType);
    }

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range(-7, 5);
        let msg = err.to_string();
        assert!(msg.contains("-7"));
        assert!(msg.contains('5'));
        assert!(err.is_index_error());
        assert!(!err.is_shape_error());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Error::shape_mismatch("can't add vectors of size 3 and 2");
        assert!(err.to_string().starts_with("shape mismatch"));
        assert!(err.is_shape_error());
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            Error::wrong_type("a", "b"),
            Error::invalid_argument("x"),
            Error::index_out_of_range(0, 0),
            Error::shape_mismatch("x"),
            Error::DivisionByZero,
            Error::not_supported("x"),
        ];
        for (i, a) in errors.iter().enumerate() {
            for (j, b) in errors.iter().enumerate() {
                assert_eq!(i == j, a.kind() == b.kind());
            }
        }
    }
}
