//! Access keys and index resolution.
//!
//! Vectors and matrices accept zero-based indices with negative wraparound
//! (`-1` is the last element). [`resolve_index`] maps such an index onto
//! `0..len`, and [`Span::resolve`] does the same for half-open ranges with
//! clamping.
//!
//! [`Key`] is the dynamically-typed access key used by the `get_item` /
//! `set_item` entry points: a single index, a range, or a coordinate tuple.
//!
//! ```rust
//! use linalg_core::{resolve_index, Key, Span};
//!
//! assert_eq!(resolve_index(-1, 4).unwrap(), 3);
//! assert!(resolve_index(4, 4).is_err());
//!
//! assert_eq!(Span::from(1..).resolve(4), 1..4);
//! assert!(matches!(Key::from((0, -1)), Key::Coord(_)));
//! ```

use crate::{Error, Result};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// Resolves a possibly-negative index against an axis of length `len`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if the wrapped index is outside `0..len`.
#[inline]
pub fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let wrapped = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if wrapped < 0 || wrapped as usize >= len {
        return Err(Error::index_out_of_range(index, len));
    }
    Ok(wrapped as usize)
}

/// Half-open range with optional bounds and negative wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// First index (inclusive); `None` means the start of the axis.
    pub start: Option<isize>,
    /// Last index (exclusive); `None` means the end of the axis.
    pub end: Option<isize>,
}

impl Span {
    /// Creates a span from explicit bounds.
    #[inline]
    pub const fn new(start: Option<isize>, end: Option<isize>) -> Self {
        Self { start, end }
    }

    /// Resolves the span against an axis of length `len`.
    ///
    /// Bounds wrap like indices and are then clamped to `0..=len`; an
    /// inverted span resolves to an empty range. Never fails.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let clamp = |bound: isize| -> usize {
            let wrapped = if bound < 0 { bound + len as isize } else { bound };
            wrapped.clamp(0, len as isize) as usize
        };
        let start = self.start.map_or(0, clamp);
        let end = self.end.map_or(len, clamp);
        start..end.max(start)
    }
}

impl From<Range<isize>> for Span {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end))
    }
}

impl From<RangeFrom<isize>> for Span {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None)
    }
}

impl From<RangeTo<isize>> for Span {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end))
    }
}

impl From<RangeFull> for Span {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

/// Dynamically-typed access key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A single (possibly negative) index.
    At(isize),
    /// A half-open range of indices.
    Range(Span),
    /// A coordinate tuple, one index per axis.
    Coord(Vec<isize>),
}

impl Key {
    /// Short name of the key kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::At(_) => "index",
            Self::Range(_) => "slice",
            Self::Coord(_) => "tuple",
        }
    }
}

impl From<isize> for Key {
    fn from(i: isize) -> Self {
        Self::At(i)
    }
}

impl From<(isize, isize)> for Key {
    fn from((row, col): (isize, isize)) -> Self {
        Self::Coord(vec![row, col])
    }
}

impl From<Span> for Key {
    fn from(span: Span) -> Self {
        Self::Range(span)
    }
}

impl From<Range<isize>> for Key {
    fn from(r: Range<isize>) -> Self {
        Self::Range(r.into())
    }
}

impl From<RangeFrom<isize>> for Key {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::Range(r.into())
    }
}

impl From<RangeTo<isize>> for Key {
    fn from(r: RangeTo<isize>) -> Self {
        Self::Range(r.into())
    }
}

impl From<RangeFull> for Key {
    fn from(r: RangeFull) -> Self {
        Self::Range(r.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_positive() {
        assert_eq!(resolve_index(0, 3).unwrap(), 0);
        assert_eq!(resolve_index(2, 3).unwrap(), 2);
        assert!(resolve_index(3, 3).unwrap_err().is_index_error());
    }

    #[test]
    fn test_resolve_negative() {
        assert_eq!(resolve_index(-1, 3).unwrap(), 2);
        assert_eq!(resolve_index(-3, 3).unwrap(), 0);
        assert_eq!(
            resolve_index(-4, 3).unwrap_err(),
            Error::index_out_of_range(-4, 3)
        );
    }

    #[test]
    fn test_resolve_empty_axis() {
        assert!(resolve_index(0, 0).is_err());
        assert!(resolve_index(-1, 0).is_err());
    }

    #[test]
    fn test_span_clamps() {
        assert_eq!(Span::from(1..3).resolve(5), 1..3);
        assert_eq!(Span::from(-2..).resolve(5), 3..5);
        assert_eq!(Span::from(..-1).resolve(5), 0..4);
        assert_eq!(Span::from(..).resolve(5), 0..5);
        assert_eq!(Span::from(2..100).resolve(5), 2..5);
        assert_eq!(Span::from(-100..2).resolve(5), 0..2);
    }

    #[test]
    fn test_span_inverted_is_empty() {
        assert!(Span::from(4..1).resolve(5).is_empty());
        assert!(Span::from(7..).resolve(5).is_empty());
    }

    #[test]
    fn test_key_conversions() {
        assert_eq!(Key::from(-1), Key::At(-1));
        assert_eq!(Key::from((1, 2)), Key::Coord(vec![1, 2]));
        assert_eq!(Key::from(1..), Key::Range(Span::new(Some(1), None)));
        assert_eq!(Key::At(0).kind_name(), "index");
    }
}
