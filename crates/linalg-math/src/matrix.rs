//! Rectangular matrix of real components.
//!
//! [`Matrix`] stores `m x n` components in row-major order, with `m, n >= 1`.
//! Rows and columns are handed out as [`Vector`]s. Like vectors, matrices are
//! mutated only through indexed assignment; every other operation returns a
//! new value.
//!
//! # Usage
//!
//! ```rust
//! use linalg_math::Matrix;
//!
//! let a = Matrix::new([[1, 2, 3], [4, 5, 6]]).unwrap();
//! let b = Matrix::new([[4, 7], [5, 8], [6, 9]]).unwrap();
//!
//! let c = (&a * &b).unwrap();
//! assert_eq!(c.to_string(), "[[32.0, 50.0], [77.0, 122.0]]");
//! assert_eq!(Matrix::new([[3, 6], [2, 5]]).unwrap().det().unwrap(), 3.0);
//! ```
//!
//! # Indexing
//!
//! Cells are addressed by `(row, col)`, each axis with negative wraparound:
//!
//! ```rust
//! use linalg_math::Matrix;
//!
//! let mut m = Matrix::zeros(2, 3).unwrap();
//! m.set(-1, -1, 7.0).unwrap();
//! assert_eq!(m.get(1, 2).unwrap(), 7.0);
//! ```

use crate::{Operand, Vector};
use linalg_core::{join_reals, resolve_index, round_to, Error, Key, Result};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::trace;

/// A dense `m x n` matrix of reals, stored row-major.
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    m: usize,
    n: usize,
    data: Vec<f64>,
}

fn positive_dim(arg: Operand, what: &str) -> Result<usize> {
    match arg {
        Operand::Int(v) if v > 0 => usize::try_from(v)
            .map_err(|_| Error::invalid_argument(format!("{what} {v} is too large"))),
        Operand::Int(v) => Err(Error::invalid_argument(format!(
            "{what} should be an int > 0, got {v}"
        ))),
        other => Err(Error::wrong_type("int > 0", other.kind_name())),
    }
}

/// Number of components in an `m x n` buffer, if such a buffer can exist.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if the component count or its byte size
/// overflows.
pub(crate) fn checked_buffer_len(m: usize, n: usize) -> Result<usize> {
    m.checked_mul(n)
        .filter(|len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| Error::invalid_argument(format!("a {m}x{n} buffer is too large")))
}

fn sequence_reals(seq: Operand) -> Result<Vec<f64>> {
    match seq {
        seq @ (Operand::List(_) | Operand::Vector(_)) => seq.to_reals(),
        other => Err(Error::wrong_type("list of numbers or Vector", other.kind_name())),
    }
}

impl Matrix {
    /// Zero matrix with `m` rows and `n` columns.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if either dimension is `<= 0` or the
    /// `m * n` buffer cannot be allocated;
    /// [`Error::WrongType`] if either is not an integer.
    pub fn zeros(m: impl Into<Operand>, n: impl Into<Operand>) -> Result<Self> {
        let m = positive_dim(m.into(), "row count")?;
        let n = positive_dim(n.into(), "column count")?;
        Ok(Self::from_parts(m, n, vec![0.0; checked_buffer_len(m, n)?]))
    }

    /// Matrix copied from a sequence of rows.
    ///
    /// Rows may be lists of numbers or vectors. Passing a matrix copies it.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] for no rows, an empty row, rows of unequal
    ///   length or a non-numeric component
    /// - [`Error::NotSupported`] for text (reserved for parsing)
    /// - [`Error::WrongType`] for any other argument
    ///
    /// ```rust
    /// use linalg_math::Matrix;
    ///
    /// let m = Matrix::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    /// assert_eq!(m.size(), (3, 2));
    /// assert!(Matrix::new(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn new(rows: impl Into<Operand>) -> Result<Self> {
        match rows.into() {
            Operand::List(rows) => Self::from_row_operands(&rows),
            Operand::Matrix(m) => Ok(m),
            Operand::Text(_) => Err(Error::not_supported("creating a Matrix from text")),
            other => Err(Error::wrong_type("list of rows", other.kind_name())),
        }
    }

    /// Same as [`Matrix::new`].
    pub fn from_rows(rows: impl Into<Operand>) -> Result<Self> {
        Self::new(rows)
    }

    /// Matrix whose columns are the given sequences.
    pub fn from_cols(cols: impl Into<Operand>) -> Result<Self> {
        Ok(Self::new(cols)?.transpose())
    }

    fn from_row_operands(rows: &[Operand]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::shape_mismatch("a matrix needs at least one row"));
        }
        let mut data = Vec::new();
        let mut width = 0;
        for (i, row) in rows.iter().enumerate() {
            let values = match row {
                Operand::List(_) | Operand::Vector(_) => row.to_reals()?,
                other => {
                    return Err(Error::shape_mismatch(format!(
                        "row {i} is a {}, not a sequence",
                        other.kind_name()
                    )));
                }
            };
            if i == 0 {
                width = values.len();
            } else if values.len() != width {
                return Err(Error::shape_mismatch(format!(
                    "row {i} has {} components, expected {width}",
                    values.len()
                )));
            }
            data.extend(values);
        }
        Ok(Self::from_parts(rows.len(), width, data))
    }

    /// `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// As [`Matrix::zeros`].
    pub fn identity(n: impl Into<Operand>) -> Result<Self> {
        let n = positive_dim(n.into(), "size")?;
        checked_buffer_len(n, n)?;
        Ok(Self::identity_of(n))
    }

    /// Callers guarantee that an `n x n` buffer fits.
    pub(crate) fn identity_of(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_parts(n, n, data)
    }

    /// Square matrix with `seq` on the diagonal and zeros elsewhere.
    ///
    /// ```rust
    /// use linalg_math::Matrix;
    ///
    /// let d = Matrix::diagonal([3, 4, 2, 5]).unwrap();
    /// assert!(d.is_diagonal());
    /// assert_eq!(d.det().unwrap(), 120.0);
    /// ```
    pub fn diagonal(seq: impl Into<Operand>) -> Result<Self> {
        let values = sequence_reals(seq.into())?;
        let n = values.len();
        let mut data = vec![0.0; n * n];
        for (i, v) in values.into_iter().enumerate() {
            data[i * n + i] = v;
        }
        Ok(Self::from_parts(n, n, data))
    }

    /// Single-row matrix from a list of numbers or a vector.
    pub fn row_from_vector(seq: impl Into<Operand>) -> Result<Self> {
        let values = sequence_reals(seq.into())?;
        Ok(Self::from_parts(1, values.len(), values))
    }

    /// Single-column matrix from a list of numbers or a vector.
    pub fn col_from_vector(seq: impl Into<Operand>) -> Result<Self> {
        let values = sequence_reals(seq.into())?;
        Ok(Self::from_parts(values.len(), 1, values))
    }

    /// `1 x size` matrix holding `v`.
    pub fn row_vector(v: &Vector) -> Self {
        Self::from_parts(1, v.size(), v.values())
    }

    /// `size x 1` matrix holding `v`.
    pub fn col_vector(v: &Vector) -> Self {
        Self::from_parts(v.size(), 1, v.values())
    }

    /// Reserved text-format factory.
    ///
    /// # Errors
    ///
    /// Always fails: [`Error::NotSupported`] for text, [`Error::WrongType`]
    /// for anything else.
    pub fn parse(text: impl Into<Operand>) -> Result<Self> {
        match text.into() {
            Operand::Text(_) => Err(Error::not_supported("parsing a Matrix from text")),
            other => Err(Error::wrong_type("str", other.kind_name())),
        }
    }

    #[inline]
    pub(crate) fn from_parts(m: usize, n: usize, data: Vec<f64>) -> Self {
        debug_assert!(m > 0 && n > 0 && data.len() == m * n);
        Self { m, n, data }
    }

    /// Folds a sequence of matrices with `+`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty sequence; otherwise the
    /// errors of matrix addition.
    pub fn try_sum<'a, I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Matrix>,
    {
        let mut iter = items.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| Error::invalid_argument("can't sum an empty sequence of matrices"))?;
        iter.try_fold(first.clone(), |acc, m| &acc + m)
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// `(rows, columns)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Number of rows.
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of columns.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    #[inline]
    fn row_slice(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Rows as vectors of size `n`.
    pub fn rows(&self) -> Vec<Vector> {
        self.data
            .chunks_exact(self.n)
            .map(|row| Vector::from_vec_unchecked(row.to_vec()))
            .collect()
    }

    /// Columns as vectors of size `m`.
    pub fn cols(&self) -> Vec<Vector> {
        self.transpose().rows()
    }

    /// Nested copy of the components, one inner `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.n).map(<[f64]>::to_vec).collect()
    }

    // ------------------------------------------------------------------
    // Item access
    // ------------------------------------------------------------------

    fn cell(&self, row: isize, col: isize) -> Result<usize> {
        let i = resolve_index(row, self.m)?;
        let j = resolve_index(col, self.n)?;
        Ok(i * self.n + j)
    }

    /// Component at `(row, col)`.
    pub fn get(&self, row: isize, col: isize) -> Result<f64> {
        Ok(self.data[self.cell(row, col)?])
    }

    /// Overwrites the component at `(row, col)`.
    pub fn set(&mut self, row: isize, col: isize, value: f64) -> Result<()> {
        let idx = self.cell(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    fn coord(key: &Key) -> Result<(isize, isize)> {
        match key {
            Key::Coord(c) if c.len() == 2 => Ok((c[0], c[1])),
            Key::Coord(c) => Err(Error::invalid_argument(format!(
                "matrix keys need 2 coordinates, got {}",
                c.len()
            ))),
            other => Err(Error::wrong_type("(row, col) tuple", other.kind_name())),
        }
    }

    /// Reads the cell addressed by a `(row, col)` key.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for index and slice keys; [`Error::InvalidArgument`]
    /// for a coordinate key of arity other than 2.
    pub fn get_item(&self, key: &Key) -> Result<f64> {
        let (row, col) = Self::coord(key)?;
        self.get(row, col)
    }

    /// Writes the cell addressed by a `(row, col)` key.
    pub fn set_item(&mut self, key: &Key, value: f64) -> Result<()> {
        let (row, col) = Self::coord(key)?;
        self.set(row, col, value)
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// True if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// True for a square matrix with ones on the diagonal and zeros elsewhere.
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && (0..self.m).all(|i| {
                (0..self.n).all(|j| {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    self.at(i, j) == expected
                })
            })
    }

    /// True for a `1 x 1` matrix.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.size() == (1, 1)
    }

    /// True if either dimension is one.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.m == 1 || self.n == 1
    }

    /// True if `m == n`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    fn off_diagonal_pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.m).flat_map(move |i| ((i + 1)..self.n).map(move |j| (self.at(i, j), self.at(j, i))))
    }

    /// True for a square matrix whose off-diagonal components are all zero.
    pub fn is_diagonal(&self) -> bool {
        self.is_square() && self.off_diagonal_pairs().all(|(a, b)| a == 0.0 && b == 0.0)
    }

    /// True for a square matrix equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.off_diagonal_pairs().all(|(a, b)| a == b)
    }

    // ------------------------------------------------------------------
    // Extraction
    // ------------------------------------------------------------------

    /// Row `i` as a vector.
    pub fn get_row(&self, i: isize) -> Result<Vector> {
        let i = resolve_index(i, self.m)?;
        Ok(Vector::from_vec_unchecked(self.row_slice(i).to_vec()))
    }

    /// Column `j` as a vector.
    pub fn get_col(&self, j: isize) -> Result<Vector> {
        let j = resolve_index(j, self.n)?;
        Ok(Vector::from_vec_unchecked(
            (0..self.m).map(|i| self.at(i, j)).collect(),
        ))
    }

    fn diagonal_values(&self) -> Vec<f64> {
        (0..self.m.min(self.n)).map(|i| self.at(i, i)).collect()
    }

    /// Main diagonal, of length `min(m, n)`.
    pub fn get_diagonal(&self) -> Vector {
        Vector::from_vec_unchecked(self.diagonal_values())
    }

    /// The single component of a `1 x 1` matrix.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] for any other shape.
    pub fn as_scalar(&self) -> Result<f64> {
        if !self.is_scalar() {
            return Err(Error::shape_mismatch(format!(
                "matrix is not a scalar, size is {:?}",
                self.size()
            )));
        }
        Ok(self.data[0])
    }

    /// The single row (if `m == 1`) or single column of the matrix.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] unless one dimension is one.
    pub fn as_vector(&self) -> Result<Vector> {
        if self.m == 1 {
            self.get_row(0)
        } else if self.n == 1 {
            self.get_col(0)
        } else {
            Err(Error::shape_mismatch(format!(
                "matrix is not a vector, size is {:?}",
                self.size()
            )))
        }
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_parts(self.m, self.n, self.data.iter().map(|&x| f(x)).collect())
    }

    /// `n x m` matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let data = (0..self.n)
            .flat_map(move |j| (0..self.m).map(move |i| self.at(i, j)))
            .collect();
        Self::from_parts(self.n, self.m, data)
    }

    /// Zero matrix of the same shape.
    pub fn zero(&self) -> Self {
        Self::from_parts(self.m, self.n, vec![0.0; self.data.len()])
    }

    /// Rounds every component to `digits` decimal places (half away from zero).
    pub fn round(&self, digits: i32) -> Self {
        self.map(|x| round_to(x, digits))
    }

    /// Component-wise floor.
    pub fn floor(&self) -> Self {
        self.map(f64::floor)
    }

    /// Component-wise ceiling.
    pub fn ceil(&self) -> Self {
        self.map(f64::ceil)
    }

    /// Component-wise truncation toward zero.
    pub fn trunc(&self) -> Self {
        self.map(f64::trunc)
    }

    // ------------------------------------------------------------------
    // Linear algebra
    // ------------------------------------------------------------------

    /// Sum of the main diagonal.
    pub fn trace(&self) -> f64 {
        self.diagonal_values().iter().sum()
    }

    /// Determinant.
    ///
    /// Diagonal matrices use the product of the diagonal, `2 x 2` the direct
    /// formula, and larger matrices cofactor expansion along the first row.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] for a non-square matrix.
    ///
    /// ```rust
    /// use linalg_math::Matrix;
    ///
    /// let m = Matrix::new([[3, 6, 2], [1, 0, 5], [7, 2, 1]]).unwrap();
    /// assert_eq!(m.det().unwrap(), 178.0);
    /// assert!(Matrix::zeros(2, 3).unwrap().det().is_err());
    /// ```
    pub fn det(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::not_supported(format!(
                "determinant of a non-square {}x{} matrix",
                self.m, self.n
            )));
        }
        Ok(self.square_det())
    }

    fn square_det(&self) -> f64 {
        if self.is_diagonal() {
            return self.diagonal_values().iter().product();
        }
        if self.m == 2 {
            return self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0);
        }
        trace!(size = self.m, "cofactor expansion");
        (0..self.n)
            .map(|col| {
                let term = self.at(0, col) * self.minor(0, col).square_det();
                if col % 2 == 0 { term } else { -term }
            })
            .sum()
    }

    /// Square matrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> Self {
        let data = (0..self.m)
            .filter(|&i| i != row)
            .flat_map(move |i| {
                self.row_slice(i)
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &x)| x)
            })
            .collect();
        Self::from_parts(self.m - 1, self.n - 1, data)
    }

    fn check_same_shape(&self, other: &Matrix, op: &str) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::shape_mismatch(format!(
                "can't {op} matrices of size {}x{} and {}x{}",
                self.m, self.n, other.m, other.n
            )));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::from_parts(
            self.m,
            self.n,
            self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect(),
        )
    }

    // ------------------------------------------------------------------
    // Comparison and dynamic operators
    // ------------------------------------------------------------------

    /// Compares against a scalar: `0` tests [`is_zero`](Self::is_zero),
    /// `1` tests [`is_identity`](Self::is_identity).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for any other scalar.
    pub fn eq_scalar(&self, value: f64) -> Result<bool> {
        if value == 0.0 {
            Ok(self.is_zero())
        } else if value == 1.0 {
            Ok(self.is_identity())
        } else {
            Err(Error::invalid_argument(format!(
                "can't compare matrix to {value}"
            )))
        }
    }

    /// Equality against a dynamically-typed operand.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for scalars other than 0 and 1;
    /// [`Error::WrongType`] for non-scalar, non-matrix operands.
    pub fn try_eq(&self, other: &Operand) -> Result<bool> {
        match other {
            Operand::None => Ok(false),
            Operand::Matrix(m) => Ok(self == m),
            Operand::Int(_) | Operand::Real(_) => {
                self.eq_scalar(other.as_real().unwrap_or_default())
            }
            other => Err(Error::wrong_type("Matrix or number", other.kind_name())),
        }
    }

    /// Negation of [`try_eq`](Self::try_eq), with the same failures.
    pub fn try_ne(&self, other: &Operand) -> Result<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    fn convert(other: &Operand) -> Result<Self> {
        Self::new(other.clone())
            .map_err(|_| Error::wrong_type("Matrix or list of rows", other.kind_name()))
    }

    /// `self + other`; a non-matrix operand is first converted from rows.
    pub fn add_operand(&self, other: &Operand) -> Result<Self> {
        match other {
            Operand::Matrix(m) => self + m,
            other => self + &Self::convert(other)?,
        }
    }

    /// `self - other`; a non-matrix operand is first converted from rows.
    pub fn sub_operand(&self, other: &Operand) -> Result<Self> {
        match other {
            Operand::Matrix(m) => self - m,
            other => self - &Self::convert(other)?,
        }
    }

    /// `self * other` for a matrix, vector or scalar operand.
    pub fn mul_operand(&self, other: &Operand) -> Result<Self> {
        match other {
            Operand::Matrix(m) => self * m,
            Operand::Vector(v) => self * v,
            Operand::Int(_) | Operand::Real(_) => Ok(self * other.as_real().unwrap_or_default()),
            other => Err(Error::wrong_type("number, Vector or Matrix", other.kind_name())),
        }
    }

    /// `self / other` for a scalar operand.
    pub fn div_operand(&self, other: &Operand) -> Result<Self> {
        match other.as_real() {
            Some(x) => self / x,
            None => Err(Error::wrong_type("number", other.kind_name())),
        }
    }

    /// Constructor-call rendering, e.g. `Matrix([[1.0, 2.0]])`.
    pub fn repr(&self) -> String {
        format!("Matrix({self})")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.data.chunks_exact(self.n).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{}]", join_reals(row))?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        let width = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| Error::shape_mismatch("a matrix needs at least one row"))?;
        if width == 0 {
            return Err(Error::shape_mismatch("matrix rows can't be empty"));
        }
        if let Some(i) = rows.iter().position(|r| r.len() != width) {
            return Err(Error::shape_mismatch(format!(
                "row {i} has {} components, expected {width}",
                rows[i].len()
            )));
        }
        let m = rows.len();
        Ok(Self::from_parts(m, width, rows.into_iter().flatten().collect()))
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Vec<Vec<f64>> {
        m.to_rows()
    }
}

// &Matrix + &Matrix
impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape(rhs, "add")?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }
}

// &Matrix - &Matrix
impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape(rhs, "subtract")?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }
}

// &Matrix * &Matrix
impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        if self.n != rhs.m {
            return Err(Error::shape_mismatch(format!(
                "can't multiply {}x{} by {}x{}",
                self.m, self.n, rhs.m, rhs.n
            )));
        }
        trace!(lhs = ?self.size(), rhs = ?rhs.size(), "matrix product");
        let mut data: Vec<f64> = Vec::with_capacity(self.m * rhs.n);
        for i in 0..self.m {
            let row = self.row_slice(i);
            for j in 0..rhs.n {
                data.push(row.iter().enumerate().map(|(k, &a)| a * rhs.at(k, j)).sum());
            }
        }
        Ok(Matrix::from_parts(self.m, rhs.n, data))
    }
}

// &Matrix * &Vector (column vector)
impl Mul<&Vector> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Vector) -> Result<Matrix> {
        if self.n != rhs.size() {
            return Err(Error::shape_mismatch(format!(
                "can't multiply {}x{} matrix by vector of size {}",
                self.m,
                self.n,
                rhs.size()
            )));
        }
        self * &Matrix::col_vector(rhs)
    }
}

// &Vector * &Matrix (row vector)
impl Mul<&Matrix> for &Vector {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        if rhs.m != self.size() {
            return Err(Error::shape_mismatch(format!(
                "can't multiply vector of size {} by {}x{} matrix",
                self.size(),
                rhs.m,
                rhs.n
            )));
        }
        &Matrix::row_vector(self) * rhs
    }
}

// &Matrix * f64
impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.map(|x| x * rhs)
    }
}

// f64 * &Matrix
impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

// &Matrix / f64
impl Div<f64> for &Matrix {
    type Output = Result<Matrix>;

    fn div(self, rhs: f64) -> Result<Matrix> {
        if rhs == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self * (1.0 / rhs))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

forward_owned_binop!(ref Add, add, Matrix, Matrix, Result<Matrix>);
forward_owned_binop!(ref Sub, sub, Matrix, Matrix, Result<Matrix>);
forward_owned_binop!(ref Mul, mul, Matrix, Matrix, Result<Matrix>);
forward_owned_binop!(ref Mul, mul, Matrix, Vector, Result<Matrix>);
forward_owned_binop!(ref Mul, mul, Vector, Matrix, Result<Matrix>);
forward_owned_binop!(scalar_rhs Mul, mul, Matrix, Matrix);
forward_owned_binop!(scalar_rhs Div, div, Matrix, Result<Matrix>);
forward_owned_binop!(scalar_lhs Mul, mul, Matrix, Matrix);
forward_owned_neg!(Matrix);
