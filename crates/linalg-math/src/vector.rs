//! Fixed-length vector of real components.
//!
//! [`Vector`] holds at least one `f64` component. Its size is fixed at
//! construction; the only in-place mutation is indexed assignment
//! ([`Vector::set`], [`Vector::set_item`]), every other operation returns a
//! new vector.
//!
//! # Usage
//!
//! ```rust
//! use linalg_math::Vector;
//!
//! let a = Vector::new([1.0, 2.0, 3.0]).unwrap();
//! let b = Vector::new([4.0, 5.0, 6.0]).unwrap();
//!
//! assert_eq!(a.dot(&b).unwrap(), 32.0);
//! assert_eq!(a.cross(&b).unwrap(), Vector::new([-3.0, 6.0, -3.0]).unwrap());
//! assert_eq!((&a + &b).unwrap().to_string(), "5.0, 7.0, 9.0");
//! ```
//!
//! # Indexing
//!
//! Indices are zero-based and may be negative (`-1` is the last component):
//!
//! ```rust
//! use linalg_math::Vector;
//!
//! let mut v = Vector::new([1.0, 2.0, 3.0]).unwrap();
//! v.set(-1, 9.0).unwrap();
//! assert_eq!(v.get(2).unwrap(), 9.0);
//! assert!(v.get(3).is_err());
//! ```

use crate::matrix::checked_buffer_len;
use crate::Operand;
use linalg_core::{join_reals, resolve_index, round_to, Error, Key, Result, Span};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A vector of real components with a fixed size of at least one.
///
/// Equality (`==`) compares size and components in order. Comparison with
/// scalars goes through [`Vector::eq_scalar`] / [`Vector::try_eq`].
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Creates a vector from a size or from a sequence of numbers.
    ///
    /// - an integer `n > 0` gives the zero vector of size `n`;
    /// - a list of numbers (or another vector) is copied component-wise.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an integer size `<= 0`
    /// - [`Error::ShapeMismatch`] for an empty list or a non-numeric component
    /// - [`Error::WrongType`] for text and any other non-sequence argument
    ///
    /// ```rust
    /// use linalg_math::Vector;
    ///
    /// assert_eq!(Vector::new(3).unwrap().values(), vec![0.0; 3]);
    /// assert_eq!(Vector::new([1, 2]).unwrap().values(), vec![1.0, 2.0]);
    /// assert!(Vector::new("1,2,3").is_err());
    /// ```
    pub fn new(arg: impl Into<Operand>) -> Result<Self> {
        match arg.into() {
            Operand::Int(n) => Self::with_size(n),
            Operand::Text(_) => Err(Error::wrong_type("int > 0 or list of numbers", "str")),
            seq @ (Operand::List(_) | Operand::Vector(_)) => Ok(Self {
                values: seq.to_reals()?,
            }),
            other => Err(Error::wrong_type("int > 0 or list of numbers", other.kind_name())),
        }
    }

    /// Zero vector of the given size.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for `size <= 0`; [`Error::WrongType`] for
    /// any argument that is not an integer.
    pub fn zeros(size: impl Into<Operand>) -> Result<Self> {
        match size.into() {
            Operand::Int(n) => Self::with_size(n),
            other => Err(Error::wrong_type("int > 0", other.kind_name())),
        }
    }

    /// Vector copied from a sequence of numbers.
    ///
    /// Same validation as [`Vector::new`], except that scalars are rejected
    /// with [`Error::WrongType`] instead of being read as a size.
    pub fn from_list(seq: impl Into<Operand>) -> Result<Self> {
        match seq.into() {
            seq @ (Operand::List(_) | Operand::Vector(_)) => Self::new(seq),
            other => Err(Error::wrong_type("list of numbers", other.kind_name())),
        }
    }

    /// Reserved text-format factory.
    ///
    /// # Errors
    ///
    /// Always fails: [`Error::NotSupported`] for text (no text format is
    /// defined yet), [`Error::WrongType`] for anything else.
    pub fn parse(text: impl Into<Operand>) -> Result<Self> {
        match text.into() {
            Operand::Text(_) => Err(Error::not_supported("parsing a Vector from text")),
            other => Err(Error::wrong_type("str", other.kind_name())),
        }
    }

    fn with_size(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(Error::invalid_argument(format!(
                "vector size should be an int > 0, got {n}"
            )));
        }
        let len = usize::try_from(n)
            .map_err(|_| Error::invalid_argument(format!("vector size {n} is too large")))?;
        Ok(Self {
            values: vec![0.0; checked_buffer_len(1, len)?],
        })
    }

    /// Wraps components that are known to be non-empty.
    #[inline]
    pub(crate) fn from_vec_unchecked(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// Folds a sequence of vectors with `+`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty sequence; otherwise the
    /// errors of vector addition.
    pub fn try_sum<'a, I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut iter = items.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| Error::invalid_argument("can't sum an empty sequence of vectors"))?;
        iter.try_fold(first.clone(), |acc, v| &acc + v)
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// Number of components.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Same as [`size`](Self::size). A vector is never empty.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Copy of the components. Mutating it never affects the vector.
    #[inline]
    pub fn values(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Same as [`values`](Self::values).
    #[inline]
    pub fn as_list(&self) -> Vec<f64> {
        self.values()
    }

    /// Borrowed view of the components.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterator over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Euclidean norm, `sqrt(self . self)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.sum_of_products(self).sqrt()
    }

    // ------------------------------------------------------------------
    // Item access
    // ------------------------------------------------------------------

    /// Component at `index` (negative counts from the end).
    pub fn get(&self, index: isize) -> Result<f64> {
        Ok(self.values[resolve_index(index, self.size())?])
    }

    /// Overwrites the component at `index` (negative counts from the end).
    pub fn set(&mut self, index: isize, value: f64) -> Result<()> {
        let i = resolve_index(index, self.size())?;
        self.values[i] = value;
        Ok(())
    }

    /// New vector holding the components selected by `span`.
    ///
    /// Bounds are clamped to the vector.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the selection is empty.
    pub fn slice(&self, span: impl Into<Span>) -> Result<Self> {
        let range = span.into().resolve(self.size());
        if range.is_empty() {
            return Err(Error::shape_mismatch("slice selects no components"));
        }
        Ok(Self::from_vec_unchecked(self.values[range].to_vec()))
    }

    /// Reads by dynamic key: a component (`Real`) or a sub-vector.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for coordinate keys; index and slice errors as in
    /// [`get`](Self::get) and [`slice`](Self::slice).
    pub fn get_item(&self, key: &Key) -> Result<Operand> {
        match key {
            Key::At(i) => self.get(*i).map(Operand::Real),
            Key::Range(span) => self.slice(*span).map(Operand::Vector),
            other => Err(Error::wrong_type("index or slice", other.kind_name())),
        }
    }

    /// Writes by dynamic key. Only single indices can be assigned.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for slice and coordinate keys.
    pub fn set_item(&mut self, key: &Key, value: f64) -> Result<()> {
        match key {
            Key::At(i) => self.set(*i, value),
            other => Err(Error::wrong_type("index", other.kind_name())),
        }
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// True if every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&x| x == 0.0)
    }

    /// True if the magnitude is exactly one.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.magnitude() == 1.0
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_vec_unchecked(self.values.iter().map(|&x| f(x)).collect())
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

    /// Zero vector of the same size.
    pub fn zero(&self) -> Self {
        Self::from_vec_unchecked(vec![0.0; self.size()])
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] for a zero vector.
    pub fn normalize(&self) -> Result<Self> {
        self / self.magnitude()
    }

    // ------------------------------------------------------------------
    // Linear algebra
    // ------------------------------------------------------------------

    fn sum_of_products(&self, other: &Vector) -> f64 {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    fn check_same_size(&self, other: &Vector, op: &str) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::shape_mismatch(format!(
                "can't {op} vectors of size {} and {}",
                self.size(),
                other.size()
            )));
        }
        Ok(())
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the sizes differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_size(other, "dot")?;
        Ok(self.sum_of_products(other))
    }

    /// Dot product with a dynamically-typed operand.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] unless `other` is a vector; then as [`dot`](Self::dot).
    pub fn dot_with(&self, other: &Operand) -> Result<f64> {
        match other {
            Operand::Vector(v) => self.dot(v),
            other => Err(Error::wrong_type("Vector", other.kind_name())),
        }
    }

    /// Cross product of two 3-component vectors.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] if `self` does not have size 3;
    /// [`Error::InvalidArgument`] if `other` does not have size 3.
    pub fn cross(&self, other: &Vector) -> Result<Self> {
        self.check_cross_size()?;
        other.check_cross_operand_size()?;
        Ok(self.cross_unchecked(other))
    }

    /// Cross product with a dynamically-typed operand.
    ///
    /// Checks run in order: size of `self`, kind of `other`, size of `other`.
    pub fn cross_with(&self, other: &Operand) -> Result<Self> {
        self.check_cross_size()?;
        let other = other
            .as_vector()
            .ok_or_else(|| Error::wrong_type("Vector", other.kind_name()))?;
        other.check_cross_operand_size()?;
        Ok(self.cross_unchecked(other))
    }

    fn check_cross_size(&self) -> Result<()> {
        if self.size() != 3 {
            return Err(Error::not_supported(format!(
                "cross product is defined only for vectors of size 3, this vector has size {}",
                self.size()
            )));
        }
        Ok(())
    }

    fn check_cross_operand_size(&self) -> Result<()> {
        if self.size() != 3 {
            return Err(Error::invalid_argument(format!(
                "cross product is defined only for vectors of size 3, passed vector has size {}",
                self.size()
            )));
        }
        Ok(())
    }

    /// Both operands must have size 3.
    fn cross_unchecked(&self, other: &Vector) -> Self {
        let (a, b) = (&self.values, &other.values);
        Self::from_vec_unchecked(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    // ------------------------------------------------------------------
    // Comparison and dynamic operators
    // ------------------------------------------------------------------

    /// Compares against a scalar. Only zero is a valid scalar for vectors.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for any scalar other than zero.
    pub fn eq_scalar(&self, value: f64) -> Result<bool> {
        if value == 0.0 {
            Ok(self.is_zero())
        } else {
            Err(Error::invalid_argument(format!(
                "can't compare vector to {value}"
            )))
        }
    }

    /// Equality against a dynamically-typed operand.
    ///
    /// `None` compares unequal; vectors compare structurally; scalars go
    /// through [`eq_scalar`](Self::eq_scalar).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for non-zero scalars and other operand kinds.
    pub fn try_eq(&self, other: &Operand) -> Result<bool> {
        match other {
            Operand::None => Ok(false),
            Operand::Vector(v) => Ok(self == v),
            Operand::Int(_) | Operand::Real(_) => {
                self.eq_scalar(other.as_real().unwrap_or_default())
            }
            other => Err(Error::invalid_argument(format!(
                "can't compare vector to a {}",
                other.kind_name()
            ))),
        }
    }

    /// Negation of [`try_eq`](Self::try_eq), with the same failures.
    pub fn try_ne(&self, other: &Operand) -> Result<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// `self + other` for a dynamically-typed right operand.
    pub fn add_operand(&self, other: &Operand) -> Result<Self> {
        match other {
            Operand::Vector(v) => self + v,
            other => Err(Error::wrong_type("Vector", other.kind_name())),
        }
    }

    /// `self - other` for a dynamically-typed right operand.
    pub fn sub_operand(&self, other: &Operand) -> Result<Self> {
        match other {
            Operand::Vector(v) => self - v,
            other => Err(Error::wrong_type("Vector", other.kind_name())),
        }
    }

    /// `self * other` for a dynamically-typed right operand.
    ///
    /// Vector gives the dot product (`Real`), Matrix gives the row-vector
    /// product (`Matrix`), a scalar gives a scaled `Vector`.
    pub fn mul_operand(&self, other: &Operand) -> Result<Operand> {
        match other {
            Operand::Vector(v) => (self * v).map(Operand::Real),
            Operand::Matrix(m) => (self * m).map(Operand::Matrix),
            Operand::Int(_) | Operand::Real(_) => {
                Ok(Operand::Vector(self * other.as_real().unwrap_or_default()))
            }
            other => Err(Error::wrong_type("number, Vector or Matrix", other.kind_name())),
        }
    }

    /// `self / other` for a dynamically-typed right operand.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] unless `other` is a scalar; [`Error::DivisionByZero`]
    /// if it is zero.
    pub fn div_operand(&self, other: &Operand) -> Result<Self> {
        match other.as_real() {
            Some(x) => self / x,
            None => Err(Error::wrong_type("number", other.kind_name())),
        }
    }

    /// Constructor-call rendering, e.g. `Vector([1.0, 2.0])`.
    pub fn repr(&self) -> String {
        format!("Vector([{}])", join_reals(&self.values))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_reals(&self.values))
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::shape_mismatch("vector size should be positive"));
        }
        Ok(Self { values })
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::try_from(values.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Vec<f64> {
        v.values
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// &Vector + &Vector
impl Add<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &Vector) -> Result<Vector> {
        self.check_same_size(rhs, "add")?;
        Ok(Vector::from_vec_unchecked(
            self.values.iter().zip(&rhs.values).map(|(a, b)| a + b).collect(),
        ))
    }
}

// &Vector - &Vector
impl Sub<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &Vector) -> Result<Vector> {
        self.check_same_size(rhs, "subtract")?;
        Ok(Vector::from_vec_unchecked(
            self.values.iter().zip(&rhs.values).map(|(a, b)| a - b).collect(),
        ))
    }
}

// &Vector * &Vector (dot product)
impl Mul<&Vector> for &Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: &Vector) -> Result<f64> {
        self.check_same_size(rhs, "multiply (dot product)")?;
        Ok(self.sum_of_products(rhs))
    }
}

// &Vector * f64
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.map(|x| x * rhs)
    }
}

// f64 * &Vector
impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs * self
    }
}

// &Vector / f64
impl Div<f64> for &Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Result<Vector> {
        if rhs == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self * (1.0 / rhs))
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|x| -x)
    }
}

forward_owned_binop!(ref Add, add, Vector, Vector, Result<Vector>);
forward_owned_binop!(ref Sub, sub, Vector, Vector, Result<Vector>);
forward_owned_binop!(ref Mul, mul, Vector, Vector, Result<f64>);
forward_owned_binop!(scalar_rhs Mul, mul, Vector, Vector);
forward_owned_binop!(scalar_rhs Div, div, Vector, Result<Vector>);
forward_owned_binop!(scalar_lhs Mul, mul, Vector, Vector);
forward_owned_neg!(Vector);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use linalg_core::ErrorKind;

    fn v(values: &[f64]) -> Vector {
        Vector::try_from(values).unwrap()
    }

    #[test]
    fn test_new_from_size() {
        for n in 1..50 {
            let z = Vector::new(n).unwrap();
            assert_eq!(z.size(), n as usize);
            assert!(z.is_zero());
        }
        for n in 0..50 {
            assert_eq!(Vector::new(-n).unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_new_from_list() {
        assert_eq!(Vector::new([1, 2, 3]).unwrap().values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            Vector::new(Vec::<f64>::new()).unwrap_err().kind(),
            ErrorKind::ShapeMismatch
        );
        assert_eq!(
            Vector::new(vec![Operand::Int(1), Operand::from("2")])
                .unwrap_err()
                .kind(),
            ErrorKind::ShapeMismatch
        );
    }

    #[test]
    fn test_new_rejects_text_and_reals() {
        assert_eq!(Vector::new("").unwrap_err().kind(), ErrorKind::WrongType);
        assert_eq!(Vector::new("1,2,3").unwrap_err().kind(), ErrorKind::WrongType);
        assert_eq!(Vector::new(10.0).unwrap_err().kind(), ErrorKind::WrongType);
        assert_eq!(Vector::new(None::<f64>).unwrap_err().kind(), ErrorKind::WrongType);
    }

    #[test]
    fn test_new_copies_vector() {
        let a = v(&[1.0, 2.0]);
        let mut b = Vector::new(&a).unwrap();
        b.set(0, 5.0).unwrap();
        assert_eq!(a.get(0).unwrap(), 1.0);
    }

    #[test]
    fn test_oversized_vector_is_an_error() {
        for n in [i64::MAX, 1i64 << 61] {
            assert_eq!(Vector::zeros(n).unwrap_err().kind(), ErrorKind::InvalidArgument);
            assert_eq!(Vector::new(n).unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_zeros() {
        assert_eq!(Vector::zeros(4).unwrap().values(), vec![0.0; 4]);
        assert_eq!(Vector::zeros(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(Vector::zeros(-3).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(Vector::zeros(1.0).unwrap_err().kind(), ErrorKind::WrongType);
        assert_eq!(Vector::zeros("3").unwrap_err().kind(), ErrorKind::WrongType);
        assert_eq!(Vector::zeros([1, 2]).unwrap_err().kind(), ErrorKind::WrongType);
    }

    #[test]
    fn test_from_list() {
        assert_eq!(Vector::from_list([1, 2, 3]).unwrap().values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            Vector::from_list(Vec::<i32>::new()).unwrap_err().kind(),
            ErrorKind::ShapeMismatch
        );
        for bad in [Operand::Int(0), Operand::Int(1), Operand::Real(-1.0), Operand::from("1,2")] {
            assert_eq!(Vector::from_list(bad).unwrap_err().kind(), ErrorKind::WrongType);
        }
    }

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(Vector::parse("").unwrap_err().kind(), ErrorKind::NotSupported);
        assert_eq!(Vector::parse("1,2,3").unwrap_err().kind(), ErrorKind::NotSupported);
        assert_eq!(Vector::parse(1).unwrap_err().kind(), ErrorKind::WrongType);
        assert_eq!(Vector::parse([1, 2, 3]).unwrap_err().kind(), ErrorKind::WrongType);
    }

    #[test]
    fn test_values_is_a_copy() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.len(), a.size());
        let mut values = a.values();
        values[0] = 100.0;
        assert_eq!(a.get(0).unwrap(), 1.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(v(&[3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(Vector::zeros(7).unwrap().magnitude(), 0.0);
        for i in -20..20 {
            for j in 1..6 {
                let got = Vector::new(vec![i; j]).unwrap().magnitude();
                assert_relative_eq!(got, (j as f64).sqrt() * (i as f64).abs(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_get_set() {
        let mut a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.get(-1).unwrap(), 3.0);
        assert_eq!(a.get(-3).unwrap(), 1.0);
        assert!(a.get(3).unwrap_err().is_index_error());
        assert!(a.get(-4).unwrap_err().is_index_error());
        a.set(1, 7.5).unwrap();
        assert_eq!(a, v(&[1.0, 7.5, 3.0]));
        assert!(a.set(10, 0.0).unwrap_err().is_index_error());
    }

    #[test]
    fn test_slice() {
        let a = v(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.slice(1..3).unwrap(), v(&[2.0, 3.0]));
        assert_eq!(a.slice(-2..).unwrap(), v(&[3.0, 4.0]));
        assert_eq!(a.slice(..).unwrap(), a);
        assert!(a.slice(3..1).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_item_keys() {
        let mut a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.get_item(&Key::At(1)).unwrap(), Operand::Real(2.0));
        assert_eq!(
            a.get_item(&Key::from(1..)).unwrap(),
            Operand::Vector(v(&[2.0, 3.0]))
        );
        assert!(a.get_item(&Key::Coord(vec![0, 1])).unwrap_err().is_type_error());
        assert!(a.set_item(&Key::from(0..2), 1.0).unwrap_err().is_type_error());
        a.set_item(&Key::At(-1), 9.0).unwrap();
        assert_eq!(a.get(2).unwrap(), 9.0);
    }

    #[test]
    fn test_predicates() {
        assert!(Vector::zeros(3).unwrap().is_zero());
        assert!(!v(&[0.0, 1.0]).is_zero());
        assert!(v(&[0.0, 1.0]).is_normalized());
        assert!(!v(&[1.0, 1.0]).is_normalized());
    }

    #[test]
    fn test_transforms() {
        let a = v(&[1.34, 4.56, -3.89]);
        assert_eq!(a.round(0), v(&[1.0, 5.0, -4.0]));
        assert_eq!(a.round(1), v(&[1.3, 4.6, -3.9]));
        assert_eq!(v(&[1.34, 54.56, -23.89]).round(-1), v(&[0.0, 50.0, -20.0]));
        assert_eq!(a.floor(), v(&[1.0, 4.0, -4.0]));
        assert_eq!(a.ceil(), v(&[2.0, 5.0, -3.0]));
        assert_eq!(a.trunc(), v(&[1.0, 4.0, -3.0]));
        assert_eq!(a.zero(), Vector::zeros(3).unwrap());
        assert_eq!(a, v(&[1.34, 4.56, -3.89]));
    }

    #[test]
    fn test_normalize() {
        let n = v(&[3.0, 4.0]).normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.get(0).unwrap(), 0.6, epsilon = 1e-12);
        for i in 1..20 {
            let a = Vector::new(vec![i as f64 * 0.7; i]).unwrap();
            assert_relative_eq!(a.normalize().unwrap().magnitude(), 1.0, epsilon = 1e-12);
        }
        assert_eq!(
            Vector::zeros(3).unwrap().normalize().unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn test_dot() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.dot(&v(&[4.0, 5.0, 6.0])).unwrap(), 32.0);
        assert!(a.dot(&v(&[1.0, 2.0])).unwrap_err().is_shape_error());
        assert!(a.dot_with(&Operand::Int(3)).unwrap_err().is_type_error());
        assert!(a.dot_with(&Operand::from([1, 2, 3])).unwrap_err().is_type_error());
    }

    #[test]
    fn test_cross() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.cross(&v(&[4.0, 5.0, 6.0])).unwrap(), v(&[-3.0, 6.0, -3.0]));
        assert_eq!(
            v(&[1.0, 2.0]).cross(&a).unwrap_err().kind(),
            ErrorKind::NotSupported
        );
        // size of self is checked before the kind of the operand
        assert_eq!(
            v(&[1.0, 2.0]).cross_with(&Operand::None).unwrap_err().kind(),
            ErrorKind::NotSupported
        );
        assert_eq!(
            a.cross_with(&Operand::from([4, 5, 6])).unwrap_err().kind(),
            ErrorKind::WrongType
        );
        assert_eq!(
            a.cross(&v(&[1.0, 2.0])).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            a.cross_with(&Operand::from(v(&[1.0, 2.0]))).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        // typed and dynamic entry points agree
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!(a.cross(&b).unwrap(), a.cross_with(&Operand::from(&b)).unwrap());
        assert_eq!(
            v(&[1.0]).cross(&v(&[1.0, 2.0])).unwrap_err().kind(),
            ErrorKind::NotSupported
        );
    }

    #[test]
    fn test_equality() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a, v(&[1.0, 2.0, 3.0]));
        assert_ne!(a, v(&[1.0, 2.0]));
        assert!(Vector::zeros(4).unwrap().try_eq(&Operand::Int(0)).unwrap());
        assert!(Vector::zeros(4).unwrap().try_eq(&Operand::Real(0.0)).unwrap());
        assert!(!a.try_eq(&Operand::Int(0)).unwrap());
        assert!(!a.try_eq(&Operand::None).unwrap());
        assert!(a.try_ne(&Operand::None).unwrap());
        assert_eq!(
            a.try_eq(&Operand::Int(1)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            a.try_ne(&Operand::from("abc")).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_unary() {
        let a = v(&[1.0, -2.0, 0.5]);
        assert_eq!(-&a, v(&[-1.0, 2.0, -0.5]));
        assert_eq!(-a.clone(), v(&[-1.0, 2.0, -0.5]));
    }

    #[test]
    fn test_add_sub() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, -5.0, 6.0]);
        assert_eq!((&a + &b).unwrap(), v(&[5.0, -3.0, 9.0]));
        assert_eq!((&a - &b).unwrap(), v(&[-3.0, 7.0, -3.0]));
        assert!((&a + &v(&[1.0, 2.0])).unwrap_err().is_shape_error());
        assert!((a.clone() - v(&[1.0])).unwrap_err().is_shape_error());
        assert!(a.add_operand(&Operand::Int(4)).unwrap_err().is_type_error());
        assert!(a.sub_operand(&Operand::from([1, 2, 3])).unwrap_err().is_type_error());
    }

    #[test]
    fn test_mul() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!((&a * &a).unwrap(), 14.0);
        assert_eq!(&a * 2.0, v(&[2.0, 4.0, 6.0]));
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!(a.clone() * -1.0, -&a);
        assert!((&a * &v(&[1.0])).unwrap_err().is_shape_error());
        assert!(a.mul_operand(&Operand::from("x")).unwrap_err().is_type_error());
        assert!(a.mul_operand(&Operand::None).unwrap_err().is_type_error());
    }

    #[test]
    fn test_div() {
        let a = v(&[2.0, 4.0]);
        assert_eq!((&a / 2.0).unwrap(), v(&[1.0, 2.0]));
        assert_eq!((&Vector::zeros(5).unwrap() / 0.0).unwrap_err(), Error::DivisionByZero);
        assert_eq!(a.div_operand(&Operand::Int(0)).unwrap_err(), Error::DivisionByZero);
        assert!(a.div_operand(&Operand::Vector(a.clone())).unwrap_err().is_type_error());
    }

    #[test]
    fn test_try_sum() {
        let items = [v(&[1.0, 2.0]), v(&[3.0, 4.0]), v(&[5.0, 6.0])];
        assert_eq!(Vector::try_sum(&items).unwrap(), v(&[9.0, 12.0]));
        assert_eq!(
            Vector::try_sum(std::iter::empty()).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(Vector::try_sum(&[v(&[1.0]), v(&[1.0, 2.0])]).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_rendering() {
        assert_eq!(Vector::zeros(5).unwrap().to_string(), "0.0, 0.0, 0.0, 0.0, 0.0");
        assert_eq!(v(&[1.1, 2.2, 3.3]).to_string(), "1.1, 2.2, 3.3");
        assert_eq!(v(&[1.1, 2.2, 3.3]).repr(), "Vector([1.1, 2.2, 3.3])");
        assert_eq!(format!("{:?}", Vector::zeros(2).unwrap()), "Vector([0.0, 0.0])");
    }

    #[test]
    fn test_iter() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        assert_eq!((&a).into_iter().sum::<f64>(), 6.0);
    }
}
