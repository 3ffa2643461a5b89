//! Dynamically-typed operands and the operator dispatch table.
//!
//! [`Operand`] is a tagged union over everything the vector and matrix entry
//! points accept: nothing, integers, reals, text, nested lists, vectors and
//! matrices. Constructors and factories take `impl Into<Operand>`, so both
//! `Vector::new(5)` and `Vector::new([1.0, 2.0])` work, while a string
//! argument is rejected with [`Error::WrongType`] instead of being coerced.
//!
//! The binary operators on `Operand` follow one dispatch order:
//!
//! 1. the left operand as a Vector or Matrix,
//! 2. the right operand as a Vector or Matrix (reflected operation),
//! 3. plain numeric arithmetic between `Int` and `Real`.
//!
//! Every other pairing fails with [`Error::WrongType`].
//!
//! ```rust
//! use linalg_math::{Matrix, Operand, Vector};
//!
//! let v = Operand::from(Vector::new([1.0, 2.0]).unwrap());
//! let scaled = Operand::from(3).try_mul(&v).unwrap();
//! assert_eq!(scaled, Operand::from(Vector::new([3.0, 6.0]).unwrap()));
//!
//! let m = Operand::from(Matrix::identity(2).unwrap());
//! assert!(m.try_eq(&Operand::from(1)).unwrap());
//! ```

use crate::{Matrix, Vector};
use linalg_core::{Error, Result};

/// A value passed to a dynamically-typed entry point.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// Absence of a value.
    #[default]
    None,
    /// Integer scalar.
    Int(i64),
    /// Real scalar.
    Real(f64),
    /// Text. Never interpreted as a number or a sequence.
    Text(String),
    /// Ordered sequence of operands (components, or rows of components).
    List(Vec<Operand>),
    /// A vector.
    Vector(Vector),
    /// A matrix.
    Matrix(Matrix),
}

impl Operand {
    /// Short name of the operand kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Int(_) => "int",
            Self::Real(_) => "float",
            Self::Text(_) => "str",
            Self::List(_) => "list",
            Self::Vector(_) => "Vector",
            Self::Matrix(_) => "Matrix",
        }
    }

    /// Returns the scalar value of an `Int` or `Real` operand.
    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Self::Int(i) => Some(i as f64),
            Self::Real(x) => Some(x),
            _ => None,
        }
    }

    /// Returns `true` for `Int` and `Real` operands.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.as_real().is_some()
    }

    /// Returns the vector if this operand holds one.
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the matrix if this operand holds one.
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Reads this operand as a non-empty sequence of reals.
    ///
    /// Lists of numbers and vectors qualify. An empty list or a non-numeric
    /// element is a shape error; any other operand kind is a type error.
    pub(crate) fn to_reals(&self) -> Result<Vec<f64>> {
        match self {
            Self::Vector(v) => Ok(v.values()),
            Self::List(items) => {
                if items.is_empty() {
                    return Err(Error::shape_mismatch("size should be positive, got an empty list"));
                }
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        item.as_real().ok_or_else(|| {
                            Error::shape_mismatch(format!(
                                "component {i} is a {}, not a number",
                                item.kind_name()
                            ))
                        })
                    })
                    .collect()
            }
            other => Err(Error::wrong_type("list of numbers or Vector", other.kind_name())),
        }
    }

    /// Tests equality, dispatching to vector/matrix scalar comparison rules.
    ///
    /// # Errors
    ///
    /// Propagates the comparison errors of [`Vector::try_eq`] and
    /// [`Matrix::try_eq`].
    pub fn try_eq(&self, other: &Operand) -> Result<bool> {
        match (self, other) {
            (Self::Vector(v), rhs) => v.try_eq(rhs),
            (Self::Matrix(m), rhs) => m.try_eq(rhs),
            (lhs, Self::Vector(v)) => v.try_eq(lhs),
            (lhs, Self::Matrix(m)) => m.try_eq(lhs),
            (lhs, rhs) => match (lhs.as_real(), rhs.as_real()) {
                (Some(a), Some(b)) => Ok(a == b),
                _ => Ok(lhs == rhs),
            },
        }
    }

    /// Negation of [`try_eq`](Self::try_eq), with the same failures.
    pub fn try_ne(&self, other: &Operand) -> Result<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Unary plus: a copy of a numeric, vector or matrix operand.
    pub fn try_pos(&self) -> Result<Operand> {
        match self {
            Self::Int(_) | Self::Real(_) | Self::Vector(_) | Self::Matrix(_) => Ok(self.clone()),
            other => Err(Error::wrong_type("number, Vector or Matrix", other.kind_name())),
        }
    }

    /// Unary minus.
    pub fn try_neg(&self) -> Result<Operand> {
        match self {
            Self::Int(i) => Ok(i.checked_neg().map_or(Self::Real(-(*i as f64)), Self::Int)),
            Self::Real(x) => Ok(Self::Real(-x)),
            Self::Vector(v) => Ok(Self::Vector(-v)),
            Self::Matrix(m) => Ok(Self::Matrix(-m)),
            other => Err(Error::wrong_type("number, Vector or Matrix", other.kind_name())),
        }
    }

    /// Addition.
    pub fn try_add(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Self::Vector(a), b) => a.add_operand(b).map(Self::Vector),
            (Self::Matrix(a), b) => a.add_operand(b).map(Self::Matrix),
            (a, Self::Vector(_) | Self::Matrix(_)) => Err(reflected_error("add", a, rhs)),
            (a, b) => numeric(a, b, "add", i64::checked_add, |x, y| x + y),
        }
    }

    /// Subtraction.
    pub fn try_sub(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Self::Vector(a), b) => a.sub_operand(b).map(Self::Vector),
            (Self::Matrix(a), b) => a.sub_operand(b).map(Self::Matrix),
            (a, Self::Vector(_) | Self::Matrix(_)) => Err(reflected_error("subtract", a, rhs)),
            (a, b) => numeric(a, b, "subtract", i64::checked_sub, |x, y| x - y),
        }
    }

    /// Multiplication.
    ///
    /// Vector * Vector is the dot product (a `Real`); Vector * Matrix and
    /// Matrix * Vector produce matrices; scalars scale either side.
    pub fn try_mul(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Self::Vector(a), b) => a.mul_operand(b),
            (Self::Matrix(a), b) => a.mul_operand(b).map(Self::Matrix),
            (a, Self::Vector(v)) => a
                .as_real()
                .map(|x| Self::Vector(x * v))
                .ok_or_else(|| reflected_error("multiply", a, rhs)),
            (a, Self::Matrix(m)) => a
                .as_real()
                .map(|x| Self::Matrix(x * m))
                .ok_or_else(|| reflected_error("multiply", a, rhs)),
            (a, b) => numeric(a, b, "multiply", i64::checked_mul, |x, y| x * y),
        }
    }

    /// Division. Numeric division always yields a `Real`.
    pub fn try_div(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Self::Vector(a), b) => a.div_operand(b).map(Self::Vector),
            (Self::Matrix(a), b) => a.div_operand(b).map(Self::Matrix),
            (a, Self::Vector(_) | Self::Matrix(_)) => Err(reflected_error("divide", a, rhs)),
            (a, b) => match (a.as_real(), b.as_real()) {
                (Some(_), Some(y)) if y == 0.0 => Err(Error::DivisionByZero),
                (Some(x), Some(y)) => Ok(Self::Real(x / y)),
                _ => Err(Error::wrong_type(
                    "numbers",
                    format!("{} and {}", a.kind_name(), b.kind_name()),
                )),
            },
        }
    }
}

fn reflected_error(op: &str, lhs: &Operand, rhs: &Operand) -> Error {
    Error::wrong_type(
        format!("operands that can {op} a {}", rhs.kind_name()),
        lhs.kind_name(),
    )
}

fn numeric(
    lhs: &Operand,
    rhs: &Operand,
    op: &str,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Result<Operand> {
    match (lhs, rhs) {
        (Operand::Int(a), Operand::Int(b)) => Ok(int_op(*a, *b)
            .map_or_else(|| Operand::Real(real_op(*a as f64, *b as f64)), Operand::Int)),
        _ => match (lhs.as_real(), rhs.as_real()) {
            (Some(a), Some(b)) => Ok(Operand::Real(real_op(a, b))),
            _ => Err(Error::wrong_type(
                format!("numbers to {op}"),
                format!("{} and {}", lhs.kind_name(), rhs.kind_name()),
            )),
        },
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<isize> for Operand {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Operand {
    fn from(v: usize) -> Self {
        i64::try_from(v).map_or(Self::Real(v as f64), Self::Int)
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Self::Real(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Operand>, const N: usize> From<[T; N]> for Operand {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Operand>> From<&[T]> for Operand {
    fn from(v: &[T]) -> Self {
        Self::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Self::Vector(v.clone())
    }
}

impl From<Matrix> for Operand {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<&Matrix> for Operand {
    fn from(m: &Matrix) -> Self {
        Self::Matrix(m.clone())
    }
}
