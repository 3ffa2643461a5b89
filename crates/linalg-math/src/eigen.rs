//! Closed-form eigenvalues for small matrices.
//!
//! Only shapes with an analytic solution are handled:
//!
//! | Shape              | Method                                     |
//! |--------------------|--------------------------------------------|
//! | diagonal (any n)   | the diagonal, sorted descending            |
//! | 2x2                | roots of the characteristic quadratic      |
//! | symmetric 3x3      | trigonometric solution of the cubic        |
//!
//! Everything else is rejected with [`Error::NotSupported`].

use crate::Matrix;
use linalg_core::{Error, Result};
use std::f64::consts::PI;
use tracing::debug;

impl Matrix {
    /// Eigenvalues in descending order.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] for non-square matrices, 2x2 matrices with a
    /// complex pair, non-symmetric 3x3 matrices and anything larger that is
    /// not diagonal.
    ///
    /// ```rust
    /// use linalg_math::Matrix;
    ///
    /// let m = Matrix::new([[3, 4], [2, 5]]).unwrap();
    /// assert_eq!(m.eigenvalues().unwrap(), vec![7.0, 1.0]);
    /// ```
    pub fn eigenvalues(&self) -> Result<Vec<f64>> {
        if !self.is_square() {
            return Err(Error::not_supported(format!(
                "eigenvalues of a non-square {}x{} matrix",
                self.m(),
                self.n()
            )));
        }
        if self.is_diagonal() {
            debug!(size = self.m(), "eigenvalues: diagonal");
            let mut values = self.get_diagonal().values();
            values.sort_by(|a, b| b.total_cmp(a));
            return Ok(values);
        }
        match self.m() {
            2 => self.eigenvalues_2x2(),
            3 if self.is_symmetric() => self.eigenvalues_symmetric_3x3(),
            3 => Err(Error::not_supported(
                "eigenvalues of a non-symmetric 3x3 matrix",
            )),
            n => Err(Error::not_supported(format!(
                "eigenvalues of a general {n}x{n} matrix"
            ))),
        }
    }

    fn eigenvalues_2x2(&self) -> Result<Vec<f64>> {
        debug!("eigenvalues: 2x2 quadratic");
        let [a, b, c, d] = [self.get(0, 0)?, self.get(0, 1)?, self.get(1, 0)?, self.get(1, 1)?];
        let disc = (a - d).powi(2) + 4.0 * b * c;
        if disc < 0.0 {
            return Err(Error::not_supported(
                "2x2 matrix has a complex pair of eigenvalues",
            ));
        }
        let root = disc.sqrt();
        // root >= 0, so the pair is already descending
        Ok(vec![0.5 * (a + d + root), 0.5 * (a + d - root)])
    }

    fn eigenvalues_symmetric_3x3(&self) -> Result<Vec<f64>> {
        debug!("eigenvalues: symmetric 3x3");
        let p1 = self.get(0, 1)?.powi(2) + self.get(0, 2)?.powi(2) + self.get(1, 2)?.powi(2);
        let q = self.trace() / 3.0;
        let p2 = 2.0 * p1
            + (self.get(0, 0)? - q).powi(2)
            + (self.get(1, 1)? - q).powi(2)
            + (self.get(2, 2)? - q).powi(2);
        let p = (p2 / 6.0).sqrt();

        let shifted = (self - &(&Matrix::identity_of(3) * q))?;
        let b = (&shifted / p)?;
        let r = b.det()? / 2.0;

        // rounding can push r just outside [-1, 1]
        let phi = if r <= -1.0 {
            debug!(r, "clamped r to -1");
            PI / 3.0
        } else if r >= 1.0 {
            debug!(r, "clamped r to 1");
            0.0
        } else {
            r.acos() / 3.0
        };

        let eig1 = q + 2.0 * p * phi.cos();
        let eig3 = q + 2.0 * p * (phi + 2.0 * PI / 3.0).cos();
        let eig2 = 3.0 * q - eig1 - eig3;
        Ok(vec![eig1, eig2, eig3])
    }
}
