//! Cholesky factorization of symmetric positive-definite matrices.
//!
//! ## Purpose
//!
//! Computes the lower-triangular `L` with a positive diagonal such that
//! `L·Lᵗ = A`.
//!
//! ## Design notes
//!
//! * **Row-oriented**: Entries are produced row by row (`j <= i`), so each sum is
//!   a dot product of two already-finished row prefixes of `L`.
//! * **Lower triangle only**: Only `A[i][j]` with `j <= i` is read. Symmetry is
//!   checked upstream by the validator.
//! * **Fail before sqrt**: A diagonal term at or below the policy threshold aborts
//!   the factorization before the square root is taken.
//!
//! ## Key concepts
//!
//! ```text
//! L[i][i] = sqrt(A[i][i] - Σ_{k<i} L[i][k]²)
//! L[i][j] = (A[i][j] - Σ_{k<j} L[i][k]·L[j][k]) / L[j][j]      for j < i
//! ```
//!
//! ## Invariants
//!
//! * Entries above the diagonal of `L` are exactly zero.
//! * On success every diagonal entry of `L` is strictly positive.
//!
//! ## Non-goals
//!
//! * Pivoted or semi-definite Cholesky variants.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pivot::{PivotPolicy, to_f64};
use crate::math::vector::dot;
use crate::primitives::errors::FactorError;
use crate::primitives::matrix::Matrix;

/// Result of a Cholesky factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyDecomposition<T> {
    l: Matrix<T>,
}

impl<T: Float> CholeskyDecomposition<T> {
    /// Factorize the symmetric positive-definite matrix `a`.
    ///
    /// The input is only read; `L` is a newly allocated matrix.
    pub fn factorize(a: &Matrix<T>, policy: &PivotPolicy<T>) -> Result<Self, FactorError> {
        if !a.is_square() {
            return Err(FactorError::NotSquare {
                rows: a.rows(),
                columns: a.columns(),
            });
        }

        let n = a.rows();
        let mut l = Matrix::zeros(n, n);

        for i in 0..n {
            for j in 0..=i {
                let sum = dot(
                    l.row(i)[..j].iter().copied(),
                    l.row(j)[..j].iter().copied(),
                );
                let residual = a.get(i, j) - sum;

                if i == j {
                    if residual.is_nan() || residual <= policy.threshold() {
                        log::debug!(
                            "cholesky: diagonal term {} at step {} is not positive",
                            to_f64(residual),
                            i
                        );
                        return Err(FactorError::NotPositiveDefinite {
                            step: i,
                            pivot: to_f64(residual),
                        });
                    }
                    l.set(i, i, residual.sqrt());
                } else {
                    let l_jj = l.get(j, j);
                    l.set(i, j, residual / l_jj);
                }
            }
        }

        log::trace!("cholesky: factorized {}x{} matrix", n, n);
        Ok(Self { l })
    }

    /// Dimension of the factorized matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.l.rows()
    }

    /// The lower-triangular factor `L`.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper-triangular factor `Lᵗ`.
    pub fn l_transpose(&self) -> Matrix<T> {
        self.l.transpose()
    }

    /// Rebuild `L·Lᵗ`.
    pub fn reconstruct(&self) -> Matrix<T> {
        let n = self.size();
        let mut out = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..=i {
                let k = j + 1;
                let v = dot(
                    self.l.row(i)[..k].iter().copied(),
                    self.l.row(j)[..k].iter().copied(),
                );
                out.set(i, j, v);
                out.set(j, i, v);
            }
        }
        out
    }

    /// Consume the decomposition and return `L`.
    pub fn into_l(self) -> Matrix<T> {
        self.l
    }
}
