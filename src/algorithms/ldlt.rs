//! LDLᵗ factorization of symmetric matrices.
//!
//! ## Purpose
//!
//! Computes a unit lower-triangular `L` and a diagonal `D` such that
//! `L·diag(D)·Lᵗ = A`. Unlike Cholesky the input does not have to be positive
//! definite; only non-zero pivots are required since no square root is taken.
//!
//! ## Key concepts
//!
//! ```text
//! D[j]    = A[j][j] - Σ_{k<j} L[j][k]²·D[k]
//! L[i][j] = (A[i][j] - Σ_{k<j} L[i][k]·L[j][k]·D[k]) / D[j]     for i > j
//! ```
//!
//! ## Invariants
//!
//! * The diagonal of `L` is stored explicitly as `1.0`.
//! * Entries above the diagonal of `L` are exactly zero.
//! * On success no entry of `D` is degenerate under the policy.
//!
//! ## Non-goals
//!
//! * Symmetric pivoting (Bunch-Kaufman, rook). A zero leading pivot such as
//!   `[[0, 1], [1, 0]]` is reported as a failure.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pivot::{PivotPolicy, to_f64};
use crate::math::vector::dot;
use crate::primitives::errors::FactorError;
use crate::primitives::matrix::Matrix;

/// Result of an LDLᵗ factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct LdltDecomposition<T> {
    l: Matrix<T>,
    d: Vec<T>,
}

impl<T: Float> LdltDecomposition<T> {
    /// Factorize the symmetric matrix `a`.
    ///
    /// Fails with [`FactorError::SingularPivot`] when a pivot `D[j]` is
    /// degenerate under `policy`.
    pub fn factorize(a: &Matrix<T>, policy: &PivotPolicy<T>) -> Result<Self, FactorError> {
        if !a.is_square() {
            return Err(FactorError::NotSquare {
                rows: a.rows(),
                columns: a.columns(),
            });
        }

        let n = a.rows();
        let mut l = Matrix::identity(n);
        let mut d = vec![T::zero(); n];

        for j in 0..n {
            let l_j = &l.row(j)[..j];
            let weighted = dot(
                l_j.iter().copied(),
                l_j.iter().zip(&d[..j]).map(|(&x, &dk)| x * dk),
            );
            let pivot = a.get(j, j) - weighted;

            if pivot.is_nan() || policy.is_degenerate(pivot) {
                log::debug!("ldlt: singular pivot {} at step {}", to_f64(pivot), j);
                return Err(FactorError::SingularPivot {
                    step: j,
                    pivot: to_f64(pivot),
                });
            }
            d[j] = pivot;

            for i in (j + 1)..n {
                let sum = dot(
                    l.row(i)[..j].iter().copied(),
                    l.row(j)[..j].iter().zip(&d[..j]).map(|(&x, &dk)| x * dk),
                );
                let value = (a.get(i, j) - sum) / pivot;
                l.set(i, j, value);
            }
        }

        log::trace!("ldlt: factorized {}x{} matrix", n, n);
        Ok(Self { l, d })
    }

    /// Dimension of the factorized matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.d.len()
    }

    /// The unit lower-triangular factor `L`.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The diagonal of `D`.
    #[inline]
    pub fn d(&self) -> &[T] {
        &self.d
    }

    /// `D` as a dense diagonal matrix.
    pub fn d_matrix(&self) -> Matrix<T> {
        let n = self.size();
        let mut out = Matrix::zeros(n, n);
        for (i, &v) in self.d.iter().enumerate() {
            out.set(i, i, v);
        }
        out
    }

    /// The unit upper-triangular factor `Lᵗ`.
    pub fn l_transpose(&self) -> Matrix<T> {
        self.l.transpose()
    }

    /// Rebuild `L·diag(D)·Lᵗ`.
    pub fn reconstruct(&self) -> Matrix<T> {
        let n = self.size();
        let mut out = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..=i {
                let k = j + 1;
                let v = dot(
                    self.l.row(i)[..k].iter().copied(),
                    self.l.row(j)[..k]
                        .iter()
                        .zip(&self.d[..k])
                        .map(|(&x, &dk)| x * dk),
                );
                out.set(i, j, v);
                out.set(j, i, v);
            }
        }
        out
    }

    /// Number of positive and negative entries of `D`, in that order.
    pub fn inertia(&self) -> (usize, usize) {
        let positive = self.d.iter().filter(|&&v| v > T::zero()).count();
        let negative = self.d.iter().filter(|&&v| v < T::zero()).count();
        (positive, negative)
    }
}
