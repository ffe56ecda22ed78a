//! LU factorization with partial pivoting.
//!
//! ## Purpose
//!
//! Computes `P·A = L·U` for a general `rows x columns` matrix, where `P` is a row
//! permutation, `L` is `rows x min(rows, columns)` unit lower-triangular and `U` is
//! `min(rows, columns) x columns` upper-triangular.
//!
//! ## Design notes
//!
//! * **Working copy**: The factorization consumes a `Matrix` and eliminates in
//!   place; the multipliers go to a separate `L` whose rows are swapped together
//!   with the working rows. `U` is the leading rows of the working copy.
//! * **Partial pivoting**: When column `k` is reduced against pivot row `p`, the
//!   row with the largest `|a_ik|`, `i >= p`, becomes the pivot row. Ties keep the
//!   topmost row.
//! * **Rank deficiency is not an error**: A degenerate column is recorded, its
//!   remaining entries are zeroed, and the next column is reduced against the
//!   same pivot row. The partial factorization stays usable for rank estimation.
//!
//! ## Key concepts
//!
//! * **Echelon progress**: The pivot row `p` only advances when a column yields a
//!   pivot, so `U` is in row echelon form and `rank()` is the number of pivots.
//!
//! ## Invariants
//!
//! * `permutation` is a permutation of `0..rows`.
//! * Row `i` of `L·U` reproduces row `permutation[i]` of `A` up to rounding and
//!   the dropped sub-threshold entries.
//! * `rank() <= min(rows, columns)`; rows of `U` from `rank()` on are zero.
//!
//! ## Non-goals
//!
//! * Complete (row and column) pivoting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pivot::{DegeneratePivot, PivotPolicy, to_f64};
use crate::primitives::errors::FactorError;
use crate::primitives::matrix::Matrix;

/// Result of an LU factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
    permutation: Vec<usize>,
    rank: usize,
    degenerate: Vec<DegeneratePivot<T>>,
}

impl<T: Float> LuDecomposition<T> {
    /// Factorize `a`, using its storage as the working copy.
    pub fn factorize(mut a: Matrix<T>, policy: &PivotPolicy<T>) -> Self {
        let rows = a.rows();
        let columns = a.columns();
        let steps = rows.min(columns);

        let mut l = Matrix::zeros(rows, steps);
        let mut permutation: Vec<usize> = (0..rows).collect();
        let mut degenerate = Vec::new();
        let mut rank = 0;

        for k in 0..columns {
            if rank == rows {
                break;
            }
            let p = rank;

            // Find pivot
            let mut pivot_row = p;
            let mut max_val = a.get(p, k).abs();
            for i in (p + 1)..rows {
                let val = a.get(i, k).abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = i;
                }
            }

            if max_val.is_nan() || policy.is_degenerate(max_val) {
                log::debug!(
                    "lu: degenerate pivot {} in column {}, skipping elimination",
                    to_f64(max_val),
                    k
                );
                degenerate.push(DegeneratePivot {
                    step: k,
                    magnitude: max_val,
                });
                for i in p..rows {
                    a.set(i, k, T::zero());
                }
                continue;
            }

            if pivot_row != p {
                a.swap_rows(p, pivot_row);
                l.swap_rows(p, pivot_row);
                permutation.swap(p, pivot_row);
            }

            // Compute multipliers and eliminate
            let pivot = a.get(p, k);
            for i in (p + 1)..rows {
                let mult = a.get(i, k) / pivot;
                l.set(i, p, mult);
                a.set(i, k, T::zero());
                if mult == T::zero() {
                    continue;
                }
                for j in (k + 1)..columns {
                    let update = mult * a.get(p, j);
                    a[(i, j)] = a[(i, j)] - update;
                }
            }
            rank += 1;
        }

        for j in 0..steps {
            l.set(j, j, T::one());
        }
        let mut u = Matrix::zeros(steps, columns);
        for i in 0..steps {
            u.row_mut(i).copy_from_slice(a.row(i));
        }

        log::trace!(
            "lu: factorized {}x{} matrix, rank {}, {} degenerate pivot(s)",
            rows,
            columns,
            rank,
            degenerate.len()
        );

        Self {
            l,
            u,
            permutation,
            rank,
            degenerate,
        }
    }

    /// Number of rows of the factorized matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.l.rows()
    }

    /// Number of columns of the factorized matrix.
    #[inline]
    pub fn columns(&self) -> usize {
        self.u.columns()
    }

    /// The unit lower-triangular factor `L` (`rows x min(rows, columns)`).
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper-triangular factor `U` (`min(rows, columns) x columns`).
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Row permutation: row `i` of `L·U` corresponds to row `permutation[i]` of `A`.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// The permutation as a dense `rows x rows` matrix `P` with `P·A = L·U`.
    pub fn permutation_matrix(&self) -> Matrix<T> {
        let n = self.rows();
        let mut p = Matrix::zeros(n, n);
        for (i, &src) in self.permutation.iter().enumerate() {
            p.set(i, src, T::one());
        }
        p
    }

    /// Apply the row permutation to `a`, returning `P·A`.
    pub fn permute_rows(&self, a: &Matrix<T>) -> Result<Matrix<T>, FactorError> {
        if a.rows() != self.rows() {
            return Err(FactorError::DimensionMismatch {
                expected: self.rows(),
                got: a.rows(),
            });
        }
        let mut out = Matrix::zeros(a.rows(), a.columns());
        for (i, &src) in self.permutation.iter().enumerate() {
            out.row_mut(i).copy_from_slice(a.row(src));
        }
        Ok(out)
    }

    /// Rebuild `L·U` (which equals `P·A`).
    pub fn reconstruct(&self) -> Matrix<T> {
        let rows = self.rows();
        let columns = self.columns();
        let mut out = Matrix::zeros(rows, columns);
        for i in 0..rows {
            for (k, &l_ik) in self.l.row(i).iter().enumerate().take(i + 1) {
                if l_ik == T::zero() {
                    continue;
                }
                for (o, &u_kj) in out.row_mut(i).iter_mut().zip(self.u.row(k)) {
                    *o = *o + l_ik * u_kj;
                }
            }
        }
        out
    }

    /// Columns whose pivot was rejected during elimination, in column order.
    #[inline]
    pub fn degenerate_pivots(&self) -> &[DegeneratePivot<T>] {
        &self.degenerate
    }

    /// Whether the rank falls short of `min(rows, columns)`.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.rank < self.rows().min(self.columns())
    }

    /// Estimated rank: the number of pivots found.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Convert a rank-deficient factorization into an error.
    ///
    /// Reports the first degenerate column as [`FactorError::SingularPivot`].
    pub fn check_nonsingular(&self) -> Result<(), FactorError> {
        if !self.is_singular() {
            return Ok(());
        }
        match self.degenerate.first() {
            Some(p) => Err(FactorError::SingularPivot {
                step: p.step,
                pivot: to_f64(p.magnitude),
            }),
            None => Ok(()),
        }
    }
}
