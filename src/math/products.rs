//! Matrix products, transposes and norms.
//!
//! ## Purpose
//!
//! These are the whole-matrix operations needed to rebuild an input from its
//! factors and to compare the result against the original: products,
//! transposes, traces and a few norms.
//!
//! ## Design notes
//!
//! * **Inherent methods**: Implemented as an `impl` block on `Matrix` so callers
//!   write `l.matmul(&l.transpose())`.
//! * **Row-major loops**: The product uses the `i-k-j` loop order so the inner loop
//!   walks both operands contiguously.
//!
//! ## Invariants
//!
//! * `matmul` never reads past either operand; shape disagreements are errors.
//!
//! ## Non-goals
//!
//! * Blocked or parallel products.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::vector::dot;
use crate::primitives::errors::FactorError;
use crate::primitives::matrix::Matrix;

impl<T: Float> Matrix<T> {
    /// Return the `columns x rows` transpose.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, columns) = (self.rows(), self.columns());
        let mut out = Matrix::zeros(columns, rows);
        for i in 0..rows {
            for (j, &v) in self.row(i).iter().enumerate() {
                out[(j, i)] = v;
            }
        }
        out
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, FactorError> {
        if self.columns() != other.rows() {
            return Err(FactorError::DimensionMismatch {
                expected: self.columns(),
                got: other.rows(),
            });
        }

        let n = other.columns();
        let mut out = Matrix::zeros(self.rows(), n);
        for i in 0..self.rows() {
            for (k, &a_ik) in self.row(i).iter().enumerate() {
                if a_ik == T::zero() {
                    continue;
                }
                let b_row = other.row(k);
                for (o, &b) in out.row_mut(i).iter_mut().zip(b_row) {
                    *o = *o + a_ik * b;
                }
            }
        }
        Ok(out)
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> T {
        let n = self.rows().min(self.columns());
        (0..n).fold(T::zero(), |acc, i| acc + self.get(i, i))
    }

    /// Frobenius norm `sqrt(Σ a_ij²)`.
    pub fn frobenius_norm(&self) -> T {
        dot(self.as_slice().iter().copied(), self.as_slice().iter().copied()).sqrt()
    }

    /// Induced 1-norm: the largest absolute column sum.
    pub fn one_norm(&self) -> T {
        (0..self.columns())
            .map(|j| self.column(j).fold(T::zero(), |acc, v| acc + v.abs()))
            .fold(T::zero(), T::max)
    }

    /// Largest absolute entry.
    pub fn max_abs(&self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &v| acc.max(v.abs()))
    }

    /// Largest absolute entry-wise difference from `other`.
    ///
    /// Returns `None` when the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix<T>) -> Option<T> {
        if self.rows() != other.rows() || self.columns() != other.columns() {
            return None;
        }
        Some(
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs())),
        )
    }

    /// Whether every entry above the diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.rows()).all(|i| self.row(i).iter().skip(i + 1).all(|&v| v == T::zero()))
    }

    /// Whether every entry below the diagonal is zero.
    pub fn is_upper_triangular(&self) -> bool {
        (0..self.rows()).all(|i| {
            self.row(i)
                .iter()
                .take(i.min(self.columns()))
                .all(|&v| v == T::zero())
        })
    }
}
