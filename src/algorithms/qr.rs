//! QR factorization by Householder reflections.
//!
//! ## Purpose
//!
//! Computes `A = Q·R` for a general `rows x columns` matrix, with `Q` square
//! (`rows x rows`) and orthogonal and `R` (`rows x columns`) upper-triangular, or
//! upper-trapezoidal when `columns < rows`.
//!
//! ## Design notes
//!
//! * **Reflector sign**: For `x = R[p.., k]` the new diagonal entry is
//!   `α = -sign(x₀)·‖x‖`, so `x₀ - α` never cancels; `sign(0)` is taken as `+1`.
//! * **Scaled reflector**: The reflector is normalized to `v₀ = 1`, with
//!   `v_i = x_i / (x₀ - α)` and `τ = (α - x₀) / α`, and norms are accumulated
//!   with the scaled `norm`. No intermediate is squared unscaled, so entries near
//!   the ends of the floating-point range factorize like any others.
//! * **Accumulated Q**: `Q` starts as the identity and is right-multiplied by each
//!   reflector, so it is formed explicitly rather than stored as reflectors.
//! * **Row-major updates**: `vᵗ·R` is accumulated row by row into a projection
//!   buffer before `R` is updated, keeping the inner loops contiguous.
//!
//! ## Key concepts
//!
//! * **Echelon progress**: Column `k` is reduced against the current pivot row
//!   `p`, which only advances when column `k` yields a pivot. A degenerate column
//!   therefore does not consume a row, and `rank()` counts the pivots found.
//! * **Identity reflector**: When the part of column `k` below row `p` is already
//!   (numerically) zero the reflection is skipped.
//! * **Rank deficiency**: When the whole remaining column is numerically zero the
//!   column is recorded as rank deficient and zeroed.
//!
//! ## Invariants
//!
//! * Entries of `R` below the diagonal are exactly zero.
//! * `Qᵗ·Q = I` up to rounding.
//! * `rank() + rank_deficient_columns().len() <= columns`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pivot::{DegeneratePivot, PivotPolicy, to_f64};
use crate::math::vector::{dot, norm};
use crate::primitives::buffer::HouseholderBuffer;
use crate::primitives::matrix::Matrix;

/// Result of a QR factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition<T> {
    q: Matrix<T>,
    r: Matrix<T>,
    rank: usize,
    rank_deficient: Vec<DegeneratePivot<T>>,
}

impl<T: Float> QrDecomposition<T> {
    /// Factorize `a`, using its storage as the working copy of `R`.
    pub fn factorize(a: Matrix<T>, policy: &PivotPolicy<T>) -> Self {
        let rows = a.rows();
        let columns = a.columns();

        let mut r = a;
        let mut q = Matrix::identity(rows);
        let mut buffer = HouseholderBuffer::new(rows, columns);
        let mut rank_deficient = Vec::new();
        let mut rank = 0;

        for k in 0..columns {
            if rank == rows {
                break;
            }
            let p = rank;

            let col_norm = norm(r.column(k).skip(p));
            if col_norm.is_nan() || policy.is_degenerate(col_norm) {
                log::debug!(
                    "qr: column {} has norm {}, marking rank deficient",
                    k,
                    to_f64(col_norm)
                );
                rank_deficient.push(DegeneratePivot {
                    step: k,
                    magnitude: col_norm,
                });
                for i in p..rows {
                    r.set(i, k, T::zero());
                }
                continue;
            }

            // Identity reflector when nothing below row p needs eliminating
            let sub_norm = norm(r.column(k).skip(p + 1));
            if !policy.is_degenerate(sub_norm) {
                let x0 = r.get(p, k);
                let sign = if x0 < T::zero() { -T::one() } else { T::one() };
                let alpha = -sign * col_norm;
                let denom = x0 - alpha;
                let tau = (alpha - x0) / alpha;

                buffer.clear();
                buffer.reflector.push(T::one());
                buffer
                    .reflector
                    .extend((p + 1..rows).map(|i| r.get(i, k) / denom));

                apply_left(&mut r, p, k, &mut buffer, tau);
                apply_right(&mut q, p, &buffer.reflector, tau);
                r.set(p, k, alpha);
            }

            for i in (p + 1)..rows {
                r.set(i, k, T::zero());
            }
            rank += 1;
        }

        log::trace!(
            "qr: factorized {}x{} matrix, rank {}, {} rank-deficient column(s)",
            rows,
            columns,
            rank,
            rank_deficient.len()
        );

        Self {
            q,
            r,
            rank,
            rank_deficient,
        }
    }

    /// Number of rows of the factorized matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.r.rows()
    }

    /// Number of columns of the factorized matrix.
    #[inline]
    pub fn columns(&self) -> usize {
        self.r.columns()
    }

    /// The orthogonal factor `Q` (`rows x rows`).
    #[inline]
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The upper-triangular factor `R` (`rows x columns`).
    #[inline]
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Rebuild `Q·R`.
    pub fn reconstruct(&self) -> Matrix<T> {
        let rows = self.rows();
        let columns = self.columns();
        let mut out = Matrix::zeros(rows, columns);
        for i in 0..rows {
            for (k, &q_ik) in self.q.row(i).iter().enumerate() {
                if q_ik == T::zero() {
                    continue;
                }
                // Rows of R past min(rows, columns) are zero.
                if k >= columns {
                    break;
                }
                for (o, &r_kj) in out.row_mut(i).iter_mut().zip(self.r.row(k)) {
                    *o = *o + q_ik * r_kj;
                }
            }
        }
        out
    }

    /// Columns whose remaining norm was degenerate, in column order.
    #[inline]
    pub fn rank_deficient_columns(&self) -> &[DegeneratePivot<T>] {
        &self.rank_deficient
    }

    /// Estimated rank: the number of columns that produced a pivot.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Whether the rank equals `min(rows, columns)`.
    #[inline]
    pub fn is_full_rank(&self) -> bool {
        self.rank == self.rows().min(self.columns())
    }
}

/// Apply `H = I - τ·v·vᵗ` from the left to rows `p..` and columns `k+1..` of `r`.
fn apply_left<T: Float>(
    r: &mut Matrix<T>,
    p: usize,
    k: usize,
    buffer: &mut HouseholderBuffer<T>,
    tau: T,
) {
    let rows = r.rows();
    let columns = r.columns();
    if k + 1 >= columns {
        return;
    }

    let HouseholderBuffer {
        reflector,
        projections,
    } = buffer;
    projections.reset(columns - k - 1, T::zero());

    for (offset, &v_i) in reflector.iter().enumerate() {
        let row = &r.row(p + offset)[k + 1..];
        for (acc, &r_ij) in projections.iter_mut().zip(row) {
            *acc = *acc + v_i * r_ij;
        }
    }

    for i in p..rows {
        let scale = tau * reflector[i - p];
        if scale == T::zero() {
            continue;
        }
        let row = &mut r.row_mut(i)[k + 1..];
        for (r_ij, &proj) in row.iter_mut().zip(projections.iter()) {
            *r_ij = *r_ij - scale * proj;
        }
    }
}

/// Apply `H` from the right to columns `p..` of `q`.
fn apply_right<T: Float>(q: &mut Matrix<T>, p: usize, reflector: &[T], tau: T) {
    for i in 0..q.rows() {
        let row = &mut q.row_mut(i)[p..];
        let s = tau * dot(row.iter().copied(), reflector.iter().copied());
        if s == T::zero() {
            continue;
        }
        for (q_ij, &v_j) in row.iter_mut().zip(reflector) {
            *q_ij = *q_ij - s * v_j;
        }
    }
}
