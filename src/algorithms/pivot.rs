//! Degeneracy threshold shared by the factorizations.
//!
//! ## Purpose
//!
//! Every factorization has to decide when a pivot (or a Cholesky diagonal term,
//! or a Householder column) is too small to divide by. `PivotPolicy` turns a
//! relative tolerance into an absolute threshold scaled to the input.
//!
//! ## Key concepts
//!
//! * `threshold = tolerance * max_abs(A)`.
//! * A pivot `p` is degenerate when `|p| <= threshold`. With a tolerance of zero
//!   only exact zeros are degenerate.
//!
//! ## Invariants
//!
//! * `threshold >= 0` and finite for any finite input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix;

/// Default relative tolerance for treating a pivot as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

// ============================================================================
// PivotPolicy
// ============================================================================

/// Absolute degeneracy threshold for a single factorization call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotPolicy<T> {
    threshold: T,
}

impl<T: Float> PivotPolicy<T> {
    /// Scale `tolerance` by the largest absolute entry of `matrix`.
    pub fn for_matrix(matrix: &Matrix<T>, tolerance: T) -> Self {
        Self {
            threshold: tolerance * matrix.max_abs(),
        }
    }

    /// Use `threshold` as-is.
    pub fn absolute(threshold: T) -> Self {
        Self { threshold }
    }

    /// Only exact zeros are degenerate.
    pub fn exact() -> Self {
        Self {
            threshold: T::zero(),
        }
    }

    /// The absolute threshold.
    #[inline]
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Whether `pivot` is too small to divide by.
    #[inline]
    pub fn is_degenerate(&self, pivot: T) -> bool {
        pivot.abs() <= self.threshold
    }
}

impl<T: Float> Default for PivotPolicy<T> {
    fn default() -> Self {
        Self::exact()
    }
}

// ============================================================================
// DegeneratePivot
// ============================================================================

/// A pivot rejected by the policy during LU or QR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegeneratePivot<T> {
    /// Column at which the pivot was rejected.
    pub step: usize,
    /// Magnitude of the rejected pivot.
    pub magnitude: T,
}

/// Lossy conversion used when pivots are reported in errors.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
