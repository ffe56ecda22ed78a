//! Execution engine for factorization calls.
//!
//! ## Purpose
//!
//! This module runs a single factorization end to end: validate the input,
//! derive the degeneracy threshold from the input's scale, check symmetry where
//! required, and hand the working matrix to the algorithm.
//!
//! ## Design notes
//!
//! * **Ownership**: Borrowed buffers are copied once into a `Matrix`; owned
//!   matrices are moved straight into LU/QR and used as working storage.
//! * **Stateless**: The executor keeps no state between calls, so concurrent calls
//!   on independent inputs need no synchronization.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Pipeline**: shape → finiteness → threshold → symmetry → factorize.
//!
//! ## Invariants
//!
//! * No arithmetic on the input happens before shape and finiteness checks pass.
//! * The caller's buffer is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not implement the factorizations (see `algorithms`).
//! * This module does not solve systems or compute determinants.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::cholesky::CholeskyDecomposition;
use crate::algorithms::ldlt::LdltDecomposition;
use crate::algorithms::lu::LuDecomposition;
use crate::algorithms::pivot::{DEFAULT_TOLERANCE, PivotPolicy};
use crate::algorithms::qr::QrDecomposition;
use crate::engine::validator::{SymmetryCheck, Validator};
use crate::primitives::errors::FactorError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for factorization calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorConfig<T> {
    /// Relative tolerance for degenerate pivots (scaled by `max |a_ij|`).
    pub tolerance: T,

    /// Symmetry check applied to Cholesky and LDLᵗ inputs.
    pub symmetry_check: SymmetryCheck,
}

impl<T: Float> Default for FactorConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
            symmetry_check: SymmetryCheck::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs validated factorizations under a [`FactorConfig`].
pub struct FactorExecutor;

impl FactorExecutor {
    /// Copy a borrowed row-major buffer into a validated working matrix.
    pub fn prepare<T: Float>(
        buffer: &[T],
        rows: usize,
        columns: usize,
    ) -> Result<Matrix<T>, FactorError> {
        Validator::validate_dimensions(buffer.len(), rows, columns)?;
        Matrix::from_slice(buffer, rows, columns)
    }

    /// Cholesky factorization of `matrix`.
    pub fn cholesky<T: Float>(
        matrix: &Matrix<T>,
        config: &FactorConfig<T>,
    ) -> Result<CholeskyDecomposition<T>, FactorError> {
        let policy = Self::symmetric_policy(matrix, config)?;
        CholeskyDecomposition::factorize(matrix, &policy)
    }

    /// LDLᵗ factorization of `matrix`.
    pub fn ldlt<T: Float>(
        matrix: &Matrix<T>,
        config: &FactorConfig<T>,
    ) -> Result<LdltDecomposition<T>, FactorError> {
        let policy = Self::symmetric_policy(matrix, config)?;
        LdltDecomposition::factorize(matrix, &policy)
    }

    /// LU factorization, consuming `matrix` as the working copy.
    pub fn lu<T: Float>(
        matrix: Matrix<T>,
        config: &FactorConfig<T>,
    ) -> Result<LuDecomposition<T>, FactorError> {
        let policy = Self::general_policy(&matrix, config)?;
        Ok(LuDecomposition::factorize(matrix, &policy))
    }

    /// QR factorization, consuming `matrix` as the working copy.
    pub fn qr<T: Float>(
        matrix: Matrix<T>,
        config: &FactorConfig<T>,
    ) -> Result<QrDecomposition<T>, FactorError> {
        let policy = Self::general_policy(&matrix, config)?;
        Ok(QrDecomposition::factorize(matrix, &policy))
    }

    // ========================================================================
    // Shared Steps
    // ========================================================================

    fn general_policy<T: Float>(
        matrix: &Matrix<T>,
        config: &FactorConfig<T>,
    ) -> Result<PivotPolicy<T>, FactorError> {
        Validator::validate_dimensions(matrix.as_slice().len(), matrix.rows(), matrix.columns())
            .inspect_err(|e| log::debug!("rejected input: {}", e))?;
        Validator::validate_finite(matrix).inspect_err(|e| log::debug!("rejected input: {}", e))?;
        Ok(PivotPolicy::for_matrix(matrix, config.tolerance))
    }

    fn symmetric_policy<T: Float>(
        matrix: &Matrix<T>,
        config: &FactorConfig<T>,
    ) -> Result<PivotPolicy<T>, FactorError> {
        Validator::validate_square(matrix.rows(), matrix.columns())
            .inspect_err(|e| log::debug!("rejected input: {}", e))?;
        let policy = Self::general_policy(matrix, config)?;
        Validator::validate_symmetry(matrix, config.symmetry_check, policy.threshold())
            .inspect_err(|e| log::debug!("rejected input: {}", e))?;
        Ok(policy)
    }
}
