//! High-level API for matrix factorizations.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the four `create_*`
//! functions using the default configuration, and a fluent builder for callers
//! who need a different degeneracy tolerance or symmetry check.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FactorizationBuilder`] via `Factorize::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.symmetry_check()`).
//! 3. Call `.build()` to obtain a [`Factorizer`].
//! 4. Call `.cholesky()`, `.ldlt()`, `.lu()` or `.qr()` as often as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FactorConfig, FactorExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::cholesky::CholeskyDecomposition;
pub use crate::algorithms::ldlt::LdltDecomposition;
pub use crate::algorithms::lu::LuDecomposition;
pub use crate::algorithms::pivot::{DEFAULT_TOLERANCE, DegeneratePivot};
pub use crate::algorithms::qr::QrDecomposition;
pub use crate::engine::validator::SymmetryCheck;
pub use crate::math::vector::{column, dot, element, norm, row, swap_rows};
pub use crate::primitives::errors::FactorError;
pub use crate::primitives::matrix::Matrix;

// ============================================================================
// Entry Points
// ============================================================================

/// Cholesky factorization of a symmetric positive-definite `size x size` buffer.
pub fn create_cholesky<T: Float>(
    buffer: &[T],
    size: usize,
) -> Result<CholeskyDecomposition<T>, FactorError> {
    Factorizer::default().cholesky(buffer, size)
}

/// LDLᵗ factorization of a symmetric `size x size` buffer.
pub fn create_ldlt<T: Float>(
    buffer: &[T],
    size: usize,
) -> Result<LdltDecomposition<T>, FactorError> {
    Factorizer::default().ldlt(buffer, size)
}

/// LU factorization with partial pivoting of a `rows x columns` buffer.
pub fn create_lu<T: Float>(
    buffer: &[T],
    rows: usize,
    columns: usize,
) -> Result<LuDecomposition<T>, FactorError> {
    Factorizer::default().lu(buffer, rows, columns)
}

/// Householder QR factorization of a `rows x columns` buffer.
pub fn create_qr<T: Float>(
    buffer: &[T],
    rows: usize,
    columns: usize,
) -> Result<QrDecomposition<T>, FactorError> {
    Factorizer::default().qr(buffer, rows, columns)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring factorizations.
#[derive(Debug, Clone)]
pub struct FactorizationBuilder<T: Float> {
    /// Relative degeneracy tolerance.
    pub tolerance: Option<T>,

    /// Symmetry check for Cholesky and LDLᵗ inputs.
    pub symmetry_check: Option<SymmetryCheck>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FactorizationBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FactorizationBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            symmetry_check: None,
            duplicate_param: None,
        }
    }

    /// Set the relative tolerance below which a pivot counts as zero.
    ///
    /// The absolute threshold is `tolerance * max |a_ij|`. Use `0` to treat only
    /// exact zeros as degenerate.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set how Cholesky and LDLᵗ inputs are checked for symmetry.
    pub fn symmetry_check(mut self, check: SymmetryCheck) -> Self {
        if self.symmetry_check.is_some() {
            self.duplicate_param = Some("symmetry_check");
        }
        self.symmetry_check = Some(check);
        self
    }

    /// Validate the configuration and build a [`Factorizer`].
    pub fn build(self) -> Result<Factorizer<T>, FactorError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = FactorConfig::default();
        if let Some(tol) = self.tolerance {
            Validator::validate_tolerance(tol)?;
            config.tolerance = tol;
        }
        if let Some(check) = self.symmetry_check {
            config.symmetry_check = check;
        }

        Ok(Factorizer { config })
    }
}

// ============================================================================
// Factorizer
// ============================================================================

/// A configured factorization front end.
///
/// Borrowed-buffer methods copy the input. `lu_matrix` and `qr_matrix` take ownership of
/// a [`Matrix`] and eliminate directly in its storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factorizer<T> {
    config: FactorConfig<T>,
}

impl<T: Float> Default for Factorizer<T> {
    fn default() -> Self {
        Self {
            config: FactorConfig::default(),
        }
    }
}

impl<T: Float> Factorizer<T> {
    /// The resolved relative tolerance.
    pub fn tolerance(&self) -> T {
        self.config.tolerance
    }

    /// The resolved symmetry check.
    pub fn symmetry_check(&self) -> SymmetryCheck {
        self.config.symmetry_check
    }

    /// Cholesky factorization of a `size x size` buffer.
    pub fn cholesky(
        &self,
        buffer: &[T],
        size: usize,
    ) -> Result<CholeskyDecomposition<T>, FactorError> {
        let a = FactorExecutor::prepare(buffer, size, size)?;
        FactorExecutor::cholesky(&a, &self.config)
    }

    /// LDLᵗ factorization of a `size x size` buffer.
    pub fn ldlt(&self, buffer: &[T], size: usize) -> Result<LdltDecomposition<T>, FactorError> {
        let a = FactorExecutor::prepare(buffer, size, size)?;
        FactorExecutor::ldlt(&a, &self.config)
    }

    /// LU factorization of a `rows x columns` buffer.
    pub fn lu(
        &self,
        buffer: &[T],
        rows: usize,
        columns: usize,
    ) -> Result<LuDecomposition<T>, FactorError> {
        let a = FactorExecutor::prepare(buffer, rows, columns)?;
        FactorExecutor::lu(a, &self.config)
    }

    /// QR factorization of a `rows x columns` buffer.
    pub fn qr(
        &self,
        buffer: &[T],
        rows: usize,
        columns: usize,
    ) -> Result<QrDecomposition<T>, FactorError> {
        let a = FactorExecutor::prepare(buffer, rows, columns)?;
        FactorExecutor::qr(a, &self.config)
    }

    /// Cholesky factorization of a matrix; the input is only read.
    pub fn cholesky_matrix(
        &self,
        matrix: &Matrix<T>,
    ) -> Result<CholeskyDecomposition<T>, FactorError> {
        FactorExecutor::cholesky(matrix, &self.config)
    }

    /// LDLᵗ factorization of a matrix; the input is only read.
    pub fn ldlt_matrix(&self, matrix: &Matrix<T>) -> Result<LdltDecomposition<T>, FactorError> {
        FactorExecutor::ldlt(matrix, &self.config)
    }

    /// LU factorization that takes ownership of `matrix` as its working copy.
    pub fn lu_matrix(&self, matrix: Matrix<T>) -> Result<LuDecomposition<T>, FactorError> {
        FactorExecutor::lu(matrix, &self.config)
    }

    /// QR factorization that takes ownership of `matrix` as its working copy.
    pub fn qr_matrix(&self, matrix: Matrix<T>) -> Result<QrDecomposition<T>, FactorError> {
        FactorExecutor::qr(matrix, &self.config)
    }
}
