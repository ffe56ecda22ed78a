//! Input validation for factorization inputs and configuration.
//!
//! ## Purpose
//!
//! This module provides the checks that run before any factorization
//! arithmetic: buffer shape, squareness, finiteness, symmetry, and builder
//! parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive (shape, then
//!   finiteness, then symmetry).
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective preconditions.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not repair inputs (e.g. symmetrize a matrix).
//! * This module does not perform the factorization itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FactorError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Symmetry Check
// ============================================================================

/// How Cholesky and LDLᵗ inputs are checked for symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryCheck {
    /// Require `A[i][j] == A[j][i]` exactly.
    Exact,

    /// Require `|A[i][j] - A[j][i]|` to be within the degeneracy threshold.
    #[default]
    Tolerant,

    /// Trust the caller; only the lower triangle is read.
    Skip,
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for factorization inputs and configuration.
///
/// All methods return `Result<(), FactorError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that a buffer of `len` elements holds a `rows x columns` matrix.
    pub fn validate_dimensions(len: usize, rows: usize, columns: usize) -> Result<(), FactorError> {
        // Check 1: Non-empty shape
        if rows == 0 || columns == 0 {
            return Err(FactorError::EmptyInput);
        }

        // Check 2: Buffer length matches the declared shape
        let expected = rows.saturating_mul(columns);
        if len != expected {
            return Err(FactorError::DimensionMismatch { expected, got: len });
        }

        Ok(())
    }

    /// Validate that the declared shape is square.
    pub fn validate_square(rows: usize, columns: usize) -> Result<(), FactorError> {
        if rows != columns {
            return Err(FactorError::NotSquare { rows, columns });
        }
        Ok(())
    }

    // ========================================================================
    // Value Validation
    // ========================================================================

    /// Validate that every entry of `matrix` is finite.
    pub fn validate_finite<T: Float>(matrix: &Matrix<T>) -> Result<(), FactorError> {
        let columns = matrix.columns();
        for (idx, &val) in matrix.as_slice().iter().enumerate() {
            if !val.is_finite() {
                return Err(FactorError::InvalidNumericValue(format!(
                    "A[{}][{}]={}",
                    idx / columns,
                    idx % columns,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that a square `matrix` is symmetric under `check`.
    ///
    /// `threshold` is the absolute tolerance used by [`SymmetryCheck::Tolerant`].
    pub fn validate_symmetry<T: Float>(
        matrix: &Matrix<T>,
        check: SymmetryCheck,
        threshold: T,
    ) -> Result<(), FactorError> {
        let n = matrix.rows();
        match check {
            SymmetryCheck::Skip => Ok(()),
            SymmetryCheck::Exact | SymmetryCheck::Tolerant => {
                let tol = if check == SymmetryCheck::Exact {
                    T::zero()
                } else {
                    threshold
                };
                for i in 0..n {
                    for j in (i + 1)..n {
                        let diff = (matrix.get(i, j) - matrix.get(j, i)).abs();
                        if diff > tol {
                            return Err(FactorError::NotSymmetric { row: i, column: j });
                        }
                    }
                }
                Ok(())
            }
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the relative degeneracy tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), FactorError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(FactorError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FactorError> {
        if let Some(param) = duplicate_param {
            return Err(FactorError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
