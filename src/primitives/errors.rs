//! Error types for matrix factorizations.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every factorization
//! entry point. Shape problems, bad input values, and numerical breakdowns are
//! all reported through `FactorError`.
//!
//! ## Design notes
//!
//! * **Typed failures**: Numerical failures carry the failing step and the pivot
//!   value so callers can diagnose them.
//! * **no_std friendly**: `Display` is implemented by hand; `std::error::Error`
//!   is only implemented with the `std` feature.
//! * **Comparable**: Derives `Clone` and `PartialEq` so tests can match on errors.
//!
//! ## Invariants
//!
//! * Pivot values are stored as `f64` regardless of the scalar type.
//!
//! ## Non-goals
//!
//! * This module does not decide when an error is raised (see `engine::validator`
//!   and the individual algorithms).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// FactorError
// ============================================================================

/// Errors raised while validating or factorizing a matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorError {
    /// The matrix has zero rows or zero columns.
    EmptyInput,

    /// A buffer or operand does not have the expected number of elements.
    DimensionMismatch {
        /// Number of elements required by the declared shape.
        expected: usize,
        /// Number of elements actually supplied.
        got: usize,
    },

    /// The algorithm requires a square matrix.
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        columns: usize,
    },

    /// The input contains NaN or infinite entries.
    InvalidNumericValue(String),

    /// The input is not symmetric.
    NotSymmetric {
        /// Row of the first offending entry.
        row: usize,
        /// Column of the first offending entry.
        column: usize,
    },

    /// A Cholesky diagonal term was not strictly positive.
    NotPositiveDefinite {
        /// Elimination step (diagonal index) where the failure occurred.
        step: usize,
        /// Diagonal term computed before the square root.
        pivot: f64,
    },

    /// A pivot was zero (or below the degeneracy threshold).
    SingularPivot {
        /// Elimination step where the failure occurred.
        step: usize,
        /// Offending pivot value.
        pivot: f64,
    },

    /// The degeneracy tolerance is negative or not finite.
    InvalidTolerance(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorError::EmptyInput => write!(f, "Input matrix is empty"),
            FactorError::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: expected {} elements, got {}",
                expected, got
            ),
            FactorError::NotSquare { rows, columns } => {
                write!(f, "Matrix must be square: got {}x{}", rows, columns)
            }
            FactorError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            FactorError::NotSymmetric { row, column } => write!(
                f,
                "Matrix is not symmetric: A[{}][{}] != A[{}][{}]",
                row, column, column, row
            ),
            FactorError::NotPositiveDefinite { step, pivot } => write!(
                f,
                "Matrix is not positive definite: diagonal term {} at step {}",
                pivot, step
            ),
            FactorError::SingularPivot { step, pivot } => {
                write!(f, "Singular pivot: {} at step {}", pivot, step)
            }
            FactorError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
            FactorError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FactorError {}
