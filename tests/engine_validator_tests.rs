#![cfg(feature = "dev")]
//! Tests for input validation and the execution pipeline.
//!
//! ## Test Organization
//!
//! 1. **Shape Validation** - Buffer length, empty shapes, squareness
//! 2. **Value Validation** - Finiteness and symmetry
//! 3. **Parameter Validation** - Tolerance and duplicates
//! 4. **Executor** - Validation order and threshold scaling

use approx::assert_relative_eq;
use linalg_basics::internals::algorithms::pivot::{DEFAULT_TOLERANCE, PivotPolicy};
use linalg_basics::internals::engine::executor::{FactorConfig, FactorExecutor};
use linalg_basics::internals::engine::validator::{SymmetryCheck, Validator};
use linalg_basics::internals::primitives::errors::FactorError;
use linalg_basics::internals::primitives::matrix::Matrix;

// ============================================================================
// Shape Validation Tests
// ============================================================================

#[test]
fn test_validate_dimensions() {
    assert!(Validator::validate_dimensions(6, 2, 3).is_ok());
    assert_eq!(
        Validator::validate_dimensions(5, 2, 3),
        Err(FactorError::DimensionMismatch {
            expected: 6,
            got: 5
        })
    );
    assert_eq!(
        Validator::validate_dimensions(0, 0, 0),
        Err(FactorError::EmptyInput)
    );
}

#[test]
fn test_validate_square() {
    assert!(Validator::validate_square(3, 3).is_ok());
    assert_eq!(
        Validator::validate_square(3, 2),
        Err(FactorError::NotSquare {
            rows: 3,
            columns: 2
        })
    );
}

// ============================================================================
// Value Validation Tests
// ============================================================================

#[test]
fn test_validate_finite_reports_position() {
    let a = Matrix::from_slice(&[1.0, 2.0, 3.0, f64::NAN], 2, 2).unwrap();
    assert_eq!(
        Validator::validate_finite(&a),
        Err(FactorError::InvalidNumericValue("A[1][1]=NaN".to_string()))
    );

    let b = Matrix::from_slice(&[1.0, f64::NEG_INFINITY, 3.0], 1, 3).unwrap();
    assert_eq!(
        Validator::validate_finite(&b),
        Err(FactorError::InvalidNumericValue("A[0][1]=-inf".to_string()))
    );
}

#[test]
fn test_validate_symmetry_modes() {
    let a = Matrix::from_slice(&[1.0, 2.0, 2.0 + 1e-9, 1.0], 2, 2).unwrap();

    assert!(Validator::validate_symmetry(&a, SymmetryCheck::Skip, 0.0).is_ok());
    assert!(Validator::validate_symmetry(&a, SymmetryCheck::Tolerant, 1e-6).is_ok());
    assert_eq!(
        Validator::validate_symmetry(&a, SymmetryCheck::Tolerant, 1e-12),
        Err(FactorError::NotSymmetric { row: 0, column: 1 })
    );
    // Exact ignores the threshold
    assert!(Validator::validate_symmetry(&a, SymmetryCheck::Exact, 1e-6).is_err());
}

#[test]
fn test_validate_symmetry_reports_first_pair() {
    let a = Matrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 5.0], [0.0, 4.0, 1.0]]).unwrap();
    assert_eq!(
        Validator::validate_symmetry(&a, SymmetryCheck::Exact, 0.0),
        Err(FactorError::NotSymmetric { row: 1, column: 2 })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(0.0).is_ok());
    assert!(Validator::validate_tolerance(1e-3).is_ok());
    assert!(Validator::validate_tolerance(-0.1).is_err());
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("tolerance")),
        Err(FactorError::DuplicateParameter {
            parameter: "tolerance"
        })
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

#[test]
fn test_executor_prepare() {
    let m = FactorExecutor::prepare(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

    assert!(FactorExecutor::prepare(&[1.0, 2.0], 2, 2).is_err());
}

#[test]
fn test_executor_checks_square_before_values() {
    let m = Matrix::from_slice(&[f64::NAN, 0.0], 1, 2).unwrap();
    let config = FactorConfig::default();
    assert_eq!(
        FactorExecutor::cholesky(&m, &config).unwrap_err(),
        FactorError::NotSquare {
            rows: 1,
            columns: 2
        }
    );
}

#[test]
fn test_executor_default_config() {
    let config: FactorConfig<f64> = FactorConfig::default();
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(config.symmetry_check, SymmetryCheck::Tolerant);
}

// ============================================================================
// Pivot Policy Tests
// ============================================================================

#[test]
fn test_pivot_policy_scales_with_input() {
    let a = Matrix::from_slice(&[1.0, -200.0, 3.0, 4.0], 2, 2).unwrap();
    let policy = PivotPolicy::for_matrix(&a, 1e-3);
    assert_relative_eq!(policy.threshold(), 0.2, epsilon = 1e-15);
    assert!(policy.is_degenerate(-0.19));
    assert!(!policy.is_degenerate(0.25));
}

#[test]
fn test_pivot_policy_exact() {
    let policy: PivotPolicy<f64> = PivotPolicy::default();
    assert_eq!(policy, PivotPolicy::exact());
    assert!(policy.is_degenerate(0.0));
    assert!(policy.is_degenerate(-0.0));
    assert!(!policy.is_degenerate(f64::MIN_POSITIVE));

    let absolute = PivotPolicy::absolute(0.5);
    assert!(absolute.is_degenerate(0.5));
    assert!(!absolute.is_degenerate(0.51));
}
