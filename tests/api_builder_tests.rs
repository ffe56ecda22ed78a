//! Tests for the high-level API: entry points and the fluent builder.
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - Defaults, duplicates and invalid parameters
//! 2. **Symmetry Checks** - Exact, Tolerant and Skip modes
//! 3. **Owned Matrices** - `*_matrix` entry points

use linalg_basics::prelude::*;

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test the defaults resolved by an empty builder.
#[test]
fn test_builder_defaults() {
    let factorizer: Factorizer<f64> = Factorize::new().build().unwrap();
    assert_eq!(factorizer.tolerance(), DEFAULT_TOLERANCE);
    assert_eq!(factorizer.symmetry_check(), SymmetryCheck::Tolerant);
    assert_eq!(factorizer, Factorizer::default());
}

/// Test that configured values are carried into the factorizer.
#[test]
fn test_builder_sets_parameters() {
    let factorizer = Factorize::<f64>::new()
        .tolerance(1e-8)
        .symmetry_check(SymmetryCheck::Skip)
        .build()
        .unwrap();
    assert_eq!(factorizer.tolerance(), 1e-8);
    assert_eq!(factorizer.symmetry_check(), SymmetryCheck::Skip);
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Factorize::<f64>::new()
        .tolerance(1e-8)
        .tolerance(1e-6)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FactorError::DuplicateParameter {
            parameter: "tolerance"
        }
    );

    let err = Factorize::<f64>::new()
        .symmetry_check(SymmetryCheck::Exact)
        .symmetry_check(SymmetryCheck::Skip)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FactorError::DuplicateParameter {
            parameter: "symmetry_check"
        }
    );
}

/// Test that negative and non-finite tolerances are rejected.
#[test]
fn test_builder_invalid_tolerance() {
    let err = Factorize::new().tolerance(-1e-3).build().unwrap_err();
    assert_eq!(err, FactorError::InvalidTolerance(-1e-3));

    let err = Factorize::new().tolerance(f64::INFINITY).build().unwrap_err();
    assert_eq!(err, FactorError::InvalidTolerance(f64::INFINITY));

    let err = Factorize::new().tolerance(f64::NAN).build().unwrap_err();
    assert!(matches!(err, FactorError::InvalidTolerance(v) if v.is_nan()));
}

/// Test that a larger tolerance turns a small pivot into a failure.
#[test]
fn test_builder_tolerance_changes_outcome() {
    // D1 = 1e-6 after elimination
    let a = [1.0, 1.0, 1.0, 1.0 + 1e-6];

    assert!(create_ldlt(&a, 2).is_ok());

    let loose = Factorize::new().tolerance(1e-3).build().unwrap();
    let err = loose.ldlt(&a, 2).unwrap_err();
    assert!(matches!(err, FactorError::SingularPivot { step: 1, .. }));

    let lu = loose.lu(&a, 2, 2).unwrap();
    assert!(lu.is_singular());
}

// ============================================================================
// Symmetry Check Tests
// ============================================================================

/// Test the three symmetry modes on a slightly asymmetric matrix.
#[test]
fn test_symmetry_modes() {
    // Off by 1e-14, well inside the tolerant threshold of 1e-12 * 4
    let a = [4.0, 1.0, 1.0 + 1e-14, 3.0];

    let exact = Factorize::new()
        .symmetry_check(SymmetryCheck::Exact)
        .build()
        .unwrap();
    assert_eq!(
        exact.cholesky(&a, 2).unwrap_err(),
        FactorError::NotSymmetric { row: 0, column: 1 }
    );

    assert!(create_cholesky(&a, 2).is_ok());

    // Skip trusts the caller and reads only the lower triangle
    let skip = Factorize::new()
        .symmetry_check(SymmetryCheck::Skip)
        .build()
        .unwrap();
    let b = [4.0, 100.0, 2.0, 5.0];
    let chol = skip.cholesky(&b, 2).unwrap();
    assert_eq!(chol.l().as_slice(), &[2.0, 0.0, 1.0, 2.0]);
}

// ============================================================================
// Owned Matrix Tests
// ============================================================================

/// Test the `*_matrix` entry points against the buffer entry points.
#[test]
fn test_matrix_entry_points() {
    let factorizer = Factorizer::default();
    let data = [4.0, 12.0, -16.0, 12.0, 37.0, -43.0, -16.0, -43.0, 98.0];
    let a = Matrix::from_slice(&data, 3, 3).unwrap();

    assert_eq!(
        factorizer.cholesky_matrix(&a).unwrap(),
        create_cholesky(&data, 3).unwrap()
    );
    assert_eq!(
        factorizer.ldlt_matrix(&a).unwrap(),
        create_ldlt(&data, 3).unwrap()
    );
    assert_eq!(
        factorizer.lu_matrix(a.clone()).unwrap(),
        create_lu(&data, 3, 3).unwrap()
    );
    assert_eq!(
        factorizer.qr_matrix(a).unwrap(),
        create_qr(&data, 3, 3).unwrap()
    );
}

/// Test that owned matrices are still validated for finiteness.
#[test]
fn test_matrix_entry_points_validate() {
    let mut a = Matrix::zeros(2, 2);
    a.set(1, 1, f64::NAN);

    let err = Factorizer::default().qr_matrix(a).unwrap_err();
    assert!(matches!(err, FactorError::InvalidNumericValue(_)));
}
