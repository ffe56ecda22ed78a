//! Tests for matrix products, transposes and norms.

use approx::assert_relative_eq;
use linalg_basics::prelude::*;

fn m(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

// ============================================================================
// Product Tests
// ============================================================================

#[test]
fn test_transpose() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = a.transpose();

    assert_eq!(t.rows(), 3);
    assert_eq!(t.columns(), 2);
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(t.transpose(), a);
}

#[test]
fn test_matmul() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
    let b = m(&[&[7.0, 8.0, 9.0], &[10.0, 11.0, 12.0]]);
    let c = a.matmul(&b).unwrap();

    assert_eq!(c.rows(), 3);
    assert_eq!(c.columns(), 3);
    assert_eq!(c.row(0), &[27.0, 30.0, 33.0]);
    assert_eq!(c.row(1), &[61.0, 68.0, 75.0]);
    assert_eq!(c.row(2), &[95.0, 106.0, 117.0]);
}

#[test]
fn test_matmul_identity() {
    let a = m(&[&[1.5, -2.0], &[0.25, 4.0]]);
    let eye = Matrix::identity(2);
    assert_eq!(a.matmul(&eye).unwrap(), a);
    assert_eq!(eye.matmul(&a).unwrap(), a);
}

#[test]
fn test_matmul_shape_mismatch() {
    let a = m(&[&[1.0, 2.0]]);
    let err = a.matmul(&a).unwrap_err();
    assert_eq!(
        err,
        FactorError::DimensionMismatch {
            expected: 2,
            got: 1
        }
    );
}

// ============================================================================
// Norm Tests
// ============================================================================

#[test]
fn test_trace() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(a.trace(), 6.0);
}

#[test]
fn test_norms() {
    let a = m(&[&[1.0, -2.0], &[-3.0, 4.0]]);

    assert_relative_eq!(a.frobenius_norm(), 30.0f64.sqrt());
    // Column sums: 4 and 6
    assert_eq!(a.one_norm(), 6.0);
    assert_eq!(a.max_abs(), 4.0);
}

#[test]
fn test_max_abs_diff() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[1.0, 2.5], &[3.0, 3.0]]);
    assert_eq!(a.max_abs_diff(&b), Some(1.0));
    assert_eq!(a.max_abs_diff(&a), Some(0.0));

    let c = m(&[&[1.0, 2.0]]);
    assert_eq!(a.max_abs_diff(&c), None);
}

// ============================================================================
// Shape Predicate Tests
// ============================================================================

#[test]
fn test_triangular_predicates() {
    let lower = m(&[&[1.0, 0.0], &[2.0, 3.0]]);
    let upper = m(&[&[1.0, 2.0], &[0.0, 3.0]]);

    assert!(lower.is_lower_triangular());
    assert!(!lower.is_upper_triangular());
    assert!(upper.is_upper_triangular());
    assert!(!upper.is_lower_triangular());

    // Trapezoidal shapes
    let tall = m(&[&[1.0, 2.0], &[0.0, 3.0], &[0.0, 0.0]]);
    assert!(tall.is_upper_triangular());
    let wide = m(&[&[1.0, 0.0, 0.0], &[2.0, 3.0, 0.0]]);
    assert!(wide.is_lower_triangular());
}
