use linalg_basics::prelude::*;

#[test]
fn test_factor_error_display() {
    // EmptyInput
    let err = FactorError::EmptyInput;
    assert_eq!(format!("{}", err), "Input matrix is empty");

    // DimensionMismatch
    let err = FactorError::DimensionMismatch {
        expected: 9,
        got: 8,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: expected 9 elements, got 8"
    );

    // NotSquare
    let err = FactorError::NotSquare {
        rows: 2,
        columns: 3,
    };
    assert_eq!(format!("{}", err), "Matrix must be square: got 2x3");

    // InvalidNumericValue
    let err = FactorError::InvalidNumericValue("A[0][1]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: A[0][1]=NaN");

    // NotSymmetric
    let err = FactorError::NotSymmetric { row: 0, column: 2 };
    assert_eq!(
        format!("{}", err),
        "Matrix is not symmetric: A[0][2] != A[2][0]"
    );

    // NotPositiveDefinite
    let err = FactorError::NotPositiveDefinite {
        step: 1,
        pivot: -3.0,
    };
    assert_eq!(
        format!("{}", err),
        "Matrix is not positive definite: diagonal term -3 at step 1"
    );

    // SingularPivot
    let err = FactorError::SingularPivot { step: 0, pivot: 0.0 };
    assert_eq!(format!("{}", err), "Singular pivot: 0 at step 0");

    // InvalidTolerance
    let err = FactorError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be >= 0 and finite)"
    );

    // DuplicateParameter
    let err = FactorError::DuplicateParameter {
        parameter: "tolerance",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'tolerance' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_factor_error_properties() {
    let err1 = FactorError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, FactorError::NotSquare { rows: 1, columns: 2 });
}

#[test]
fn test_factor_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<FactorError>();
}
