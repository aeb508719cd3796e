//! Tests for error Display formatting and trait implementations.

use wlsfit_rs::FitError;

#[test]
fn test_fit_error_display() {
    // EmptyInput
    let err = FitError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = FitError::MismatchedInputs { x_len: 10, y_len: 5 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: times has 10 points, values has 5"
    );

    // InvalidNumericValue
    let err = FitError::InvalidNumericValue("values[2]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: values[2]=NaN");

    // InvalidDimensions
    let err = FitError::InvalidDimensions { rows: 0, cols: 3 };
    assert_eq!(
        format!("{}", err),
        "Invalid matrix dimensions: 0x3 (both must be > 0)"
    );

    // DimensionMismatch
    let err = FitError::DimensionMismatch {
        operation: "multiply",
        left: (2, 3),
        right: (2, 2),
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch in multiply: 2x3 and 2x2"
    );

    // NotSquare
    let err = FitError::NotSquare { rows: 2, cols: 3 };
    assert_eq!(format!("{}", err), "Matrix is not square: 2x3");

    // MatrixTooLarge
    let err = FitError::MatrixTooLarge { order: 9, max: 8 };
    assert_eq!(
        format!("{}", err),
        "Matrix order 9 exceeds cofactor expansion limit 8"
    );

    // InsufficientSamples
    let err = FitError::InsufficientSamples { got: 2, min: 4 };
    assert_eq!(
        format!("{}", err),
        "Insufficient samples: got 2, need at least 4"
    );

    // InvalidDegree
    let err = FitError::InvalidDegree { got: 7, max: 5 };
    assert_eq!(format!("{}", err), "Invalid degree: 7 (must be at most 5)");

    // InvalidWindowCapacity
    let err = FitError::InvalidWindowCapacity { got: 1, min: 2 };
    assert_eq!(
        format!("{}", err),
        "Invalid window_capacity: 1 (must be at least 2)"
    );

    // NonMonotonicTime
    let err = FitError::NonMonotonicTime {
        previous: 100,
        got: 50,
    };
    assert_eq!(
        format!("{}", err),
        "Non-monotonic time: 50 is earlier than the newest sample 100"
    );

    // InvalidHalfLife
    let err = FitError::InvalidHalfLife(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid half_life: -1 (must be > 0 and finite)"
    );

    // InvalidTimeScale
    let err = FitError::InvalidTimeScale(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid time_scale: 0 (must be > 0 and finite)"
    );

    // DuplicateParameter
    let err = FitError::DuplicateParameter { parameter: "degree" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'degree' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_singular_and_precision_messages_mention_remedy() {
    let err = FitError::SingularNormalEquations { determinant: 0.0 };
    let msg = format!("{}", err);
    assert!(msg.starts_with("Normal equations are singular"));
    assert!(msg.contains("reduce the degree"));

    let err = FitError::PrecisionLoss {
        time: 1.7e12,
        degree: 2,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("degree 2"));
    assert!(msg.contains("rebase timestamps"));
}

#[test]
fn test_fit_error_traits() {
    let err = FitError::EmptyInput;
    let cloned = err.clone();
    assert_eq!(err, cloned);
    assert_ne!(err, FitError::InvalidHalfLife(1.0));

    let debug = format!("{:?}", FitError::NotSquare { rows: 1, cols: 2 });
    assert!(debug.contains("NotSquare"));

    // std::error::Error is available under the default `std` feature
    let boxed: Box<dyn std::error::Error> = Box::new(FitError::EmptyInput);
    assert_eq!(boxed.to_string(), "Input arrays are empty");
}
