//! Tests for the cofactor-expansion determinant.

use approx::assert_relative_eq;
use wlsfit_rs::{FitError, MAX_COFACTOR_ORDER, Matrix, determinant};

/// Test the 1x1 base case.
#[test]
fn test_determinant_1x1() {
    let a = Matrix::from_row_slice(1, 1, &[5.0f64]).unwrap();
    assert_eq!(determinant(&a).unwrap(), 5.0);
}

/// Test a 2x2 determinant.
#[test]
fn test_determinant_2x2() {
    let a = Matrix::from_row_slice(2, 2, &[1.0f64, 2.0, 3.0, 4.0]).unwrap();
    assert_relative_eq!(determinant(&a).unwrap(), -2.0);
}

/// Test a 3x3 determinant with a zero in the first row.
#[test]
fn test_determinant_3x3() {
    let a = Matrix::from_row_slice(3, 3, &[2.0f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0])
        .unwrap();
    // 2*(3-2) - 0 + 1*(1-3) = 0
    assert_relative_eq!(determinant(&a).unwrap(), 0.0);

    let b = Matrix::from_row_slice(3, 3, &[6.0f64, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0])
        .unwrap();
    assert_relative_eq!(determinant(&b).unwrap(), -306.0, epsilon = 1e-9);
}

/// Test that the determinant of a diagonal matrix is the product of its diagonal.
#[test]
fn test_determinant_diagonal() {
    let a = Matrix::from_diagonal(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_relative_eq!(determinant(&a).unwrap(), 720.0);
}

/// Test that swapping two rows flips the sign.
#[test]
fn test_determinant_row_swap_flips_sign() {
    let a = Matrix::from_row_slice(3, 3, &[1.0f64, 2.0, 3.0, 0.0, 4.0, 5.0, 1.0, 0.0, 6.0])
        .unwrap();
    let b = Matrix::from_row_slice(3, 3, &[0.0f64, 4.0, 5.0, 1.0, 2.0, 3.0, 1.0, 0.0, 6.0])
        .unwrap();
    assert_relative_eq!(determinant(&a).unwrap(), -determinant(&b).unwrap());
}

/// Test that non-square input is rejected.
#[test]
fn test_determinant_not_square() {
    let a: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
    assert_eq!(
        determinant(&a),
        Err(FitError::NotSquare { rows: 2, cols: 3 })
    );
}

/// Test the explicit order bound.
#[test]
fn test_determinant_order_bound() {
    let ok: Matrix<f64> = Matrix::identity(MAX_COFACTOR_ORDER).unwrap();
    assert_relative_eq!(determinant(&ok).unwrap(), 1.0);

    let too_large: Matrix<f64> = Matrix::identity(MAX_COFACTOR_ORDER + 1).unwrap();
    assert_eq!(
        determinant(&too_large),
        Err(FitError::MatrixTooLarge {
            order: MAX_COFACTOR_ORDER + 1,
            max: MAX_COFACTOR_ORDER,
        })
    );
}
