//! Tests for transpose and dense products.

use approx::assert_relative_eq;
use wlsfit_rs::{FitError, Matrix, multiply, multiply_vector, transpose};

fn sample_2x3() -> Matrix<f64> {
    Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

// ============================================================================
// Transpose Tests
// ============================================================================

/// Test that transpose swaps shape and entries.
#[test]
fn test_transpose_shape_and_entries() {
    let a = sample_2x3();
    let t = transpose(&a);
    assert_eq!(t.shape(), (3, 2));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(t[(j, i)], a[(i, j)]);
        }
    }
}

/// Test that transposing twice is exactly the identity operation.
#[test]
fn test_transpose_involution() {
    let a = sample_2x3();
    assert_eq!(a.transpose().transpose(), a);
}

// ============================================================================
// Product Tests
// ============================================================================

/// Test a small hand-computed product.
#[test]
fn test_multiply_known_result() {
    let a = sample_2x3();
    let b = Matrix::from_row_slice(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
    let c = multiply(&a, &b).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_relative_eq!(c[(0, 0)], 58.0);
    assert_relative_eq!(c[(0, 1)], 64.0);
    assert_relative_eq!(c[(1, 0)], 139.0);
    assert_relative_eq!(c[(1, 1)], 154.0);
}

/// Test that the identity is neutral on both sides.
#[test]
fn test_multiply_identity() {
    let a = sample_2x3();
    let left: Matrix<f64> = Matrix::identity(2).unwrap();
    let right: Matrix<f64> = Matrix::identity(3).unwrap();
    assert_eq!(left.multiply(&a).unwrap(), a);
    assert_eq!(a.multiply(&right).unwrap(), a);
}

/// Test that mismatched inner dimensions are reported with both shapes.
#[test]
fn test_multiply_dimension_mismatch() {
    let a = sample_2x3();
    let err = multiply(&a, &a).unwrap_err();
    assert_eq!(
        err,
        FitError::DimensionMismatch {
            operation: "multiply",
            left: (2, 3),
            right: (2, 3),
        }
    );
}

/// Test matrix-vector products and their length check.
#[test]
fn test_multiply_vector() {
    let a = sample_2x3();
    let v = multiply_vector(&a, &[1.0, 0.0, -1.0]).unwrap();
    assert_eq!(v, vec![-2.0, -2.0]);

    let err = multiply_vector(&a, &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        FitError::DimensionMismatch {
            operation: "multiply_vector",
            left: (2, 3),
            right: (2, 1),
        }
    );
}

/// Test that (AB)' = B'A'.
#[test]
fn test_transpose_of_product() {
    let a = sample_2x3();
    let b = Matrix::from_row_slice(3, 2, &[0.5, -1.0, 2.0, 0.0, 1.5, 3.0]).unwrap();
    let lhs = a.multiply(&b).unwrap().transpose();
    let rhs = b.transpose().multiply(&a.transpose()).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!(lhs[(i, j)], rhs[(i, j)], epsilon = 1e-12);
        }
    }
}
