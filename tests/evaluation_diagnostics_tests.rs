//! Tests for fit diagnostics.

use approx::assert_relative_eq;
use wlsfit_rs::{Diagnostics, Matrix};

/// Test the error metrics on hand-computed residuals.
#[test]
fn test_rmse_and_mae() {
    let residuals = [1.0f64, -1.0, 2.0, -2.0];
    // sqrt((1 + 1 + 4 + 4) / 4)
    assert_relative_eq!(Diagnostics::calculate_rmse(&residuals), 2.5f64.sqrt());
    assert_relative_eq!(Diagnostics::calculate_mae(&residuals), 1.5);

    let empty: [f64; 0] = [];
    assert_eq!(Diagnostics::calculate_rmse(&empty), 0.0);
    assert_eq!(Diagnostics::calculate_mae(&empty), 0.0);
}

/// Test R^2 including the constant-data conventions.
#[test]
fn test_r_squared() {
    let values = [1.0f64, 2.0, 3.0, 4.0];
    assert_relative_eq!(
        Diagnostics::calculate_r_squared(&values, &[0.0, 0.0, 0.0, 0.0]),
        1.0
    );

    // SS_tot = 5, SS_res = 1
    assert_relative_eq!(
        Diagnostics::calculate_r_squared(&values, &[0.5, -0.5, 0.5, -0.5]),
        0.8
    );

    // Constant data: perfect fit is 1, any residual is 0
    let flat = [5.0f64, 5.0, 5.0];
    assert_eq!(Diagnostics::calculate_r_squared(&flat, &[0.0, 0.0, 0.0]), 1.0);
    assert_eq!(Diagnostics::calculate_r_squared(&flat, &[0.1, 0.0, 0.0]), 0.0);
}

/// Test the weighted residual sum of squares.
#[test]
fn test_weighted_rss() {
    let residuals = [1.0f64, 2.0, 3.0];
    let w = Matrix::from_diagonal(&[1.0, 0.5, 0.0]).unwrap();
    // 1 + 0.5 * 4 + 0
    assert_relative_eq!(
        Diagnostics::calculate_weighted_rss(&residuals, &w).unwrap(),
        3.0
    );

    let wrong: Matrix<f64> = Matrix::identity(2).unwrap();
    assert!(Diagnostics::calculate_weighted_rss(&residuals, &wrong).is_err());
}

/// Test the combined computation and its Display output.
#[test]
fn test_compute_and_display() {
    let values = [1.0f64, 2.0, 3.0];
    let fitted = [1.0f64, 2.5, 3.0];
    let w: Matrix<f64> = Matrix::identity(3).unwrap();

    let diag = Diagnostics::compute(&values, &fitted, &w).unwrap();
    assert_relative_eq!(diag.weighted_rss, 0.25);
    assert_relative_eq!(diag.mae, 0.5 / 3.0);
    assert_relative_eq!(diag.rmse, (0.25f64 / 3.0).sqrt());
    // SS_tot = 2
    assert_relative_eq!(diag.r_squared, 1.0 - 0.25 / 2.0);

    let s = format!("{}", diag);
    assert!(s.starts_with("Fit Diagnostics:"));
    assert!(s.contains("RMSE:"));
    assert!(s.contains("Weighted RSS:"));
}
