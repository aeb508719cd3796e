//! Tests for the dense matrix container.
//!
//! ## Test Organization
//!
//! 1. **Construction** - zeros, identity, diagonal, row slices
//! 2. **Accessors** - shape, bounds-checked access, rows
//! 3. **Formatting** - Display output

use wlsfit_rs::{FitError, Matrix, allocate};

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that allocation zero-fills and records the shape.
#[test]
fn test_allocate_zero_filled() {
    let m: Matrix<f64> = allocate(2, 3).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

/// Test that zero-sized allocations are rejected.
#[test]
fn test_allocate_rejects_zero_dimensions() {
    assert_eq!(
        Matrix::<f64>::zeros(0, 3),
        Err(FitError::InvalidDimensions { rows: 0, cols: 3 })
    );
    assert_eq!(
        Matrix::<f64>::zeros(3, 0),
        Err(FitError::InvalidDimensions { rows: 3, cols: 0 })
    );
    assert!(Matrix::<f64>::identity(0).is_err());
    assert!(Matrix::<f64>::from_diagonal(&[]).is_err());
}

/// Test identity and diagonal constructors.
#[test]
fn test_identity_and_diagonal() {
    let id: Matrix<f64> = Matrix::identity(3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(id[(i, j)], expected);
        }
    }

    let d = Matrix::from_diagonal(&[2.0f64, 3.0, 4.0]).unwrap();
    assert_eq!(d.diagonal(), vec![2.0, 3.0, 4.0]);
    assert_eq!(d[(0, 1)], 0.0);
}

/// Test row-major construction and its length check.
#[test]
fn test_from_row_slice() {
    let m = Matrix::from_row_slice(2, 2, &[1.0f64, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(m.row(1), &[3.0, 4.0]);

    let err = Matrix::from_row_slice(2, 2, &[1.0f64, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, FitError::DimensionMismatch { .. }));
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test bounds-checked access.
#[test]
fn test_get_out_of_range() {
    let m = Matrix::from_row_slice(2, 3, &[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.get(1, 2), Some(6.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.get(0, 3), None);
    assert!(!m.is_square());
}

/// Test that indexing past the bounds panics instead of aliasing another entry.
#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range_panics() {
    let m: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
    // (0, 3) would alias (1, 0) in unchecked row-major storage
    let _ = m[(0, 3)];
}

/// Test in-place mutation via IndexMut.
#[test]
fn test_index_mut() {
    let mut m: Matrix<f32> = Matrix::zeros(2, 2).unwrap();
    m[(1, 0)] = 7.5;
    assert_eq!(m.as_slice(), &[0.0, 0.0, 7.5, 0.0]);
}

// ============================================================================
// Formatting Tests
// ============================================================================

/// Test that Display prints one bracketed line per row.
#[test]
fn test_display() {
    let m = Matrix::from_row_slice(2, 2, &[1.0f64, -2.0, 3.5, 4.0]).unwrap();
    let s = format!("{}", m);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('[') && lines[0].ends_with(']'));
    assert!(lines[0].contains("-2.000000"));
    assert!(lines[1].contains("3.500000"));
}
