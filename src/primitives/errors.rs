//! Error types for weighted polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines every failure the crate can report: input validation,
//! matrix shape contracts, numerical degeneracy of the normal equations, and
//! rolling-window configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (shapes, counts, determinant).
//! * **Typed**: No failure is turned into a NaN; every one is propagated to the caller.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Shape contracts**: Zero-sized allocations, incompatible products, non-square inputs.
//! 3. **Numerical degeneracy**: Singular normal equations, powers beyond representable precision.
//! 4. **Window constraints**: Capacity, ordering of timestamps, weighting parameters.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for fitting and prediction operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Input arrays are empty.
    EmptyInput,

    /// `times` and `values` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `times` array.
        x_len: usize,
        /// Number of elements in the `values` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A matrix was requested with a zero-sized dimension.
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Name of the operation (e.g., "multiply").
        operation: &'static str,
        /// Shape `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// Shape `(rows, cols)` of the right operand.
        right: (usize, usize),
    },

    /// The operation requires a square matrix.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Cofactor expansion is factorial in the order and refuses large matrices.
    MatrixTooLarge {
        /// Order of the matrix provided.
        order: usize,
        /// Largest supported order.
        max: usize,
    },

    /// The normal-equations matrix X'WX is singular (or numerically so).
    SingularNormalEquations {
        /// Determinant of the normal-equations matrix.
        determinant: f64,
    },

    /// Fewer samples than coefficients to estimate.
    InsufficientSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// A timestamp raised to the fit degree exceeds the precision of the float type.
    PrecisionLoss {
        /// The offending timestamp.
        time: f64,
        /// Degree of the polynomial.
        degree: usize,
    },

    /// Polynomial degree is outside the supported range.
    InvalidDegree {
        /// The degree provided.
        got: usize,
        /// Largest supported degree.
        max: usize,
    },

    /// Window capacity cannot hold enough samples for the configured degree.
    InvalidWindowCapacity {
        /// The window capacity provided.
        got: usize,
        /// Minimum required window capacity.
        min: usize,
    },

    /// A sample arrived with a timestamp older than the newest sample in the window.
    NonMonotonicTime {
        /// Timestamp of the newest sample in the window.
        previous: u64,
        /// Timestamp of the rejected sample.
        got: u64,
    },

    /// Exponential decay half-life must be positive and finite.
    InvalidHalfLife(f64),

    /// Time scale divisor must be positive and finite.
    InvalidTimeScale(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: times has {x_len} points, values has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid matrix dimensions: {rows}x{cols} (both must be > 0)")
            }
            Self::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {operation}: {}x{} and {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {rows}x{cols}")
            }
            Self::MatrixTooLarge { order, max } => {
                write!(f, "Matrix order {order} exceeds cofactor expansion limit {max}")
            }
            Self::SingularNormalEquations { determinant } => {
                write!(
                    f,
                    "Normal equations are singular (determinant {determinant}); reduce the degree or widen the window"
                )
            }
            Self::InsufficientSamples { got, min } => {
                write!(f, "Insufficient samples: got {got}, need at least {min}")
            }
            Self::PrecisionLoss { time, degree } => {
                write!(
                    f,
                    "Precision loss: time {time} raised to degree {degree} exceeds float precision; rebase timestamps"
                )
            }
            Self::InvalidDegree { got, max } => {
                write!(f, "Invalid degree: {got} (must be at most {max})")
            }
            Self::InvalidWindowCapacity { got, min } => {
                write!(f, "Invalid window_capacity: {got} (must be at least {min})")
            }
            Self::NonMonotonicTime { previous, got } => {
                write!(
                    f,
                    "Non-monotonic time: {got} is earlier than the newest sample {previous}"
                )
            }
            Self::InvalidHalfLife(h) => {
                write!(f, "Invalid half_life: {h} (must be > 0 and finite)")
            }
            Self::InvalidTimeScale(s) => {
                write!(f, "Invalid time_scale: {s} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FitError {}
