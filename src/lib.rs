//! # wlsfit — Weighted Polynomial Least Squares for Rust
//!
//! A small, `no_std`-friendly engine that fits a low-degree polynomial in time
//! to a short window of scalar readings and extrapolates it to a future
//! timestamp.
//!
//! ## What does it do?
//!
//! Given samples `(t_i, y_i)` and an `n x n` weight matrix `W`, the crate
//! solves the weighted normal equations
//!
//! ```text
//! (X'WX) beta = X'WY,    X[i][j] = t_i^j,  j = 0..=degree
//! ```
//!
//! and evaluates `sum_j beta_j * t^j` at the requested time. The inverse of
//! `X'WX` is formed from its adjugate and determinant (cofactor expansion),
//! which is exact and cheap for the small systems a sensor window produces.
//!
//! **Typical applications:**
//! - Forecasting humidity or soil moisture a few minutes ahead
//! - Trend extraction over the last few dozen readings of a sensor
//! - Fits with a known starting value (pinned intercept)
//!
//! ## Quick Start
//!
//! ### Batch fit
//!
//! ```rust
//! use wlsfit_rs::prelude::*;
//!
//! let times: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
//! let values: Vec<f64> = vec![0.0, 2.0, 4.0, 6.0];
//!
//! let model = PolyFit::new()
//!     .degree(Linear)
//!     .return_diagnostics()
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&times, &values)?;
//!
//! assert!((result.evaluate(10.0) - 20.0).abs() < 1e-9);
//! println!("{}", result);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Rolling forecast
//!
//! ```rust
//! use wlsfit_rs::prelude::*;
//!
//! let t0: u64 = 1_700_000_000_000; // epoch milliseconds
//!
//! let mut predictor = PolyFit::new()
//!     .degree(Linear)
//!     .window_capacity(8)
//!     .time_scale(1000.0) // fit in seconds
//!     .feed_mode(Observed)
//!     .adapter(Online)
//!     .build()?;
//!
//! for i in 0..5u64 {
//!     predictor.add_sample(t0 + 1000 * i, 40.0 + 0.5 * i as f64)?;
//! }
//!
//! // Ten seconds after the first reading
//! let forecast = predictor.predict(t0 + 10_000, t0 + 5_000)?;
//! assert!((forecast - 45.0).abs() < 1e-9);
//! assert_eq!(predictor.window_size(), 5);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to build without `std`; only `alloc` is needed.
//! The free function [`predict`] is the whole rolling-window pipeline in one
//! call: fit with uniform weights, extrapolate, then slide the prediction into
//! the window.
//!
//! ```rust
//! use wlsfit_rs::{predict, FitError, PolynomialDegree, SampleWindow};
//!
//! let mut window = SampleWindow::new(4)?;
//! window.push(0, 1.0)?;
//! window.push(1, 3.0)?;
//! window.push(2, 5.0)?;
//!
//! let next: f64 = predict(&mut window, 3, 3, PolynomialDegree::Linear)?;
//! assert!((next - 7.0).abs() < 1e-9);
//!
//! // The oldest reading was replaced by the prediction
//! assert_eq!(window.len(), 3);
//! assert_eq!(window.newest().map(|s| s.time), Some(3));
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter            | Default        | Adapter | Description                                  |
//! |----------------------|----------------|---------|----------------------------------------------|
//! | `degree`             | `Linear`       | Both    | Polynomial degree, `Constant` to `Quintic`   |
//! | `fixed_intercept`    | free           | Both    | Pin the constant term                        |
//! | `weights`            | identity       | Batch   | Explicit `n x n` weight matrix               |
//! | `return_diagnostics` | off            | Batch   | Fitted values, residuals, RMSE, MAE, R^2     |
//! | `window_capacity`    | 16             | Online  | Samples retained                             |
//! | `feed_mode`          | `SelfFeeding`  | Online  | Whether predictions are written back         |
//! | `window_weighting`   | `Uniform`      | Online  | Uniform or exponential-decay weights         |
//! | `time_base`          | `WindowStart`  | Online  | Rebase times to the oldest sample            |
//! | `time_scale`         | 1              | Online  | Divisor applied to timestamps                |
//!
//! Setting a parameter twice on the builder is reported as
//! `FitError::DuplicateParameter` when `.build()` is called.
//!
//! ## Numerical notes
//!
//! - The determinant is a recursive cofactor expansion, bounded to
//!   [`MAX_COFACTOR_ORDER`].
//! - A system is reported singular when its determinant is zero or when the
//!   condition estimate of the diagonally equilibrated normal equations
//!   exceeds `1 / eps`. The estimate does not depend on the units of the
//!   timestamps.
//! - Raw epoch timestamps raised to the second power already exceed the f64
//!   mantissa. The online adapter rebases by default; direct calls to [`fit`]
//!   return `FitError::PrecisionLoss` instead of silently losing digits.
//!
//! ## Logging
//!
//! Fits emit `tracing` events (`debug` per fit, `warn` on singular or
//! imprecise systems, `trace` on window eviction). No subscriber is installed
//! by the crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the dense `Matrix`, the `SampleWindow`, window policies, and
// the shared error type.
mod primitives;

// Layer 2: Math - pure linear algebra.
//
// Contains transpose and products, the cofactor-expansion determinant,
// and the adjugate inverse.
mod math;

// Layer 3: Algorithms - the weighted polynomial fit.
//
// Contains the design matrix, the normal-equations solve, and polynomial
// evaluation.
mod algorithms;

// Layer 4: Evaluation - post-fit diagnostics.
//
// Contains RMSE, MAE, R^2, and the weighted residual sum of squares.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the fit executor, and result assembly.
mod engine;

// Layer 6: Adapters - execution mode adapters.
//
// Contains execution adapters for one-shot (batch) fits and the rolling
// (online) predictor.
mod adapters;

// High-level fluent API.
//
// Provides the `PolyFit` builder for configuring fits and predictors.
mod api;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use crate::adapters::online::{DEFAULT_WINDOW_CAPACITY, predict};
pub use crate::algorithms::regression::{design_matrix, evaluate_polynomial};
pub use crate::api::*;
pub use crate::engine::executor::fit;
pub use crate::math::determinant::{MAX_COFACTOR_ORDER, determinant};
pub use crate::math::inverse::{
    adjugate, cofactor_inverse, cofactor_matrix, condition_estimate, is_singular,
};
pub use crate::math::linalg::{allocate, multiply, multiply_vector, transpose};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use wlsfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        Diagnostics,
        FeedMode::{Observed, SelfFeeding},
        FitError, FitResult, Intercept, Matrix,
        PolyFitBuilder as PolyFit,
        PolynomialDegree::{Constant, Cubic, Linear, Quadratic, Quartic, Quintic},
        RollingPredictor, Sample, SampleWindow,
        TimeBase::{Absolute, WindowStart},
        WindowWeighting,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
