//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the fit and choosing an execution adapter
//! (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Online modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFitBuilder`] via `PolyFit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.window_capacity()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Online)` to get an execution builder.
//! 4. Call `.build()` to validate and obtain the processor.

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchFit, BatchFitBuilder};
pub use crate::adapters::online::{RollingPredictor, RollingPredictorBuilder};
pub use crate::algorithms::regression::{Intercept, PolynomialDegree};
pub use crate::engine::output::FitResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::FitError;
pub use crate::primitives::matrix::Matrix;
pub use crate::primitives::partition::{FeedMode, TimeBase, WindowWeighting};
pub use crate::primitives::window::{Sample, SampleWindow};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

/// Fluent builder for configuring fits and execution modes.
#[derive(Debug, Clone)]
pub struct PolyFitBuilder<T: Float> {
    /// Polynomial degree (default: linear).
    pub degree: Option<PolynomialDegree>,

    /// Pinned constant term (default: estimated from data).
    pub fixed_intercept: Option<T>,

    /// Explicit weight matrix (Batch only).
    pub weights: Option<Matrix<T>>,

    /// Compute fitted values, residuals, and diagnostics (Batch only).
    pub return_diagnostics: Option<bool>,

    /// Window capacity (Online only).
    pub window_capacity: Option<usize>,

    /// Feeding policy after each prediction (Online only).
    pub feed_mode: Option<FeedMode>,

    /// Per-sample weighting (Online only).
    pub window_weighting: Option<WindowWeighting>,

    /// Origin of the time axis (Online only).
    pub time_base: Option<TimeBase>,

    /// Divisor applied to timestamps (Online only).
    pub time_scale: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PolyFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PolyFitBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: FitAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            fixed_intercept: None,
            weights: None,
            return_diagnostics: None,
            window_capacity: None,
            feed_mode: None,
            window_weighting: None,
            time_base: None,
            time_scale: None,
            duplicate_param: None,
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: PolynomialDegree) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Pin the constant term of the polynomial.
    pub fn fixed_intercept(mut self, value: T) -> Self {
        if self.fixed_intercept.is_some() {
            self.duplicate_param = Some("fixed_intercept");
        }
        self.fixed_intercept = Some(value);
        self
    }

    /// Set an explicit `n x n` weight matrix (Batch only).
    pub fn weights(mut self, weights: Matrix<T>) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights);
        self
    }

    /// Compute fitted values, residuals, and diagnostics (Batch only).
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Set the window capacity (Online only).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        if self.window_capacity.is_some() {
            self.duplicate_param = Some("window_capacity");
        }
        self.window_capacity = Some(capacity);
        self
    }

    /// Set the feeding policy (Online only).
    pub fn feed_mode(mut self, mode: FeedMode) -> Self {
        if self.feed_mode.is_some() {
            self.duplicate_param = Some("feed_mode");
        }
        self.feed_mode = Some(mode);
        self
    }

    /// Set the per-sample weighting (Online only).
    pub fn window_weighting(mut self, weighting: WindowWeighting) -> Self {
        if self.window_weighting.is_some() {
            self.duplicate_param = Some("window_weighting");
        }
        self.window_weighting = Some(weighting);
        self
    }

    /// Set the origin of the time axis (Online only).
    pub fn time_base(mut self, base: TimeBase) -> Self {
        if self.time_base.is_some() {
            self.duplicate_param = Some("time_base");
        }
        self.time_base = Some(base);
        self
    }

    /// Set the divisor applied to timestamps (Online only).
    pub fn time_scale(mut self, scale: T) -> Self {
        if self.time_scale.is_some() {
            self.duplicate_param = Some("time_scale");
        }
        self.time_scale = Some(scale);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait FitAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`PolyFitBuilder`] into a specialized execution builder.
    fn convert(builder: PolyFitBuilder<T>) -> Self::Output;
}

/// Marker for one-shot batch fits.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> FitAdapter<T> for Batch {
    type Output = BatchFitBuilder<T>;

    fn convert(builder: PolyFitBuilder<T>) -> Self::Output {
        let mut result = BatchFitBuilder::default();

        if let Some(degree) = builder.degree {
            result.degree = degree;
        }
        if let Some(v) = builder.fixed_intercept {
            result.intercept = Intercept::Fixed(v);
        }
        if let Some(w) = builder.weights {
            result.weights = Some(w);
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for rolling-window prediction.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> FitAdapter<T> for Online {
    type Output = RollingPredictorBuilder<T>;

    fn convert(builder: PolyFitBuilder<T>) -> Self::Output {
        let mut result = RollingPredictorBuilder::default();

        // Override with user-provided values
        if let Some(degree) = builder.degree {
            result.degree = degree;
        }
        if let Some(v) = builder.fixed_intercept {
            result.intercept = Intercept::Fixed(v);
        }
        if let Some(capacity) = builder.window_capacity {
            result.window_capacity = capacity;
        }
        if let Some(mode) = builder.feed_mode {
            result.feed_mode = mode;
        }
        if let Some(weighting) = builder.window_weighting {
            result.window_weighting = weighting;
        }
        if let Some(base) = builder.time_base {
            result.time_base = base;
        }
        if let Some(scale) = builder.time_scale {
            result.time_scale = scale;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
