//! Online adapter for rolling-window forecasting.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. It owns a
//! bounded window of recent `(time, value)` samples and, on request, fits a
//! polynomial over the window and extrapolates it to a future timestamp.
//!
//! ## Design notes
//!
//! * **Storage**: An owned `SampleWindow`; no state outside the predictor.
//! * **Eviction**: The oldest sample is dropped when the window is full.
//! * **Feeding**: In `SelfFeeding` mode each prediction replaces the oldest
//!   sample at time `now`; in `Observed` mode prediction is read-only.
//! * **Time base**: Timestamps are rebased to the oldest sample by default,
//!   subtracted as integers before conversion, then divided by `time_scale`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Rolling window**: Recent history up to `window_capacity`.
//! * **Warm-up**: `predict` fails with `InsufficientSamples` until the window
//!   holds as many samples as estimated coefficients.
//!
//! ## Invariants
//!
//! * Window size never exceeds capacity.
//! * Self-feeding keeps the window size unchanged.
//! * All values in the window are finite and timestamps are non-decreasing.
//!
//! ## Non-goals
//!
//! * This adapter does not acquire, transmit, or display readings.
//! * This adapter does not reorder late samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::regression::{Intercept, PolynomialDegree};
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;
use crate::primitives::partition::{FeedMode, TimeBase, WindowWeighting};
use crate::primitives::window::SampleWindow;

/// Default number of samples retained by the rolling window.
pub const DEFAULT_WINDOW_CAPACITY: usize = 16;

// ============================================================================
// Rolling Predictor Builder
// ============================================================================

/// Builder for the rolling predictor.
#[derive(Debug, Clone)]
pub struct RollingPredictorBuilder<T> {
    /// Window capacity (maximum number of samples to retain)
    pub window_capacity: usize,

    /// Polynomial degree
    pub degree: PolynomialDegree,

    /// Intercept treatment
    pub intercept: Intercept<T>,

    /// What the window receives after a prediction
    pub feed_mode: FeedMode,

    /// Per-sample weighting
    pub window_weighting: WindowWeighting,

    /// Origin of the fit's time axis
    pub time_base: TimeBase,

    /// Divisor applied to (rebased) timestamps
    pub time_scale: T,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RollingPredictorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RollingPredictorBuilder<T> {
    /// Create a new rolling predictor builder with default parameters.
    fn new() -> Self {
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            degree: PolynomialDegree::default(),
            intercept: Intercept::Free,
            feed_mode: FeedMode::default(),
            window_weighting: WindowWeighting::default(),
            time_base: TimeBase::default(),
            time_scale: T::one(),
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: PolynomialDegree) -> Self {
        self.degree = degree;
        self
    }

    /// Pin the constant term to `value` (in the fit's time coordinates).
    pub fn fixed_intercept(mut self, value: T) -> Self {
        self.intercept = Intercept::Fixed(value);
        self
    }

    // ========================================================================
    // Online-Specific Setters
    // ========================================================================

    /// Set window capacity (maximum number of samples to retain).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = capacity;
        self
    }

    /// Set what the window receives after each prediction.
    pub fn feed_mode(mut self, mode: FeedMode) -> Self {
        self.feed_mode = mode;
        self
    }

    /// Set the per-sample weighting.
    pub fn window_weighting(mut self, weighting: WindowWeighting) -> Self {
        self.window_weighting = weighting;
        self
    }

    /// Set the origin of the fit's time axis.
    pub fn time_base(mut self, base: TimeBase) -> Self {
        self.time_base = base;
        self
    }

    /// Set the divisor applied to timestamps (e.g. 1000 for ms -> s).
    pub fn time_scale(mut self, scale: T) -> Self {
        self.time_scale = scale;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the rolling predictor.
    pub fn build(self) -> Result<RollingPredictor<T>, FitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // The window must be able to hold a determined system
        let min = self.intercept.estimated_coefficients(self.degree).max(1);
        Validator::validate_window_capacity(self.window_capacity, min)?;

        if let WindowWeighting::ExponentialDecay { half_life } = self.window_weighting {
            Validator::validate_half_life(half_life)?;
        }
        Validator::validate_time_scale(self.time_scale)?;
        if let Intercept::Fixed(v) = self.intercept {
            Validator::validate_scalar(v, "intercept", 0)?;
        }

        let window = SampleWindow::new(self.window_capacity)?;
        Ok(RollingPredictor {
            settings: PredictSettings {
                degree: self.degree,
                intercept: self.intercept,
                feed_mode: self.feed_mode,
                window_weighting: self.window_weighting,
                time_base: self.time_base,
                time_scale: self.time_scale,
            },
            window,
            last_fit: None,
            last_origin: 0,
        })
    }
}

// ============================================================================
// Prediction Core
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct PredictSettings<T> {
    degree: PolynomialDegree,
    intercept: Intercept<T>,
    feed_mode: FeedMode,
    window_weighting: WindowWeighting,
    time_base: TimeBase,
    time_scale: T,
}

/// Map an absolute timestamp onto the fit's time axis.
fn to_fit_time<T: Float>(time: u64, origin: u64, scale: T) -> Result<T, FitError> {
    let offset = if time >= origin {
        T::from(time - origin)
    } else {
        T::from(origin - time).map(|d| -d)
    };
    let offset = offset.ok_or_else(|| {
        FitError::InvalidNumericValue(format!("time={} not representable", time))
    })?;
    Ok(offset / scale)
}

/// Fit the window, extrapolate to `target`, and feed the window if configured.
///
/// Returns the prediction, the fit it came from, and the time origin used.
fn predict_window<T: Float>(
    window: &mut SampleWindow<T>,
    target: u64,
    now: u64,
    settings: &PredictSettings<T>,
) -> Result<(T, FitResult<T>, u64), FitError> {
    let n = window.len();

    // Check before any matrix is built
    Validator::validate_sample_count(n, settings.degree, &settings.intercept)?;

    let origin = match settings.time_base {
        TimeBase::WindowStart => window.oldest().map(|s| s.time).unwrap_or(0),
        TimeBase::Absolute => 0,
    };

    let times = window
        .times()
        .map(|t| to_fit_time(t, origin, settings.time_scale))
        .collect::<Result<Vec<T>, FitError>>()?;
    let values: Vec<T> = window.values().collect();

    let weights = match settings.window_weighting {
        WindowWeighting::Uniform => None,
        weighting => Some(Matrix::from_diagonal(&weighting.diagonal::<T>(n))?),
    };

    let config = FitConfig {
        degree: settings.degree,
        intercept: settings.intercept,
        return_diagnostics: false,
    };
    let fit = FitExecutor::run_with_config(&times, &values, weights.as_ref(), config)?;

    let predicted = fit.evaluate(to_fit_time(target, origin, settings.time_scale)?);
    debug!(n_samples = n, target, now, "rolling prediction computed");

    if settings.feed_mode == FeedMode::SelfFeeding {
        window.slide(now, predicted)?;
    }

    Ok((predicted, fit, origin))
}

/// Forecast the value at `target_time` from `window` and feed the forecast back.
///
/// Fits a degree-`degree` polynomial with uniform weights and a free
/// intercept, measuring times from the oldest sample. The oldest sample is
/// then evicted and `(now, prediction)` appended, so the window length is
/// unchanged.
///
/// # Errors
///
/// * `InsufficientSamples` when the window holds fewer than `degree + 1` samples.
/// * `SingularNormalEquations` when the window's timestamps do not determine the curve.
/// * `NonMonotonicTime` when `now` is earlier than the newest sample.
pub fn predict<T: Float>(
    window: &mut SampleWindow<T>,
    target_time: u64,
    now: u64,
    degree: PolynomialDegree,
) -> Result<T, FitError> {
    let settings = PredictSettings {
        degree,
        intercept: Intercept::Free,
        feed_mode: FeedMode::SelfFeeding,
        window_weighting: WindowWeighting::Uniform,
        time_base: TimeBase::WindowStart,
        time_scale: T::one(),
    };
    predict_window(window, target_time, now, &settings).map(|(predicted, _, _)| predicted)
}

// ============================================================================
// Rolling Predictor
// ============================================================================

/// Rolling-window polynomial forecaster.
#[derive(Debug, Clone)]
pub struct RollingPredictor<T> {
    settings: PredictSettings<T>,
    window: SampleWindow<T>,
    last_fit: Option<FitResult<T>>,
    last_origin: u64,
}

impl<T: Float> RollingPredictor<T> {
    /// Append an observed sample, evicting the oldest one when full.
    pub fn add_sample(&mut self, time: u64, value: T) -> Result<(), FitError> {
        self.window.push(time, value)?;
        Ok(())
    }

    /// Forecast the value at `target`; `now` is the time a self-fed prediction is stored at.
    pub fn predict(&mut self, target: u64, now: u64) -> Result<T, FitError> {
        let (predicted, fit, origin) =
            predict_window(&mut self.window, target, now, &self.settings)?;
        self.last_fit = Some(fit);
        self.last_origin = origin;
        Ok(predicted)
    }

    /// Add an observed sample and forecast `target` in one step (`now = time`).
    ///
    /// In `SelfFeeding` mode the prediction is slid in at `time` as well, so
    /// the observed sample and the fed-back prediction share one timestamp.
    /// A window of capacity `c` then covers only about `c / 2` distinct
    /// times; use `Observed` mode, or `add_sample` followed by `predict`
    /// with a later `now`, to keep one sample per timestamp.
    pub fn update(&mut self, time: u64, value: T, target: u64) -> Result<T, FitError> {
        self.add_sample(time, value)?;
        self.predict(target, time)
    }

    /// Fit behind the most recent successful prediction.
    ///
    /// Its coefficients are in the rebased, scaled time axis; see
    /// [`Self::last_origin`].
    pub fn last_fit(&self) -> Option<&FitResult<T>> {
        self.last_fit.as_ref()
    }

    /// Timestamp that was time zero for [`Self::last_fit`].
    pub fn last_origin(&self) -> u64 {
        self.last_origin
    }

    /// Current window contents.
    pub fn window(&self) -> &SampleWindow<T> {
        &self.window
    }

    /// Get the current window size.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Clear the window and forget the last fit.
    pub fn reset(&mut self) {
        self.window.clear();
        self.last_fit = None;
        self.last_origin = 0;
    }
}
