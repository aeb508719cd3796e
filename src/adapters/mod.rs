//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer exposes the execution modes:
//! - Batch: one fit over caller-supplied arrays
//! - Online: a rolling window that forecasts as samples arrive
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot fits.
pub mod batch;

/// Rolling-window prediction.
pub mod online;
