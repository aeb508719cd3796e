//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit evaluation: residual-based diagnostics that
//! describe how well a polynomial reproduces its samples.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit diagnostics (RMSE, MAE, R^2, weighted RSS).
pub mod diagnostics;
