//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer runs a fit end to end:
//! - Validation of inputs and parameters
//! - Orchestration of the normal-equations solve
//! - Assembly of the result and its optional diagnostics
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Fit result type.
pub mod output;

/// Input and parameter validation.
pub mod validator;
