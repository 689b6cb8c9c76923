//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit diagnostics:
//! - Regression error metrics (MAE, MSE, RMSE, R²)
//! - Per-feature descriptive summaries over entities
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
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

/// Regression error metrics.
pub mod metrics;

/// Feature summaries.
pub mod summary;
