//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates complete runs of both engines:
//! - Validation of configuration and inputs
//! - The regression fit pipeline
//! - The similarity recommendation pipeline
//! - Result types and their reports
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
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

/// Fail-fast validation.
pub mod validator;

/// Result types.
pub mod output;

/// Regression fit pipeline.
pub mod trainer;

/// Similarity recommendation pipeline.
pub mod recommender;
