//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by both engines:
//! - Dense linear algebra for the normal equation
//! - Column statistics (mean, sample std, median, range)
//! - Vector kernels (dot product, norms, cosine similarity)
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normal-equation solver backed by nalgebra.
pub mod linalg;

/// Descriptive statistics.
pub mod stats;

/// Vector kernels.
pub mod vector;
