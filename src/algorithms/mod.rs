//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the two statistical engines' building blocks:
//! - Feature derivation, standardization, and least squares (regression)
//! - Per-entity selection, normalization, and scoring (similarity)
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shared feature derivation (`_squared`, `_cubed` terms).
pub mod features;

/// Training-time standardization statistics.
pub mod standardize;

/// Normal-equation least squares.
pub mod ols;

/// Per-entity observation selection.
pub mod selection;

/// Min-max and scale normalization.
pub mod normalization;

/// Cosine and weighted ranking.
pub mod similarity;
