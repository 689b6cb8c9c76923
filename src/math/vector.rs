//! Dense vector kernels for similarity scoring.
//!
//! ## Purpose
//!
//! This module provides the dot product, norms, and cosine similarity used
//! to compare a preference vector against entity feature vectors.
//!
//! ## Invariants
//!
//! * Cosine similarity lies in [-1, 1] for non-zero inputs, and in [0, 1]
//!   when both inputs are non-negative.
//! * A zero-norm operand yields similarity 0, never NaN.

// External dependencies
use num_traits::Float;

/// Dot product: Σ aᵢbᵢ
#[inline]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Vectors must have same dimension");
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi)
}

/// Euclidean (L2) norm: √(Σ aᵢ²)
#[inline]
pub fn l2_norm<T: Float>(a: &[T]) -> T {
    dot(a, a).sqrt()
}

/// Plain sum Σ aᵢ, the L1 norm for non-negative vectors.
#[inline]
pub fn sum<T: Float>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Cosine similarity: (a·b) / (‖a‖ ‖b‖), or 0 if either norm is zero.
#[inline]
pub fn cosine_similarity<T: Float>(a: &[T], b: &[T]) -> T {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == T::zero() || norm_b == T::zero() {
        return T::zero();
    }
    // Rounding can push |cos| marginally past 1.
    (dot(a, b) / (norm_a * norm_b)).max(-T::one()).min(T::one())
}
