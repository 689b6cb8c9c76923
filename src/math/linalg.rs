//! Linear algebra backend abstraction for the normal equation.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense linear
//! algebra needed by ordinary least squares, delegating to nalgebra.
//!
//! ## Design notes
//!
//! * Solves β = (XᵀX)⁻¹Xᵀy by explicit inversion of the normal matrix.
//! * Singularity is reported, never papered over: there is no pseudo-inverse
//!   or SVD fallback. A matrix whose reciprocal condition number is below
//!   `100·n·ε` counts as singular even if LU happens to produce an inverse.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the normal equations XᵀX · β = Xᵀy.
    ///
    /// `xtx` is the `n x n` matrix in column-major order. Returns `None` when
    /// the matrix is singular or numerically rank deficient.
    fn solve_normal(xtx: &[Self], xty: &[Self], n: usize) -> Option<Vec<Self>>;

    /// Reciprocal condition number (smallest / largest singular value).
    fn reciprocal_condition(a: &[Self], n: usize) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_normal(xtx: &[Self], xty: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f64(xtx, xty, n)
    }
    #[inline]
    fn reciprocal_condition(a: &[Self], n: usize) -> Self {
        nalgebra_backend::reciprocal_condition_f64(a, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_normal(xtx: &[Self], xty: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f32(xtx, xty, n)
    }
    #[inline]
    fn reciprocal_condition(a: &[Self], n: usize) -> Self {
        nalgebra_backend::reciprocal_condition_f32(a, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve normal equations XᵀX · β = Xᵀy using f64 precision.
    pub fn solve_normal_equations_f64(xtx: &[f64], xty: &[f64], n: usize) -> Option<Vec<f64>> {
        if n == 0 || xtx.len() != n * n || xty.len() != n {
            return None;
        }
        if !(reciprocal_condition_f64(xtx, n) > f64::EPSILON * 100.0 * n as f64) {
            return None;
        }

        let inverse = DMatrix::from_column_slice(n, n, xtx).try_inverse()?;
        let beta = inverse * DVector::from_column_slice(xty);

        if beta.iter().all(|b| b.is_finite()) {
            Some(beta.as_slice().to_vec())
        } else {
            None
        }
    }

    /// Reciprocal condition number using f64 precision.
    pub fn reciprocal_condition_f64(a: &[f64], n: usize) -> f64 {
        let sv = DMatrix::from_column_slice(n, n, a).singular_values();
        let max = sv.iter().copied().fold(0.0, f64::max);
        let min = sv.iter().copied().fold(f64::INFINITY, f64::min);
        if max > 0.0 && max.is_finite() {
            min / max
        } else {
            0.0
        }
    }

    /// Solve normal equations XᵀX · β = Xᵀy using f32 precision.
    pub fn solve_normal_equations_f32(xtx: &[f32], xty: &[f32], n: usize) -> Option<Vec<f32>> {
        if n == 0 || xtx.len() != n * n || xty.len() != n {
            return None;
        }
        if !(reciprocal_condition_f32(xtx, n) > f32::EPSILON * 100.0 * n as f32) {
            return None;
        }

        let inverse = DMatrix::from_column_slice(n, n, xtx).try_inverse()?;
        let beta = inverse * DVector::from_column_slice(xty);

        if beta.iter().all(|b| b.is_finite()) {
            Some(beta.as_slice().to_vec())
        } else {
            None
        }
    }

    /// Reciprocal condition number using f32 precision.
    pub fn reciprocal_condition_f32(a: &[f32], n: usize) -> f32 {
        let sv = DMatrix::from_column_slice(n, n, a).singular_values();
        let max = sv.iter().copied().fold(0.0, f32::max);
        let min = sv.iter().copied().fold(f32::INFINITY, f32::min);
        if max > 0.0 && max.is_finite() {
            min / max
        } else {
            0.0
        }
    }
}
