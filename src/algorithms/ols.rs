//! Ordinary least squares via the normal equation.
//!
//! ## Purpose
//!
//! This module fits a global linear model `y ≈ Xβ` where the design matrix
//! `X` is a column of ones followed by the (standardized) feature columns,
//! solving β = (XᵀX)⁻¹Xᵀy in closed form.
//!
//! ## Design notes
//!
//! * **Layout**: Design matrices are row-major with `n_features + 1` columns.
//!   The normal matrix is accumulated as a symmetric `k x k` column-major
//!   buffer for the linalg backend.
//! * **No regularization**: A singular XᵀX is an error, not a ridge fallback.
//!
//! ## Invariants
//!
//! * `beta.len() == n_features + 1`, with `beta[0]` the intercept.
//!
//! ## Non-goals
//!
//! * This module does not standardize, split, or evaluate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::NatalityError;

/// Closed-form least-squares solver.
pub struct OrdinaryLeastSquares;

impl OrdinaryLeastSquares {
    /// Prepend an intercept column of ones to a row-major feature matrix.
    pub fn design_matrix<T: Float>(features: &[T], n_features: usize) -> Vec<T> {
        debug_assert!(n_features > 0);
        let n_rows = features.len() / n_features;
        let mut design = Vec::with_capacity(n_rows * (n_features + 1));
        for row in features.chunks_exact(n_features) {
            design.push(T::one());
            design.extend_from_slice(row);
        }
        design
    }

    /// Accumulate XᵀX (column-major, `k x k`) and Xᵀy from a row-major design matrix.
    pub fn normal_equations<T: Float>(design: &[T], y: &[T], k: usize) -> (Vec<T>, Vec<T>) {
        let mut xtx = vec![T::zero(); k * k];
        let mut xty = vec![T::zero(); k];

        for (row, &yi) in design.chunks_exact(k).zip(y) {
            for j in 0..k {
                let xj = row[j];
                xty[j] = xty[j] + xj * yi;
                // Upper triangle only; mirrored below.
                for i in 0..=j {
                    xtx[j * k + i] = xtx[j * k + i] + row[i] * xj;
                }
            }
        }
        for j in 0..k {
            for i in (j + 1)..k {
                xtx[j * k + i] = xtx[i * k + j];
            }
        }

        (xtx, xty)
    }

    /// Fit β for a row-major design matrix with `k` columns.
    pub fn solve<T: FloatLinalg>(design: &[T], y: &[T], k: usize) -> Result<Vec<T>, NatalityError> {
        let n_rows = design.len() / k.max(1);
        if n_rows < k {
            return Err(NatalityError::InsufficientData {
                got: n_rows,
                min: k,
            });
        }

        let (xtx, xty) = Self::normal_equations(design, y, k);
        T::solve_normal(&xtx, &xty, k).ok_or(NatalityError::SingularMatrix { size: k })
    }

    /// Evaluate `beta[0] + Σ beta[i + 1] * x[i]` for one feature row.
    #[inline]
    pub fn predict_row<T: Float>(beta: &[T], features: &[T]) -> T {
        debug_assert_eq!(beta.len(), features.len() + 1);
        features
            .iter()
            .zip(&beta[1..])
            .fold(beta[0], |acc, (&x, &b)| acc + b * x)
    }

    /// Evaluate the model for every row of a row-major feature matrix.
    pub fn predict<T: Float>(beta: &[T], features: &[T], n_features: usize) -> Vec<T> {
        features
            .chunks_exact(n_features.max(1))
            .map(|row| Self::predict_row(beta, row))
            .collect()
    }
}
