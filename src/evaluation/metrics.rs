//! Goodness-of-fit metrics for regression predictions.
//!
//! ## Purpose
//!
//! This module computes error metrics comparing predicted against observed
//! targets: MAE, MSE, RMSE, and the coefficient of determination R².
//!
//! ## Key concepts
//!
//! * **R²**: `1 - SS_res / SS_tot`. With zero total variance, R² is 1 for a
//!   perfect fit and 0 otherwise, so the value is always finite.
//!
//! ## Invariants
//!
//! * `mae >= 0`, `mse >= 0`, `rmse = √mse`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{cast, mean};
use crate::primitives::errors::NatalityError;

/// Regression error metrics on one partition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationMetrics<T> {
    /// Mean absolute error.
    pub mae: T,

    /// Mean squared error.
    pub mse: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Number of rows evaluated.
    pub n: usize,
}

impl<T: Float> EvaluationMetrics<T> {
    /// Compute metrics for paired observed and predicted values.
    pub fn compute(actual: &[T], predicted: &[T]) -> Result<Self, NatalityError> {
        if actual.len() != predicted.len() {
            return Err(NatalityError::MismatchedDimensions {
                expected: actual.len(),
                got: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(NatalityError::EmptyInput);
        }

        let n: T = cast(actual.len());
        let y_mean = mean(actual);

        let (abs_sum, ss_res, ss_tot) = actual.iter().zip(predicted).fold(
            (T::zero(), T::zero(), T::zero()),
            |(abs_sum, ss_res, ss_tot), (&y, &y_hat)| {
                let r = y - y_hat;
                let d = y - y_mean;
                (abs_sum + r.abs(), ss_res + r * r, ss_tot + d * d)
            },
        );

        let mse = ss_res / n;
        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        Ok(Self {
            mae: abs_sum / n,
            mse,
            rmse: mse.sqrt(),
            r_squared,
            n: actual.len(),
        })
    }
}
