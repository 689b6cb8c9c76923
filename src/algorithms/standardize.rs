//! Feature standardization with frozen training statistics.
//!
//! ## Purpose
//!
//! This module computes per-feature mean and standard deviation on the
//! training partition and applies `(x - mean) / std` to any row. The same
//! statistics are stored in the trained model and reused for every
//! prediction.
//!
//! ## Design notes
//!
//! * **Layout**: Matrices are row-major `&[T]` with `n_features` columns.
//! * **Zero-std guard**: A constant column has its std coerced to 1, so its
//!   standardized values are all zero instead of NaN.
//!
//! ## Invariants
//!
//! * `mean.len() == std.len()` and every `std` entry is finite and > 0.
//! * On the data it was fitted to, every standardized column has sample
//!   mean ≈ 0 and sample std ≈ 1 (or is all zeros for constant columns).
//!
//! ## Non-goals
//!
//! * This module never refits statistics on prediction inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::cast;
use crate::primitives::errors::NatalityError;

/// Per-feature mean and standard deviation from a training partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureStatistics<T> {
    /// Column means.
    pub mean: Vec<T>,

    /// Column sample standard deviations, with zeros replaced by one.
    pub std: Vec<T>,
}

impl<T: Float> FeatureStatistics<T> {
    /// Compute statistics column-wise over a row-major matrix.
    pub fn fit(matrix: &[T], n_features: usize) -> Self {
        debug_assert!(n_features > 0);
        debug_assert_eq!(matrix.len() % n_features, 0);

        let n_rows = matrix.len() / n_features;
        let mut mean = vec![T::zero(); n_features];
        let mut std = vec![T::one(); n_features];

        if n_rows == 0 {
            return Self { mean, std };
        }

        for row in matrix.chunks_exact(n_features) {
            for (m, &x) in mean.iter_mut().zip(row) {
                *m = *m + x;
            }
        }
        let n = cast::<T, _>(n_rows);
        for m in mean.iter_mut() {
            *m = *m / n;
        }

        // Constant columns take their exact value as mean so they map to 0.
        let first = &matrix[..n_features];
        let mut constant = vec![true; n_features];
        for row in matrix.chunks_exact(n_features).skip(1) {
            for ((c, &x), &f) in constant.iter_mut().zip(row).zip(first) {
                *c = *c && x == f;
            }
        }
        for ((m, &c), &f) in mean.iter_mut().zip(&constant).zip(first) {
            if c {
                *m = f;
            }
        }

        if n_rows > 1 {
            let mut ss = vec![T::zero(); n_features];
            for row in matrix.chunks_exact(n_features) {
                for ((s, &x), &m) in ss.iter_mut().zip(row).zip(&mean) {
                    let d = x - m;
                    *s = *s + d * d;
                }
            }
            let denom = cast::<T, _>(n_rows - 1);
            for ((sd, s), &c) in std.iter_mut().zip(ss).zip(&constant) {
                let v = (s / denom).sqrt();
                *sd = if !c && v > T::zero() && v.is_finite() {
                    v
                } else {
                    T::one()
                };
            }
        }

        Self { mean, std }
    }

    /// Rebuild statistics from stored values.
    pub fn from_parts(mean: Vec<T>, std: Vec<T>) -> Result<Self, NatalityError> {
        if mean.len() != std.len() {
            return Err(NatalityError::MismatchedDimensions {
                expected: mean.len(),
                got: std.len(),
            });
        }
        if let Some(bad) = mean
            .iter()
            .chain(&std)
            .find(|v| !v.is_finite())
        {
            return Err(NatalityError::InvalidNumericValue(format!(
                "feature statistic {}",
                bad.to_f64().unwrap_or(f64::NAN)
            )));
        }
        let std = std
            .into_iter()
            .map(|s| if s == T::zero() { T::one() } else { s.abs() })
            .collect();
        Ok(Self { mean, std })
    }

    /// Number of features.
    #[inline]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether there are no features.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize one row in place.
    #[inline]
    pub fn transform_row(&self, row: &mut [T]) {
        debug_assert_eq!(row.len(), self.len());
        for ((x, &m), &s) in row.iter_mut().zip(&self.mean).zip(&self.std) {
            *x = (*x - m) / s;
        }
    }

    /// Standardize every row of a row-major matrix in place.
    pub fn transform(&self, matrix: &mut [T]) {
        if self.is_empty() {
            return;
        }
        for row in matrix.chunks_exact_mut(self.len()) {
            self.transform_row(row);
        }
    }
}
