//! Feature normalization across a population of entities.
//!
//! ## Purpose
//!
//! This module rescales entity feature vectors so that features measured in
//! very different units (hours, currency per capita) contribute comparably
//! to similarity scores.
//!
//! ## Design notes
//!
//! * **Min-max**: `(x - min) / (max - min)` per feature across all entities.
//! * **Flat features**: When `max == min` every entity receives exactly 0.5
//!   for that feature.
//! * **Divide by scale**: `x / max_scale`, used for bounded user inputs.
//!
//! ## Invariants
//!
//! * Min-max output lies in [0, 1].
//! * Output order matches input order; raw values are carried alongside.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::selection::EntityVector;
use crate::math::stats::{cast, min_max};
use crate::primitives::errors::NatalityError;

// ============================================================================
// Normalization Method
// ============================================================================

/// How feature columns are rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizationMethod<T> {
    /// Rescale each feature to [0, 1] using the population min and max.
    MinMax,

    /// Divide each feature by a fixed positive scale.
    DivideByScale(T),
}

impl<T> Default for NormalizationMethod<T> {
    fn default() -> Self {
        Self::MinMax
    }
}

/// An entity's normalized feature vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedVector<T> {
    /// Entity identifier.
    pub entity: String,

    /// Year of the underlying observation, if recorded.
    pub year: Option<T>,

    /// Normalized feature values.
    pub values: Vec<T>,

    /// Original feature values.
    pub raw: Vec<T>,
}

impl<T: Float> NormalizationMethod<T> {
    /// Normalize every entity vector.
    pub fn apply(
        &self,
        entities: &[EntityVector<T>],
    ) -> Result<Vec<NormalizedVector<T>>, NatalityError> {
        let first = entities.first().ok_or(NatalityError::EmptyInput)?;
        let dims = first.values.len();

        for e in entities {
            if e.values.len() != dims {
                return Err(NatalityError::MismatchedDimensions {
                    expected: dims,
                    got: e.values.len(),
                });
            }
            if let Some(bad) = e.values.iter().find(|v| !v.is_finite()) {
                return Err(NatalityError::InvalidNumericValue(format!(
                    "{}: {}",
                    e.entity,
                    bad.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        let transform: Vec<(T, T)> = match *self {
            Self::MinMax => Self::min_max_params(entities, dims),
            Self::DivideByScale(scale) => {
                Self::validate_scale(scale)?;
                vec![(T::zero(), scale); dims]
            }
        };

        Ok(entities
            .iter()
            .map(|e| NormalizedVector {
                entity: e.entity.clone(),
                year: e.year,
                values: e
                    .values
                    .iter()
                    .zip(&transform)
                    .map(|(&x, &(offset, range))| {
                        if range > T::zero() {
                            (x - offset) / range
                        } else {
                            cast(0.5)
                        }
                    })
                    .collect(),
                raw: e.values.clone(),
            })
            .collect())
    }

    /// Divide raw values by a fixed scale (e.g. 0-10 slider inputs to 0-1).
    pub fn scale_vector(values: &[T], max_scale: T) -> Result<Vec<T>, NatalityError> {
        Self::validate_scale(max_scale)?;
        Ok(values.iter().map(|&v| v / max_scale).collect())
    }

    /// Per-feature `(min, max - min)`; a zero range marks a flat feature.
    fn min_max_params(entities: &[EntityVector<T>], dims: usize) -> Vec<(T, T)> {
        let mut column = Vec::with_capacity(entities.len());
        (0..dims)
            .map(|d| {
                column.clear();
                column.extend(entities.iter().map(|e| e.values[d]));
                let (lo, hi) = min_max(&column).unwrap_or((T::zero(), T::zero()));
                (lo, if hi > lo { hi - lo } else { T::zero() })
            })
            .collect()
    }

    fn validate_scale(scale: T) -> Result<(), NatalityError> {
        if scale.is_finite() && scale > T::zero() {
            Ok(())
        } else {
            Err(NatalityError::InvalidScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ))
        }
    }
}
