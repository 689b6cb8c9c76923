//! Descriptive summaries of entity feature columns.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::selection::EntityVector;
use crate::math::stats::{mean, median_inplace, min_max, sample_std};
use crate::primitives::errors::NatalityError;

/// Min, max, mean, median, and sample standard deviation of one feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSummary<T> {
    /// Feature name.
    pub name: String,
    /// Smallest value.
    pub min: T,
    /// Largest value.
    pub max: T,
    /// Arithmetic mean.
    pub mean: T,
    /// Median.
    pub median: T,
    /// Sample standard deviation (zero for a single entity).
    pub std: T,
}

/// Summarize each feature column across entities.
pub fn describe<T: Float, S: AsRef<str>>(
    entities: &[EntityVector<T>],
    feature_names: &[S],
) -> Result<Vec<FeatureSummary<T>>, NatalityError> {
    if entities.is_empty() {
        return Err(NatalityError::EmptyInput);
    }
    if let Some(e) = entities
        .iter()
        .find(|e| e.values.len() != feature_names.len())
    {
        return Err(NatalityError::MismatchedDimensions {
            expected: feature_names.len(),
            got: e.values.len(),
        });
    }

    let mut column: Vec<T> = Vec::with_capacity(entities.len());
    Ok(feature_names
        .iter()
        .enumerate()
        .map(|(d, name)| {
            column.clear();
            column.extend(entities.iter().map(|e| e.values[d]));
            let (min, max) = min_max(&column).unwrap_or((T::zero(), T::zero()));
            let avg = mean(&column);
            let std = sample_std(&column);
            FeatureSummary {
                name: name.as_ref().into(),
                min,
                max,
                mean: avg,
                median: median_inplace(&mut column),
                std,
            }
        })
        .collect())
}
