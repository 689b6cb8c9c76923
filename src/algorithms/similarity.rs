//! Preference-based entity ranking.
//!
//! ## Purpose
//!
//! This module scores normalized entity vectors against a user preference
//! vector and returns the entities ordered best-first. Two strategies are
//! available: cosine similarity and a weighted linear score.
//!
//! ## Design notes
//!
//! * **Cosine**: `(u·v) / (‖u‖ ‖v‖)`; a zero-norm operand scores 0.
//! * **Weighted**: weights are L1-normalized to sum to 1, then each entity
//!   scores `values · weights`.
//! * **Ordering**: Scores are sorted descending with a stable sort, so equal
//!   scores keep the input order.
//!
//! ## Invariants
//!
//! * Output contains every input entity exactly once.
//! * Scores are finite for finite inputs.
//!
//! ## Non-goals
//!
//! * This module does not truncate to top-N; callers slice as needed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::normalization::NormalizedVector;
use crate::math::vector::{cosine_similarity, dot, sum};
use crate::primitives::errors::NatalityError;

// ============================================================================
// Scoring Strategy
// ============================================================================

/// How entities are scored against a preference vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringStrategy {
    /// Cosine similarity between preferences and normalized features.
    #[default]
    Cosine,

    /// Dot product with L1-normalized preference weights.
    Weighted,
}

/// One entry of a ranked list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntity<T> {
    /// Entity identifier.
    pub entity: String,

    /// Similarity or weighted score.
    pub score: T,

    /// Year of the underlying observation, if recorded.
    pub year: Option<T>,

    /// Original (unnormalized) feature values.
    pub raw: Vec<T>,
}

// ============================================================================
// Ranking
// ============================================================================

fn check_inputs<T: Float>(
    query: &[T],
    entities: &[NormalizedVector<T>],
) -> Result<(), NatalityError> {
    if entities.is_empty() || query.is_empty() {
        return Err(NatalityError::EmptyInput);
    }
    if let Some(bad) = query.iter().find(|v| !v.is_finite()) {
        return Err(NatalityError::InvalidNumericValue(format!(
            "preference {}",
            bad.to_f64().unwrap_or(f64::NAN)
        )));
    }
    for e in entities {
        if e.values.len() != query.len() {
            return Err(NatalityError::MismatchedDimensions {
                expected: query.len(),
                got: e.values.len(),
            });
        }
    }
    Ok(())
}

fn score_all<T, F>(entities: &[NormalizedVector<T>], score: F) -> Vec<RankedEntity<T>>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    let mut ranked: Vec<RankedEntity<T>> = entities
        .iter()
        .map(|e| RankedEntity {
            entity: e.entity.clone(),
            score: score(&e.values),
            year: e.year,
            raw: e.raw.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Equal));
    ranked
}

/// Rank entities by cosine similarity to the preference vector.
pub fn rank<T: Float>(
    user_vector: &[T],
    entities: &[NormalizedVector<T>],
) -> Result<Vec<RankedEntity<T>>, NatalityError> {
    check_inputs(user_vector, entities)?;
    Ok(score_all(entities, |v| cosine_similarity(user_vector, v)))
}

/// Scale non-negative weights so they sum to one.
pub fn normalize_weights<T: Float>(weights: &[T]) -> Result<Vec<T>, NatalityError> {
    if weights.is_empty() {
        return Err(NatalityError::EmptyInput);
    }
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(NatalityError::InvalidWeights("weights must be finite".into()));
    }
    if weights.iter().any(|&w| w < T::zero()) {
        return Err(NatalityError::InvalidWeights(
            "weights must be non-negative".into(),
        ));
    }
    let total = sum(weights);
    if !(total > T::zero()) {
        return Err(NatalityError::InvalidWeights(
            "weights must have a positive sum".into(),
        ));
    }
    Ok(weights.iter().map(|&w| w / total).collect())
}

/// Rank entities by `values · normalized_weights`.
pub fn weighted_score<T: Float>(
    entities: &[NormalizedVector<T>],
    weight_per_feature: &[T],
) -> Result<Vec<RankedEntity<T>>, NatalityError> {
    check_inputs(weight_per_feature, entities)?;
    let weights = normalize_weights(weight_per_feature)?;
    Ok(score_all(entities, |v| dot(v, &weights)))
}

impl ScoringStrategy {
    /// Score with this strategy. `query` is the preference vector (cosine)
    /// or the raw weight vector (weighted).
    pub fn score<T: Float>(
        &self,
        query: &[T],
        entities: &[NormalizedVector<T>],
    ) -> Result<Vec<RankedEntity<T>>, NatalityError> {
        match self {
            ScoringStrategy::Cosine => rank(query, entities),
            ScoringStrategy::Weighted => weighted_score(entities, query),
        }
    }
}
