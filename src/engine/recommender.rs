//! Similarity recommendation pipeline.
//!
//! ## Purpose
//!
//! This module turns a multi-period observation table and a set of raw user
//! preferences into a ranked list of entities: it validates the preferences,
//! selects one complete observation per entity, normalizes the feature
//! columns, and scores every entity with the configured strategy.
//!
//! ## Design notes
//!
//! * **Pure**: No state is kept between calls.
//! * **User side**: For cosine scoring, raw preferences are divided by the
//!   preference scale; for weighted scoring they are L1-normalized.
//!
//! ## Non-goals
//!
//! * This module does not truncate the ranking.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::normalization::{NormalizationMethod, NormalizedVector};
use crate::algorithms::selection::{EntityVector, select_latest};
use crate::algorithms::similarity::{ScoringStrategy, normalize_weights};
use crate::engine::output::Recommendation;
use crate::engine::validator::Validator;
use crate::primitives::dataset::{FieldSource, Observation};
use crate::primitives::errors::NatalityError;

/// Validated ranking settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RankerConfig<T> {
    /// Feature names in vector order.
    pub feature_names: Vec<String>,

    /// Entity-side normalization.
    pub normalization: NormalizationMethod<T>,

    /// Upper bound of raw user preferences.
    pub preference_scale: T,

    /// Scoring strategy.
    pub strategy: ScoringStrategy,

    /// Entities never ranked (e.g. aggregates).
    pub exclude: Vec<String>,
}

/// Similarity recommender.
pub struct Recommender;

impl Recommender {
    /// One complete, most recent feature vector per entity.
    pub fn select<T: Float>(
        observations: &[Observation<T>],
        config: &RankerConfig<T>,
    ) -> Result<Vec<EntityVector<T>>, NatalityError> {
        if observations.is_empty() {
            return Err(NatalityError::EmptyInput);
        }
        let entities = select_latest(observations, &config.feature_names, &config.exclude);
        if entities.is_empty() {
            return Err(NatalityError::EmptyInput);
        }
        Ok(entities)
    }

    /// Select and normalize entity vectors.
    pub fn normalize_entities<T: Float>(
        observations: &[Observation<T>],
        config: &RankerConfig<T>,
    ) -> Result<Vec<NormalizedVector<T>>, NatalityError> {
        let entities = Self::select(observations, config)?;
        config.normalization.apply(&entities)
    }

    /// Rank entities against raw user preferences.
    pub fn recommend<T, R>(
        observations: &[Observation<T>],
        preferences: &R,
        config: &RankerConfig<T>,
    ) -> Result<Recommendation<T>, NatalityError>
    where
        T: Float,
        R: FieldSource<T> + ?Sized,
    {
        let raw = Validator::validate_preferences(
            preferences,
            &config.feature_names,
            config.preference_scale,
        )?;

        let (query, score_input) = match config.strategy {
            ScoringStrategy::Cosine => {
                let scaled = NormalizationMethod::scale_vector(&raw, config.preference_scale)?;
                (scaled.clone(), scaled)
            }
            ScoringStrategy::Weighted => (normalize_weights(&raw)?, raw),
        };

        let entities = Self::normalize_entities(observations, config)?;
        let rankings = config.strategy.score(&score_input, &entities)?;

        Ok(Recommendation {
            strategy: config.strategy,
            feature_names: config.feature_names.clone(),
            query,
            rankings,
        })
    }
}
