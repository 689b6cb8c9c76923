//! High-level API for birth-rate regression and similarity ranking.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Two fluent builders
//! configure the engines, `Regression` for the least-squares birth-rate
//! model and `Ranker` for preference-based entity ranking, and a set of
//! free functions exposes each operation directly.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Regression::new()` or `Ranker::new()`.
//! 2. Chain configuration methods (`.features()`, `.seed()`, `.strategy()`, etc.).
//! 3. Call `.build()` to validate and obtain a reusable engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use core::fmt::Debug;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::FeatureSpec;
use crate::engine::recommender::{RankerConfig, Recommender};
use crate::engine::trainer::{RegressionConfig, RegressionTrainer};
use crate::engine::validator::Validator;
use crate::math::stats::cast;

// Publicly re-exported types
pub use crate::algorithms::normalization::{NormalizationMethod, NormalizedVector};
pub use crate::algorithms::selection::{EntityVector, prediction_input, select_latest};
pub use crate::algorithms::similarity::{RankedEntity, ScoringStrategy, rank, weighted_score};
pub use crate::algorithms::standardize::FeatureStatistics;
pub use crate::engine::output::{ModelEvaluation, Recommendation, TrainedModel};
pub use crate::evaluation::metrics::EvaluationMetrics;
pub use crate::evaluation::summary::{FeatureSummary, describe};
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::dataset::{
    BIRTH_RATE_FEATURES, BIRTH_RATE_PER_THOUSAND, FAMILY_FEATURES, FieldSource, Observation,
};
pub use crate::primitives::errors::NatalityError;
pub use crate::primitives::partition::DEFAULT_SEED;

/// Default held-out fraction.
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Default upper bound of raw user preferences.
pub const DEFAULT_PREFERENCE_SCALE: f64 = 10.0;

fn owned<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| n.as_ref().to_owned()).collect()
}

// ============================================================================
// Regression Builder
// ============================================================================

/// Fluent builder for the birth-rate regression.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T: FloatLinalg + Debug> {
    /// Ordered feature names, base or derived (`_squared`, `_cubed`).
    pub features: Option<Vec<String>>,

    /// Target field.
    pub target: Option<String>,

    /// Held-out test fraction in (0, 1).
    pub test_fraction: Option<T>,

    /// Shuffle seed.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug> RegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            features: None,
            target: None,
            test_fraction: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the ordered feature list.
    pub fn features<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        if self.features.is_some() {
            self.duplicate_param = Some("features");
        }
        self.features = Some(owned(names));
        self
    }

    /// Set the target field.
    pub fn target(mut self, name: impl Into<String>) -> Self {
        if self.target.is_some() {
            self.duplicate_param = Some("target");
        }
        self.target = Some(name.into());
        self
    }

    /// Set the held-out test fraction.
    pub fn test_fraction(mut self, fraction: T) -> Self {
        if self.test_fraction.is_some() {
            self.duplicate_param = Some("test_fraction");
        }
        self.test_fraction = Some(fraction);
        self
    }

    /// Set the shuffle seed.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<RegressionModel<T>, NatalityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let spec = match &self.features {
            Some(names) => FeatureSpec::new(names)?,
            None => FeatureSpec::new(&BIRTH_RATE_FEATURES)?,
        };
        let target = self
            .target
            .unwrap_or_else(|| BIRTH_RATE_PER_THOUSAND.to_owned());
        Validator::validate_target(&target, &spec)?;

        let test_fraction = self
            .test_fraction
            .unwrap_or_else(|| cast(DEFAULT_TEST_FRACTION));
        Validator::validate_test_fraction(test_fraction)?;

        Ok(RegressionModel {
            config: RegressionConfig {
                spec,
                target,
                test_fraction,
                seed: self.seed.unwrap_or(DEFAULT_SEED),
            },
        })
    }
}

/// A configured regression ready to fit.
#[derive(Debug, Clone)]
pub struct RegressionModel<T> {
    config: RegressionConfig<T>,
}

impl<T: FloatLinalg + Debug> RegressionModel<T> {
    /// Fit on the observations.
    pub fn fit(&self, observations: &[Observation<T>]) -> Result<TrainedModel<T>, NatalityError> {
        RegressionTrainer::fit(observations, &self.config)
    }

    /// Raw base fields the feature list reads.
    pub fn base_fields(&self) -> &[String] {
        self.config.spec.base_fields()
    }

    /// Validated settings.
    pub fn config(&self) -> &RegressionConfig<T> {
        &self.config
    }
}

// ============================================================================
// Ranker Builder
// ============================================================================

/// Fluent builder for preference-based ranking.
#[derive(Debug, Clone)]
pub struct RankerBuilder<T: Float + Debug> {
    /// Ordered feature names.
    pub features: Option<Vec<String>>,

    /// Entity-side normalization.
    pub normalization: Option<NormalizationMethod<T>>,

    /// Upper bound of raw user preferences.
    pub preference_scale: Option<T>,

    /// Scoring strategy.
    pub strategy: Option<ScoringStrategy>,

    /// Entities never ranked.
    pub exclude: Option<Vec<String>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for RankerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> RankerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            features: None,
            normalization: None,
            preference_scale: None,
            strategy: None,
            exclude: None,
            duplicate_param: None,
        }
    }

    /// Set the ordered feature list.
    pub fn features<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        if self.features.is_some() {
            self.duplicate_param = Some("features");
        }
        self.features = Some(owned(names));
        self
    }

    /// Set the entity-side normalization method.
    pub fn normalization(mut self, method: NormalizationMethod<T>) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalization");
        }
        self.normalization = Some(method);
        self
    }

    /// Set the upper bound of raw user preferences.
    pub fn preference_scale(mut self, scale: T) -> Self {
        if self.preference_scale.is_some() {
            self.duplicate_param = Some("preference_scale");
        }
        self.preference_scale = Some(scale);
        self
    }

    /// Set the scoring strategy.
    pub fn strategy(mut self, strategy: ScoringStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Exclude entities (such as regional aggregates) from ranking.
    pub fn exclude<S: AsRef<str>>(mut self, entities: &[S]) -> Self {
        if self.exclude.is_some() {
            self.duplicate_param = Some("exclude");
        }
        self.exclude = Some(owned(entities));
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<SimilarityRanker<T>, NatalityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let feature_names = match self.features {
            Some(names) => names,
            None => owned(&FAMILY_FEATURES),
        };
        // Same non-empty/unique rules as regression features.
        FeatureSpec::new(&feature_names)?;

        let normalization = self.normalization.unwrap_or_default();
        if let NormalizationMethod::DivideByScale(scale) = normalization {
            Validator::validate_scale(scale)?;
        }

        let preference_scale = self
            .preference_scale
            .unwrap_or_else(|| cast(DEFAULT_PREFERENCE_SCALE));
        Validator::validate_scale(preference_scale)?;

        Ok(SimilarityRanker {
            config: RankerConfig {
                feature_names,
                normalization,
                preference_scale,
                strategy: self.strategy.unwrap_or_default(),
                exclude: self.exclude.unwrap_or_default(),
            },
        })
    }
}

/// A configured ranker.
#[derive(Debug, Clone)]
pub struct SimilarityRanker<T> {
    config: RankerConfig<T>,
}

impl<T: Float + Debug> SimilarityRanker<T> {
    /// Rank entities against raw user preferences.
    pub fn recommend<R>(
        &self,
        observations: &[Observation<T>],
        preferences: &R,
    ) -> Result<Recommendation<T>, NatalityError>
    where
        R: FieldSource<T> + ?Sized,
    {
        Recommender::recommend(observations, preferences, &self.config)
    }

    /// One normalized vector per usable entity.
    pub fn normalize_entities(
        &self,
        observations: &[Observation<T>],
    ) -> Result<Vec<NormalizedVector<T>>, NatalityError> {
        Recommender::normalize_entities(observations, &self.config)
    }

    /// Per-feature statistics over the selected entities.
    pub fn feature_summary(
        &self,
        observations: &[Observation<T>],
    ) -> Result<Vec<FeatureSummary<T>>, NatalityError> {
        let entities = Recommender::select(observations, &self.config)?;
        describe(&entities, &self.config.feature_names)
    }

    /// Validated settings.
    pub fn config(&self) -> &RankerConfig<T> {
        &self.config
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Fit a regression with the default seed and test fraction.
pub fn fit<T, S>(
    observations: &[Observation<T>],
    feature_names: &[S],
    target_name: &str,
) -> Result<TrainedModel<T>, NatalityError>
where
    T: FloatLinalg + Debug,
    S: AsRef<str>,
{
    RegressionBuilder::new()
        .features(feature_names)
        .target(target_name)
        .build()?
        .fit(observations)
}

/// Predict with a trained model.
pub fn predict<T, R>(
    model: &TrainedModel<T>,
    input_row: &R,
    clamp_non_negative: bool,
) -> Result<T, NatalityError>
where
    T: Float,
    R: FieldSource<T> + ?Sized,
{
    model.predict(input_row, clamp_non_negative)
}

/// Select one complete observation per entity and normalize it.
pub fn normalize_entities<T, S>(
    observations: &[Observation<T>],
    feature_names: &[S],
    method: NormalizationMethod<T>,
) -> Result<Vec<NormalizedVector<T>>, NatalityError>
where
    T: Float,
    S: AsRef<str>,
{
    if observations.is_empty() {
        return Err(NatalityError::EmptyInput);
    }
    let entities = select_latest(observations, feature_names, &[] as &[&str]);
    method.apply(&entities)
}
