//! Result types returned by the engines.
//!
//! ## Purpose
//!
//! This module defines `TrainedModel`, the immutable value produced by a
//! regression fit and consumed by every prediction, and `Recommendation`,
//! the ranked output of the similarity engine. Both render a plain-text
//! report through `Display`.
//!
//! ## Design notes
//!
//! * **Explicit state**: A prediction depends only on the `TrainedModel`
//!   passed to it. Persisting or caching the model is the caller's concern;
//!   with the `serde` feature both types serialize directly.
//! * **Frozen statistics**: Predictions standardize with the training mean
//!   and std stored in the model, never with statistics of the input.
//!
//! ## Invariants
//!
//! * `beta.len() == feature_names.len() + 1 == statistics.len() + 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::FeatureSpec;
use crate::algorithms::ols::OrdinaryLeastSquares;
use crate::algorithms::similarity::{RankedEntity, ScoringStrategy};
use crate::algorithms::standardize::FeatureStatistics;
use crate::evaluation::metrics::EvaluationMetrics;
use crate::primitives::dataset::FieldSource;
use crate::primitives::errors::NatalityError;

/// Name reported for `beta[0]`.
pub const INTERCEPT: &str = "intercept";

// ============================================================================
// Trained Model
// ============================================================================

/// Metrics on both partitions of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelEvaluation<T> {
    /// Metrics on the held-out test partition.
    pub test: EvaluationMetrics<T>,

    /// In-sample metrics on the training partition.
    pub train: EvaluationMetrics<T>,
}

/// Coefficients, frozen feature statistics, and evaluation of one fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainedModel<T> {
    /// Intercept followed by one coefficient per standardized feature.
    pub beta: Vec<T>,

    /// Feature names in coefficient order.
    pub feature_names: Vec<String>,

    /// Name of the regression target.
    pub target_name: String,

    /// Training-partition mean and std per feature.
    pub statistics: FeatureStatistics<T>,

    /// Goodness of fit.
    pub evaluation: ModelEvaluation<T>,
}

impl<T: Float> TrainedModel<T> {
    /// Rebuild a model from persisted parts, checking their shapes agree.
    pub fn from_parts<S: AsRef<str>>(
        feature_names: &[S],
        target_name: impl Into<String>,
        beta: Vec<T>,
        statistics: FeatureStatistics<T>,
        evaluation: ModelEvaluation<T>,
    ) -> Result<Self, NatalityError> {
        let spec = FeatureSpec::new(feature_names)?;
        if beta.len() != spec.len() + 1 {
            return Err(NatalityError::MismatchedDimensions {
                expected: spec.len() + 1,
                got: beta.len(),
            });
        }
        if statistics.len() != spec.len() {
            return Err(NatalityError::MismatchedDimensions {
                expected: spec.len(),
                got: statistics.len(),
            });
        }
        if beta.iter().any(|b| !b.is_finite()) {
            return Err(NatalityError::InvalidNumericValue(
                "non-finite coefficient".into(),
            ));
        }
        let statistics = FeatureStatistics::from_parts(statistics.mean, statistics.std)?;

        Ok(Self {
            beta,
            feature_names: spec.names().to_vec(),
            target_name: target_name.into(),
            statistics,
            evaluation,
        })
    }

    /// The intercept `beta[0]`.
    #[inline]
    pub fn intercept(&self) -> T {
        self.beta[0]
    }

    /// `("intercept", β₀)` followed by `(feature, βᵢ)` pairs.
    pub fn coefficients(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        core::iter::once(INTERCEPT)
            .chain(self.feature_names.iter().map(String::as_str))
            .zip(self.beta.iter().copied())
    }

    /// Predict the target for one input row.
    ///
    /// Derived terms are recomputed from the raw base fields of `input`,
    /// standardized with the stored training statistics, and combined with
    /// `beta`. With `clamp_non_negative` the result is floored at zero.
    pub fn predict<R>(&self, input: &R, clamp_non_negative: bool) -> Result<T, NatalityError>
    where
        R: FieldSource<T> + ?Sized,
    {
        let spec = self.spec()?;
        self.predict_with(&spec, input, clamp_non_negative)
    }

    /// Predict the target for several input rows.
    pub fn predict_many<R>(
        &self,
        inputs: &[R],
        clamp_non_negative: bool,
    ) -> Result<Vec<T>, NatalityError>
    where
        R: FieldSource<T>,
    {
        let spec = self.spec()?;
        inputs
            .iter()
            .map(|row| self.predict_with(&spec, row, clamp_non_negative))
            .collect()
    }

    fn spec(&self) -> Result<FeatureSpec, NatalityError> {
        let spec = FeatureSpec::new(&self.feature_names)?;
        if self.beta.len() != spec.len() + 1 || self.statistics.len() != spec.len() {
            return Err(NatalityError::MismatchedDimensions {
                expected: spec.len() + 1,
                got: self.beta.len(),
            });
        }
        Ok(spec)
    }

    fn predict_with<R>(
        &self,
        spec: &FeatureSpec,
        input: &R,
        clamp_non_negative: bool,
    ) -> Result<T, NatalityError>
    where
        R: FieldSource<T> + ?Sized,
    {
        let mut row = spec.derive(input)?;
        self.statistics.transform_row(&mut row);
        let raw = OrdinaryLeastSquares::predict_row(&self.beta, &row);

        Ok(if clamp_non_negative {
            raw.max(T::zero())
        } else {
            raw
        })
    }
}

fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

fn write_metrics<T: Float>(
    out: &mut Formatter<'_>,
    title: &str,
    m: &EvaluationMetrics<T>,
) -> fmt::Result {
    writeln!(out, "{} ({} rows):", title, m.n)?;
    writeln!(out, "  MAE:   {:.6}", as_f64(m.mae))?;
    writeln!(out, "  MSE:   {:.6}", as_f64(m.mse))?;
    writeln!(out, "  RMSE:  {:.6}", as_f64(m.rmse))?;
    writeln!(out, "  R^2:   {:.6}", as_f64(m.r_squared))
}

impl<T: Float> Display for TrainedModel<T> {
    fn fmt(&self, out: &mut Formatter<'_>) -> fmt::Result {
        writeln!(out, "Summary:")?;
        writeln!(out, "  Target: {}", self.target_name)?;
        writeln!(out, "  Features: {}", self.feature_names.len())?;
        writeln!(out)?;

        write_metrics(out, "Test Evaluation", &self.evaluation.test)?;
        writeln!(out)?;
        write_metrics(out, "Train Evaluation", &self.evaluation.train)?;
        writeln!(out)?;

        writeln!(out, "Coefficients:")?;
        writeln!(
            out,
            "  {:<32} {:>14} {:>14} {:>14}",
            "Term", "Beta", "Mean", "Std"
        )?;
        writeln!(out, "  {}", "-".repeat(77))?;
        writeln!(out, "  {:<32} {:>14.6}", INTERCEPT, as_f64(self.intercept()))?;
        for (i, name) in self.feature_names.iter().enumerate() {
            writeln!(
                out,
                "  {:<32} {:>14.6} {:>14.4} {:>14.4}",
                name,
                as_f64(self.beta[i + 1]),
                as_f64(self.statistics.mean[i]),
                as_f64(self.statistics.std[i])
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Recommendation
// ============================================================================

/// Ranked output of the similarity engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation<T> {
    /// Strategy used for scoring.
    pub strategy: ScoringStrategy,

    /// Feature names in vector order.
    pub feature_names: Vec<String>,

    /// Scaled preference vector (cosine) or L1-normalized weights (weighted).
    pub query: Vec<T>,

    /// Entities ordered by descending score.
    pub rankings: Vec<RankedEntity<T>>,
}

impl<T> Recommendation<T> {
    /// The best `n` entries (or all if fewer).
    pub fn top(&self, n: usize) -> &[RankedEntity<T>] {
        &self.rankings[..n.min(self.rankings.len())]
    }

    /// Number of ranked entities.
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    /// Whether no entity was ranked.
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}

impl<T: Float> Display for Recommendation<T> {
    fn fmt(&self, out: &mut Formatter<'_>) -> fmt::Result {
        writeln!(out, "Summary:")?;
        writeln!(out, "  Strategy: {:?}", self.strategy)?;
        writeln!(out, "  Entities: {}", self.rankings.len())?;
        writeln!(out)?;

        write!(out, "  {:>4}  {:<10} {:>8} {:>6}", "Rank", "Entity", "Score", "Year")?;
        for name in &self.feature_names {
            write!(out, " {:>22}", name)?;
        }
        writeln!(out)?;
        writeln!(out, "  {}", "-".repeat(32 + 23 * self.feature_names.len()))?;

        for (i, r) in self.rankings.iter().enumerate() {
            write!(
                out,
                "  {:>4}  {:<10} {:>8.4} {:>6}",
                i + 1,
                r.entity,
                as_f64(r.score),
                r.year.map(|y| as_f64(y) as i64).unwrap_or_default()
            )?;
            for &v in &r.raw {
                write!(out, " {:>22.2}", as_f64(v))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
