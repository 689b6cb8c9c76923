//! Regression training pipeline.
//!
//! ## Purpose
//!
//! This module runs one complete fit: row filtering, feature derivation,
//! seeded train/test partitioning, standardization on the training
//! partition, the normal-equation solve, and evaluation on both partitions.
//!
//! ## Design notes
//!
//! * **Pure**: `fit` is a function of its inputs; there is no global or cached
//!   state, so concurrent callers need no coordination.
//! * **Row filtering**: A row participates only if every base field of the
//!   feature list and the target are present. Present but infinite values are
//!   rejected rather than dropped.
//!
//! ## Invariants
//!
//! * Identical inputs and seed give bit-identical models.
//! * Standardization statistics come from the training partition only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::algorithms::features::FeatureSpec;
use crate::algorithms::ols::OrdinaryLeastSquares;
use crate::algorithms::standardize::FeatureStatistics;
use crate::engine::output::{ModelEvaluation, TrainedModel};
use crate::engine::validator::Validator;
use crate::evaluation::metrics::EvaluationMetrics;
use crate::math::linalg::FloatLinalg;
use crate::primitives::dataset::{FieldSource, Observation};
use crate::primitives::errors::NatalityError;
use crate::primitives::partition::TrainTestSplit;

/// Validated regression settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionConfig<T> {
    /// Parsed feature list.
    pub spec: FeatureSpec,

    /// Target field name.
    pub target: String,

    /// Fraction of rows held out for evaluation.
    pub test_fraction: T,

    /// Shuffle seed.
    pub seed: u64,
}

/// Rows that survived filtering, as a row-major feature matrix and target.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedData<T> {
    /// Raw (unstandardized) derived features, `n_rows * n_features`.
    pub features: Vec<T>,

    /// Target values.
    pub target: Vec<T>,

    /// Number of feature columns.
    pub n_features: usize,
}

impl<T> PreparedData<T> {
    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Whether no rows survived filtering.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Gather the given rows into a new feature matrix and target vector.
    fn gather(&self, rows: &[usize]) -> (Vec<T>, Vec<T>)
    where
        T: Copy,
    {
        let p = self.n_features;
        let mut x = Vec::with_capacity(rows.len() * p);
        let mut y = Vec::with_capacity(rows.len());
        for &r in rows {
            x.extend_from_slice(&self.features[r * p..(r + 1) * p]);
            y.push(self.target[r]);
        }
        (x, y)
    }
}

/// Regression trainer.
pub struct RegressionTrainer;

impl RegressionTrainer {
    /// Drop incomplete rows and derive the feature matrix.
    pub fn prepare<T: FloatLinalg>(
        observations: &[Observation<T>],
        spec: &FeatureSpec,
        target: &str,
    ) -> Result<PreparedData<T>, NatalityError> {
        let mut features = Vec::with_capacity(observations.len() * spec.len());
        let mut y = Vec::with_capacity(observations.len());

        for row in observations {
            let Some(yi) = row.value(target) else {
                continue;
            };
            if !spec.is_complete(row) {
                continue;
            }
            Validator::validate_scalar(yi, target)?;
            spec.derive_into(row, &mut features)?;
            y.push(yi);
        }

        Ok(PreparedData {
            features,
            target: y,
            n_features: spec.len(),
        })
    }

    /// Fit a model on `observations`.
    pub fn fit<T: FloatLinalg>(
        observations: &[Observation<T>],
        config: &RegressionConfig<T>,
    ) -> Result<TrainedModel<T>, NatalityError> {
        if observations.is_empty() {
            return Err(NatalityError::EmptyInput);
        }

        let p = config.spec.len();
        let k = p + 1;

        // Step 1-2: filter and derive
        let data = Self::prepare(observations, &config.spec, &config.target)?;
        if data.is_empty() {
            return Err(NatalityError::InsufficientData { got: 0, min: k });
        }

        // Step 3: partition
        let split = TrainTestSplit::new(data.len(), config.test_fraction, config.seed);
        Validator::validate_partition(split.train.len(), split.test.len(), k)?;
        let (mut x_train, y_train) = data.gather(&split.train);
        let (mut x_test, y_test) = data.gather(&split.test);

        // Step 4: standardize with training statistics
        let statistics = FeatureStatistics::fit(&x_train, p);
        statistics.transform(&mut x_train);
        statistics.transform(&mut x_test);

        // Step 5: normal equation
        let design = OrdinaryLeastSquares::design_matrix(&x_train, p);
        let beta = OrdinaryLeastSquares::solve(&design, &y_train, k)?;

        // Step 6: evaluate
        let test_pred = OrdinaryLeastSquares::predict(&beta, &x_test, p);
        let train_pred = OrdinaryLeastSquares::predict(&beta, &x_train, p);
        let evaluation = ModelEvaluation {
            test: EvaluationMetrics::compute(&y_test, &test_pred)?,
            train: EvaluationMetrics::compute(&y_train, &train_pred)?,
        };

        Ok(TrainedModel {
            beta,
            feature_names: config.spec.names().to_vec(),
            target_name: config.target.clone(),
            statistics,
            evaluation,
        })
    }
}
