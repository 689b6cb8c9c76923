//! Input validation for engine configuration and data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks run before any computation:
//! builder parameters, feature/target lists, partition sizes, and raw user
//! preferences.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter rows or impute values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::FeatureSpec;
use crate::primitives::dataset::FieldSource;
use crate::primitives::errors::NatalityError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration and input data.
///
/// Provides static methods that return `Result<(), NatalityError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), NatalityError> {
        if !val.is_finite() {
            return Err(NatalityError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that the target is named and is not also a feature.
    pub fn validate_target(target: &str, spec: &FeatureSpec) -> Result<(), NatalityError> {
        if target.is_empty() {
            return Err(NatalityError::InvalidFeatureList(
                "target name must be non-empty".into(),
            ));
        }
        if spec.names().iter().any(|n| n == target)
            || spec.base_fields().iter().any(|b| b == target)
        {
            return Err(NatalityError::InvalidFeatureList(format!(
                "target '{}' is also used as a feature",
                target
            )));
        }
        Ok(())
    }

    /// Validate partition sizes against the number of coefficients.
    ///
    /// The training partition needs at least one row per coefficient and
    /// the test partition at least one row.
    pub fn validate_partition(
        n_train: usize,
        n_test: usize,
        n_coeffs: usize,
    ) -> Result<(), NatalityError> {
        if n_train < n_coeffs {
            return Err(NatalityError::InsufficientData {
                got: n_train,
                min: n_coeffs,
            });
        }
        if n_test == 0 {
            return Err(NatalityError::InsufficientData {
                got: n_train + n_test,
                min: n_train + 1,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the held-out test fraction.
    pub fn validate_test_fraction<T: Float>(fraction: T) -> Result<(), NatalityError> {
        if !fraction.is_finite() || fraction <= T::zero() || fraction >= T::one() {
            return Err(NatalityError::InvalidTestFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a preference scale.
    pub fn validate_scale<T: Float>(scale: T) -> Result<(), NatalityError> {
        if !scale.is_finite() || scale <= T::zero() {
            return Err(NatalityError::InvalidScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Extract raw preferences in feature order, checking each lies in `[0, max]`.
    pub fn validate_preferences<T, R, S>(
        preferences: &R,
        feature_names: &[S],
        max: T,
    ) -> Result<Vec<T>, NatalityError>
    where
        T: Float,
        R: FieldSource<T> + ?Sized,
        S: AsRef<str>,
    {
        feature_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let value = preferences
                    .value(name)
                    .ok_or_else(|| NatalityError::MissingFeature(name.to_owned()))?;
                if !value.is_finite() || value < T::zero() || value > max {
                    return Err(NatalityError::InvalidPreference {
                        feature: name.to_owned(),
                        value: value.to_f64().unwrap_or(f64::NAN),
                        max: max.to_f64().unwrap_or(f64::NAN),
                    });
                }
                Ok(value)
            })
            .collect()
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NatalityError> {
        if let Some(param) = duplicate_param {
            return Err(NatalityError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
