//! Feature derivation shared by training and prediction.
//!
//! ## Purpose
//!
//! This module turns an ordered list of feature names into the numeric
//! feature vector for one row. Names ending in `_squared` or `_cubed` are
//! derived terms computed from their base field; every other name is read
//! directly.
//!
//! ## Design notes
//!
//! * **Single derivation path**: `fit` and `predict` both call
//!   [`FeatureSpec::derive_into`], so the two sites cannot disagree on how a
//!   derived term is computed.
//! * **Raw inputs only**: A derived term is always recomputed from its base
//!   field, even if the row happens to carry a column of the same name.
//!
//! ## Key concepts
//!
//! * **Base fields**: The distinct raw columns a feature list depends on.
//!   A row participates in training only if all base fields are present.
//!
//! ## Invariants
//!
//! * Feature names are non-empty and unique.
//! * The derived vector has exactly `len()` entries in feature-list order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::FieldSource;
use crate::primitives::errors::NatalityError;

const SQUARED_SUFFIX: &str = "_squared";
const CUBED_SUFFIX: &str = "_cubed";

// ============================================================================
// Feature Term
// ============================================================================

/// One column of the regression input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureTerm {
    /// A raw field read as-is.
    Base(String),

    /// A base field raised to an integer power.
    Power {
        /// Name of the raw field.
        base: String,
        /// Exponent (2 for `_squared`, 3 for `_cubed`).
        exponent: i32,
    },
}

impl FeatureTerm {
    /// Classify a feature name.
    pub fn parse(name: &str) -> Self {
        let power = |suffix: &str, exponent| {
            name.strip_suffix(suffix)
                .filter(|base| !base.is_empty())
                .map(|base| FeatureTerm::Power {
                    base: base.to_owned(),
                    exponent,
                })
        };
        power(SQUARED_SUFFIX, 2)
            .or_else(|| power(CUBED_SUFFIX, 3))
            .unwrap_or_else(|| FeatureTerm::Base(name.to_owned()))
    }

    /// Name of the raw field this term reads.
    #[inline]
    pub fn base(&self) -> &str {
        match self {
            FeatureTerm::Base(name) => name,
            FeatureTerm::Power { base, .. } => base,
        }
    }

    /// Compute the term for a row, or `None` if its base field is missing.
    #[inline]
    pub fn evaluate<T: Float, R: FieldSource<T> + ?Sized>(&self, row: &R) -> Option<T> {
        let raw = row.value(self.base())?;
        Some(match self {
            FeatureTerm::Base(_) => raw,
            FeatureTerm::Power { exponent, .. } => raw.powi(*exponent),
        })
    }
}

// ============================================================================
// Feature Spec
// ============================================================================

/// An ordered, validated feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpec {
    names: Vec<String>,
    terms: Vec<FeatureTerm>,
    bases: Vec<String>,
}

impl FeatureSpec {
    /// Parse and validate a feature list.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, NatalityError> {
        if names.is_empty() {
            return Err(NatalityError::InvalidFeatureList(
                "at least one feature is required".into(),
            ));
        }

        let mut owned: Vec<String> = Vec::with_capacity(names.len());
        let mut bases: Vec<String> = Vec::new();
        let mut terms = Vec::with_capacity(names.len());

        for name in names.iter().map(AsRef::as_ref) {
            if name.is_empty() {
                return Err(NatalityError::InvalidFeatureList(
                    "feature names must be non-empty".into(),
                ));
            }
            if owned.iter().any(|n| n == name) {
                return Err(NatalityError::InvalidFeatureList(format!(
                    "duplicate feature '{}'",
                    name
                )));
            }

            let term = FeatureTerm::parse(name);
            if !bases.iter().any(|b| b == term.base()) {
                bases.push(term.base().to_owned());
            }
            owned.push(name.to_owned());
            terms.push(term);
        }

        Ok(Self {
            names: owned,
            terms,
            bases,
        })
    }

    /// Feature names in model order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Parsed terms in model order.
    #[inline]
    pub fn terms(&self) -> &[FeatureTerm] {
        &self.terms
    }

    /// Distinct raw fields required by the feature list.
    #[inline]
    pub fn base_fields(&self) -> &[String] {
        &self.bases
    }

    /// Number of features.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the list is empty (never true for a validated spec).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether every base field is present in the row.
    pub fn is_complete<T: Float, R: FieldSource<T> + ?Sized>(&self, row: &R) -> bool {
        self.bases.iter().all(|b| row.value(b).is_some())
    }

    /// Append the derived feature vector of `row` to `out`.
    ///
    /// Fails with `MissingFeature` naming the first absent base field, and
    /// with `InvalidNumericValue` if a term is not finite.
    pub fn derive_into<T: Float, R: FieldSource<T> + ?Sized>(
        &self,
        row: &R,
        out: &mut Vec<T>,
    ) -> Result<(), NatalityError> {
        for (name, term) in self.names.iter().zip(&self.terms) {
            let value = term
                .evaluate(row)
                .ok_or_else(|| NatalityError::MissingFeature(term.base().to_owned()))?;
            if !value.is_finite() {
                return Err(NatalityError::InvalidNumericValue(format!(
                    "{}={}",
                    name,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
            out.push(value);
        }
        Ok(())
    }

    /// Derived feature vector of `row`.
    pub fn derive<T: Float, R: FieldSource<T> + ?Sized>(
        &self,
        row: &R,
    ) -> Result<Vec<T>, NatalityError> {
        let mut out = Vec::with_capacity(self.len());
        self.derive_into(row, &mut out)?;
        Ok(out)
    }
}
