//! In-memory observation rows and named-field access.
//!
//! ## Purpose
//!
//! This module defines the row type consumed by both engines. An
//! `Observation` is one (entity, period) record holding named numeric fields,
//! already materialized by the caller from a relational query or flat file.
//!
//! ## Design notes
//!
//! * **Schema-free**: Fields are looked up by name so the engines are driven by
//!   explicit feature lists rather than a fixed struct layout.
//! * **Missing values**: An absent field and a NaN field are both "missing".
//! * **Seam trait**: `FieldSource` lets prediction accept an `Observation`, a
//!   `BTreeMap`, or (with `std`) a `HashMap` interchangeably.
//!
//! ## Non-goals
//!
//! * This module does not parse files or open database connections.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String};
#[cfg(feature = "std")]
use std::{
    collections::{BTreeMap, HashMap},
    string::String,
};

use num_traits::Float;

// ============================================================================
// Column names
// ============================================================================

/// Average weekly working hours.
pub const WEEKLY_HOURS: &str = "weekly_hours";

/// Cash family benefits per capita.
pub const CASH_PER_CAPITA: &str = "cash_per_capita";

/// Maternity and parental leave spending per capita.
pub const MATERNITY_PER_CAPITA: &str = "maternity_per_capita";

/// Family services spending per capita.
pub const SERVICES_PER_CAPITA: &str = "services_per_capita";

/// Observation year.
pub const YEAR: &str = "year";

/// Regression target: live births per 1,000 people.
pub const BIRTH_RATE_PER_THOUSAND: &str = "birth_rate_per_thousand";

/// The four family-policy features used for similarity ranking, in order.
pub const FAMILY_FEATURES: [&str; 4] = [
    WEEKLY_HOURS,
    CASH_PER_CAPITA,
    MATERNITY_PER_CAPITA,
    SERVICES_PER_CAPITA,
];

/// Default regression feature list (base and derived terms).
pub const BIRTH_RATE_FEATURES: [&str; 7] = [
    WEEKLY_HOURS,
    MATERNITY_PER_CAPITA,
    SERVICES_PER_CAPITA,
    YEAR,
    "weekly_hours_squared",
    "cash_per_capita_squared",
    "services_per_capita_squared",
];

// ============================================================================
// FieldSource
// ============================================================================

/// Read access to named numeric fields.
///
/// Implementations return `None` for absent fields. NaN values are treated as
/// missing by [`FieldSource::value`].
pub trait FieldSource<T> {
    /// Raw lookup of a field, without the NaN filter.
    fn field(&self, name: &str) -> Option<T>;

    /// Lookup of a present, non-NaN field.
    #[inline]
    fn value(&self, name: &str) -> Option<T>
    where
        T: Float,
    {
        self.field(name).filter(|v| !v.is_nan())
    }
}

impl<T: Copy> FieldSource<T> for BTreeMap<String, T> {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        self.get(name).copied()
    }
}

#[cfg(feature = "std")]
impl<T: Copy, S: std::hash::BuildHasher> FieldSource<T> for HashMap<String, T, S> {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        self.get(name).copied()
    }
}

impl<T: Copy> FieldSource<T> for [(&str, T)] {
    fn field(&self, name: &str) -> Option<T> {
        self.iter().find(|(k, _)| *k == name).map(|&(_, v)| v)
    }
}

impl<T: Copy, const N: usize> FieldSource<T> for [(&str, T); N] {
    fn field(&self, name: &str) -> Option<T> {
        self.as_slice().field(name)
    }
}

// ============================================================================
// Observation
// ============================================================================

/// A single (entity, period) row with named numeric fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation<T> {
    /// Entity identifier (e.g. an ISO country code).
    pub entity: String,

    /// Named numeric fields. Absent keys are missing values.
    pub fields: BTreeMap<String, T>,
}

impl<T: Float> Observation<T> {
    /// Create an observation with no fields.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, name: impl Into<String>, value: T) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Builder-style setter for an optional field; `None` leaves it missing.
    pub fn with_opt(mut self, name: impl Into<String>, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.fields.insert(name.into(), v);
        }
        self
    }

    /// Set or overwrite a field.
    pub fn set(&mut self, name: impl Into<String>, value: T) {
        self.fields.insert(name.into(), value);
    }

    /// The observation year, if present.
    #[inline]
    pub fn year(&self) -> Option<T> {
        self.value(YEAR)
    }

    /// Whether every named field is present and not NaN.
    pub fn is_complete<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|n| self.value(n.as_ref()).is_some())
    }
}

impl<T: Copy> FieldSource<T> for Observation<T> {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        self.fields.get(name).copied()
    }
}
