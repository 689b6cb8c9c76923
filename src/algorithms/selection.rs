//! Per-entity observation selection.
//!
//! ## Purpose
//!
//! This module reduces a multi-period table to one feature vector per entity
//! for similarity ranking, and builds a prediction input from an entity's
//! history.
//!
//! ## Design notes
//!
//! * **Ordering rule**: For each entity the chosen row maximizes
//!   `(complete, year)`: rows with every feature present beat partial rows,
//!   then the most recent year wins. A missing year sorts below any year.
//! * **Stable ties**: Among rows with equal keys the first one seen is kept.
//!   Output follows the order in which entities first appear.
//!
//! ## Invariants
//!
//! * Every returned `EntityVector` has one finite value per feature.
//! * Each entity appears at most once.
//!
//! ## Non-goals
//!
//! * This module does not impute missing features for ranking.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, collections::BTreeMap, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, string::String, vec::Vec};

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::{FieldSource, Observation, YEAR};
use crate::primitives::errors::NatalityError;

/// One entity's feature values, in feature-list order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityVector<T> {
    /// Entity identifier.
    pub entity: String,

    /// Year of the selected observation, if recorded.
    pub year: Option<T>,

    /// Feature values.
    pub values: Vec<T>,
}

impl<T: Float> EntityVector<T> {
    /// Create an entity vector directly.
    pub fn new(entity: impl Into<String>, year: Option<T>, values: Vec<T>) -> Self {
        Self {
            entity: entity.into(),
            year,
            values,
        }
    }
}

/// Compare two optional years, treating `None` as the oldest.
#[inline]
fn cmp_year<T: Float>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Pick one complete observation per entity ("completeness desc, year desc").
///
/// Entities listed in `exclude` are skipped. Entities with no complete
/// observation are dropped.
pub fn select_latest<T, S, E>(
    observations: &[Observation<T>],
    feature_names: &[S],
    exclude: &[E],
) -> Vec<EntityVector<T>>
where
    T: Float,
    S: AsRef<str>,
    E: AsRef<str>,
{
    // (best observation index, complete)
    let mut best: Vec<(usize, bool)> = Vec::new();
    let mut slots: BTreeMap<&str, usize> = BTreeMap::new();

    for (i, obs) in observations.iter().enumerate() {
        if exclude.iter().any(|e| e.as_ref() == obs.entity) {
            continue;
        }
        let complete = obs.is_complete(feature_names);

        match slots.get(obs.entity.as_str()) {
            None => {
                slots.insert(obs.entity.as_str(), best.len());
                best.push((i, complete));
            }
            Some(&slot) => {
                let (j, current_complete) = best[slot];
                let order = complete
                    .cmp(&current_complete)
                    .then_with(|| cmp_year(obs.year(), observations[j].year()));
                if order == Ordering::Greater {
                    best[slot] = (i, complete);
                }
            }
        }
    }

    best.into_iter()
        .filter(|&(_, complete)| complete)
        .filter_map(|(i, _)| {
            let obs = &observations[i];
            let values: Option<Vec<T>> = feature_names
                .iter()
                .map(|n| obs.value(n.as_ref()))
                .collect();
            Some(EntityVector {
                entity: obs.entity.clone(),
                year: obs.year(),
                values: values?,
            })
        })
        .collect()
}

/// Build a prediction input from an entity's most recent prior observation.
///
/// The latest observation whose year differs from `predict_year` and which
/// has every base field other than `year` is taken. `year` is then set to
/// `predict_year`.
pub fn prediction_input<T, S>(
    observations: &[Observation<T>],
    entity: &str,
    predict_year: T,
    base_fields: &[S],
) -> Result<BTreeMap<String, T>, NatalityError>
where
    T: Float,
    S: AsRef<str>,
{
    let latest = observations
        .iter()
        .filter(|o| o.entity == entity)
        .filter(|o| o.year().is_some_and(|y| y != predict_year))
        .filter(|o| {
            base_fields
                .iter()
                .map(AsRef::as_ref)
                .filter(|&f| f != YEAR)
                .all(|f| o.value(f).is_some())
        })
        .fold(None::<&Observation<T>>, |acc, o| match acc {
            Some(a) if cmp_year(o.year(), a.year()) != Ordering::Greater => Some(a),
            _ => Some(o),
        })
        .ok_or_else(|| NatalityError::UnknownEntity(entity.to_owned()))?;

    let mut input: BTreeMap<String, T> = base_fields
        .iter()
        .map(|f| {
            let name = f.as_ref();
            (name.to_owned(), latest.value(name).unwrap_or_else(T::zero))
        })
        .collect();
    input.insert(YEAR.to_owned(), predict_year);

    Ok(input)
}
