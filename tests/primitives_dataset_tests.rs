#![cfg(feature = "dev")]

use std::collections::{BTreeMap, HashMap};

use natality_rs::internals::primitives::dataset::{
    BIRTH_RATE_FEATURES, FAMILY_FEATURES, FieldSource, Observation,
};

// ============================================================================
// Observation Tests
// ============================================================================

#[test]
fn test_observation_builder() {
    let obs = Observation::new("DE")
        .with("weekly_hours", 34.5)
        .with("year", 2021.0)
        .with_opt("cash_per_capita", None);

    assert_eq!(obs.entity, "DE");
    assert_eq!(obs.fields.len(), 2);
    assert_eq!(obs.year(), Some(2021.0));
    assert_eq!(obs.value("cash_per_capita"), None);
}

#[test]
fn test_observation_nan_is_missing() {
    let mut obs = Observation::new("FR").with("weekly_hours", f64::NAN);
    assert!(obs.field("weekly_hours").is_some());
    assert_eq!(obs.value("weekly_hours"), None);
    assert!(!obs.is_complete(&["weekly_hours"]));

    obs.set("weekly_hours", 35.0);
    assert!(obs.is_complete(&["weekly_hours"]));
}

#[test]
fn test_observation_is_complete() {
    let obs = Observation::new("IT")
        .with("weekly_hours", 36.0)
        .with("cash_per_capita", 300.0)
        .with("maternity_per_capita", 120.0);

    assert!(!obs.is_complete(&FAMILY_FEATURES));
    assert!(obs.is_complete(&FAMILY_FEATURES[..3]));
}

// ============================================================================
// FieldSource Tests
// ============================================================================

#[test]
fn test_field_source_maps_and_slices() {
    let mut btree = BTreeMap::new();
    btree.insert("year".to_string(), 2020.0);
    assert_eq!(btree.value("year"), Some(2020.0));
    assert_eq!(btree.value("weekly_hours"), None);

    let mut hash = HashMap::new();
    hash.insert("year".to_string(), 2019.0);
    assert_eq!(hash.value("year"), Some(2019.0));

    let pairs = [("year", 2018.0), ("weekly_hours", f64::NAN)];
    assert_eq!(pairs.value("year"), Some(2018.0));
    assert_eq!(pairs.value("weekly_hours"), None);
    assert_eq!(pairs.as_slice().value("year"), Some(2018.0));
}

#[test]
fn test_default_feature_lists() {
    assert_eq!(FAMILY_FEATURES.len(), 4);
    assert!(BIRTH_RATE_FEATURES.contains(&"cash_per_capita_squared"));
    assert!(!BIRTH_RATE_FEATURES.contains(&"cash_per_capita"));
}
