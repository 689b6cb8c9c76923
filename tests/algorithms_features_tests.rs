#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use natality_rs::internals::algorithms::features::{FeatureSpec, FeatureTerm};
use natality_rs::internals::primitives::errors::NatalityError;

// ============================================================================
// Term Parsing Tests
// ============================================================================

#[test]
fn test_parse_terms() {
    assert_eq!(
        FeatureTerm::parse("weekly_hours"),
        FeatureTerm::Base("weekly_hours".into())
    );
    assert_eq!(
        FeatureTerm::parse("cash_per_capita_squared"),
        FeatureTerm::Power {
            base: "cash_per_capita".into(),
            exponent: 2
        }
    );
    assert_eq!(
        FeatureTerm::parse("services_per_capita_cubed"),
        FeatureTerm::Power {
            base: "services_per_capita".into(),
            exponent: 3
        }
    );
    // A bare suffix is an ordinary field name.
    assert_eq!(
        FeatureTerm::parse("_squared"),
        FeatureTerm::Base("_squared".into())
    );
}

// ============================================================================
// Spec Construction Tests
// ============================================================================

#[test]
fn test_spec_base_fields_deduplicated() {
    let spec = FeatureSpec::new(&[
        "weekly_hours",
        "weekly_hours_squared",
        "cash_per_capita_squared",
        "year",
    ])
    .unwrap();

    assert_eq!(spec.len(), 4);
    assert_eq!(
        spec.base_fields(),
        &["weekly_hours", "cash_per_capita", "year"]
    );
}

#[test]
fn test_spec_rejects_bad_lists() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        FeatureSpec::new(&empty),
        Err(NatalityError::InvalidFeatureList(_))
    ));
    assert!(matches!(
        FeatureSpec::new(&["year", ""]),
        Err(NatalityError::InvalidFeatureList(_))
    ));
    assert!(matches!(
        FeatureSpec::new(&["year", "year"]),
        Err(NatalityError::InvalidFeatureList(_))
    ));
}

// ============================================================================
// Derivation Tests
// ============================================================================

#[test]
fn test_derive_squared_and_cubed() {
    let spec = FeatureSpec::new(&["weekly_hours", "weekly_hours_squared", "weekly_hours_cubed"])
        .unwrap();
    let row = [("weekly_hours", 3.0)];
    let derived = spec.derive(&row).unwrap();

    assert_relative_eq!(derived[0], 3.0);
    assert_relative_eq!(derived[1], 9.0);
    assert_relative_eq!(derived[2], 27.0);
}

#[test]
fn test_derive_missing_base_field() {
    let spec = FeatureSpec::new(&["weekly_hours", "cash_per_capita_squared"]).unwrap();
    let row = [("weekly_hours", 38.0)];

    assert!(!spec.is_complete(&row));
    assert_eq!(
        spec.derive(&row),
        Err(NatalityError::MissingFeature("cash_per_capita".into()))
    );
}

#[test]
fn test_derive_nan_counts_as_missing() {
    let spec = FeatureSpec::new(&["year"]).unwrap();
    let row = [("year", f64::NAN)];
    assert_eq!(
        spec.derive(&row),
        Err(NatalityError::MissingFeature("year".into()))
    );
}

#[test]
fn test_derive_infinite_value_rejected() {
    let spec = FeatureSpec::new(&["cash_per_capita"]).unwrap();
    let row = [("cash_per_capita", f64::INFINITY)];
    assert!(matches!(
        spec.derive(&row),
        Err(NatalityError::InvalidNumericValue(_))
    ));
}
