#![cfg(feature = "dev")]

use natality_rs::internals::algorithms::selection::{prediction_input, select_latest};
use natality_rs::internals::primitives::dataset::{FAMILY_FEATURES, Observation};
use natality_rs::internals::primitives::errors::NatalityError;

fn full(entity: &str, year: f64, base: f64) -> Observation<f64> {
    Observation::new(entity)
        .with("weekly_hours", base)
        .with("cash_per_capita", base * 10.0)
        .with("maternity_per_capita", base * 5.0)
        .with("services_per_capita", base * 20.0)
        .with("year", year)
}

const NONE: [&str; 0] = [];

// ============================================================================
// Latest-Row Selection Tests
// ============================================================================

#[test]
fn test_select_latest_complete_row() {
    let rows = vec![
        full("DE", 2019.0, 30.0),
        full("DE", 2021.0, 31.0),
        full("DE", 2020.0, 32.0),
    ];
    let selected = select_latest(&rows, &FAMILY_FEATURES, &NONE);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].year, Some(2021.0));
    assert_eq!(selected[0].values[0], 31.0);
}

#[test]
fn test_completeness_beats_recency() {
    // The newest row lacks services spending.
    let mut newest = full("NL", 2023.0, 40.0);
    newest.fields.remove("services_per_capita");
    let rows = vec![full("NL", 2020.0, 33.0), newest, full("NL", 2018.0, 35.0)];

    let selected = select_latest(&rows, &FAMILY_FEATURES, &NONE);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].year, Some(2020.0));
}

#[test]
fn test_entities_without_complete_rows_are_dropped() {
    let partial = Observation::new("MT")
        .with("weekly_hours", 40.0)
        .with("year", 2022.0);
    let rows = vec![partial, full("SE", 2022.0, 31.0)];

    let selected = select_latest(&rows, &FAMILY_FEATURES, &NONE);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].entity, "SE");
}

#[test]
fn test_first_appearance_order_and_exclusion() {
    let rows = vec![
        full("FR", 2020.0, 35.0),
        full("EU27", 2020.0, 36.0),
        full("AT", 2020.0, 34.0),
        full("FR", 2021.0, 35.5),
    ];
    let selected = select_latest(&rows, &FAMILY_FEATURES, &["EU27"]);
    let names: Vec<&str> = selected.iter().map(|e| e.entity.as_str()).collect();
    assert_eq!(names, vec!["FR", "AT"]);
}

#[test]
fn test_equal_year_keeps_first_row() {
    let rows = vec![full("PL", 2021.0, 39.0), full("PL", 2021.0, 41.0)];
    let selected = select_latest(&rows, &FAMILY_FEATURES, &NONE);
    assert_eq!(selected[0].values[0], 39.0);
}

// ============================================================================
// Prediction Input Tests
// ============================================================================

#[test]
fn test_prediction_input_uses_latest_other_year() {
    let rows = vec![
        full("ES", 2019.0, 38.0),
        full("ES", 2021.0, 37.0),
        full("ES", 2025.0, 99.0),
    ];

    let input = prediction_input(&rows, "ES", 2025.0, &FAMILY_FEATURES).unwrap();
    assert_eq!(input["weekly_hours"], 37.0);
    assert_eq!(input["maternity_per_capita"], 185.0);
    assert_eq!(input["year"], 2025.0);
}

#[test]
fn test_prediction_input_skips_incomplete_recent_row() {
    let complete = Observation::new("SE")
        .with("weekly_hours", 36.0)
        .with("cash_per_capita", 800.0)
        .with("maternity_per_capita", 400.0)
        .with("services_per_capita", 1500.0)
        .with("year", 2022.0);
    let partial = Observation::new("SE")
        .with("cash_per_capita", 820.0)
        .with("year", 2023.0);
    let rows = vec![complete, partial];
    let base = [
        "weekly_hours",
        "cash_per_capita",
        "maternity_per_capita",
        "services_per_capita",
        "year",
    ];

    let input = prediction_input(&rows, "SE", 2024.0, &base).unwrap();
    assert_eq!(input["weekly_hours"], 36.0);
    assert_eq!(input["cash_per_capita"], 800.0);
    assert_eq!(input["maternity_per_capita"], 400.0);
    assert_eq!(input["services_per_capita"], 1500.0);
    assert_eq!(input["year"], 2024.0);
}

#[test]
fn test_prediction_input_requires_complete_row() {
    let partial = Observation::new("MT")
        .with("weekly_hours", 40.0)
        .with("year", 2022.0);
    assert_eq!(
        prediction_input(&[partial], "MT", 2024.0, &FAMILY_FEATURES),
        Err(NatalityError::UnknownEntity("MT".into()))
    );
}

#[test]
fn test_prediction_input_unknown_entity() {
    let rows = vec![full("ES", 2021.0, 37.0)];
    assert_eq!(
        prediction_input(&rows, "XX", 2025.0, &FAMILY_FEATURES),
        Err(NatalityError::UnknownEntity("XX".into()))
    );
}
