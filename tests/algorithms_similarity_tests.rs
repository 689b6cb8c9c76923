#![cfg(feature = "dev")]
//! Tests for entity normalization and similarity scoring.
//!
//! ## Test Organization
//!
//! 1. **Normalization** - min-max bounds, flat features, divide-by-scale
//! 2. **Cosine ranking** - ordering, zero norms, tie stability
//! 3. **Weighted scoring** - L1-normalized weights

use approx::assert_relative_eq;
use natality_rs::internals::algorithms::normalization::{NormalizationMethod, NormalizedVector};
use natality_rs::internals::algorithms::selection::EntityVector;
use natality_rs::internals::algorithms::similarity::{
    ScoringStrategy, normalize_weights, rank, weighted_score,
};
use natality_rs::internals::primitives::errors::NatalityError;

fn entity(name: &str, values: &[f64]) -> EntityVector<f64> {
    EntityVector::new(name, Some(2022.0), values.to_vec())
}

fn normalized(name: &str, values: &[f64]) -> NormalizedVector<f64> {
    NormalizedVector {
        entity: name.to_string(),
        year: Some(2022.0),
        values: values.to_vec(),
        raw: values.to_vec(),
    }
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_min_max_bounds() {
    let entities = vec![
        entity("A", &[30.0, 100.0, 5.0]),
        entity("B", &[40.0, 300.0, 5.0]),
        entity("C", &[35.0, 200.0, 5.0]),
    ];
    let out = NormalizationMethod::MinMax.apply(&entities).unwrap();

    for v in out.iter().flat_map(|e| &e.values) {
        assert!((0.0..=1.0).contains(v));
    }
    assert_relative_eq!(out[0].values[0], 0.0);
    assert_relative_eq!(out[1].values[0], 1.0);
    assert_relative_eq!(out[2].values[1], 0.5);
    assert_eq!(out[2].raw, vec![35.0, 200.0, 5.0]);
}

#[test]
fn test_flat_feature_maps_to_half() {
    let entities = vec![entity("A", &[1.0, 7.0]), entity("B", &[2.0, 7.0])];
    let out = NormalizationMethod::MinMax.apply(&entities).unwrap();
    assert_eq!(out[0].values[1], 0.5);
    assert_eq!(out[1].values[1], 0.5);
}

#[test]
fn test_single_entity_is_all_half() {
    let out = NormalizationMethod::MinMax
        .apply(&[entity("A", &[1.0, 2.0, 3.0])])
        .unwrap();
    assert_eq!(out[0].values, vec![0.5, 0.5, 0.5]);
}

#[test]
fn test_divide_by_scale() {
    let out = NormalizationMethod::DivideByScale(10.0)
        .apply(&[entity("A", &[5.0, 10.0])])
        .unwrap();
    assert_eq!(out[0].values, vec![0.5, 1.0]);

    assert_eq!(
        NormalizationMethod::DivideByScale(0.0).apply(&[entity("A", &[1.0])]),
        Err(NatalityError::InvalidScale(0.0))
    );
}

#[test]
fn test_normalization_input_errors() {
    let empty: Vec<EntityVector<f64>> = Vec::new();
    assert_eq!(
        NormalizationMethod::MinMax.apply(&empty),
        Err(NatalityError::EmptyInput)
    );

    let ragged = vec![entity("A", &[1.0, 2.0]), entity("B", &[1.0])];
    assert_eq!(
        NormalizationMethod::MinMax.apply(&ragged),
        Err(NatalityError::MismatchedDimensions {
            expected: 2,
            got: 1
        })
    );
}

// ============================================================================
// Cosine Ranking Tests
// ============================================================================

#[test]
fn test_rank_prefers_aligned_entity() {
    let user = [10.0, 0.0, 0.0, 0.0];
    let entities = vec![
        normalized("Y", &[0.0, 1.0, 1.0, 1.0]),
        normalized("X", &[1.0, 0.0, 0.0, 0.0]),
    ];
    let ranked = rank(&user, &entities).unwrap();

    assert_eq!(ranked[0].entity, "X");
    assert_relative_eq!(ranked[0].score, 1.0);
    assert_relative_eq!(ranked[1].score, 0.0);
}

#[test]
fn test_rank_reverses_with_negated_preferences() {
    let entities = vec![
        normalized("A", &[0.9, 0.1, 0.3]),
        normalized("B", &[0.2, 0.8, 0.5]),
        normalized("C", &[0.5, 0.5, 0.9]),
    ];
    let user = [0.8, 0.1, 0.4];
    let negated: Vec<f64> = user.iter().map(|v| -v).collect();

    let forward: Vec<String> = rank(&user, &entities)
        .unwrap()
        .into_iter()
        .map(|r| r.entity)
        .collect();
    let mut backward: Vec<String> = rank(&negated, &entities)
        .unwrap()
        .into_iter()
        .map(|r| r.entity)
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn test_rank_zero_norm_scores_zero() {
    let entities = vec![normalized("A", &[0.0, 0.0]), normalized("B", &[0.4, 0.2])];

    let ranked = rank(&[0.0, 0.0], &entities).unwrap();
    assert!(ranked.iter().all(|r| r.score == 0.0));

    let ranked = rank(&[1.0, 1.0], &entities).unwrap();
    assert_eq!(ranked[1].entity, "A");
    assert_eq!(ranked[1].score, 0.0);
}

#[test]
fn test_rank_ties_keep_input_order() {
    let entities = vec![
        normalized("first", &[0.5, 0.25]),
        normalized("second", &[0.5, 0.25]),
        normalized("third", &[0.5, 0.25]),
    ];
    let ranked = rank(&[0.3, 0.9], &entities).unwrap();
    let names: Vec<&str> = ranked.iter().map(|r| r.entity.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_rank_dimension_mismatch() {
    let entities = vec![normalized("A", &[0.1, 0.2, 0.3])];
    assert_eq!(
        rank(&[1.0, 2.0], &entities),
        Err(NatalityError::MismatchedDimensions {
            expected: 2,
            got: 3
        })
    );
}

// ============================================================================
// Weighted Scoring Tests
// ============================================================================

#[test]
fn test_normalize_weights() {
    let w = normalize_weights(&[2.0, 6.0, 2.0]).unwrap();
    assert_relative_eq!(w[0], 0.2);
    assert_relative_eq!(w[1], 0.6);
    assert_relative_eq!(w[2], 0.2);

    assert!(matches!(
        normalize_weights(&[0.0, 0.0]),
        Err(NatalityError::InvalidWeights(_))
    ));
}

#[test]
fn test_negative_weights_rejected() {
    assert!(matches!(
        normalize_weights(&[1.0, -0.999]),
        Err(NatalityError::InvalidWeights(_))
    ));

    let entities = vec![normalized("A", &[1.0, 0.0]), normalized("B", &[0.0, 1.0])];
    assert!(matches!(
        weighted_score(&entities, &[1.0, -0.999]),
        Err(NatalityError::InvalidWeights(_))
    ));
}

#[test]
fn test_weighted_score() {
    let entities = vec![
        normalized("A", &[1.0, 0.0]),
        normalized("B", &[0.0, 1.0]),
        normalized("C", &[0.5, 0.5]),
    ];
    let ranked = weighted_score(&entities, &[1.0, 3.0]).unwrap();

    assert_eq!(ranked[0].entity, "B");
    assert_relative_eq!(ranked[0].score, 0.75);
    assert_eq!(ranked[1].entity, "C");
    assert_relative_eq!(ranked[1].score, 0.5);
    assert_relative_eq!(ranked[2].score, 0.25);
}

#[test]
fn test_strategy_dispatch() {
    let entities = vec![normalized("A", &[1.0, 0.0]), normalized("B", &[0.0, 1.0])];
    let cosine = ScoringStrategy::Cosine.score(&[1.0, 0.0], &entities).unwrap();
    let weighted = ScoringStrategy::Weighted
        .score(&[1.0, 0.0], &entities)
        .unwrap();

    assert_eq!(cosine[0].entity, "A");
    assert_eq!(weighted[0].entity, "A");
    assert_eq!(ScoringStrategy::default(), ScoringStrategy::Cosine);
}
