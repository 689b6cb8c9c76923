#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use natality_rs::internals::algorithms::standardize::FeatureStatistics;
use natality_rs::internals::math::stats::{mean, sample_std};
use natality_rs::internals::primitives::errors::NatalityError;

fn column(matrix: &[f64], p: usize, j: usize) -> Vec<f64> {
    matrix.chunks_exact(p).map(|r| r[j]).collect()
}

// ============================================================================
// Fit / Transform Tests
// ============================================================================

#[test]
fn test_standardized_training_columns() {
    // 6 rows x 2 features, row-major.
    let mut x = vec![
        30.0, 100.0, //
        32.0, 400.0, //
        35.0, 250.0, //
        38.0, 900.0, //
        40.0, 50.0, //
        41.0, 600.0,
    ];
    let stats = FeatureStatistics::fit(&x, 2);
    stats.transform(&mut x);

    for j in 0..2 {
        let col = column(&x, 2, j);
        assert_relative_eq!(mean(&col), 0.0, epsilon = 1e-12);
        assert_relative_eq!(sample_std(&col), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_constant_column_maps_to_zero() {
    let mut x = vec![0.1, 1.0, 0.1, 2.0, 0.1, 4.0];
    let stats = FeatureStatistics::fit(&x, 2);
    assert_eq!(stats.std[0], 1.0);
    assert_eq!(stats.mean[0], 0.1);

    stats.transform(&mut x);
    assert!(column(&x, 2, 0).iter().all(|&v| v == 0.0));
}

#[test]
fn test_statistics_applied_to_unseen_rows() {
    let x = vec![1.0, 3.0, 5.0];
    let stats = FeatureStatistics::fit(&x, 1);
    assert_relative_eq!(stats.mean[0], 3.0);
    assert_relative_eq!(stats.std[0], 2.0);

    let mut row = [7.0];
    stats.transform_row(&mut row);
    assert_relative_eq!(row[0], 2.0);
}

#[test]
fn test_single_row_uses_unit_std() {
    let x = vec![5.0, 6.0];
    let stats = FeatureStatistics::fit(&x, 2);
    assert_eq!(stats.std, vec![1.0, 1.0]);
    assert_eq!(stats.mean, vec![5.0, 6.0]);
}

// ============================================================================
// from_parts Tests
// ============================================================================

#[test]
fn test_from_parts() {
    let stats = FeatureStatistics::from_parts(vec![1.0, 2.0], vec![0.0, -3.0]).unwrap();
    assert_eq!(stats.std, vec![1.0, 3.0]);

    assert_eq!(
        FeatureStatistics::from_parts(vec![1.0], vec![1.0, 2.0]),
        Err(NatalityError::MismatchedDimensions {
            expected: 1,
            got: 2
        })
    );
    assert!(matches!(
        FeatureStatistics::from_parts(vec![f64::NAN], vec![1.0]),
        Err(NatalityError::InvalidNumericValue(_))
    ));
}
