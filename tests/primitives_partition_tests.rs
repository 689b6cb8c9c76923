#![cfg(feature = "dev")]
//! Tests for the seeded train/test split.
//!
//! ## Test Organization
//!
//! 1. **Sizes** - `floor(fraction * n)` test rows
//! 2. **Coverage** - disjoint partitions covering every row
//! 3. **Determinism** - same seed, same split

use natality_rs::internals::primitives::partition::{SimpleRng, TrainTestSplit};

// ============================================================================
// Size Tests
// ============================================================================

#[test]
fn test_split_sizes_floor() {
    let split = TrainTestSplit::new(50, 0.2, 42);
    assert_eq!(split.test.len(), 10);
    assert_eq!(split.train.len(), 40);

    // floor(0.2 * 7) = 1
    let split = TrainTestSplit::new(7, 0.2, 42);
    assert_eq!(split.test.len(), 1);
    assert_eq!(split.train.len(), 6);
}

#[test]
fn test_split_too_small_for_test_rows() {
    // floor(0.2 * 4) = 0
    let split = TrainTestSplit::new(4, 0.2, 42);
    assert!(split.test.is_empty());
    assert_eq!(split.train.len(), 4);
}

#[test]
fn test_split_empty() {
    let split = TrainTestSplit::new(0, 0.2, 42);
    assert!(split.test.is_empty());
    assert!(split.train.is_empty());
}

// ============================================================================
// Coverage Tests
// ============================================================================

#[test]
fn test_split_disjoint_and_complete() {
    let n = 123;
    let split = TrainTestSplit::new(n, 0.25, 7);

    let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..n).collect::<Vec<_>>());
}

#[test]
fn test_split_is_shuffled() {
    let split = TrainTestSplit::new(100, 0.2, 42);
    let identity: Vec<usize> = (0..20).collect();
    assert_ne!(split.test, identity);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_split_reproducible() {
    let a = TrainTestSplit::new(80, 0.2, 42);
    let b = TrainTestSplit::new(80, 0.2, 42);
    assert_eq!(a, b);
}

#[test]
fn test_split_depends_on_seed() {
    let a = TrainTestSplit::new(80, 0.2, 42);
    let b = TrainTestSplit::new(80, 0.2, 43);
    assert_ne!(a, b);
}

#[test]
fn test_rng_shuffle_is_permutation() {
    let mut rng = SimpleRng::new(1);
    let mut values: Vec<u32> = (0..32).collect();
    rng.shuffle(&mut values);
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..32).collect::<Vec<_>>());
}
