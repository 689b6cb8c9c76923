//! Deterministic train/test partitioning.
//!
//! ## Purpose
//!
//! This module splits row indices into a held-out test partition and a
//! training partition. The split is driven by a fixed seed so that repeated
//! fits over the same data are reproducible.
//!
//! ## Design notes
//!
//! * **Shuffle then slice**: Indices `0..n` are Fisher-Yates shuffled and the
//!   first `floor(test_fraction * n)` positions become the test partition; the
//!   remainder is the training partition.
//! * **Internal PRNG**: A 64-bit LCG keeps the split available under `no_std`
//!   and independent of external RNG version changes.
//!
//! ## Invariants
//!
//! * Train and test partitions are disjoint and together cover `0..n`.
//! * The same `(n, test_fraction, seed)` always yields the same partition.
//!
//! ## Non-goals
//!
//! * This module does not stratify by entity or by target value.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for reproducible shuffling.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<V>(&mut self, values: &mut [V]) {
        for i in (1..values.len()).rev() {
            let j = (self.next_u32() as usize) % (i + 1);
            values.swap(i, j);
        }
    }
}

// ============================================================================
// Train/Test Split
// ============================================================================

/// Row indices of a train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    /// Indices of the training rows, in shuffled order.
    pub train: Vec<usize>,

    /// Indices of the held-out test rows, in shuffled order.
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Partition `0..n` using the given test fraction and seed.
    ///
    /// The fraction is assumed to be validated to lie in (0, 1).
    pub fn new<T: Float>(n: usize, test_fraction: T, seed: u64) -> Self {
        let mut indices: Vec<usize> = (0..n).collect();
        SimpleRng::new(seed).shuffle(&mut indices);

        let n_test = Self::test_len(n, test_fraction);
        let train = indices.split_off(n_test);

        Self {
            train,
            test: indices,
        }
    }

    /// Size of the test partition: `floor(test_fraction * n)`.
    #[inline]
    pub fn test_len<T: Float>(n: usize, test_fraction: T) -> usize {
        let n_f = T::from(n).unwrap_or_else(T::zero);
        (test_fraction * n_f)
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(n)
    }
}
