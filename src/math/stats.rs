//! Descriptive statistics over feature columns.
//!
//! ## Purpose
//!
//! This module provides the column statistics used by standardization,
//! min-max normalization, and feature summaries.
//!
//! ## Design notes
//!
//! * **Algorithm**: Median uses Quickselect (O(n)) on a caller-owned buffer.
//! * **Variance**: Sample variance with an `n - 1` denominator.
//!
//! ## Invariants
//!
//! * `sample_std >= 0` for any input with at least two values.
//! * Empty inputs yield zero rather than NaN for `mean` and `median`.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf).

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Lossless-or-NaN cast from a primitive to `T`.
#[inline]
pub fn cast<T: Float, N: num_traits::ToPrimitive>(n: N) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Arithmetic mean; zero for an empty slice.
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let sum = vals.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / cast(vals.len())
}

/// Sample standard deviation (`n - 1` denominator).
///
/// Returns zero when fewer than two values are present.
pub fn sample_std<T: Float>(vals: &[T]) -> T {
    let n = vals.len();
    if n < 2 {
        return T::zero();
    }
    let m = mean(vals);
    let ss = vals.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    (ss / cast(n - 1)).sqrt()
}

/// Minimum and maximum of a slice, or `None` if it is empty.
pub fn min_max<T: Float>(vals: &[T]) -> Option<(T, T)> {
    let first = *vals.first()?;
    Some(
        vals.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Compute the median in-place using Quickselect.
///
/// The slice is reordered.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value in the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / cast(2)
    } else {
        upper
    }
}
