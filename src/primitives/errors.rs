//! Error types for regression fitting and similarity ranking.
//!
//! ## Purpose
//!
//! This module defines `NatalityError`, the single error type returned by
//! every fallible operation in the crate. Each failure mode is a distinct
//! variant so callers can map them to their own responses (an HTTP status,
//! a user-facing message, a retry decision).
//!
//! ## Design notes
//!
//! * **No recovery**: The core never logs, swallows, or defaults around an error.
//! * **no_std friendly**: `Display` is implemented by hand; `std::error::Error`
//!   is only implemented with the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not format user-facing messages beyond `Display`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors raised by the regression and similarity engines.
#[derive(Debug, Clone, PartialEq)]
pub enum NatalityError {
    /// An input collection was empty.
    EmptyInput,

    /// Not enough usable rows to fit or evaluate the model.
    InsufficientData {
        /// Number of rows available.
        got: usize,
        /// Minimum number of rows required.
        min: usize,
    },

    /// The normal-equation matrix XᵀX is not invertible.
    SingularMatrix {
        /// Dimension of the square matrix.
        size: usize,
    },

    /// A required field is missing from a prediction or ranking input.
    MissingFeature(String),

    /// A vector or parameter list does not have the expected length.
    MismatchedDimensions {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A value that must be finite is NaN or infinite.
    InvalidNumericValue(String),

    /// The feature list is empty, has duplicates, or contains the target.
    InvalidFeatureList(String),

    /// Test fraction outside the open interval (0, 1).
    InvalidTestFraction(f64),

    /// Preference scale that is not finite and positive.
    InvalidScale(f64),

    /// A raw user preference falls outside `[0, max]`.
    InvalidPreference {
        /// Feature the preference belongs to.
        feature: String,
        /// Supplied value.
        value: f64,
        /// Upper bound of the preference scale.
        max: f64,
    },

    /// Weight vector that cannot be L1-normalized.
    InvalidWeights(String),

    /// No usable observation exists for the requested entity.
    UnknownEntity(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for NatalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input collection is empty"),
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {} rows, need at least {}", got, min)
            }
            Self::SingularMatrix { size } => write!(
                f,
                "Singular matrix: the {}x{} normal-equation matrix is not invertible",
                size, size
            ),
            Self::MissingFeature(name) => write!(f, "Missing required feature: {}", name),
            Self::MismatchedDimensions { expected, got } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::InvalidFeatureList(msg) => write!(f, "Invalid feature list: {}", msg),
            Self::InvalidTestFraction(frac) => {
                write!(f, "Invalid test fraction: {} (must be > 0 and < 1)", frac)
            }
            Self::InvalidScale(scale) => {
                write!(f, "Invalid scale: {} (must be > 0 and finite)", scale)
            }
            Self::InvalidPreference {
                feature,
                value,
                max,
            } => write!(
                f,
                "Invalid preference for {}: {} (must be between 0 and {})",
                feature, value, max
            ),
            Self::InvalidWeights(msg) => write!(f, "Invalid weights: {}", msg),
            Self::UnknownEntity(entity) => {
                write!(f, "No usable observation for entity '{}'", entity)
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NatalityError {}
