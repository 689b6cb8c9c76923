//! # natality-rs — Birth-rate regression and preference-based country ranking
//!
//! Two small, independent statistical engines for family-policy data:
//!
//! - **Regression**: a closed-form multiple linear regression that predicts
//!   the birth rate per 1,000 people from socioeconomic features. Squared
//!   (and cubed) terms are derived from base fields, features are
//!   standardized with training-partition statistics, and coefficients are
//!   solved with the normal equation β = (XᵀX)⁻¹Xᵀy.
//! - **Similarity ranking**: one feature vector per country (its most recent
//!   complete observation), min-max normalized across countries, scored
//!   against a user's preference vector by cosine similarity or by a
//!   weighted linear score.
//!
//! Both engines are pure functions of caller-supplied, in-memory data. They
//! hold no global state and are safe to call concurrently.
//!
//! ## Quick Start
//!
//! ### Regression
//!
//! ```rust
//! use natality_rs::prelude::*;
//!
//! // Synthetic panel: 60 country-years.
//! let rows: Vec<Observation<f64>> = (0..60)
//!     .map(|i| {
//!         let hours = 32.0 + (i % 9) as f64 * 0.7;
//!         let cash = 800.0 + ((i * 37) % 23) as f64 * 45.0;
//!         let maternity = 200.0 + ((i * 11) % 17) as f64 * 30.0;
//!         let services = 500.0 + ((i * 29) % 19) as f64 * 60.0;
//!         let year = 2010.0 + (i % 12) as f64;
//!         let birth_rate = 14.0 - 0.1 * hours + 0.001 * cash + 0.002 * maternity;
//!         Observation::new(format!("C{}", i % 15))
//!             .with("weekly_hours", hours)
//!             .with("cash_per_capita", cash)
//!             .with("maternity_per_capita", maternity)
//!             .with("services_per_capita", services)
//!             .with("year", year)
//!             .with("birth_rate_per_thousand", birth_rate)
//!     })
//!     .collect();
//!
//! let model = Regression::new()
//!     .features(&["weekly_hours", "cash_per_capita", "maternity_per_capita"])
//!     .target("birth_rate_per_thousand")
//!     .seed(42)
//!     .build()?
//!     .fit(&rows)?;
//!
//! let input = [
//!     ("weekly_hours", 35.0),
//!     ("cash_per_capita", 1000.0),
//!     ("maternity_per_capita", 400.0),
//! ];
//! let predicted = model.predict(&input, true)?;
//! assert!((predicted - 12.3).abs() < 1e-6);
//! # Result::<(), NatalityError>::Ok(())
//! ```
//!
//! ### Similarity ranking
//!
//! ```rust
//! use natality_rs::prelude::*;
//!
//! let rows = vec![
//!     Observation::new("SE")
//!         .with("weekly_hours", 31.0)
//!         .with("cash_per_capita", 600.0)
//!         .with("maternity_per_capita", 900.0)
//!         .with("services_per_capita", 1500.0)
//!         .with("year", 2022.0),
//!     Observation::new("GR")
//!         .with("weekly_hours", 41.0)
//!         .with("cash_per_capita", 150.0)
//!         .with("maternity_per_capita", 80.0)
//!         .with("services_per_capita", 120.0)
//!         .with("year", 2022.0),
//! ];
//!
//! let ranker = Ranker::new().strategy(Cosine).build()?;
//! let prefs = [
//!     ("weekly_hours", 2.0),
//!     ("cash_per_capita", 6.0),
//!     ("maternity_per_capita", 8.0),
//!     ("services_per_capita", 9.0),
//! ];
//! let result = ranker.recommend(&rows, &prefs)?;
//! assert_eq!(result.rankings[0].entity, "SE");
//! # Result::<(), NatalityError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, NatalityError>`. The error
//! kinds are distinct so callers can map them to their own responses:
//!
//! - `InsufficientData`: no complete rows, or too few rows to fit/evaluate.
//! - `SingularMatrix`: XᵀX is not invertible (collinear or constant features).
//! - `MissingFeature`: a prediction or preference input lacks a field.
//!
//! Zero-norm vectors are not an error: their cosine similarity is 0.
//!
//! ## Parameters
//!
//! | Builder      | Parameter            | Default                        | Description                           |
//! |--------------|----------------------|--------------------------------|---------------------------------------|
//! | `Regression` | **features**         | `BIRTH_RATE_FEATURES`          | Ordered base/derived feature names    |
//! | `Regression` | **target**           | `birth_rate_per_thousand`      | Target field                          |
//! | `Regression` | **test_fraction**    | 0.2                            | Held-out fraction, in (0, 1)          |
//! | `Regression` | **seed**             | 42                             | Shuffle seed for the split            |
//! | `Ranker`     | **features**         | `FAMILY_FEATURES`              | Ordered feature names                 |
//! | `Ranker`     | **normalization**    | `MinMax`                       | Entity-side rescaling                 |
//! | `Ranker`     | **preference_scale** | 10                             | Upper bound of raw preferences        |
//! | `Ranker`     | **strategy**         | `Cosine`                       | `Cosine` or `Weighted`                |
//! | `Ranker`     | **exclude**          | none                           | Entities never ranked (e.g. `EU27`)   |
//!
//! ## Derived features
//!
//! A feature named `<base>_squared` or `<base>_cubed` is computed from the
//! `<base>` field of each row, identically during training and prediction.
//! Rows missing any base field or the target are dropped before fitting.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! natality-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, observation rows, and the seeded split.
mod primitives;

// Layer 2: Math - linear algebra, descriptive statistics, vector kernels.
mod math;

// Layer 3: Algorithms - feature derivation, standardization, OLS,
// entity selection, normalization, and scoring.
mod algorithms;

// Layer 4: Evaluation - regression metrics and feature summaries.
mod evaluation;

// Layer 5: Engine - validation, fit and recommendation pipelines, outputs.
mod engine;

// High-level fluent API.
mod api;

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use natality_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BIRTH_RATE_FEATURES, BIRTH_RATE_PER_THOUSAND, EntityVector, EvaluationMetrics,
        FAMILY_FEATURES, FeatureStatistics, FeatureSummary, FieldSource, ModelEvaluation,
        NatalityError,
        NormalizationMethod::{self, DivideByScale, MinMax},
        NormalizedVector, Observation, RankedEntity, RankerBuilder as Ranker, Recommendation,
        RegressionBuilder as Regression,
        ScoringStrategy::{self, Cosine, Weighted},
        TrainedModel,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
}
