//! # growth-lms — LMS growth-standard percentiles for Rust
//!
//! Converts a child's anthropometric measurement (one-month weight gain,
//! weight, or length) into a z-score and a population percentile using the
//! WHO Child Growth Standards (2006) LMS reference tables.
//!
//! ## What is the LMS method?
//!
//! Reference distributions are summarised per age and sex by three
//! parameters: the Box-Cox power **L**, the median **M** and the coefficient
//! of variation **S**. A measurement `x` maps to a standard normal z-score via
//!
//! ```text
//! z = ((x / M)^L - 1) / (L * S)        (L != 0)
//! z = ln(x / M) / S                    (L == 0)
//! ```
//!
//! and the percentile is `100 * Phi(z)`. Monthly weight increments are
//! shifted by 400 g before the transform so that small or zero gains stay in
//! the domain of the power.
//!
//! ## Quick Start
//!
//! ```rust
//! use growth_lms::prelude::*;
//!
//! // Build the engine
//! let engine = Growth::<f64>::new().build()?;
//!
//! // Girl, interval 6 -> 7 months, 7.00 kg -> 7.30 kg
//! let request = MeasurementRequest::weight_velocity(Female, 7, 7.00, 7.30);
//! let result = engine.evaluate(&request)?;
//!
//! assert!((result.observed - 300.0).abs() < 1e-9);
//! assert!((result.percentile - 41.06).abs() < 0.01);
//!
//! println!("{}", result);
//! # Result::<(), GrowthError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Metric:      weight velocity
//!   Sex:         Female
//!   Interval:    6 -> 7 months
//!
//! Percentile:
//!   Observed:    300.00 g
//!   Median:      344.30 g
//!   Z-score:     -0.2260
//!   Percentile:  41.1
//! ```
//!
//! ### Plotting curves
//!
//! ```rust
//! use growth_lms::prelude::*;
//!
//! let engine = Growth::<f64>::new()
//!     .return_curve()             // Attach a value/percentile curve to each result
//!     .curve_resolution(200)      // 200 points
//!     .z_range(-3.0, 3.0)         // Over z in [-3, 3]
//!     .build()?;
//!
//! let result = engine.evaluate(&MeasurementRequest::length_for_age(Male, 9, 70.5))?;
//!
//! // Age 9 is not tabulated for length; the nearest (smaller on a tie) key is used
//! assert_eq!(result.resolved_age, 6);
//! assert!(result.is_approximated());
//!
//! let curve = result.curve.as_ref().unwrap();
//! assert_eq!(curve.len(), 200);
//! # Result::<(), GrowthError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `evaluate` returns `Result<PercentileResult<T>, GrowthError>`. Invalid
//! requests never produce a degraded number:
//!
//! ```rust
//! use growth_lms::prelude::*;
//!
//! let engine = Growth::<f64>::new().build()?;
//!
//! // Weight loss is rejected
//! let loss = MeasurementRequest::weight_velocity(Female, 7, 7.30, 7.00);
//! assert!(matches!(engine.evaluate(&loss), Err(GrowthError::InvalidOrdering { .. })));
//!
//! // Velocity tables cover end months 1 to 12
//! let late = MeasurementRequest::weight_velocity(Male, 13, 9.0, 9.2);
//! assert!(matches!(engine.evaluate(&late), Err(GrowthError::OutOfRange { .. })));
//! # Result::<(), GrowthError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! growth-lms = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Diagnostic events (rejected requests, approximated ages, resolved
//! parameters) are emitted through `tracing` at `debug`/`trace` level. The
//! crate never installs a subscriber.
//!
//! ## References
//!
//! - WHO Multicentre Growth Reference Study Group (2006). *WHO Child Growth Standards*.
//! - WHO Multicentre Growth Reference Study Group (2009). *WHO Child Growth Standards: Growth velocity based on weight, length and head circumference*.
//! - Cole, T. J. & Green, P. J. (1992). "Smoothing reference centile curves: the LMS method and penalized likelihood".

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - vocabulary types and errors.
mod primitives;

// Layer 2: Math - LMS transform and normal distribution.
mod math;

// Layer 3: Reference - compiled-in parameter tables.
mod reference;

// Layer 4: Evaluation - plotting curves.
mod evaluation;

// Layer 5: Engine - validation and orchestration.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        GrowthBuilder as Growth, GrowthError, Measurement, MeasurementRequest,
        MetricKind::{LengthForAge, WeightForAge, WeightVelocity},
        PercentileCurve, PercentileEngine, PercentileResult,
        Sex::{Female, Male},
    };
    pub use crate::api::{AgeKey, MetricKind, Sex};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod reference {
        pub use crate::reference::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
