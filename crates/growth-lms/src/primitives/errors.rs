//! Error types for growth percentile operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while resolving
//! reference parameters, validating a measurement request, transforming a
//! measurement into a z-score, or configuring the engine.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (requested age, table
//!   bounds, measurement values, transform arguments).
//! * **Typed**: Every invalid condition surfaces as a variant; the engine never
//!   substitutes NaN, infinity, or a default value for an error.
//! * **No-std**: Derived with `thiserror`, which supports `no_std` targets.
//!
//! ## Key concepts
//!
//! 1. **Table domain**: `OutOfRange` when no age key can serve the request.
//! 2. **Request validation**: `InvalidMeasurement`, `MeasurementMismatch`, `InvalidOrdering`.
//! 3. **Numerical domain**: `DomainError` when an LMS argument would leave the reals.
//! 4. **Configuration**: Curve resolution, z range, probability and duplicate parameters.
//!
//! ## Invariants
//!
//! * Numeric context is reported as `f64` regardless of the evaluation float type.
//! * Errors are deterministic input errors; none of them is transient.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// Internal dependencies
use crate::primitives::measurement::MetricKind;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for growth percentile operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    /// Requested age has no usable key in the metric's reference table.
    #[error("Age out of range: {age} months is outside the {metric} table domain [{min}, {max}]")]
    OutOfRange {
        /// Metric whose table was queried.
        metric: MetricKind,
        /// Requested age in months.
        age: u32,
        /// Smallest age key of the table.
        min: u32,
        /// Largest age key of the table.
        max: u32,
    },

    /// A measurement value is non-positive or not finite.
    #[error("Invalid measurement: {name}={value} (must be finite and > 0)")]
    InvalidMeasurement {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The measurement shape does not match the metric (pair for velocity, single value otherwise).
    #[error("Measurement shape does not match metric {metric}")]
    MeasurementMismatch {
        /// Metric of the request.
        metric: MetricKind,
    },

    /// Velocity request whose current weight is smaller than the previous one.
    #[error("Invalid ordering: current weight {current} is smaller than previous weight {previous}")]
    InvalidOrdering {
        /// Earlier weight.
        previous: f64,
        /// Later weight.
        current: f64,
    },

    /// An LMS transform argument would produce a non-real or non-finite result.
    #[error("Domain error in {operation}: argument {argument} leaves the real domain")]
    DomainError {
        /// Transform step that failed.
        operation: &'static str,
        /// Argument that violated the domain constraint.
        argument: f64,
    },

    /// Plotting curves need at least two points.
    #[error("Invalid curve resolution: {0} (must be at least 2)")]
    InvalidResolution(usize),

    /// Plotted z interval must be finite and non-empty.
    #[error("Invalid z range: [{lower}, {upper}] (bounds must be finite and lower < upper)")]
    InvalidZRange {
        /// Lower z bound.
        lower: f64,
        /// Upper z bound.
        upper: f64,
    },

    /// Probability outside the open unit interval (or percentile outside (0, 100)).
    #[error("Invalid probability: {0} (must be strictly inside the open interval)")]
    InvalidProbability(f64),

    /// Parameter was set multiple times in the builder.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}
