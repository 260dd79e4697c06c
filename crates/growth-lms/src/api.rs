//! High-level API for growth percentile evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the engine and re-exports the request and
//! result types.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GrowthBuilder`] via `Growth::new()`.
//! 2. Chain configuration methods (`.return_curve()`, `.curve_resolution()`, `.z_range()`).
//! 3. Call `.build()` to obtain a [`PercentileEngine`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::{EngineConfig, PercentileEngine};
pub use crate::engine::output::PercentileResult;
pub use crate::evaluation::curve::{CurveConfig, PercentileCurve};
pub use crate::math::lms::{LmsParams, LmsTransform};
pub use crate::primitives::errors::GrowthError;
pub use crate::primitives::measurement::{
    AgeKey, Measurement, MeasurementRequest, MetricKind, Sex,
};

/// Fluent builder for configuring the percentile engine.
#[derive(Debug, Clone)]
pub struct GrowthBuilder<T> {
    /// Attach a plotting curve to every result.
    pub return_curve: Option<bool>,

    /// Number of curve points.
    pub curve_resolution: Option<usize>,

    /// Plotted z interval `(lower, upper)`.
    pub z_range: Option<(T, T)>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GrowthBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GrowthBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            return_curve: None,
            curve_resolution: None,
            z_range: None,
            duplicate_param: None,
        }
    }

    /// Include a value/percentile plotting curve in every result.
    pub fn return_curve(mut self) -> Self {
        self.return_curve = Some(true);
        self
    }

    /// Set the number of curve points (default 400).
    pub fn curve_resolution(mut self, points: usize) -> Self {
        if self.curve_resolution.is_some() {
            self.duplicate_param = Some("curve_resolution");
        }
        self.curve_resolution = Some(points);
        self
    }

    /// Set the plotted z interval (default -3.5 to 3.5).
    pub fn z_range(mut self, lower: T, upper: T) -> Self {
        if self.z_range.is_some() {
            self.duplicate_param = Some("z_range");
        }
        self.z_range = Some((lower, upper));
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<PercentileEngine<T>, GrowthError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = CurveConfig::<T>::default();

        let resolution = self.curve_resolution.unwrap_or(defaults.resolution);
        Validator::validate_resolution(resolution)?;

        let (z_lower, z_upper) = self.z_range.unwrap_or((defaults.z_lower, defaults.z_upper));
        Validator::validate_z_range(z_lower, z_upper)?;

        Ok(PercentileEngine::from_config(EngineConfig {
            return_curve: self.return_curve.unwrap_or(false),
            curve: CurveConfig {
                resolution,
                z_lower,
                z_upper,
            },
        }))
    }
}
