//! Percentile evaluation engine.
//!
//! ## Purpose
//!
//! This module composes request validation, reference lookup, the LMS
//! transform and the normal CDF into a single `evaluate` call that turns a
//! measurement request into a z-score, a percentile and a reference median.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Requests are validated before any transform is evaluated.
//! * **Stateless**: The engine only holds configuration; every call is a pure
//!   function of its request and the static tables, so one engine can be
//!   shared by any number of threads.
//! * **Units**: Velocity requests are in kilograms and evaluated as a gain in
//!   grams, the unit of the table's offset.
//!
//! ## Key concepts
//!
//! 1. Validate the request.
//! 2. Derive the observed quantity.
//! 3. Resolve `(L, M, S)` and the age key.
//! 4. `z = z_from_value(observed)`, `percentile = 100 * cdf(z)`, `median = M - delta`.
//! 5. Optionally sample the plotting curve.
//!
//! ## Invariants
//!
//! * No NaN or infinite value is ever returned in a result.
//! * The curve never influences the scalar result; if it cannot be sampled the
//!   result simply carries none.
//!
//! ## Non-goals
//!
//! * This module does not render or format output for end users.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::PercentileResult;
use crate::engine::validator::Validator;
use crate::evaluation::curve::{CurveConfig, PercentileCurve};
use crate::math::lms::LmsTransform;
use crate::math::normal;
use crate::primitives::cast::{lit, to_f64};
use crate::primitives::errors::GrowthError;
use crate::primitives::measurement::{
    AgeKey, GRAMS_PER_KG, Measurement, MeasurementRequest, MetricKind, Sex,
};
use crate::reference;

// ============================================================================
// Configuration
// ============================================================================

/// Validated engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<T> {
    /// Attach a plotting curve to every result.
    pub return_curve: bool,

    /// Curve sampling configuration.
    pub curve: CurveConfig<T>,
}

impl<T: Float> Default for EngineConfig<T> {
    fn default() -> Self {
        Self {
            return_curve: false,
            curve: CurveConfig::default(),
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Evaluates measurement requests against the reference tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileEngine<T> {
    config: EngineConfig<T>,
}

impl<T: Float> Default for PercentileEngine<T> {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl<T: Float> PercentileEngine<T> {
    /// Build an engine from an already validated configuration.
    pub(crate) fn from_config(config: EngineConfig<T>) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig<T> {
        &self.config
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate one measurement request.
    pub fn evaluate(
        &self,
        request: &MeasurementRequest<T>,
    ) -> Result<PercentileResult<T>, GrowthError> {
        if let Err(err) = Validator::validate_request(request) {
            tracing::debug!(metric = %request.metric, sex = %request.sex, error = %err, "request rejected");
            return Err(err);
        }

        let observed = Self::observed(&request.measurement);
        let (transform, resolved_age) =
            Self::transform_for(request.metric, request.sex, request.age_months)?;

        let z_score = transform.z_from_value(observed)?;
        let percentile = Self::percentile_of(z_score)?;

        let params = transform.params();
        tracing::trace!(
            metric = %request.metric,
            sex = %request.sex,
            age = resolved_age,
            l = to_f64(params.l),
            m = to_f64(params.m),
            s = to_f64(params.s),
            observed = to_f64(observed),
            z = to_f64(z_score),
            "evaluated measurement"
        );

        // A curve that cannot be sampled leaves the scalar result intact
        let curve = if self.config.return_curve {
            match PercentileCurve::generate(&transform, &self.config.curve) {
                Ok(curve) => Some(curve),
                Err(err) => {
                    tracing::debug!(metric = %request.metric, sex = %request.sex, error = %err, "curve unavailable");
                    None
                }
            }
        } else {
            None
        };

        Ok(PercentileResult {
            metric: request.metric,
            sex: request.sex,
            requested_age: request.age_months,
            resolved_age,
            observed,
            z_score,
            percentile,
            reference_median: transform.median(),
            curve,
        })
    }

    /// Sample the value/percentile curve of a (metric, sex, age) group.
    pub fn curve(
        &self,
        metric: MetricKind,
        sex: Sex,
        age: AgeKey,
    ) -> Result<PercentileCurve<T>, GrowthError> {
        let (transform, _) = Self::transform_for(metric, sex, age)?;
        PercentileCurve::generate(&transform, &self.config.curve)
    }

    /// Reference measurement at `percentile` (0-100, exclusive).
    pub fn value_at_percentile(
        &self,
        metric: MetricKind,
        sex: Sex,
        age: AgeKey,
        percentile: T,
    ) -> Result<T, GrowthError> {
        Validator::validate_percentile(percentile)?;
        let (transform, _) = Self::transform_for(metric, sex, age)?;
        let z = normal::quantile(percentile / lit(100.0))?;
        transform.value_from_z(z)
    }

    /// Median of the reference distribution of a (metric, sex, age) group.
    pub fn reference_median(
        &self,
        metric: MetricKind,
        sex: Sex,
        age: AgeKey,
    ) -> Result<T, GrowthError> {
        let (transform, _) = Self::transform_for(metric, sex, age)?;
        Ok(transform.median())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Resolve the transform of a group, reporting the age key actually used.
    pub fn transform_for(
        metric: MetricKind,
        sex: Sex,
        age: AgeKey,
    ) -> Result<(LmsTransform<T>, AgeKey), GrowthError> {
        let (params, resolved) = reference::lookup(metric, sex, age)?;
        if resolved != age {
            tracing::debug!(%metric, %sex, requested = age, resolved, "age approximated by nearest key");
        }
        Ok((
            LmsTransform::new(params.cast(), lit(metric.offset())),
            resolved,
        ))
    }

    /// Observed quantity in table units (grams of gain for a weight interval).
    pub fn observed(measurement: &Measurement<T>) -> T {
        match *measurement {
            Measurement::Single(value) => value,
            Measurement::Interval { previous, current } => (current - previous) * lit(GRAMS_PER_KG),
        }
    }

    fn percentile_of(z: T) -> Result<T, GrowthError> {
        let percentile = normal::cdf(z) * lit(100.0);
        if percentile.is_finite() {
            Ok(percentile)
        } else {
            Err(GrowthError::DomainError {
                operation: "percentile",
                argument: to_f64(z),
            })
        }
    }
}
