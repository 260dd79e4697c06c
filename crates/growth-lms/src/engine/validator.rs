//! Validation of measurement requests and engine configuration.
//!
//! ## Purpose
//!
//! This module provides the cross-field checks run before any z-score is
//! computed, plus the bounds checks applied to builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Cheap shape checks first, then value checks, then the table domain.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape**: Velocity requests carry a previous/current pair; other metrics a single value.
//! * **Positivity**: Weights and lengths must be finite and strictly positive.
//! * **Ordering**: A velocity request whose current weight is below the previous one is rejected.
//! * **Domain**: The requested age must fall inside the metric's table.
//!
//! ## Invariants
//!
//! * A request that passes validation yields a finite, positive `(value + delta) / M`.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not resolve age keys (only checks that one exists).
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::cast::{lit, to_f64};
use crate::primitives::errors::GrowthError;
use crate::primitives::measurement::{AgeKey, Measurement, MeasurementRequest, MetricKind, Sex};
use crate::reference;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for measurement requests and engine configuration.
///
/// Provides static methods that return `Result<(), GrowthError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Request Validation
    // ========================================================================

    /// Validate a complete measurement request.
    pub fn validate_request<T: Float>(request: &MeasurementRequest<T>) -> Result<(), GrowthError> {
        // Check 1: Measurement shape matches the metric
        match (request.metric.is_velocity(), &request.measurement) {
            (true, Measurement::Interval { previous, current }) => {
                // Check 2: Both weights valid
                Self::validate_measurement(*previous, "previous")?;
                Self::validate_measurement(*current, "current")?;

                // Check 3: No weight loss
                Self::validate_ordering(*previous, *current)?;
            }
            (false, Measurement::Single(value)) => {
                Self::validate_measurement(*value, "value")?;
            }
            _ => {
                return Err(GrowthError::MeasurementMismatch {
                    metric: request.metric,
                });
            }
        }

        // Check 4: Age inside the table domain
        Self::validate_age(request.metric, request.sex, request.age_months)
    }

    /// Validate a single weight or length.
    pub fn validate_measurement<T: Float>(value: T, name: &'static str) -> Result<(), GrowthError> {
        if !value.is_finite() || value <= T::zero() {
            return Err(GrowthError::InvalidMeasurement {
                name,
                value: to_f64(value),
            });
        }
        Ok(())
    }

    /// Validate that the later weight is not smaller than the earlier one.
    pub fn validate_ordering<T: Float>(previous: T, current: T) -> Result<(), GrowthError> {
        if current < previous {
            return Err(GrowthError::InvalidOrdering {
                previous: to_f64(previous),
                current: to_f64(current),
            });
        }
        Ok(())
    }

    /// Validate that the metric's table can serve the requested age.
    pub fn validate_age(metric: MetricKind, sex: Sex, age: AgeKey) -> Result<(), GrowthError> {
        reference::lookup(metric, sex, age).map(|_| ())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a percentile in the open interval (0, 100).
    pub fn validate_percentile<T: Float>(percentile: T) -> Result<(), GrowthError> {
        let hundred: T = lit(100.0);
        if !percentile.is_finite() || percentile <= T::zero() || percentile >= hundred {
            return Err(GrowthError::InvalidProbability(to_f64(percentile)));
        }
        Ok(())
    }

    /// Validate the number of points of a plotting curve.
    pub fn validate_resolution(resolution: usize) -> Result<(), GrowthError> {
        const MIN_RESOLUTION: usize = 2;
        if resolution < MIN_RESOLUTION {
            return Err(GrowthError::InvalidResolution(resolution));
        }
        Ok(())
    }

    /// Validate the plotted z interval.
    pub fn validate_z_range<T: Float>(lower: T, upper: T) -> Result<(), GrowthError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(GrowthError::InvalidZRange {
                lower: to_f64(lower),
                upper: to_f64(upper),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), GrowthError> {
        if let Some(param) = duplicate_param {
            return Err(GrowthError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
