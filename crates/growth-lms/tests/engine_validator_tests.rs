#![cfg(feature = "dev")]
//! Tests for request and configuration validation.
//!
//! These tests verify the validation functions used before evaluation:
//! - Measurement shape vs metric
//! - Positivity and finiteness of measurements
//! - Ordering of velocity weights
//! - Table domain of the requested age
//! - Builder parameter bounds
//!
//! ## Test Organization
//!
//! 1. **Request Validation** - Shape, values, ordering, age
//! 2. **Parameter Validation** - Percentile, resolution, z range, duplicates

use growth_lms::internals::engine::validator::Validator;
use growth_lms::internals::primitives::errors::GrowthError;
use growth_lms::internals::primitives::measurement::{
    Measurement, MeasurementRequest, MetricKind, Sex,
};

// ============================================================================
// Request Validation Tests
// ============================================================================

/// Test that well-formed requests of every metric pass.
#[test]
fn test_validate_valid_requests() {
    let requests = [
        MeasurementRequest::weight_velocity(Sex::Female, 7, 7.00, 7.30),
        MeasurementRequest::weight_for_age(Sex::Male, 0, 3.3),
        MeasurementRequest::length_for_age(Sex::Female, 9, 70.0),
    ];
    for r in &requests {
        assert!(Validator::validate_request(r).is_ok(), "{r:?}");
    }
}

/// Test that equal weights (zero gain) are accepted.
#[test]
fn test_validate_zero_gain() {
    let r = MeasurementRequest::weight_velocity(Sex::Male, 3, 6.0, 6.0);
    assert!(Validator::validate_request(&r).is_ok());
}

/// Test that weight loss is rejected with the offending values.
#[test]
fn test_validate_weight_loss() {
    let r = MeasurementRequest::weight_velocity(Sex::Female, 7, 7.30, 7.00);
    assert_eq!(
        Validator::validate_request(&r),
        Err(GrowthError::InvalidOrdering {
            previous: 7.30,
            current: 7.00,
        })
    );
}

/// Test that non-positive and non-finite measurements are rejected.
#[test]
fn test_validate_invalid_measurements() {
    let bad = [0.0, -1.0, f64::NAN, f64::INFINITY];
    for v in bad {
        let r = MeasurementRequest::weight_for_age(Sex::Female, 6, v);
        assert!(matches!(
            Validator::validate_request(&r),
            Err(GrowthError::InvalidMeasurement { name: "value", .. })
        ));
    }

    let r = MeasurementRequest::weight_velocity(Sex::Female, 6, 0.0, 7.0);
    assert!(matches!(
        Validator::validate_request(&r),
        Err(GrowthError::InvalidMeasurement { name: "previous", .. })
    ));

    let r = MeasurementRequest::weight_velocity(Sex::Female, 6, 7.0, -7.0);
    assert!(matches!(
        Validator::validate_request(&r),
        Err(GrowthError::InvalidMeasurement { name: "current", .. })
    ));
}

/// Test that the measurement shape must match the metric.
#[test]
fn test_validate_shape_mismatch() {
    let r = MeasurementRequest::new(
        MetricKind::WeightVelocity,
        Sex::Male,
        5,
        Measurement::Single(0.8),
    );
    assert_eq!(
        Validator::validate_request(&r),
        Err(GrowthError::MeasurementMismatch {
            metric: MetricKind::WeightVelocity
        })
    );

    let r = MeasurementRequest::new(
        MetricKind::LengthForAge,
        Sex::Male,
        5,
        Measurement::Interval {
            previous: 60.0,
            current: 62.0,
        },
    );
    assert!(matches!(
        Validator::validate_request(&r),
        Err(GrowthError::MeasurementMismatch { .. })
    ));
}

/// Test that out-of-domain ages are rejected.
#[test]
fn test_validate_age_domain() {
    let r = MeasurementRequest::weight_velocity(Sex::Male, 0, 3.0, 4.0);
    assert!(matches!(
        Validator::validate_request(&r),
        Err(GrowthError::OutOfRange { .. })
    ));

    let r = MeasurementRequest::weight_velocity(Sex::Male, 13, 9.0, 9.2);
    assert!(matches!(
        Validator::validate_request(&r),
        Err(GrowthError::OutOfRange { .. })
    ));

    assert!(Validator::validate_age(MetricKind::LengthForAge, Sex::Female, 9).is_ok());
}

/// Test that value errors are reported before the age domain.
#[test]
fn test_validate_fail_fast_order() {
    let r = MeasurementRequest::weight_velocity(Sex::Male, 13, 9.2, 9.0);
    assert!(matches!(
        Validator::validate_request(&r),
        Err(GrowthError::InvalidOrdering { .. })
    ));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test percentile bounds.
#[test]
fn test_validate_percentile() {
    assert!(Validator::validate_percentile(50.0).is_ok());
    assert!(Validator::validate_percentile(0.1).is_ok());
    for p in [0.0, 100.0, -5.0, 150.0, f64::NAN] {
        assert!(matches!(
            Validator::validate_percentile(p),
            Err(GrowthError::InvalidProbability(_))
        ));
    }
}

/// Test curve resolution bounds.
#[test]
fn test_validate_resolution() {
    assert!(Validator::validate_resolution(2).is_ok());
    assert!(Validator::validate_resolution(400).is_ok());
    assert_eq!(
        Validator::validate_resolution(1),
        Err(GrowthError::InvalidResolution(1))
    );
    assert_eq!(
        Validator::validate_resolution(0),
        Err(GrowthError::InvalidResolution(0))
    );
}

/// Test z range bounds.
#[test]
fn test_validate_z_range() {
    assert!(Validator::validate_z_range(-3.5, 3.5).is_ok());
    assert!(Validator::validate_z_range(1.0, 1.0).is_err());
    assert!(Validator::validate_z_range(2.0, -2.0).is_err());
    assert!(Validator::validate_z_range(f64::NEG_INFINITY, 0.0).is_err());
    assert!(Validator::validate_z_range(0.0, f64::NAN).is_err());
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("z_range")),
        Err(GrowthError::DuplicateParameter {
            parameter: "z_range"
        })
    );
}
