#![cfg(feature = "dev")]
//! Tests for the LMS transform.
//!
//! These tests verify the value/z-score conversion used for:
//! - Turning a measurement into a z-score
//! - Turning a z-score back into a measurement (curves, reference lines)
//! - The logarithmic limit at L = 0
//!
//! ## Test Organization
//!
//! 1. **Parameters** - Construction and validation
//! 2. **Forward/Inverse** - Known values, median anchor, offset handling
//! 3. **Logarithmic Limit** - L = 0 branch
//! 4. **Domain Errors** - Non-real arguments
//! 5. **Properties** - Round trip and monotonicity

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use growth_lms::internals::math::lms::{LmsParams, LmsTransform};
use growth_lms::internals::primitives::errors::GrowthError;

// ============================================================================
// Helper Functions
// ============================================================================

fn girls_velocity_month_7() -> LmsTransform<f64> {
    LmsTransform::new(LmsParams::new(0.7781, 744.3023, 0.26515).unwrap(), 400.0)
}

// ============================================================================
// Parameter Tests
// ============================================================================

/// Test that valid parameters are accepted, including L = 0 and negative L.
#[test]
fn test_params_accept_valid() {
    assert!(LmsParams::new(0.7781, 744.3023, 0.26515).is_ok());
    assert!(LmsParams::new(0.0, 10.0, 0.1).is_ok());
    assert!(LmsParams::new(-0.2941, 11.4775, 0.1239).is_ok());
}

/// Test that non-positive M and S are rejected.
#[test]
fn test_params_reject_invalid() {
    assert!(matches!(
        LmsParams::new(1.0, 0.0, 0.1),
        Err(GrowthError::DomainError { .. })
    ));
    assert!(matches!(
        LmsParams::new(1.0, 10.0, -0.1),
        Err(GrowthError::DomainError { .. })
    ));
    assert!(matches!(
        LmsParams::new(f64::NAN, 10.0, 0.1),
        Err(GrowthError::DomainError { .. })
    ));
}

/// Test casting parameters between float types.
#[test]
fn test_params_cast() {
    let p = LmsParams::new(0.5f64, 100.0, 0.2).unwrap();
    let q: LmsParams<f32> = p.cast();

    assert_abs_diff_eq!(q.l, 0.5f32);
    assert_abs_diff_eq!(q.m, 100.0f32);
    assert_abs_diff_eq!(q.s, 0.2f32);
}

// ============================================================================
// Forward / Inverse Tests
// ============================================================================

/// Test the forward transform against the closed-form expression.
#[test]
fn test_z_from_value_matches_formula() {
    let t = girls_velocity_month_7();
    let z = t.z_from_value(300.0).unwrap();

    let expected = (((300.0f64 + 400.0) / 744.3023).powf(0.7781) - 1.0) / (0.7781 * 0.26515);
    assert_abs_diff_eq!(z, expected, epsilon = 1e-12);
}

/// Test that the median maps to z = 0 and back.
#[test]
fn test_median_anchor() {
    let t = girls_velocity_month_7();

    assert_abs_diff_eq!(t.median(), 344.3023, epsilon = 1e-9);
    assert_abs_diff_eq!(t.value_from_z(0.0).unwrap(), 344.3023, epsilon = 1e-9);
    assert_abs_diff_eq!(t.z_from_value(344.3023).unwrap(), 0.0, epsilon = 1e-12);
}

/// Test that without an offset the median is M.
#[test]
fn test_no_offset_median() {
    let t = LmsTransform::new(LmsParams::new(-0.2024, 8.9481, 0.12268).unwrap(), 0.0);

    assert_abs_diff_eq!(t.median(), 8.9481, epsilon = 1e-12);
    assert_abs_diff_eq!(t.z_from_value(8.9481).unwrap(), 0.0, epsilon = 1e-12);
}

/// Test that L = 1 reduces to a linear (normal) scale.
#[test]
fn test_unit_power_is_linear() {
    let t = LmsTransform::new(LmsParams::new(1.0, 50.0, 0.04).unwrap(), 0.0);

    // One SD is M * S = 2.0
    assert_abs_diff_eq!(t.value_from_z(1.0).unwrap(), 52.0, epsilon = 1e-10);
    assert_abs_diff_eq!(t.value_from_z(-2.0).unwrap(), 46.0, epsilon = 1e-10);
    assert_abs_diff_eq!(t.z_from_value(51.0).unwrap(), 0.5, epsilon = 1e-10);
}

/// Test the batch inverse matches the scalar inverse.
#[test]
fn test_values_from_z_batch() {
    let t = girls_velocity_month_7();
    let zs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let mut out = [0.0; 5];
    t.values_from_z(&zs, &mut out).unwrap();

    for (z, v) in zs.iter().zip(out.iter()) {
        assert_abs_diff_eq!(*v, t.value_from_z(*z).unwrap(), epsilon = 1e-12);
    }
}

// ============================================================================
// Logarithmic Limit Tests
// ============================================================================

/// Test the L = 0 branch against ln/exp.
#[test]
fn test_log_limit_branch() {
    let t = LmsTransform::new(LmsParams::new(0.0, 10.0, 0.1).unwrap(), 0.0);

    let z = t.z_from_value(12.0).unwrap();
    assert_abs_diff_eq!(z, (1.2f64).ln() / 0.1, epsilon = 1e-12);

    let v = t.value_from_z(1.5).unwrap();
    assert_abs_diff_eq!(v, 10.0 * (0.15f64).exp(), epsilon = 1e-12);
}

/// Test that the L = 0 branch is the limit of small L.
#[test]
fn test_log_limit_continuity() {
    let zero = LmsTransform::new(LmsParams::new(0.0, 10.0, 0.1).unwrap(), 0.0);
    let tiny = LmsTransform::new(LmsParams::new(1e-9, 10.0, 0.1).unwrap(), 0.0);

    assert_abs_diff_eq!(
        zero.z_from_value(13.0).unwrap(),
        tiny.z_from_value(13.0).unwrap(),
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        zero.value_from_z(-2.5).unwrap(),
        tiny.value_from_z(-2.5).unwrap(),
        epsilon = 1e-6
    );
}

/// Test the L = 0 branch with the velocity offset.
#[test]
fn test_log_limit_with_offset() {
    let t = LmsTransform::new(LmsParams::new(0.0, 700.0, 0.25).unwrap(), 400.0);

    assert_abs_diff_eq!(t.median(), 300.0, epsilon = 1e-12);
    assert_abs_diff_eq!(t.z_from_value(300.0).unwrap(), 0.0, epsilon = 1e-12);
}

// ============================================================================
// Domain Error Tests
// ============================================================================

/// Test that a non-positive shifted value is rejected.
#[test]
fn test_z_from_value_non_positive_ratio() {
    let t = girls_velocity_month_7();

    // -400 + 400 = 0
    assert!(matches!(
        t.z_from_value(-400.0),
        Err(GrowthError::DomainError { operation: "z_from_value", .. })
    ));
    assert!(matches!(
        t.z_from_value(-500.0),
        Err(GrowthError::DomainError { .. })
    ));
}

/// Test that 1 + LSz <= 0 is rejected instead of producing NaN.
#[test]
fn test_value_from_z_outside_domain() {
    // L * S = 0.5, so z = -2 gives 1 + LSz = 0
    let t = LmsTransform::new(LmsParams::new(1.0, 10.0, 0.5).unwrap(), 0.0);

    assert!(matches!(
        t.value_from_z(-2.0),
        Err(GrowthError::DomainError { operation: "value_from_z", .. })
    ));
    assert!(matches!(
        t.value_from_z(-3.0),
        Err(GrowthError::DomainError { .. })
    ));

    // Negative L bounds z from above instead
    let n = LmsTransform::new(LmsParams::new(-1.0, 10.0, 0.5).unwrap(), 0.0);
    assert!(n.value_from_z(2.5).is_err());
    assert!(n.value_from_z(-2.5).is_ok());
}

/// Test that non-finite inputs are rejected.
#[test]
fn test_non_finite_inputs() {
    let t = girls_velocity_month_7();

    assert!(t.z_from_value(f64::NAN).is_err());
    assert!(t.z_from_value(f64::INFINITY).is_err());
    assert!(t.value_from_z(f64::NAN).is_err());
    assert!(t.value_from_z(f64::NEG_INFINITY).is_err());
}

/// Test the real domain of the inverse transform.
#[test]
fn test_admits_z() {
    // Boys' first-month velocity row: 1 + L*S*z > 0 requires z > -3.28
    let t = LmsTransform::new(LmsParams::new(1.3828, 1423.0783, 0.22048).unwrap(), 400.0);
    assert!(t.admits_z(-3.2));
    assert!(t.admits_z(3.5));
    assert!(!t.admits_z(-3.5));
    assert!(t.value_from_z(-3.5).is_err());

    // Negative L bounds z from above
    let t = LmsTransform::new(LmsParams::new(-2.0, 10.0, 0.5).unwrap(), 0.0);
    assert!(t.admits_z(0.9));
    assert!(!t.admits_z(1.0));

    // L = 0 admits every finite z
    let t = LmsTransform::new(LmsParams::new(0.0, 10.0, 0.1).unwrap(), 0.0);
    assert!(t.admits_z(-100.0));
    assert!(!t.admits_z(f64::NAN));
    assert!(!t.admits_z(f64::INFINITY));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// zFromValue(valueFromZ(z)) == z for any valid triple.
    #[test]
    fn prop_round_trip(
        l in -1.0f64..1.0,
        m in 0.5f64..2000.0,
        s in 0.01f64..0.2,
        offset in prop_oneof![Just(0.0f64), Just(400.0f64)],
        z in -4.0f64..4.0,
    ) {
        let t = LmsTransform::new(LmsParams::new(l, m, s).unwrap(), offset);
        if let Ok(value) = t.value_from_z(z) {
            if let Ok(back) = t.z_from_value(value) {
                prop_assert!((back - z).abs() < 1e-6, "z={} back={}", z, back);
            }
        }
    }

    /// Round trip through the logarithmic branch.
    #[test]
    fn prop_round_trip_log_limit(
        m in 0.5f64..2000.0,
        s in 0.01f64..0.4,
        z in -4.0f64..4.0,
    ) {
        let t = LmsTransform::new(LmsParams::new(0.0, m, s).unwrap(), 0.0);
        let back = t.z_from_value(t.value_from_z(z).unwrap()).unwrap();
        prop_assert!((back - z).abs() < 1e-6);
    }

    /// valueFromZ is strictly increasing in z.
    #[test]
    fn prop_value_monotone(
        l in -1.0f64..1.0,
        m in 0.5f64..2000.0,
        s in 0.01f64..0.2,
        z in -4.0f64..3.0,
        dz in 0.01f64..1.0,
    ) {
        let t = LmsTransform::new(LmsParams::new(l, m, s).unwrap(), 400.0);
        let lo = t.value_from_z(z).unwrap();
        let hi = t.value_from_z(z + dz).unwrap();
        prop_assert!(lo < hi, "value({})={} >= value({})={}", z, lo, z + dz, hi);
    }
}
