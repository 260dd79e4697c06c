//! Standard normal distribution utilities.
//!
//! ## Purpose
//!
//! This module provides the standard normal CDF used to turn a z-score into a
//! percentile, a batched form of it for plotting curves, and the quantile
//! (inverse CDF) used to place reference lines at a given percentile.
//!
//! ## Design notes
//!
//! * **CDF**: `Phi(z) = 0.5 * (1 + erf(z / sqrt(2)))` with `libm::erf`, which is
//!   accurate to a few ulps, well inside 1e-9 absolute error on [-6, 6].
//! * **Quantile**: Acklam's rational approximation refined by one Halley step
//!   against the CDF.
//! * **Batching**: `cdf_batch` applies the scalar CDF element-wise; order and
//!   per-element values are identical to calling `cdf` in a loop.
//!
//! ## Invariants
//!
//! * `cdf(0) = 0.5` and `cdf(-z) = 1 - cdf(z)`.
//! * `cdf` is non-decreasing and bounded by [0, 1].
//! * `quantile(cdf(z)) ~= z` for moderate `z`.
//!
//! ## Non-goals
//!
//! * This module does not provide non-standard (mu, sigma) parameterisations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::SQRT_2;
use num_traits::Float;

// Internal dependencies
use crate::primitives::cast::{lit, to_f64};
use crate::primitives::errors::GrowthError;

/// Square root of 2*pi.
const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

// ============================================================================
// Cumulative Distribution
// ============================================================================

/// Standard normal cumulative distribution function.
///
/// NaN propagates; infinities map to 0 and 1.
#[inline]
pub fn cdf<T: Float>(z: T) -> T {
    lit(cdf_f64(to_f64(z)))
}

/// Element-wise standard normal CDF over an ordered sequence of z-values.
pub fn cdf_batch<T: Float>(zs: &[T]) -> Vec<T> {
    zs.iter().map(|&z| cdf(z)).collect()
}

#[inline]
fn cdf_f64(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / SQRT_2))
}

// ============================================================================
// Quantile
// ============================================================================

/// Inverse of the standard normal CDF for `p` in the open interval (0, 1).
pub fn quantile<T: Float>(p: T) -> Result<T, GrowthError> {
    let p = to_f64(p);
    if !(p > 0.0 && p < 1.0) {
        return Err(GrowthError::InvalidProbability(p));
    }

    let mut x = acklam_inverse_cdf(p);

    // Halley refinement against the exact CDF (erfc keeps the lower tail precise)
    let e = 0.5 * libm::erfc(-x / SQRT_2) - p;
    let u = e * SQRT_2PI * libm::exp(x * x / 2.0);
    x -= u / (1.0 + x * u / 2.0);

    if x.is_finite() {
        Ok(lit(x))
    } else {
        Err(GrowthError::InvalidProbability(p))
    }
}

/// Rational approximation of the inverse standard normal CDF.
fn acklam_inverse_cdf(p: f64) -> f64 {
    // Coefficients for central region
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];

    // Coefficients for tail regions
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    if p < P_LOW {
        let q = libm::sqrt(-2.0 * libm::log(p));
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    } else if p > P_HIGH {
        let q = libm::sqrt(-2.0 * libm::log(1.0 - p));
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        -(num / den)
    } else {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}
