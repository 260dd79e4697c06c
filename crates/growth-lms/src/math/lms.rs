//! LMS (Box-Cox power) transform between a measurement and a z-score.
//!
//! ## Purpose
//!
//! This module converts a raw measurement into a standard normal z-score and
//! back, given the skewness (L), median (M) and coefficient of variation (S)
//! of a reference distribution plus an additive offset.
//!
//! ## Design notes
//!
//! * **Stable powers**: `(x / M)^L - 1` is evaluated as `expm1(L * ln(x / M))`
//!   and `(1 + LSz)^(1/L)` as `exp(ln_1p(LSz) / L)`, so small `|L|` does not
//!   lose precision to cancellation.
//! * **Logarithmic limit**: `L = 0` takes the explicit log/exp branch. None of
//!   the shipped tables has `L = 0`, so this branch is only reached by
//!   caller-supplied parameters.
//! * **Offset**: The offset `delta` is added before the forward transform and
//!   removed after the inverse, so the reference median is `M - delta`.
//!
//! ## Key concepts
//!
//! * `z = ((x + delta) / M)^L - 1) / (L * S)`, or `ln((x + delta) / M) / S` when `L = 0`.
//! * `x = M * (1 + L * S * z)^(1 / L) - delta`, or `M * exp(S * z) - delta` when `L = 0`.
//!
//! ## Invariants
//!
//! * Both directions are exact inverses up to floating-point rounding.
//! * `value_from_z` is strictly increasing in `z` wherever it is defined.
//! * Results are always finite; anything else is a `DomainError`.
//!
//! ## Non-goals
//!
//! * This module does not fit or smooth LMS curves.
//! * This module does not look up parameters by age.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::cast::{lit, to_f64};
use crate::primitives::errors::GrowthError;

// ============================================================================
// Parameters
// ============================================================================

/// LMS parameter triple of one reference distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsParams<T> {
    /// Box-Cox power (skewness).
    pub l: T,

    /// Median.
    pub m: T,

    /// Coefficient of variation.
    pub s: T,
}

impl<T: Float> LmsParams<T> {
    /// Build a validated parameter triple (`M > 0`, `S > 0`, all finite).
    pub fn new(l: T, m: T, s: T) -> Result<Self, GrowthError> {
        if !l.is_finite() {
            return Err(GrowthError::DomainError {
                operation: "lms_params.l",
                argument: to_f64(l),
            });
        }
        if !m.is_finite() || m <= T::zero() {
            return Err(GrowthError::DomainError {
                operation: "lms_params.m",
                argument: to_f64(m),
            });
        }
        if !s.is_finite() || s <= T::zero() {
            return Err(GrowthError::DomainError {
                operation: "lms_params.s",
                argument: to_f64(s),
            });
        }
        Ok(Self { l, m, s })
    }

    /// Convert the triple into another float type.
    pub fn cast<U: Float>(&self) -> LmsParams<U> {
        LmsParams {
            l: lit(to_f64(self.l)),
            m: lit(to_f64(self.m)),
            s: lit(to_f64(self.s)),
        }
    }
}

// ============================================================================
// Transform
// ============================================================================

/// Bidirectional LMS transform bound to one parameter triple and offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsTransform<T> {
    params: LmsParams<T>,
    offset: T,
}

impl<T: Float> LmsTransform<T> {
    /// Bind a parameter triple and an additive offset.
    pub fn new(params: LmsParams<T>, offset: T) -> Self {
        Self { params, offset }
    }

    /// The bound parameter triple.
    pub fn params(&self) -> LmsParams<T> {
        self.params
    }

    /// The bound additive offset.
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Median of the reference distribution in measurement units (`M - delta`).
    pub fn median(&self) -> T {
        self.params.m - self.offset
    }

    /// Convert a measurement into a z-score.
    pub fn z_from_value(&self, value: T) -> Result<T, GrowthError> {
        let LmsParams { l, m, s } = self.params;

        let ratio = (value + self.offset) / m;
        if !ratio.is_finite() || ratio <= T::zero() {
            return Err(GrowthError::DomainError {
                operation: "z_from_value",
                argument: to_f64(ratio),
            });
        }

        let z = if l == T::zero() {
            ratio.ln() / s
        } else {
            (l * ratio.ln()).exp_m1() / (l * s)
        };

        Self::finite(z, "z_from_value", value)
    }

    /// Convert a z-score into a measurement.
    pub fn value_from_z(&self, z: T) -> Result<T, GrowthError> {
        if !z.is_finite() {
            return Err(GrowthError::DomainError {
                operation: "value_from_z",
                argument: to_f64(z),
            });
        }

        let LmsParams { l, m, s } = self.params;

        let shifted = if l == T::zero() {
            m * (s * z).exp()
        } else {
            let lsz = l * s * z;
            // 1 + LSz must stay positive for a real power
            if T::one() + lsz <= T::zero() {
                return Err(GrowthError::DomainError {
                    operation: "value_from_z",
                    argument: to_f64(T::one() + lsz),
                });
            }
            m * (lsz.ln_1p() / l).exp()
        };

        Self::finite(shifted - self.offset, "value_from_z", z)
    }

    /// Whether `z` lies in the real domain of the inverse transform (`1 + L*S*z > 0`).
    pub fn admits_z(&self, z: T) -> bool {
        let LmsParams { l, s, .. } = self.params;
        z.is_finite() && (l == T::zero() || T::one() + l * s * z > T::zero())
    }

    /// Map a batch of z-scores to measurements, failing on the first invalid one.
    pub fn values_from_z(&self, zs: &[T], out: &mut [T]) -> Result<(), GrowthError> {
        for (dst, &z) in out.iter_mut().zip(zs.iter()) {
            *dst = self.value_from_z(z)?;
        }
        Ok(())
    }

    #[inline]
    fn finite(result: T, operation: &'static str, input: T) -> Result<T, GrowthError> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(GrowthError::DomainError {
                operation,
                argument: to_f64(input),
            })
        }
    }
}
