//! Value/percentile curves for cumulative-distribution charts.
//!
//! ## Purpose
//!
//! This module samples the reference distribution of one (metric, sex, age)
//! group on an evenly spaced z grid and reports, for each grid point, the
//! measurement value and the percentile. External renderers plot the values
//! against the percentiles as a CDF chart.
//!
//! ## Design notes
//!
//! * **Derived**: Curves are read-only derivations of the LMS transform and the
//!   normal CDF; generating one never changes the scalar result.
//! * **Batched CDF**: Percentiles come from `normal::cdf_batch`.
//! * **Domain clipping**: When `1 + L*S*z` reaches zero inside the configured
//!   interval (large `L * S`), grid points outside the real domain of the
//!   transform are dropped. The remaining points keep their grid positions.
//!
//! ## Invariants
//!
//! * `z_scores`, `values` and `percentiles` have the same length.
//! * Grid points lie in `[z_lower, z_upper]`; the last one is exactly `z_upper`
//!   unless it was clipped.
//! * Both `values` and `percentiles` are strictly increasing.
//! * A curve has at least two points; otherwise generation fails.
//!
//! ## Non-goals
//!
//! * This module does not render charts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::lms::LmsTransform;
use crate::math::normal;
use crate::primitives::cast::{lit, to_f64};
use crate::primitives::errors::GrowthError;

// ============================================================================
// Curve Configuration
// ============================================================================

/// Sampling configuration of a plotting curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig<T> {
    /// Number of grid points (at least 2).
    pub resolution: usize,

    /// Lowest z-score of the grid.
    pub z_lower: T,

    /// Highest z-score of the grid.
    pub z_upper: T,
}

impl<T: Float> CurveConfig<T> {
    /// Default number of grid points.
    pub const DEFAULT_RESOLUTION: usize = 400;

    /// Default plotted z bound (symmetric).
    pub const DEFAULT_Z_BOUND: f64 = 3.5;
}

impl<T: Float> Default for CurveConfig<T> {
    fn default() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
            z_lower: lit(-Self::DEFAULT_Z_BOUND),
            z_upper: lit(Self::DEFAULT_Z_BOUND),
        }
    }
}

// ============================================================================
// Percentile Curve
// ============================================================================

/// Measurement values and percentiles sampled over a z grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentileCurve<T> {
    /// Evenly spaced z-scores.
    pub z_scores: Vec<T>,

    /// Measurement at each z-score, in the metric's unit.
    pub values: Vec<T>,

    /// Percentile (0-100) at each z-score.
    pub percentiles: Vec<T>,
}

impl<T: Float> PercentileCurve<T> {
    /// Sample `transform` over the grid described by `config`.
    ///
    /// The configuration is assumed valid (checked by the builder). Grid points
    /// the transform cannot map to a real value are skipped; fewer than two
    /// remaining points is a `DomainError`.
    pub fn generate(
        transform: &LmsTransform<T>,
        config: &CurveConfig<T>,
    ) -> Result<Self, GrowthError> {
        let z_scores: Vec<T> = Self::grid(config.z_lower, config.z_upper, config.resolution)
            .into_iter()
            .filter(|&z| transform.admits_z(z))
            .collect();

        let n = z_scores.len();
        if n < 2 {
            return Err(GrowthError::DomainError {
                operation: "percentile_curve",
                argument: to_f64(config.z_lower),
            });
        }
        if n < config.resolution {
            tracing::debug!(
                requested = config.resolution,
                kept = n,
                "curve grid clipped to the transform domain"
            );
        }

        let mut values = vec![T::zero(); n];
        transform.values_from_z(&z_scores, &mut values)?;

        let hundred: T = lit(100.0);
        let percentiles = normal::cdf_batch(&z_scores)
            .into_iter()
            .map(|p| p * hundred)
            .collect();

        Ok(Self {
            z_scores,
            values,
            percentiles,
        })
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.z_scores.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.z_scores.is_empty()
    }

    /// `(value, percentile)` pairs in increasing order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.values
            .iter()
            .copied()
            .zip(self.percentiles.iter().copied())
    }

    fn grid(lower: T, upper: T, n: usize) -> Vec<T> {
        if n < 2 {
            return vec![lower; n];
        }
        let last = n - 1;
        let span = upper - lower;
        let denom: T = lit(last as f64);
        (0..n)
            .map(|i| {
                if i == last {
                    upper
                } else {
                    lower + span * lit::<T>(i as f64) / denom
                }
            })
            .collect()
    }
}
