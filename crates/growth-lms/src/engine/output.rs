//! Output types for percentile evaluation.
//!
//! ## Purpose
//!
//! This module defines `PercentileResult`, which carries the z-score, the
//! percentile and the reference median of one evaluated request, along with
//! the context a presentation layer needs to explain it.
//!
//! ## Design notes
//!
//! * **Transient**: A result is created per query and shares nothing with others.
//! * **Optional curve**: The plotting curve is only present when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `percentile` is in [0, 100] and equals `100 * cdf(z_score)`.
//! * `resolved_age` differs from `requested_age` only for sparse tables.
//! * All scalar fields are finite.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::curve::PercentileCurve;
use crate::primitives::measurement::{AgeKey, MetricKind, Sex};

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of evaluating one measurement request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentileResult<T> {
    /// Metric that was evaluated.
    pub metric: MetricKind,

    /// Sex whose table was used.
    pub sex: Sex,

    /// Age requested by the caller, in months.
    pub requested_age: AgeKey,

    /// Age key whose parameters were used.
    pub resolved_age: AgeKey,

    /// Observed quantity in the metric's unit (grams of gain for velocity).
    pub observed: T,

    /// LMS z-score of the observed quantity.
    pub z_score: T,

    /// Percentile (0-100) of the observed quantity.
    pub percentile: T,

    /// Median of the reference distribution in the metric's unit.
    pub reference_median: T,

    /// Value/percentile curve for plotting, if requested.
    pub curve: Option<PercentileCurve<T>>,
}

impl<T: Float> PercentileResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if the age key was approximated by a neighbouring key.
    pub fn is_approximated(&self) -> bool {
        self.requested_age != self.resolved_age
    }

    /// Check if a plotting curve was computed.
    pub fn has_curve(&self) -> bool {
        self.curve.is_some()
    }

    /// Month interval `[start, end]` of a velocity result.
    pub fn interval(&self) -> Option<(AgeKey, AgeKey)> {
        if self.metric.is_velocity() {
            Some((self.resolved_age.saturating_sub(1), self.resolved_age))
        } else {
            None
        }
    }

    /// Observed point `(value, percentile)` for overlaying on the curve.
    pub fn marker(&self) -> (T, T) {
        (self.observed, self.percentile)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for PercentileResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let unit = self.metric.unit();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Metric:      {}", self.metric)?;
        writeln!(f, "  Sex:         {}", self.sex)?;

        match self.interval() {
            Some((start, end)) => writeln!(f, "  Interval:    {} -> {} months", start, end)?,
            None => writeln!(f, "  Age:         {} months", self.resolved_age)?,
        }
        if self.is_approximated() {
            writeln!(
                f,
                "  Note:        requested age {} months approximated by {} months",
                self.requested_age, self.resolved_age
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Percentile:")?;
        writeln!(f, "  Observed:    {:.2} {}", self.observed, unit)?;
        writeln!(f, "  Median:      {:.2} {}", self.reference_median, unit)?;
        writeln!(f, "  Z-score:     {:.4}", self.z_score)?;
        writeln!(f, "  Percentile:  {:.1}", self.percentile)?;

        if let Some(curve) = &self.curve {
            writeln!(f)?;
            writeln!(f, "Curve: {} points", curve.len())?;
        }

        Ok(())
    }
}
