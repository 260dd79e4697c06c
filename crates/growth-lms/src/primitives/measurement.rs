//! Measurement vocabulary shared by every layer.
//!
//! ## Purpose
//!
//! This module defines the closed set of metrics, the sex variant, the age key
//! type, the shape of a raw measurement (a single value, or a
//! previous/current pair for velocity metrics), and the request that bundles
//! them into one percentile query.
//!
//! ## Design notes
//!
//! * **Closed dispatch**: `MetricKind x Sex` selects a reference table; adding a
//!   metric is a data addition plus one variant.
//! * **Per-metric constants**: The additive offset, the key domain and the age
//!   resolution policy are properties of the metric, not of the caller.
//!
//! ## Invariants
//!
//! * Only `WeightVelocity` has a non-zero offset (400 g).
//! * `WeightVelocity` is the only metric measured as a pair.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Discrete age in whole months used to index a reference table.
pub type AgeKey = u32;

/// Additive shift (grams) applied to monthly weight increments before the LMS transform.
pub const VELOCITY_OFFSET_G: f64 = 400.0;

/// Grams per kilogram, used to express weight increments in table units.
pub const GRAMS_PER_KG: f64 = 1000.0;

// ============================================================================
// Sex
// ============================================================================

/// Sex of the child; each sex owns independent reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    /// Girls' reference tables.
    Female,

    /// Boys' reference tables.
    Male,
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Female => write!(f, "Female"),
            Self::Male => write!(f, "Male"),
        }
    }
}

// ============================================================================
// Metric
// ============================================================================

/// How a requested age is mapped onto a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Every integer key in the domain is present; the age must match one.
    Exact,

    /// Keys are sparse; the nearest key is used, ties go to the smaller key.
    Nearest,
}

/// Anthropometric quantity being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricKind {
    /// One-month weight increment; the key is the end month of `[key - 1, key]`.
    WeightVelocity,

    /// Cumulative weight.
    WeightForAge,

    /// Recumbent length.
    LengthForAge,
}

impl MetricKind {
    /// Additive offset applied before the LMS transform and removed after the inverse.
    pub fn offset(&self) -> f64 {
        match self {
            Self::WeightVelocity => VELOCITY_OFFSET_G,
            Self::WeightForAge | Self::LengthForAge => 0.0,
        }
    }

    /// Age resolution policy of the metric's tables.
    pub fn key_policy(&self) -> KeyPolicy {
        match self {
            Self::WeightVelocity | Self::WeightForAge => KeyPolicy::Exact,
            Self::LengthForAge => KeyPolicy::Nearest,
        }
    }

    /// Whether a request for this metric carries a previous/current pair.
    pub fn is_velocity(&self) -> bool {
        matches!(self, Self::WeightVelocity)
    }

    /// Unit of the observed quantity and of the reference median.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::WeightVelocity => "g",
            Self::WeightForAge => "kg",
            Self::LengthForAge => "cm",
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::WeightVelocity => write!(f, "weight velocity"),
            Self::WeightForAge => write!(f, "weight-for-age"),
            Self::LengthForAge => write!(f, "length-for-age"),
        }
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Raw measurement supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measurement<T> {
    /// A single weight (kg) or length (cm).
    Single(T),

    /// Two weights (kg) taken one month apart.
    Interval {
        /// Weight at the start of the interval.
        previous: T,
        /// Weight at the end of the interval.
        current: T,
    },
}

// ============================================================================
// Request
// ============================================================================

/// One percentile query: which table, which age, which measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementRequest<T> {
    /// Metric to evaluate.
    pub metric: MetricKind,

    /// Sex of the child.
    pub sex: Sex,

    /// Age in whole months (end month of the interval for velocity).
    pub age_months: AgeKey,

    /// Raw measurement.
    pub measurement: Measurement<T>,
}

impl<T> MeasurementRequest<T> {
    /// Generic request; shape/metric consistency is checked at evaluation.
    pub fn new(
        metric: MetricKind,
        sex: Sex,
        age_months: AgeKey,
        measurement: Measurement<T>,
    ) -> Self {
        Self {
            metric,
            sex,
            age_months,
            measurement,
        }
    }

    /// Weight gain over `[end_month - 1, end_month]` from two weights in kilograms.
    pub fn weight_velocity(sex: Sex, end_month: AgeKey, previous_kg: T, current_kg: T) -> Self {
        Self::new(
            MetricKind::WeightVelocity,
            sex,
            end_month,
            Measurement::Interval {
                previous: previous_kg,
                current: current_kg,
            },
        )
    }

    /// Weight in kilograms at a given age.
    pub fn weight_for_age(sex: Sex, age_months: AgeKey, weight_kg: T) -> Self {
        Self::new(
            MetricKind::WeightForAge,
            sex,
            age_months,
            Measurement::Single(weight_kg),
        )
    }

    /// Length in centimetres at a given age.
    pub fn length_for_age(sex: Sex, age_months: AgeKey, length_cm: T) -> Self {
        Self::new(
            MetricKind::LengthForAge,
            sex,
            age_months,
            Measurement::Single(length_cm),
        )
    }
}
