//! Layer 3: Reference
//!
//! # Purpose
//!
//! This layer holds the compiled-in reference parameter tables and the
//! `(metric, sex) -> table` dispatch. Tables are constant data; the only logic
//! here is age-key resolution.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Reference ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Internal dependencies
use crate::math::lms::LmsParams;
use crate::primitives::errors::GrowthError;
use crate::primitives::measurement::{AgeKey, MetricKind, Sex};

/// Parameter table model and age resolution.
pub mod table;

/// Weight velocity (1-month increments).
pub mod weight_velocity;

/// Weight-for-age.
pub mod weight_for_age;

/// Length-for-age.
pub mod length_for_age;

use self::table::ParameterTable;

/// Reference table of a (metric, sex) group.
pub fn table_for(metric: MetricKind, sex: Sex) -> &'static ParameterTable {
    match (metric, sex) {
        (MetricKind::WeightVelocity, Sex::Female) => &weight_velocity::FEMALE,
        (MetricKind::WeightVelocity, Sex::Male) => &weight_velocity::MALE,
        (MetricKind::WeightForAge, Sex::Female) => &weight_for_age::FEMALE,
        (MetricKind::WeightForAge, Sex::Male) => &weight_for_age::MALE,
        (MetricKind::LengthForAge, Sex::Female) => &length_for_age::FEMALE,
        (MetricKind::LengthForAge, Sex::Male) => &length_for_age::MALE,
    }
}

/// Resolve `(metric, sex, age)` to LMS parameters and the age key used.
pub fn lookup(
    metric: MetricKind,
    sex: Sex,
    age: AgeKey,
) -> Result<(LmsParams<f64>, AgeKey), GrowthError> {
    table_for(metric, sex).lookup(age)
}
