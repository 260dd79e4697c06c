//! WHO Child Growth Standards (2006): 1-month weight increments, birth to 12 months.
//!
//! Keys are the end month of the interval `[key - 1, key]`. Medians are in
//! grams and already include the 400 g offset. The girls' table shares a
//! single `L`; the boys' table carries one per interval.

// Internal dependencies
use crate::primitives::measurement::{AgeKey, MetricKind, Sex};
use crate::reference::table::ParameterTable;

/// Box-Cox power shared by every girls' interval.
pub const FEMALE_L: f64 = 0.7781;

/// Girls: `(end month, M, S)`.
static FEMALE_ROWS: [(AgeKey, f64, f64); 12] = [
    (1, 1279.4834, 0.21479),
    (2, 1411.1075, 0.19384),
    (3, 1118.0098, 0.19766),
    (4, 984.8825, 0.20995),
    (5, 888.9803, 0.22671),
    (6, 801.3910, 0.24596),
    (7, 744.3023, 0.26515),
    (8, 710.6923, 0.28409),
    (9, 672.6072, 0.30106),
    (10, 644.6032, 0.31676),
    (11, 633.2166, 0.33208),
    (12, 631.7383, 0.34627),
];

/// Boys: `(end month, L, M, S)`.
static MALE_ROWS: [(AgeKey, f64, f64, f64); 12] = [
    (1, 1.3828, 1423.0783, 0.22048),
    (2, 0.7241, 1596.3470, 0.19296),
    (3, 0.6590, 1215.3989, 0.19591),
    (4, 0.7003, 1017.0488, 0.20965),
    (5, 0.7419, 921.6249, 0.22790),
    (6, 0.7668, 822.1842, 0.24854),
    (7, 0.7688, 756.5306, 0.26783),
    (8, 0.7624, 715.6257, 0.28677),
    (9, 0.7620, 684.7459, 0.30439),
    (10, 0.7659, 658.5809, 0.32154),
    (11, 0.7713, 643.4374, 0.33882),
    (12, 0.7761, 639.4743, 0.35502),
];

/// Girls' weight velocity table.
pub static FEMALE: ParameterTable =
    ParameterTable::shared_l(MetricKind::WeightVelocity, Sex::Female, FEMALE_L, &FEMALE_ROWS);

/// Boys' weight velocity table.
pub static MALE: ParameterTable =
    ParameterTable::per_row(MetricKind::WeightVelocity, Sex::Male, &MALE_ROWS);
