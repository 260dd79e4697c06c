//! WHO Child Growth Standards (2006): length-for-age, birth to 24 months.
//!
//! Medians are in centimetres. Only months 0-6, 12, 18 and 24 are tabulated;
//! other ages resolve to the nearest key. Length is normally distributed in
//! the standards, so both sexes share `L = 1`.

// Internal dependencies
use crate::primitives::measurement::{AgeKey, MetricKind, Sex};
use crate::reference::table::ParameterTable;

/// Box-Cox power of the length-for-age standards.
pub const LENGTH_L: f64 = 1.0;

/// Girls: `(month, M, S)`.
static FEMALE_ROWS: [(AgeKey, f64, f64); 10] = [
    (0, 49.1477, 0.03790),
    (1, 53.6872, 0.03640),
    (2, 57.0673, 0.03568),
    (3, 59.8029, 0.03520),
    (4, 62.0899, 0.03486),
    (5, 64.0301, 0.03463),
    (6, 65.7311, 0.03448),
    (12, 74.0150, 0.03479),
    (18, 80.7079, 0.03598),
    (24, 86.4153, 0.03734),
];

/// Boys: `(month, M, S)`.
static MALE_ROWS: [(AgeKey, f64, f64); 10] = [
    (0, 49.8842, 0.03795),
    (1, 54.7244, 0.03557),
    (2, 58.4249, 0.03424),
    (3, 61.4292, 0.03328),
    (4, 63.8860, 0.03257),
    (5, 65.9026, 0.03204),
    (6, 67.6236, 0.03165),
    (12, 75.7488, 0.03137),
    (18, 82.2587, 0.03279),
    (24, 87.8161, 0.03479),
];

/// Girls' length-for-age table.
pub static FEMALE: ParameterTable =
    ParameterTable::shared_l(MetricKind::LengthForAge, Sex::Female, LENGTH_L, &FEMALE_ROWS);

/// Boys' length-for-age table.
pub static MALE: ParameterTable =
    ParameterTable::shared_l(MetricKind::LengthForAge, Sex::Male, LENGTH_L, &MALE_ROWS);
