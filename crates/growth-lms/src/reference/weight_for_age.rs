//! WHO Child Growth Standards (2006): weight-for-age, birth to 24 months.
//!
//! Medians are in kilograms; every whole month from 0 to 24 is present.

// Internal dependencies
use crate::primitives::measurement::{AgeKey, MetricKind, Sex};
use crate::reference::table::ParameterTable;

/// Girls: `(month, L, M, S)`.
static FEMALE_ROWS: [(AgeKey, f64, f64, f64); 25] = [
    (0, 0.3809, 3.2322, 0.14171),
    (1, 0.1714, 4.1873, 0.13724),
    (2, 0.0962, 5.1282, 0.13000),
    (3, 0.0402, 5.8458, 0.12619),
    (4, -0.0050, 6.4237, 0.12402),
    (5, -0.0430, 6.8985, 0.12274),
    (6, -0.0756, 7.2970, 0.12204),
    (7, -0.1039, 7.6422, 0.12178),
    (8, -0.1288, 7.9487, 0.12181),
    (9, -0.1507, 8.2254, 0.12199),
    (10, -0.1700, 8.4800, 0.12223),
    (11, -0.1872, 8.7192, 0.12247),
    (12, -0.2024, 8.9481, 0.12268),
    (13, -0.2158, 9.1699, 0.12283),
    (14, -0.2278, 9.3870, 0.12294),
    (15, -0.2384, 9.6008, 0.12299),
    (16, -0.2478, 9.8124, 0.12303),
    (17, -0.2562, 10.0226, 0.12306),
    (18, -0.2637, 10.2315, 0.12309),
    (19, -0.2703, 10.4393, 0.12315),
    (20, -0.2762, 10.6464, 0.12323),
    (21, -0.2815, 10.8534, 0.12335),
    (22, -0.2862, 11.0608, 0.12350),
    (23, -0.2903, 11.2688, 0.12369),
    (24, -0.2941, 11.4775, 0.12390),
];

/// Boys: `(month, L, M, S)`.
static MALE_ROWS: [(AgeKey, f64, f64, f64); 25] = [
    (0, 0.3487, 3.3464, 0.14602),
    (1, 0.2297, 4.4709, 0.13395),
    (2, 0.1970, 5.5675, 0.12385),
    (3, 0.1738, 6.3762, 0.11727),
    (4, 0.1553, 7.0023, 0.11316),
    (5, 0.1395, 7.5105, 0.11080),
    (6, 0.1257, 7.9340, 0.10958),
    (7, 0.1134, 8.2970, 0.10902),
    (8, 0.1021, 8.6151, 0.10882),
    (9, 0.0917, 8.9014, 0.10881),
    (10, 0.0820, 9.1649, 0.10891),
    (11, 0.0730, 9.4122, 0.10906),
    (12, 0.0644, 9.6479, 0.10925),
    (13, 0.0563, 9.8749, 0.10949),
    (14, 0.0487, 10.0953, 0.10976),
    (15, 0.0413, 10.3108, 0.11007),
    (16, 0.0343, 10.5228, 0.11041),
    (17, 0.0275, 10.7319, 0.11079),
    (18, 0.0211, 10.9385, 0.11119),
    (19, 0.0148, 11.1430, 0.11164),
    (20, 0.0087, 11.3462, 0.11211),
    (21, 0.0029, 11.5486, 0.11261),
    (22, -0.0028, 11.7504, 0.11314),
    (23, -0.0083, 11.9514, 0.11369),
    (24, -0.0137, 12.1515, 0.11426),
];

/// Girls' weight-for-age table.
pub static FEMALE: ParameterTable =
    ParameterTable::per_row(MetricKind::WeightForAge, Sex::Female, &FEMALE_ROWS);

/// Boys' weight-for-age table.
pub static MALE: ParameterTable =
    ParameterTable::per_row(MetricKind::WeightForAge, Sex::Male, &MALE_ROWS);
