//! Parameter table model and age-resolution policy.
//!
//! ## Purpose
//!
//! This module defines `ParameterTable`, an immutable mapping from age keys to
//! LMS parameter triples for one (metric, sex) group, and the lookup that maps
//! an arbitrary requested age onto a usable key.
//!
//! ## Design notes
//!
//! * **Two layouts**: Some source tables share a single `L` across all ages and
//!   list only `(M, S)` per row; others list a full `(L, M, S)` per row. Both
//!   layouts are kept as published instead of being widened to a uniform row.
//! * **Static data**: Tables are `static` values built from `&'static` slices,
//!   read-only and shareable across threads without locking.
//! * **Policy by metric**: Dense metrics require an exact key; sparse metrics
//!   resolve to the nearest key, ties going to the smaller key.
//!
//! ## Invariants
//!
//! * Rows are sorted by strictly increasing age key.
//! * The resolved key always belongs to the table.
//! * A requested age outside `[min key, max key]` is never extrapolated.
//!
//! ## Non-goals
//!
//! * This module does not interpolate parameters between keys.
//! * This module does not load tables at runtime.

// Internal dependencies
use crate::math::lms::LmsParams;
use crate::primitives::errors::GrowthError;
use crate::primitives::measurement::{AgeKey, KeyPolicy, MetricKind, Sex};

// ============================================================================
// Table Layout
// ============================================================================

/// Row storage of a reference table, preserving the published layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableRows {
    /// One `L` shared by every row; rows hold `(age, M, S)`.
    SharedL {
        /// Box-Cox power common to all ages.
        l: f64,
        /// `(age, M, S)` rows.
        rows: &'static [(AgeKey, f64, f64)],
    },

    /// Rows hold a full `(age, L, M, S)` triple.
    PerRow {
        /// `(age, L, M, S)` rows.
        rows: &'static [(AgeKey, f64, f64, f64)],
    },
}

impl TableRows {
    fn len(&self) -> usize {
        match self {
            Self::SharedL { rows, .. } => rows.len(),
            Self::PerRow { rows } => rows.len(),
        }
    }

    fn key(&self, index: usize) -> AgeKey {
        match self {
            Self::SharedL { rows, .. } => rows[index].0,
            Self::PerRow { rows } => rows[index].0,
        }
    }

    fn params(&self, index: usize) -> LmsParams<f64> {
        match self {
            Self::SharedL { l, rows } => {
                let (_, m, s) = rows[index];
                LmsParams { l: *l, m, s }
            }
            Self::PerRow { rows } => {
                let (_, l, m, s) = rows[index];
                LmsParams { l, m, s }
            }
        }
    }
}

// ============================================================================
// Parameter Table
// ============================================================================

/// Reference LMS parameters of one (metric, sex) group, indexed by age key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterTable {
    /// Metric the table describes.
    pub metric: MetricKind,

    /// Sex the table describes.
    pub sex: Sex,

    rows: TableRows,
}

impl ParameterTable {
    /// Table whose rows share one `L`.
    pub const fn shared_l(
        metric: MetricKind,
        sex: Sex,
        l: f64,
        rows: &'static [(AgeKey, f64, f64)],
    ) -> Self {
        Self {
            metric,
            sex,
            rows: TableRows::SharedL { l, rows },
        }
    }

    /// Table with a full `(L, M, S)` triple per row.
    pub const fn per_row(
        metric: MetricKind,
        sex: Sex,
        rows: &'static [(AgeKey, f64, f64, f64)],
    ) -> Self {
        Self {
            metric,
            sex,
            rows: TableRows::PerRow { rows },
        }
    }

    /// Raw row storage.
    pub fn rows(&self) -> TableRows {
        self.rows
    }

    /// Number of age keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.len() == 0
    }

    /// Age keys in increasing order.
    pub fn keys(&self) -> impl Iterator<Item = AgeKey> + '_ {
        (0..self.rows.len()).map(move |i| self.rows.key(i))
    }

    /// Smallest age key.
    pub fn min_key(&self) -> Option<AgeKey> {
        self.keys().next()
    }

    /// Largest age key.
    pub fn max_key(&self) -> Option<AgeKey> {
        self.keys().last()
    }

    /// Parameters stored at an exact key.
    pub fn get(&self, key: AgeKey) -> Option<LmsParams<f64>> {
        self.keys()
            .position(|k| k == key)
            .map(|i| self.rows.params(i))
    }

    /// Resolve a requested age to a key and return its parameters.
    ///
    /// Returns the parameters together with the key actually used, which
    /// differs from `age` only when the metric's policy is `Nearest`.
    pub fn lookup(&self, age: AgeKey) -> Result<(LmsParams<f64>, AgeKey), GrowthError> {
        let (min, max) = match (self.min_key(), self.max_key()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(self.out_of_range(age, 0, 0)),
        };

        if age < min || age > max {
            return Err(self.out_of_range(age, min, max));
        }

        let index = match self.metric.key_policy() {
            KeyPolicy::Exact => self.keys().position(|k| k == age),
            KeyPolicy::Nearest => self.nearest_index(age),
        }
        .ok_or_else(|| self.out_of_range(age, min, max))?;

        Ok((self.rows.params(index), self.rows.key(index)))
    }

    // Keys are ascending and only a strictly smaller distance replaces the
    // best candidate, so ties keep the smaller key.
    fn nearest_index(&self, age: AgeKey) -> Option<usize> {
        let mut best: Option<(usize, AgeKey)> = None;
        for (i, key) in self.keys().enumerate() {
            let dist = key.abs_diff(age);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    fn out_of_range(&self, age: AgeKey, min: AgeKey, max: AgeKey) -> GrowthError {
        GrowthError::OutOfRange {
            metric: self.metric,
            age,
            min,
            max,
        }
    }
}
