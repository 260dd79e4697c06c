//! Conversion of `f64` constants into the evaluation float type.

// External dependencies
use num_traits::Float;

/// Convert an `f64` constant into `T`.
///
/// `Float::from` only fails for values outside the target range, which the
/// crate's constants never are; NaN is returned in that case so the finiteness
/// checks downstream turn it into a typed error.
#[inline]
pub fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert a value of the evaluation type back to `f64` for error context.
#[inline]
pub fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
