//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks:
//! - The LMS transform between measurements and z-scores
//! - Standard normal CDF and quantile
//!
//! These functions know nothing about ages, sexes or reference tables.
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
//! Layer 3: Reference
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// LMS (Box-Cox) value/z-score transform.
pub mod lms;

/// Standard normal distribution.
pub mod normal;
