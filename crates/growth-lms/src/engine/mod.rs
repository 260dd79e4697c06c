//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a percentile query by coordinating request
//! validation, reference lookup (Layer 3), the LMS transform and normal CDF
//! (Layer 2), and curve generation (Layer 4).
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Reference
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Percentile evaluation engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for percentile evaluation.
pub mod output;
