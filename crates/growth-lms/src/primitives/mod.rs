//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the vocabulary types and the shared error type used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Metric, sex, age key and measurement types.
pub mod measurement;

/// Shared error types.
pub mod errors;

/// Float literal conversion.
pub mod cast;
