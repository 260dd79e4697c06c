//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives secondary outputs from a resolved reference
//! distribution. Currently this is the value/percentile plotting curve.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Reference
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Value/percentile plotting curves.
pub mod curve;
