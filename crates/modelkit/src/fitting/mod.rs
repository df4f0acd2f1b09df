//! Layer 2: Fitting
//!
//! # Purpose
//!
//! This layer defines the contract robust estimators (RANSAC, least-median
//! of squares, ...) implement, and the result value they hand back. No
//! estimator lives here.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Fitting ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Result of a successful fit.
pub mod match_set;

/// The model-matcher trait.
pub mod matcher;
