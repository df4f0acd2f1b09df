//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the storage primitives and the shared error type used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Fitting
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Numeric element kinds.
pub mod element;

/// Growable primitive arrays.
pub mod grow_array;

/// Shared error types.
pub mod errors;
