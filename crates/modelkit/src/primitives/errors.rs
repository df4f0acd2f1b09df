//! Error types for grow arrays and model matching.
//!
//! ## Purpose
//!
//! This module defines the error conditions surfaced by the container and
//! fitting layers: out-of-range access, malformed range arguments, underflow
//! of an empty container, and queries against a matcher that has not produced
//! a model yet.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., index vs. length).
//! * **Fail-fast**: Every check runs before the container is mutated, so an
//!   error never leaves a partially shifted buffer behind.
//! * **No-std**: No allocation is needed to build or display an error.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Bounds violations**: `get`, `remove`, `insert` and match-set lookups.
//! 2. **Invalid arguments**: inverted ranges and source slices that are too short.
//! 3. **Underflow**: removing the tail of an empty container.
//! 4. **Missing result**: asking a matcher for inliers before a successful fit.
//!
//! ## Non-goals
//!
//! * A failed fit is not an error; `ModelMatcher::process` reports it as `false`.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for container and model-matching operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelKitError {
    /// Index is outside the logical range `[0, len)`.
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Logical length at the time of the request.
        len: usize,
    },

    /// Inclusive range `[first, last]` is inverted or extends past the end.
    InvalidRange {
        /// First index of the range.
        first: usize,
        /// Last index of the range (inclusive).
        last: usize,
        /// Logical length at the time of the request.
        len: usize,
    },

    /// A source slice is shorter than the requested end index.
    SourceOutOfBounds {
        /// Requested end index (exclusive).
        end: usize,
        /// Length of the source slice.
        len: usize,
    },

    /// The container holds no elements.
    EmptyContainer,

    /// Fraction must lie in `[0, 1]`.
    InvalidFraction(f64),

    /// The same input index was listed twice in a match set.
    DuplicateIndex(usize),

    /// No model has been fitted successfully yet.
    NoModel,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ModelKitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: index = {index}, len = {len}")
            }
            Self::InvalidRange { first, last, len } => {
                write!(
                    f,
                    "Invalid range: [{first}, {last}] (requires first <= last < len {len})"
                )
            }
            Self::SourceOutOfBounds { end, len } => {
                write!(f, "Source out of bounds: end {end} exceeds source length {len}")
            }
            Self::EmptyContainer => write!(f, "Container is empty"),
            Self::InvalidFraction(fraction) => {
                write!(f, "Invalid fraction: {fraction} (must be >= 0 and <= 1)")
            }
            Self::DuplicateIndex(index) => {
                write!(f, "Duplicate input index in match set: {index}")
            }
            Self::NoModel => write!(f, "No model has been fitted yet"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ModelKitError {}
