//! # modelkit — Growable primitive arrays and robust model fitting for Rust
//!
//! Two load-bearing primitives for numerical and optimization code:
//!
//! - **`GrowArray<T>`**: a dense, growable array of fixed-width numeric values
//!   with O(1) random access and amortized O(1) append, designed to be reused
//!   across iterations without reallocating.
//! - **`ModelMatcher`**: the contract implemented by robust estimators such as
//!   RANSAC. A matcher fits a model to noisy observations and reports the
//!   inliers (the *match set*), where each inlier came from, and a fit error.
//!
//! ## Quick Start
//!
//! ### Grow arrays
//!
//! ```rust
//! use modelkit::prelude::*;
//!
//! let mut values = GrowArrayI32::new();
//! for v in [5, 3, 1, 4, 2] {
//!     values.push(v);
//! }
//!
//! values.sort();
//! assert_eq!(values.as_slice(), &[1, 2, 3, 4, 5]);
//! assert_eq!(values.index_of(4), Some(3));
//!
//! // Median via fractional access
//! assert_eq!(values.get_fraction(0.5)?, 3);
//!
//! // Bounds are checked
//! assert!(values.get(10).is_err());
//! # Result::<(), ModelKitError>::Ok(())
//! ```
//!
//! ### Implementing a matcher
//!
//! ```rust
//! use modelkit::prelude::*;
//!
//! /// Fits a constant to scalar readings, rejecting readings far from the median.
//! struct ConstantMatcher {
//!     threshold: f64,
//!     result: Option<MatchSet<f64, f64>>,
//! }
//!
//! impl ModelMatcher<f64> for ConstantMatcher {
//!     type Model = f64;
//!
//!     fn process(&mut self, data_set: &[f64]) -> bool {
//!         if !self.has_minimum(data_set) {
//!             return false;
//!         }
//!
//!         let mut sorted = GrowArrayF64::from_slice(data_set);
//!         sorted.sort();
//!         let median = match sorted.get_fraction(0.5) {
//!             Ok(m) => m,
//!             Err(_) => return false,
//!         };
//!
//!         let mut set = MatchSet::new(median, 0.0);
//!         for (i, &v) in data_set.iter().enumerate() {
//!             if (v - median).abs() <= self.threshold && set.push(v, i).is_err() {
//!                 return false;
//!             }
//!         }
//!         if set.len() < self.minimum_size() {
//!             return false;
//!         }
//!         self.result = Some(set);
//!         true
//!     }
//!
//!     fn match_set(&self) -> Option<&MatchSet<f64, f64>> {
//!         self.result.as_ref()
//!     }
//!
//!     fn minimum_size(&self) -> usize {
//!         1
//!     }
//! }
//!
//! let mut matcher = ConstantMatcher { threshold: 0.5, result: None };
//! assert!(matcher.process(&[1.0, 1.1, 9.0, 0.9]));
//! assert_eq!(matcher.matched_points(), &[1.0, 1.1, 0.9]);
//! assert_eq!(matcher.input_index(2)?, 3);
//! # Result::<(), ModelKitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Container operations that can be misused return `Result<_, ModelKitError>`:
//!
//! - **Out-of-range access** (`get`, `remove`, `insert`, `input_index`) returns
//!   `IndexOutOfBounds`.
//! - **Malformed ranges** (`remove_range`, `add_all_slice`, `set_to_slice`) are
//!   rejected before anything is shifted.
//! - **Underflow** (`pop`, `remove_tail` on an empty array) returns `EmptyContainer`.
//!
//! A failed fit is *not* an error: `process` returns `false`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! modelkit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - storage and shared error type.
mod primitives;

// Layer 2: Fitting - the robust model-fitting contract.
mod fitting;

// Standard modelkit prelude.
pub mod prelude {
    pub use crate::fitting::match_set::MatchSet;
    pub use crate::fitting::matcher::ModelMatcher;
    pub use crate::primitives::element::Element;
    pub use crate::primitives::errors::ModelKitError;
    pub use crate::primitives::grow_array::{
        GrowArray, GrowArrayF32, GrowArrayF64, GrowArrayI8, GrowArrayI16, GrowArrayI32,
        GrowArrayI64, GrowArrayU8, GrowArrayU16, GrowArrayU32, GrowArrayU64, GrowArrayUsize,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod fitting {
        pub use crate::fitting::*;
    }
}
