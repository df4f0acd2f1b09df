//! The robust model-fitting contract.
//!
//! ## Purpose
//!
//! [`ModelMatcher`] is the capability every robust estimator exposes: fit a
//! model to observations that may be contaminated by outliers, then report the
//! model, its inliers, where each inlier came from, and a fit error.
//!
//! ## Design notes
//!
//! * **Fit failure is a value**: `process` returns `false` when no adequate
//!   model is found. Callers branch on it; it is never an error.
//! * **Sticky results**: A failed `process` leaves the last successful
//!   [`MatchSet`] in place. Only a new success replaces it.
//! * **Minimum size**: Implementations check `minimum_size()` themselves (use
//!   [`ModelMatcher::has_minimum`]) and return `false` for short inputs
//!   without touching the stored result. A successful fit never has fewer
//!   inliers than `minimum_size()`.
//! * **Before the first success**: `model()` and `error()` are `None`,
//!   `matched_points()` is empty and `input_index` returns
//!   [`ModelKitError::NoModel`].
//!
//! ## Key concepts
//!
//! * **Match set**: The subset of the input judged to be inliers.
//! * **Input index**: Position of a match-set element in the original input.
//! * **Minimum size**: Observations needed to form one candidate model
//!   (2 for a line, 3 for a circle).
//!
//! ## Non-goals
//!
//! * Concrete estimators, samplers and scoring live outside this crate.
//! * Errors of different matcher types are not comparable.

// Internal dependencies
use crate::fitting::match_set::MatchSet;
use crate::primitives::errors::ModelKitError;

// ============================================================================
// ModelMatcher Trait
// ============================================================================

/// Robust estimator that fits a model to noisy observations of type `P`.
pub trait ModelMatcher<P> {
    /// Type of model being fitted.
    type Model;

    /// Fit a model to `data_set`, pruning observations judged to be noise.
    ///
    /// Returns `true` if a model was found. The input is only read during the
    /// call; inliers are copied into the stored [`MatchSet`].
    ///
    /// On success the stored match set holds at least
    /// [`minimum_size`](Self::minimum_size) inliers. A candidate with fewer
    /// inliers is an inadequate fit and must be reported as `false`.
    fn process(&mut self, data_set: &[P]) -> bool;

    /// Result of the most recent successful `process`, if any.
    fn match_set(&self) -> Option<&MatchSet<Self::Model, P>>;

    /// Minimum number of observations that can produce a valid model.
    fn minimum_size(&self) -> usize;

    /// Whether `data_set` has at least [`minimum_size`](Self::minimum_size) observations.
    #[inline]
    fn has_minimum(&self, data_set: &[P]) -> bool {
        data_set.len() >= self.minimum_size()
    }

    /// Model from the most recent successful fit.
    fn model<'a>(&'a self) -> Option<&'a Self::Model>
    where
        P: 'a,
    {
        self.match_set().map(MatchSet::model)
    }

    /// Inliers from the most recent successful fit.
    fn matched_points(&self) -> &[P] {
        match self.match_set() {
            Some(set) => set.points(),
            None => &[],
        }
    }

    /// Position in the original input of the inlier at `match_index`.
    fn input_index(&self, match_index: usize) -> Result<usize, ModelKitError> {
        self.match_set()
            .ok_or(ModelKitError::NoModel)?
            .input_index(match_index)
    }

    /// Fit error of the most recent successful fit.
    ///
    /// No ordering or sign convention is shared between matcher types.
    fn error(&self) -> Option<f64> {
        self.match_set().map(MatchSet::error)
    }
}
