//! Match sets produced by robust model fitting.
//!
//! ## Purpose
//!
//! A [`MatchSet`] bundles everything a successful fit produces: the model, the
//! inlier observations, the position of each inlier in the original input, and
//! a scalar fit error. Matchers store one and replace it on every successful
//! call to `process`, which makes the "valid until the next fit" lifetime a
//! property of ownership instead of a convention.
//!
//! ## Invariants
//!
//! * Every inlier has exactly one input index (`points().len() == input_indices().len()`).
//! * Input indices are distinct; `push` and `select` both reject repeats.
//! * Sets built through [`MatchSet::select`] also hold in-range input indices.
//!
//! ## Non-goals
//!
//! * The error value has no cross-estimator meaning; lower is not necessarily better.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::ModelKitError;
use crate::primitives::grow_array::GrowArray;

// ============================================================================
// MatchSet
// ============================================================================

/// Fitted model together with its inliers and their input positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSet<M, P> {
    /// Fitted model parameters.
    model: M,

    /// Inlier observations, in match-set order.
    points: Vec<P>,

    /// `input_indices[k]` is the input position of `points[k]`.
    input_indices: GrowArray<usize>,

    /// Estimator-specific fit error.
    error: f64,
}

impl<M, P> MatchSet<M, P> {
    /// Start an empty match set for `model`.
    pub fn new(model: M, error: f64) -> Self {
        Self {
            model,
            points: Vec::new(),
            input_indices: GrowArray::new(),
            error,
        }
    }

    /// Build a match set by gathering `indices` out of `data_set`.
    ///
    /// Fails if an index is outside `data_set` or appears more than once.
    pub fn select(
        model: M,
        data_set: &[P],
        indices: &[usize],
        error: f64,
    ) -> Result<Self, ModelKitError>
    where
        P: Clone,
    {
        if let Some(&index) = indices.iter().find(|&&i| i >= data_set.len()) {
            return Err(ModelKitError::IndexOutOfBounds {
                index,
                len: data_set.len(),
            });
        }

        let mut sorted = GrowArray::from_slice(indices);
        sorted.sort();
        if let Some(pair) = sorted.as_slice().windows(2).find(|w| w[0] == w[1]) {
            return Err(ModelKitError::DuplicateIndex(pair[0]));
        }

        let mut set = Self {
            model,
            points: Vec::with_capacity(indices.len()),
            input_indices: GrowArray::with_capacity(indices.len()),
            error,
        };
        for &index in indices {
            set.record(data_set[index].clone(), index);
        }
        Ok(set)
    }

    /// Append an inlier and the input position it came from.
    ///
    /// Fails with [`ModelKitError::DuplicateIndex`] if `input_index` is
    /// already in the set; the set is left unchanged.
    pub fn push(&mut self, point: P, input_index: usize) -> Result<(), ModelKitError> {
        if self.input_indices.contains(input_index) {
            return Err(ModelKitError::DuplicateIndex(input_index));
        }
        self.record(point, input_index);
        Ok(())
    }

    // Append without checking for repeats; callers have validated `input_index`.
    #[inline]
    fn record(&mut self, point: P, input_index: usize) {
        self.points.push(point);
        self.input_indices.push(input_index);
    }

    /// Replace the fit error, e.g. after refining the model on its inliers.
    #[inline]
    pub fn set_error(&mut self, error: f64) {
        self.error = error;
    }

    /// The fitted model.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the set and keep only the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Inlier observations.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Input position of the inlier at `match_index`.
    #[inline]
    pub fn input_index(&self, match_index: usize) -> Result<usize, ModelKitError> {
        self.input_indices.get(match_index)
    }

    /// Input positions of all inliers, in match-set order.
    #[inline]
    pub fn input_indices(&self) -> &GrowArray<usize> {
        &self.input_indices
    }

    /// Estimator-specific fit error.
    #[inline]
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Number of inliers.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no inliers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(input_index, point)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &P)> + '_ {
        self.input_indices.iter().copied().zip(self.points.iter())
    }
}
