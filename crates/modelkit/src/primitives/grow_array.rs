//! Growable array of primitive numeric values.
//!
//! ## Purpose
//!
//! This module provides [`GrowArray`], dense contiguous storage for numeric
//! values with O(1) random access and amortized O(1) append. It is the
//! workhorse buffer for numeric code that wants to reuse one allocation across
//! many iterations (e.g., inlier index lists rebuilt on every fit attempt).
//!
//! ## Design notes
//!
//! * **Explicit capacity**: The backing `Vec` is always fully initialized; its
//!   length *is* the capacity. The logical length is tracked separately.
//! * **Geometric growth**: `push` and `insert` double the buffer, `add_all`
//!   grows to twice the combined length, so `N` appends cost `O(N)`.
//! * **Monomorphized**: One generic definition replaces a family of per-type
//!   containers; aliases such as [`GrowArrayI32`] name the common instances.
//!
//! ## Key concepts
//!
//! * **resize vs. extend**: `resize` may throw the old contents away when it
//!   has to reallocate (the fresh buffer is zero-filled). `extend` always
//!   keeps `[0, old_len)` intact. Use `extend` when the current values matter.
//! * **Stale tail**: Slots in `[len, capacity)` keep whatever was last written
//!   there. They are never visible through slices, iterators, `Debug` or `==`.
//!
//! ## Invariants
//!
//! * `len() <= capacity()`.
//! * Capacity never shrinks implicitly (`reset` keeps the allocation).
//! * Range checks run before any element is shifted.
//!
//! ## Non-goals
//!
//! * Thread-safety (mutation requires `&mut self`; share behind a lock if needed).
//! * Boxed or arbitrary-precision element types.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::ops::{Index, IndexMut};
use core::slice::Iter;

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::errors::ModelKitError;

// ============================================================================
// GrowArray
// ============================================================================

/// Growable, tail-append array of primitive values.
pub struct GrowArray<T> {
    /// Backing storage; `data.len()` is the capacity.
    data: Vec<T>,

    /// Number of valid elements at the front of `data`.
    size: usize,
}

/// Grow array of `i8` values.
pub type GrowArrayI8 = GrowArray<i8>;
/// Grow array of `i16` values.
pub type GrowArrayI16 = GrowArray<i16>;
/// Grow array of `i32` values.
pub type GrowArrayI32 = GrowArray<i32>;
/// Grow array of `i64` values.
pub type GrowArrayI64 = GrowArray<i64>;
/// Grow array of `u8` values.
pub type GrowArrayU8 = GrowArray<u8>;
/// Grow array of `u16` values.
pub type GrowArrayU16 = GrowArray<u16>;
/// Grow array of `u32` values.
pub type GrowArrayU32 = GrowArray<u32>;
/// Grow array of `u64` values.
pub type GrowArrayU64 = GrowArray<u64>;
/// Grow array of `usize` values, e.g. index lists.
pub type GrowArrayUsize = GrowArray<usize>;
/// Grow array of `f32` values.
pub type GrowArrayF32 = GrowArray<f32>;
/// Grow array of `f64` values.
pub type GrowArrayF64 = GrowArray<f64>;

impl<T: Element> GrowArray<T> {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Capacity used by [`GrowArray::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty array with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty array able to hold `capacity` values without reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::zero(); capacity],
            size: 0,
        }
    }

    /// Create an array of `length` zeros.
    pub fn zeros(length: usize) -> Self {
        Self::filled(length, T::zero())
    }

    /// Create an array of `length` copies of `value`.
    pub fn filled(length: usize, value: T) -> Self {
        Self {
            data: vec![value; length],
            size: length,
        }
    }

    /// Create an array holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            size: values.len(),
        }
    }

    // ========================================================================
    // Size and Capacity
    // ========================================================================

    /// Number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of elements the backing buffer holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Drop all elements, keeping the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.size = 0;
    }

    /// Alias for [`reset`](Self::reset).
    #[inline]
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Set the length to `new_size`.
    ///
    /// If the buffer is too small it is replaced by a zero-filled buffer of
    /// `max(new_size, 2 * capacity())` elements and the previous contents are
    /// discarded, so growing one step at a time stays amortized O(1).
    /// Otherwise the buffer is left untouched, so elements past the old length
    /// hold whatever was last stored there. Use [`extend`](Self::extend) to keep
    /// existing values.
    pub fn resize(&mut self, new_size: usize) {
        if self.data.len() < new_size {
            let capacity = new_size.max(self.data.len().saturating_mul(2));
            self.data = vec![T::zero(); capacity];
        }
        self.size = new_size;
    }

    /// Set the length to `new_size`, preserving the first `len()` values.
    ///
    /// When the buffer has to grow, slots past the old length are zero.
    pub fn extend(&mut self, new_size: usize) {
        if self.data.len() < new_size {
            self.data.truncate(self.size);
            self.data.resize(new_size, T::zero());
        }
        self.size = new_size;
    }

    /// Ensure capacity for at least `capacity` elements without changing the length.
    ///
    /// Existing values are preserved.
    pub fn set_max_size(&mut self, capacity: usize) {
        self.grow_to(capacity);
    }

    // Grow the backing buffer to at least `capacity`, keeping every slot.
    #[inline]
    fn grow_to(&mut self, capacity: usize) {
        if self.data.len() < capacity {
            self.data.resize(capacity, T::zero());
        }
    }

    // Make room for one more element using doubling growth.
    #[inline]
    fn grow_for_one(&mut self) {
        if self.size == self.data.len() {
            self.grow_to((self.size * 2).max(1));
        }
    }

    // Make room for `additional` elements, growing to twice the combined length.
    #[inline]
    fn grow_for(&mut self, additional: usize) {
        let required = self.size + additional;
        if required > self.data.len() {
            self.grow_to(required * 2);
        }
    }

    // ========================================================================
    // Tail Operations
    // ========================================================================

    /// Append `value` to the tail.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.grow_for_one();
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Alias for [`push`](Self::push).
    #[inline]
    pub fn add(&mut self, value: T) {
        self.push(value);
    }

    /// Remove and return the tail element.
    ///
    /// Returns [`ModelKitError::EmptyContainer`] when there is nothing to pop.
    #[inline]
    pub fn pop(&mut self) -> Result<T, ModelKitError> {
        self.remove_tail()
    }

    /// Remove and return the tail element.
    ///
    /// Returns [`ModelKitError::EmptyContainer`] when there is nothing to remove.
    pub fn remove_tail(&mut self) -> Result<T, ModelKitError> {
        if self.size == 0 {
            return Err(ModelKitError::EmptyContainer);
        }
        self.size -= 1;
        Ok(self.data[self.size])
    }

    /// Append a copy of every element of `other`.
    pub fn add_all(&mut self, other: &GrowArray<T>) {
        self.append_slice(other.as_slice());
    }

    /// Append `source[start..end]`.
    pub fn add_all_slice(
        &mut self,
        source: &[T],
        start: usize,
        end: usize,
    ) -> Result<(), ModelKitError> {
        if end > source.len() {
            return Err(ModelKitError::SourceOutOfBounds {
                end,
                len: source.len(),
            });
        }
        if start > end {
            return Err(ModelKitError::InvalidRange {
                first: start,
                last: end,
                len: source.len(),
            });
        }

        self.append_slice(&source[start..end]);
        Ok(())
    }

    #[inline]
    fn append_slice(&mut self, values: &[T]) {
        self.grow_for(values.len());
        self.data[self.size..self.size + values.len()].copy_from_slice(values);
        self.size += values.len();
    }

    // ========================================================================
    // Random Access
    // ========================================================================

    /// Bounds-checked read.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, ModelKitError> {
        if index >= self.size {
            return Err(ModelKitError::IndexOutOfBounds {
                index,
                len: self.size,
            });
        }
        Ok(self.data[index])
    }

    /// Read without any bounds validation.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity). Indices in
    /// `[len, capacity)` are memory-safe but return stale values.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: the caller guarantees `index < self.data.len()`.
        unsafe { *self.data.get_unchecked(index) }
    }

    /// Overwrite the element at `index` without changing the length.
    ///
    /// Only the capacity bound is enforced in release builds.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        debug_assert!(
            index < self.size,
            "set: index {index} out of bounds for len {}",
            self.size
        );
        self.data[index] = value;
    }

    /// Element at position `floor((len - 1) * fraction)`.
    ///
    /// `fraction` must lie in `[0, 1]`. Handy for percentiles of a sorted array.
    pub fn get_fraction(&self, fraction: f64) -> Result<T, ModelKitError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ModelKitError::InvalidFraction(fraction));
        }
        if self.size == 0 {
            return Err(ModelKitError::EmptyContainer);
        }

        let index = ((self.size - 1) as f64 * fraction) as usize;
        self.get(index)
    }

    // ========================================================================
    // Insertion and Removal
    // ========================================================================

    /// Insert `value` at `index`, shifting later elements toward the tail.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ModelKitError> {
        if index > self.size {
            return Err(ModelKitError::IndexOutOfBounds {
                index,
                len: self.size,
            });
        }

        self.grow_for_one();
        self.data.copy_within(index..self.size, index + 1);
        self.data[index] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements toward the head.
    pub fn remove(&mut self, index: usize) -> Result<T, ModelKitError> {
        let removed = self.get(index)?;
        self.data.copy_within(index + 1..self.size, index);
        self.size -= 1;
        Ok(removed)
    }

    /// Remove the inclusive range `[first, last]` in a single shift.
    pub fn remove_range(&mut self, first: usize, last: usize) -> Result<(), ModelKitError> {
        if last < first || last >= self.size {
            return Err(ModelKitError::InvalidRange {
                first,
                last,
                len: self.size,
            });
        }

        self.data.copy_within(last + 1..self.size, first);
        self.size -= last - first + 1;
        Ok(())
    }

    /// Remove the first `total` elements; element `total` becomes the new head.
    pub fn remove_head(&mut self, total: usize) -> Result<(), ModelKitError> {
        if total > self.size {
            return Err(ModelKitError::InvalidRange {
                first: 0,
                last: total - 1,
                len: self.size,
            });
        }

        self.data.copy_within(total..self.size, 0);
        self.size -= total;
        Ok(())
    }

    // ========================================================================
    // Bulk Operations
    // ========================================================================

    /// Overwrite every element with `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    /// Overwrite every element with zero.
    #[inline]
    pub fn zero(&mut self) {
        self.fill(T::zero());
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: T) -> bool {
        self.as_slice().contains(&value)
    }

    /// Position of the first element equal to `value`, or `None`.
    pub fn index_of(&self, value: T) -> Option<usize> {
        self.iter().position(|&v| v == value)
    }

    /// Sort the elements in ascending order.
    pub fn sort(&mut self) {
        self.as_mut_slice()
            .sort_unstable_by(|a, b| a.total_order(b));
    }

    /// Reverse the element order.
    #[inline]
    pub fn flip(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Deep copy whose capacity equals the current length.
    pub fn copy(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    /// Replace the contents with a copy of `other`.
    pub fn set_to(&mut self, other: &GrowArray<T>) {
        self.assign(other.as_slice());
    }

    /// Replace the contents with a copy of `source[offset..offset + length]`.
    pub fn set_to_slice(
        &mut self,
        source: &[T],
        offset: usize,
        length: usize,
    ) -> Result<(), ModelKitError> {
        let end = offset.saturating_add(length);
        if end > source.len() {
            return Err(ModelKitError::SourceOutOfBounds {
                end,
                len: source.len(),
            });
        }

        self.assign(&source[offset..end]);
        Ok(())
    }

    #[inline]
    fn assign(&mut self, values: &[T]) {
        self.resize(values.len());
        self.data[..values.len()].copy_from_slice(values);
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// The valid elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// The valid elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.size]
    }

    /// Iterate over the valid elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Element> Default for GrowArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for GrowArray<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Element> PartialEq for GrowArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> Debug for GrowArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> Index<usize> for GrowArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Element> IndexMut<usize> for GrowArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Element> From<Vec<T>> for GrowArray<T> {
    fn from(values: Vec<T>) -> Self {
        let size = values.len();
        Self { data: values, size }
    }
}

impl<T: Element> From<&[T]> for GrowArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Element> FromIterator<T> for GrowArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T: Element> IntoIterator for &'a GrowArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
