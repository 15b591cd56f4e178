//! Index-stable growable array with fallible, doubling growth.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Errors from [`GrowArray`] operations.
#[derive(Error, Debug)]
pub enum ArrayError {
    /// The allocator could not satisfy a growth request.
    #[error("allocation failed reserving {requested} elements")]
    Allocation {
        /// Number of elements the failed reservation asked for.
        requested: usize,
        /// Underlying reservation error.
        #[source]
        source: TryReserveError,
    },

    /// A batch reservation asked for more elements than `usize` can count.
    #[error("capacity overflow reserving {requested} additional elements")]
    CapacityOverflow {
        /// Number of elements the failed reservation asked for.
        requested: usize,
    },
}

/// A growable array with doubling growth and explicit allocation failure.
///
/// Appends return the index assigned to the new element; callers that need
/// to refer to an element across later growth hold that index and re-resolve
/// it through [`get`](Self::get), rather than keeping a reference.
///
/// Growth doubles the capacity (0 -> 1 -> 2 -> 4 ...) when an append would
/// exceed it. A failed growth leaves the array exactly as it was: no length
/// change, all existing elements intact, and the append can be retried.
#[derive(Debug, Default)]
pub struct GrowArray<T> {
    items: Vec<T>,
}

impl<T> GrowArray<T> {
    /// Create an empty array with no reserved capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty array with room for `initial` elements.
    pub fn with_capacity(initial: usize) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.reserve_to(initial)?;
        Ok(array)
    }

    /// Append one element, growing if full.
    ///
    /// Returns the index assigned to the element.
    pub fn push(&mut self, value: T) -> Result<usize, ArrayError> {
        if self.items.len() == self.items.capacity() {
            let doubled = self.items.capacity().saturating_mul(2).max(1);
            self.reserve_to(doubled)?;
        }
        let index = self.items.len();
        self.items.push(value);
        Ok(index)
    }

    /// Append `n` copies of `value` in one growth step.
    ///
    /// When growth is needed the new capacity is
    /// `max(len + n, capacity * 2)`, so a large batch lands in a single
    /// reallocation. Returns the index of the first new element; the batch
    /// occupies `[first, first + n)`.
    pub fn push_many(&mut self, n: usize, value: T) -> Result<usize, ArrayError>
    where
        T: Clone,
    {
        let needed = self
            .items
            .len()
            .checked_add(n)
            .ok_or(ArrayError::CapacityOverflow { requested: n })?;
        if needed > self.items.capacity() {
            let target = needed.max(self.items.capacity().saturating_mul(2));
            self.reserve_to(target)?;
        }
        let first = self.items.len();
        self.items.resize(needed, value);
        Ok(first)
    }

    /// Borrow the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutably borrow the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Number of elements currently stored.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the array can hold without growing.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop all elements, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Grow capacity to at least `target` elements, failing without touching
    /// existing contents if the allocator refuses.
    fn reserve_to(&mut self, target: usize) -> Result<(), ArrayError> {
        let additional = target.saturating_sub(self.items.capacity());
        if additional == 0 {
            return Ok(());
        }
        // Reserve relative to len so capacity lands on the computed target.
        self.items
            .try_reserve_exact(target - self.items.len())
            .map_err(|source| ArrayError::Allocation {
                requested: target,
                source,
            })
    }
}

impl<T> Index<usize> for GrowArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for GrowArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_sequential_indices() {
        let mut array = GrowArray::new();
        for i in 0..100u32 {
            let index = array.push(i).unwrap();
            assert_eq!(index, i as usize);
        }
        assert_eq!(array.len(), 100);
        assert!(array.capacity() >= 100);
    }

    #[test]
    fn growth_preserves_existing_elements() {
        let mut array = GrowArray::with_capacity(2).unwrap();
        array.push([1u8, 2, 3, 4]).unwrap();
        array.push([5, 6, 7, 8]).unwrap();
        // Third push forces a doubling from 2.
        array.push([9, 10, 11, 12]).unwrap();

        assert!(array.capacity() >= 4);
        assert_eq!(array[0], [1, 2, 3, 4]);
        assert_eq!(array[1], [5, 6, 7, 8]);
        assert_eq!(array[2], [9, 10, 11, 12]);
    }

    #[test]
    fn doubling_from_empty() {
        let mut array = GrowArray::new();
        assert_eq!(array.capacity(), 0);
        array.push(1u64).unwrap();
        assert!(array.capacity() >= 1);
        array.push(2).unwrap();
        array.push(3).unwrap();
        assert!(array.capacity() >= 3);
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn push_many_reserves_contiguous_block() {
        let mut array = GrowArray::with_capacity(4).unwrap();
        array.push(7u32).unwrap();

        let first = array.push_many(10, 0u32).unwrap();
        assert_eq!(first, 1);
        assert_eq!(array.len(), 11);
        assert!(array.capacity() >= 11);

        // Batch indices never overlap with later single pushes.
        let mut seen = vec![first];
        for _ in 0..10 {
            seen.push(array.push(9).unwrap());
        }
        for window in seen.windows(2) {
            assert!(window[1] > window[0]);
        }
        assert!(seen[1] >= first + 10);
    }

    #[test]
    fn push_many_overflow_is_an_error_not_a_panic() {
        let mut array = GrowArray::new();
        array.push(7u8).unwrap();

        let err = array.push_many(usize::MAX, 0u8).unwrap_err();
        assert!(matches!(
            err,
            ArrayError::CapacityOverflow {
                requested: usize::MAX
            }
        ));

        // The failed batch leaves the array exactly as it was.
        assert_eq!(array.len(), 1);
        assert_eq!(array[0], 7);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut array = GrowArray::new();
        array.push(1i32).unwrap();
        assert_eq!(array.get(0), Some(&1));
        assert!(array.get(1).is_none());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut array = GrowArray::with_capacity(8).unwrap();
        array.push(1u8).unwrap();
        let capacity = array.capacity();
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), capacity);
    }
}
