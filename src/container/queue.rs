//! The randomized container

use crate::container::cursor::{Cursor, ShuffledMut};
use crate::error::{Result, SubsetError};
use crate::random::{RandomSource, ThreadRandom};

/// A bag of elements that hands them back in a uniformly random order.
///
/// Elements live in a dense vector. Their physical position carries no
/// meaning: removal swaps the last element into the freed slot, so the
/// container never keeps a stable ordering.
///
/// # Example
/// ```
/// use subset::RandomContainer;
///
/// let mut container = RandomContainer::new();
/// container.insert("a");
/// container.insert("b");
/// container.insert("c");
///
/// let mut seen: Vec<_> = container.traverse().copied().collect();
/// seen.sort();
/// assert_eq!(seen, ["a", "b", "c"]);
///
/// let removed = container.remove_random().unwrap();
/// assert_eq!(container.len(), 2);
/// assert!(["a", "b", "c"].contains(&removed));
/// ```
#[derive(Debug, Clone)]
pub struct RandomContainer<T, R = ThreadRandom> {
    elements: Vec<T>,
    source: R,
}

impl<T> RandomContainer<T> {
    /// Create an empty container drawing from the calling thread's generator
    pub fn new() -> Self {
        Self::with_source(ThreadRandom)
    }

    /// Like [`new`](Self::new), with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            source: ThreadRandom,
        }
    }
}

impl<T, R: RandomSource> RandomContainer<T, R> {
    /// Create an empty container drawing from `source`
    pub fn with_source(source: R) -> Self {
        Self {
            elements: Vec::new(),
            source,
        }
    }

    /// Add an element. Never fails.
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Borrow a uniformly random element without removing it.
    ///
    /// Fails with [`SubsetError::EmptyContainer`] if there is nothing to sample.
    pub fn sample(&self) -> Result<&T> {
        if self.elements.is_empty() {
            return Err(SubsetError::EmptyContainer);
        }
        Ok(&self.elements[self.source.index(self.elements.len())])
    }

    /// Remove and return a uniformly random element in O(1).
    ///
    /// Fails with [`SubsetError::EmptyContainer`] if there is nothing to remove.
    pub fn remove_random(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(SubsetError::EmptyContainer);
        }
        let index = self.source.index(self.elements.len());
        Ok(self.elements.swap_remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Start a traversal of every element in a freshly drawn random order.
    ///
    /// Each call draws a new permutation, independent of earlier ones.
    pub fn traverse(&self) -> Cursor<'_, T> {
        let order = self.source.permutation(self.elements.len());
        Cursor::new(&self.elements, order)
    }

    /// Like [`traverse`](Self::traverse), yielding mutable references.
    pub fn traverse_mut(&mut self) -> ShuffledMut<'_, T> {
        let order = self.source.permutation(self.elements.len());
        ShuffledMut::new(&mut self.elements, order)
    }
}

impl<T, R: Default> Default for RandomContainer<T, R> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            source: R::default(),
        }
    }
}

impl<T, R> Extend<T> for RandomContainer<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T, R: Default> FromIterator<T> for RandomContainer<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
            source: R::default(),
        }
    }
}
