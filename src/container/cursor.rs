//! Traversal cursors over a container
//!
//! A [`Cursor`] owns a random permutation of the container's indices, drawn
//! when the traversal starts, and walks the live storage through it. Clones of
//! a cursor and its [`end`](Cursor::end) sentinel share the permutation.

use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

/// One-shot traversal of a container in a random order.
///
/// Each element is visited exactly once. The traversal is not restartable;
/// ask the container for a new one to get a fresh, independent order.
///
/// The cursor borrows the container, so the container cannot be mutated
/// while a traversal is in progress.
pub struct Cursor<'a, T> {
    elements: &'a [T],
    order: Rc<[usize]>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(elements: &'a [T], order: Vec<usize>) -> Self {
        debug_assert_eq!(elements.len(), order.len());
        Self {
            elements,
            order: order.into(),
            position: 0,
        }
    }

    /// Element under the cursor, or `None` once the traversal is exhausted.
    pub fn get(&self) -> Option<&'a T> {
        let elements = self.elements;
        self.order.get(self.position).map(|&index| &elements[index])
    }

    /// Step forward. Stepping past the end leaves the cursor at the end.
    pub fn advance(&mut self) {
        if self.position < self.order.len() {
            self.position += 1;
        }
    }

    /// Step backward. Stepping before the first position leaves the cursor
    /// at the first position.
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn at_end(&self) -> bool {
        self.position == self.order.len()
    }

    /// Ordinal offset of the cursor within its traversal.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of elements in the traversal, fixed when it started.
    pub fn snapshot_len(&self) -> usize {
        self.order.len()
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.position
    }

    /// End sentinel of this traversal.
    pub fn end(&self) -> Self {
        Self {
            elements: self.elements,
            order: Rc::clone(&self.order),
            position: self.order.len(),
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            order: Rc::clone(&self.order),
            position: self.position,
        }
    }
}

/// Cursors are equal only when they come from the same traversal and sit at
/// the same position. Cursors of two independent traversals never compare
/// equal, even at the same offset.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.order, &other.order)
            && std::ptr::eq(self.elements, other.elements)
            && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.order.len())
            .finish()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

/// Mutable traversal of a container in a random order.
pub struct ShuffledMut<'a, T> {
    slots: Vec<Option<&'a mut T>>,
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> ShuffledMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T], order: Vec<usize>) -> Self {
        debug_assert_eq!(elements.len(), order.len());
        Self {
            slots: elements.iter_mut().map(Some).collect(),
            order: order.into_iter(),
        }
    }
}

impl<'a, T> Iterator for ShuffledMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        self.slots[index].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for ShuffledMut<'_, T> {}

impl<T> FusedIterator for ShuffledMut<'_, T> {}

impl<T> fmt::Debug for ShuffledMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShuffledMut")
            .field("remaining", &self.order.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(elements: &[char]) -> Cursor<'_, char> {
        Cursor::new(elements, (0..elements.len()).rev().collect())
    }

    #[test]
    fn test_cursor_walks_the_permutation() {
        let elements = ['a', 'b', 'c'];
        let mut cursor = fixed(&elements);
        assert_eq!(cursor.get(), Some(&'c'));
        cursor.advance();
        assert_eq!(cursor.get(), Some(&'b'));
        cursor.advance();
        assert_eq!(cursor.get(), Some(&'a'));
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn test_cursor_reaches_end_sentinel() {
        let elements = ['a', 'b', 'c', 'd'];
        let mut cursor = fixed(&elements);
        let end = cursor.end();
        let mut steps = 0;
        while cursor != end {
            cursor.advance();
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert_eq!(end.position(), 4);
    }

    #[test]
    fn test_advance_past_end_is_inert() {
        let elements = ['a'];
        let mut cursor = fixed(&elements);
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_retreat() {
        let elements = ['a', 'b'];
        let mut cursor = fixed(&elements);
        cursor.retreat();
        assert_eq!(cursor.position(), 0);
        cursor.advance();
        cursor.advance();
        cursor.retreat();
        assert_eq!(cursor.get(), Some(&'a'));
    }

    #[test]
    fn test_clone_is_a_copy_of_position() {
        let elements = ['a', 'b', 'c'];
        let mut cursor = fixed(&elements);
        let before = cursor.clone();
        cursor.advance();
        assert_ne!(before, cursor);
        assert_eq!(before.get(), Some(&'c'));
        let mut caught_up = before.clone();
        caught_up.advance();
        assert_eq!(caught_up, cursor);
    }

    #[test]
    fn test_independent_traversals_never_equal() {
        let elements = ['a', 'b'];
        let first = fixed(&elements);
        let second = fixed(&elements);
        assert_eq!(first.position(), second.position());
        assert_ne!(first, second);
        assert_ne!(first.end(), second.end());
    }

    #[test]
    fn test_empty_cursor_starts_at_end() {
        let elements: [char; 0] = [];
        let cursor = fixed(&elements);
        assert_eq!(cursor.snapshot_len(), 0);
        assert!(cursor.at_end());
        assert_eq!(cursor, cursor.end());
    }

    #[test]
    fn test_iterator_size_hint() {
        let elements = ['a', 'b', 'c'];
        let mut cursor = fixed(&elements);
        assert_eq!(cursor.len(), 3);
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.snapshot_len(), 3);
        assert_eq!(cursor.collect::<String>(), "ba");
    }

    #[test]
    fn test_shuffled_mut_yields_each_slot_once() {
        let mut elements = [1, 2, 3, 4];
        let order = vec![2, 0, 3, 1];
        let visited: Vec<i32> = ShuffledMut::new(&mut elements, order)
            .map(|value| {
                *value *= 10;
                *value
            })
            .collect();
        assert_eq!(visited, vec![30, 10, 40, 20]);
        assert_eq!(elements, [10, 20, 30, 40]);
    }
}
