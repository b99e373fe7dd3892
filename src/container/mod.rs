//! Randomized container and its traversal cursors
//!
//! A [`RandomContainer`] supports:
//! - O(1) insertion and O(1) removal of a uniformly random element
//! - sampling a uniformly random element without removing it
//! - traversals that visit every element once, in a new random order each time

mod cursor;
mod queue;

pub use cursor::{Cursor, ShuffledMut};
pub use queue::RandomContainer;
