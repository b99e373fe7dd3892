//! Subset - a randomized container and a random line filter
//!
//! [`RandomContainer`] holds a collection of elements and hands them back in a
//! uniformly random order: removal of a random element in O(1), sampling
//! without removal, and traversals that visit every element once in a fresh
//! random order.
//!
//! # Example
//!
//! ```
//! use subset::RandomContainer;
//!
//! let container: RandomContainer<&str> = ["x", "y", "z"].into_iter().collect();
//! let two: Vec<_> = container.traverse().take(2).collect();
//! assert_eq!(two.len(), 2);
//! ```
//!
//! # Concurrency
//!
//! The container does no locking. Share it across threads only behind your
//! own synchronization. The default randomness source keeps one generator per
//! thread, seeded from OS entropy on first use; it is not suitable where
//! predictability matters.

pub mod cli;
pub mod container;
pub mod error;
pub mod filter;
pub mod output;
pub mod random;

pub use container::{Cursor, RandomContainer, ShuffledMut};
pub use error::{Result, SubsetError};
pub use filter::{read_lines, subset, subset_with, FilterOptions, FilterReport};
pub use output::OutputFormat;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
