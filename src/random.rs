//! Sources of uniform randomness for the container
//!
//! Every draw the container makes goes through a [`RandomSource`]. Two
//! implementations are provided:
//!
//! - [`ThreadRandom`]: a handle to a per-thread generator, seeded once from OS
//!   entropy the first time the thread uses it and reused afterwards. This is
//!   the default. It is fast and not cryptographically secure.
//! - [`SeededRandom`]: a generator seeded from a `u64`, for reproducible runs.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Provider of the uniform draws needed by the container.
///
/// Methods take `&self` so that non-mutating operations such as
/// [`sample`](crate::RandomContainer::sample) can draw without a mutable
/// borrow of the container. Implementations keep their generator state
/// behind interior mutability and are therefore confined to one thread.
pub trait RandomSource {
    /// Draw an index uniformly from `[0, len)`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    fn index(&self, len: usize) -> usize;

    /// Shuffle `indices` in place, every permutation equally likely.
    fn shuffle(&self, indices: &mut [usize]);

    /// A uniformly random permutation of `0..len`.
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        self.shuffle(&mut order);
        order
    }
}

thread_local! {
    static THREAD_RNG: RefCell<StdRng> = RefCell::new(StdRng::from_os_rng());
}

/// Handle to the calling thread's generator.
///
/// The handle itself carries no state: each call resolves the generator of
/// whichever thread it runs on, so two threads never contend on or share
/// generator state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        THREAD_RNG.with(|rng| rng.borrow_mut().random_range(0..len))
    }

    fn shuffle(&self, indices: &mut [usize]) {
        THREAD_RNG.with(|rng| indices.shuffle(&mut *rng.borrow_mut()))
    }
}

/// Reproducible generator seeded from a `u64`.
///
/// Cloning duplicates the generator state, so a clone replays the same
/// sequence of draws as the original from that point on.
///
/// # Example
/// ```
/// use subset::random::{RandomSource, SeededRandom};
///
/// let a = SeededRandom::new(7);
/// let b = SeededRandom::new(7);
/// assert_eq!(a.permutation(10), b.permutation(10));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: RefCell<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.rng.borrow_mut().random_range(0..len)
    }

    fn shuffle(&self, indices: &mut [usize]) {
        indices.shuffle(&mut *self.rng.borrow_mut())
    }
}
