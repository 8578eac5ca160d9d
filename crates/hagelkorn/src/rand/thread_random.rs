use crate::RandSource;
use rand::{Rng, rng};

/// A [`RandSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically. Each OS thread has its own RNG
/// instance, so calls from multiple threads are contention-free. This
/// type does **not** store the RNG itself; it simply accesses the
/// thread-local generator on each call, so it is zero-sized and may be
/// freely used across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn pick(&self, bound: usize) -> usize {
        rng().random_range(0..bound)
    }
}
