use std::ops::Range;

use rand::Rng;

use crate::application::ports::RandomSource;

/// [`RandomSource`] backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_index(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }

    fn next_millis(&self, range: Range<u64>) -> u64 {
        rand::thread_rng().gen_range(range)
    }
}
