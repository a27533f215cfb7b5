use std::ops::Range;

/// Source of uniform randomness for the simulated assistant.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..bound`. Callers never pass a zero bound.
    fn next_index(&self, bound: usize) -> usize;

    /// Uniform value in `range`. Callers never pass an empty range.
    fn next_millis(&self, range: Range<u64>) -> u64;
}
