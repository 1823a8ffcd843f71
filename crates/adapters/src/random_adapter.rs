//! Thread-safe random number generation adapter.
//!
//! Implements `RandomPort` using `rand::thread_rng()`.

use rand::Rng;
use utilbelt_common::RandomPort;

/// Production random number generator using thread-local RNG.
///
/// This adapter wraps `rand::thread_rng()` so the pure helpers (shuffle,
/// random_int) never depend on `rand` directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    /// Create a new ThreadRngAdapter.
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        rand::thread_rng().gen_range(lo..=hi)
    }

    fn random_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
