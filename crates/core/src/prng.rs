//! Seedable Xorshift64 generator behind the avatar randomizer.
//!
//! Pure integer arithmetic, so a seed reproduces the same avatar on every
//! platform. The state serializes, which lets an embedder persist a
//! generator and continue the same random sequence later.

use serde::{Deserialize, Serialize};

/// Xorshift64 with the (13, 7, 17) shift triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Zero is a fixed point of xorshift; it is swapped for this seed.
    const ZERO_SEED_REPLACEMENT: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        let state = match seed {
            0 => Self::ZERO_SEED_REPLACEMENT,
            s => s,
        };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform index in `[0, len)` by modulo reduction.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }

    /// Uniform integer in the closed range `[min, max]`, computed as
    /// `min + next_u64() % span`. Reversed bounds are swapped.
    pub fn next_int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        (i64::from(lo) + (self.next_u64() % span) as i64) as i32
    }

    /// Uniform pick from a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_index(items.len())]
    }
}
