//! Injectable randomness for grading, pack and forge rolls.
//!
//! Every roll in this crate draws from a [`RandomSource`]: a uniform
//! generator over `[0, 1)`. Production code uses [`GameRng`], a seeded
//! ChaCha8 stream that the authoritative mint path owns server-side.
//! Tests pin outcomes with [`FixedRandom`] or [`SequenceRandom`].
//!
//! ## Usage
//!
//! ```
//! use pack_forge::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let r = rng.next_f64();
//! assert!((0.0..1.0).contains(&r));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.next_f64(), r);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform random source over `[0, 1)`.
///
/// Implementations must never return a value outside `[0, 1)`.
pub trait RandomSource {
    /// Draw the next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Pick an index in `0..len` uniformly.
    ///
    /// Uses `floor(r * len)`, so a draw of `0.0` always selects index 0.
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on empty range");
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// A source that always returns the same value.
///
/// `FixedRandom(0.0)` selects the lowest bucket of every cumulative table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// A source that replays a fixed list of values, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    /// Create a replaying source. An empty list behaves like `FixedRandom(0.0)`.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
