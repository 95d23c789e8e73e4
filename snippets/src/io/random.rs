//! Bounded pseudo-random integers from an explicitly owned generator.
//!
//! Programs never touch a process-wide generator. The CLI seeds one
//! [`BoundedRandomSource`] per run and hands it to the program by `&mut`, which
//! lets tests inject a fixed seed or a scripted generator.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

/// Largest value returned by [`BoundedRandomSource::next_raw`].
pub const RAW_MAX: u32 = i32::MAX as u32;

/// Uniform-ish integers in inclusive ranges.
///
/// A draw maps the raw output onto the range with `raw % span + min`. When the
/// span does not divide `RAW_MAX + 1` the low buckets are very slightly more
/// likely; for the small ranges used here the skew is below one part in ten
/// million and is accepted.
#[derive(Debug, Clone)]
pub struct BoundedRandomSource<G = StdRng> {
    rng: G,
}

impl BoundedRandomSource<StdRng> {
    /// Seed from the wall clock so consecutive runs differ.
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Seed deterministically.
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "random source seeded");
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<G: RngCore> BoundedRandomSource<G> {
    pub fn new(rng: G) -> Self {
        Self { rng }
    }

    /// One raw draw in `[0, RAW_MAX]`.
    pub fn next_raw(&mut self) -> u32 {
        self.rng.next_u32() >> 1
    }

    /// One draw in `[min, max]`, both ends inclusive.
    ///
    /// # Panics
    /// If `min > max`.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "empty range {min}..={max}");
        let span = (i128::from(max) - i128::from(min) + 1) as u128;
        let offset = u128::from(self.next_raw()) % span;
        (i128::from(min) + offset as i128) as i64
    }
}

/// Nanoseconds since the epoch, folded into a seed.
fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp()) as u64
}
