//! Level selection for new nodes.
//!
//! Each new node draws its height once, at creation. The usual policy is
//! geometric: every level past the first is granted with probability `p`,
//! up to a fixed cap. Randomness comes from any [`RngCore`], so tests can
//! script the coin flips.

use rand_core::{RngCore, SeedableRng, impls};

use crate::error::Result;
use crate::options::{DEFAULT_MAX_HEIGHT, DEFAULT_PROBABILITY, Options};

/// Chooses the height of newly created nodes.
pub trait LevelGenerator {
    /// The largest height `height()` may return.
    fn max_height(&self) -> usize;

    /// Height for a new node, in `1..=self.max_height()`.
    fn height(&mut self) -> usize;
}

/// Geometrically distributed heights.
///
/// `P(height >= k) = p^(k - 1)` for `k <= max_height`, so the expected
/// height is bounded by `1 / (1 - p)`.
#[derive(Clone, Debug)]
pub struct Geometric<R = XorShift> {
    max_height: usize,
    /// A coin lands heads when a 32-bit draw falls below this.
    threshold: u64,
    rng: R,
}

impl Geometric<XorShift> {
    /// A policy seeded from the operating system.
    pub fn new(options: &Options) -> Result<Self> {
        Self::with_rng(options, XorShift::from_entropy())
    }
}

impl Default for Geometric<XorShift> {
    fn default() -> Self {
        Geometric {
            max_height: DEFAULT_MAX_HEIGHT,
            threshold: threshold(DEFAULT_PROBABILITY),
            rng: XorShift::from_entropy(),
        }
    }
}

impl<R: RngCore> Geometric<R> {
    /// A policy drawing its coins from `rng`.
    pub fn with_rng(options: &Options, rng: R) -> Result<Self> {
        options.validate()?;
        Ok(Geometric {
            max_height: options.max_height,
            threshold: threshold(options.probability),
            rng,
        })
    }

    #[inline]
    fn flip(&mut self) -> bool {
        (self.rng.next_u32() as u64) < self.threshold
    }
}

impl<R: RngCore> LevelGenerator for Geometric<R> {
    fn max_height(&self) -> usize {
        self.max_height
    }

    fn height(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_height && self.flip() {
            height += 1;
        }
        height
    }
}

fn threshold(p: f64) -> u64 {
    (p * (1u64 << 32) as f64) as u64
}

/// Seed used when a caller supplies an all-zero seed, which xorshift cannot
/// escape from.
const ZERO_SEED_FALLBACK: u64 = 0x12345678_9abcdef0;

/// A small, fast xorshift64 generator. Not cryptographic.
#[derive(Clone, Debug)]
pub struct XorShift {
    state: u64,
}

impl RngCore for XorShift {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let state = u64::from_le_bytes(seed);
        XorShift {
            state: if state == 0 { ZERO_SEED_FALLBACK } else { state },
        }
    }
}
