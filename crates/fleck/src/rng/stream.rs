//! Forkable seeded uniform random stream.
//!
//! A mulberry32-style generator: a 32-bit running state advanced by a fixed
//! increment, with a xorshift-multiply hash of the state producing each output
//! word. All mixing is done in wrapping `u32` arithmetic so a given seed
//! reproduces the exact same float sequence on every platform. There is no
//! global state anywhere; a stream is just its 32-bit value.
use rand::RngCore;

/// Additive constant applied to the running state before each mix.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// A forkable deterministic random stream over [0, 1).
///
/// `fork` derives a child stream from one draw of the parent, so a tree of
/// streams can be grown from a single external seed while keeping every branch
/// independently reproducible.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a stream from an external signed seed.
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    /// Create a stream from a raw 32-bit state, e.g. a forked child seed.
    pub fn from_bits(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state by one step and return the raw 32-bit output word.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = (self.state ^ (self.state >> 15)).wrapping_mul(self.state | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Next uniform value in [0, 1).
    #[inline]
    pub fn next(&mut self) -> f64 {
        self.step() as f64 / 4_294_967_296.0
    }

    /// Next uniform value in [from, to).
    #[inline]
    pub fn between(&mut self, from: f64, to: f64) -> f64 {
        self.next() * (to - from) + from
    }

    /// Derive a new independent-looking stream from one draw of this stream.
    ///
    /// Consumes exactly one draw: the raw output word (identically
    /// `next() * 2^32`) becomes the child's seed, and this stream's subsequent
    /// output differs from an unforked sibling's.
    pub fn fork(&mut self) -> SeededRandom {
        SeededRandom::from_bits(self.step())
    }
}

impl RngCore for SeededRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
