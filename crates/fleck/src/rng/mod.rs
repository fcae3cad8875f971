//! Deterministic randomness for fleck patterns.
//!
//! This module provides the forkable [`SeededRandom`] stream, the shared prime
//! table used to label jitter streams, and the [`HaltonJitter`] low-discrepancy
//! sequence used for within-cell placement.
pub mod halton;
pub mod primes;
pub mod stream;

pub use halton::{radical_inverse, HaltonJitter};
pub use primes::{nth_prime, prime_for_unit_sample, PRIME_COUNT};
pub use stream::SeededRandom;
