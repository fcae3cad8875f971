//! Shared table of the first 2000 primes.
//!
//! The table is built once per process and used as a deterministic
//! "pick a prime" function: a uniform sample in [0, 1] selects an index.
//! Lookup is intentionally cyclic so any index is valid, trading true
//! distinctness for a bounded table.
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Number of primes held by the process-wide table.
pub const PRIME_COUNT: usize = 2000;

static PRIMES: OnceLock<Vec<u32>> = OnceLock::new();

fn primes() -> &'static [u32] {
    PRIMES.get_or_init(|| {
        let mut found: Vec<u32> = Vec::with_capacity(PRIME_COUNT);
        let mut candidate = 2u32;
        while found.len() < PRIME_COUNT {
            if found.iter().all(|p| candidate % p != 0) {
                found.push(candidate);
            }
            candidate += 1;
        }
        found
    })
}

/// Return the `index`-th prime, wrapping past the end of the table.
#[inline]
pub fn nth_prime(index: usize) -> u32 {
    primes()[index % PRIME_COUNT]
}

/// Select a prime from a uniform sample in [0, 1].
///
/// The index is `floor(sample * PRIME_COUNT)`; a sample of exactly 1.0 wraps
/// back to the first prime. Samples outside [0, 1] violate a caller invariant
/// and abort the paint with [`Error::UnitSampleOutOfRange`].
pub fn prime_for_unit_sample(sample: f64) -> Result<u32> {
    if !(0.0..=1.0).contains(&sample) {
        return Err(Error::UnitSampleOutOfRange { value: sample });
    }
    Ok(nth_prime((sample * PRIME_COUNT as f64).floor() as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_starts_with_known_primes() {
        assert_eq!(nth_prime(0), 2);
        assert_eq!(nth_prime(1), 3);
        assert_eq!(nth_prime(2), 5);
        assert_eq!(nth_prime(3), 7);
        assert_eq!(nth_prime(4), 11);
        assert_eq!(nth_prime(100), 547);
    }

    #[test]
    fn table_ends_at_expected_prime() {
        // The 2000th prime.
        assert_eq!(nth_prime(PRIME_COUNT - 1), 17_389);
    }

    #[test]
    fn lookup_is_cyclic() {
        assert_eq!(nth_prime(PRIME_COUNT), 2);
        assert_eq!(nth_prime(PRIME_COUNT + 1), 3);
        assert_eq!(nth_prime(3 * PRIME_COUNT + 4), 11);
    }

    #[test]
    fn unit_sample_selects_across_table() {
        assert_eq!(prime_for_unit_sample(0.0).unwrap(), 2);
        // floor(0.5 * 2000) = 1000
        assert_eq!(prime_for_unit_sample(0.5).unwrap(), nth_prime(1000));
        // Exactly 1.0 is allowed and wraps.
        assert_eq!(prime_for_unit_sample(1.0).unwrap(), 2);
    }

    #[test]
    fn out_of_domain_sample_is_rejected() {
        let err = prime_for_unit_sample(1.5).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::UnitSampleOutOfRange { value } if value == 1.5
        ));
        assert!(prime_for_unit_sample(-0.1).is_err());
        assert!(prime_for_unit_sample(f64::NAN).is_err());
    }
}
