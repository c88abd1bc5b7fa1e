use super::{check_limit, Enumerator};
use crate::error::Result;
use crate::primality::is_prime;
use crate::sequence::{Mode, PrimeSequence};

/// Produces every prime up to and including `limit`
///
/// Scanning starts at 1, but 1 is never reported: it has no divisor in
/// `2..1` and is rejected explicitly by [`is_prime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundEnumerator;

impl BoundEnumerator {
    #[must_use]
    pub fn new() -> Self {
        BoundEnumerator
    }
}

impl Enumerator for BoundEnumerator {
    fn enumerate(&self, limit: u64) -> Result<PrimeSequence> {
        check_limit(Mode::Bound, limit)?;

        let mut primes = PrimeSequence::new();
        for candidate in Mode::Bound.floor()..=limit {
            if is_prime(candidate) {
                primes.push(candidate);
            }
        }
        Ok(primes)
    }
}
