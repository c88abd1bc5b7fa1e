use super::{check_limit, Enumerator};
use crate::error::{Error, Result};
use crate::primality::is_prime;
use crate::sequence::{Mode, PrimeSequence};

/// Produces the first `limit` primes
#[derive(Debug, Default, Clone, Copy)]
pub struct CountEnumerator;

impl CountEnumerator {
    #[must_use]
    pub fn new() -> Self {
        CountEnumerator
    }
}

impl Enumerator for CountEnumerator {
    fn enumerate(&self, limit: u64) -> Result<PrimeSequence> {
        check_limit(Mode::Count, limit)?;
        let target = usize::try_from(limit)
            .map_err(|_| Error::invalid(format!("count limit {limit} is too large")))?;

        let mut primes = PrimeSequence::with_capacity(target.min(1024));
        let mut candidate = Mode::Count.floor();
        while primes.len() < target {
            if is_prime(candidate) {
                primes.push(candidate);
            }
            candidate += 1;
        }
        Ok(primes)
    }
}
