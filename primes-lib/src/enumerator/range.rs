use crate::error::{Error, Result};
use crate::primality::is_prime;
use crate::sequence::PrimeSequence;

/// Every prime `p` with `low <= p <= high`, ascending
///
/// # Errors
///
/// Returns `Error::InvalidInput` if `high` is zero or `low > high`.
pub fn enumerate_range(low: u64, high: u64) -> Result<PrimeSequence> {
    if high == 0 {
        return Err(Error::invalid("range upper bound must be at least 1"));
    }
    if low > high {
        return Err(Error::invalid(format!(
            "range lower bound {low} exceeds upper bound {high}"
        )));
    }

    let mut primes = PrimeSequence::new();
    for candidate in low..=high {
        if is_prime(candidate) {
            primes.push(candidate);
        }
    }
    Ok(primes)
}
