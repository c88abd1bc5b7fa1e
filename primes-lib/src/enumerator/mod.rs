pub mod bound;
pub mod count;
pub mod range;

pub use bound::BoundEnumerator;
pub use count::CountEnumerator;
pub use range::enumerate_range;

use crate::error::{Error, Result};
use crate::sequence::{Mode, PrimeSequence};

/// Trait for mode-specific prime enumeration strategies
pub trait Enumerator {
    /// Enumerate primes in ascending order until the stopping condition holds
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `limit` is zero.
    fn enumerate(&self, limit: u64) -> Result<PrimeSequence>;
}

/// Factory for creating enumerators based on mode
#[must_use]
pub fn get_enumerator(mode: Mode) -> Box<dyn Enumerator> {
    match mode {
        Mode::Count => Box::new(CountEnumerator::new()),
        Mode::Bound => Box::new(BoundEnumerator::new()),
    }
}

/// Enumerate primes for a mode and limit
///
/// # Errors
///
/// Returns `Error::InvalidInput` if `limit` is zero.
pub fn enumerate(mode: Mode, limit: u64) -> Result<PrimeSequence> {
    get_enumerator(mode).enumerate(limit)
}

pub(crate) fn check_limit(mode: Mode, limit: u64) -> Result<()> {
    if limit == 0 {
        return Err(Error::invalid(format!(
            "{mode} limit must be at least 1, got 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::is_prime;

    #[test]
    fn test_get_enumerator_count() {
        let seq = get_enumerator(Mode::Count).enumerate(4).unwrap();
        assert_eq!(seq.as_slice(), &[2, 3, 5, 7]);
    }

    #[test]
    fn test_get_enumerator_bound() {
        let seq = get_enumerator(Mode::Bound).enumerate(4).unwrap();
        assert_eq!(seq.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_enumerate_zero_limit_rejected() {
        for mode in [Mode::Count, Mode::Bound] {
            let err = enumerate(mode, 0).unwrap_err();
            assert!(err.is_invalid_input(), "{mode}: {err}");
        }
    }

    #[test]
    fn test_count_and_bound_agree() {
        // The first 25 primes are exactly the primes up to 97
        let counted = enumerate(Mode::Count, 25).unwrap();
        let bounded = enumerate(Mode::Bound, 97).unwrap();
        assert_eq!(counted, bounded);
    }

    #[test]
    fn test_enumerate_is_idempotent() {
        let first = enumerate(Mode::Count, 50).unwrap();
        let second = enumerate(Mode::Count, 50).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_element_is_prime() {
        let seq = enumerate(Mode::Bound, 500).unwrap();
        assert!(seq.iter().all(is_prime));
    }
}
