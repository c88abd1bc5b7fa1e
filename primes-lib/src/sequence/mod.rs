use serde::Serialize;
use std::fmt;

/// Stopping condition of an enumeration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stop once the sequence holds `limit` primes
    Count,
    /// Stop once the candidate exceeds `limit` (inclusive bound)
    Bound,
}

impl Mode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Count => "count",
            Mode::Bound => "bound",
        }
    }

    /// First candidate tested in this mode
    #[must_use]
    pub fn floor(&self) -> u64 {
        match self {
            Mode::Count => 2,
            Mode::Bound => 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primes in ascending discovery order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeSequence {
    primes: Vec<u64>,
}

impl PrimeSequence {
    #[must_use]
    pub fn new() -> Self {
        PrimeSequence { primes: vec![] }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PrimeSequence {
            primes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, prime: u64) {
        debug_assert!(self.primes.last().map_or(true, |&last| last < prime));
        self.primes.push(prime);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_as_str() {
        assert_eq!(Mode::Count.as_str(), "count");
        assert_eq!(Mode::Bound.to_string(), "bound");
    }

    #[test]
    fn test_mode_floor() {
        assert_eq!(Mode::Count.floor(), 2);
        assert_eq!(Mode::Bound.floor(), 1);
    }

    #[test]
    fn test_sequence_new_is_empty() {
        let seq = PrimeSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.last(), None);
    }

    #[test]
    fn test_sequence_push_keeps_order() {
        let mut seq = PrimeSequence::new();
        seq.push(2);
        seq.push(3);
        seq.push(5);
        assert_eq!(seq.as_slice(), &[2, 3, 5]);
        assert_eq!(seq.last(), Some(5));
        assert_eq!(seq.iter().sum::<u64>(), 10);
    }

    #[test]
    fn test_sequence_with_capacity() {
        let mut seq = PrimeSequence::with_capacity(2);
        seq.push(7);
        seq.push(11);
        assert_eq!(seq.as_slice(), &[7, 11]);
    }
}
