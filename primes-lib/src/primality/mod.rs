/// Smallest divisor of `candidate` in `2..candidate`, found by trial division.
///
/// Testing stops at the first divisor that divides evenly. Returns `None`
/// when no divisor exists, which includes candidates 0, 1 and 2.
#[must_use]
pub fn first_divisor(candidate: u64) -> Option<u64> {
    (2..candidate).find(|divisor| candidate % divisor == 0)
}

/// Trial-division primality test. 0 and 1 are not prime.
#[must_use]
pub fn is_prime(candidate: u64) -> bool {
    candidate >= 2 && first_divisor(candidate).is_none()
}
