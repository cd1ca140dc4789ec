//! Prime capacities for table growth.

/// Growth factor and candidate stride.
const PRIME_INCR: usize = 2;
/// Trial division stops at `candidate / PRIME_DENOM`.
const PRIME_DENOM: usize = 3;

/// Trial-division primality test.
///
/// Odd divisors are tried from 3 up to and including `n / 3` rather than
/// `sqrt(n)`. Any odd composite has its smallest factor within that bound.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % PRIME_INCR == 0 {
        return n == PRIME_INCR;
    }
    (PRIME_DENOM..=n / PRIME_DENOM)
        .step_by(PRIME_INCR)
        .all(|d| n % d != 0)
}

/// Smallest prime strictly greater than `2 * current`.
///
/// Candidates start at `2 * current + 1` and advance by 2, so only odd
/// values are tested. Returns `None` if the search would overflow `usize`.
pub fn next_prime(current: usize) -> Option<usize> {
    let mut candidate = current.checked_mul(PRIME_INCR)?.checked_add(1)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(PRIME_INCR)?;
    }
    Some(candidate)
}
