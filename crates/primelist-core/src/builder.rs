//! Prime list construction.

use tracing::debug;

use crate::error::AllocationError;
use crate::list::{Number, PrimeList};
use crate::oracle::is_prime;

/// Safety factor applied to the Prime Number Theorem estimate.
const PNT_FACTOR: f64 = 1.3;

/// Initial capacity for the primes up to `limit`.
///
/// `ceil(1.3 * limit / ln(limit))`, or 1 when `limit <= 1`. The bound on
/// pi(x) is below 1.26 * x / ln(x) for every x > 1, so this rarely grows.
pub fn capacity_estimate(limit: Number) -> u64 {
    if limit <= 1 {
        return 1;
    }
    let limit = limit as f64;
    (PNT_FACTOR * (limit / limit.ln())).ceil() as u64
}

/// Collect every prime in `0..=limit`, in increasing order.
///
/// Each candidate is tested against the primes found before it. The
/// backing buffer is reserved up front from [`capacity_estimate`] and still
/// grows if the estimate falls short.
///
/// # Errors
///
/// Returns [`AllocationError`] if the initial reservation cannot be made.
pub fn build_prime_list(limit: Number) -> Result<PrimeList, AllocationError> {
    let requested = capacity_estimate(limit);
    let capacity = usize::try_from(requested).map_err(|_| AllocationError { requested })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| AllocationError { requested })?;

    let mut primes = PrimeList::with_buffer(buffer);
    for candidate in 0..=limit {
        if is_prime(candidate, primes.as_slice()) {
            primes.push(candidate);
        }
    }

    debug!(
        limit,
        capacity = requested,
        quantity = primes.quantity(),
        "built prime list"
    );
    Ok(primes)
}
