use crate::limit::{Limit, MAX_LIMIT};
use crate::search::classify;

/// Counts the candidates in `[2, limit)` that [`classify`] accepts as prime.
///
/// Limits of 2 or less give an empty range and a count of 0.
/// `limit` must not exceed [`MAX_LIMIT`].
pub fn count_primes(limit: u64) -> u64 {
    debug_assert!(limit <= MAX_LIMIT, "limit {limit} exceeds {MAX_LIMIT}");
    let _span = tracing::debug_span!("count_primes", limit).entered();

    let mut prime_count = 0;
    for candidate in 2..limit {
        let classification = classify(candidate);
        log::trace!("{candidate}: {classification:?}");
        if classification.is_prime() {
            prime_count += 1;
        }
    }

    log::debug!("Found {prime_count} primes below {limit}.");
    prime_count
}

/// Counts primes below a validated [`Limit`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PrimeCounter {
    limit: Limit,
}

impl PrimeCounter {
    pub fn new(limit: Limit) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn count(&self) -> u64 {
        count_primes(self.limit.get())
    }
}

impl From<Limit> for PrimeCounter {
    fn from(limit: Limit) -> Self {
        Self::new(limit)
    }
}
