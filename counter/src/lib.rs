//! Counting primes by exhaustive trial division.
//!
//! Every candidate in `[2, limit)` is tested against all divisors strictly
//! below half of it, where the half is computed with real division. The
//! candidate is prime when the divisor search ends strictly above that half.

mod count;
mod limit;
mod search;

pub use count::{count_primes, PrimeCounter};
pub use limit::{Limit, LimitError, MAX_LIMIT};
pub use search::{classify, half_of, Classification};
