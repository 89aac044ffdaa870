/// Outcome of the divisor search for a single candidate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Classification {
    /// The search ran past the candidate's half without finding a divisor.
    Prime,
    /// The search ended on `divisor` without passing the candidate's half.
    /// Whenever a divisor was found, `divisor` divides the candidate.
    Composite { divisor: u64 },
}

impl Classification {
    pub fn is_prime(&self) -> bool {
        matches!(self, Classification::Prime)
    }
}

/// Returns `candidate / 2` computed with real division,
/// so odd candidates land on a half-integer (5 -> 2.5).
#[inline]
pub fn half_of(candidate: u64) -> f64 {
    candidate as f64 / 2.0
}

/// Runs the trial division search for `candidate`.
///
/// Divisors are tried from 2 upwards while they are strictly below
/// [`half_of`] the candidate. The search stops on the first divisor that
/// divides the candidate, and the candidate is prime if and only if the
/// divisor it stopped on is strictly above the half.
///
/// `candidate` must be at least 2.
pub fn classify(candidate: u64) -> Classification {
    debug_assert!(candidate >= 2, "candidate {candidate} is below 2");
    let half = half_of(candidate);
    let mut divisor = 2;
    let mut found_divisor = false;
    while (divisor as f64) < half {
        if candidate % divisor == 0 {
            found_divisor = true;
            break;
        }
        divisor += 1;
    }

    // The flag alone is not enough: for 4 the loop never runs and the search
    // ends level with the half, which still rejects the candidate.
    if !found_divisor && divisor as f64 > half {
        Classification::Prime
    } else {
        Classification::Composite { divisor }
    }
}
