//! OneMax fitness: the score of a candidate is its number of set bits.

use std::fmt;

use log::trace;

use crate::popcount::{Candidate, WIDTH, count};
use crate::source::ValueSource;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fitness(u32);

impl Fitness {
    /// Score of the all-ones candidate.
    pub const MAX: Fitness = Fitness(WIDTH);

    #[inline]
    pub fn of(candidate: Candidate) -> Self {
        Fitness(count(candidate))
    }

    /// Scores a value that may be wider than a candidate. Only the low
    /// `WIDTH` bits are counted.
    #[inline]
    pub fn of_wide(value: u128) -> Self {
        Fitness::of(value as Candidate)
    }

    /// Number of clear bits in the candidate that produced this score.
    #[inline]
    pub fn zeros(self) -> u32 {
        WIDTH - self.0
    }

    /// Whether the search target has been reached.
    #[inline]
    pub fn is_optimal(self) -> bool {
        self == Fitness::MAX
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TwoMax: rewards a candidate for being close to either all ones or all
/// zeros, so both extremes score `WIDTH`.
pub fn twomax(candidate: Candidate) -> Fitness {
    let ones = Fitness::of(candidate);
    Fitness(ones.0.max(ones.zeros()))
}

/// Pulls exactly one candidate out of `source` and scores it.
pub fn evaluate<S: ValueSource + ?Sized>(source: &mut S) -> Fitness {
    let candidate = source.next();
    let fitness = Fitness::of(candidate);
    trace!("candidate {candidate:#018x} scored {fitness}");
    fitness
}
