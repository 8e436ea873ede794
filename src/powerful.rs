//! Powerful numbers: every prime factor appears at least squared.
//!
//! References:
//! <https://en.wikipedia.org/wiki/Powerful_number>,
//! <http://oeis.org/A001694>

use std::fmt;

use log::{debug, info};
use rayon::prelude::*;

use crate::factorization::PrimePowers;
use crate::number_type::Word;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Powerful,
    NotPowerful,
    /// Zero, which has no prime decomposition.
    InvalidInput,
}

impl Classification {
    pub fn is_powerful(&self) -> bool {
        matches!(self, Classification::Powerful)
    }

    /// Tri-state code: `1` powerful, `0` not powerful, `-1` invalid input.
    pub fn code(&self) -> i8 {
        match self {
            Classification::Powerful => 1,
            Classification::NotPowerful => 0,
            Classification::InvalidInput => -1,
        }
    }
}

impl From<Classification> for i8 {
    fn from(classification: Classification) -> Self {
        classification.code()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classifies `n` by trial division with a mod 6 wheel.
///
/// Stops at the first prime found with exponent exactly 1. Runs in
/// O(sqrt(p)) divisions where `p` is the second largest prime factor,
/// which makes large semiprimes slow.
pub fn classify<W: Word>(n: W) -> Classification {
    let Some(mut powers) = PrimePowers::new(n) else {
        return Classification::InvalidInput;
    };

    match powers.find(|&(_, exponent)| exponent == 1) {
        Some((prime, _)) => {
            debug!("{n} is not powerful: {prime} divides it exactly once");
            Classification::NotPowerful
        }
        None => Classification::Powerful,
    }
}

/// `None` for zero, otherwise whether `n` is powerful.
pub fn is_powerful<W: Word>(n: W) -> Option<bool> {
    match classify(n) {
        Classification::InvalidInput => None,
        classification => Some(classification.is_powerful()),
    }
}

/// All powerful numbers in `1..=limit`, ascending.
pub fn powerful_up_to(limit: u64) -> Vec<u64> {
    let found = (1..=limit)
        .into_par_iter()
        .filter(|&n| classify(n).is_powerful())
        .collect::<Vec<u64>>();

    info!("found {} powerful numbers up to {limit}", found.len());

    found
}
