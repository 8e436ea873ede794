use std::array;
use std::iter::Chain;

use itertools::Itertools;
use log::trace;

use crate::number_type::Word;
use crate::wheel::Wheel;

type Candidates<W> = Chain<array::IntoIter<W, 2>, Wheel<W>>;

/// Lazy trial division of a positive number into `(prime, exponent)` pairs.
///
/// Primes come out in increasing order, each with its full exponent. Nothing
/// is divided until the next pair is requested, so a consumer that stops
/// early skips the remaining work.
#[derive(Clone, Debug)]
pub struct PrimePowers<W> {
    remaining: W,
    candidates: Candidates<W>,
}

impl<W: Word> PrimePowers<W> {
    /// Returns `None` for zero, which has no prime decomposition.
    pub fn new(n: W) -> Option<Self> {
        if n.is_zero() {
            return None;
        }

        Some(PrimePowers {
            remaining: n,
            candidates: [W::TWO, W::THREE].into_iter().chain(Wheel::new()),
        })
    }

    /// Part of the number that has not been factored yet.
    pub fn remaining(&self) -> W {
        self.remaining
    }

    fn strip(&mut self, divisor: W) -> u32 {
        let mut exponent = 0;
        loop {
            let (quotient, rem) = self.remaining.div_rem(&divisor);
            if !rem.is_zero() {
                break;
            }
            self.remaining = quotient;
            exponent += 1;
        }
        exponent
    }
}

impl<W: Word> Iterator for PrimePowers<W> {
    type Item = (W, u32);

    fn next(&mut self) -> Option<(W, u32)> {
        while self.remaining != W::one() {
            let remaining = self.remaining;

            // candidates past sqrt(remaining) cannot divide it, whatever is left is prime
            let Some(divisor) = self
                .candidates
                .next()
                .filter(|d| d.checked_square().map_or(false, |square| square <= remaining))
            else {
                self.remaining = W::one();
                trace!("residual prime {remaining}");
                return Some((remaining, 1));
            };

            let exponent = self.strip(divisor);
            if exponent > 0 {
                trace!("stripped {divisor}^{exponent}, {} left", self.remaining);
                return Some((divisor, exponent));
            }
        }
        None
    }
}

pub fn factorize<W: Word>(n: W) -> Option<Vec<(W, u32)>> {
    PrimePowers::new(n).map(Iterator::collect)
}

/// Renders a decomposition as `2^2 * 3^5 * 7`; the empty product is `1`.
pub fn format_prime_powers<W: Word>(powers: &[(W, u32)]) -> String {
    if powers.is_empty() {
        return "1".to_string();
    }

    powers
        .iter()
        .map(|&(prime, exponent)| match exponent {
            1 => prime.to_string(),
            _ => format!("{prime}^{exponent}"),
        })
        .join(" * ")
}
