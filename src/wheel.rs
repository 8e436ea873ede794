use crate::number_type::Word;

/// Trial divisor candidates coprime to 6: 5, 7, 11, 13, 17, 19, ...
///
/// Steps alternate +2 and +4, so every prime above 3 is produced and no
/// multiple of 2 or 3 is. The iterator ends once the next candidate does
/// not fit into `W`.
#[derive(Clone, Debug)]
pub struct Wheel<W> {
    next: Option<W>,
    step: W,
}

impl<W: Word> Wheel<W> {
    pub fn new() -> Self {
        Wheel {
            next: Some(W::FIVE),
            step: W::TWO,
        }
    }
}

impl<W: Word> Default for Wheel<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Iterator for Wheel<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        let current = self.next?;

        self.next = current.checked_add(&self.step);
        self.step = if self.step == W::TWO { W::FOUR } else { W::TWO };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::Wheel;

    #[test]
    fn starts_with_expected_candidates() {
        let first = Wheel::<u64>::new().take(10).collect_vec();
        assert_eq!(first, vec![5, 7, 11, 13, 17, 19, 23, 25, 29, 31]);
    }

    #[test]
    fn produces_exactly_numbers_coprime_to_six() {
        let expected = (5u32..10_000).filter(|n| n % 2 != 0 && n % 3 != 0).collect_vec();
        let produced = Wheel::<u32>::new().take_while(|&d| d < 10_000).collect_vec();
        assert_eq!(produced, expected);
    }

    #[test]
    fn stops_before_overflow() {
        let all = Wheel::<u8>::new().collect_vec();
        assert_eq!(all.len(), 84);
        assert_eq!(all.last(), Some(&253));
        assert!(all.iter().tuple_windows().all(|(a, b)| a < b));
    }
}
