use std::fmt::{Debug, Display};

use num_integer::Integer;
use num_traits::{PrimInt, Unsigned};

/// Fixed-width unsigned integer the trial division engine runs on.
pub trait Word:
    PrimInt + Unsigned + Integer + Debug + Display + Send + Sync + 'static
{
    const TWO: Self;
    const THREE: Self;
    const FOUR: Self;
    const FIVE: Self;

    /// `self * self`, or `None` when the square does not fit the width.
    ///
    /// An overflowing square is larger than every value of the type, so
    /// callers comparing against a residual can treat `None` as "too big".
    fn checked_square(self) -> Option<Self>;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const TWO: Self = 2;
                const THREE: Self = 3;
                const FOUR: Self = 4;
                const FIVE: Self = 5;

                #[inline]
                fn checked_square(self) -> Option<Self> {
                    <$t>::checked_mul(self, self)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
