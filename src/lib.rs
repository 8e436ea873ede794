mod factorization;
mod number_type;
mod numbers;
mod powerful;
mod wheel;

pub use factorization::{factorize, format_prime_powers, PrimePowers};
pub use number_type::Word;
pub use numbers::{parse_number, ParseNumberError};
pub use powerful::{classify, is_powerful, powerful_up_to, Classification};
pub use wheel::Wheel;
