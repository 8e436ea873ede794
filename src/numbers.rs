use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("no number specified")]
    Empty,
    #[error("`{0}` is not a valid number")]
    Invalid(String),
    #[error("the number specified is too large")]
    TooLarge,
    #[error("the number specified should be positive")]
    Negative,
}

/// Splits off a radix prefix: `0x`/`0X` is hexadecimal, a leading `0` is
/// octal, anything else decimal.
fn detect_radix(digits: &str) -> (u32, &str) {
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return (16, hex);
    }

    match digits.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => (8, octal),
        _ => (10, digits),
    }
}

/// Parses a command-line number the way a C `long` is read with automatic
/// base detection.
///
/// The value must fit into `i64` and must not be negative.
pub fn parse_number(text: &str) -> Result<u64, ParseNumberError> {
    let trimmed = text.trim();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if unsigned.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let (radix, digits) = detect_radix(unsigned);

    // parse_bytes would accept `_` separators and a second sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseNumberError::Invalid(text.to_string()));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| ParseNumberError::Invalid(text.to_string()))?;

    // i64::MIN has one more unit of magnitude than i64::MAX
    let limit = if negative {
        BigUint::from(i64::MIN.unsigned_abs())
    } else {
        BigUint::from(i64::MAX as u64)
    };
    if magnitude > limit {
        return Err(ParseNumberError::TooLarge);
    }

    if negative && !magnitude.is_zero() {
        return Err(ParseNumberError::Negative);
    }

    magnitude.to_u64().ok_or(ParseNumberError::TooLarge)
}
