//! Arbitrary-base digit decoding
//!
//! Share values arrive as digit strings in a stated base between 2 and 36.
//! This module turns them into exact unbounded integers.
//!
//! # Alphabet
//!
//! Digits are `0-9` followed by `a-z`, case-insensitive, giving values 0 to 35.
//! A character outside the alphabet, or one whose value is not below the
//! base, is rejected.
//!
//! # Examples
//!
//! ```rust
//! use hashira::codec::decode;
//! use num_bigint::BigUint;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(decode("111", 2)?, BigUint::from(7u32));
//! assert_eq!(decode("213", 4)?, BigUint::from(39u32));
//! assert_eq!(decode("FF", 16)?, BigUint::from(255u32));
//!
//! // '2' is not a binary digit
//! assert!(decode("2", 2).is_err());
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use num_traits::Zero;

use crate::domain::Base;
use crate::error::SolveError;

/// Value of a single digit character, if it belongs to the alphabet
///
/// # Examples
///
/// ```rust
/// use hashira::codec::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('a'), Some(10));
/// assert_eq!(digit_value('Z'), Some(35));
/// assert_eq!(digit_value('-'), None);
/// ```
#[must_use]
pub fn digit_value(c: char) -> Option<u32> {
    // to_digit(36) accepts exactly 0-9, a-z and A-Z
    c.to_digit(36)
}

/// Decodes a digit string in the given base
///
/// # Errors
/// Returns [`SolveError::InvalidBase`] if `base` is outside 2..=36, and
/// otherwise the errors of [`decode_in`]
pub fn decode(digits: &str, base: u32) -> Result<BigUint, SolveError> {
    decode_in(digits, Base::new(base)?)
}

/// Decodes a digit string in an already validated base
///
/// Digits are consumed most significant first, accumulating
/// `result * base + digit` with unbounded arithmetic.
///
/// # Errors
/// - [`SolveError::EmptyDigits`] if `digits` is empty
/// - [`SolveError::InvalidDigit`] if a character is outside the alphabet or
///   its value is not below the base
pub fn decode_in(digits: &str, base: Base) -> Result<BigUint, SolveError> {
    if digits.is_empty() {
        return Err(SolveError::EmptyDigits { index: None });
    }

    let radix = *base;
    let mut result = BigUint::zero();

    for (position, c) in digits.chars().enumerate() {
        let value = digit_value(c)
            .filter(|&v| v < radix)
            .ok_or(SolveError::InvalidDigit {
                index: None,
                digit: c,
                position,
                base: radix,
            })?;

        result = result * radix + value;
    }

    Ok(result)
}
