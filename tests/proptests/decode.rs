//! Property tests for base decoding

use hashira::codec::{decode, digit_value};
use hashira::domain::Base;
use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A base in 2..=36
#[derive(Clone, Copy, Debug)]
struct ValidBase(u32);

impl Arbitrary for ValidBase {
    fn arbitrary(g: &mut Gen) -> Self {
        let span = Base::MAX - Base::MIN + 1;
        ValidBase(Base::MIN + u32::arbitrary(g) % span)
    }
}

/// A value wider than any machine word, built from random limbs
#[derive(Clone, Debug)]
struct WideValue(BigUint);

impl Arbitrary for WideValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let limbs: Vec<u32> = (0..4).map(|_| u32::arbitrary(g)).collect();
        WideValue(BigUint::new(limbs))
    }
}

/// Decoding the positional rendering of a value gives the value back
#[quickcheck]
fn prop_decode_matches_positional_notation(value: WideValue, base: ValidBase) -> bool {
    let WideValue(value) = value;
    let ValidBase(base) = base;
    let digits = value.to_str_radix(base);

    decode(&digits, base).is_ok_and(|decoded| decoded == value)
}

/// Upper-case digits decode to the same value as lower-case ones
#[quickcheck]
fn prop_decode_is_case_insensitive(value: u64, base: ValidBase) -> bool {
    let ValidBase(base) = base;
    let digits = BigUint::from(value).to_str_radix(base);

    decode(&digits.to_uppercase(), base).ok() == decode(&digits, base).ok()
}

/// Manual accumulation with u128 agrees for values that fit
#[quickcheck]
fn prop_decode_agrees_with_u128(value: u64, base: ValidBase) -> bool {
    let ValidBase(base) = base;
    let digits = BigUint::from(value).to_str_radix(base);

    let expected = digits.chars().fold(0u128, |acc, c| {
        acc * u128::from(base) + u128::from(digit_value(c).unwrap_or(0))
    });

    decode(&digits, base).is_ok_and(|decoded| decoded == BigUint::from(expected))
}

/// Any digit at or above the base is rejected
#[quickcheck]
fn prop_digit_at_or_above_base_rejected(base: ValidBase, excess: u8, prefix: u16) -> bool {
    let ValidBase(base) = base;
    if base == Base::MAX {
        return true; // No digit is out of range for base 36
    }

    let bad_value = base + u32::from(excess) % (Base::MAX + 1 - base);
    let Some(bad_digit) = char::from_digit(bad_value, 36) else {
        return false;
    };

    let mut digits = BigUint::from(prefix).to_str_radix(base);
    digits.push(bad_digit);

    decode(&digits, base).is_err_and(|e| e.kind() == "InvalidDigitError")
}
