//! Routines for parsing decimal strings into BigInts

use crate::{BigInt, ParseBigIntError, Sign, Zero};
use crate::bigdigit::{BigDigit, RADIX_DIGITS};
use crate::stdlib::vec::Vec;


/// Parse an optionally signed decimal string
///
/// The whole body is validated before any limbs are built, so a
/// failed parse leaves nothing half-constructed. Limbs are cut seven
/// digits at a time from the least-significant end.
pub(crate) fn parse_decimal_str(s: &str) -> Result<BigInt, ParseBigIntError> {
    let (sign, body) = match s.as_bytes().first() {
        Some(&b'-') => (Sign::Minus, &s[1..]),
        Some(&b'+') => (Sign::Plus, &s[1..]),
        _ => (Sign::Plus, s),
    };

    if body.is_empty() {
        return Err(ParseBigIntError::Empty);
    }

    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseBigIntError::InvalidDigit);
    }

    // leading zeros carry no magnitude; "000" and "-0" are canonical zero
    let body = body.trim_start_matches('0');
    if body.is_empty() {
        return Ok(BigInt::zero());
    }

    let mut digits = Vec::with_capacity(body.len() / RADIX_DIGITS + 1);
    for chunk in body.as_bytes().rchunks(RADIX_DIGITS) {
        let limb = chunk
            .iter()
            .fold(0, |acc, &b| acc * 10 + (b - b'0') as BigDigit);
        digits.push(limb);
    }

    Ok(BigInt {
        sign: sign,
        digits: digits,
    })
}
