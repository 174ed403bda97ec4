//! Definitions of the "limb" type making up the digit vector of a BigInt
//!
//! Each limb stores seven decimal digits, so carry arithmetic works on
//! whole base-10^7 units and products of two limbs fit comfortably in
//! sixty-four bits.

use num_integer::div_rem;

/// A single limb of a BigInt
pub(crate) type BigDigit = u32;

/// Type wide enough to hold the product of two limbs
pub(crate) type DoubleBigDigit = u64;

/// Radix of a limb
pub(crate) const RADIX: BigDigit = 10_000_000;

/// Number of decimal digits packed into one limb
pub(crate) const RADIX_DIGITS: usize = 7;

/// Add limbs and incoming carry, returning limb and storing carry overflow
#[inline]
pub(crate) fn add_with_carry(a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let sum = a + b + *carry;
    debug_assert!(sum < 2 * RADIX);

    if sum < RADIX {
        *carry = 0;
        sum
    } else {
        *carry = 1;
        sum - RADIX
    }
}

/// Subtract limb and incoming borrow from `a`, storing the new borrow
#[inline]
pub(crate) fn sub_with_borrow(a: BigDigit, b: BigDigit, borrow: &mut BigDigit) -> BigDigit {
    let sub = b + *borrow;
    debug_assert!(sub < RADIX + 1);

    if a >= sub {
        *borrow = 0;
        a - sub
    } else {
        *borrow = 1;
        a + RADIX - sub
    }
}

/// Split a double-width value into (overflow, limb)
#[inline]
pub(crate) fn split_wide(n: DoubleBigDigit) -> (DoubleBigDigit, BigDigit) {
    let (hi, lo) = div_rem(n, RADIX as DoubleBigDigit);
    (hi, lo as BigDigit)
}
