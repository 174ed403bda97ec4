//! Subtraction algorithms for limb vectors and signed values
//!

use crate::{BigInt, Sign};
use crate::arithmetic;
use crate::bigdigit::{sub_with_borrow, BigDigit};
use crate::stdlib::cmp::Ordering;
use crate::stdlib::vec::Vec;


/// a -= b, magnitudes only; requires |a| >= |b|
///
/// Borrows propagate from the least-significant limb forward. The
/// caller trims any most-significant zero limbs the cancellation
/// leaves behind.
pub(crate) fn sub_assign_digit_slices(a: &mut Vec<BigDigit>, b: &[BigDigit]) {
    debug_assert!(arithmetic::cmp_digit_slices(a, b) != Ordering::Less);

    let mut borrow = 0;
    for (i, a_digit) in a.iter_mut().enumerate() {
        if i >= b.len() && borrow == 0 {
            break;
        }
        let b_digit = b.get(i).cloned().unwrap_or(0);
        *a_digit = sub_with_borrow(*a_digit, b_digit, &mut borrow);
    }

    debug_assert_eq!(borrow, 0);
}


/// self -= other, handling every sign combination
///
/// Same signs compare magnitudes and subtract the smaller from the
/// larger, negating when the right side dominates; opposite signs add
/// magnitudes and keep the left side's sign.
pub(crate) fn subassign_bigints(lhs: &mut BigInt, rhs: &BigInt) {
    match (lhs.sign, rhs.sign) {
        (_, Sign::NoSign) => {}
        (Sign::NoSign, _) => {
            lhs.digits = rhs.digits.clone();
            lhs.sign = -rhs.sign;
        }
        (x, y) if x == y => match arithmetic::cmp_digit_slices(&lhs.digits, &rhs.digits) {
            Ordering::Equal => {
                lhs.digits.clear();
            }
            Ordering::Greater => {
                sub_assign_digit_slices(&mut lhs.digits, &rhs.digits);
            }
            Ordering::Less => {
                let mut digits = rhs.digits.clone();
                sub_assign_digit_slices(&mut digits, &lhs.digits);
                lhs.digits = digits;
                lhs.sign = -lhs.sign;
            }
        },
        _ => {
            arithmetic::addition::add_assign_digit_slices(&mut lhs.digits, &rhs.digits);
        }
    }

    lhs.trim();
}
