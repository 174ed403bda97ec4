//! Long division of limb vectors and signed values
//!
//! There is no native wide-division primitive for base-10^7 limbs, so
//! quotient limbs are found by binary search: each probe multiplies
//! the divisor by a candidate limb and compares against the running
//! remainder.

use crate::{BigInt, Zero};
use crate::arithmetic;
use crate::arithmetic::multiplication::multiply_digit_slice_into;
use crate::bigdigit::{BigDigit, RADIX};
use crate::stdlib::cmp::Ordering;
use crate::stdlib::vec::Vec;


/// Largest q in [0, RADIX) with den * q <= rem
///
/// rem is bounded by den * RADIX, so the upper bracket always holds.
fn quotient_digit(rem: &[BigDigit], den: &[BigDigit], probe: &mut Vec<BigDigit>) -> BigDigit {
    debug_assert!(!den.is_empty());

    // invariants: den * lo <= rem, den * hi > rem
    let mut lo: BigDigit = 0;
    let mut hi: BigDigit = RADIX;

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;

        multiply_digit_slice_into(den, mid, probe);
        if arithmetic::cmp_digit_slices(probe, rem) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    lo
}

/// Divide magnitudes, returning (quotient, remainder) limb vectors
///
/// Walks the dividend from its most-significant limb, prepending each
/// limb to a running remainder and extracting one quotient limb per
/// step. Requires a non-empty divisor.
pub(crate) fn div_rem_digit_slices(
    num: &[BigDigit],
    den: &[BigDigit],
) -> (Vec<BigDigit>, Vec<BigDigit>) {
    debug_assert!(!den.is_empty());

    // quotient limbs are produced most-significant first
    let mut quotient = Vec::with_capacity(num.len());
    let mut remainder: Vec<BigDigit> = Vec::new();
    let mut probe: Vec<BigDigit> = Vec::new();

    for &digit in num.iter().rev() {
        remainder.insert(0, digit);
        arithmetic::trim_digit_slice(&mut remainder);

        let q = quotient_digit(&remainder, den, &mut probe);
        quotient.push(q);

        if q != 0 {
            multiply_digit_slice_into(den, q, &mut probe);
            arithmetic::subtraction::sub_assign_digit_slices(&mut remainder, &probe);
            arithmetic::trim_digit_slice(&mut remainder);
        }
    }

    quotient.reverse();
    arithmetic::trim_digit_slice(&mut quotient);

    (quotient, remainder)
}


/// Truncating division of signed values, or None for a zero divisor
///
/// The quotient's sign is the sign product; the remainder is zero or
/// takes the dividend's sign.
pub(crate) fn checked_div_rem(lhs: &BigInt, rhs: &BigInt) -> Option<(BigInt, BigInt)> {
    if rhs.is_zero() {
        return None;
    }

    if lhs.is_zero() {
        return Some((Zero::zero(), Zero::zero()));
    }

    let (q, r) = div_rem_digit_slices(&lhs.digits, &rhs.digits);

    let quotient = BigInt::from_limbs(lhs.sign * rhs.sign, q);
    let remainder = BigInt::from_limbs(lhs.sign, r);

    Some((quotient, remainder))
}


#[cfg(test)]
mod test_div_rem_digit_slices {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($a:literal),* ] / [ $($b:literal),* ] => [ $($q:literal),* ] rem [ $($r:literal),* ]) => {
            #[test]
            fn $name() {
                let a = [ $($a),* ];
                let b = [ $($b),* ];
                let expected_q: &[BigDigit] = &[ $($q),* ];
                let expected_r: &[BigDigit] = &[ $($r),* ];

                let (q, r) = div_rem_digit_slices(&a, &b);
                assert_eq!(&q[..], expected_q, "quotient");
                assert_eq!(&r[..], expected_r, "remainder");
            }
        };
    }

    impl_case!(case_1_1: [1] / [1] => [1] rem []);
    impl_case!(case_0in1limb_7: [3] / [7] => [] rem [3]);
    impl_case!(case_100_7: [100] / [7] => [14] rem [2]);
    // 10^7 / 2 = 5 * 10^6
    impl_case!(case_radix_2: [0, 1] / [2] => [5000000] rem []);
    // 10^14 / 3 = 33333333333333 rem 1
    impl_case!(case_radix_sq_3: [0, 0, 1] / [3] => [3333333, 3333333] rem [1]);
    // 99999999999999 / 99999998 = 1000000 rem 1999999
    impl_case!(case_two_limb_den: [9999999, 9999999] / [9999998, 9] => [1000000] rem [1999999]);
    // dividend shorter than divisor
    impl_case!(case_small_by_large: [5] / [0, 1] => [] rem [5]);
}

#[cfg(test)]
mod test_quotient_digit {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($rem:literal),* ] over [ $($den:literal),* ] => $q:literal) => {
            #[test]
            fn $name() {
                let rem = [ $($rem),* ];
                let den = [ $($den),* ];
                let mut probe = Vec::new();
                assert_eq!(quotient_digit(&rem, &den, &mut probe), $q);
            }
        };
    }

    impl_case!(case_empty_rem: [] over [3] => 0);
    impl_case!(case_exact: [21] over [3] => 7);
    impl_case!(case_rounds_down: [22] over [3] => 7);
    impl_case!(case_max_digit: [9999999] over [1] => 9999999);
    impl_case!(case_rem_below_den: [5] over [7] => 0);
}
