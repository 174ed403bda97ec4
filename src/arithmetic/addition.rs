//! Addition algorithms for limb vectors and signed values
//!

use crate::{BigInt, Sign};
use crate::arithmetic;
use crate::bigdigit::{add_with_carry, BigDigit};
use crate::stdlib::cmp::Ordering;
use crate::stdlib::vec::Vec;


/// a += b, magnitudes only
///
/// Carries propagate from the least-significant limb forward; a final
/// carry grows the vector by one limb.
pub(crate) fn add_assign_digit_slices(a: &mut Vec<BigDigit>, b: &[BigDigit]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }

    let mut carry = 0;
    {
        let (low, high) = a.split_at_mut(b.len());

        for (a_digit, &b_digit) in low.iter_mut().zip(b.iter()) {
            *a_digit = add_with_carry(*a_digit, b_digit, &mut carry);
        }

        for a_digit in high.iter_mut() {
            if carry == 0 {
                break;
            }
            *a_digit = add_with_carry(*a_digit, 0, &mut carry);
        }
    }

    if carry != 0 {
        a.push(carry);
    }
}


/// self += other, handling every sign combination
///
/// Same signs add magnitudes; opposite signs subtract the smaller
/// magnitude from the larger, the result taking the sign of the
/// larger-magnitude operand.
pub(crate) fn addassign_bigints(lhs: &mut BigInt, rhs: &BigInt) {
    match (lhs.sign, rhs.sign) {
        (_, Sign::NoSign) => {}
        (Sign::NoSign, _) => {
            *lhs = rhs.clone();
        }
        (x, y) if x == y => {
            add_assign_digit_slices(&mut lhs.digits, &rhs.digits);
        }
        _ => match arithmetic::cmp_digit_slices(&lhs.digits, &rhs.digits) {
            Ordering::Equal => {
                lhs.digits.clear();
            }
            Ordering::Greater => {
                arithmetic::subtraction::sub_assign_digit_slices(&mut lhs.digits, &rhs.digits);
            }
            Ordering::Less => {
                let mut digits = rhs.digits.clone();
                arithmetic::subtraction::sub_assign_digit_slices(&mut digits, &lhs.digits);
                lhs.digits = digits;
                lhs.sign = rhs.sign;
            }
        },
    }

    lhs.trim();
}


#[cfg(test)]
mod test_add_assign_digit_slices {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($a:literal),* ] + [ $($b:literal),* ] => [ $($c:literal),* ]) => {
            #[test]
            fn $name() {
                let mut v = vec![ $($a),* ];
                let b = [ $($b),* ];
                add_assign_digit_slices(&mut v, &b);
                let expected: &[BigDigit] = &[ $($c),* ];
                assert_eq!(&v[..], expected);
            }
        };
    }

    impl_case!(case_1_1: [1] + [1] => [2]);
    impl_case!(case_carry_once: [9999999] + [1] => [0, 1]);
    impl_case!(case_carry_ripples: [9999999, 9999999, 9999999] + [1] => [0, 0, 0, 1]);
    impl_case!(case_shorter_rhs: [5, 5, 5] + [5] => [10, 5, 5]);
    impl_case!(case_longer_rhs: [5] + [5, 5, 5] => [10, 5, 5]);
    impl_case!(case_carry_stops_midway: [9999999, 3, 9999999] + [1] => [0, 4, 9999999]);
    impl_case!(case_7_digit_pairs: [755222, 2501] + [7883776, 2679845, 6394] => [8638998, 2682346, 6394]);
}
