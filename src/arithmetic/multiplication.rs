//! Multiplication algorithms for limb vectors and signed values
//!

use crate::{BigInt, Sign};
use crate::arithmetic;
use crate::bigdigit::{split_wide, BigDigit, DoubleBigDigit};
use crate::stdlib::vec::Vec;


/// Schoolbook product of two limb slices
///
/// Limb products are accumulated in double-width arithmetic; a limb
/// pair multiplies out to at most RADIX^2, well inside u64.
pub(crate) fn multiply_digit_slices(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let mut product = vec![0; a.len() + b.len()];

    for (i, &a_digit) in a.iter().enumerate() {
        let mut carry: DoubleBigDigit = 0;

        for (j, &b_digit) in b.iter().enumerate() {
            let wide = product[i + j] as DoubleBigDigit
                + a_digit as DoubleBigDigit * b_digit as DoubleBigDigit
                + carry;
            let (hi, lo) = split_wide(wide);
            product[i + j] = lo;
            carry = hi;
        }

        let mut k = i + b.len();
        while carry != 0 {
            let wide = product[k] as DoubleBigDigit + carry;
            let (hi, lo) = split_wide(wide);
            product[k] = lo;
            carry = hi;
            k += 1;
        }
    }

    arithmetic::trim_digit_slice(&mut product);
    product
}


/// buf = a * s for a single-limb scalar, reusing buf's allocation
///
/// The buffer comes back trimmed, ready for magnitude comparison.
pub(crate) fn multiply_digit_slice_into(a: &[BigDigit], s: BigDigit, buf: &mut Vec<BigDigit>) {
    buf.clear();

    let mut carry: DoubleBigDigit = 0;
    for &digit in a.iter() {
        let wide = digit as DoubleBigDigit * s as DoubleBigDigit + carry;
        let (hi, lo) = split_wide(wide);
        buf.push(lo);
        carry = hi;
    }

    while carry != 0 {
        let (hi, lo) = split_wide(carry);
        buf.push(lo);
        carry = hi;
    }

    arithmetic::trim_digit_slice(buf);
}


/// self *= other
///
/// The sign is the sign product, absorbing to zero if either operand
/// is zero.
pub(crate) fn mulassign_bigints(lhs: &mut BigInt, rhs: &BigInt) {
    lhs.sign = lhs.sign * rhs.sign;
    if lhs.sign == Sign::NoSign {
        lhs.digits.clear();
        return;
    }

    lhs.digits = multiply_digit_slices(&lhs.digits, &rhs.digits);
    lhs.trim();
}



#[cfg(test)]
mod test_multiply_digit_slice_into {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($a:literal),* ] * $s:literal => [ $($c:literal),* ]) => {
            #[test]
            fn $name() {
                let a = [ $($a),* ];
                let expected: &[BigDigit] = &[ $($c),* ];

                let mut buf = Vec::new();
                multiply_digit_slice_into(&a, $s, &mut buf);
                assert_eq!(&buf[..], expected);
            }
        };
    }

    impl_case!(case_zero_scalar: [123, 456] * 0 => []);
    impl_case!(case_one: [123, 456] * 1 => [123, 456]);
    impl_case!(case_carry: [9999999] * 9999999 => [1, 9999998]);
    impl_case!(case_mid: [7883776, 2679845, 6394] * 2 => [5767552, 5359691, 12788]);
}
