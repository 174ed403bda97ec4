//! Implement division
//!
//! Quotients truncate toward zero, like Rust's primitive integers.
//! Dividing by zero panics; the checked methods on `BigInt` return
//! `None` instead.

use crate::*;
use crate::stdlib::ops::{Div, DivAssign};


impl Div<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: BigInt) -> BigInt {
        &self / &other
    }
}

impl<'a> Div<&'a BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        &self / other
    }
}

forward_ref_val_binop!(impl Div for BigInt, div);

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        match self.checked_div_rem(other) {
            Some((quotient, _)) => quotient,
            None => panic!("Division by zero"),
        }
    }
}


impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: BigInt) {
        self.div_assign(&other);
    }
}

impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal / $b:literal => $c:literal ) => {
            #[test]
            fn $name() {
                let a: BigInt = $a.parse().unwrap();
                let b: BigInt = $b.parse().unwrap();
                let c: BigInt = $c.parse().unwrap();

                assert_eq!(c, a.clone() / b.clone());
                assert_eq!(c, a.clone() / &b);
                assert_eq!(c, &a / b.clone());
                assert_eq!(c, &a / &b);

                assert_eq!(Some(c.clone()), a.checked_div(&b));

                let (q, r) = a.div_rem(&b);
                assert_eq!(c, q);
                assert_eq!(a, q * &b + r);

                let mut n = a.clone();
                n /= b.clone();
                assert_eq!(c, n);

                let mut n = a.clone();
                n /= &b;
                assert_eq!(c, n);
            }
        };
    }

    impl_case!(case_6_3: "6" / "3" => "2");
    impl_case!(case_7_2: "7" / "2" => "3");
    impl_case!(case_n7_2: "-7" / "2" => "-3");
    impl_case!(case_7_n2: "7" / "-2" => "-3");
    impl_case!(case_n7_n2: "-7" / "-2" => "3");
    impl_case!(case_0_5: "0" / "5" => "0");
    impl_case!(case_0_n5: "0" / "-5" => "0");
    impl_case!(case_3_7: "3" / "7" => "0");
    impl_case!(case_identical: "12345678901234567890" / "12345678901234567890" => "1");
    impl_case!(case_radix_boundary: "10000000" / "2" => "5000000");
    impl_case!(case_20digit_7: "99999999999999999999" / "7" => "14285714285714285714");
    impl_case!(case_multi_limb_den: "121932631137021795226185032733622923332237463801111263526900"
        / "987654321098765432109876543210" => "123456789012345678901234567890");
    impl_case!(case_near_multiple: "199999999999999999997" / "99999999999999999999" => "1");

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn case_divide_by_zero_panics() {
        let a: BigInt = "42".parse().unwrap();
        let _ = a / BigInt::zero();
    }

    #[test]
    fn case_checked_div_by_zero_leaves_operands_untouched() {
        let a: BigInt = "42".parse().unwrap();
        let b = BigInt::zero();

        assert_eq!(a.checked_div(&b), None);
        assert_eq!(a, "42".parse().unwrap());
        assert_eq!(b, BigInt::zero());
    }
}
