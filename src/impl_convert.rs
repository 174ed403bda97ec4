//! Code for implementing From<T> for BigInt
//!
//! Primitive integers are decomposed into limbs by repeated division
//! by the limb radix; signed types go through their unsigned
//! counterpart so `i*::MIN` survives the magnitude extraction.

use crate::{BigInt, Sign};
use crate::bigdigit::{BigDigit, RADIX};
use crate::stdlib::vec::Vec;

use num_integer::div_rem;


macro_rules! impl_from_unsigned_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                let mut value = n;
                let mut digits = Vec::new();
                while value != 0 {
                    let (q, r) = div_rem(value, RADIX as $t);
                    digits.push(r as BigDigit);
                    value = q;
                }

                let sign = if digits.is_empty() {
                    Sign::NoSign
                } else {
                    Sign::Plus
                };

                BigInt {
                    sign: sign,
                    digits: digits,
                }
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_unsigned_primitive!(u32);
impl_from_unsigned_primitive!(u64);
impl_from_unsigned_primitive!(u128);


macro_rules! impl_from_signed_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                let mut result = BigInt::from(n.unsigned_abs());
                if n < 0 {
                    result.sign = Sign::Minus;
                }
                result
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_signed_primitive!(i32);
impl_from_signed_primitive!(i64);
impl_from_signed_primitive!(i128);


// narrow types widen before decomposing
macro_rules! impl_from_primitive_via {
    ($t:ty => $via:ty) => {
        impl From<$t> for BigInt {
            #[inline]
            fn from(n: $t) -> Self {
                BigInt::from(n as $via)
            }
        }

        impl From<&$t> for BigInt {
            #[inline]
            fn from(n: &$t) -> Self {
                BigInt::from(*n as $via)
            }
        }
    };
}

impl_from_primitive_via!(u8 => u32);
impl_from_primitive_via!(u16 => u32);
impl_from_primitive_via!(i8 => i32);
impl_from_primitive_via!(i16 => i32);


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $input:expr => $expected:literal) => {
            #[test]
            fn $name() {
                let n = BigInt::from($input);
                assert_eq!(n.to_string(), $expected);
                assert_eq!(BigInt::from(&$input), n);
            }
        };
    }

    impl_case!(case_0u32: 0u32 => "0");
    impl_case!(case_1u8: 1u8 => "1");
    impl_case!(case_n1i8: -1i8 => "-1");
    impl_case!(case_9999999u32: 9_999_999u32 => "9999999");
    impl_case!(case_10000000u32: 10_000_000u32 => "10000000");
    impl_case!(case_u32_max: u32::MAX => "4294967295");
    impl_case!(case_u64_max: u64::MAX => "18446744073709551615");
    impl_case!(case_i64_min: i64::MIN => "-9223372036854775808");
    impl_case!(case_i64_max: i64::MAX => "9223372036854775807");
    impl_case!(case_u128_max: u128::MAX => "340282366920938463463374607431768211455");
    impl_case!(case_i128_min: i128::MIN => "-170141183460469231731687303715884105728");
    impl_case!(case_n123i32: -123i32 => "-123");

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(BigInt::from(0i64).sign(), Sign::NoSign);
        assert_eq!(BigInt::from(0u8).sign(), Sign::NoSign);
    }
}
