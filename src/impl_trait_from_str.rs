use crate::*;
use stdlib::str::FromStr;

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        // implemented in impl_num.rs
        BigInt::from_str_radix(s, 10)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $canonical:literal) => {
            #[test]
            fn $name() {
                let n = BigInt::from_str($input).unwrap();
                assert_eq!(n.to_string(), $canonical);

                // canonical strings round-trip
                let again = BigInt::from_str(&n.to_string()).unwrap();
                assert_eq!(again, n);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_n0: "-0" => "0");
    impl_case!(case_p0: "+0" => "0");
    impl_case!(case_123: "123" => "123");
    impl_case!(case_0000123: "0000123" => "123");
    impl_case!(case_p987: "+987" => "987");
    impl_case!(case_n123: "-123" => "-123");
    impl_case!(case_n00077: "-00077" => "-77");
    impl_case!(case_one_limb_exact: "9999999" => "9999999");
    impl_case!(case_two_limbs: "10000000" => "10000000");
    impl_case!(case_40_digits: "1234567890123456789012345678901234567890" => "1234567890123456789012345678901234567890");
}


#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                BigInt::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty: "" => "Empty");
    impl_case!(case_bad_string_only_minus: "-" => "Empty");
    impl_case!(case_bad_string_only_plus: "+" => "Empty");
    impl_case!(case_bad_string_hello: "hello" => "InvalidDigit");
    impl_case!(case_bad_string_nan: "nan" => "InvalidDigit");
    impl_case!(case_bad_string_invalid_char: "12z3" => "InvalidDigit");
    impl_case!(case_bad_string_decimal_point: "123.45" => "InvalidDigit");
    impl_case!(case_bad_string_exponent: "12e4" => "InvalidDigit");
    impl_case!(case_bad_string_hex: "0xCafeBeef" => "InvalidDigit");
    impl_case!(case_bad_string_whitespace: " 12" => "InvalidDigit");
    impl_case!(case_bad_string_trailing_newline: "12\n" => "InvalidDigit");
}
