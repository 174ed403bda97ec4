//! Implementation of std::fmt traits
//!
//! Formatting is the inverse of the parser's limb chunking: the
//! most-significant limb prints without padding, every limb after it
//! is zero-padded to seven digits.

use crate::*;
use stdlib::fmt::Write;


impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let non_negative = self.sign != Sign::Minus;

        let mut buf = String::new();
        match self.digits.split_last() {
            None => buf.push('0'),
            Some((highest, rest)) => {
                write!(buf, "{}", highest)?;
                for digit in rest.iter().rev() {
                    write!(buf, "{:07}", digit)?;
                }
            }
        }

        // pad_integral handles the minus sign, and the fill/width/plus
        // formatter flags, the same way primitive integers do
        f.pad_integral(non_negative, "", &buf)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt(\"{}\")", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use stdlib::string::ToString;

    mod fmt_display {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let n: BigInt = $input.parse().unwrap();
                    assert_eq!(n.to_string(), $expected);
                }
            };
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_n0: "-0" => "0");
        impl_case!(case_plus7: "+7" => "7");
        impl_case!(case_n35: "-35" => "-35");
        impl_case!(case_strips_leading_zeros: "0000123" => "123");
        impl_case!(case_single_limb_max: "9999999" => "9999999");
        impl_case!(case_radix_boundary: "10000000" => "10000000");
        // interior limbs keep their zero padding
        impl_case!(case_pad_interior_limb: "50000001" => "50000001");
        impl_case!(case_pad_zero_limb: "100000000000001" => "100000000000001");
        impl_case!(case_n_multi_limb: "-123456789012345678901234567890" => "-123456789012345678901234567890");

        #[test]
        fn zero_value_formats_as_single_zero() {
            assert_eq!(BigInt::zero().to_string(), "0");
            assert_eq!(BigInt::default().to_string(), "0");
        }
    }

    mod fmt_options {
        use super::*;

        #[test]
        fn width_and_sign_flags() {
            let n: BigInt = "123".parse().unwrap();

            assert_eq!(format!("{:>8}", n), "     123");
            assert_eq!(format!("{:+}", n), "+123");
            assert_eq!(format!("{:08}", n), "00000123");

            let m: BigInt = "-123".parse().unwrap();
            assert_eq!(format!("{}", m), "-123");
            assert_eq!(format!("{:08}", m), "-0000123");
        }
    }

    mod fmt_debug {
        use super::*;

        #[test]
        fn debug_wraps_display() {
            let n: BigInt = "-10000001".parse().unwrap();
            assert_eq!(format!("{:?}", n), "BigInt(\"-10000001\")");
        }
    }
}
