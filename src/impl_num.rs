//! Code for num_traits
//!

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub};
use num_traits::{FromPrimitive, Num, ToPrimitive, Zero};

use crate::{BigInt, ParseBigIntError, Sign};
use crate::bigdigit::RADIX;
use crate::stdlib::string::String;


impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a BigInt.
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if radix != 10 {
            return Err(ParseBigIntError::Other(String::from(
                "The radix for bigint MUST be 10",
            )));
        }

        crate::parsing::parse_decimal_str(s)
    }
}


impl BigInt {
    /// Magnitude folded into a u64, or None on overflow
    fn magnitude_to_u64(&self) -> Option<u64> {
        let mut acc: u64 = 0;
        for &digit in self.digits.iter().rev() {
            acc = acc
                .checked_mul(RADIX as u64)?
                .checked_add(digit as u64)?;
        }
        Some(acc)
    }

    /// Magnitude folded into a u128, or None on overflow
    fn magnitude_to_u128(&self) -> Option<u128> {
        let mut acc: u128 = 0;
        for &digit in self.digits.iter().rev() {
            acc = acc
                .checked_mul(RADIX as u128)?
                .checked_add(digit as u128)?;
        }
        Some(acc)
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        match self.sign {
            Sign::NoSign => Some(0),
            Sign::Plus => self
                .magnitude_to_u64()
                .filter(|&n| n <= i64::MAX as u64)
                .map(|n| n as i64),
            Sign::Minus => {
                let mag = self.magnitude_to_u64()?;
                if mag <= i64::MAX as u64 {
                    Some(-(mag as i64))
                } else if mag == i64::MAX as u64 + 1 {
                    Some(i64::MIN)
                } else {
                    None
                }
            }
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match self.sign {
            Sign::NoSign => Some(0),
            Sign::Plus => self
                .magnitude_to_u128()
                .filter(|&n| n <= i128::MAX as u128)
                .map(|n| n as i128),
            Sign::Minus => {
                let mag = self.magnitude_to_u128()?;
                if mag <= i128::MAX as u128 {
                    Some(-(mag as i128))
                } else if mag == i128::MAX as u128 + 1 {
                    Some(i128::MIN)
                } else {
                    None
                }
            }
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.sign {
            Sign::NoSign => Some(0),
            Sign::Plus => self.magnitude_to_u64(),
            Sign::Minus => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::NoSign => Some(0),
            Sign::Plus => self.magnitude_to_u128(),
            Sign::Minus => None,
        }
    }

    /// Nearest f64, losing precision past the 53-bit mantissa;
    /// enormous values round off to infinity
    fn to_f64(&self) -> Option<f64> {
        let mut mag = 0f64;
        for &digit in self.digits.iter().rev() {
            mag = mag * RADIX as f64 + digit as f64;
        }

        match self.sign {
            Sign::Minus => Some(-mag),
            _ => Some(mag),
        }
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}


// arbitrary precision never overflows; only a zero divisor fails

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self + rhs)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self - rhs)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self * rhs)
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        BigInt::checked_div(self, rhs)
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, rhs: &BigInt) -> Option<BigInt> {
        BigInt::checked_rem(self, rhs)
    }
}
