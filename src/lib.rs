// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary-precision signed integers
//!
//! `BigInt` stores any integer exactly, unbounded by machine-word
//! width at the cost of a heap-allocated digit vector. Values are kept
//! as a sign and a sequence of base-10<sup>7</sup> limbs, least
//! significant limb first, so decimal parsing and formatting map
//! directly onto the storage.
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers.
//!
//! Division follows the truncating convention of Rust's primitive
//! integers: the quotient is rounded toward zero and the remainder
//! takes the sign of the dividend, so `-7 / 2 == -3` and
//! `-7 % 2 == -1`.
//!
//! # Example
//!
//! ```
//! use bigint::BigInt;
//! use std::str::FromStr;
//!
//! let a = BigInt::from_str("123456789012345678901234567890").unwrap();
//! let b = BigInt::from(2);
//!
//! assert_eq!((&a * b).to_string(), "246913578024691357802469135780");
//! assert_eq!(a % BigInt::from(97), BigInt::from(52));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::ops::{Mul, Neg};
use self::stdlib::iter::{Product, Sum};
use self::stdlib::string::String;
use self::stdlib::vec::Vec;
use self::stdlib::fmt;

pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};


#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

// the limb type and its carry/borrow arithmetic
pub(crate) mod bigdigit;
use bigdigit::BigDigit;

// magnitude-level algorithms: carry loops, schoolbook product, long division
pub(crate) mod arithmetic;

// From<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialOrd & Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Display & Debug
mod impl_fmt;

mod impl_trait_from_str;

mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;


/// The sign of a `BigInt`: negative, zero, or positive
///
/// The derived ordering puts `Minus < NoSign < Plus`, which is the
/// first key of the total order on values.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate Sign value
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    /// Sign of the product of two values with these signs
    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (Sign::Plus, Sign::Plus) | (Sign::Minus, Sign::Minus) => Sign::Plus,
            (Sign::Plus, Sign::Minus) | (Sign::Minus, Sign::Plus) => Sign::Minus,
        }
    }
}


/// An arbitrary-precision signed integer type.
///
/// Canonical form: the zero value has `Sign::NoSign` and an empty limb
/// vector; every non-zero value has a non-zero most-significant limb.
/// All operations restore this form before returning.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    // least-significant limb first, each limb in [0, 10^7)
    digits: Vec<BigDigit>,
}

impl BigInt {
    /// Creates and initializes a `BigInt` from a sign and a vector of
    /// limbs, least-significant limb first, each in `[0, 10^7)`.
    ///
    /// # Panics
    ///
    /// Panics if a limb is out of range, or if `Sign::NoSign` is paired
    /// with a non-zero magnitude.
    #[inline]
    pub fn new(sign: Sign, digits: Vec<u32>) -> BigInt {
        assert!(
            digits.iter().all(|&d| d < bigdigit::RADIX),
            "limb out of range for radix 10^7"
        );
        assert!(
            sign != Sign::NoSign || digits.iter().all(|&d| d == 0),
            "NoSign BigInt with non-zero magnitude"
        );
        BigInt::from_limbs(sign, digits)
    }

    /// Sign of the value
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Absolute value
    #[inline]
    pub fn abs(&self) -> BigInt {
        match self.sign {
            Sign::Plus | Sign::NoSign => self.clone(),
            Sign::Minus => BigInt {
                sign: Sign::Plus,
                digits: self.digits.clone(),
            },
        }
    }

    /// Increase the value by one, in place
    #[inline]
    pub fn inc(&mut self) {
        *self += 1u32;
    }

    /// Decrease the value by one, in place
    #[inline]
    pub fn dec(&mut self) {
        *self -= 1u32;
    }

    /// Quotient and remainder of truncating division, in one pass
    ///
    /// The remainder is zero or takes the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[inline]
    pub fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(other) {
            Some(qr) => qr,
            None => panic!("Division by zero"),
        }
    }

    /// Quotient and remainder of truncating division, or None if
    /// `other` is zero
    #[inline]
    pub fn checked_div_rem(&self, other: &BigInt) -> Option<(BigInt, BigInt)> {
        arithmetic::division::checked_div_rem(self, other)
    }

    /// Truncated quotient, or None if `other` is zero
    #[inline]
    pub fn checked_div(&self, other: &BigInt) -> Option<BigInt> {
        self.checked_div_rem(other).map(|(q, _)| q)
    }

    /// Division remainder, or None if `other` is zero
    #[inline]
    pub fn checked_rem(&self, other: &BigInt) -> Option<BigInt> {
        self.checked_div_rem(other).map(|(_, r)| r)
    }

    /// Build a value from a (possibly denormalized) limb vector
    #[inline]
    pub(crate) fn from_limbs(sign: Sign, digits: Vec<BigDigit>) -> BigInt {
        let mut result = BigInt {
            sign: sign,
            digits: digits,
        };
        result.trim();
        result
    }

    /// Restore canonical form: pop most-significant zero limbs, and
    /// force the zero sign when no limbs remain
    pub(crate) fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.sign = Sign::NoSign;
        }
    }
}


/// Reason a decimal string failed to parse as a BigInt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBigIntError {
    Empty,
    InvalidDigit,
    Other(String),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            Empty => f.write_str("cannot parse integer from empty string"),
            InvalidDigit => f.write_str("invalid digit found in string"),
            Other(ref reason) => f.write_str(reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigIntError {
    fn description(&self) -> &str {
        "failed to parse bigint"
    }
}


impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            sign: Sign::NoSign,
            digits: Vec::new(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt {
            sign: Sign::Plus,
            digits: vec![1],
        }
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        BigInt::abs(self)
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        match self.sign {
            Sign::Plus => One::one(),
            Sign::NoSign => Zero::zero(),
            Sign::Minus => -BigInt::one(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }
}

impl Sum for BigInt {
    #[inline]
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    #[inline]
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl Product for BigInt {
    #[inline]
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(One::one(), |a, b| a * b)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    #[inline]
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(One::one(), |a, b| a * b)
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod bigint_tests {
    use super::*;

    use stdlib::DefaultHasher;
    use stdlib::hash::{Hash, Hasher};
    use stdlib::string::ToString;

    include!("lib.tests.rs");
}

#[cfg(all(test, property_tests))]
extern crate proptest;
