//! Implementation of comparison operations
//!
//! Equality is structural: canonical form guarantees two equal values
//! have identical sign and limb vectors, so PartialEq is derived on
//! the struct. Ordering compares sign first, then magnitude, flipping
//! the magnitude direction for negative values.

use crate::*;

use stdlib::cmp::Ordering;


impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Complete ordering implementation for BigInt
    ///
    /// # Example
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// let a = bigint::BigInt::from_str("-1").unwrap();
    /// let b = bigint::BigInt::from_str("1").unwrap();
    /// assert!(a < b);
    /// assert!(b > a);
    /// let c = bigint::BigInt::from_str("1").unwrap();
    /// assert!(b >= c);
    /// assert!(c >= b);
    /// let d = bigint::BigInt::from_str("10").unwrap();
    /// assert!(d > c);
    /// ```
    fn cmp(&self, other: &BigInt) -> Ordering {
        let scmp = self.sign.cmp(&other.sign);
        if scmp != Ordering::Equal {
            return scmp;
        }

        let mag_cmp = arithmetic::cmp_digit_slices(&self.digits, &other.digits);

        match self.sign {
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => mag_cmp,
            // larger magnitude means smaller value below zero
            Sign::Minus => mag_cmp.reverse(),
        }
    }
}
