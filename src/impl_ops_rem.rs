//! Implement remainder
//!
//! The remainder is zero or takes the sign of the dividend, matching
//! truncating division: `(a / b) * b + (a % b) == a`.

use crate::*;
use crate::stdlib::ops::{Rem, RemAssign};


impl Rem<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: BigInt) -> BigInt {
        &self % &other
    }
}

impl<'a> Rem<&'a BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        &self % other
    }
}

forward_ref_val_binop!(impl Rem for BigInt, rem);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        match self.checked_div_rem(other) {
            Some((_, remainder)) => remainder,
            None => panic!("Division by zero"),
        }
    }
}


impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: BigInt) {
        self.rem_assign(&other);
    }
}

impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}
