//! Subtraction operator trait implementation
//!

use crate::*;
use crate::stdlib::ops::{Sub, SubAssign};


impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(mut self, rhs: BigInt) -> BigInt {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self -= rhs;
        self
    }
}

forward_ref_val_binop!(impl Sub for BigInt, sub);

impl<'a> Sub<&'a BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self.clone() - rhs
    }
}


impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        self.sub_assign(&rhs);
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        arithmetic::subtraction::subassign_bigints(self, rhs);
    }
}
