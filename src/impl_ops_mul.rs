//! Multiplication operator trait implementation
//!

use crate::*;
use crate::stdlib::ops::{Mul, MulAssign};


impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(mut self, rhs: BigInt) -> BigInt {
        self *= &rhs;
        self
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(mut self, rhs: &BigInt) -> BigInt {
        self *= rhs;
        self
    }
}

forward_communative_binop!(impl Mul<BigInt>::mul for &BigInt);

impl<'a> Mul<&'a BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        self.clone() * rhs
    }
}


impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt) {
        self.mul_assign(&rhs);
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        arithmetic::multiplication::mulassign_bigints(self, rhs);
    }
}
