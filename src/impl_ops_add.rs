//! Addition operator trait implementation
//!

use crate::*;
use crate::stdlib::ops::{Add, AddAssign};


impl Add<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: BigInt) -> BigInt {
        self += &rhs;
        self
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: &BigInt) -> BigInt {
        self += rhs;
        self
    }
}

forward_communative_binop!(impl Add<BigInt>::add for &BigInt);

impl<'a> Add<&'a BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        // clone the operand with more limbs so the sum grows in place
        if self.digits.len() >= rhs.digits.len() {
            self.clone() + rhs
        } else {
            rhs.clone() + self
        }
    }
}


impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        self.add_assign(&rhs);
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        arithmetic::addition::addassign_bigints(self, rhs);
    }
}
