//! Implement math operations: Add,Sub, etc
//!
//! Mixed-type operators between BigInt and the primitive integers,
//! in both directions, by promoting the primitive.

use crate::*;
use crate::stdlib::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};


macro_rules! impl_add_for_primitive {
    ($t:ty) => {
        impl_add_for_primitive!(IMPL:ADD $t);
        impl_add_for_primitive!(IMPL:ADD-ASSIGN &$t);
        impl_add_for_primitive!(IMPL:ADD-ASSIGN $t);
        impl_add_for_primitive!(IMPL:ADD &$t);
    };
    (IMPL:ADD $t:ty) => {
        impl Add<$t> for BigInt {
            type Output = BigInt;

            fn add(mut self, rhs: $t) -> BigInt {
                self += rhs;
                self
            }
        }

        impl Add<$t> for &BigInt {
            type Output = BigInt;

            fn add(self, rhs: $t) -> BigInt {
                self.clone() + rhs
            }
        }

        forward_communative_binop!(impl Add<BigInt>::add for $t);
        forward_communative_binop!(impl Add<&BigInt>::add for $t);
    };
    (IMPL:ADD-ASSIGN &$t:ty) => {
        // special case for the ref types
        impl AddAssign<&$t> for BigInt {
            fn add_assign(&mut self, rhs: &$t) {
                *self += *rhs;
            }
        }
    };
    (IMPL:ADD-ASSIGN $t:ty) => {
        impl AddAssign<$t> for BigInt {
            fn add_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    *self += BigInt::from(rhs);
                }
            }
        }
    };
}

impl_add_for_primitive!(u8);
impl_add_for_primitive!(u16);
impl_add_for_primitive!(u32);
impl_add_for_primitive!(u64);
impl_add_for_primitive!(u128);
impl_add_for_primitive!(i8);
impl_add_for_primitive!(i16);
impl_add_for_primitive!(i32);
impl_add_for_primitive!(i64);
impl_add_for_primitive!(i128);


macro_rules! impl_sub_for_primitive {
    ($t:ty) => {
        impl_sub_for_primitive!(IMPL:SUB $t);
        impl_sub_for_primitive!(IMPL:SUB-ASSIGN &$t);
        impl_sub_for_primitive!(IMPL:SUB-ASSIGN $t);
        impl_sub_for_primitive!(IMPL:SUB &$t);
    };
    (IMPL:SUB $t:ty) => {
        impl Sub<$t> for BigInt {
            type Output = BigInt;

            fn sub(mut self, rhs: $t) -> BigInt {
                self -= rhs;
                self
            }
        }

        impl Sub<$t> for &BigInt {
            type Output = BigInt;

            fn sub(self, rhs: $t) -> BigInt {
                self.clone() - rhs
            }
        }

        impl Sub<BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: BigInt) -> BigInt {
                -(rhs - self)
            }
        }

        impl Sub<&BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: &BigInt) -> BigInt {
                -(rhs - self)
            }
        }
    };
    (IMPL:SUB-ASSIGN &$t:ty) => {
        impl SubAssign<&$t> for BigInt {
            fn sub_assign(&mut self, rhs: &$t) {
                *self -= *rhs;
            }
        }
    };
    (IMPL:SUB-ASSIGN $t:ty) => {
        impl SubAssign<$t> for BigInt {
            fn sub_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    *self -= BigInt::from(rhs);
                }
            }
        }
    };
}

impl_sub_for_primitive!(u8);
impl_sub_for_primitive!(u16);
impl_sub_for_primitive!(u32);
impl_sub_for_primitive!(u64);
impl_sub_for_primitive!(u128);
impl_sub_for_primitive!(i8);
impl_sub_for_primitive!(i16);
impl_sub_for_primitive!(i32);
impl_sub_for_primitive!(i64);
impl_sub_for_primitive!(i128);


macro_rules! impl_mul_for_primitive {
    ($t:ty) => {
        impl_mul_for_primitive!(IMPL:MUL $t);
        impl_mul_for_primitive!(IMPL:MUL-ASSIGN &$t);
        impl_mul_for_primitive!(IMPL:MUL-ASSIGN $t);
        impl_mul_for_primitive!(IMPL:MUL &$t);
    };
    (IMPL:MUL $t:ty) => {
        impl Mul<$t> for BigInt {
            type Output = BigInt;

            fn mul(mut self, rhs: $t) -> BigInt {
                self *= rhs;
                self
            }
        }

        impl Mul<$t> for &BigInt {
            type Output = BigInt;

            fn mul(self, rhs: $t) -> BigInt {
                self.clone() * rhs
            }
        }

        forward_communative_binop!(impl Mul<BigInt>::mul for $t);
        forward_communative_binop!(impl Mul<&BigInt>::mul for $t);
    };
    (IMPL:MUL-ASSIGN &$t:ty) => {
        impl MulAssign<&$t> for BigInt {
            fn mul_assign(&mut self, rhs: &$t) {
                *self *= *rhs;
            }
        }
    };
    (IMPL:MUL-ASSIGN $t:ty) => {
        impl MulAssign<$t> for BigInt {
            fn mul_assign(&mut self, rhs: $t) {
                *self *= BigInt::from(rhs);
            }
        }
    };
}

impl_mul_for_primitive!(u8);
impl_mul_for_primitive!(u16);
impl_mul_for_primitive!(u32);
impl_mul_for_primitive!(u64);
impl_mul_for_primitive!(u128);
impl_mul_for_primitive!(i8);
impl_mul_for_primitive!(i16);
impl_mul_for_primitive!(i32);
impl_mul_for_primitive!(i64);
impl_mul_for_primitive!(i128);


macro_rules! impl_div_for_primitive {
    ($t:ty) => {
        impl Div<$t> for BigInt {
            type Output = BigInt;

            fn div(self, denom: $t) -> BigInt {
                self / BigInt::from(denom)
            }
        }

        impl Div<$t> for &BigInt {
            type Output = BigInt;

            fn div(self, denom: $t) -> BigInt {
                self / &BigInt::from(denom)
            }
        }

        impl Div<BigInt> for $t {
            type Output = BigInt;

            fn div(self, denom: BigInt) -> BigInt {
                BigInt::from(self) / denom
            }
        }

        impl Div<&BigInt> for $t {
            type Output = BigInt;

            fn div(self, denom: &BigInt) -> BigInt {
                BigInt::from(self) / denom
            }
        }

        impl DivAssign<$t> for BigInt {
            fn div_assign(&mut self, denom: $t) {
                *self = &*self / &BigInt::from(denom);
            }
        }
    };
}

impl_div_for_primitive!(u8);
impl_div_for_primitive!(u16);
impl_div_for_primitive!(u32);
impl_div_for_primitive!(u64);
impl_div_for_primitive!(u128);
impl_div_for_primitive!(i8);
impl_div_for_primitive!(i16);
impl_div_for_primitive!(i32);
impl_div_for_primitive!(i64);
impl_div_for_primitive!(i128);


macro_rules! impl_rem_for_primitive {
    ($t:ty) => {
        impl Rem<$t> for BigInt {
            type Output = BigInt;

            fn rem(self, denom: $t) -> BigInt {
                self % BigInt::from(denom)
            }
        }

        impl Rem<$t> for &BigInt {
            type Output = BigInt;

            fn rem(self, denom: $t) -> BigInt {
                self % &BigInt::from(denom)
            }
        }

        impl Rem<BigInt> for $t {
            type Output = BigInt;

            fn rem(self, denom: BigInt) -> BigInt {
                BigInt::from(self) % denom
            }
        }

        impl Rem<&BigInt> for $t {
            type Output = BigInt;

            fn rem(self, denom: &BigInt) -> BigInt {
                BigInt::from(self) % denom
            }
        }

        impl RemAssign<$t> for BigInt {
            fn rem_assign(&mut self, denom: $t) {
                *self = &*self % &BigInt::from(denom);
            }
        }
    };
}

impl_rem_for_primitive!(u8);
impl_rem_for_primitive!(u16);
impl_rem_for_primitive!(u32);
impl_rem_for_primitive!(u64);
impl_rem_for_primitive!(u128);
impl_rem_for_primitive!(i8);
impl_rem_for_primitive!(i16);
impl_rem_for_primitive!(i32);
impl_rem_for_primitive!(i64);
impl_rem_for_primitive!(i128);


impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_mixed_cases {
        ( $( $ttype:ident ),+ ) => {
            $( paste! {
                #[test]
                fn [< mixed_ops_with_ $ttype >]() {
                    let seven = BigInt::from(7);

                    assert_eq!(seven.clone() + 3 as $ttype, BigInt::from(10));
                    assert_eq!(3 as $ttype + seven.clone(), BigInt::from(10));
                    assert_eq!(&seven + 3 as $ttype, BigInt::from(10));

                    assert_eq!(seven.clone() - 3 as $ttype, BigInt::from(4));
                    assert_eq!(3 as $ttype - seven.clone(), BigInt::from(-4));

                    assert_eq!(seven.clone() * 3 as $ttype, BigInt::from(21));
                    assert_eq!(3 as $ttype * seven.clone(), BigInt::from(21));

                    assert_eq!(seven.clone() / 2 as $ttype, BigInt::from(3));
                    assert_eq!(seven.clone() % 2 as $ttype, BigInt::from(1));

                    let mut n = seven.clone();
                    n += 1 as $ttype;
                    n -= 2 as $ttype;
                    n *= 3 as $ttype;
                    assert_eq!(n, BigInt::from(18));

                    n /= 5 as $ttype;
                    assert_eq!(n, BigInt::from(3));

                    n %= 2 as $ttype;
                    assert_eq!(n, BigInt::from(1));
                }
            } )*
        };
    }

    impl_mixed_cases!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

    #[test]
    fn negative_primitive_operands() {
        let five = BigInt::from(5);

        assert_eq!(five.clone() + -8i32, BigInt::from(-3));
        assert_eq!(five.clone() - -8i32, BigInt::from(13));
        assert_eq!(five.clone() * -8i32, BigInt::from(-40));
        assert_eq!(-8i32 / five.clone(), BigInt::from(-1));
        assert_eq!(-8i32 % five, BigInt::from(-3));
    }

    #[test]
    fn negation() {
        let n = BigInt::from(123);
        assert_eq!(-&n, BigInt::from(-123));
        assert_eq!(-(-&n), n);
        assert_eq!(-BigInt::zero(), BigInt::zero());
    }
}
