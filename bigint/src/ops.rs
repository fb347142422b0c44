//! `std::ops` and comparison impls for [`BigInt`].
//!
//! Every arithmetic operator is available for owned and borrowed operands
//! and for native integers on either side. `/` and `%` panic on a zero
//! divisor like the native integer types; use [`BigInt::div_rem`] to get a
//! `Result` instead.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::int::BigInt;

impl BigInt {
    fn div_or_panic(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        match self.div_rem(divisor) {
            Ok(qr) => qr,
            Err(e) => panic!("{e}"),
        }
    }

    fn div_ref(&self, divisor: &BigInt) -> BigInt {
        self.div_or_panic(divisor).0
    }

    fn rem_ref(&self, divisor: &BigInt) -> BigInt {
        self.div_or_panic(divisor).1
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

macro_rules! impl_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $inner:ident) => {
        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'b BigInt) -> BigInt {
                self.$inner(other)
            }
        }

        impl<'b> $imp<&'b BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'b BigInt) -> BigInt {
                self.$inner(other)
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                self.$inner(&other)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                self.$inner(&other)
            }
        }

        impl<'b> $assign_imp<&'b BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, other: &'b BigInt) {
                *self = self.$inner(other);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, other: BigInt) {
                *self = self.$inner(&other);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add_ref);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub_ref);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul_ref);
impl_binop!(Div, div, DivAssign, div_assign, div_ref);
impl_binop!(Rem, rem, RemAssign, rem_assign, rem_ref);

// Native integers are widened to a BigInt first; limbs are unsigned, so the
// sign goes through the usual sign dispatch.
macro_rules! impl_native_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $inner:ident; $($t:ty),*) => {
        $(impl $imp<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: $t) -> BigInt {
                self.$inner(&BigInt::from(other))
            }
        }

        impl<'a> $imp<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: $t) -> BigInt {
                self.$inner(&BigInt::from(other))
            }
        }

        impl $imp<BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                BigInt::from(self).$inner(&other)
            }
        }

        impl<'b> $imp<&'b BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'b BigInt) -> BigInt {
                BigInt::from(self).$inner(other)
            }
        }

        impl $assign_imp<$t> for BigInt {
            #[inline]
            fn $assign_method(&mut self, other: $t) {
                *self = self.$inner(&BigInt::from(other));
            }
        })*
    };
}

macro_rules! impl_native_ops {
    ($($t:ty),*) => {
        impl_native_binop!(Add, add, AddAssign, add_assign, add_ref; $($t),*);
        impl_native_binop!(Sub, sub, SubAssign, sub_assign, sub_ref; $($t),*);
        impl_native_binop!(Mul, mul, MulAssign, mul_assign, mul_ref; $($t),*);
        impl_native_binop!(Div, div, DivAssign, div_assign, div_ref; $($t),*);
        impl_native_binop!(Rem, rem, RemAssign, rem_assign, rem_ref; $($t),*);

        $(impl PartialEq<$t> for BigInt {
            fn eq(&self, other: &$t) -> bool {
                *self == BigInt::from(*other)
            }
        }

        impl PartialOrd<$t> for BigInt {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&BigInt::from(*other)))
            }
        })*
    };
}

impl_native_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_shift {
    ($($t:ty),*) => {
        $(impl Shl<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, bits: $t) -> BigInt {
                self.shl_bits(usize::try_from(bits).unwrap_or(usize::MAX))
            }
        }

        impl<'a> Shl<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, bits: $t) -> BigInt {
                self.shl_bits(usize::try_from(bits).unwrap_or(usize::MAX))
            }
        }

        impl ShlAssign<$t> for BigInt {
            #[inline]
            fn shl_assign(&mut self, bits: $t) {
                *self = self.shl_bits(usize::try_from(bits).unwrap_or(usize::MAX));
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, bits: $t) -> BigInt {
                self.shr_bits(usize::try_from(bits).unwrap_or(usize::MAX))
            }
        }

        impl<'a> Shr<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, bits: $t) -> BigInt {
                self.shr_bits(usize::try_from(bits).unwrap_or(usize::MAX))
            }
        }

        impl ShrAssign<$t> for BigInt {
            #[inline]
            fn shr_assign(&mut self, bits: $t) {
                *self = self.shr_bits(usize::try_from(bits).unwrap_or(usize::MAX));
            }
        })*
    };
}

impl_shift!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_and_borrowed_agree() {
        let a = BigInt::from(40u8);
        let b = BigInt::from(2u8);
        let expected = BigInt::from(42u8);
        assert_eq!(&a + &b, expected);
        assert_eq!(a.clone() + &b, expected);
        assert_eq!(&a + b.clone(), expected);
        assert_eq!(a + b, expected);
    }

    #[test]
    fn test_native_on_both_sides() {
        let a = BigInt::from(10u32);
        assert_eq!(&a - 15i64, BigInt::from(-5i8));
        assert_eq!(15i64 - &a, BigInt::from(5i8));
        assert_eq!(3u8 * a.clone(), 30u32);
        assert_eq!(a.clone() / 3u64, 3i32);
        assert_eq!(a % -3i32, 1i32);
    }

    #[test]
    fn test_compound_assign() {
        let mut v = BigInt::from(7u8);
        v += 3u8;
        v *= BigInt::from(-2i8);
        v -= &BigInt::from(1u8);
        assert_eq!(v, -21i32);
        v /= 4i32;
        assert_eq!(v, -5i32);
        v %= 3u8;
        assert_eq!(v, -2i32);
        v <<= 3u32;
        assert_eq!(v, -16i32);
        v >>= 2usize;
        assert_eq!(v, -4i32);
    }

    #[test]
    fn test_native_comparisons() {
        let v = BigInt::from(-3i32);
        assert!(v < 0i32);
        assert!(v > -4i64);
        assert!(v == -3i8);
        assert!(v != 3u8);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = BigInt::from(1u8) / BigInt::zero();
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_rem_by_native_zero_panics() {
        let _ = BigInt::from(1u8) % 0u32;
    }
}
