//! Signed arbitrary-precision integers.
//!
//! A [`BigInt`] is a [`Sign`] plus a canonical magnitude. Zero has no sign:
//! it compares, hashes and prints the same whichever sign it was built with.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use crate::error::BigIntError;
use crate::limbs::{Limb, LimbSeq, LimbVec, LIMB_BITS};
use crate::magnitude;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// Sign of a product or quotient: equal signs give `Positive`.
    #[inline]
    pub fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Limbs are stored in little-endian order (limbs[0] is least significant).
#[derive(Clone)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) limbs: LimbVec,
}

// ============================================================================
// Construction and accessors
// ============================================================================

impl BigInt {
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert!(BigInt::zero().is_zero());
    /// assert_eq!(BigInt::zero().to_string(), "0");
    /// ```
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            limbs: LimbVec::new(),
        }
    }

    pub fn one() -> Self {
        Self::from_parts(Sign::Positive, LimbVec::from_slice(&[1]))
    }

    /// Build from a sign and little-endian limbs. The limbs are trimmed and a
    /// zero result always carries `Sign::Positive`.
    pub fn from_parts(sign: Sign, mut limbs: LimbVec) -> Self {
        magnitude::trim(&mut limbs);
        let sign = if limbs.is_empty() { Sign::Positive } else { sign };
        Self { sign, limbs }
    }

    pub fn from_limbs(sign: Sign, limbs: &[Limb]) -> Self {
        Self::from_parts(sign, LimbVec::from_slice(limbs))
    }

    pub(crate) fn from_u128(sign: Sign, mut value: u128) -> Self {
        let mut limbs = LimbVec::new();
        while value != 0 {
            limbs.append(value as Limb);
            value >>= LIMB_BITS;
        }
        Self::from_parts(sign, limbs)
    }

    /// Magnitude as a `u128`, if it has at most two limbs.
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        match magnitude::significant(self.limbs()) {
            [] => Some(0),
            [lo] => Some(*lo as u128),
            [lo, hi] => Some(*lo as u128 | (*hi as u128) << LIMB_BITS),
            _ => None,
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Positive
        } else {
            self.sign
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(self.limbs())
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.sign == Sign::Positive
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Negative {
            -1
        } else {
            1
        }
    }

    /// Magnitude limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        self.limbs.as_limbs()
    }

    pub fn magnitude(&self) -> &LimbVec {
        &self.limbs
    }

    pub fn bit_len(&self) -> usize {
        magnitude::bit_len(self.limbs())
    }

    pub fn abs(&self) -> BigInt {
        Self::from_parts(Sign::Positive, self.limbs.clone())
    }

    /// Flip the sign in place. Zero stays zero.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }

    /// `self += 1`
    pub fn inc(&mut self) {
        *self = self.add_ref(&BigInt::one());
    }

    /// `self -= 1`
    pub fn dec(&mut self) {
        *self = self.sub_ref(&BigInt::one());
    }
}

// ============================================================================
// Signed arithmetic
// ============================================================================

impl BigInt {
    pub(crate) fn add_ref(&self, other: &BigInt) -> BigInt {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign == other.sign {
            return Self::from_parts(self.sign, magnitude::add(self.limbs(), other.limbs()));
        }
        match magnitude::compare(self.limbs(), other.limbs()) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                Self::from_parts(self.sign, magnitude::sub(self.limbs(), other.limbs()))
            }
            Ordering::Less => {
                Self::from_parts(other.sign, magnitude::sub(other.limbs(), self.limbs()))
            }
        }
    }

    pub(crate) fn sub_ref(&self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -other;
        }
        if self.sign != other.sign {
            return Self::from_parts(self.sign, magnitude::add(self.limbs(), other.limbs()));
        }
        match magnitude::compare(self.limbs(), other.limbs()) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                Self::from_parts(self.sign, magnitude::sub(self.limbs(), other.limbs()))
            }
            Ordering::Less => {
                Self::from_parts(-self.sign, magnitude::sub(other.limbs(), self.limbs()))
            }
        }
    }

    pub(crate) fn mul_ref(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let sign = self.sign.product(other.sign);
        if magnitude::is_one(self.limbs()) {
            return Self::from_parts(sign, other.limbs.clone());
        }
        if magnitude::is_one(other.limbs()) {
            return Self::from_parts(sign, self.limbs.clone());
        }
        Self::from_parts(sign, magnitude::mul(self.limbs(), other.limbs()))
    }

    pub(crate) fn shl_bits(&self, bits: usize) -> BigInt {
        Self::from_parts(self.sign, magnitude::shl(self.limbs(), bits))
    }

    /// Shifts the magnitude, so negative values round toward zero.
    pub(crate) fn shr_bits(&self, bits: usize) -> BigInt {
        Self::from_parts(self.sign, magnitude::shr(self.limbs(), bits))
    }

    /// Truncating division: returns `(q, r)` with `self == q * divisor + r`,
    /// `|r| < |divisor|`, and `r` carrying the dividend's sign.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let (q, r) = BigInt::from(-17).div_rem(&BigInt::from(5)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-2)));
    /// assert_eq!(
    ///     BigInt::from(1).div_rem(&BigInt::zero()),
    ///     Err(BigIntError::DivisionByZero)
    /// );
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        let (q, r) = magnitude::divmod(self.limbs(), divisor.limbs())?;
        Ok((
            Self::from_parts(self.sign.product(divisor.sign), q),
            Self::from_parts(self.sign, r),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(_, r)| r)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => magnitude::compare(self.limbs(), other.limbs()),
            (Sign::Negative, Sign::Negative) => magnitude::compare(other.limbs(), self.limbs()),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        magnitude::significant(self.limbs()).hash(state);
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_u128(Sign::Positive, value as u128)
            }
        })*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::from_u128(sign, value.unsigned_abs() as u128)
            }
        })*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_try_from_unsigned {
    ($($t:ty),*) => {
        $(impl TryFrom<&BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                let overflow = || BigIntError::Overflow { target: stringify!($t) };
                if value.is_negative() {
                    return Err(overflow());
                }
                let mag = value.magnitude_u128().ok_or_else(overflow)?;
                <$t>::try_from(mag).map_err(|_| overflow())
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        })*
    };
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(impl TryFrom<&BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                let overflow = || BigIntError::Overflow { target: stringify!($t) };
                let mag = value.magnitude_u128().ok_or_else(overflow)?;
                if value.is_negative() {
                    if mag > <$t>::MIN.unsigned_abs() as u128 {
                        return Err(overflow());
                    }
                    // mag == |MIN| wraps to MIN, which negates to itself.
                    Ok((mag as $t).wrapping_neg())
                } else {
                    <$t>::try_from(mag).map_err(|_| overflow())
                }
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        })*
    };
}

impl_try_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

// ============================================================================
// Tests
// ============================================================================
