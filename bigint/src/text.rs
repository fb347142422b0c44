//! Decimal text conversion.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::BigIntError;
use crate::int::{BigInt, Sign};
use crate::limbs::{Limb, LimbVec};
use crate::magnitude;

const RADIX: Limb = 10;

/// Upper bound on limbs needed for `digits` decimal digits
/// (log2(10) < 3.322 bits per digit).
fn limbs_for_digits(digits: usize) -> usize {
    digits.saturating_mul(3322) / 1000 / 64 + 1
}

impl BigInt {
    /// Parse a decimal integer with an optional leading `+` or `-`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let v = BigInt::parse("-00120").unwrap();
    /// assert_eq!(v, BigInt::from(-120));
    /// assert!(BigInt::parse("12a").is_err());
    /// assert!(BigInt::parse("-").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<BigInt, BigIntError> {
        let (sign, digits) = match text.as_bytes().first() {
            None => return Err(BigIntError::invalid_format(text, "empty input")),
            Some(b'-') => (Sign::Negative, &text[1..]),
            Some(b'+') => (Sign::Positive, &text[1..]),
            Some(_) => (Sign::Positive, text),
        };
        if digits.is_empty() {
            return Err(BigIntError::invalid_format(text, "no digits"));
        }
        if let Some((pos, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            let offset = text.len() - digits.len() + pos;
            debug!("rejecting integer literal {text:?}: {ch:?} at byte {offset}");
            return Err(BigIntError::invalid_format(
                text,
                format!("unexpected character {ch:?} at byte {offset}"),
            ));
        }

        let mut limbs = LimbVec::new();
        limbs.try_reserve(limbs_for_digits(digits.len()))?;
        for b in digits.bytes() {
            magnitude::mul_add_limb(&mut limbs, RADIX, (b - b'0') as Limb);
        }
        Ok(BigInt::from_parts(sign, limbs))
    }

    /// Decimal digits of the magnitude, without sign.
    fn magnitude_digits(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut limbs = self.limbs.clone();
        let mut digits = Vec::new();
        // div_limb_in_place trims, so the buffer empties once it reaches zero.
        while !limbs.is_empty() {
            let rem = magnitude::div_limb_in_place(&mut limbs, RADIX);
            digits.push(b'0' + rem as u8);
        }
        digits.iter().rev().map(|&d| char::from(d)).collect()
    }

    /// Format as a decimal string; negative values get a leading `-`, zero
    /// never does.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-42).to_decimal_string(), "-42");
    /// assert_eq!(BigInt::parse("-0").unwrap().to_decimal_string(), "0");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let digits = self.magnitude_digits();
        if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_decimal_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
