//! Unsigned magnitude arithmetic over limb sequences.
//!
//! Inputs may carry high-order zero limbs; every returned [`LimbVec`] is
//! canonical (no high-order zero limb, zero is empty).

use std::cmp::Ordering;

use log::trace;

use crate::error::BigIntError;
use crate::limbs::{Limb, LimbSeq, LimbVec, LIMB_BITS};

const HALF_BITS: u32 = LIMB_BITS / 2;
const LO_MASK: Limb = (1 << HALF_BITS) - 1;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry as Limb);
    (sum, c1 | c2)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow as Limb);
    (diff, b1 | b2)
}

/// Full product of two limbs as (lo, hi), built from four half-limb products
/// so no intermediate exceeds one limb.
#[inline(always)]
pub(crate) const fn widening_mul(a: Limb, b: Limb) -> (Limb, Limb) {
    let (a_lo, a_hi) = (a & LO_MASK, a >> HALF_BITS);
    let (b_lo, b_hi) = (b & LO_MASK, b >> HALF_BITS);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1, so this cannot wrap.
    let cross = (ll >> HALF_BITS) + (lh & LO_MASK) + hl;
    let lo = (cross << HALF_BITS) | (ll & LO_MASK);
    let hi = hh + (lh >> HALF_BITS) + (cross >> HALF_BITS);
    (lo, hi)
}

/// `a` without its high-order zero limbs.
#[inline]
pub fn significant(a: &[Limb]) -> &[Limb] {
    let len = a.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1);
    &a[..len]
}

/// Drop high-order zero limbs in place.
pub fn trim<S: LimbSeq>(s: &mut S) {
    let mut len = s.length();
    while len > 0 && s.get(len - 1) == 0 {
        len -= 1;
    }
    s.truncate(len);
}

fn canonical(mut limbs: LimbVec) -> LimbVec {
    trim(&mut limbs);
    limbs
}

// ============================================================================
// Predicates and comparison
// ============================================================================

/// True for the empty sequence and for any run of zero limbs.
#[inline]
pub fn is_zero(a: &[Limb]) -> bool {
    a.iter().all(|&l| l == 0)
}

#[inline]
pub fn is_one(a: &[Limb]) -> bool {
    significant(a) == [1]
}

/// Number of significant bits; zero has none.
pub fn bit_len(a: &[Limb]) -> usize {
    match significant(a).split_last() {
        None => 0,
        Some((top, rest)) => {
            rest.len() * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize
        }
    }
}

/// Bit `i`, counting from the least significant; bits past the end are 0.
#[inline]
pub fn bit(a: &[Limb], i: usize) -> bool {
    let limb = i / LIMB_BITS as usize;
    limb < a.len() && (a[limb] >> (i % LIMB_BITS as usize)) & 1 == 1
}

/// Compare magnitudes: longer wins, then limbs from most significant down.
pub fn compare(a: &[Limb], b: &[Limb]) -> Ordering {
    let (a, b) = (significant(a), significant(b));
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

// ============================================================================
// Addition and subtraction
// ============================================================================

/// a + b
pub fn add(a: &[Limb], b: &[Limb]) -> LimbVec {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = LimbVec::with_capacity(long.len() + 1);
    let mut carry = false;
    for (&x, &y) in long.iter().zip(short) {
        let (sum, c) = adc(x, y, carry);
        result.append(sum);
        carry = c;
    }
    for &x in &long[short.len()..] {
        let (sum, c) = adc(x, 0, carry);
        result.append(sum);
        carry = c;
    }
    if carry {
        result.append(1);
    }
    canonical(result)
}

/// a -= b in place, returning the borrow out of the top limb.
///
/// `b` must have no more significant limbs than `a` has limbs.
pub fn sub_assign<S: LimbSeq>(a: &mut S, b: &[Limb]) -> bool {
    let b = significant(b);
    debug_assert!(b.len() <= a.length(), "subtrahend longer than minuend");
    let mut borrow = false;
    for (i, &y) in b.iter().enumerate() {
        let (diff, br) = sbb(a.get(i), y, borrow);
        a.set(i, diff);
        borrow = br;
    }
    // Ripple the borrow through the remaining limbs.
    let mut i = b.len();
    while borrow && i < a.length() {
        let (diff, br) = sbb(a.get(i), 0, true);
        a.set(i, diff);
        borrow = br;
        i += 1;
    }
    borrow
}

/// a - b. Requires a >= b.
pub fn sub(a: &[Limb], b: &[Limb]) -> LimbVec {
    debug_assert!(compare(a, b) != Ordering::Less, "magnitude underflow");
    let mut result = LimbVec::from_slice(significant(a));
    let borrow = sub_assign(&mut result, b);
    debug_assert!(!borrow);
    canonical(result)
}

// ============================================================================
// Multiplication
// ============================================================================

/// s = s * m + addend in place.
pub fn mul_add_limb<S: LimbSeq>(s: &mut S, m: Limb, addend: Limb) {
    let mut carry = addend;
    for i in 0..s.length() {
        let (lo, hi) = widening_mul(s.get(i), m);
        let (lo, c) = lo.overflowing_add(carry);
        s.set(i, lo);
        // hi <= 2^64 - 2, so the carry bit always fits.
        carry = hi + c as Limb;
    }
    if carry != 0 {
        s.append(carry);
    }
    trim(s);
}

/// a * m for a single limb m.
pub fn mul_limb(a: &[Limb], m: Limb) -> LimbVec {
    let a = significant(a);
    let mut result = LimbVec::with_capacity(a.len() + 1);
    for &limb in a {
        result.append(limb);
    }
    mul_add_limb(&mut result, m, 0);
    result
}

/// Schoolbook product: one partial product per limb of `b`, shifted into
/// place and summed.
pub fn mul(a: &[Limb], b: &[Limb]) -> LimbVec {
    let (a, b) = (significant(a), significant(b));
    let mut acc = LimbVec::with_capacity(a.len() + b.len());
    if a.is_empty() || b.is_empty() {
        return acc;
    }
    for (pos, &limb) in b.iter().enumerate() {
        if limb == 0 {
            continue;
        }
        let partial = mul_limb(a, limb);
        let shifted = shl_limbs(partial.as_limbs(), pos);
        acc = add(acc.as_limbs(), shifted.as_limbs());
    }
    acc
}

// ============================================================================
// Shifts
// ============================================================================

fn shl_limbs(a: &[Limb], limbs: usize) -> LimbVec {
    let a = significant(a);
    if a.is_empty() {
        return LimbVec::new();
    }
    let mut result = LimbVec::with_capacity(a.len() + limbs);
    for _ in 0..limbs {
        result.append(0);
    }
    for &limb in a {
        result.append(limb);
    }
    result
}

/// a << bits
pub fn shl(a: &[Limb], bits: usize) -> LimbVec {
    trace!("shl: {} limbs by {} bits", a.len(), bits);
    let limb_shift = bits / LIMB_BITS as usize;
    let bit_shift = (bits % LIMB_BITS as usize) as u32;
    let mut result = shl_limbs(a, limb_shift);
    if bit_shift == 0 || result.is_empty() {
        return result;
    }
    let mut carry = 0;
    for i in limb_shift..result.length() {
        let limb = result.get(i);
        result.set(i, (limb << bit_shift) | carry);
        carry = limb >> (LIMB_BITS - bit_shift);
    }
    if carry != 0 {
        result.append(carry);
    }
    canonical(result)
}

/// a >> bits
pub fn shr(a: &[Limb], bits: usize) -> LimbVec {
    let a = significant(a);
    trace!("shr: {} limbs by {} bits", a.len(), bits);
    let limb_shift = bits / LIMB_BITS as usize;
    let bit_shift = (bits % LIMB_BITS as usize) as u32;
    if limb_shift >= a.len() {
        return LimbVec::new();
    }
    let src = &a[limb_shift..];
    if bit_shift == 0 {
        return LimbVec::from_slice(src);
    }
    let mut result = LimbVec::with_capacity(src.len());
    for i in 0..src.len() {
        let high = src.get(i + 1).map_or(0, |&next| next << (LIMB_BITS - bit_shift));
        result.append((src[i] >> bit_shift) | high);
    }
    canonical(result)
}

/// s = (s << 1) | bit in place.
fn shl1_with_bit<S: LimbSeq>(s: &mut S, bit: bool) {
    let mut carry = bit as Limb;
    for i in 0..s.length() {
        let limb = s.get(i);
        s.set(i, (limb << 1) | carry);
        carry = limb >> (LIMB_BITS - 1);
    }
    if carry != 0 {
        s.append(carry);
    }
}

// ============================================================================
// Division
// ============================================================================

/// s /= d in place, returning the remainder. `d` must be non-zero.
pub(crate) fn div_limb_in_place<S: LimbSeq>(s: &mut S, d: Limb) -> Limb {
    debug_assert!(d != 0);
    let d = d as u128;
    let mut rem: u128 = 0;
    for i in (0..s.length()).rev() {
        let cur = (rem << LIMB_BITS) | s.get(i) as u128;
        s.set(i, (cur / d) as Limb);
        rem = cur % d;
    }
    trim(s);
    rem as Limb
}

/// Short division by a single limb: (a / d, a % d).
pub fn divmod_limb(a: &[Limb], d: Limb) -> Result<(LimbVec, Limb), BigIntError> {
    if d == 0 {
        return Err(BigIntError::DivisionByZero);
    }
    let mut quotient = LimbVec::from_slice(significant(a));
    let rem = div_limb_in_place(&mut quotient, d);
    Ok((quotient, rem))
}

/// Long division: (a / b, a % b).
///
/// Walks the bits of `a` from the top: the remainder is doubled, takes the
/// next bit of `a`, and has `b` subtracted whenever it reaches `b`, which
/// sets the matching quotient bit.
pub fn divmod(a: &[Limb], b: &[Limb]) -> Result<(LimbVec, LimbVec), BigIntError> {
    let (a, b) = (significant(a), significant(b));
    if b.is_empty() {
        return Err(BigIntError::DivisionByZero);
    }
    if compare(a, b) == Ordering::Less {
        return Ok((LimbVec::new(), LimbVec::from_slice(a)));
    }

    let bits = bit_len(a);
    trace!("divmod: {} bits by {} bits", bits, bit_len(b));

    let mut quotient = LimbVec::zeroed(a.len());
    let mut remainder = LimbVec::with_capacity(b.len() + 1);
    for i in (0..bits).rev() {
        shl1_with_bit(&mut remainder, bit(a, i));
        if compare(remainder.as_limbs(), b) != Ordering::Less {
            sub_assign(&mut remainder, b);
            trim(&mut remainder);
            let limb = i / LIMB_BITS as usize;
            quotient.set(limb, quotient.get(limb) | 1 << (i % LIMB_BITS as usize));
        }
    }
    Ok((canonical(quotient), remainder))
}

// ============================================================================
// Tests
// ============================================================================
