//! Limb storage for magnitudes.
//!
//! [`LimbSeq`] is the small sequence contract the magnitude engine mutates
//! through; [`LimbVec`] is the owned implementation every `BigInt` uses.
//! Values of up to four limbs live inline, larger ones spill to the heap.

use std::fmt;

use smallvec::SmallVec;

use crate::error::BigIntError;

/// One fixed-width digit of a magnitude.
pub type Limb = u64;

/// Width of a [`Limb`] in bits.
pub const LIMB_BITS: u32 = Limb::BITS;

const INLINE_LIMBS: usize = 4;

/// Growable, indexable sequence of limbs, least-significant first.
pub trait LimbSeq: Clone {
    fn append(&mut self, limb: Limb);
    fn get(&self, i: usize) -> Limb;
    fn set(&mut self, i: usize, limb: Limb);
    fn length(&self) -> usize;
    fn truncate(&mut self, len: usize);
    fn as_limbs(&self) -> &[Limb];
}

/// Owned limb buffer with inline storage for small values.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LimbVec(SmallVec<[Limb; INLINE_LIMBS]>);

impl LimbVec {
    pub fn new() -> Self {
        LimbVec(SmallVec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LimbVec(SmallVec::with_capacity(capacity))
    }

    /// `len` zero limbs. Not canonical until trimmed.
    pub fn zeroed(len: usize) -> Self {
        LimbVec(SmallVec::from_elem(0, len))
    }

    pub fn from_slice(limbs: &[Limb]) -> Self {
        LimbVec(SmallVec::from_slice(limbs))
    }

    /// Reserve room for `additional` more limbs, reporting failure instead
    /// of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), BigIntError> {
        let requested = self.0.len().saturating_add(additional);
        self.0
            .try_reserve(additional)
            .map_err(|_| BigIntError::AllocationFailure { limbs: requested })
    }

    /// Whether the limbs are still held in the inline buffer.
    #[inline]
    pub fn is_inline(&self) -> bool {
        !self.0.spilled()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Limb> {
        self.0.iter()
    }
}

impl LimbSeq for LimbVec {
    #[inline]
    fn append(&mut self, limb: Limb) {
        self.0.push(limb);
    }

    #[inline]
    fn get(&self, i: usize) -> Limb {
        self.0[i]
    }

    #[inline]
    fn set(&mut self, i: usize, limb: Limb) {
        self.0[i] = limb;
    }

    #[inline]
    fn length(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        &self.0
    }
}

impl LimbSeq for Vec<Limb> {
    #[inline]
    fn append(&mut self, limb: Limb) {
        self.push(limb);
    }

    #[inline]
    fn get(&self, i: usize) -> Limb {
        self[i]
    }

    #[inline]
    fn set(&mut self, i: usize, limb: Limb) {
        self[i] = limb;
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        self
    }
}

impl FromIterator<Limb> for LimbVec {
    fn from_iter<I: IntoIterator<Item = Limb>>(iter: I) -> Self {
        LimbVec(iter.into_iter().collect())
    }
}

impl fmt::Debug for LimbVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|l| format!("{l:#018x}")))
            .finish()
    }
}
