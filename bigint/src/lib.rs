//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is a sign plus a magnitude of 64-bit limbs stored least
//! significant first. Arithmetic is schoolbook: carry/borrow propagation for
//! addition and subtraction, one partial product per limb for
//! multiplication, and bit-wise long division.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "99999999999999999999".parse().unwrap();
//! assert_eq!((a + 1u8).to_string(), "100000000000000000000");
//! ```

pub mod error;
pub mod int;
pub mod limbs;
pub mod magnitude;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
mod text;

pub use error::BigIntError;
pub use int::{BigInt, Sign};
pub use limbs::{Limb, LimbSeq, LimbVec, LIMB_BITS};
