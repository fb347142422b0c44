use anyhow::{Context, Result};
use bigint::BigInt;

pub mod cmp;
pub mod divmod;
pub mod eval;
pub mod fact;

/// Parse a decimal operand, naming it in the error.
pub(crate) fn operand(name: &str, text: &str) -> Result<BigInt> {
    BigInt::parse(text).with_context(|| format!("Invalid {name} operand"))
}
