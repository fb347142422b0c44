use anyhow::{Context, Result};
use log::debug;

use super::operand;

/// Quotient and remainder, separated by a space.
pub fn divmod(lhs: &str, rhs: &str) -> Result<String> {
    let a = operand("dividend", lhs)?;
    let b = operand("divisor", rhs)?;
    let (q, r) = a.div_rem(&b).context("Cannot divide")?;
    debug!("quotient {} bits, remainder {} bits", q.bit_len(), r.bit_len());
    Ok(format!("{q} {r}"))
}
