use anyhow::{Context, Result};
use bigint::BigInt;
use log::info;

use super::operand;

/// `n!` for any `n` that fits in a `u32`.
pub fn factorial(n: &str) -> Result<String> {
    let n = operand("factorial", n)?;
    let n = u32::try_from(&n).context("Factorial argument must be a non-negative 32-bit integer")?;

    let mut acc = BigInt::one();
    for i in 2..=n {
        acc *= i;
    }
    info!("{n}! has {} bits", acc.bit_len());
    Ok(acc.to_string())
}
