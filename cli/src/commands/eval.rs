use std::str::FromStr;

use anyhow::{bail, Context, Result};
use bigint::BigInt;
use log::debug;

use super::operand;

/// Largest shift accepted from the command line, in bits.
pub const MAX_SHIFT_BITS: usize = 1 << 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "+" => Op::Add,
            "-" => Op::Sub,
            "*" | "x" => Op::Mul,
            "/" => Op::Div,
            "%" => Op::Rem,
            "<<" => Op::Shl,
            ">>" => Op::Shr,
            _ => bail!("Unknown operator '{s}' (expected one of + - * / % << >>)"),
        })
    }
}

fn shift_amount(bits: &BigInt) -> Result<usize> {
    let bits = usize::try_from(bits).context("Shift amount must be a non-negative integer")?;
    if bits > MAX_SHIFT_BITS {
        bail!("Shift amount {bits} exceeds the limit of {MAX_SHIFT_BITS} bits");
    }
    Ok(bits)
}

/// Evaluate `lhs op rhs` and return the decimal result.
pub fn eval(lhs: &str, op: &str, rhs: &str) -> Result<String> {
    let op: Op = op.parse()?;
    let a = operand("left", lhs)?;
    let b = operand("right", rhs)?;
    debug!("eval {:?}: {} bits by {} bits", op, a.bit_len(), b.bit_len());

    let result = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a.div_rem(&b).context("Cannot divide")?.0,
        Op::Rem => a.div_rem(&b).context("Cannot divide")?.1,
        Op::Shl => a << shift_amount(&b)?,
        Op::Shr => a >> shift_amount(&b)?,
    };
    Ok(result.to_string())
}
