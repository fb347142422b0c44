use std::cmp::Ordering;

use anyhow::Result;

use super::operand;

pub fn compare(lhs: &str, rhs: &str) -> Result<String> {
    let a = operand("left", lhs)?;
    let b = operand("right", rhs)?;
    let symbol = match a.cmp(&b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(symbol.to_string())
}
