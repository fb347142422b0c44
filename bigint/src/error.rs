use thiserror::Error;

/// Errors from BigInt parsing, division and native conversion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// Text was empty, had no digits, or contained an illegal character.
    #[error("invalid integer literal {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("BigInt division by zero")]
    DivisionByZero,

    /// Limb storage could not be reserved.
    #[error("BigInt allocation failure ({limbs} limbs requested)")]
    AllocationFailure { limbs: usize },

    /// Value does not fit the requested native integer type.
    #[error("BigInt does not fit in {target}")]
    Overflow { target: &'static str },
}

impl BigIntError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        BigIntError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
