//! Errors surfaced by the simulated chain.

use {govfork_primitives::Address, thiserror::Error};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("block timestamp must increase: requested {requested}, current {current}")]
    TimestampNotIncreasing { requested: u64, current: u64 },

    #[error("sender {0} is neither a local test account nor impersonated")]
    SenderLocked(Address),

    #[error("sender {from} cannot cover value {value}")]
    InsufficientValue { from: Address, value: u128 },

    #[error("no contract deployed at {0}")]
    UnknownContract(Address),

    #[error("contract {target} has no method {signature:?}")]
    UnknownMethod { target: Address, signature: String },

    #[error("calldata for {signature:?} failed to decode")]
    BadCalldata { signature: String },

    #[error("execution reverted: {0}")]
    Revert(String),
}

impl ChainError {
    /// Wrap a contract-model error as a revert, the way a node reports
    /// a failed call with its reason string.
    pub fn revert(reason: impl std::fmt::Display) -> Self {
        ChainError::Revert(reason.to_string())
    }
}
