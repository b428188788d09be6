//! Errors surfaced by the harness.

use {govfork_chain::ChainError, govfork_governor_program::GovernorError, thiserror::Error};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Chain time only moves forward; asked to rewind.
    #[error("target block {target} is lower than current block {current}")]
    InvalidTarget { target: u64, current: u64 },

    #[error("no impersonated signer for role {0:?}")]
    UnknownRole(String),

    /// The queue call reverted; the lifecycle is failed, not retried.
    #[error("queue stage failed: {reason}")]
    QueueStage { reason: String },

    /// The execute call reverted; the lifecycle is failed, not retried.
    #[error("execute stage failed: {reason}")]
    ExecuteStage { reason: String },

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Governor(#[from] GovernorError),
}
