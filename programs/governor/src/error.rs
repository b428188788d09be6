//! Custom errors for the Governor model.

use {
    num_derive::{FromPrimitive, ToPrimitive},
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum GovernorError {
    #[error("proposal action lists must have equal length")]
    ActionArityMismatch = 0,

    #[error("proposal must contain at least one action")]
    NoActions,

    #[error("proposal carries too many actions")]
    TooManyActions,

    #[error("proposer votes are below the proposal threshold")]
    BelowProposalThreshold,

    #[error("proposer already has a pending or active proposal")]
    ProposerAlreadyActive,

    #[error("no proposal with the given id")]
    UnknownProposal,

    #[error("voting is closed for this proposal")]
    VotingClosed,

    #[error("voter has already cast a vote on this proposal")]
    AlreadyVoted,

    #[error("proposal can only be queued when it has succeeded")]
    QueueWrongState,

    #[error("proposal can only be executed when it is queued")]
    ExecuteWrongState,

    #[error("timelock delay has not expired")]
    TimelockNotExpired,

    #[error("queued proposal expired before execution")]
    ProposalExpired,

    #[error("proposal has already been executed")]
    AlreadyExecuted,

    #[error("only the guardian or a below-threshold proposer may cancel")]
    CancelForbidden,
}
