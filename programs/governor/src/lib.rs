//! govfork Governor model
//!
//! An in-process model of the Governor-Bravo-style contract the fork
//! harness drives: proposal creation, block-windowed voting, and
//! timelocked execution.
//!
//! ## Lifecycle
//!
//! A proposal moves through the numbered states the on-chain contract
//! reports (the harness asserts these exact codes):
//!
//! | code | state     | reached when |
//! |------|-----------|--------------|
//! | 0    | Pending   | created; voting has not opened yet |
//! | 1    | Active    | `start_block < block ≤ end_block` |
//! | 2    | Canceled  | guardian cancel, or proposer fell below threshold |
//! | 3    | Defeated  | for-votes ≤ against-votes, or quorum missed |
//! | 4    | Succeeded | voting closed, thresholds met, not yet queued |
//! | 5    | Queued    | `queue` set an `eta`; timelock running |
//! | 6    | Expired   | queued but not executed within the grace period |
//! | 7    | Executed  | `execute` dispatched every action |
//!
//! State is a pure function of (proposal, config, current block,
//! current time) — block-height thresholds drive Pending → Active →
//! Defeated/Succeeded, while queue/execute are explicit calls.
//!
//! ## Voting weight
//!
//! A vote's weight is the voter's **checkpointed** governance-token
//! votes at the proposal's `start_block`, supplied by the caller
//! through a lookup closure.  Balances moved after the snapshot block
//! do not change the tally.

pub mod constants;
pub mod error;
pub mod governor;
pub mod methods;
pub mod state;

pub use {
    error::GovernorError,
    governor::Governor,
    state::{GovernorConfig, Proposal, ProposalAction, ProposalState, VoteSupport},
};
