//! State types for the Governor model.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    govfork_primitives::Address,
    num_derive::{FromPrimitive, ToPrimitive},
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, fmt},
};

// ---------------------------------------------------------------------------
// Lifecycle state
// ---------------------------------------------------------------------------

/// Lifecycle state of a proposal, in the numeric order the on-chain
/// contract reports (tests assert the literal codes).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    FromPrimitive,
    ToPrimitive,
)]
#[borsh(use_discriminant = true)]
pub enum ProposalState {
    /// Submitted; voting has not opened yet.
    Pending = 0,
    /// Voting is open.
    Active = 1,
    /// Canceled by the guardian or after the proposer fell below the
    /// proposal threshold.
    Canceled = 2,
    /// Voting closed without meeting the pass conditions.
    Defeated = 3,
    /// Voting closed with for-votes above against-votes and quorum.
    Succeeded = 4,
    /// Queued into the timelock; waiting out the delay.
    Queued = 5,
    /// Queued but not executed within the grace period.
    Expired = 6,
    /// All actions dispatched.
    Executed = 7,
}

impl fmt::Display for ProposalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProposalState::Pending => "pending",
            ProposalState::Active => "active",
            ProposalState::Canceled => "canceled",
            ProposalState::Defeated => "defeated",
            ProposalState::Succeeded => "succeeded",
            ProposalState::Queued => "queued",
            ProposalState::Expired => "expired",
            ProposalState::Executed => "executed",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

/// The vote choice a participant casts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[borsh(use_discriminant = true)]
pub enum VoteSupport {
    Against = 0,
    For = 1,
    Abstain = 2,
}

/// Per-voter receipt; its existence prevents double voting.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub support: VoteSupport,
    /// Checkpointed weight applied to the tally.
    pub votes: u128,
    /// Block at which the vote transaction was mined.
    pub cast_block: u64,
}

// ---------------------------------------------------------------------------
// Proposal
// ---------------------------------------------------------------------------

/// One action of a proposal: a call the governor dispatches on
/// execution.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ProposalAction {
    pub target: Address,
    /// Native value forwarded with the call.
    pub value: u128,
    /// Function signature, e.g. `"_setCompSpeeds(address[],uint256[],uint256[])"`.
    pub signature: String,
    /// Encoded arguments for `signature`.
    pub calldata: Vec<u8>,
}

/// A governance proposal.
///
/// The four action lists are stored in parallel, one entry per
/// proposed action; [`crate::Governor::propose`] rejects drafts whose
/// lists differ in length.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique, monotonically increasing identifier.
    pub id: u64,

    /// The account that created this proposal.
    pub proposer: Address,

    /// Call targets, one per action.
    pub targets: Vec<Address>,

    /// Native values, one per action.
    pub values: Vec<u128>,

    /// Function signatures, one per action.
    pub signatures: Vec<String>,

    /// Encoded call data, one per action.
    pub calldatas: Vec<Vec<u8>>,

    /// Free-text description.
    pub description: String,

    /// First block at which voting is open is `start_block + 1`.
    pub start_block: u64,

    /// Last block at which voting is open.
    pub end_block: u64,

    /// Earliest execution time; zero until queued.
    pub eta: u64,

    pub for_votes: u128,
    pub against_votes: u128,
    pub abstain_votes: u128,

    pub canceled: bool,
    pub executed: bool,

    /// Receipts keyed by voter.
    pub receipts: HashMap<Address, VoteReceipt>,
}

impl Proposal {
    /// Number of actions this proposal carries.
    pub fn action_count(&self) -> usize {
        self.targets.len()
    }

    /// The parallel lists zipped into per-action values.
    pub fn actions(&self) -> Vec<ProposalAction> {
        (0..self.action_count())
            .map(|i| ProposalAction {
                target: self.targets[i],
                value: self.values[i],
                signature: self.signatures[i].clone(),
                calldata: self.calldatas[i].clone(),
            })
            .collect()
    }

    /// The receipt for `voter`, if one was recorded.
    pub fn receipt(&self, voter: &Address) -> Option<&VoteReceipt> {
        self.receipts.get(voter)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Governor parameters, readable by the harness the way the deployed
/// contract exposes `votingDelay()` / `votingPeriod()`.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct GovernorConfig {
    /// Blocks between proposal submission and the start of voting.
    pub voting_delay: u64,

    /// Blocks the voting window stays open.
    pub voting_period: u64,

    /// Minimum checkpointed votes required to create a proposal.
    pub proposal_threshold: u128,

    /// Minimum for-votes for a proposal to succeed.
    pub quorum_votes: u128,

    /// Seconds between queueing and execution eligibility.
    pub timelock_delay: u64,

    /// Seconds after the eta during which execution stays possible.
    pub grace_period: u64,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            voting_delay: DEFAULT_VOTING_DELAY_BLOCKS,
            voting_period: DEFAULT_VOTING_PERIOD_BLOCKS,
            proposal_threshold: DEFAULT_PROPOSAL_THRESHOLD,
            quorum_votes: DEFAULT_QUORUM_VOTES,
            timelock_delay: DEFAULT_TIMELOCK_DELAY_SECS,
            grace_period: DEFAULT_GRACE_PERIOD_SECS,
        }
    }
}
