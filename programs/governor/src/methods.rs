//! Wire surface of the governor: function signatures plus the
//! borsh-encoded argument payloads that travel as transaction call
//! data.
//!
//! A call is addressed by (target address, signature string); the
//! calldata bytes are the borsh encoding of the matching `*Args`
//! struct.  Keeping the signatures verbatim from the deployed contract
//! lets proposal fixtures quote them unchanged.

use {
    crate::state::VoteSupport,
    borsh::{BorshDeserialize, BorshSerialize},
    govfork_primitives::Address,
    serde::{Deserialize, Serialize},
};

pub const PROPOSE: &str = "propose(address[],uint256[],string[],bytes[],string)";
pub const CAST_VOTE: &str = "castVote(uint256,uint8)";
pub const QUEUE: &str = "queue(uint256)";
pub const EXECUTE: &str = "execute(uint256)";
pub const CANCEL: &str = "cancel(uint256)";

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ProposeArgs {
    pub targets: Vec<Address>,
    pub values: Vec<u128>,
    pub signatures: Vec<String>,
    pub calldatas: Vec<Vec<u8>>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct CastVoteArgs {
    pub proposal_id: u64,
    pub support: VoteSupport,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct QueueArgs {
    pub proposal_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ExecuteArgs {
    pub proposal_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct CancelArgs {
    pub proposal_id: u64,
}
