//! Wire surface of the lending protocol: function signatures and
//! borsh-encoded argument payloads, mirroring the deployed contracts'
//! ABI names so fixtures can quote them verbatim.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    govfork_primitives::Address,
    serde::{Deserialize, Serialize},
};

// ── Token ────────────────────────────────────────────────────────────

pub const TRANSFER: &str = "transfer(address,uint256)";
pub const APPROVE: &str = "approve(address,uint256)";
pub const TRANSFER_FROM: &str = "transferFrom(address,address,uint256)";

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct TransferArgs {
    pub to: Address,
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ApproveArgs {
    pub spender: Address,
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct TransferFromArgs {
    pub from: Address,
    pub to: Address,
    pub amount: u128,
}

// ── Market ───────────────────────────────────────────────────────────

pub const MINT: &str = "mint(uint256)";
pub const REDEEM: &str = "redeem(uint256)";
pub const BORROW: &str = "borrow(uint256)";

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct MintArgs {
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct RedeemArgs {
    pub share_amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct BorrowArgs {
    pub amount: u128,
}

// ── Distributor ──────────────────────────────────────────────────────

pub const CLAIM_REWARDS: &str = "claimComp(address)";
pub const SET_COMP_SPEEDS: &str = "_setCompSpeeds(address[],uint256[],uint256[])";

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ClaimRewardsArgs {
    pub holder: Address,
}

/// Arguments of the speed-setting action a governance proposal
/// dispatches.  Borrow-side speeds are accepted for ABI fidelity but
/// the model only distributes on the supply side.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct SetCompSpeedsArgs {
    pub markets: Vec<Address>,
    pub supply_speeds: Vec<u128>,
    pub borrow_speeds: Vec<u128>,
}
