//! Transaction requests and receipts.

use {borsh::BorshSerialize, govfork_primitives::Address, serde::{Deserialize, Serialize}};

/// Borsh-encode a call's argument struct into calldata bytes.
pub fn encode_args<T: BorshSerialize>(args: &T) -> Vec<u8> {
    // In-memory serialization of plain data types does not fail.
    borsh::to_vec(args).expect("borsh encoding of call arguments")
}

/// A transaction to submit against the fork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRequest {
    pub from: Address,
    pub to: Address,
    /// Native value forwarded with the call.
    pub value: u128,
    /// Function signature, e.g. `"castVote(uint256,uint8)"`.
    pub signature: String,
    /// Borsh-encoded arguments for `signature`.
    pub calldata: Vec<u8>,
}

impl TxRequest {
    /// A zero-value call.
    pub fn call<T: BorshSerialize>(from: Address, to: Address, signature: &str, args: &T) -> Self {
        Self {
            from,
            to,
            value: 0,
            signature: signature.to_string(),
            calldata: encode_args(args),
        }
    }

    pub fn with_value(mut self, value: u128) -> Self {
        self.value = value;
        self
    }
}

/// Receipt returned once a transaction has been mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Block the transaction landed in.
    pub block_number: u64,

    /// Timestamp of that block.
    pub block_timestamp: u64,

    /// Position in the chain's total transaction ordering.
    pub tx_index: u64,
}
