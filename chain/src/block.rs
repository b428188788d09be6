//! Block headers mined on top of the fork point.

use serde::{Deserialize, Serialize};

/// Header of one simulated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block height.
    pub number: u64,

    /// Unix timestamp; strictly greater than the parent's.
    pub timestamp: u64,

    /// Transactions included (0 or 1 — the chain mines each submitted
    /// transaction into its own block).
    pub tx_count: u32,
}
