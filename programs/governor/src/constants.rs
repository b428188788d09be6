//! Constants for the Governor model.
//!
//! Defaults mirror the mainnet deployment the harness forks: two-day
//! voting delay, three-day voting period, and a two-day timelock, all
//! quoted in ~13-second blocks or seconds as the contract quotes them.

use govfork_primitives::{wad, DAY_SECS};

/// Blocks mined per day at the mainnet ~13 s cadence.
pub const BLOCKS_PER_DAY: u64 = 6_570;

// ---------------------------------------------------------------------------
// Default governor configuration values
// ---------------------------------------------------------------------------

/// Default voting delay: proposals open for voting two days after
/// submission.
pub const DEFAULT_VOTING_DELAY_BLOCKS: u64 = 2 * BLOCKS_PER_DAY;

/// Default voting period: three days of open voting.
pub const DEFAULT_VOTING_PERIOD_BLOCKS: u64 = 3 * BLOCKS_PER_DAY;

/// Default proposal threshold: checkpointed votes a proposer must hold.
pub const DEFAULT_PROPOSAL_THRESHOLD: u128 = wad(65_000);

/// Default quorum: minimum aggregate for-votes for a proposal to pass.
pub const DEFAULT_QUORUM_VOTES: u128 = wad(400_000);

/// Default timelock delay between queueing and execution eligibility.
pub const DEFAULT_TIMELOCK_DELAY_SECS: u64 = 2 * DAY_SECS;

/// Default grace period: a queued proposal not executed within this
/// window after its eta expires.
pub const DEFAULT_GRACE_PERIOD_SECS: u64 = 14 * DAY_SECS;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum number of actions a single proposal may carry.
pub const MAX_ACTIONS: usize = 10;
