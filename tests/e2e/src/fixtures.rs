//! Mainnet-shaped fixtures.
//!
//! Every literal the harness must not hardcode lives here: the fork
//! point, the impersonated account addresses, the deployed contract
//! addresses, the governor parameters, and the proposal under test —
//! a speed-setting proposal that switches reward emission on for the
//! TUSD market, mirroring the mainnet proposal the original fork test
//! was written around.

use {
    govfork_governor_program::GovernorConfig,
    govfork_harness::ProposalDraft,
    govfork_lending_program::methods as lend,
    govfork_primitives::{wad, Address, DAY_SECS},
};

/// Mainnet height the fork is seeded from.
pub const FORK_BLOCK: u64 = 14_152_459;

/// Timestamp of the fork block.
pub const FORK_TIMESTAMP: u64 = 1_644_240_000;

/// Supply-side reward speed the proposal sets for the TUSD market
/// (governance tokens per block, 18-decimal).
pub const CTUSD_COMP_SPEED: u128 = wad(1) / 20;

fn addr(s: &str) -> Address {
    Address::from_hex(s).expect("fixture address")
}

// ── Impersonated accounts ────────────────────────────────────────────

/// Large governance-token holder; votes For.
pub fn a16z() -> Address {
    addr("0x9aa835bc7b8ce13b9b0c9764a52fbf71ac62ccf1")
}

/// Exchange wallet holding deep TUSD reserves; funds test accounts.
pub fn tusd_whale() -> Address {
    addr("0xf977814e90da44bfa03b6295a0616a897441acec")
}

/// Proposer; holds enough governance tokens to clear the threshold.
pub fn blck() -> Address {
    addr("0x54a37d93e57c5da659f508069cf65a381b61e189")
}

// ── Deployed contracts ───────────────────────────────────────────────

pub fn tusd() -> Address {
    addr("0x0000000000085d4780b73119b644ae5ecd22b376")
}

pub fn comp() -> Address {
    addr("0xc00e94cb662c3520282e6f5717214004a7f26888")
}

pub fn ctusd() -> Address {
    addr("0x12392f67bdf24fae0af363c24ac620a2f67dad86")
}

pub fn comptroller() -> Address {
    addr("0x3d9819210a31b4961b30ef54be2aed79b9c9cd3b")
}

pub fn governor() -> Address {
    addr("0xc0da02939e1441f497fd74f78ce7decb17b66529")
}

// ── Governor parameters (as deployed) ────────────────────────────────

pub fn governor_config() -> GovernorConfig {
    GovernorConfig {
        voting_delay: 13_140,  // ~2 days of blocks
        voting_period: 19_710, // ~3 days of blocks
        proposal_threshold: wad(65_000),
        quorum_votes: wad(400_000),
        timelock_delay: 2 * DAY_SECS,
        grace_period: 14 * DAY_SECS,
    }
}

/// Seeded checkpointed votes: combined they clear the 400k quorum,
/// and the proposer alone clears the 65k threshold.
pub const A16Z_VOTES: u128 = wad(325_000);
pub const BLCK_VOTES: u128 = wad(120_000);

/// Governance tokens held by the comptroller for reward payouts.
pub const COMPTROLLER_COMP_RESERVE: u128 = wad(1_000_000);

/// TUSD held by the whale for funding test accounts.
pub const WHALE_TUSD: u128 = wad(200_000_000);

// ── The proposal under test ──────────────────────────────────────────

/// One action: set the TUSD market's supply-side reward speed from
/// zero to [`CTUSD_COMP_SPEED`].
pub fn speed_proposal() -> ProposalDraft {
    ProposalDraft::new("Add reward emission to the TUSD market").with_action(
        comptroller(),
        0,
        lend::SET_COMP_SPEEDS,
        govfork_chain::encode_args(&lend::SetCompSpeedsArgs {
            markets: vec![ctusd()],
            supply_speeds: vec![CTUSD_COMP_SPEED],
            borrow_speeds: vec![0],
        }),
    )
}
