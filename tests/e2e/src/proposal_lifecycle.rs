//! E2E: the governance proposal lifecycle on the forked chain.
//!
//! Drives the speed-setting proposal through propose → vote → queue →
//! execute with impersonated mainnet accounts and checks the terminal
//! lifecycle codes the deployed contract would report.

use {
    govfork_e2e_tests::{fixtures, helpers::*},
    govfork_governor_program::ProposalState,
    govfork_harness::{run_proposal_lifecycle, AdvanceStrategy, LifecycleRun},
    num_traits::ToPrimitive,
};

fn speed_run(voters: &[&str]) -> LifecycleRun {
    LifecycleRun {
        proposer: "proposer".to_string(),
        voters: voters.iter().map(|v| v.to_string()).collect(),
        draft: fixtures::speed_proposal(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: two voter roles above quorum drive the proposal to Executed (7)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_two_voters_reach_executed() {
    init_logging();
    println!("\n========================================");
    println!("  LIFECYCLE: two voters, quorum met");
    println!("========================================\n");

    let mut chain = forked_mainnet();
    let ctx = standard_signers(&mut chain);

    assert_eq!(
        chain.registry().distributor().speed(&fixtures::ctusd()),
        0,
        "no emission before the proposal"
    );

    let run = speed_run(&["proposer", "a16z"]);
    let state =
        run_proposal_lifecycle(&mut chain, &ctx, AdvanceStrategy::Stepwise, &run).unwrap();

    assert_eq!(state, ProposalState::Executed);
    assert_eq!(state.to_u8(), Some(7), "executed state code is 7");
    println!("✓ final state {} (code 7)", state);

    // The executed action switched emission on.
    assert_eq!(
        chain.registry().distributor().speed(&fixtures::ctusd()),
        fixtures::CTUSD_COMP_SPEED
    );
    println!("✓ TUSD market reward speed set");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: the bulk-advance fast path drives the same outcome
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bulk_advance_reaches_executed() {
    init_logging();
    let mut chain = forked_mainnet();
    let ctx = standard_signers(&mut chain);

    let run = speed_run(&["proposer", "a16z"]);
    let state = run_proposal_lifecycle(&mut chain, &ctx, AdvanceStrategy::Bulk, &run).unwrap();
    assert_eq!(state, ProposalState::Executed);
    println!("✓ bulk-advance lifecycle executed");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: below quorum → Defeated, and queue/execute are never reached
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_insufficient_votes_defeated_without_queue() {
    init_logging();
    println!("\n========================================");
    println!("  LIFECYCLE: quorum missed");
    println!("========================================\n");

    let mut chain = forked_mainnet();
    let ctx = standard_signers(&mut chain);

    // Only the proposer votes: 120k of the 400k quorum.
    let run = speed_run(&["proposer"]);
    let state =
        run_proposal_lifecycle(&mut chain, &ctx, AdvanceStrategy::Stepwise, &run).unwrap();

    assert_eq!(state, ProposalState::Defeated);
    assert_eq!(state.to_u8(), Some(3));
    println!("✓ final state {} (code 3)", state);

    // Queue was never attempted (no eta) and the action never ran.
    let id = chain.registry().governor().proposal_count();
    assert_eq!(chain.registry().governor().proposal(id).unwrap().eta, 0);
    assert_eq!(chain.registry().distributor().speed(&fixtures::ctusd()), 0);
    println!("✓ queue/execute never reached");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: the proposal record carries the parallel action lists intact
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_proposal_record_matches_draft() {
    init_logging();
    let mut chain = forked_mainnet();
    let ctx = standard_signers(&mut chain);

    let run = speed_run(&["proposer", "a16z"]);
    run_proposal_lifecycle(&mut chain, &ctx, AdvanceStrategy::Bulk, &run).unwrap();

    let id = chain.registry().governor().proposal_count();
    let proposal = chain.registry().governor().proposal(id).unwrap();
    assert_eq!(proposal.action_count(), 1);
    assert_eq!(proposal.targets, run.draft.targets);
    assert_eq!(proposal.signatures, run.draft.signatures);
    assert_eq!(proposal.calldatas, run.draft.calldatas);
    assert!(proposal.executed);
    assert_eq!(proposal.for_votes, fixtures::A16Z_VOTES + fixtures::BLCK_VOTES);
    println!("✓ proposal record intact: {}", proposal.description);
}
