//! # govfork harness
//!
//! The two cooperating utilities a fork test is built from:
//!
//! - a **chain-time controller** ([`advance_block_to`],
//!   [`increase_time`], [`advance_time_and_block`]) that moves the
//!   simulated chain's height and clock to target values, and
//! - a **proposal lifecycle driver** ([`run_proposal_lifecycle`]) that
//!   takes a proposal draft through propose → vote → queue → execute
//!   against impersonated mainnet accounts, returning the final
//!   lifecycle state.
//!
//! Every state-changing step submits one transaction and resumes only
//! after it is mined, so the steps are strictly ordered.  Failures are
//! terminal: a revert during queueing or execution is reported as a
//! stage-tagged error and never retried.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let mut chain = helpers::forked_mainnet();
//! let ctx = SignerContext::impersonate(&mut chain, &[
//!     ("proposer", fixtures::blck()),
//!     ("voter_a", fixtures::a16z()),
//! ]);
//! let run = LifecycleRun {
//!     proposer: "proposer".into(),
//!     voters: vec!["proposer".into(), "voter_a".into()],
//!     draft: fixtures::speed_proposal(),
//! };
//! let state = run_proposal_lifecycle(&mut chain, &ctx, AdvanceStrategy::Stepwise, &run)?;
//! assert_eq!(state, ProposalState::Executed);
//! ```

pub mod driver;
pub mod error;
pub mod mine;
pub mod signers;

pub use {
    driver::{
        execute_proposal, proposal_state, queue_proposal, run_proposal_lifecycle,
        submit_proposal, LifecycleRun, ProposalDraft,
    },
    error::HarnessError,
    mine::{
        advance_block_to, advance_time_and_block, increase_time, latest_block,
        set_next_block_timestamp, time_latest, AdvanceStrategy,
    },
    signers::{ImpersonatedSigner, SignerContext},
};
