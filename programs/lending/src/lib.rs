//! govfork lending protocol models
//!
//! In-process models of the already-deployed contracts the fork
//! harness asserts against:
//!
//! - [`Token`] — an ERC-20-style balance/allowance ledger.  The
//!   governance token variant additionally records per-account **vote
//!   checkpoints** on every balance change, so the governor can read a
//!   holder's weight *as of* a past block (`prior_votes`).
//! - [`Market`] — a money-market share ledger: supply underlying to
//!   mint shares, redeem shares for underlying, borrow against the
//!   market's cash.
//! - [`Distributor`] — the reward engine: a per-market speed
//!   (governance tokens per block), a lazily-advanced global supply
//!   index, and per-supplier indexes settled on every share change.
//!   Governance controls the speeds; that is exactly the knob the
//!   proposal under test turns.
//!
//! The models hold no clock; every time-dependent operation takes the
//! current block explicitly, mirroring how the governor model works.

pub mod distributor;
pub mod error;
pub mod market;
pub mod methods;
pub mod token;

pub use {
    distributor::Distributor,
    error::LendingError,
    market::Market,
    token::Token,
};
