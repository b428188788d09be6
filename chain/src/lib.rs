//! # govfork chain
//!
//! An in-process simulation of a chain forked from mainnet state,
//! exposing the same control surface a forking node offers over
//! JSON-RPC: block mining with optional timestamp overrides, clock
//! shifting, exact next-block timestamps, bulk block advancement, and
//! account impersonation.
//!
//! Contract state lives in a [`ContractRegistry`] seeded by the test
//! fixtures; a transaction submitted with
//! [`ForkChain::send_transaction`] is mined into exactly one new block
//! and dispatched against the registry before the call returns, so a
//! returned receipt *is* the confirmation.
//!
//! ## Quick start
//!
//! ```rust
//! use govfork_chain::{ForkChain, ForkConfig};
//! use govfork_governor_program::{Governor, GovernorConfig};
//! use govfork_lending_program::Distributor;
//! use govfork_chain::ContractRegistry;
//! use govfork_primitives::Address;
//!
//! let governor_addr = Address::new_unique();
//! let comp = Address::new_unique();
//! let comptroller = Address::new_unique();
//! let registry = ContractRegistry::new(
//!     governor_addr,
//!     Governor::new(GovernorConfig::default(), Address::new_unique()),
//!     comp,
//!     comptroller,
//!     Distributor::new(governor_addr),
//! );
//! let mut chain = ForkChain::new(ForkConfig::default(), registry);
//!
//! let start = chain.height();
//! chain.mine_block(None).unwrap();
//! assert_eq!(chain.height(), start + 1);
//! ```

pub mod block;
pub mod error;
pub mod fork;
pub mod registry;
pub mod tx;


pub use {
    block::BlockHeader,
    error::ChainError,
    fork::{ForkChain, ForkConfig},
    registry::ContractRegistry,
    tx::{encode_args, TxReceipt, TxRequest},
};
