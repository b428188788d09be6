//! Core primitive types for the govfork workspace.
//!
//! Everything that more than one crate needs lives here: the 20-byte
//! [`Address`] used for accounts and contracts, and the 18-decimal
//! fixed-point unit helpers used for token amounts.

pub mod address;
pub mod units;

pub use address::{Address, AddressParseError};
pub use units::{wad, DAY_SECS, WAD};
