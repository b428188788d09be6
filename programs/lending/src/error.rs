//! Custom errors for the lending protocol models.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LendingError {
    #[error("insufficient token balance")]
    InsufficientBalance,

    #[error("insufficient allowance for transferFrom")]
    InsufficientAllowance,

    #[error("insufficient market shares to redeem")]
    InsufficientShares,

    #[error("market has insufficient cash")]
    InsufficientCash,

    #[error("caller is not the distributor admin")]
    NotAdmin,

    #[error("no market registered at the given address")]
    UnknownMarket,

    #[error("speed lists must have equal length")]
    SpeedArityMismatch,
}
