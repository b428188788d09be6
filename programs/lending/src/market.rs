//! Money-market share ledger.

use {
    crate::error::LendingError,
    govfork_primitives::Address,
    log::trace,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// A lending market over one underlying token.
///
/// Shares are minted 1:1 against supplied underlying (the model pins
/// the exchange rate at one).  The registry that owns both the market
/// and its underlying token moves the token balances; the market only
/// keeps the share/borrow accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    symbol: String,
    underlying: Address,
    total_supply: u128,
    total_borrows: u128,
    cash: u128,
    shares: HashMap<Address, u128>,
    borrows: HashMap<Address, u128>,
}

impl Market {
    pub fn new(symbol: &str, underlying: Address) -> Self {
        Self {
            symbol: symbol.to_string(),
            underlying,
            total_supply: 0,
            total_borrows: 0,
            cash: 0,
            shares: HashMap::new(),
            borrows: HashMap::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn underlying(&self) -> Address {
        self.underlying
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn total_borrows(&self) -> u128 {
        self.total_borrows
    }

    pub fn cash(&self) -> u128 {
        self.cash
    }

    pub fn balance_of(&self, account: &Address) -> u128 {
        self.shares.get(account).copied().unwrap_or(0)
    }

    pub fn borrow_balance_of(&self, account: &Address) -> u128 {
        self.borrows.get(account).copied().unwrap_or(0)
    }

    /// Record a supply of `amount` underlying; mints shares 1:1.
    /// The caller must already have moved the underlying in.
    pub fn deposit(&mut self, supplier: Address, amount: u128) {
        *self.shares.entry(supplier).or_insert(0) += amount;
        self.total_supply += amount;
        self.cash += amount;
        trace!("{}: {supplier} supplied {amount}", self.symbol);
    }

    /// Burn `share_amount` shares; returns the underlying to pay out.
    pub fn withdraw(&mut self, supplier: Address, share_amount: u128) -> Result<u128, LendingError> {
        let held = self.balance_of(&supplier);
        if held < share_amount {
            return Err(LendingError::InsufficientShares);
        }
        if self.cash < share_amount {
            return Err(LendingError::InsufficientCash);
        }
        self.shares.insert(supplier, held - share_amount);
        self.total_supply -= share_amount;
        self.cash -= share_amount;
        trace!("{}: {supplier} redeemed {share_amount}", self.symbol);
        Ok(share_amount)
    }

    /// Take `amount` underlying out of the market's cash as a borrow.
    pub fn borrow(&mut self, borrower: Address, amount: u128) -> Result<(), LendingError> {
        if self.cash < amount {
            return Err(LendingError::InsufficientCash);
        }
        self.cash -= amount;
        *self.borrows.entry(borrower).or_insert(0) += amount;
        self.total_borrows += amount;
        trace!("{}: {borrower} borrowed {amount}", self.symbol);
        Ok(())
    }
}
