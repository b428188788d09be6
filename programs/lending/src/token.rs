//! ERC-20-style token ledger with optional vote checkpoints.

use {
    crate::error::LendingError,
    borsh::{BorshDeserialize, BorshSerialize},
    govfork_primitives::Address,
    log::trace,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// A `(block, votes)` pair; the account's votes from `from_block`
/// onward, until superseded by a later checkpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct Checkpoint {
    pub from_block: u64,
    pub votes: u128,
}

/// An ERC-20-style token.
///
/// Constructed with [`Token::new`] for plain assets or
/// [`Token::with_vote_checkpoints`] for the governance token, whose
/// balance changes also append vote checkpoints.  The model equates
/// votes with balance (holders are treated as self-delegated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    symbol: String,
    decimals: u8,
    total_supply: u128,
    balances: HashMap<Address, u128>,
    allowances: HashMap<(Address, Address), u128>,
    checkpoints: Option<HashMap<Address, Vec<Checkpoint>>>,
}

impl Token {
    pub fn new(symbol: &str, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimals,
            total_supply: 0,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            checkpoints: None,
        }
    }

    /// A token that records vote checkpoints on every balance change.
    pub fn with_vote_checkpoints(symbol: &str, decimals: u8) -> Self {
        Self {
            checkpoints: Some(HashMap::new()),
            ..Self::new(symbol, decimals)
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn balance_of(&self, account: &Address) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Credit `amount` to `account` out of thin air.  Fixture seeding
    /// only; the fork snapshot is built from calls to this.
    pub fn seed(&mut self, account: Address, amount: u128, block: u64) {
        *self.balances.entry(account).or_insert(0) += amount;
        self.total_supply += amount;
        let new_votes = self.balance_of(&account);
        self.write_checkpoint(account, new_votes, block);
    }

    pub fn approve(&mut self, owner: Address, spender: Address, amount: u128) {
        self.allowances.insert((owner, spender), amount);
        trace!("{}: {owner} approved {spender} for {amount}", self.symbol);
    }

    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: u128,
        block: u64,
    ) -> Result<(), LendingError> {
        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(LendingError::InsufficientBalance);
        }
        self.balances.insert(from, from_balance - amount);
        *self.balances.entry(to).or_insert(0) += amount;

        let from_votes = self.balance_of(&from);
        let to_votes = self.balance_of(&to);
        self.write_checkpoint(from, from_votes, block);
        self.write_checkpoint(to, to_votes, block);
        trace!("{}: {from} -> {to} {amount}", self.symbol);
        Ok(())
    }

    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
        block: u64,
    ) -> Result<(), LendingError> {
        let allowed = self.allowance(&from, &spender);
        if allowed < amount {
            return Err(LendingError::InsufficientAllowance);
        }
        self.transfer(from, to, amount, block)?;
        self.allowances.insert((from, spender), allowed - amount);
        Ok(())
    }

    /// The account's checkpointed votes as of `block`.
    ///
    /// Zero when the token does not track votes or the account had no
    /// checkpoint at or before `block`.
    pub fn prior_votes(&self, account: &Address, block: u64) -> u128 {
        let Some(checkpoints) = self.checkpoints.as_ref().and_then(|m| m.get(account)) else {
            return 0;
        };
        // Last checkpoint with from_block <= block.
        match checkpoints.binary_search_by_key(&block, |c| c.from_block) {
            Ok(i) => checkpoints[i].votes,
            Err(0) => 0,
            Err(i) => checkpoints[i - 1].votes,
        }
    }

    fn write_checkpoint(&mut self, account: Address, votes: u128, block: u64) {
        let Some(map) = self.checkpoints.as_mut() else {
            return;
        };
        let list = map.entry(account).or_default();
        match list.last_mut() {
            Some(last) if last.from_block == block => last.votes = votes,
            _ => list.push(Checkpoint {
                from_block: block,
                votes,
            }),
        }
    }
}
