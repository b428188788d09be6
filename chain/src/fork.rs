//! The simulated forked chain.

use {
    crate::{
        block::BlockHeader,
        error::ChainError,
        registry::ContractRegistry,
        tx::{TxReceipt, TxRequest},
    },
    govfork_primitives::{wad, Address},
    log::{debug, trace},
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// Parameters of the fork point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkConfig {
    /// Mainnet height the fork is seeded from.
    pub fork_block: u64,

    /// Timestamp of the fork block.
    pub fork_timestamp: u64,

    /// Seconds between consecutive blocks when no override is given.
    pub block_interval_secs: u64,

    /// Locally-funded, pre-unlocked accounts available to tests.
    pub test_account_count: usize,
}

impl Default for ForkConfig {
    fn default() -> Self {
        Self {
            fork_block: 0,
            fork_timestamp: 1_600_000_000,
            block_interval_secs: 13,
            test_account_count: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct AccountState {
    balance: u128,
    /// May sign transactions: local test account or impersonated.
    unlocked: bool,
    /// Seeded locally at genesis; never re-locked.
    local: bool,
}

/// One simulated chain instance seeded from mainnet state.
///
/// All mutation goes through `&mut self`, so a single logical thread
/// of control is enforced by the borrow checker; there is no locking.
#[derive(Debug, Clone)]
pub struct ForkChain {
    config: ForkConfig,
    height: u64,
    timestamp: u64,
    /// Accumulated `increase_time` delta, applied to the next default-
    /// timestamped block.
    pending_time_offset: u64,
    /// Exact timestamp pinned for the next block, if any.
    next_block_timestamp: Option<u64>,
    accounts: HashMap<Address, AccountState>,
    test_accounts: Vec<Address>,
    registry: ContractRegistry,
    blocks: Vec<BlockHeader>,
    tx_count: u64,
}

impl ForkChain {
    pub fn new(config: ForkConfig, registry: ContractRegistry) -> Self {
        let mut accounts = HashMap::new();
        let mut test_accounts = Vec::with_capacity(config.test_account_count);
        for _ in 0..config.test_account_count {
            let address = Address::new_unique();
            accounts.insert(
                address,
                AccountState {
                    balance: wad(10_000),
                    unlocked: true,
                    local: true,
                },
            );
            test_accounts.push(address);
        }
        Self {
            height: config.fork_block,
            timestamp: config.fork_timestamp,
            config,
            pending_time_offset: 0,
            next_block_timestamp: None,
            accounts,
            test_accounts,
            registry,
            blocks: Vec::new(),
            tx_count: 0,
        }
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn config(&self) -> &ForkConfig {
        &self.config
    }

    /// Current block height.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Timestamp of the latest block.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Header of a block mined on top of the fork point.
    pub fn block(&self, number: u64) -> Option<&BlockHeader> {
        let offset = number.checked_sub(self.config.fork_block.checked_add(1)?)?;
        self.blocks.get(offset as usize)
    }

    /// Locally-funded accounts that can sign without impersonation.
    pub fn test_accounts(&self) -> &[Address] {
        &self.test_accounts
    }

    pub fn balance(&self, address: &Address) -> u128 {
        self.accounts.get(address).map(|a| a.balance).unwrap_or(0)
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    /// Mutable registry access for fixture seeding.  State-changing
    /// calls in tests should go through [`Self::send_transaction`].
    pub fn registry_mut(&mut self) -> &mut ContractRegistry {
        &mut self.registry
    }

    // ── Control surface (the evm_* / hardhat_* analogs) ──────────────

    /// Mine exactly one block.  With `Some(ts)`, the new block carries
    /// that timestamp (and any pending `set_next_block_timestamp` is
    /// discarded); with `None`, the pinned or interval-derived
    /// timestamp applies.
    pub fn mine_block(&mut self, timestamp_override: Option<u64>) -> Result<BlockHeader, ChainError> {
        let next_ts = match timestamp_override {
            Some(ts) => {
                self.next_block_timestamp = None;
                ts
            }
            None => match self.next_block_timestamp.take() {
                Some(ts) => ts,
                None => {
                    let offset = std::mem::take(&mut self.pending_time_offset);
                    self.timestamp + offset + self.config.block_interval_secs
                }
            },
        };
        if next_ts <= self.timestamp {
            return Err(ChainError::TimestampNotIncreasing {
                requested: next_ts,
                current: self.timestamp,
            });
        }
        self.height += 1;
        self.timestamp = next_ts;
        let header = BlockHeader {
            number: self.height,
            timestamp: next_ts,
            tx_count: 0,
        };
        self.blocks.push(header);
        trace!("mined block {} at t={}", self.height, next_ts);
        Ok(header)
    }

    /// Bulk-advance: append `n` blocks at interval spacing in one call.
    pub fn increase_blocks(&mut self, n: u64) -> Result<(), ChainError> {
        for _ in 0..n {
            self.mine_block(None)?;
        }
        debug!("bulk-advanced {n} blocks to height {}", self.height);
        Ok(())
    }

    /// Shift the chain clock forward by `secs`.  The shift becomes
    /// observable in the next mined block.
    pub fn increase_time(&mut self, secs: u64) {
        self.pending_time_offset += secs;
    }

    /// Pin the next block's timestamp exactly.
    pub fn set_next_block_timestamp(&mut self, ts: u64) -> Result<(), ChainError> {
        if ts <= self.timestamp {
            return Err(ChainError::TimestampNotIncreasing {
                requested: ts,
                current: self.timestamp,
            });
        }
        self.next_block_timestamp = Some(ts);
        Ok(())
    }

    /// Unlock `address` so the test process can sign as it.
    pub fn impersonate_account(&mut self, address: Address) {
        self.accounts.entry(address).or_default().unlocked = true;
        debug!("impersonating {address}");
    }

    /// Re-lock an impersonated account.  Local test accounts stay
    /// unlocked.
    pub fn stop_impersonating(&mut self, address: &Address) {
        if let Some(account) = self.accounts.get_mut(address) {
            if !account.local {
                account.unlocked = false;
            }
        }
    }

    /// Fixture helper: set a native balance directly.
    pub fn set_balance(&mut self, address: Address, balance: u128) {
        self.accounts.entry(address).or_default().balance = balance;
    }

    // ── Transactions ─────────────────────────────────────────────────

    /// Submit a transaction: mine it into exactly one new block,
    /// dispatch it against the contract registry, and return the
    /// receipt.  The synchronous return is the confirmation wait — the
    /// caller resumes only once the transaction is mined.
    ///
    /// On revert the contract registry and account balances are
    /// restored to their pre-transaction snapshot; the mined block
    /// remains.
    pub fn send_transaction(&mut self, tx: &TxRequest) -> Result<TxReceipt, ChainError> {
        let sender = self
            .accounts
            .get(&tx.from)
            .copied()
            .unwrap_or_default();
        if !sender.unlocked {
            return Err(ChainError::SenderLocked(tx.from));
        }
        if sender.balance < tx.value {
            return Err(ChainError::InsufficientValue {
                from: tx.from,
                value: tx.value,
            });
        }

        let registry_snapshot = self.registry.clone();
        let accounts_snapshot = self.accounts.clone();

        let mut header = self.mine_block(None)?;
        header.tx_count = 1;
        if let Some(last) = self.blocks.last_mut() {
            *last = header;
        }

        if tx.value > 0 {
            if let Some(from) = self.accounts.get_mut(&tx.from) {
                from.balance -= tx.value;
            }
            self.accounts.entry(tx.to).or_default().balance += tx.value;
        }

        let block = self.height;
        let now = self.timestamp;
        match self
            .registry
            .dispatch(tx.from, tx.to, &tx.signature, &tx.calldata, block, now)
        {
            Ok(()) => {
                self.tx_count += 1;
                Ok(TxReceipt {
                    block_number: block,
                    block_timestamp: now,
                    tx_index: self.tx_count - 1,
                })
            }
            Err(err) => {
                self.registry = registry_snapshot;
                self.accounts = accounts_snapshot;
                debug!("transaction to {} reverted: {err}", tx.to);
                Err(err)
            }
        }
    }
}
