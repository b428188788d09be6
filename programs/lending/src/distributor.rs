//! Reward distributor: per-market speeds and supply indexes.

use {
    crate::error::LendingError,
    govfork_primitives::Address,
    log::{debug, trace},
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// Fixed-point scale of the supply index.
///
/// Kept at 10^9 so the largest intermediate —
/// `blocks × speed × INDEX_SCALE` — stays inside `u128` for realistic
/// speeds and horizons.
pub const INDEX_SCALE: u128 = 1_000_000_000;

/// Per-market global supply index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyIndex {
    pub index: u128,
    pub block: u64,
}

/// The reward engine of the lending protocol.
///
/// Each market has a reward **speed** (governance tokens per block,
/// 18-decimal).  The global supply index advances lazily by
/// `Δblocks × speed / total_shares`; each supplier settles against it
/// whenever their share balance is about to change, and `claim` pays
/// out whatever has accrued.
///
/// Speeds can only be changed by the admin — on the fork, the governor
/// — which is precisely the operation the proposal under test performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    admin: Address,
    speeds: HashMap<Address, u128>,
    supply_index: HashMap<Address, SupplyIndex>,
    supplier_index: HashMap<(Address, Address), u128>,
    accrued: HashMap<Address, u128>,
}

impl Distributor {
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            speeds: HashMap::new(),
            supply_index: HashMap::new(),
            supplier_index: HashMap::new(),
            accrued: HashMap::new(),
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn speed(&self, market: &Address) -> u128 {
        self.speeds.get(market).copied().unwrap_or(0)
    }

    pub fn accrued(&self, account: &Address) -> u128 {
        self.accrued.get(account).copied().unwrap_or(0)
    }

    /// Set a market's supply-side reward speed.  Admin only; the index
    /// is brought current first so past accrual keeps the old rate.
    pub fn set_speed(
        &mut self,
        caller: Address,
        market: Address,
        speed: u128,
        total_shares: u128,
        block: u64,
    ) -> Result<(), LendingError> {
        if caller != self.admin {
            return Err(LendingError::NotAdmin);
        }
        self.update_supply_index(market, total_shares, block);
        self.speeds.insert(market, speed);
        debug!("reward speed for {market} set to {speed}/block");
        Ok(())
    }

    /// Advance the market's global supply index to `block`.
    pub fn update_supply_index(&mut self, market: Address, total_shares: u128, block: u64) {
        let speed = self.speed(&market);
        let entry = self.supply_index.entry(market).or_insert(SupplyIndex {
            index: INDEX_SCALE,
            block,
        });
        let delta_blocks = block.saturating_sub(entry.block) as u128;
        if delta_blocks == 0 {
            return;
        }
        if speed > 0 && total_shares > 0 {
            let distributed = delta_blocks * speed;
            let ratio = distributed * INDEX_SCALE / total_shares;
            entry.index += ratio;
        }
        entry.block = block;
    }

    /// Settle `supplier`'s accrual against the market's current index.
    /// Must be called (after `update_supply_index`) before any change
    /// to the supplier's share balance.
    pub fn distribute_supplier(&mut self, market: Address, supplier: Address, share_balance: u128) {
        let Some(global) = self.supply_index.get(&market) else {
            return;
        };
        let supplier_idx = self
            .supplier_index
            .get(&(market, supplier))
            .copied()
            .unwrap_or(global.index);
        let delta = global.index.saturating_sub(supplier_idx);
        if delta > 0 && share_balance > 0 {
            let earned = share_balance * delta / INDEX_SCALE;
            *self.accrued.entry(supplier).or_insert(0) += earned;
            trace!("supplier {supplier} accrued {earned} on {market}");
        }
        self.supplier_index.insert((market, supplier), global.index);
    }

    /// Zero out and return the holder's accrued rewards.  The caller
    /// pays the amount out of the distributor's token balance.
    pub fn claim(&mut self, holder: Address) -> u128 {
        self.accrued.remove(&holder).unwrap_or(0)
    }
}
