//! Chain-time controller: block-height and wall-clock advancement.

use {
    crate::error::HarnessError,
    govfork_chain::ForkChain,
    log::warn,
    std::time::{Duration, Instant},
};

/// Emit a liveness warning when a stepwise advance has been running
/// longer than this.  Observational only; never affects control flow.
pub const LIVENESS_WARN_AFTER: Duration = Duration::from_secs(5);

/// How `advance_block_to` reaches its target height.
///
/// Injected by the caller rather than read from ambient configuration,
/// so a test decides explicitly which path it exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvanceStrategy {
    /// One bulk `increase_blocks` call.
    Bulk,
    /// Mine one block at a time until the target is reached.
    #[default]
    Stepwise,
}

/// Current block height.
pub fn latest_block(chain: &ForkChain) -> u64 {
    chain.height()
}

/// Timestamp of the latest block.
pub fn time_latest(chain: &ForkChain) -> u64 {
    chain.timestamp()
}

/// Advance the chain until `height ≥ target`.
///
/// Fails with [`HarnessError::InvalidTarget`] when `target` is below
/// the current height — chain time only moves forward.  A no-op when
/// the target equals the current height.
pub fn advance_block_to(
    chain: &mut ForkChain,
    strategy: AdvanceStrategy,
    target: u64,
) -> Result<(), HarnessError> {
    let current = chain.height();
    if target < current {
        return Err(HarnessError::InvalidTarget { target, current });
    }
    match strategy {
        AdvanceStrategy::Bulk => chain.increase_blocks(target - current)?,
        AdvanceStrategy::Stepwise => {
            let started = Instant::now();
            let mut warned = false;
            while chain.height() < target {
                if !warned && started.elapsed() >= LIVENESS_WARN_AFTER {
                    warned = true;
                    warn!(
                        "advance_block_to: still mining toward block {target} (at {}); \
                         advancing this many blocks is slow",
                        chain.height()
                    );
                }
                chain.mine_block(None)?;
            }
        }
    }
    Ok(())
}

/// Shift the chain clock forward by `secs` and mine exactly one block
/// so the new timestamp becomes observable.
pub fn increase_time(chain: &mut ForkChain, secs: u64) -> Result<(), HarnessError> {
    chain.increase_time(secs);
    chain.mine_block(None)?;
    Ok(())
}

/// Pin the next block's timestamp to exactly `ts` and mine that one
/// block.  Fails when `ts` is not in the future.
pub fn set_next_block_timestamp(chain: &mut ForkChain, ts: u64) -> Result<(), HarnessError> {
    chain.set_next_block_timestamp(ts)?;
    chain.mine_block(None)?;
    Ok(())
}

/// Relative form of [`set_next_block_timestamp`]: the next block lands
/// at exactly `current + secs`.
pub fn advance_time_and_block(chain: &mut ForkChain, secs: u64) -> Result<(), HarnessError> {
    let future = chain.timestamp() + secs;
    set_next_block_timestamp(chain, future)
}
