//! Proposal lifecycle driver.

use {
    crate::{
        error::HarnessError,
        mine::{advance_block_to, increase_time, AdvanceStrategy},
        signers::SignerContext,
    },
    govfork_chain::{ForkChain, TxReceipt, TxRequest},
    govfork_governor_program::{methods as gov, ProposalState, VoteSupport},
    govfork_primitives::Address,
    log::info,
};

/// A proposal as the test runner hands it in: the four parallel action
/// lists plus the description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProposalDraft {
    pub targets: Vec<Address>,
    pub values: Vec<u128>,
    pub signatures: Vec<String>,
    pub calldatas: Vec<Vec<u8>>,
    pub description: String,
}

impl ProposalDraft {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Self::default()
        }
    }

    /// Append one action to the parallel lists.
    pub fn with_action(
        mut self,
        target: Address,
        value: u128,
        signature: &str,
        calldata: Vec<u8>,
    ) -> Self {
        self.targets.push(target);
        self.values.push(value);
        self.signatures.push(signature.to_string());
        self.calldatas.push(calldata);
        self
    }
}

/// One lifecycle run: who proposes, who votes For, and what is
/// proposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleRun {
    /// Role that submits the proposal.
    pub proposer: String,
    /// Roles that each cast a For vote.
    pub voters: Vec<String>,
    pub draft: ProposalDraft,
}

/// Current lifecycle state of proposal `id`.
pub fn proposal_state(chain: &ForkChain, id: u64) -> Result<ProposalState, HarnessError> {
    Ok(chain
        .registry()
        .governor()
        .state(id, chain.height(), chain.timestamp())?)
}

/// Submit the draft from the proposer role; returns the proposal id
/// once the transaction is mined.
pub fn submit_proposal(
    chain: &mut ForkChain,
    ctx: &SignerContext,
    run: &LifecycleRun,
) -> Result<u64, HarnessError> {
    let proposer = ctx.address(&run.proposer)?;
    let governor = chain.registry().governor_address();
    chain.send_transaction(&TxRequest::call(
        proposer,
        governor,
        gov::PROPOSE,
        &gov::ProposeArgs {
            targets: run.draft.targets.clone(),
            values: run.draft.values.clone(),
            signatures: run.draft.signatures.clone(),
            calldatas: run.draft.calldatas.clone(),
            description: run.draft.description.clone(),
        },
    ))?;
    let id = chain.registry().governor().proposal_count();
    info!("proposal {id} submitted by role {:?}", run.proposer);
    Ok(id)
}

/// Queue a succeeded proposal.  A revert is reported as a queue-stage
/// failure and never retried.
pub fn queue_proposal(
    chain: &mut ForkChain,
    from: Address,
    id: u64,
) -> Result<TxReceipt, HarnessError> {
    let governor = chain.registry().governor_address();
    chain
        .send_transaction(&TxRequest::call(
            from,
            governor,
            gov::QUEUE,
            &gov::QueueArgs { proposal_id: id },
        ))
        .map_err(|e| HarnessError::QueueStage {
            reason: e.to_string(),
        })
}

/// Execute a queued proposal.  A revert is reported as an
/// execute-stage failure and never retried.
pub fn execute_proposal(
    chain: &mut ForkChain,
    from: Address,
    id: u64,
) -> Result<TxReceipt, HarnessError> {
    let governor = chain.registry().governor_address();
    chain
        .send_transaction(&TxRequest::call(
            from,
            governor,
            gov::EXECUTE,
            &gov::ExecuteArgs { proposal_id: id },
        ))
        .map_err(|e| HarnessError::ExecuteStage {
            reason: e.to_string(),
        })
}

/// Drive a proposal through its whole lifecycle and return the final
/// state.
///
/// Steps run strictly in order, each blocking until its transaction is
/// mined:
///
/// 1. submit from the proposer role;
/// 2. advance past the governor's voting delay;
/// 3. cast a For vote from every voter role;
/// 4. advance past the voting period;
/// 5. stop early (returning the interpreted state) unless the proposal
///    succeeded — a defeated proposal is never queued;
/// 6. queue, then mine one extra block and advance the clock by the
///    governor's timelock delay;
/// 7. execute.
///
/// The voting delay, voting period, and timelock delay are read from
/// the deployed governor, not from local constants.
pub fn run_proposal_lifecycle(
    chain: &mut ForkChain,
    ctx: &SignerContext,
    strategy: AdvanceStrategy,
    run: &LifecycleRun,
) -> Result<ProposalState, HarnessError> {
    let proposer = ctx.address(&run.proposer)?;

    let id = submit_proposal(chain, ctx, run)?;

    // Voting opens once the delay has passed.
    let voting_delay = chain.registry().governor().voting_delay();
    let current = chain.height();
    advance_block_to(chain, strategy, current + voting_delay + 1)?;

    let governor = chain.registry().governor_address();
    for role in &run.voters {
        let voter = ctx.address(role)?;
        chain.send_transaction(&TxRequest::call(
            voter,
            governor,
            gov::CAST_VOTE,
            &gov::CastVoteArgs {
                proposal_id: id,
                support: VoteSupport::For,
            },
        ))?;
        info!("role {role:?} voted For on proposal {id}");
    }

    // Close the voting window.
    let voting_period = chain.registry().governor().voting_period();
    let current = chain.height();
    advance_block_to(chain, strategy, current + voting_period)?;

    let state = proposal_state(chain, id)?;
    if state != ProposalState::Succeeded {
        info!("proposal {id} finished voting in state {state}; not queueing");
        return Ok(state);
    }

    queue_proposal(chain, proposer, id)?;
    info!("proposal {id} queued");

    let current = chain.height();
    advance_block_to(chain, strategy, current + 1)?;
    let timelock_delay = chain.registry().governor().timelock_delay();
    increase_time(chain, timelock_delay)?;

    execute_proposal(chain, proposer, id)?;
    info!("proposal {id} executed");

    proposal_state(chain, id)
}
