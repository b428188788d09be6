//! The governor state machine.

use {
    crate::{
        constants::MAX_ACTIONS,
        error::GovernorError,
        state::{
            GovernorConfig, Proposal, ProposalAction, ProposalState, VoteReceipt, VoteSupport,
        },
    },
    govfork_primitives::Address,
    log::debug,
    std::collections::{BTreeMap, HashMap},
};

/// A deployed governor instance.
///
/// Every operation that depends on chain time takes the current block
/// height and timestamp explicitly; the governor itself holds no
/// clock.  Voting weight is resolved through a caller-supplied
/// `prior_votes(account, block)` lookup so the governor stays
/// independent of the token implementation.
#[derive(Debug, Clone)]
pub struct Governor {
    config: GovernorConfig,
    guardian: Address,
    proposal_count: u64,
    proposals: BTreeMap<u64, Proposal>,
    latest_by_proposer: HashMap<Address, u64>,
}

impl Governor {
    pub fn new(config: GovernorConfig, guardian: Address) -> Self {
        Self {
            config,
            guardian,
            proposal_count: 0,
            proposals: BTreeMap::new(),
            latest_by_proposer: HashMap::new(),
        }
    }

    // ── Views (the getters the deployed contract exposes) ────────────────

    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }

    pub fn voting_delay(&self) -> u64 {
        self.config.voting_delay
    }

    pub fn voting_period(&self) -> u64 {
        self.config.voting_period
    }

    pub fn timelock_delay(&self) -> u64 {
        self.config.timelock_delay
    }

    pub fn guardian(&self) -> Address {
        self.guardian
    }

    /// Id of the most recently created proposal; zero when none exist.
    pub fn proposal_count(&self) -> u64 {
        self.proposal_count
    }

    pub fn proposal(&self, id: u64) -> Result<&Proposal, GovernorError> {
        self.proposals.get(&id).ok_or(GovernorError::UnknownProposal)
    }

    /// Lifecycle state of proposal `id` at the given block and time.
    pub fn state(
        &self,
        id: u64,
        current_block: u64,
        now: u64,
    ) -> Result<ProposalState, GovernorError> {
        Ok(Self::state_of(&self.config, self.proposal(id)?, current_block, now))
    }

    fn state_of(
        config: &GovernorConfig,
        proposal: &Proposal,
        current_block: u64,
        now: u64,
    ) -> ProposalState {
        if proposal.canceled {
            ProposalState::Canceled
        } else if current_block <= proposal.start_block {
            ProposalState::Pending
        } else if current_block <= proposal.end_block {
            ProposalState::Active
        } else if proposal.for_votes <= proposal.against_votes
            || proposal.for_votes < config.quorum_votes
        {
            ProposalState::Defeated
        } else if proposal.eta == 0 {
            ProposalState::Succeeded
        } else if proposal.executed {
            ProposalState::Executed
        } else if now >= proposal.eta.saturating_add(config.grace_period) {
            ProposalState::Expired
        } else {
            ProposalState::Queued
        }
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Create a proposal.  The proposer's checkpointed votes at the
    /// previous block must exceed the proposal threshold.
    #[allow(clippy::too_many_arguments)]
    pub fn propose<F>(
        &mut self,
        proposer: Address,
        targets: Vec<Address>,
        values: Vec<u128>,
        signatures: Vec<String>,
        calldatas: Vec<Vec<u8>>,
        description: String,
        current_block: u64,
        now: u64,
        prior_votes: F,
    ) -> Result<u64, GovernorError>
    where
        F: Fn(Address, u64) -> u128,
    {
        if targets.len() != values.len()
            || targets.len() != signatures.len()
            || targets.len() != calldatas.len()
        {
            return Err(GovernorError::ActionArityMismatch);
        }
        if targets.is_empty() {
            return Err(GovernorError::NoActions);
        }
        if targets.len() > MAX_ACTIONS {
            return Err(GovernorError::TooManyActions);
        }
        if prior_votes(proposer, current_block.saturating_sub(1)) <= self.config.proposal_threshold
        {
            return Err(GovernorError::BelowProposalThreshold);
        }
        if let Some(&latest) = self.latest_by_proposer.get(&proposer) {
            if let Ok(prior) = self.proposal(latest) {
                match Self::state_of(&self.config, prior, current_block, now) {
                    ProposalState::Pending | ProposalState::Active => {
                        return Err(GovernorError::ProposerAlreadyActive)
                    }
                    _ => {}
                }
            }
        }

        let id = self.proposal_count + 1;
        self.proposal_count = id;
        let start_block = current_block + self.config.voting_delay;
        let end_block = start_block + self.config.voting_period;

        debug!(
            "proposal {id} created by {proposer}: {} action(s), voting blocks {}..={}",
            targets.len(),
            start_block + 1,
            end_block,
        );

        self.proposals.insert(
            id,
            Proposal {
                id,
                proposer,
                targets,
                values,
                signatures,
                calldatas,
                description,
                start_block,
                end_block,
                eta: 0,
                for_votes: 0,
                against_votes: 0,
                abstain_votes: 0,
                canceled: false,
                executed: false,
                receipts: HashMap::new(),
            },
        );
        self.latest_by_proposer.insert(proposer, id);
        Ok(id)
    }

    /// Cast a vote, weighted by the voter's checkpointed votes at the
    /// proposal's start block.  Returns the weight applied.
    pub fn cast_vote<F>(
        &mut self,
        voter: Address,
        id: u64,
        support: VoteSupport,
        current_block: u64,
        now: u64,
        prior_votes: F,
    ) -> Result<u128, GovernorError>
    where
        F: Fn(Address, u64) -> u128,
    {
        let config = self.config.clone();
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernorError::UnknownProposal)?;
        if Self::state_of(&config, proposal, current_block, now) != ProposalState::Active {
            return Err(GovernorError::VotingClosed);
        }
        if proposal.receipts.contains_key(&voter) {
            return Err(GovernorError::AlreadyVoted);
        }

        let weight = prior_votes(voter, proposal.start_block);
        match support {
            VoteSupport::For => proposal.for_votes += weight,
            VoteSupport::Against => proposal.against_votes += weight,
            VoteSupport::Abstain => proposal.abstain_votes += weight,
        }
        proposal.receipts.insert(
            voter,
            VoteReceipt {
                support,
                votes: weight,
                cast_block: current_block,
            },
        );
        debug!("vote {support:?} on proposal {id} by {voter}, weight {weight}");
        Ok(weight)
    }

    /// Queue a succeeded proposal into the timelock.  Returns the eta.
    pub fn queue(&mut self, id: u64, current_block: u64, now: u64) -> Result<u64, GovernorError> {
        let config = self.config.clone();
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernorError::UnknownProposal)?;
        if Self::state_of(&config, proposal, current_block, now) != ProposalState::Succeeded {
            return Err(GovernorError::QueueWrongState);
        }
        proposal.eta = now + config.timelock_delay;
        debug!("proposal {id} queued, eta {}", proposal.eta);
        Ok(proposal.eta)
    }

    /// Execute a queued proposal once its eta has passed.  Returns the
    /// actions for the chain to dispatch; the proposal is marked
    /// executed before dispatch so a revert must roll the mark back
    /// with the rest of the transaction.
    pub fn execute(
        &mut self,
        id: u64,
        current_block: u64,
        now: u64,
    ) -> Result<Vec<ProposalAction>, GovernorError> {
        let config = self.config.clone();
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernorError::UnknownProposal)?;
        match Self::state_of(&config, proposal, current_block, now) {
            ProposalState::Queued => {}
            ProposalState::Expired => return Err(GovernorError::ProposalExpired),
            ProposalState::Executed => return Err(GovernorError::AlreadyExecuted),
            _ => return Err(GovernorError::ExecuteWrongState),
        }
        if now < proposal.eta {
            return Err(GovernorError::TimelockNotExpired);
        }
        proposal.executed = true;
        debug!("proposal {id} executed at t={now}");
        Ok(proposal.actions())
    }

    /// Cancel a proposal.  Allowed for the guardian, or for anyone once
    /// the proposer's votes fell below the proposal threshold.
    pub fn cancel<F>(
        &mut self,
        caller: Address,
        id: u64,
        current_block: u64,
        prior_votes: F,
    ) -> Result<(), GovernorError>
    where
        F: Fn(Address, u64) -> u128,
    {
        let guardian = self.guardian;
        let threshold = self.config.proposal_threshold;
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernorError::UnknownProposal)?;
        if proposal.executed {
            return Err(GovernorError::AlreadyExecuted);
        }
        let proposer_fell_below =
            prior_votes(proposal.proposer, current_block.saturating_sub(1)) < threshold;
        if caller != guardian && !proposer_fell_below {
            return Err(GovernorError::CancelForbidden);
        }
        proposal.canceled = true;
        debug!("proposal {id} canceled by {caller}");
        Ok(())
    }
}
