//! Contract registry and calldata dispatch.
//!
//! The registry owns every contract model deployed on the fork and
//! routes a `(target, signature, calldata)` triple to the right model
//! method, the way the node's EVM routes a transaction to contract
//! code.  Contract-model errors come back as [`ChainError::Revert`]
//! with the model's error text as the reason string.

use {
    crate::error::ChainError,
    borsh::BorshDeserialize,
    govfork_governor_program::{methods as gov, Governor},
    govfork_lending_program::{methods as lend, Distributor, Market, Token},
    govfork_primitives::Address,
    log::debug,
    std::collections::HashMap,
};

fn decode<T: BorshDeserialize>(signature: &str, calldata: &[u8]) -> Result<T, ChainError> {
    borsh::from_slice(calldata).map_err(|_| ChainError::BadCalldata {
        signature: signature.to_string(),
    })
}

/// Every contract deployed on the fork, keyed by address.
#[derive(Debug, Clone)]
pub struct ContractRegistry {
    governor_address: Address,
    governor: Governor,
    /// Governance token consulted for vote weight and paid out by the
    /// distributor.
    reward_token: Address,
    distributor_address: Address,
    distributor: Distributor,
    tokens: HashMap<Address, Token>,
    markets: HashMap<Address, Market>,
}

impl ContractRegistry {
    pub fn new(
        governor_address: Address,
        governor: Governor,
        reward_token: Address,
        distributor_address: Address,
        distributor: Distributor,
    ) -> Self {
        Self {
            governor_address,
            governor,
            reward_token,
            distributor_address,
            distributor,
            tokens: HashMap::new(),
            markets: HashMap::new(),
        }
    }

    pub fn add_token(&mut self, address: Address, token: Token) {
        self.tokens.insert(address, token);
    }

    pub fn add_market(&mut self, address: Address, market: Market) {
        self.markets.insert(address, market);
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn governor_address(&self) -> Address {
        self.governor_address
    }

    pub fn governor(&self) -> &Governor {
        &self.governor
    }

    pub fn distributor_address(&self) -> Address {
        self.distributor_address
    }

    pub fn distributor(&self) -> &Distributor {
        &self.distributor
    }

    pub fn reward_token_address(&self) -> Address {
        self.reward_token
    }

    pub fn token(&self, address: &Address) -> Result<&Token, ChainError> {
        self.tokens
            .get(address)
            .ok_or(ChainError::UnknownContract(*address))
    }

    pub fn token_mut(&mut self, address: &Address) -> Result<&mut Token, ChainError> {
        self.tokens
            .get_mut(address)
            .ok_or(ChainError::UnknownContract(*address))
    }

    pub fn market(&self, address: &Address) -> Result<&Market, ChainError> {
        self.markets
            .get(address)
            .ok_or(ChainError::UnknownContract(*address))
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Route one call.  `block`/`now` are the height and timestamp of
    /// the block the enclosing transaction was mined into.
    pub fn dispatch(
        &mut self,
        from: Address,
        to: Address,
        signature: &str,
        calldata: &[u8],
        block: u64,
        now: u64,
    ) -> Result<(), ChainError> {
        debug!("call {signature} on {to} from {from}");
        if to == self.governor_address {
            self.dispatch_governor(from, signature, calldata, block, now)
        } else if to == self.distributor_address {
            self.dispatch_distributor(from, signature, calldata, block, now)
        } else if self.tokens.contains_key(&to) {
            self.dispatch_token(from, to, signature, calldata, block)
        } else if self.markets.contains_key(&to) {
            self.dispatch_market(from, to, signature, calldata, block)
        } else {
            Err(ChainError::UnknownContract(to))
        }
    }

    fn dispatch_governor(
        &mut self,
        from: Address,
        signature: &str,
        calldata: &[u8],
        block: u64,
        now: u64,
    ) -> Result<(), ChainError> {
        let votes_token = self
            .tokens
            .get(&self.reward_token)
            .ok_or(ChainError::UnknownContract(self.reward_token))?
            .clone();
        let prior_votes = |who: Address, at: u64| votes_token.prior_votes(&who, at);

        match signature {
            gov::PROPOSE => {
                let args: gov::ProposeArgs = decode(signature, calldata)?;
                self.governor
                    .propose(
                        from,
                        args.targets,
                        args.values,
                        args.signatures,
                        args.calldatas,
                        args.description,
                        block,
                        now,
                        prior_votes,
                    )
                    .map_err(ChainError::revert)?;
                Ok(())
            }
            gov::CAST_VOTE => {
                let args: gov::CastVoteArgs = decode(signature, calldata)?;
                self.governor
                    .cast_vote(from, args.proposal_id, args.support, block, now, prior_votes)
                    .map_err(ChainError::revert)?;
                Ok(())
            }
            gov::QUEUE => {
                let args: gov::QueueArgs = decode(signature, calldata)?;
                self.governor
                    .queue(args.proposal_id, block, now)
                    .map_err(ChainError::revert)?;
                Ok(())
            }
            gov::EXECUTE => {
                let args: gov::ExecuteArgs = decode(signature, calldata)?;
                let actions = self
                    .governor
                    .execute(args.proposal_id, block, now)
                    .map_err(ChainError::revert)?;
                // Dispatch each queued action with the governor itself
                // as the caller, so admin-gated targets see it.
                let governor_address = self.governor_address;
                for action in actions {
                    if action.value > 0 {
                        return Err(ChainError::revert(
                            "value-bearing proposal actions are not modeled",
                        ));
                    }
                    self.dispatch(
                        governor_address,
                        action.target,
                        &action.signature,
                        &action.calldata,
                        block,
                        now,
                    )?;
                }
                Ok(())
            }
            gov::CANCEL => {
                let args: gov::CancelArgs = decode(signature, calldata)?;
                self.governor
                    .cancel(from, args.proposal_id, block, prior_votes)
                    .map_err(ChainError::revert)?;
                Ok(())
            }
            _ => Err(ChainError::UnknownMethod {
                target: self.governor_address,
                signature: signature.to_string(),
            }),
        }
    }

    fn dispatch_token(
        &mut self,
        from: Address,
        to: Address,
        signature: &str,
        calldata: &[u8],
        block: u64,
    ) -> Result<(), ChainError> {
        let token = self.token_mut(&to)?;
        match signature {
            lend::TRANSFER => {
                let args: lend::TransferArgs = decode(signature, calldata)?;
                token
                    .transfer(from, args.to, args.amount, block)
                    .map_err(ChainError::revert)
            }
            lend::APPROVE => {
                let args: lend::ApproveArgs = decode(signature, calldata)?;
                token.approve(from, args.spender, args.amount);
                Ok(())
            }
            lend::TRANSFER_FROM => {
                let args: lend::TransferFromArgs = decode(signature, calldata)?;
                token
                    .transfer_from(from, args.from, args.to, args.amount, block)
                    .map_err(ChainError::revert)
            }
            _ => Err(ChainError::UnknownMethod {
                target: to,
                signature: signature.to_string(),
            }),
        }
    }

    fn dispatch_market(
        &mut self,
        from: Address,
        to: Address,
        signature: &str,
        calldata: &[u8],
        block: u64,
    ) -> Result<(), ChainError> {
        let (underlying, total_shares, held_shares) = {
            let market = self.market(&to)?;
            (
                market.underlying(),
                market.total_supply(),
                market.balance_of(&from),
            )
        };
        // Settle the supplier against the reward index before the
        // share balance changes.
        self.distributor.update_supply_index(to, total_shares, block);
        self.distributor.distribute_supplier(to, from, held_shares);

        match signature {
            lend::MINT => {
                let args: lend::MintArgs = decode(signature, calldata)?;
                self.token_mut(&underlying)?
                    .transfer_from(to, from, to, args.amount, block)
                    .map_err(ChainError::revert)?;
                if let Some(market) = self.markets.get_mut(&to) {
                    market.deposit(from, args.amount);
                }
                Ok(())
            }
            lend::REDEEM => {
                let args: lend::RedeemArgs = decode(signature, calldata)?;
                let market = self
                    .markets
                    .get_mut(&to)
                    .ok_or(ChainError::UnknownContract(to))?;
                let out = market
                    .withdraw(from, args.share_amount)
                    .map_err(ChainError::revert)?;
                self.token_mut(&underlying)?
                    .transfer(to, from, out, block)
                    .map_err(ChainError::revert)
            }
            lend::BORROW => {
                let args: lend::BorrowArgs = decode(signature, calldata)?;
                let market = self
                    .markets
                    .get_mut(&to)
                    .ok_or(ChainError::UnknownContract(to))?;
                market
                    .borrow(from, args.amount)
                    .map_err(ChainError::revert)?;
                self.token_mut(&underlying)?
                    .transfer(to, from, args.amount, block)
                    .map_err(ChainError::revert)
            }
            _ => Err(ChainError::UnknownMethod {
                target: to,
                signature: signature.to_string(),
            }),
        }
    }

    fn dispatch_distributor(
        &mut self,
        from: Address,
        signature: &str,
        calldata: &[u8],
        block: u64,
        _now: u64,
    ) -> Result<(), ChainError> {
        match signature {
            lend::CLAIM_REWARDS => {
                let args: lend::ClaimRewardsArgs = decode(signature, calldata)?;
                let holdings: Vec<(Address, u128, u128)> = self
                    .markets
                    .iter()
                    .map(|(addr, market)| {
                        (*addr, market.total_supply(), market.balance_of(&args.holder))
                    })
                    .collect();
                for (market, total_shares, held) in holdings {
                    self.distributor.update_supply_index(market, total_shares, block);
                    self.distributor.distribute_supplier(market, args.holder, held);
                }
                let amount = self.distributor.claim(args.holder);
                if amount > 0 {
                    let distributor_address = self.distributor_address;
                    let reward_token = self.reward_token;
                    self.token_mut(&reward_token)?
                        .transfer(distributor_address, args.holder, amount, block)
                        .map_err(ChainError::revert)?;
                }
                debug!("claimed {amount} reward tokens for {}", args.holder);
                Ok(())
            }
            lend::SET_COMP_SPEEDS => {
                let args: lend::SetCompSpeedsArgs = decode(signature, calldata)?;
                if args.markets.len() != args.supply_speeds.len()
                    || args.markets.len() != args.borrow_speeds.len()
                {
                    return Err(ChainError::revert(
                        govfork_lending_program::LendingError::SpeedArityMismatch,
                    ));
                }
                for (market, speed) in args.markets.iter().zip(args.supply_speeds.iter()) {
                    let total_shares = self.market(market)?.total_supply();
                    self.distributor
                        .set_speed(from, *market, *speed, total_shares, block)
                        .map_err(ChainError::revert)?;
                }
                Ok(())
            }
            _ => Err(ChainError::UnknownMethod {
                target: self.distributor_address,
                signature: signature.to_string(),
            }),
        }
    }
}
