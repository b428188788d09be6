//! Test helpers: fork construction, signer setup, and the supply →
//! hold → redeem → claim flow the verification tests run before and
//! after the proposal.

use {
    crate::fixtures,
    govfork_chain::{ContractRegistry, ForkChain, ForkConfig, TxRequest},
    govfork_governor_program::{Governor, GovernorConfig},
    govfork_harness::{advance_block_to, AdvanceStrategy, SignerContext},
    govfork_lending_program::{methods as lend, Distributor, Market, Token},
    govfork_primitives::Address,
};

/// Initialize env_logger once for test output.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// A bare fork at the given height with an empty protocol; used by the
/// chain-time tests.
pub fn fork_at(fork_block: u64) -> ForkChain {
    let governor_addr = Address::new_unique();
    ForkChain::new(
        ForkConfig {
            fork_block,
            ..ForkConfig::default()
        },
        ContractRegistry::new(
            governor_addr,
            Governor::new(GovernorConfig::default(), Address::new_unique()),
            Address::new_unique(),
            Address::new_unique(),
            Distributor::new(governor_addr),
        ),
    )
}

/// Build the forked-mainnet snapshot: governor, governance token with
/// checkpointed holders, the TUSD token and market, and a comptroller
/// holding reward reserves but emitting at speed zero.
pub fn forked_mainnet() -> ForkChain {
    let mut comp = Token::with_vote_checkpoints("COMP", 18);
    comp.seed(fixtures::a16z(), fixtures::A16Z_VOTES, fixtures::FORK_BLOCK);
    comp.seed(fixtures::blck(), fixtures::BLCK_VOTES, fixtures::FORK_BLOCK);
    comp.seed(
        fixtures::comptroller(),
        fixtures::COMPTROLLER_COMP_RESERVE,
        fixtures::FORK_BLOCK,
    );

    let mut tusd = Token::new("TUSD", 18);
    tusd.seed(fixtures::tusd_whale(), fixtures::WHALE_TUSD, fixtures::FORK_BLOCK);

    let mut registry = ContractRegistry::new(
        fixtures::governor(),
        Governor::new(fixtures::governor_config(), Address::new_unique()),
        fixtures::comp(),
        fixtures::comptroller(),
        // The governor administers reward speeds.
        Distributor::new(fixtures::governor()),
    );
    registry.add_token(fixtures::comp(), comp);
    registry.add_token(fixtures::tusd(), tusd);
    registry.add_market(fixtures::ctusd(), Market::new("cTUSD", fixtures::tusd()));

    ForkChain::new(
        ForkConfig {
            fork_block: fixtures::FORK_BLOCK,
            fork_timestamp: fixtures::FORK_TIMESTAMP,
            ..ForkConfig::default()
        },
        registry,
    )
}

/// Impersonate the three mainnet roles every scenario uses.
pub fn standard_signers(chain: &mut ForkChain) -> SignerContext {
    SignerContext::impersonate(
        chain,
        &[
            ("proposer", fixtures::blck()),
            ("a16z", fixtures::a16z()),
            ("tusd_whale", fixtures::tusd_whale()),
        ],
    )
}

/// Outcome of one supply → hold → redeem → claim round.
#[derive(Debug, Clone, Copy)]
pub struct SupplyRound {
    /// Reward-token balance of the account after claiming.
    pub reward_balance: u128,
    /// Block the supply was mined in.
    pub mint_block: u64,
    /// Block the redemption was mined in.
    pub redeem_block: u64,
}

/// Run the flow the original verification scripts ran around the
/// proposal: fund the account with TUSD from the whale, supply it to
/// the market, hold for `hold_blocks`, redeem everything, and claim
/// rewards.
pub fn supply_tusd_and_claim(
    chain: &mut ForkChain,
    account: Address,
    amount: u128,
    hold_blocks: u64,
) -> SupplyRound {
    let whale = fixtures::tusd_whale();
    chain.impersonate_account(whale);

    // Fund the account if it is short.
    let held = chain
        .registry()
        .token(&fixtures::tusd())
        .unwrap()
        .balance_of(&account);
    if held < amount {
        chain
            .send_transaction(&TxRequest::call(
                whale,
                fixtures::tusd(),
                lend::TRANSFER,
                &lend::TransferArgs {
                    to: account,
                    amount: amount - held,
                },
            ))
            .expect("whale transfer");
    }

    // Supply to the market.
    chain
        .send_transaction(&TxRequest::call(
            account,
            fixtures::tusd(),
            lend::APPROVE,
            &lend::ApproveArgs {
                spender: fixtures::ctusd(),
                amount,
            },
        ))
        .expect("approve");
    let mint = chain
        .send_transaction(&TxRequest::call(
            account,
            fixtures::ctusd(),
            lend::MINT,
            &lend::MintArgs { amount },
        ))
        .expect("mint");

    // Hold, then exit.
    let target = chain.height() + hold_blocks;
    advance_block_to(chain, AdvanceStrategy::Bulk, target).expect("advance");

    let shares = chain
        .registry()
        .market(&fixtures::ctusd())
        .unwrap()
        .balance_of(&account);
    let redeem = chain
        .send_transaction(&TxRequest::call(
            account,
            fixtures::ctusd(),
            lend::REDEEM,
            &lend::RedeemArgs {
                share_amount: shares,
            },
        ))
        .expect("redeem");

    // Claim whatever accrued.
    chain
        .send_transaction(&TxRequest::call(
            account,
            fixtures::comptroller(),
            lend::CLAIM_REWARDS,
            &lend::ClaimRewardsArgs { holder: account },
        ))
        .expect("claim");

    SupplyRound {
        reward_balance: chain
            .registry()
            .token(&fixtures::comp())
            .unwrap()
            .balance_of(&account),
        mint_block: mint.block_number,
        redeem_block: redeem.block_number,
    }
}
