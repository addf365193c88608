#![allow(dead_code)]

pub use crate::*;
pub use near_contract_standards::fungible_token::receiver::FungibleTokenReceiver;
pub use near_sdk::test_utils::test_env::{alice, bob, carol};

use near_sdk::serde_json;
use near_sdk::test_utils::VMContextBuilder;
use near_sdk::{testing_env, PromiseResult, RuntimeFeesConfig, VMConfig};
use std::collections::HashMap;

pub const START_BLOCK: u64 = 100;

pub fn market_account() -> AccountId {
    "market.near".parse().unwrap()
}

pub fn underlying() -> AccountId {
    "weth.near".parse().unwrap()
}

pub fn controller_account() -> AccountId {
    "controller.near".parse().unwrap()
}

pub fn test_model() -> InterestRateModel {
    InterestRateModel::new(
        Ratio(2 * RATIO_DECIMALS / 100),
        Ratio(15 * RATIO_DECIMALS / 100),
        Ratio(RATIO_DECIMALS / 2),
        Ratio(10 * RATIO_DECIMALS / 100),
    )
}

pub fn test_config() -> Config {
    Config {
        underlying_token_id: underlying(),
        owner_id: market_account(),
        controller_account_id: controller_account(),
        interest_rate_model: test_model(),
    }
}

pub fn set_env(predecessor: AccountId, block: u64) {
    testing_env!(VMContextBuilder::new()
        .current_account_id(market_account())
        .signer_account_id(predecessor.clone())
        .predecessor_account_id(predecessor)
        .block_index(block)
        .build());
}

pub fn set_block(block: u64) {
    set_env(market_account(), block);
}

/// Entry points guarded by a prepaid-gas check need an explicit allowance.
pub fn set_env_with_gas(predecessor: AccountId, block: u64) {
    testing_env!(VMContextBuilder::new()
        .current_account_id(market_account())
        .signer_account_id(predecessor.clone())
        .predecessor_account_id(predecessor)
        .block_index(block)
        .prepaid_gas(Gas(300_000_000_000_000))
        .build());
}

pub fn set_predecessor(account_id: AccountId) {
    set_env(account_id, START_BLOCK);
}

/// Re-enters the environment as a callback receipt carrying one promise
/// result, so `#[private]` callbacks can be driven directly.
pub fn set_promise_result(predecessor: AccountId, success: bool) {
    set_promise_result_at(predecessor, START_BLOCK, success);
}

pub fn set_promise_result_at(predecessor: AccountId, block: u64, success: bool) {
    let result = if success {
        PromiseResult::Successful(vec![])
    } else {
        PromiseResult::Failed
    };
    testing_env!(
        VMContextBuilder::new()
            .current_account_id(market_account())
            .signer_account_id(predecessor.clone())
            .predecessor_account_id(predecessor)
            .block_index(block)
            .build(),
        VMConfig::test(),
        RuntimeFeesConfig::test(),
        HashMap::default(),
        vec![result]
    );
}

pub fn init_market(block: u64) -> Contract {
    set_env(market_account(), block);
    Contract::new(test_config())
}

pub fn init_market_with_borrows(cash: Balance, borrows: Balance, block: u64) -> Contract {
    let mut contract = init_market(block);
    contract.contract_balance = cash;
    contract.total_borrows = borrows;
    contract
}

pub fn supply_msg() -> String {
    serde_json::to_string(&Actions::Supply).unwrap()
}

pub fn repay_msg() -> String {
    serde_json::to_string(&Actions::Repay).unwrap()
}

pub fn liquidate_msg(borrower_id: AccountId, collateral_market_id: AccountId) -> String {
    serde_json::to_string(&Actions::Liquidate {
        borrower_id,
        collateral_market_id,
    })
    .unwrap()
}
