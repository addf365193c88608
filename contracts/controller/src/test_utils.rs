#![allow(dead_code)]

pub use crate::*;
pub use near_sdk::test_utils::test_env::{alice, bob, carol};

use near_sdk::test_utils::VMContextBuilder;
use near_sdk::testing_env;

pub const START_BLOCK: u64 = 100;

pub fn controller_account() -> AccountId {
    "controller.near".parse().unwrap()
}

pub fn owner_account() -> AccountId {
    "owner.near".parse().unwrap()
}

pub fn oracle_account() -> AccountId {
    "oracle.near".parse().unwrap()
}

pub fn weth_market() -> AccountId {
    "weth.market.near".parse().unwrap()
}

pub fn wnear_market() -> AccountId {
    "wnear.market.near".parse().unwrap()
}

pub fn unpriced_market() -> AccountId {
    "unpriced.market.near".parse().unwrap()
}

/// 0.01 per block, the rate markets report alongside borrow updates.
pub fn test_rate() -> WRatio {
    U128(RATIO_DECIMALS / 100)
}

pub fn set_env(predecessor: AccountId, block: u64) {
    testing_env!(VMContextBuilder::new()
        .current_account_id(controller_account())
        .signer_account_id(predecessor.clone())
        .predecessor_account_id(predecessor)
        .block_index(block)
        .build());
}

pub fn set_predecessor(account_id: AccountId) {
    set_env(account_id, START_BLOCK);
}

pub fn set_block(block: u64) {
    set_env(controller_account(), block);
}

pub fn add_market(
    controller: &mut Contract,
    market_id: AccountId,
    ticker_id: &str,
    collateral_factor: u128,
) {
    set_predecessor(owner_account());
    let underlying_id: AccountId = format!("{}.near", ticker_id).parse().unwrap();
    controller.add_market(
        market_id,
        underlying_id,
        ticker_id.to_string(),
        U128(collateral_factor),
    );
}

pub fn push_price(controller: &mut Contract, ticker_id: &str, value: i128, fraction_digits: u32) {
    set_predecessor(oracle_account());
    controller.oracle_on_data(PriceJsonList {
        block_height: START_BLOCK,
        price_list: vec![Price {
            ticker_id: ticker_id.to_string(),
            value: WSignedBalance::from(value),
            fraction_digits,
        }],
    });
}

/// Controller with two registered markets (collateral factors 0.8 and 0.5)
/// and both tickers quoted at one USD per unit.
pub fn init_test_env() -> (Contract, AccountId, AccountId) {
    set_predecessor(owner_account());
    let mut controller = Contract::new(Config {
        owner_id: owner_account(),
        oracle_account_id: oracle_account(),
    });

    add_market(&mut controller, weth_market(), "weth", 8 * RATIO_DECIMALS / 10);
    add_market(&mut controller, wnear_market(), "wnear", 5 * RATIO_DECIMALS / 10);
    push_price(&mut controller, "weth", 1, 0);
    push_price(&mut controller, "wnear", 1, 0);

    (controller, weth_market(), bob())
}
