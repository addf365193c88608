pub use near_contract_standards::fungible_token::FungibleToken;
pub use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
pub use near_sdk::collections::{LazyOption, UnorderedMap, UnorderedSet};
pub use near_sdk::json_types::U128;
pub use near_sdk::serde::{Deserialize, Serialize};
pub use near_sdk::{
    env, ext_contract, is_promise_success, log, near_bindgen, require, AccountId, Balance,
    BlockHeight, BorshStorageKey, Gas, PanicOnDefault, PromiseOrValue,
};

pub use general::ratio::{BigBalance, Ratio, RATIO_DECIMALS, U256};
pub use general::*;

pub use crate::common::Events;
pub use crate::config::Config;
pub use crate::errors::MarketError;
pub use crate::ft::Actions;
pub use crate::interest_rate_model::InterestRateModel;
pub use crate::user_flow_protection::ActionMutex;
pub use crate::user_profile::UserProfile;
pub use crate::views::MarketData;

mod accrual;
mod admin;
mod borrow;
mod common;
mod config;
mod errors;
mod ft;
mod interest_rate_model;
mod liquidation;
mod repay;
mod supply;
#[cfg(test)]
mod test_utils;
mod user_flow_protection;
mod user_profile;
mod views;
mod withdraw;

#[ext_contract(controller)]
pub trait ControllerContract {
    fn increase_supplies(&mut self, account_id: AccountId, token_amount: WBalance);
    fn withdraw_supplies(&mut self, account_id: AccountId, token_amount: WBalance);
    fn make_borrow(&mut self, account_id: AccountId, token_amount: WBalance, borrow_rate: WRatio);
    fn decrease_borrows(&mut self, account_id: AccountId, token_amount: WBalance, borrow_rate: WRatio);
    fn liquidation(
        &mut self,
        borrower_id: AccountId,
        liquidator_id: AccountId,
        collateral_market_id: AccountId,
        liquidation_amount: WBalance,
        borrower_debt: WBalance,
        borrow_rate: WRatio,
    );
}

#[ext_contract(underlying_token)]
pub trait UnderlyingTokenContract {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: WBalance, memo: Option<String>);
}

#[ext_contract(ext_self)]
pub trait MarketCallbacks {
    fn controller_increase_supplies_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
        shares: WBalance,
    ) -> WBalance;
    fn withdraw_supplies_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<WBalance>;
    fn withdraw_ft_transfer_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
        shares: WBalance,
    ) -> PromiseOrValue<WBalance>;
    fn withdraw_fallback_callback(&mut self, account_id: AccountId, token_amount: WBalance);
    fn make_borrow_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<WBalance>;
    fn borrow_ft_transfer_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<WBalance>;
    fn controller_decrease_borrows_fail_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    );
    fn controller_decrease_borrows_callback(
        &mut self,
        account_id: AccountId,
        repaid_amount: WBalance,
        unused_amount: WBalance,
    ) -> WBalance;
    fn liquidation_callback(
        &mut self,
        borrower_id: AccountId,
        liquidator_id: AccountId,
        token_amount: WBalance,
    ) -> WBalance;
}

#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKeys {
    UserProfiles,
    Token,
    Config,
    Mutex,
    InconsistentAccounts,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    /// Account of the underlying asset this market serves
    pub underlying_token: AccountId,

    /// Idle underlying liquidity held by the market
    pub contract_balance: Balance,

    /// Outstanding principal plus accrued interest across all borrowers
    pub total_borrows: Balance,

    /// Cumulative interest-growth accumulator since market inception
    pub borrow_index: Ratio,

    /// Block of the last interest accrual
    pub last_accrual_block: BlockHeight,

    /// Borrow snapshot per account
    pub user_profiles: UnorderedMap<AccountId, UserProfile>,

    /// Share ledger
    pub token: FungibleToken,

    pub config: LazyOption<Config>,

    pub admin: AccountId,

    /// Accounts with a multi-receipt flow in progress
    pub mutex: ActionMutex,

    /// Accounts whose compensating rollback failed; blocked until cleared
    pub inconsistent_accounts: UnorderedSet<AccountId>,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(config: Config) -> Self {
        require!(!env::state_exists(), "Contract is already initialized");

        config.interest_rate_model.assert_valid();

        Self {
            underlying_token: config.underlying_token_id.clone(),
            contract_balance: 0,
            total_borrows: 0,
            borrow_index: Ratio::one(),
            last_accrual_block: env::block_height(),
            user_profiles: UnorderedMap::new(StorageKeys::UserProfiles),
            token: FungibleToken::new(StorageKeys::Token),
            config: LazyOption::new(StorageKeys::Config, Some(&config)),
            admin: config.owner_id.clone(),
            mutex: ActionMutex::new(StorageKeys::Mutex),
            inconsistent_accounts: UnorderedSet::new(StorageKeys::InconsistentAccounts),
        }
    }
}
