pub use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
pub use near_sdk::collections::{LazyOption, LookupMap, UnorderedMap};
pub use near_sdk::json_types::U128;
pub use near_sdk::serde::{Deserialize, Serialize};
pub use near_sdk::{
    env, ext_contract, near_bindgen, require, AccountId, Balance, BlockHeight, BorshStorageKey,
    PanicOnDefault, Promise,
};
pub use percentage::Percentage;

pub use general::ratio::{BigBalance, Ratio, RATIO_DECIMALS, U256};
pub use general::*;

pub use crate::borrows_supplies::ActionType;
pub use crate::config::Config;
pub use crate::errors::ControllerError;
pub use crate::liquidity::AccountLiquidity;
pub use crate::oraclehook::OraclePriceHandlerHook;
pub use crate::user_profile::{BorrowData, UserProfile};

mod admin;
mod borrows_supplies;
mod config;
mod errors;
mod liquidation;
mod liquidity;
mod oraclehook;
mod prices;
#[cfg(test)]
mod test_utils;
mod user_profile;
mod views;

#[ext_contract(market)]
pub trait MarketContract {
    fn seize_supplies(
        &mut self,
        borrower_id: AccountId,
        liquidator_id: AccountId,
        token_amount: WBalance,
    );
}

#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKeys {
    Markets,
    Prices,
    UserProfiles,
    Config,
}

/// Registry entry of one market under this controller.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct MarketProfile {
    /// Underlying asset account of the market
    pub underlying_id: AccountId,

    /// Ticker its price feed reports under
    pub ticker_id: String,

    /// Fraction of this market's value usable as borrowing power
    pub collateral_factor: Ratio,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    /// Registered markets by market account id
    pub markets: UnorderedMap<AccountId, MarketProfile>,

    /// Latest price per ticker
    pub prices: LookupMap<String, Price>,

    /// Per-account registration and balance mirror
    pub user_profiles: UnorderedMap<AccountId, UserProfile>,

    /// Share of an outstanding borrow a single liquidation may repay, percent
    pub close_factor: u128,

    /// Collateral-value bonus granted to liquidators, scaled 1e18
    pub liquidation_incentive: Ratio,

    pub config: LazyOption<Config>,

    pub admin: AccountId,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(config: Config) -> Self {
        require!(!env::state_exists(), "Contract is already initialized");

        Self {
            markets: UnorderedMap::new(StorageKeys::Markets),
            prices: LookupMap::new(StorageKeys::Prices),
            user_profiles: UnorderedMap::new(StorageKeys::UserProfiles),
            close_factor: 50,
            liquidation_incentive: Ratio::one(),
            config: LazyOption::new(StorageKeys::Config, Some(&config)),
            admin: config.owner_id.clone(),
        }
    }
}
