use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::{I128, U128};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{Balance, BlockHeight, Gas};

pub mod ratio;

pub const NO_DEPOSIT: Balance = 0;
pub const ONE_YOCTO: Balance = 1;
pub const TGAS: Gas = near_sdk::Gas::ONE_TERA;

pub type WBalance = U128;
pub type WRatio = U128;
pub type WPercent = U128;
pub type USD = U128;
pub type WSignedBalance = I128;

/// Latest observation of a price feed: USD per one unit of the asset,
/// scaled by `10^fraction_digits`.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct Price {
    /// Ticker the feed reports under
    pub ticker_id: String,

    /// Signed quote; consumers must reject non-positive values
    pub value: WSignedBalance,

    /// Decimal scale of `value`
    pub fraction_digits: u32,
}

#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct PriceJsonList {
    /// Block height the quotes were observed at
    pub block_height: BlockHeight,

    /// Quotes per ticker
    pub price_list: Vec<Price>,
}
