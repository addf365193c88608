use crate::*;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct Market {
    pub market_id: AccountId,
    pub underlying_id: AccountId,
    pub ticker_id: String,
    pub collateral_factor: WRatio,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct AccountData {
    pub account_id: AccountId,
    pub total_supplies: USD,
    pub total_borrows: USD,
    pub liquidity: USD,
    pub shortfall: USD,
}

impl Contract {
    /// Undiscounted USD value of the account's recorded supplies.
    pub fn get_total_supplies(&self, account_id: AccountId) -> Balance {
        let profile = self.user_profiles.get(&account_id).unwrap_or_default();
        profile
            .market_ids
            .iter()
            .map(|market_id| {
                let market_profile = self.get_market_profile(market_id);
                let amount = profile.get(ActionType::Supply, market_id);
                match self.market_usd_value(&market_profile, amount) {
                    Ok(value) => value,
                    Err(error) => error.panic(),
                }
            })
            .sum()
    }

    /// USD value of the account's recorded borrows, without the accrual
    /// estimate.
    pub fn get_total_borrows(&self, account_id: AccountId) -> Balance {
        let profile = self.user_profiles.get(&account_id).unwrap_or_default();
        profile
            .market_ids
            .iter()
            .map(|market_id| {
                let market_profile = self.get_market_profile(market_id);
                let amount = profile.get(ActionType::Borrow, market_id);
                match self.market_usd_value(&market_profile, amount) {
                    Ok(value) => value,
                    Err(error) => error.panic(),
                }
            })
            .sum()
    }
}

#[near_bindgen]
impl Contract {
    pub fn view_total_supplies(&self, account_id: AccountId) -> USD {
        USD::from(self.get_total_supplies(account_id))
    }

    pub fn view_total_borrows(&self, account_id: AccountId) -> USD {
        USD::from(self.get_total_borrows(account_id))
    }

    pub fn view_markets(&self) -> Vec<Market> {
        self.markets
            .iter()
            .map(|(market_id, profile)| Market {
                market_id,
                underlying_id: profile.underlying_id,
                ticker_id: profile.ticker_id,
                collateral_factor: WRatio::from(profile.collateral_factor),
            })
            .collect()
    }

    pub fn view_accounts(&self, account_ids: Vec<AccountId>) -> Vec<AccountData> {
        account_ids
            .iter()
            .map(|account_id| {
                let (liquidity, shortfall) = match self
                    .get_hypothetical_account_liquidity_internal(account_id, None, 0, 0)
                {
                    Ok(result) => result,
                    Err(error) => error.panic(),
                };
                AccountData {
                    account_id: account_id.clone(),
                    total_supplies: USD::from(self.get_total_supplies(account_id.clone())),
                    total_borrows: USD::from(self.get_total_borrows(account_id.clone())),
                    liquidity: USD::from(liquidity),
                    shortfall: USD::from(shortfall),
                }
            })
            .collect()
    }

    pub fn view_prices(&self, ticker_ids: Vec<String>) -> HashMap<String, Price> {
        ticker_ids
            .into_iter()
            .filter_map(|ticker_id| {
                self.get_price(&ticker_id)
                    .map(|price| (ticker_id, price))
            })
            .collect()
    }
}
