use crate::*;

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct MarketData {
    pub underlying_token: AccountId,
    pub total_supplies: WBalance,
    pub total_borrows: WBalance,
    pub contract_balance: WBalance,
    pub exchange_rate_ratio: WRatio,
    pub supply_rate_ratio: WRatio,
    pub borrow_rate_ratio: WRatio,
    pub borrow_index: WRatio,
}

#[near_bindgen]
impl Contract {
    pub fn view_total_supplies(&self) -> WBalance {
        WBalance::from(self.token.total_supply)
    }

    pub fn view_total_borrows(&self) -> WBalance {
        WBalance::from(self.total_borrows)
    }

    pub fn view_contract_balance(&self) -> WBalance {
        WBalance::from(self.contract_balance)
    }

    pub fn view_exchange_rate(&self) -> WRatio {
        WRatio::from(self.get_exchange_rate())
    }

    /// Share balance of `account_id` valued at the current exchange rate.
    pub fn view_account_balance(&self, account_id: AccountId) -> WBalance {
        WBalance::from(self.get_account_balance(account_id))
    }

    pub fn view_account_shares(&self, account_id: AccountId) -> WBalance {
        WBalance::from(self.get_account_shares(account_id))
    }

    /// Debt of `account_id` at the current borrow index.
    pub fn view_account_borrows(&self, account_id: AccountId) -> WBalance {
        WBalance::from(self.get_account_borrows(account_id))
    }

    pub fn view_market_data(&self) -> MarketData {
        let model = self.get_contract_config().interest_rate_model;
        let supply_rate = match model.get_supply_rate(self.contract_balance, self.total_borrows) {
            Ok(rate) => rate,
            Err(error) => error.panic(),
        };
        let borrow_rate = match model.get_borrow_rate(self.contract_balance, self.total_borrows) {
            Ok(rate) => rate,
            Err(error) => error.panic(),
        };

        MarketData {
            underlying_token: self.underlying_token.clone(),
            total_supplies: WBalance::from(self.token.total_supply),
            total_borrows: WBalance::from(self.total_borrows),
            contract_balance: WBalance::from(self.contract_balance),
            exchange_rate_ratio: WRatio::from(self.get_exchange_rate()),
            supply_rate_ratio: WRatio::from(supply_rate),
            borrow_rate_ratio: WRatio::from(borrow_rate),
            borrow_index: WRatio::from(self.borrow_index),
        }
    }
}
