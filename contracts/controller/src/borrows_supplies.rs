use crate::borrows_supplies::ActionType::{Borrow, Supply};
use crate::*;

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(crate = "near_sdk::serde")]
pub enum ActionType {
    Supply,
    Borrow,
}

#[near_bindgen]
impl Contract {
    /// Reported by a market after minting shares for a deposit. Registers
    /// the account with this market as a side effect.
    pub fn increase_supplies(&mut self, account_id: AccountId, token_amount: WBalance) {
        let market_id = self.assert_market_caller();
        self.increase_supplies_internal(account_id, market_id, token_amount.0);
    }

    /// Withdrawal guard plus mirror decrement: rejects a withdrawal that
    /// would leave the account in shortfall across its markets.
    pub fn withdraw_supplies(&mut self, account_id: AccountId, token_amount: WBalance) -> WBalance {
        let market_id = self.assert_market_caller();

        match self.get_hypothetical_account_liquidity_internal(
            &account_id,
            Some(&market_id),
            token_amount.0,
            0,
        ) {
            Err(error) => error.panic(),
            Ok((_, shortfall)) => {
                if shortfall > 0 {
                    ControllerError::WithdrawalNotAllowed { shortfall }.panic();
                }
            }
        }

        WBalance::from(self.decrease_supplies_internal(account_id, market_id, token_amount.0))
    }

    /// Borrow authorization: rejects the borrow when the hypothetical
    /// position has a shortfall, otherwise records it in the mirror.
    pub fn make_borrow(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
        borrow_rate: WRatio,
    ) {
        let market_id = self.assert_market_caller();

        match self.get_hypothetical_account_liquidity_internal(
            &account_id,
            Some(&market_id),
            0,
            token_amount.0,
        ) {
            Err(error) => error.panic(),
            Ok((_, shortfall)) => {
                if shortfall > 0 {
                    let available = match self
                        .get_hypothetical_account_liquidity_internal(&account_id, None, 0, 0)
                    {
                        Ok((liquidity, _)) => liquidity,
                        Err(error) => error.panic(),
                    };
                    let market_profile = self.get_market_profile(&market_id);
                    let requested = match self.market_usd_value(&market_profile, token_amount.0) {
                        Ok(value) => value,
                        Err(error) => error.panic(),
                    };
                    ControllerError::BorrowAmountExceedsAvailable {
                        available,
                        requested,
                    }
                    .panic();
                }
            }
        }

        self.increase_borrows_internal(account_id, market_id, token_amount.0, borrow_rate);
    }

    /// Reported by a market after a repayment or a borrow rollback.
    pub fn decrease_borrows(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
        borrow_rate: WRatio,
    ) -> WBalance {
        let market_id = self.assert_market_caller();
        WBalance::from(self.decrease_borrows_internal(
            account_id,
            market_id,
            token_amount.0,
            borrow_rate,
        ))
    }
}

impl Contract {
    pub fn assert_market_caller(&self) -> AccountId {
        let caller = env::predecessor_account_id();
        if self.markets.get(&caller).is_none() {
            ControllerError::InvalidCaller { caller }.panic();
        }
        caller
    }

    pub fn get_market_profile(&self, market_id: &AccountId) -> MarketProfile {
        match self.markets.get(market_id) {
            Some(profile) => profile,
            None => ControllerError::MarketNotFound {
                market_id: market_id.clone(),
            }
            .panic(),
        }
    }

    pub fn get_entity_by_market(
        &self,
        action: ActionType,
        account_id: &AccountId,
        market_id: &AccountId,
    ) -> Balance {
        let profile = self.user_profiles.get(account_id).unwrap_or_default();
        profile.get(action, market_id)
    }

    pub fn set_entity_by_market(
        &mut self,
        action: ActionType,
        account_id: AccountId,
        market_id: AccountId,
        token_amount: Balance,
    ) -> Balance {
        let mut profile = self.user_profiles.get(&account_id).unwrap_or_default();
        profile.register_market(&market_id);
        profile.set(action, market_id, token_amount);
        self.user_profiles.insert(&account_id, &profile);

        token_amount
    }

    pub fn increase_supplies_internal(
        &mut self,
        account_id: AccountId,
        market_id: AccountId,
        token_amount: Balance,
    ) -> Balance {
        let existing = self.get_entity_by_market(Supply, &account_id, &market_id);
        let increased = existing
            .checked_add(token_amount)
            .expect("recorded supplies overflow");

        self.set_entity_by_market(Supply, account_id, market_id, increased)
    }

    /// The mirror tracks principal; a withdrawal can legitimately exceed it
    /// by the interest earned since, so the record floors at zero.
    pub fn decrease_supplies_internal(
        &mut self,
        account_id: AccountId,
        market_id: AccountId,
        token_amount: Balance,
    ) -> Balance {
        let existing = self.get_entity_by_market(Supply, &account_id, &market_id);
        let decreased = existing.saturating_sub(token_amount);

        self.set_entity_by_market(Supply, account_id, market_id, decreased)
    }

    pub fn increase_borrows_internal(
        &mut self,
        account_id: AccountId,
        market_id: AccountId,
        token_amount: Balance,
        borrow_rate: WRatio,
    ) -> Balance {
        let existing = self.get_entity_by_market(Borrow, &account_id, &market_id);
        let increased = existing
            .checked_add(token_amount)
            .expect("recorded borrows overflow");

        let mut profile = self.user_profiles.get(&account_id).unwrap_or_default();
        // the original report block stays while debt is open, so the accrual
        // estimate keeps covering the whole period
        let borrow_block = if existing == 0 {
            env::block_height()
        } else {
            profile.get_borrow_data(&market_id).borrow_block
        };
        profile.set_borrow_data(
            market_id.clone(),
            BorrowData {
                borrow_block,
                borrow_rate: Ratio::from(borrow_rate),
            },
        );
        self.user_profiles.insert(&account_id, &profile);

        self.set_entity_by_market(Borrow, account_id, market_id, increased)
    }

    /// A repayment covers principal plus accrued interest, so it can exceed
    /// the recorded principal; the record floors at zero.
    pub fn decrease_borrows_internal(
        &mut self,
        account_id: AccountId,
        market_id: AccountId,
        token_amount: Balance,
        borrow_rate: WRatio,
    ) -> Balance {
        let existing = self.get_entity_by_market(Borrow, &account_id, &market_id);
        let decreased = existing.saturating_sub(token_amount);

        let mut profile = self.user_profiles.get(&account_id).unwrap_or_default();
        let rate = if decreased == 0 {
            Ratio::zero()
        } else {
            Ratio::from(borrow_rate)
        };
        profile.set_borrow_data(
            market_id.clone(),
            BorrowData {
                borrow_block: env::block_height(),
                borrow_rate: rate,
            },
        );
        self.user_profiles.insert(&account_id, &profile);

        self.set_entity_by_market(Borrow, account_id, market_id, decreased)
    }
}
