use crate::*;
use std::collections::HashMap;

/// Borrow context last reported by a market, used to estimate the interest
/// accrued since the report.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Default)]
pub struct BorrowData {
    pub borrow_block: BlockHeight,
    pub borrow_rate: Ratio,
}

#[derive(Default, BorshDeserialize, BorshSerialize)]
pub struct UserProfile {
    /// Markets the account participates in, insertion-ordered, each at most
    /// once
    pub market_ids: Vec<AccountId>,

    /// Market address -> supplied principal, underlying units
    pub account_supplies: HashMap<AccountId, Balance>,

    /// Market address -> borrowed principal, underlying units
    pub account_borrows: HashMap<AccountId, Balance>,

    /// Market address -> last reported borrow context
    pub borrow_data: HashMap<AccountId, BorrowData>,
}

impl UserProfile {
    /// Idempotent, order-preserving registration.
    pub fn register_market(&mut self, market_id: &AccountId) {
        if !self.market_ids.contains(market_id) {
            self.market_ids.push(market_id.clone());
        }
    }

    pub fn set(&mut self, action: ActionType, market_id: AccountId, token_amount: Balance) {
        if let ActionType::Supply = action {
            *self.account_supplies.entry(market_id).or_default() = token_amount;
        } else {
            *self.account_borrows.entry(market_id).or_default() = token_amount;
        }
    }

    pub fn get(&self, action: ActionType, market_id: &AccountId) -> Balance {
        match action {
            ActionType::Supply => *self.account_supplies.get(market_id).unwrap_or(&0u128),
            ActionType::Borrow => *self.account_borrows.get(market_id).unwrap_or(&0u128),
        }
    }

    pub fn get_borrow_data(&self, market_id: &AccountId) -> BorrowData {
        self.borrow_data.get(market_id).cloned().unwrap_or_default()
    }

    pub fn set_borrow_data(&mut self, market_id: AccountId, data: BorrowData) {
        self.borrow_data.insert(market_id, data);
    }
}
