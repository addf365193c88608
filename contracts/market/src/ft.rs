use crate::*;

use near_contract_standards::fungible_token::receiver::FungibleTokenReceiver;
use near_sdk::serde_json;

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub enum Actions {
    Supply,
    Repay,
    Liquidate {
        borrower_id: AccountId,
        collateral_market_id: AccountId,
    },
}

#[near_bindgen]
impl FungibleTokenReceiver for Contract {
    /// Receives a transfer from the underlying fungible token and routes it
    /// by the attached command. The tokens are already on the market account
    /// when this hook runs; a panic reverts the transfer as a whole.
    fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        require!(
            env::predecessor_account_id() == self.underlying_token,
            "The call should come from the underlying token account"
        );
        if amount.0 == 0 {
            MarketError::AmountMustBeGreaterThanZero.panic();
        }

        let action: Actions = serde_json::from_str(&msg)
            .unwrap_or_else(|_| env::panic_str("Incorrect command in transfer"));

        match action {
            Actions::Supply => self.supply(sender_id, amount),
            Actions::Repay => self.repay(sender_id, amount),
            Actions::Liquidate {
                borrower_id,
                collateral_market_id,
            } => self.liquidate(sender_id, borrower_id, collateral_market_id, amount),
        }
    }
}
