use crate::*;

impl Contract {
    /// Deposit entry. The underlying tokens are already on the market
    /// account when the transfer hook fires, while `contract_balance` is
    /// incremented only after the mint, so shares are priced at the
    /// pre-deposit exchange rate and existing holders are unaffected.
    pub fn supply(&mut self, account_id: AccountId, token_amount: WBalance) -> PromiseOrValue<U128> {
        if let Err(error) = self.accrue_interest() {
            error.panic();
        }

        let shares = self.underlying_to_shares(token_amount.0);
        self.mint(&account_id, U128(shares));
        self.increase_contract_balance(token_amount.0);

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(10))
            .increase_supplies(account_id.clone(), token_amount)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(20))
                    .controller_increase_supplies_callback(account_id, token_amount, U128(shares)),
            )
            .into()
    }
}

#[near_bindgen]
impl Contract {
    #[private]
    pub fn controller_increase_supplies_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
        shares: WBalance,
    ) -> WBalance {
        if !is_promise_success() {
            log!(
                "{}",
                Events::SupplyFailedToIncreaseSupplyOnController(account_id.clone(), token_amount.0)
            );
            self.burn(&account_id, shares);
            self.decrease_contract_balance(token_amount.0);
            // the unused-amount return value makes the token refund the sender
            return token_amount;
        }
        log!("{}", Events::SupplySuccess(account_id, token_amount.0));
        U128(0)
    }
}
