use crate::*;

const GAS_FOR_WITHDRAW: Gas = Gas(100_000_000_000_000);

#[near_bindgen]
impl Contract {
    pub fn withdraw(&mut self, token_amount: WBalance) -> PromiseOrValue<WBalance> {
        require!(
            env::prepaid_gas() >= GAS_FOR_WITHDRAW,
            "Prepaid gas is not enough for withdraw flow"
        );
        let account_id = env::predecessor_account_id();
        if token_amount.0 == 0 {
            MarketError::AmountMustBeGreaterThanZero.panic();
        }
        if let Err(error) = self.accrue_interest() {
            error.panic();
        }

        let available = self.get_account_balance(account_id.clone());
        if token_amount.0 > available {
            MarketError::InsufficientBalance {
                available,
                requested: token_amount.0,
            }
            .panic();
        }

        self.mutex_account_lock(&account_id, "withdraw");

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(20))
            .withdraw_supplies(account_id.clone(), token_amount)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(50))
                    .withdraw_supplies_callback(account_id, token_amount),
            )
            .into()
    }

    #[private]
    pub fn withdraw_supplies_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<WBalance> {
        if !is_promise_success() {
            log!(
                "{}",
                Events::WithdrawFailedToDecreaseSupplyOnController(
                    account_id.clone(),
                    token_amount.0
                )
            );
            self.mutex_account_unlock(&account_id);
            return PromiseOrValue::Value(U128(0));
        }

        // shares and cash leave the books before the transfer; the transfer
        // callback restores them on failure
        let shares = self.underlying_to_shares(token_amount.0);
        self.burn(&account_id, U128(shares));
        self.decrease_contract_balance(token_amount.0);

        underlying_token::ext(self.get_underlying_contract_address())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(self.terra_gas(10))
            .ft_transfer(
                account_id.clone(),
                token_amount,
                Some(format!("Withdraw with token_amount {}", token_amount.0)),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(30))
                    .withdraw_ft_transfer_callback(account_id, token_amount, U128(shares)),
            )
            .into()
    }

    #[private]
    pub fn withdraw_ft_transfer_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
        shares: WBalance,
    ) -> PromiseOrValue<WBalance> {
        if is_promise_success() {
            self.mutex_account_unlock(&account_id);
            log!("{}", Events::WithdrawSuccess(account_id, token_amount.0));
            return PromiseOrValue::Value(token_amount);
        }

        self.mint(&account_id, shares);
        self.increase_contract_balance(token_amount.0);

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(10))
            .increase_supplies(account_id.clone(), token_amount)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(20))
                    .withdraw_fallback_callback(account_id, token_amount),
            )
            .into()
    }

    #[private]
    pub fn withdraw_fallback_callback(&mut self, account_id: AccountId, token_amount: WBalance) {
        if is_promise_success() {
            self.mutex_account_unlock(&account_id);
            log!(
                "{}",
                Events::WithdrawFallbackSuccess(account_id, token_amount.0)
            );
        } else {
            self.add_inconsistent_account(account_id.clone());
            log!(
                "{}",
                Events::WithdrawFailedToFallback(account_id, token_amount.0)
            );
        }
    }
}
