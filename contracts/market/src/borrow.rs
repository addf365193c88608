use crate::*;

const GAS_FOR_BORROW: Gas = Gas(120_000_000_000_000);

#[near_bindgen]
impl Contract {
    pub fn borrow(&mut self, token_amount: WBalance) -> PromiseOrValue<WBalance> {
        require!(
            env::prepaid_gas() >= GAS_FOR_BORROW,
            "Prepaid gas is not enough for borrow flow"
        );
        let account_id = env::predecessor_account_id();
        if token_amount.0 == 0 {
            MarketError::AmountMustBeGreaterThanZero.panic();
        }
        if let Err(error) = self.accrue_interest() {
            error.panic();
        }
        if token_amount.0 > self.contract_balance {
            MarketError::BorrowAmountExceedsAvailable {
                available: self.contract_balance,
                requested: token_amount.0,
            }
            .panic();
        }

        let borrow_rate = self.current_borrow_rate();
        self.mutex_account_lock(&account_id, "borrow");

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(20))
            .make_borrow(account_id.clone(), token_amount, WRatio::from(borrow_rate))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(60))
                    .make_borrow_callback(account_id, token_amount),
            )
            .into()
    }

    #[private]
    pub fn make_borrow_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<WBalance> {
        if !is_promise_success() {
            log!(
                "{}",
                Events::BorrowFailedToIncreaseBorrowOnController(account_id.clone(), token_amount.0)
            );
            self.mutex_account_unlock(&account_id);
            return PromiseOrValue::Value(U128(0));
        }

        // debt and cash are finalized before the outbound transfer; the
        // transfer callback compensates on failure
        self.increase_account_borrows(account_id.clone(), token_amount.0);
        self.decrease_contract_balance(token_amount.0);

        underlying_token::ext(self.get_underlying_contract_address())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(self.terra_gas(10))
            .ft_transfer(
                account_id.clone(),
                token_amount,
                Some(format!("Borrow with token_amount {}", token_amount.0)),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(30))
                    .borrow_ft_transfer_callback(account_id, token_amount),
            )
            .into()
    }

    #[private]
    pub fn borrow_ft_transfer_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<WBalance> {
        if is_promise_success() {
            self.mutex_account_unlock(&account_id);
            log!("{}", Events::BorrowSuccess(account_id, token_amount.0));
            return PromiseOrValue::Value(token_amount);
        }

        if let Err(error) = self.decrease_account_borrows(account_id.clone(), token_amount.0) {
            error.panic();
        }
        self.increase_contract_balance(token_amount.0);
        let borrow_rate = self.current_borrow_rate();

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(10))
            .decrease_borrows(account_id.clone(), token_amount, WRatio::from(borrow_rate))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(20))
                    .controller_decrease_borrows_fail_callback(account_id, token_amount),
            )
            .into()
    }

    #[private]
    pub fn controller_decrease_borrows_fail_callback(
        &mut self,
        account_id: AccountId,
        token_amount: WBalance,
    ) {
        if is_promise_success() {
            self.mutex_account_unlock(&account_id);
            log!(
                "{}",
                Events::BorrowFallbackSuccess(account_id, token_amount.0)
            );
        } else {
            self.add_inconsistent_account(account_id.clone());
            log!(
                "{}",
                Events::BorrowFailedToFallback(account_id, token_amount.0)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    fn market_with_approved_borrow(amount: u128) -> Contract {
        let mut contract = init_market_with_borrows(1000, 0, START_BLOCK);
        set_promise_result(market_account(), true);
        contract.make_borrow_callback(bob(), U128(amount));
        contract
    }

    #[test]
    fn approved_borrow_records_debt_before_the_transfer() {
        let contract = market_with_approved_borrow(400);

        assert_eq!(
            contract.get_account_borrows(bob()),
            400,
            "Borrow snapshot check has been failed"
        );
        assert_eq!(contract.total_borrows, 400);
        assert_eq!(contract.contract_balance, 600);
    }

    #[test]
    fn rejected_borrow_leaves_the_market_untouched() {
        let mut contract = init_market_with_borrows(1000, 0, START_BLOCK);

        set_promise_result(market_account(), false);
        contract.make_borrow_callback(bob(), U128(400));

        assert_eq!(
            contract.get_account_borrows(bob()),
            0,
            "A rejected borrow changed the snapshot"
        );
        assert_eq!(
            contract.total_borrows, 0,
            "A rejected borrow changed total borrows"
        );
        assert_eq!(contract.contract_balance, 1000);
        assert!(!contract.mutex.is_locked(&bob()));
    }

    #[test]
    fn failed_transfer_rolls_the_borrow_back() {
        let mut contract = market_with_approved_borrow(400);

        set_promise_result(market_account(), false);
        contract.borrow_ft_transfer_callback(bob(), U128(400));

        assert_eq!(contract.get_account_borrows(bob()), 0);
        assert_eq!(contract.total_borrows, 0);
        assert_eq!(contract.contract_balance, 1000);
    }

    #[test]
    fn failed_compensation_flags_the_account() {
        let mut contract = market_with_approved_borrow(400);

        set_promise_result(market_account(), false);
        contract.borrow_ft_transfer_callback(bob(), U128(400));
        contract.controller_decrease_borrows_fail_callback(bob(), U128(400));

        assert!(contract.is_account_inconsistent(&bob()));
    }

    #[test]
    #[should_panic(expected = "Borrow amount exceeds available liquidity")]
    fn borrowing_more_than_cash_is_rejected() {
        let mut contract = init_market_with_borrows(300, 0, START_BLOCK);

        set_env_with_gas(bob(), START_BLOCK);
        contract.borrow(U128(400));
    }
}
