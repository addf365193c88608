use crate::*;

impl Contract {
    /// Liquidation repayment leg: the incoming transfer from the liquidator
    /// repays part of the borrower's debt here, while the controller
    /// validates the position and orchestrates the seizure on the
    /// collateral market. The local debt reduction applies only after the
    /// controller chain succeeds; any failure refunds the liquidator.
    pub fn liquidate(
        &mut self,
        liquidator_id: AccountId,
        borrower_id: AccountId,
        collateral_market_id: AccountId,
        token_amount: WBalance,
    ) -> PromiseOrValue<U128> {
        if let Err(error) = self.accrue_interest() {
            error.panic();
        }

        let debt = self.get_account_borrows(borrower_id.clone());
        if debt == 0 {
            MarketError::NoOutstandingBorrow {
                account_id: borrower_id,
            }
            .panic();
        }
        require!(
            token_amount.0 <= debt,
            "Liquidation amount exceeds the borrower debt"
        );

        self.mutex_account_lock(&borrower_id, "liquidation");
        let borrow_rate = self.current_borrow_rate();

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(60))
            .liquidation(
                borrower_id.clone(),
                liquidator_id.clone(),
                collateral_market_id,
                token_amount,
                U128(debt),
                WRatio::from(borrow_rate),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(20))
                    .liquidation_callback(borrower_id, liquidator_id, token_amount),
            )
            .into()
    }
}

#[near_bindgen]
impl Contract {
    #[private]
    pub fn liquidation_callback(
        &mut self,
        borrower_id: AccountId,
        liquidator_id: AccountId,
        token_amount: WBalance,
    ) -> WBalance {
        if !is_promise_success() {
            log!(
                "{}",
                Events::LiquidationFailed(borrower_id.clone(), liquidator_id, token_amount.0)
            );
            self.mutex_account_unlock(&borrower_id);
            // refund the liquidator in full
            return token_amount;
        }

        if let Err(error) = self.decrease_account_borrows(borrower_id.clone(), token_amount.0) {
            error.panic();
        }
        self.increase_contract_balance(token_amount.0);
        self.mutex_account_unlock(&borrower_id);
        log!(
            "{}",
            Events::LiquidationSuccess(borrower_id, liquidator_id, token_amount.0)
        );
        U128(0)
    }

    /// Manager-authorized seizure: converts `token_amount` of underlying to
    /// shares at the current exchange rate and moves them from the borrower
    /// to the liquidator. No underlying asset moves.
    pub fn seize_supplies(
        &mut self,
        borrower_id: AccountId,
        liquidator_id: AccountId,
        token_amount: WBalance,
    ) {
        let caller = env::predecessor_account_id();
        if caller != self.get_controller_address() {
            MarketError::InvalidCaller { caller }.panic();
        }
        if let Err(error) = self.accrue_interest() {
            error.panic();
        }

        let shares = self.underlying_to_shares(token_amount.0);
        if shares == 0 {
            MarketError::AmountMustBeGreaterThanZero.panic();
        }
        let available = self.get_account_shares(borrower_id.clone());
        if shares > available {
            MarketError::InsufficientBalance {
                available,
                requested: shares,
            }
            .panic();
        }

        if self.token.accounts.get(&liquidator_id).is_none() {
            self.token.internal_register_account(&liquidator_id);
        }
        self.token.internal_transfer(&borrower_id, &liquidator_id, shares, None);
    }
}
