use crate::*;

impl Contract {
    /// Repay entry. The applied amount is clamped to the debt at the current
    /// index; the clamped-off excess travels back through the unused-amount
    /// return value, so the token contract refunds it to the sender.
    pub fn repay(&mut self, account_id: AccountId, token_amount: WBalance) -> PromiseOrValue<U128> {
        if let Err(error) = self.accrue_interest() {
            error.panic();
        }

        let debt = self.get_account_borrows(account_id.clone());
        if debt == 0 {
            MarketError::NoOutstandingBorrow {
                account_id,
            }
            .panic();
        }

        let repay_amount = std::cmp::min(token_amount.0, debt);
        let unused_amount = token_amount.0 - repay_amount;

        if let Err(error) = self.decrease_account_borrows(account_id.clone(), repay_amount) {
            error.panic();
        }
        self.increase_contract_balance(repay_amount);
        let borrow_rate = self.current_borrow_rate();

        controller::ext(self.get_controller_address())
            .with_static_gas(self.terra_gas(10))
            .decrease_borrows(
                account_id.clone(),
                U128(repay_amount),
                WRatio::from(borrow_rate),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.terra_gas(20))
                    .controller_decrease_borrows_callback(
                        account_id,
                        U128(repay_amount),
                        U128(unused_amount),
                    ),
            )
            .into()
    }
}

#[near_bindgen]
impl Contract {
    #[private]
    pub fn controller_decrease_borrows_callback(
        &mut self,
        account_id: AccountId,
        repaid_amount: WBalance,
        unused_amount: WBalance,
    ) -> WBalance {
        if !is_promise_success() {
            log!(
                "{}",
                Events::RepayFailedToUpdateUserBalance(account_id.clone(), repaid_amount.0)
            );
            self.increase_account_borrows(account_id, repaid_amount.0);
            self.decrease_contract_balance(repaid_amount.0);
            // full refund: the local repayment was rolled back
            return U128(repaid_amount.0 + unused_amount.0);
        }
        log!("{}", Events::RepaySuccess(account_id, repaid_amount.0));
        unused_amount
    }
}
