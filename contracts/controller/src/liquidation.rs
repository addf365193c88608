use crate::*;

#[near_bindgen]
impl Contract {
    /// Validates a liquidation reported by the borrowing market and
    /// orchestrates the seizure: updates the three mirror positions and
    /// instructs the collateral market to move the seized shares.
    pub fn liquidation(
        &mut self,
        borrower_id: AccountId,
        liquidator_id: AccountId,
        collateral_market_id: AccountId,
        liquidation_amount: WBalance,
        borrower_debt: WBalance,
        borrow_rate: WRatio,
    ) -> Promise {
        let borrowing_market_id = self.assert_market_caller();

        let seize_amount = match self.calculate_seizure(
            &borrower_id,
            &liquidator_id,
            &borrowing_market_id,
            &collateral_market_id,
            liquidation_amount.0,
            borrower_debt.0,
        ) {
            Ok(amount) => amount,
            Err(error) => error.panic(),
        };

        self.decrease_borrows_internal(
            borrower_id.clone(),
            borrowing_market_id,
            liquidation_amount.0,
            borrow_rate,
        );
        self.decrease_supplies_internal(
            borrower_id.clone(),
            collateral_market_id.clone(),
            seize_amount,
        );
        self.increase_supplies_internal(
            liquidator_id.clone(),
            collateral_market_id.clone(),
            seize_amount,
        );

        market::ext(collateral_market_id)
            .with_static_gas(TGAS * 10u64)
            .seize_supplies(borrower_id, liquidator_id, U128(seize_amount))
    }
}

impl Contract {
    /// Collateral-asset underlying owed to the liquidator:
    /// `amount * incentive * price_borrowed / price_collateral`, with the
    /// close factor bounding how much of the debt one call may repay.
    pub fn calculate_seizure(
        &self,
        borrower_id: &AccountId,
        liquidator_id: &AccountId,
        borrowing_market_id: &AccountId,
        collateral_market_id: &AccountId,
        liquidation_amount: Balance,
        borrower_debt: Balance,
    ) -> Result<Balance, ControllerError> {
        if liquidator_id == borrower_id {
            return Err(ControllerError::CannotLiquidateSelf);
        }

        let (liquidity, shortfall) =
            self.get_hypothetical_account_liquidity_internal(borrower_id, None, 0, 0)?;
        if shortfall == 0 {
            return Err(ControllerError::AccountNotLiquidatable { liquidity });
        }

        let maximum = Percentage::from(self.close_factor).apply_to(borrower_debt);
        if liquidation_amount > maximum {
            return Err(ControllerError::LiquidationAmountExceedsCloseFactor {
                maximum,
                requested: liquidation_amount,
            });
        }

        let borrowing_profile =
            self.markets
                .get(borrowing_market_id)
                .ok_or_else(|| ControllerError::MarketNotFound {
                    market_id: borrowing_market_id.clone(),
                })?;
        let collateral_profile =
            self.markets
                .get(collateral_market_id)
                .ok_or_else(|| ControllerError::MarketNotFound {
                    market_id: collateral_market_id.clone(),
                })?;

        let repaid_usd = self.market_usd_value(&borrowing_profile, liquidation_amount)?;
        let seize_usd = self.liquidation_incentive.apply_to(repaid_usd);

        let collateral_price = self.get_valid_price(&collateral_profile.ticker_id)?;
        let seize_amount = (BigBalance::from(seize_usd)
            * 10u128.pow(collateral_price.fraction_digits)
            / (collateral_price.value.0 as u128))
            .round_u128();

        Ok(seize_amount)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use assert_matches::assert_matches;

    /// Borrower with 100 weth supplied (collateral 80) and a 100 wnear debt
    /// reported before the wnear price doubled, leaving it in shortfall.
    fn underwater_borrower() -> (Contract, AccountId) {
        let (mut controller, _, user_account) = init_test_env();

        set_predecessor(weth_market());
        controller.increase_supplies(user_account.clone(), U128(100));
        set_predecessor(wnear_market());
        controller.make_borrow(user_account.clone(), U128(60), test_rate());

        push_price(&mut controller, "wnear", 2, 0);

        (controller, user_account)
    }

    #[test]
    fn seizure_applies_incentive_and_prices() {
        let (mut controller, borrower) = underwater_borrower();
        controller.liquidation_incentive = Ratio(108 * RATIO_DECIMALS / 100);

        // repaying 10 wnear at price 2 with a 1.08 incentive seizes
        // 10 * 2 * 1.08 = 21.6 -> 21 weth at price 1
        let seize = controller
            .calculate_seizure(
                &borrower,
                &carol(),
                &wnear_market(),
                &weth_market(),
                10,
                120,
            )
            .unwrap();

        assert_eq!(seize, 21, "Seizure amount check has been failed");
    }

    #[test]
    fn healthy_accounts_cannot_be_liquidated() {
        let (mut controller, _, user_account) = init_test_env();

        set_predecessor(weth_market());
        controller.increase_supplies(user_account.clone(), U128(100));
        controller.make_borrow(user_account.clone(), U128(10), test_rate());

        assert_matches!(
            controller.calculate_seizure(
                &user_account,
                &carol(),
                &weth_market(),
                &weth_market(),
                5,
                10,
            ),
            Err(ControllerError::AccountNotLiquidatable { .. })
        );
    }

    #[test]
    fn close_factor_bounds_the_repaid_share() {
        let (controller, borrower) = underwater_borrower();

        // close factor 50 % of a 120 debt allows at most 60
        assert_matches!(
            controller.calculate_seizure(
                &borrower,
                &carol(),
                &wnear_market(),
                &weth_market(),
                61,
                120,
            ),
            Err(ControllerError::LiquidationAmountExceedsCloseFactor {
                maximum: 60,
                requested: 61
            })
        );
    }

    #[test]
    fn self_liquidation_is_rejected() {
        let (controller, borrower) = underwater_borrower();

        assert_matches!(
            controller.calculate_seizure(
                &borrower,
                &borrower,
                &wnear_market(),
                &weth_market(),
                10,
                120,
            ),
            Err(ControllerError::CannotLiquidateSelf)
        );
    }

    #[test]
    fn liquidation_moves_the_mirror_positions() {
        let (mut controller, borrower) = underwater_borrower();

        set_predecessor(wnear_market());
        controller.liquidation(
            borrower.clone(),
            carol(),
            weth_market(),
            U128(10),
            U128(120),
            test_rate(),
        );

        // repaid 10 of the 60 principal; seized 20 weth to carol at 1.0
        // incentive
        assert_eq!(
            controller.get_entity_by_market(ActionType::Borrow, &borrower, &wnear_market()),
            50
        );
        assert_eq!(
            controller.get_entity_by_market(ActionType::Supply, &borrower, &weth_market()),
            80
        );
        assert_eq!(
            controller.get_entity_by_market(ActionType::Supply, &carol(), &weth_market()),
            20
        );
    }
}
