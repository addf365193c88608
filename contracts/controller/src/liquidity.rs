use crate::*;

/// Result of an account-wide liquidity computation, USD-denominated.
/// At most one of the two fields is nonzero.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub struct AccountLiquidity {
    pub liquidity: USD,
    pub shortfall: USD,
}

impl Contract {
    /// USD value of `amount` of the asset behind a market, rounding down.
    pub fn market_usd_value(
        &self,
        market_profile: &MarketProfile,
        amount: Balance,
    ) -> Result<Balance, ControllerError> {
        let price = self.get_valid_price(&market_profile.ticker_id)?;
        let value = price.value.0 as u128;
        Ok((BigBalance::from(amount) * value / 10u128.pow(price.fraction_digits)).round_u128())
    }

    /// Interest estimated to have accrued on the recorded principal since
    /// the market last reported: `principal * rate * blocks`.
    fn estimated_accrued_interest(&self, profile: &UserProfile, market_id: &AccountId) -> Balance {
        let principal = profile.get(ActionType::Borrow, market_id);
        if principal == 0 {
            return 0;
        }
        let data = profile.get_borrow_data(market_id);
        let elapsed = env::block_height().saturating_sub(data.borrow_block) as u128;
        let factor = Ratio(
            data.borrow_rate
                .0
                .checked_mul(elapsed)
                .expect("interest factor overflow"),
        );
        factor.apply_to(principal)
    }

    /// Hypothetical debt added to the target market: the requested borrow at
    /// face value plus the redeemed collateral at its discounted value. Both
    /// land on the debt side, so the sums never underflow.
    fn hypothetical_effects(
        &self,
        market_profile: &MarketProfile,
        redeem_amount: Balance,
        borrow_amount: Balance,
    ) -> Result<Balance, ControllerError> {
        let borrow_value = self.market_usd_value(market_profile, borrow_amount)?;
        let redeem_value = market_profile
            .collateral_factor
            .apply_to(self.market_usd_value(market_profile, redeem_amount)?);
        Ok(borrow_value
            .checked_add(redeem_value)
            .expect("hypothetical effects overflow"))
    }

    /// Walks the account's registered markets in insertion order, valuing
    /// collateral (discounted by each market's collateral factor) against
    /// debt, with the hypothetical `redeem_amount`/`borrow_amount` applied
    /// to the target market. Returns `(liquidity, shortfall)`; at most one
    /// is nonzero. Any price-feed problem is fatal to the whole computation.
    pub fn get_hypothetical_account_liquidity_internal(
        &self,
        account_id: &AccountId,
        target_market_id: Option<&AccountId>,
        redeem_amount: Balance,
        borrow_amount: Balance,
    ) -> Result<(Balance, Balance), ControllerError> {
        let profile = self.user_profiles.get(account_id).unwrap_or_default();
        let mut collateral_usd: Balance = 0;
        let mut debt_usd: Balance = 0;
        let mut target_found = false;

        for market_id in profile.market_ids.iter() {
            let market_profile =
                self.markets
                    .get(market_id)
                    .ok_or_else(|| ControllerError::MarketNotFound {
                        market_id: market_id.clone(),
                    })?;

            let supply_value =
                self.market_usd_value(&market_profile, profile.get(ActionType::Supply, market_id))?;
            collateral_usd = collateral_usd
                .checked_add(market_profile.collateral_factor.apply_to(supply_value))
                .expect("collateral value overflow");

            let borrows = profile
                .get(ActionType::Borrow, market_id)
                .checked_add(self.estimated_accrued_interest(&profile, market_id))
                .expect("estimated borrows overflow");
            debt_usd = debt_usd
                .checked_add(self.market_usd_value(&market_profile, borrows)?)
                .expect("debt value overflow");

            if target_market_id == Some(market_id) {
                target_found = true;
                debt_usd = debt_usd
                    .checked_add(self.hypothetical_effects(
                        &market_profile,
                        redeem_amount,
                        borrow_amount,
                    )?)
                    .expect("debt value overflow");
            }
        }

        // a first borrow can target a market the account never supplied to
        if let Some(target) = target_market_id {
            if !target_found {
                let market_profile =
                    self.markets
                        .get(target)
                        .ok_or_else(|| ControllerError::MarketNotFound {
                            market_id: target.clone(),
                        })?;
                debt_usd = debt_usd
                    .checked_add(self.hypothetical_effects(
                        &market_profile,
                        redeem_amount,
                        borrow_amount,
                    )?)
                    .expect("debt value overflow");
            }
        }

        Ok(if collateral_usd >= debt_usd {
            (collateral_usd - debt_usd, 0)
        } else {
            (0, debt_usd - collateral_usd)
        })
    }
}

#[near_bindgen]
impl Contract {
    pub fn get_account_liquidity(&self, account_id: AccountId) -> AccountLiquidity {
        match self.get_hypothetical_account_liquidity_internal(&account_id, None, 0, 0) {
            Ok((liquidity, shortfall)) => AccountLiquidity {
                liquidity: U128(liquidity),
                shortfall: U128(shortfall),
            },
            Err(error) => error.panic(),
        }
    }

    pub fn get_hypothetical_account_liquidity(
        &self,
        account_id: AccountId,
        target_market_id: AccountId,
        redeem_amount: WBalance,
        borrow_amount: WBalance,
    ) -> AccountLiquidity {
        match self.get_hypothetical_account_liquidity_internal(
            &account_id,
            Some(&target_market_id),
            redeem_amount.0,
            borrow_amount.0,
        ) {
            Ok((liquidity, shortfall)) => AccountLiquidity {
                liquidity: U128(liquidity),
                shortfall: U128(shortfall),
            },
            Err(error) => error.panic(),
        }
    }
}
