use crate::*;

#[near_bindgen]
impl Contract {
    pub fn get_admin(&self) -> AccountId {
        self.admin.clone()
    }

    pub fn set_admin(&mut self, account_id: AccountId) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        self.admin = account_id;
    }

    pub fn add_market(
        &mut self,
        market_id: AccountId,
        underlying_id: AccountId,
        ticker_id: String,
        collateral_factor: WRatio,
    ) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        require!(
            collateral_factor.0 <= RATIO_DECIMALS,
            "Collateral factor should not exceed one"
        );

        self.markets.insert(
            &market_id,
            &MarketProfile {
                underlying_id,
                ticker_id,
                collateral_factor: Ratio::from(collateral_factor),
            },
        );
    }

    pub fn remove_market(&mut self, market_id: AccountId) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        require!(
            self.markets.get(&market_id).is_some(),
            "Market by this key doesnt exist"
        );

        self.markets.remove(&market_id);
    }

    pub fn set_collateral_factor(&mut self, market_id: AccountId, collateral_factor: WRatio) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        require!(
            collateral_factor.0 <= RATIO_DECIMALS,
            "Collateral factor should not exceed one"
        );

        let mut market_profile = self.get_market_profile(&market_id);
        market_profile.collateral_factor = Ratio::from(collateral_factor);
        self.markets.insert(&market_id, &market_profile);
    }

    pub fn set_close_factor(&mut self, close_factor: WPercent) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        require!(
            close_factor.0 <= 100,
            "Close factor should not exceed one hundred percent"
        );

        self.close_factor = close_factor.0;
    }

    pub fn set_liquidation_incentive(&mut self, liquidation_incentive: WRatio) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        require!(
            liquidation_incentive.0 >= RATIO_DECIMALS,
            "Liquidation incentive should be at least one"
        );

        self.liquidation_incentive = Ratio::from(liquidation_incentive);
    }

    pub fn get_close_factor(&self) -> WPercent {
        WPercent::from(self.close_factor)
    }

    pub fn get_liquidation_incentive(&self) -> WRatio {
        WRatio::from(self.liquidation_incentive)
    }
}

impl Contract {
    pub fn is_valid_admin_call(&self) -> bool {
        env::predecessor_account_id() == self.admin
            || env::predecessor_account_id() == env::current_account_id()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn get_set_admin() {
        let (controller, _, _) = init_test_env();

        assert_eq!(controller.admin, controller.get_admin());
        assert_eq!(owner_account(), controller.get_admin());
    }

    #[test]
    fn close_factor_within_bounds_is_accepted() {
        let (mut controller, _, _) = init_test_env();

        set_predecessor(owner_account());
        controller.set_close_factor(U128(75));

        assert_eq!(controller.get_close_factor(), U128(75));
    }

    #[test]
    #[should_panic(expected = "Close factor should not exceed one hundred percent")]
    fn close_factor_above_one_hundred_is_rejected() {
        let (mut controller, _, _) = init_test_env();

        set_predecessor(owner_account());
        controller.set_close_factor(U128(101));
    }

    #[test]
    fn liquidation_incentive_within_bounds_is_accepted() {
        let (mut controller, _, _) = init_test_env();

        set_predecessor(owner_account());
        controller.set_liquidation_incentive(U128(108 * RATIO_DECIMALS / 100));

        assert_eq!(
            controller.get_liquidation_incentive(),
            U128(108 * RATIO_DECIMALS / 100)
        );
    }

    #[test]
    #[should_panic(expected = "Liquidation incentive should be at least one")]
    fn liquidation_incentive_below_one_is_rejected() {
        let (mut controller, _, _) = init_test_env();

        set_predecessor(owner_account());
        controller.set_liquidation_incentive(U128(RATIO_DECIMALS - 1));
    }

    #[test]
    #[should_panic(expected = "Collateral factor should not exceed one")]
    fn collateral_factor_above_one_is_rejected() {
        let (mut controller, _, _) = init_test_env();

        set_predecessor(owner_account());
        controller.set_collateral_factor(weth_market(), U128(RATIO_DECIMALS + 1));
    }

    #[test]
    #[should_panic(expected = "allowed to be called by admin or contract only")]
    fn non_admin_cannot_change_parameters() {
        let (mut controller, _, user_account) = init_test_env();

        set_predecessor(user_account);
        controller.set_close_factor(U128(75));
    }
}
