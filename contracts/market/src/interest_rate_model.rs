use crate::*;

/// Single-slope linear rate model. All parameters are per-block values
/// scaled by 1e18.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct InterestRateModel {
    base_rate_per_block: Ratio,
    multiplier_per_block: Ratio,
    borrow_rate_max: Ratio,
    reserve_factor: Ratio,
}

impl Default for InterestRateModel {
    fn default() -> Self {
        Self {
            base_rate_per_block: Ratio::zero(),
            multiplier_per_block: Ratio::zero(),
            borrow_rate_max: Ratio::one(),
            reserve_factor: Ratio::zero(),
        }
    }
}

impl InterestRateModel {
    pub fn new(
        base_rate_per_block: Ratio,
        multiplier_per_block: Ratio,
        borrow_rate_max: Ratio,
        reserve_factor: Ratio,
    ) -> Self {
        let model = Self {
            base_rate_per_block,
            multiplier_per_block,
            borrow_rate_max,
            reserve_factor,
        };
        model.assert_valid();
        model
    }

    pub fn assert_valid(&self) {
        require!(
            self.reserve_factor < Ratio::one(),
            "Reserve factor should be less than one"
        );
        require!(
            self.borrow_rate_max > self.base_rate_per_block,
            "Borrow rate ceiling should exceed the base rate"
        );
    }

    pub fn get_base_rate_per_block(&self) -> Ratio {
        self.base_rate_per_block
    }

    pub fn get_multiplier_per_block(&self) -> Ratio {
        self.multiplier_per_block
    }

    pub fn get_borrow_rate_max(&self) -> Ratio {
        self.borrow_rate_max
    }

    pub fn get_reserve_factor(&self) -> Ratio {
        self.reserve_factor
    }

    /// Fraction of pool assets currently lent out, zero when nothing is
    /// borrowed.
    pub fn get_util(&self, underlying_balance: Balance, total_borrows: Balance) -> Ratio {
        if total_borrows == 0 {
            return Ratio::zero();
        }
        let total = underlying_balance
            .checked_add(total_borrows)
            .expect("pool assets overflow");
        Ratio((U256::from(total_borrows) * U256::from(RATIO_DECIMALS) / U256::from(total)).as_u128())
    }

    /// Per-block borrow rate. The ceiling is a hard bound: a rate at or
    /// above it is an error, never a clamp.
    pub fn get_borrow_rate(
        &self,
        underlying_balance: Balance,
        total_borrows: Balance,
    ) -> Result<Ratio, MarketError> {
        let util = self.get_util(underlying_balance, total_borrows);
        let rate = self.base_rate_per_block + util * self.multiplier_per_block;
        if rate >= self.borrow_rate_max {
            return Err(MarketError::BorrowRateExceedsMax {
                rate,
                max: self.borrow_rate_max,
            });
        }
        Ok(rate)
    }

    /// Per-block rate accruing to suppliers after the reserve share.
    pub fn get_supply_rate(
        &self,
        underlying_balance: Balance,
        total_borrows: Balance,
    ) -> Result<Ratio, MarketError> {
        let borrow_rate = self.get_borrow_rate(underlying_balance, total_borrows)?;
        let util = self.get_util(underlying_balance, total_borrows);
        Ok(util * borrow_rate * (Ratio::one() - self.reserve_factor))
    }
}
