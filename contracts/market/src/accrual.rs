use crate::*;

impl Contract {
    /// Advances `borrow_index` and `total_borrows` by the interest
    /// accumulated over the blocks elapsed since the last accrual, at the
    /// current borrow rate. Idempotent within a block.
    pub fn accrue_interest(&mut self) -> Result<(), MarketError> {
        let current_block = env::block_height();
        if current_block == self.last_accrual_block {
            return Ok(());
        }

        let model = self.get_contract_config().interest_rate_model;
        let borrow_rate = model.get_borrow_rate(self.contract_balance, self.total_borrows)?;
        let elapsed = (current_block - self.last_accrual_block) as u128;
        let interest_factor = Ratio(
            borrow_rate
                .0
                .checked_mul(elapsed)
                .expect("interest factor overflow"),
        );
        let accumulated = interest_factor.apply_to(self.total_borrows);

        self.total_borrows = self
            .total_borrows
            .checked_add(accumulated)
            .expect("total borrows overflow");
        self.borrow_index = self.borrow_index + self.borrow_index * interest_factor;
        self.last_accrual_block = current_block;

        Ok(())
    }

    /// Borrow rate at the market's current balances, panicking on a ceiling
    /// breach. Reported to the controller alongside borrow updates.
    pub fn current_borrow_rate(&self) -> Ratio {
        let model = self.get_contract_config().interest_rate_model;
        match model.get_borrow_rate(self.contract_balance, self.total_borrows) {
            Ok(rate) => rate,
            Err(error) => error.panic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn accrual_is_idempotent_within_a_block() {
        let mut contract = init_market_with_borrows(600, 400, 100);

        set_block(110);
        contract.accrue_interest().unwrap();
        let total_after_first = contract.total_borrows;
        let index_after_first = contract.borrow_index;

        contract.accrue_interest().unwrap();

        assert_eq!(
            contract.total_borrows, total_after_first,
            "Second accrual in the same block changed total borrows"
        );
        assert_eq!(
            contract.borrow_index, index_after_first,
            "Second accrual in the same block changed the borrow index"
        );
    }

    #[test]
    fn accrual_grows_index_and_borrows_together() {
        let mut contract = init_market_with_borrows(600, 400, 100);

        // borrow rate: 0.02 + 0.4 * 0.15 = 0.08 per block, 10 blocks elapsed
        set_block(110);
        contract.accrue_interest().unwrap();

        assert_eq!(
            contract.total_borrows,
            400 + 320,
            "Accrued interest check has been failed"
        );
        assert_eq!(
            contract.borrow_index,
            Ratio(18 * RATIO_DECIMALS / 10),
            "Borrow index check has been failed"
        );
    }

    #[test]
    fn borrow_index_never_decreases() {
        let mut contract = init_market_with_borrows(600, 400, 100);

        let mut previous = contract.borrow_index;
        for block in [101u64, 105, 106, 200] {
            set_block(block);
            contract.accrue_interest().unwrap();
            assert!(
                contract.borrow_index >= previous,
                "Borrow index decreased between accruals"
            );
            previous = contract.borrow_index;
        }
    }

    #[test]
    fn accrual_without_borrows_adds_no_interest() {
        let mut contract = init_market_with_borrows(1000, 0, 100);

        set_block(150);
        contract.accrue_interest().unwrap();

        assert_eq!(contract.total_borrows, 0);
    }
}
