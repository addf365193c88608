use crate::*;

/// Borrow snapshot: the outstanding principal as of the index value current
/// when the snapshot was last written. The snapshot is dropped once the debt
/// clears, so a missing profile reads as zero debt.
#[derive(BorshDeserialize, BorshSerialize, Debug)]
pub struct UserProfile {
    /// Debt amount as of `borrow_index`
    pub borrows: Balance,

    /// The market's borrow index at the time this snapshot was written
    pub borrow_index: Ratio,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            borrows: 0,
            borrow_index: Ratio::zero(),
        }
    }
}

impl Contract {
    /// Debt at the current borrow index: `principal * index / snapshot_index`.
    pub fn get_account_borrows(&self, account: AccountId) -> Balance {
        let profile = self.user_profiles.get(&account).unwrap_or_default();
        if profile.borrows == 0 {
            return 0;
        }
        let growth = self.borrow_index / profile.borrow_index;
        growth.apply_to(profile.borrows)
    }

    pub fn set_account_borrows(&mut self, account: AccountId, token_amount: Balance) -> Balance {
        if token_amount == 0 {
            self.user_profiles.remove(&account);
        } else {
            let profile = UserProfile {
                borrows: token_amount,
                borrow_index: self.borrow_index,
            };
            self.user_profiles.insert(&account, &profile);
        }
        token_amount
    }

    /// Rolls the caller's debt forward to the current index and adds
    /// `token_amount` to it.
    pub fn increase_account_borrows(&mut self, account: AccountId, token_amount: Balance) -> Balance {
        let borrows = self.get_account_borrows(account.clone());
        let new_borrows = borrows
            .checked_add(token_amount)
            .expect("account borrows overflow");

        self.total_borrows = self
            .total_borrows
            .checked_add(token_amount)
            .expect("total borrows overflow");

        self.set_account_borrows(account, new_borrows)
    }

    /// Reduces the caller's debt by `token_amount`, which must not exceed
    /// the debt at the current index.
    pub fn decrease_account_borrows(
        &mut self,
        account: AccountId,
        token_amount: Balance,
    ) -> Result<Balance, MarketError> {
        let borrows = self.get_account_borrows(account.clone());
        if borrows == 0 {
            return Err(MarketError::NoOutstandingBorrow {
                account_id: account,
            });
        }
        if token_amount > borrows {
            return Err(MarketError::InsufficientBalance {
                available: borrows,
                requested: token_amount,
            });
        }

        self.total_borrows = self
            .total_borrows
            .checked_sub(token_amount)
            .expect("total borrows underflow");

        Ok(self.set_account_borrows(account, borrows - token_amount))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use assert_matches::assert_matches;

    #[test]
    fn missing_snapshot_reads_as_zero_debt() {
        let contract = init_market(100);

        assert_eq!(contract.get_account_borrows(bob()), 0);
    }

    #[test]
    fn debt_scales_with_the_borrow_index() {
        let mut contract = init_market_with_borrows(600, 0, 100);
        contract.increase_account_borrows(bob(), 400);

        // 10 blocks at 0.08 per block
        set_block(110);
        contract.accrue_interest().unwrap();

        assert_eq!(
            contract.get_account_borrows(bob()),
            720,
            "Debt recomputation at the current index has been failed"
        );
    }

    #[test]
    fn debt_is_monotone_between_repayments() {
        let mut contract = init_market_with_borrows(600, 0, 100);
        contract.increase_account_borrows(bob(), 400);

        let mut previous = contract.get_account_borrows(bob());
        for block in [103u64, 110, 142] {
            set_block(block);
            contract.accrue_interest().unwrap();
            let current = contract.get_account_borrows(bob());
            assert!(
                current >= previous,
                "Borrow balance decreased without a repayment"
            );
            previous = current;
        }
    }

    #[test]
    fn decrease_clears_the_snapshot_at_zero() {
        let mut contract = init_market_with_borrows(600, 0, 100);
        contract.increase_account_borrows(bob(), 400);

        contract.decrease_account_borrows(bob(), 400).unwrap();

        assert_eq!(contract.get_account_borrows(bob()), 0);
        assert!(contract.user_profiles.get(&bob()).is_none());
        assert_eq!(contract.total_borrows, 0);
    }

    #[test]
    fn decrease_without_debt_is_rejected() {
        let mut contract = init_market(100);

        assert_matches!(
            contract.decrease_account_borrows(bob(), 10),
            Err(MarketError::NoOutstandingBorrow { .. })
        );
    }

    #[test]
    fn decrease_beyond_debt_is_rejected() {
        let mut contract = init_market_with_borrows(600, 0, 100);
        contract.increase_account_borrows(bob(), 400);

        assert_matches!(
            contract.decrease_account_borrows(bob(), 401),
            Err(MarketError::InsufficientBalance {
                available: 400,
                requested: 401
            })
        );
    }
}
