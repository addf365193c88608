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

    /// Clears the inconsistency flag once the account has been reconciled
    /// off-chain.
    pub fn remove_inconsistent_account(&mut self, account_id: AccountId) {
        require!(
            self.is_valid_admin_call(),
            "This functionality is allowed to be called by admin or contract only"
        );
        self.inconsistent_accounts.remove(&account_id);
        self.mutex_account_unlock(&account_id);
    }

    pub fn view_inconsistent_accounts(&self) -> Vec<AccountId> {
        self.inconsistent_accounts.to_vec()
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
    fn set_get_admin() {
        let contract = init_market(START_BLOCK);

        assert_eq!(contract.admin, contract.get_admin());
        assert_eq!(market_account(), contract.get_admin());
    }

    #[test]
    fn admin_clears_inconsistent_accounts() {
        let mut contract = init_market(START_BLOCK);
        contract.add_inconsistent_account(bob());

        set_predecessor(market_account());
        contract.remove_inconsistent_account(bob());

        assert!(!contract.is_account_inconsistent(&bob()));
    }

    #[test]
    #[should_panic(expected = "allowed to be called by admin or contract only")]
    fn non_admin_cannot_clear_inconsistent_accounts() {
        let mut contract = init_market(START_BLOCK);
        contract.add_inconsistent_account(bob());

        set_predecessor(carol());
        contract.remove_inconsistent_account(bob());
    }
}
