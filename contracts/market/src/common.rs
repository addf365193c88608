use crate::*;
use std::fmt;

pub enum Events {
    SupplySuccess(AccountId, Balance),
    SupplyFailedToIncreaseSupplyOnController(AccountId, Balance),

    WithdrawSuccess(AccountId, Balance),
    WithdrawFailedToDecreaseSupplyOnController(AccountId, Balance),
    WithdrawFailedToFallback(AccountId, Balance),
    WithdrawFallbackSuccess(AccountId, Balance),

    BorrowSuccess(AccountId, Balance),
    BorrowFailedToIncreaseBorrowOnController(AccountId, Balance),
    BorrowFailedToFallback(AccountId, Balance),
    BorrowFallbackSuccess(AccountId, Balance),

    RepaySuccess(AccountId, Balance),
    RepayFailedToUpdateUserBalance(AccountId, Balance),

    LiquidationSuccess(AccountId, AccountId, Balance),
    LiquidationFailed(AccountId, AccountId, Balance),
}

impl Contract {
    pub fn get_controller_address(&self) -> AccountId {
        self.get_contract_config().controller_account_id
    }

    pub fn get_contract_address(&self) -> AccountId {
        env::current_account_id()
    }

    pub fn get_underlying_contract_address(&self) -> AccountId {
        self.underlying_token.clone()
    }

    pub fn terra_gas(&self, gas: u64) -> Gas {
        TGAS * gas
    }

    /// Underlying units backing one share, scaled 1e18. An empty market
    /// bootstraps at the model's base rate: the first depositor sets the
    /// initial shares-per-unit price.
    pub fn get_exchange_rate(&self) -> Ratio {
        if self.token.total_supply == 0 {
            return self
                .get_contract_config()
                .interest_rate_model
                .get_base_rate_per_block();
        }
        let backing = self
            .contract_balance
            .checked_add(self.total_borrows)
            .expect("backing assets overflow");
        Ratio(
            (U256::from(backing) * U256::from(RATIO_DECIMALS) / U256::from(self.token.total_supply))
                .as_u128(),
        )
    }

    pub fn underlying_to_shares(&self, token_amount: Balance) -> Balance {
        (BigBalance::from(token_amount) / self.get_exchange_rate()).round_u128()
    }

    pub fn shares_to_underlying(&self, shares: Balance) -> Balance {
        self.get_exchange_rate().apply_to(shares)
    }

    pub fn get_account_shares(&self, account: AccountId) -> Balance {
        self.token.accounts.get(&account).unwrap_or_default()
    }

    /// Share balance valued at the current exchange rate.
    pub fn get_account_balance(&self, account: AccountId) -> Balance {
        self.shares_to_underlying(self.get_account_shares(account))
    }

    pub fn increase_contract_balance(&mut self, token_amount: Balance) {
        self.contract_balance = self
            .contract_balance
            .checked_add(token_amount)
            .expect("contract balance overflow");
    }

    pub fn decrease_contract_balance(&mut self, token_amount: Balance) {
        self.contract_balance = self
            .contract_balance
            .checked_sub(token_amount)
            .expect("contract balance underflow");
    }

    pub fn mint(&mut self, account_id: &AccountId, amount: WBalance) {
        if self.token.accounts.get(account_id).is_none() {
            self.token.internal_register_account(account_id);
        }
        self.token.internal_deposit(account_id, amount.into());
    }

    pub fn burn(&mut self, account_id: &AccountId, amount: WBalance) {
        if self.token.accounts.get(account_id).is_none() {
            panic!("User with account {} wasn't found", account_id);
        }
        self.token.internal_withdraw(account_id, amount.into());
    }

    pub fn mutex_account_lock(&mut self, account_id: &AccountId, action: &str) {
        require!(
            !self.is_account_inconsistent(account_id),
            "Account is flagged inconsistent and is blocked from new flows"
        );
        if !self.mutex.try_lock(account_id) {
            panic!(
                "failed to acquire {} action mutex for account {}",
                action, account_id
            );
        }
    }

    pub fn mutex_account_unlock(&mut self, account_id: &AccountId) {
        self.mutex.unlock(account_id);
    }

    pub fn add_inconsistent_account(&mut self, account_id: AccountId) {
        self.inconsistent_accounts.insert(&account_id);
    }

    pub fn is_account_inconsistent(&self, account_id: &AccountId) -> bool {
        self.inconsistent_accounts.contains(account_id)
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Events::SupplySuccess(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "SupplySuccess", "data": {{"account_id": "{}", "amount": "{}"}}}}"#,
                    account, amount),
            Events::SupplyFailedToIncreaseSupplyOnController(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "SupplyFailedToIncreaseSupplyOnController", "data": {{"account_id": "{}", "amount": "{}", "reason": "failed to register {} supply of {} on controller"}}}}"#,
                    account, amount, account, amount),
            Events::WithdrawSuccess(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "WithdrawSuccess", "data": {{"account_id": "{}", "amount": "{}"}}}}"#,
                    account, amount),
            Events::WithdrawFailedToDecreaseSupplyOnController(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "WithdrawFailedToDecreaseSupplyOnController", "data": {{"account_id": "{}", "amount": "{}", "reason": "controller rejected decreasing {} supply by {}"}}}}"#,
                    account, amount, account, amount),
            Events::WithdrawFailedToFallback(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "WithdrawFailedToFallback", "data": {{"account_id": "{}", "amount": "{}", "reason": "failed to revert state for {}"}}}}"#,
                    account, amount, account),
            Events::WithdrawFallbackSuccess(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "WithdrawFallbackSuccess", "data": {{"account_id": "{}", "amount": "{}"}}}}"#,
                    account, amount),
            Events::BorrowSuccess(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "BorrowSuccess", "data": {{"account_id": "{}", "amount": "{}"}}}}"#,
                    account, amount),
            Events::BorrowFailedToIncreaseBorrowOnController(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "BorrowFailedToIncreaseBorrowOnController", "data": {{"account_id": "{}", "amount": "{}", "reason": "controller rejected the borrow of {} for {}"}}}}"#,
                    account, amount, amount, account),
            Events::BorrowFailedToFallback(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "BorrowFailedToFallback", "data": {{"account_id": "{}", "amount": "{}", "reason": "failed to revert state for {}"}}}}"#,
                    account, amount, account),
            Events::BorrowFallbackSuccess(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "BorrowFallbackSuccess", "data": {{"account_id": "{}", "amount": "{}"}}}}"#,
                    account, amount),
            Events::RepaySuccess(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "RepaySuccess", "data": {{"account_id": "{}", "amount": "{}"}}}}"#,
                    account, amount),
            Events::RepayFailedToUpdateUserBalance(account, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "RepayFailedToUpdateUserBalance", "data": {{"account_id": "{}", "amount": "{}", "reason": "failed to update user {} balance {}: controller rejected the report"}}}}"#,
                    account, amount, account, amount),
            Events::LiquidationSuccess(borrower, liquidator, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "LiquidationSuccess", "data": {{"borrower_id": "{}", "liquidator_id": "{}", "amount": "{}"}}}}"#,
                    borrower, liquidator, amount),
            Events::LiquidationFailed(borrower, liquidator, amount) =>
                write!(f, r#"EVENT_JSON:{{"standard": "nep297", "version": "1.0.0", "event": "LiquidationFailed", "data": {{"borrower_id": "{}", "liquidator_id": "{}", "amount": "{}"}}}}"#,
                    borrower, liquidator, amount),
        }
    }
}
