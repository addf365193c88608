use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::UnorderedSet;
use near_sdk::{AccountId, IntoStorageKey};

/// Per-account lock held across the receipts of a multi-receipt flow.
/// A flow locks before its first cross-contract call and unlocks in every
/// callback exit, so overlapping flows for the same account abort instead
/// of interleaving.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct ActionMutex {
    locked_accounts: UnorderedSet<AccountId>,
}

impl ActionMutex {
    pub fn new<S: IntoStorageKey>(key: S) -> Self {
        Self {
            locked_accounts: UnorderedSet::new(key),
        }
    }

    pub fn try_lock(&mut self, account_id: &AccountId) -> bool {
        if self.locked_accounts.contains(account_id) {
            return false;
        }
        self.locked_accounts.insert(account_id);
        true
    }

    pub fn unlock(&mut self, account_id: &AccountId) {
        self.locked_accounts.remove(account_id);
    }

    pub fn is_locked(&self, account_id: &AccountId) -> bool {
        self.locked_accounts.contains(account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use near_sdk::test_utils::test_env::{alice, bob};

    fn mutex() -> ActionMutex {
        ActionMutex::new(b"t".to_vec())
    }

    #[test]
    fn lock_is_exclusive_per_account() {
        let mut mutex = mutex();

        assert!(mutex.try_lock(&alice()));
        assert!(!mutex.try_lock(&alice()));
        assert!(mutex.try_lock(&bob()));
    }

    #[test]
    fn unlock_releases_the_account() {
        let mut mutex = mutex();

        assert!(mutex.try_lock(&alice()));
        mutex.unlock(&alice());
        assert!(!mutex.is_locked(&alice()));
        assert!(mutex.try_lock(&alice()));
    }

    #[test]
    fn unlocking_a_free_account_is_a_noop() {
        let mut mutex = mutex();

        mutex.unlock(&alice());
        assert!(!mutex.is_locked(&alice()));
    }
}
