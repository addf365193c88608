use crate::*;
use std::fmt;

/// Structured failure reasons. Raising one at the contract boundary aborts
/// the whole operation, so no partial state change survives a failure.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketError {
    AmountMustBeGreaterThanZero,
    InsufficientBalance {
        available: Balance,
        requested: Balance,
    },
    BorrowAmountExceedsAvailable {
        available: Balance,
        requested: Balance,
    },
    BorrowRateExceedsMax {
        rate: Ratio,
        max: Ratio,
    },
    NoOutstandingBorrow {
        account_id: AccountId,
    },
    InvalidCaller {
        caller: AccountId,
    },
}

impl MarketError {
    pub fn panic(&self) -> ! {
        env::panic_str(&self.to_string())
    }
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::AmountMustBeGreaterThanZero => {
                write!(f, "Amount should be a positive number")
            }
            MarketError::InsufficientBalance {
                available,
                requested,
            } => write!(
                f,
                "Insufficient balance: available {}, requested {}",
                available, requested
            ),
            MarketError::BorrowAmountExceedsAvailable {
                available,
                requested,
            } => write!(
                f,
                "Borrow amount exceeds available liquidity: available {}, requested {}",
                available, requested
            ),
            MarketError::BorrowRateExceedsMax { rate, max } => write!(
                f,
                "Computed borrow rate {} exceeds the allowed maximum {}",
                rate.0, max.0
            ),
            MarketError::NoOutstandingBorrow { account_id } => {
                write!(f, "Account {} has no outstanding borrow", account_id)
            }
            MarketError::InvalidCaller { caller } => write!(
                f,
                "This functionality is allowed to be called by the controller contract only, not {}",
                caller
            ),
        }
    }
}
