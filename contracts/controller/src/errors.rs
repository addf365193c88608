use crate::*;
use std::fmt;

/// Structured failure reasons. Raising one at the contract boundary aborts
/// the whole operation, so no partial state change survives a failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ControllerError {
    InvalidCaller {
        caller: AccountId,
    },
    MarketNotFound {
        market_id: AccountId,
    },
    PriceFeedMissing {
        ticker_id: String,
    },
    InvalidPriceFromOracle {
        ticker_id: String,
        value: i128,
    },
    BorrowAmountExceedsAvailable {
        available: Balance,
        requested: Balance,
    },
    WithdrawalNotAllowed {
        shortfall: Balance,
    },
    AccountNotLiquidatable {
        liquidity: Balance,
    },
    LiquidationAmountExceedsCloseFactor {
        maximum: Balance,
        requested: Balance,
    },
    CannotLiquidateSelf,
}

impl ControllerError {
    pub fn panic(&self) -> ! {
        env::panic_str(&self.to_string())
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::InvalidCaller { caller } => write!(
                f,
                "This functionality is allowed to be called by a registered market only, not {}",
                caller
            ),
            ControllerError::MarketNotFound { market_id } => {
                write!(f, "Market {} is not registered", market_id)
            }
            ControllerError::PriceFeedMissing { ticker_id } => {
                write!(f, "No price feed bound for ticker {}", ticker_id)
            }
            ControllerError::InvalidPriceFromOracle { ticker_id, value } => write!(
                f,
                "Oracle returned a non-positive price {} for ticker {}",
                value, ticker_id
            ),
            ControllerError::BorrowAmountExceedsAvailable {
                available,
                requested,
            } => write!(
                f,
                "Borrow is not allowed: available liquidity {}, requested {}",
                available, requested
            ),
            ControllerError::WithdrawalNotAllowed { shortfall } => write!(
                f,
                "Withdrawal would leave the account in shortfall {}",
                shortfall
            ),
            ControllerError::AccountNotLiquidatable { liquidity } => write!(
                f,
                "Account is not liquidatable: liquidity {}",
                liquidity
            ),
            ControllerError::LiquidationAmountExceedsCloseFactor {
                maximum,
                requested,
            } => write!(
                f,
                "Liquidation amount {} exceeds the close factor maximum {}",
                requested, maximum
            ),
            ControllerError::CannotLiquidateSelf => {
                write!(f, "Borrower cannot liquidate themselves")
            }
        }
    }
}
