use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::Balance;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use uint::construct_uint;

use crate::{WBalance, WRatio};

construct_uint! {
    pub struct U256(4);
}

pub const RATIO_DECIMALS: u128 = 10u128.pow(18);

/// Unsigned fixed-point value scaled by 1e18. Every operation goes through a
/// 256-bit intermediate and panics on overflow or division by zero instead
/// of wrapping.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Copy, Debug, Default)]
#[serde(crate = "near_sdk::serde")]
pub struct Ratio(pub u128);

impl Ratio {
    pub fn new(ratio: u128) -> Ratio {
        Ratio(ratio)
    }

    pub fn zero() -> Ratio {
        Ratio(0)
    }

    pub fn one() -> Ratio {
        Ratio(RATIO_DECIMALS)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `amount * self`, rounding down.
    pub fn apply_to(self, amount: Balance) -> Balance {
        (BigBalance::from(amount) * self).round_u128()
    }
}

impl From<u128> for Ratio {
    fn from(value: u128) -> Ratio {
        Ratio(value)
    }
}

impl From<WRatio> for Ratio {
    fn from(value: WRatio) -> Ratio {
        Ratio(value.0)
    }
}

impl From<Ratio> for WRatio {
    fn from(value: Ratio) -> WRatio {
        WRatio::from(value.0)
    }
}

impl Add for Ratio {
    type Output = Ratio;

    fn add(self, rhs: Self) -> Self::Output {
        Ratio(self.0.checked_add(rhs.0).expect("ratio overflow on add"))
    }
}

impl Sub for Ratio {
    type Output = Ratio;

    fn sub(self, rhs: Self) -> Self::Output {
        Ratio(self.0.checked_sub(rhs.0).expect("ratio underflow on sub"))
    }
}

impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Self) -> Self::Output {
        Ratio((U256::from(self.0) * U256::from(rhs.0) / U256::from(RATIO_DECIMALS)).as_u128())
    }
}

impl Div for Ratio {
    type Output = Ratio;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "attempt to divide ratio by zero");
        Ratio((U256::from(self.0) * U256::from(RATIO_DECIMALS) / U256::from(rhs.0)).as_u128())
    }
}

impl Eq for Ratio {}

impl PartialEq<Self> for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd<Self> for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 256-bit intermediate for cross-scale products (price x amount,
/// amount <-> shares). Narrowing back to u128 is explicit and loud.
#[derive(Clone, Copy, Debug)]
pub struct BigBalance(pub U256);

impl BigBalance {
    pub fn round_u128(&self) -> u128 {
        self.0.as_u128()
    }
}

impl From<Balance> for BigBalance {
    fn from(value: Balance) -> BigBalance {
        BigBalance(U256::from(value))
    }
}

impl From<WBalance> for BigBalance {
    fn from(value: WBalance) -> BigBalance {
        BigBalance(U256::from(value.0))
    }
}

impl Mul<Ratio> for BigBalance {
    type Output = BigBalance;

    fn mul(self, rhs: Ratio) -> Self::Output {
        BigBalance(self.0 * U256::from(rhs.0) / U256::from(RATIO_DECIMALS))
    }
}

impl Div<Ratio> for BigBalance {
    type Output = BigBalance;

    fn div(self, rhs: Ratio) -> Self::Output {
        assert!(!rhs.is_zero(), "attempt to divide balance by zero ratio");
        BigBalance(self.0 * U256::from(RATIO_DECIMALS) / U256::from(rhs.0))
    }
}

impl Mul<u128> for BigBalance {
    type Output = BigBalance;

    fn mul(self, rhs: u128) -> Self::Output {
        BigBalance(self.0 * U256::from(rhs))
    }
}

impl Div<u128> for BigBalance {
    type Output = BigBalance;

    fn div(self, rhs: u128) -> Self::Output {
        assert!(rhs != 0, "attempt to divide balance by zero");
        BigBalance(self.0 / U256::from(rhs))
    }
}
