use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary value in minor currency units (cents).
///
/// Storing a single unsigned integer keeps every balance non-negative by
/// construction; the only operation that could go below zero is
/// [`Money::subtract`], which fails instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Builds a value from whole euros plus a cent remainder, e.g.
    /// `from_parts(1, 20)` is 120 cents.
    pub const fn from_parts(euros: u64, cents: u64) -> Self {
        Self(euros * 100 + cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, failing with `NegativeResult` when the result
    /// would drop below zero.
    pub fn subtract(self, other: Money) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(VendingError::NegativeResult)
    }

    /// Whether this value can be paid exactly with a non-negative number
    /// of coins from `denominations`.
    ///
    /// Reachability over the whole `0..=value` range. A greedy descent over
    /// sorted denominations is not sound for arbitrary coin sets (it misses
    /// 60 from {20, 50}), so every intermediate value is checked.
    pub fn is_representable_with(self, denominations: &[Money]) -> bool {
        let target = self.0 as usize;
        let mut reachable = vec![false; target + 1];
        reachable[0] = true;
        for value in 1..=target {
            for coin in denominations {
                let coin = coin.0 as usize;
                if coin > 0 && coin <= value && reachable[value - coin] {
                    reachable[value] = true;
                    break;
                }
            }
        }
        reachable[target]
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
