//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum number of decimal places used when rendering an amount.
pub const DISPLAY_SCALE: u32 = 2;

/// A mutable monetary balance.
///
/// There is no bounds check anywhere: an amount may go negative through
/// [`Money::set_amount`] or [`Money::debit`]. Rendering goes through
/// `Display`, which prints `$` followed by the amount padded to at least
/// [`DISPLAY_SCALE`] decimal places. Digits beyond it are printed as stored,
/// never rounded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the current amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Overwrites the amount unconditionally.
    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    /// Adds `delta` to the amount. A negative delta decreases it.
    ///
    /// Saturates at the bounds of `Decimal` instead of overflowing.
    pub fn credit(&mut self, delta: Decimal) {
        self.amount = self.amount.saturating_add(delta);
    }

    /// Subtracts `delta` from the amount, going negative if needed.
    ///
    /// Saturates at the bounds of `Decimal` instead of overflowing.
    pub fn debit(&mut self, delta: Decimal) {
        self.amount = self.amount.saturating_sub(delta);
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if this balance covers `other`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.amount >= other.amount
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.scale() < DISPLAY_SCALE {
            write!(f, "${:.2}", self.amount)
        } else {
            write!(f, "${}", self.amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let money = Money::new(dec!(100.00));
        assert_eq!(money.amount(), dec!(100.00));
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero();
        assert!(money.is_zero());
        assert_eq!(money.amount(), Decimal::ZERO);
        assert_eq!(money, Money::default());
    }

    #[test]
    fn test_set_amount_overwrites_without_bounds_check() {
        let mut money = Money::new(dec!(10));
        money.set_amount(dec!(-250.5));
        assert_eq!(money.amount(), dec!(-250.5));
    }

    #[test]
    fn test_credit_and_debit() {
        let mut money = Money::new(dec!(100));
        money.credit(dec!(20));
        assert_eq!(money.amount(), dec!(120));
        money.debit(dec!(150));
        assert_eq!(money.amount(), dec!(-30));
        money.credit(dec!(-5));
        assert_eq!(money.amount(), dec!(-35));
    }

    #[test]
    fn test_credit_and_debit_saturate() {
        let mut money = Money::new(Decimal::MAX);
        money.credit(Decimal::MAX);
        assert_eq!(money.amount(), Decimal::MAX);

        let mut money = Money::new(Decimal::MIN);
        money.debit(Decimal::MAX);
        assert_eq!(money.amount(), Decimal::MIN);
    }

    #[rstest]
    #[case(dec!(100), dec!(50), true)]
    #[case(dec!(50), dec!(50), true)]
    #[case(dec!(30), dec!(50), false)]
    #[case(dec!(-1), dec!(0), false)]
    fn test_covers(#[case] balance: Decimal, #[case] requested: Decimal, #[case] expected: bool) {
        assert_eq!(Money::new(balance).covers(&Money::new(requested)), expected);
    }

    #[rstest]
    #[case(dec!(50000), "$50000.00")]
    #[case(dec!(1500000.0), "$1500000.00")]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(12.5), "$12.50")]
    #[case(dec!(-20), "$-20.00")]
    #[case(dec!(0.005), "$0.005")]
    #[case(dec!(12.349), "$12.349")]
    #[case(dec!(-0.125), "$-0.125")]
    #[case(dec!(7.100), "$7.100")]
    fn test_money_display(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount).to_string(), expected);
    }
}
