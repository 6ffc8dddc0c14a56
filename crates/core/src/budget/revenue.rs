//! Revenue records logged under a scheme.

use std::fmt;

use exchequer_shared::Money;
use rust_decimal::Decimal;
use serde::Serialize;

/// An immutable `(source, amount)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueRecord {
    source: String,
    amount: Money,
}

impl RevenueRecord {
    /// Creates a record, wrapping `amount` in a fresh `Money`.
    #[must_use]
    pub fn new(source: impl Into<String>, amount: Decimal) -> Self {
        Self {
            source: source.into(),
            amount: Money::new(amount),
        }
    }

    /// Label of the revenue source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Amount recorded.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for RevenueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.amount)
    }
}
