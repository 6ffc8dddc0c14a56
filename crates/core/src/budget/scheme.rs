//! Schemes: the budget leaves that receive allocations.

use std::fmt;

use exchequer_shared::Money;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::revenue::RevenueRecord;

/// Capability to receive an allocation of funds.
///
/// Only [`Scheme`] implements it. Departments and the government hold a
/// balance but no operation allocates into them.
pub trait Allocate {
    /// Logs `(source, amount)` and moves the balance by `amount`.
    ///
    /// Negative and zero amounts are accepted.
    fn allocate(&mut self, source: &str, amount: Decimal) -> &RevenueRecord;
}

/// A named budget leaf with its revenue history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheme {
    name: String,
    balance: Money,
    records: Vec<RevenueRecord>,
}

impl Scheme {
    /// Creates an empty scheme with a zero balance.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: Money::zero(),
            records: Vec::new(),
        }
    }

    /// Scheme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current allocation.
    #[must_use]
    pub const fn balance(&self) -> &Money {
        &self.balance
    }

    /// Mutable access for transfers and direct adjustments.
    pub fn balance_mut(&mut self) -> &mut Money {
        &mut self.balance
    }

    /// Revenue records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[RevenueRecord] {
        &self.records
    }

    /// Sum of every recorded amount.
    ///
    /// Equals the balance as long as only [`Allocate::allocate`] has touched it.
    #[must_use]
    pub fn total_recorded(&self) -> Decimal {
        self.records
            .iter()
            .fold(Decimal::ZERO, |total, r| total.saturating_add(r.amount().amount()))
    }

    /// Renders the records alone, one per line.
    #[must_use]
    pub fn render_revenues(&self) -> String {
        self.records.iter().map(|r| format!("{r}\n")).collect()
    }
}

impl Allocate for Scheme {
    fn allocate(&mut self, source: &str, amount: Decimal) -> &RevenueRecord {
        self.balance.credit(amount);
        self.records.push(RevenueRecord::new(source, amount));
        debug!(
            scheme = %self.name,
            source,
            %amount,
            balance = %self.balance,
            "Funds allocated"
        );
        &self.records[self.records.len() - 1]
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scheme: {}, Allocation: {}, Revenues:",
            self.name, self.balance
        )?;
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_scheme_is_empty() {
        let scheme = Scheme::new("Healthcare Scheme");
        assert_eq!(scheme.name(), "Healthcare Scheme");
        assert!(scheme.balance().is_zero());
        assert!(scheme.records().is_empty());
        assert_eq!(scheme.to_string(), "Scheme: Healthcare Scheme, Allocation: $0.00, Revenues:\n");
    }

    #[test]
    fn test_allocate_donations() {
        let mut scheme = Scheme::new("Healthcare Scheme");
        let record = scheme.allocate("Donations", dec!(50000));
        assert_eq!(record, &RevenueRecord::new("Donations", dec!(50000)));

        assert_eq!(scheme.balance().amount(), dec!(50000.00));
        assert_eq!(scheme.records(), &[RevenueRecord::new("Donations", dec!(50000))]);
    }

    #[rstest]
    #[case(dec!(250))]
    #[case(dec!(0))]
    #[case(dec!(-75.25))]
    fn test_allocate_moves_balance_by_amount(#[case] amount: Decimal) {
        let mut scheme = Scheme::new("Education Scheme");
        scheme.allocate("Fees", dec!(1000));
        scheme.allocate("Grant", amount);

        assert_eq!(scheme.balance().amount(), dec!(1000) + amount);
        assert_eq!(scheme.records().len(), 2);
        assert_eq!(scheme.records()[1], RevenueRecord::new("Grant", amount));
        assert_eq!(scheme.total_recorded(), scheme.balance().amount());
    }

    #[test]
    fn test_direct_adjustment_breaks_record_sum() {
        let mut scheme = Scheme::new("Agriculture Scheme");
        scheme.allocate("Levy", dec!(10));
        scheme.balance_mut().set_amount(dec!(3));
        assert_eq!(scheme.total_recorded(), dec!(10));
        assert_eq!(scheme.balance().amount(), dec!(3));
    }

    #[test]
    fn test_render_lists_records_in_order() {
        let mut scheme = Scheme::new("Healthcare Scheme");
        scheme.allocate("Donations", dec!(50000));
        scheme.allocate("Fines", dec!(1200.5));

        assert_eq!(scheme.render_revenues(), "Donations: $50000.00\nFines: $1200.50\n");
        assert_eq!(
            scheme.to_string(),
            "Scheme: Healthcare Scheme, Allocation: $51200.50, Revenues:\n\
             Donations: $50000.00\n\
             Fines: $1200.50\n"
        );
    }

    #[test]
    fn test_render_keeps_sub_cent_digits() {
        let mut scheme = Scheme::new("S");
        scheme.allocate("Micro", dec!(0.005));
        scheme.allocate("Odd", dec!(12.349));

        assert_eq!(scheme.balance().amount(), dec!(12.354));
        assert_eq!(
            scheme.to_string(),
            "Scheme: S, Allocation: $12.354, Revenues:\n\
             Micro: $0.005\n\
             Odd: $12.349\n"
        );
    }

    #[test]
    fn test_allocate_saturates_instead_of_panicking() {
        let mut scheme = Scheme::new("S");
        scheme.allocate("Big", Decimal::MAX);
        scheme.allocate("Big", Decimal::MAX);

        assert_eq!(scheme.balance().amount(), Decimal::MAX);
        assert_eq!(scheme.records().len(), 2);
        assert_eq!(scheme.total_recorded(), Decimal::MAX);
    }
}
