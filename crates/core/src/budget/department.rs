//! Departments: named nodes owning an ordered list of schemes.

use std::fmt;

use exchequer_shared::Money;
use exchequer_shared::types::{DepartmentId, SchemeId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::error::BudgetError;
use super::government::SchemeRef;
use super::scheme::Scheme;

/// A department of a government.
///
/// The balance is set at creation. Allocations never touch it; only direct
/// mutation or a transfer does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    id: DepartmentId,
    name: String,
    balance: Money,
    schemes: Vec<Scheme>,
}

impl Department {
    pub(crate) fn new(id: DepartmentId, name: impl Into<String>, initial_budget: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            balance: Money::new(initial_budget),
            schemes: Vec::new(),
        }
    }

    /// Handle of this department inside its government.
    #[must_use]
    pub const fn id(&self) -> DepartmentId {
        self.id
    }

    /// Department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department budget.
    #[must_use]
    pub const fn balance(&self) -> &Money {
        &self.balance
    }

    /// Mutable access for transfers and direct adjustments.
    pub fn balance_mut(&mut self) -> &mut Money {
        &mut self.balance
    }

    /// Schemes in the order they were added.
    #[must_use]
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Appends a scheme and returns its handle. Duplicates are allowed.
    pub fn add_scheme(&mut self, scheme: Scheme) -> SchemeRef {
        let id = SchemeId::new(self.schemes.len());
        info!(department = %self.name, scheme = %scheme.name(), %id, "Scheme added");
        self.schemes.push(scheme);
        SchemeRef::new(self.id, id)
    }

    /// Looks up a scheme by handle.
    pub fn scheme(&self, id: SchemeId) -> Result<&Scheme, BudgetError> {
        self.schemes.get(id.index()).ok_or(BudgetError::SchemeNotFound {
            department: self.id,
            scheme: id,
        })
    }

    /// Looks up a scheme by handle for mutation.
    pub fn scheme_mut(&mut self, id: SchemeId) -> Result<&mut Scheme, BudgetError> {
        let department = self.id;
        self.schemes
            .get_mut(id.index())
            .ok_or(BudgetError::SchemeNotFound {
                department,
                scheme: id,
            })
    }

    /// Renders the schemes alone, each followed by a blank line.
    #[must_use]
    pub fn render_schemes(&self) -> String {
        self.schemes.iter().map(|s| format!("{s}\n")).collect()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Department: {}, Budget: {}, Schemes:",
            self.name, self.balance
        )?;
        for scheme in &self.schemes {
            writeln!(f, "{scheme}")?;
        }
        Ok(())
    }
}
