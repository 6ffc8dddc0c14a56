//! The government: root of a budget tree.

use std::fmt;

use exchequer_shared::Money;
use exchequer_shared::types::{DepartmentId, SchemeId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::department::Department;
use super::error::BudgetError;
use super::scheme::Scheme;
use super::transfer::{self, TransferOutcome};

/// Address of a scheme inside a government.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SchemeRef {
    /// Department owning the scheme.
    pub department: DepartmentId,
    /// Position within that department.
    pub scheme: SchemeId,
}

impl SchemeRef {
    /// Creates a scheme address.
    #[must_use]
    pub const fn new(department: DepartmentId, scheme: SchemeId) -> Self {
        Self { department, scheme }
    }
}

/// Any node of the tree that holds a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetNode {
    /// The root.
    Government,
    /// A department.
    Department {
        /// Department handle.
        id: DepartmentId,
    },
    /// A scheme.
    Scheme {
        /// Scheme address.
        at: SchemeRef,
    },
}

impl From<DepartmentId> for BudgetNode {
    fn from(id: DepartmentId) -> Self {
        Self::Department { id }
    }
}

impl From<SchemeRef> for BudgetNode {
    fn from(at: SchemeRef) -> Self {
        Self::Scheme { at }
    }
}

/// Root of the tree: owns its departments, which own their schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Government {
    name: String,
    balance: Money,
    departments: Vec<Department>,
}

impl Government {
    /// Creates a government with no departments.
    #[must_use]
    pub fn new(name: impl Into<String>, budget: Decimal) -> Self {
        Self {
            name: name.into(),
            balance: Money::new(budget),
            departments: Vec::new(),
        }
    }

    /// Government name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Government budget.
    #[must_use]
    pub const fn balance(&self) -> &Money {
        &self.balance
    }

    /// Mutable access for transfers and direct adjustments.
    pub fn balance_mut(&mut self) -> &mut Money {
        &mut self.balance
    }

    /// Departments in creation order.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Creates a department, appends it, and hands it back for further setup.
    pub fn create_department(
        &mut self,
        name: impl Into<String>,
        initial_budget: Decimal,
    ) -> &mut Department {
        let id = DepartmentId::new(self.departments.len());
        let department = Department::new(id, name, initial_budget);
        info!(
            government = %self.name,
            department = %department.name(),
            %id,
            budget = %department.balance(),
            "Department created"
        );
        self.departments.push(department);
        &mut self.departments[id.index()]
    }

    /// Looks up a department by handle.
    pub fn department(&self, id: DepartmentId) -> Result<&Department, BudgetError> {
        self.departments
            .get(id.index())
            .ok_or(BudgetError::DepartmentNotFound(id))
    }

    /// Looks up a department by handle for mutation.
    pub fn department_mut(&mut self, id: DepartmentId) -> Result<&mut Department, BudgetError> {
        self.departments
            .get_mut(id.index())
            .ok_or(BudgetError::DepartmentNotFound(id))
    }

    /// Finds the first department carrying `name`.
    pub fn department_by_name(&self, name: &str) -> Result<&Department, BudgetError> {
        self.departments
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| BudgetError::DepartmentNameNotFound(name.to_string()))
    }

    /// Looks up a scheme by address.
    pub fn scheme(&self, at: SchemeRef) -> Result<&Scheme, BudgetError> {
        self.department(at.department)?.scheme(at.scheme)
    }

    /// Looks up a scheme by address for mutation.
    pub fn scheme_mut(&mut self, at: SchemeRef) -> Result<&mut Scheme, BudgetError> {
        self.department_mut(at.department)?.scheme_mut(at.scheme)
    }

    /// Balance held by `node`.
    pub fn balance_of(&self, node: BudgetNode) -> Result<&Money, BudgetError> {
        match node {
            BudgetNode::Government => Ok(&self.balance),
            BudgetNode::Department { id } => Ok(self.department(id)?.balance()),
            BudgetNode::Scheme { at } => Ok(self.scheme(at)?.balance()),
        }
    }

    /// Balance held by `node`, for mutation.
    pub fn balance_of_mut(&mut self, node: BudgetNode) -> Result<&mut Money, BudgetError> {
        match node {
            BudgetNode::Government => Ok(&mut self.balance),
            BudgetNode::Department { id } => Ok(self.department_mut(id)?.balance_mut()),
            BudgetNode::Scheme { at } => Ok(self.scheme_mut(at)?.balance_mut()),
        }
    }

    /// Renders a single node the way its own `Display` does.
    pub fn render_node(&self, node: BudgetNode) -> Result<String, BudgetError> {
        match node {
            BudgetNode::Government => Ok(self.to_string()),
            BudgetNode::Department { id } => Ok(self.department(id)?.to_string()),
            BudgetNode::Scheme { at } => Ok(self.scheme(at)?.to_string()),
        }
    }

    /// Transfers `amount` between two nodes of this tree.
    ///
    /// Same rule as [`super::Transfer`]. When `from == to` the check still
    /// runs but the balance ends where it started.
    pub fn transfer(
        &mut self,
        from: BudgetNode,
        to: BudgetNode,
        amount: Decimal,
    ) -> Result<TransferOutcome, BudgetError> {
        let amount = Money::new(amount);
        let mut source = *self.balance_of(from)?;
        let mut destination = *self.balance_of(to)?;

        if from == to {
            let outcome = TransferOutcome::evaluate(&source, amount);
            transfer::log_outcome(&outcome);
            return Ok(outcome);
        }

        let outcome = transfer::settle(&mut source, &mut destination, amount);
        *self.balance_of_mut(from)? = source;
        *self.balance_of_mut(to)? = destination;
        Ok(outcome)
    }

    /// Renders the departments alone, each followed by a blank line.
    #[must_use]
    pub fn render_departments(&self) -> String {
        self.departments.iter().map(|d| format!("{d}\n")).collect()
    }
}

impl fmt::Display for Government {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Government: {}, Budget: {}, Departments:",
            self.name, self.balance
        )?;
        for department in &self.departments {
            writeln!(f, "{department}")?;
        }
        Ok(())
    }
}
