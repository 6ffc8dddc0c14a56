//! Budget error types.

use exchequer_shared::AppError;
use exchequer_shared::types::{DepartmentId, SchemeId};
use thiserror::Error;

/// Errors raised while resolving nodes of a budget tree.
///
/// Insufficient funds is not an error; see [`super::TransferOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Department handle does not exist in this government.
    #[error("Department not found: {0}")]
    DepartmentNotFound(DepartmentId),

    /// No department carries this name.
    #[error("Department not found: {0}")]
    DepartmentNameNotFound(String),

    /// Scheme handle does not exist in the department.
    #[error("Scheme {scheme} not found in department {department}")]
    SchemeNotFound {
        /// Department that was searched.
        department: DepartmentId,
        /// Missing scheme.
        scheme: SchemeId,
    },
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::NotFound(err.to_string())
    }
}
