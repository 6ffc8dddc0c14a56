//! Budget hierarchy: government, departments, schemes, and their money.

pub mod actor;
pub mod department;
pub mod error;
pub mod government;
pub mod revenue;
pub mod scheme;
pub mod transfer;


pub use actor::{Actor, FundsRequest};
pub use department::Department;
pub use error::BudgetError;
pub use exchequer_shared::config::RoutingPolicy;
pub use government::{BudgetNode, Government, SchemeRef};
pub use revenue::RevenueRecord;
pub use scheme::{Allocate, Scheme};
pub use transfer::{RejectReason, Transfer, TransferOutcome, TransferState};
