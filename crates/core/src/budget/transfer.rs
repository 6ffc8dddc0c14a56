//! One-shot conditional moves of money between two balances.

use std::fmt;

use exchequer_shared::Money;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Why a transfer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// The source balance is below the requested amount.
    InsufficientFunds {
        /// Source balance at the time of the attempt.
        available: Money,
        /// Amount that was asked for.
        requested: Money,
    },
}

/// Result of executing a transfer. Neither variant is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransferOutcome {
    /// The amount was moved from source to destination.
    Succeeded {
        /// Amount moved.
        amount: Money,
    },
    /// Nothing moved.
    Rejected {
        /// Why.
        reason: RejectReason,
    },
}

impl TransferOutcome {
    /// Decides the outcome of moving `requested` out of `available`.
    #[must_use]
    pub fn evaluate(available: &Money, requested: Money) -> Self {
        if available.covers(&requested) {
            Self::Succeeded { amount: requested }
        } else {
            Self::Rejected {
                reason: RejectReason::InsufficientFunds {
                    available: *available,
                    requested,
                },
            }
        }
    }

    /// Returns true for [`TransferOutcome::Succeeded`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { amount } => write!(f, "Transaction of {amount} successful."),
            Self::Rejected { .. } => write!(f, "Insufficient funds for the transaction."),
        }
    }
}

/// Lifecycle of a [`Transfer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferState {
    /// No execution has moved money yet.
    Pending,
    /// At least one execution moved money.
    Executed,
}

/// Moves a fixed amount between two borrowed balances.
///
/// `execute` has no double-execution guard: each call with sufficient funds
/// deducts again.
#[derive(Debug)]
pub struct Transfer<'a> {
    source: &'a mut Money,
    destination: &'a mut Money,
    amount: Money,
    executions: u32,
}

impl<'a> Transfer<'a> {
    /// Prepares a transfer of `amount` from `source` to `destination`.
    pub fn new(source: &'a mut Money, destination: &'a mut Money, amount: Decimal) -> Self {
        Self {
            source,
            destination,
            amount: Money::new(amount),
            executions: 0,
        }
    }

    /// Amount moved per execution.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Current source balance.
    #[must_use]
    pub fn source(&self) -> &Money {
        &*self.source
    }

    /// Current destination balance.
    #[must_use]
    pub fn destination(&self) -> &Money {
        &*self.destination
    }

    /// Number of executions that moved money.
    #[must_use]
    pub const fn executions(&self) -> u32 {
        self.executions
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TransferState {
        if self.executions == 0 {
            TransferState::Pending
        } else {
            TransferState::Executed
        }
    }

    /// Moves the amount if the source covers it, otherwise changes nothing.
    pub fn execute(&mut self) -> TransferOutcome {
        let outcome = settle(self.source, self.destination, self.amount);
        if outcome.is_success() {
            self.executions += 1;
        }
        outcome
    }
}

impl fmt::Display for Transfer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction: {} -> {}, Amount: {}",
            self.source, self.destination, self.amount
        )
    }
}

/// Applies the transfer rule to two distinct balances.
pub(crate) fn settle(source: &mut Money, destination: &mut Money, amount: Money) -> TransferOutcome {
    let outcome = TransferOutcome::evaluate(source, amount);
    log_outcome(&outcome);
    if outcome.is_success() {
        source.debit(amount.amount());
        destination.credit(amount.amount());
    }
    outcome
}

pub(crate) fn log_outcome(outcome: &TransferOutcome) {
    match outcome {
        TransferOutcome::Succeeded { amount } => debug!(%amount, "Transfer succeeded"),
        TransferOutcome::Rejected {
            reason: RejectReason::InsufficientFunds { available, requested },
        } => warn!(%available, %requested, "Transfer rejected: insufficient funds"),
    }
}
