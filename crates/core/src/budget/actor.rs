//! Actors (employees) that request funds on behalf of a budget node.

use std::fmt;

use exchequer_shared::config::RoutingPolicy;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::error::BudgetError;
use super::government::{BudgetNode, Government, SchemeRef};
use super::revenue::RevenueRecord;
use super::scheme::Allocate;

/// What a funds request did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FundsRequest {
    /// A scheme received the allocation.
    Allocated {
        /// Scheme that was credited.
        scheme: SchemeRef,
        /// Record appended to it.
        record: RevenueRecord,
    },
    /// The request landed on a node that cannot allocate. Nothing changed.
    Ignored {
        /// Node the request was routed to.
        node: BudgetNode,
    },
}

/// A named entity attached to one node of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    name: String,
    node: BudgetNode,
    #[serde(skip)]
    routing: RoutingPolicy,
}

impl Actor {
    /// Creates an actor using the default [`RoutingPolicy::AssociatedNode`].
    #[must_use]
    pub fn new(name: impl Into<String>, node: impl Into<BudgetNode>) -> Self {
        Self {
            name: name.into(),
            node: node.into(),
            routing: RoutingPolicy::default(),
        }
    }

    /// Replaces the routing policy.
    #[must_use]
    pub fn with_routing(mut self, routing: RoutingPolicy) -> Self {
        self.routing = routing;
        self
    }

    /// Actor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node this actor belongs to.
    #[must_use]
    pub const fn node(&self) -> BudgetNode {
        self.node
    }

    /// Requests `amount` from `source` for `scheme`.
    ///
    /// Under [`RoutingPolicy::AssociatedNode`] the `scheme` argument is not
    /// used: the request goes to the actor's own node, and only a scheme node
    /// can take it. A department- or government-bound actor therefore changes
    /// nothing and gets [`FundsRequest::Ignored`].
    pub fn request_funds(
        &self,
        government: &mut Government,
        scheme: SchemeRef,
        source: &str,
        amount: Decimal,
    ) -> Result<FundsRequest, BudgetError> {
        let target = match self.routing {
            RoutingPolicy::RequestedScheme => BudgetNode::Scheme { at: scheme },
            RoutingPolicy::AssociatedNode => self.node,
        };

        match target {
            BudgetNode::Scheme { at } => {
                let record = government.scheme_mut(at)?.allocate(source, amount).clone();
                Ok(FundsRequest::Allocated { scheme: at, record })
            }
            node => {
                government.balance_of(node)?;
                warn!(
                    actor = %self.name,
                    ?node,
                    requested = ?scheme,
                    source,
                    %amount,
                    "Funds request routed to a node that cannot allocate; nothing changed"
                );
                Ok(FundsRequest::Ignored { node })
            }
        }
    }

    /// Renders the actor followed by its node.
    pub fn describe(&self, government: &Government) -> Result<String, BudgetError> {
        Ok(format!(
            "{self}, Department: {}",
            government.render_node(self.node)?
        ))
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee: {}", self.name)
    }
}
