//! Decision outcomes and denial reasons

use helpdesk_common::{ActorId, Comment, CommentId, Role, Ticket, TicketEvent, TicketId, TicketStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a request was declined.
///
/// All variants are ordinary recoverable outcomes for the caller to surface
/// as client-visible rejections, never system faults. Contract-breach errors
/// (unknown role values) live in `helpdesk_common::DomainError` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Denial {
    /// Actor lacks the right for the requested action
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// No legal transition between the two statuses for this role
    #[error("{role} may not move a ticket from {from} to {to}")]
    IllegalTransition {
        /// Current status
        from: TicketStatus,
        /// Requested status
        to: TicketStatus,
        /// Acting role
        role: Role,
    },

    /// Resolved tickets are immutable to agents
    #[error("resolved tickets cannot be modified")]
    ResolvedImmutable,

    /// Closed is terminal for non-admins
    #[error("closed tickets cannot be modified")]
    ClosedImmutable,

    /// Assignment target does not hold the support-agent role
    #[error("actor {0} is not a support agent")]
    NotAnAgent(ActorId),
}

/// The mutation an approved request asks the caller to persist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Nothing to persist (view-class actions)
    None,
    /// Store a brand-new ticket
    CreateTicket(Ticket),
    /// Replace the stored ticket with this new state
    UpdateTicket(Ticket),
    /// Store the comment and the touched ticket
    AddComment {
        /// Ticket with `updated_at` stamped
        ticket: Ticket,
        /// The new comment
        comment: Comment,
    },
    /// Remove the ticket (and, per storage rules, its comments)
    DeleteTicket(TicketId),
    /// Remove a single comment
    DeleteComment(CommentId),
}

/// Result of evaluating a requested action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Request approved; the caller applies `effect` and may fan out `events`
    Approved {
        /// Proposed mutation
        effect: Effect,
        /// What happened, for persistence/notification fan-out
        events: Vec<TicketEvent>,
    },
    /// Request declined
    Denied(Denial),
}

impl Outcome {
    pub(crate) fn approved(effect: Effect, events: Vec<TicketEvent>) -> Self {
        Outcome::Approved { effect, events }
    }

    pub(crate) fn denied(denial: Denial) -> Self {
        Outcome::Denied(denial)
    }

    /// Whether the request was approved
    pub fn is_approved(&self) -> bool {
        matches!(self, Outcome::Approved { .. })
    }

    /// The denial, if the request was declined
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Outcome::Denied(d) => Some(d),
            Outcome::Approved { .. } => None,
        }
    }

    /// The proposed new ticket state, if the approved effect carries one
    pub fn new_ticket(&self) -> Option<&Ticket> {
        match self {
            Outcome::Approved { effect: Effect::CreateTicket(t), .. }
            | Outcome::Approved { effect: Effect::UpdateTicket(t), .. }
            | Outcome::Approved { effect: Effect::AddComment { ticket: t, .. }, .. } => Some(t),
            _ => None,
        }
    }
}
