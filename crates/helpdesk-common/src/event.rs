//! Ticket domain events
//!
//! Raised inside approved outcomes so the caller can fan out persistence,
//! notifications or audit without re-deriving what changed.

use crate::ids::{ActorId, CommentId, TicketId};
use crate::ticket::TicketStatus;
use serde::{Deserialize, Serialize};

/// Something that happened to a ticket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketEvent {
    /// Ticket created
    Created {
        /// Ticket id
        ticket_id: TicketId,
    },
    /// Agent attached to the ticket
    Assigned {
        /// Ticket id
        ticket_id: TicketId,
        /// Assigned agent
        agent_id: ActorId,
    },
    /// Lifecycle status moved
    StatusChanged {
        /// Ticket id
        ticket_id: TicketId,
        /// Previous status
        from: TicketStatus,
        /// New status
        to: TicketStatus,
    },
    /// Comment added
    Commented {
        /// Ticket id
        ticket_id: TicketId,
        /// New comment
        comment_id: CommentId,
    },
    /// Comment removed
    CommentDeleted {
        /// Ticket id
        ticket_id: TicketId,
        /// Removed comment
        comment_id: CommentId,
    },
    /// Ticket removed
    Deleted {
        /// Ticket id
        ticket_id: TicketId,
    },
}
