//! Helpdesk Common - Shared domain types for the ticket policy core
//!
//! This crate provides the vocabulary the policy engine speaks:
//! - Id newtypes (tickets, actors, comments)
//! - Roles and ticket lifecycle statuses
//! - The `Actor`/`Ticket`/`Comment` values handed in by the storage layer
//! - Domain events raised on approved mutations
//! - Error handling
//!
//! Nothing in here performs I/O. Entities are plain values: they are loaded
//! by an external storage collaborator, evaluated by `helpdesk-policy`, and
//! the proposed new values are handed back for persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actor;
pub mod comment;
pub mod error;
pub mod event;
pub mod ids;
pub mod ticket;

pub use actor::{Actor, Role};
pub use comment::Comment;
pub use error::{DomainError, DomainResult};
pub use event::TicketEvent;
pub use ids::{ActorId, CommentId, TicketId};
pub use ticket::{Ticket, TicketPatch, TicketPriority, TicketStatus};
