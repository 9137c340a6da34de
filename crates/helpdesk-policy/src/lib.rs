//! Helpdesk Policy - authorization and ticket-lifecycle engine
//!
//! Every mutating or viewing ticket operation funnels through this crate:
//! it decides whether a given actor (by role and relationship to the ticket)
//! may perform it, and which status transitions are legal from which state.
//!
//! # Architecture
//!
//! ```text
//! caller (REST / storage layers, not this crate)
//!        │  resolved Actor + loaded Ticket/Comment
//!        ▼
//! LifecycleOrchestrator::evaluate ──► Outcome::Approved { effect, events }
//!        │                        └─► Outcome::Denied(Denial)
//!        ├── AuthzEngine        (who may do what: pure predicates)
//!        └── transitions        (role-gated status matrix)
//! ```
//!
//! The engine is synchronous and side-effect-free: it consumes fully loaded
//! domain values, never touches storage or identity, and returns a proposed
//! new state for the caller to persist. That makes it thread-safe by
//! construction and trivially testable.

pub mod authz;
pub mod orchestrator;
pub mod outcome;
pub mod transitions;

pub use authz::{AuthzEngine, VisibilityScope};
pub use orchestrator::{LifecycleOrchestrator, TicketAction, TicketDraft};
pub use outcome::{Denial, Effect, Outcome};
