//! Role-gated ticket state machine
//!
//! Single source of truth for which status transitions are legal for which
//! role. Legality depends on the actor's role, not just the state pair:
//!
//! | from → to    | Admin | SupportAgent (assigned)            | User (creator)   |
//! |--------------|-------|------------------------------------|------------------|
//! | any → any    | allow | Open→InProgress, InProgress→Resolved | Resolved→Closed |
//! | Resolved → * | allow | `ResolvedImmutable`                | only →Closed     |
//! | Closed → *   | allow | `ClosedImmutable`                  | `ClosedImmutable`|
//!
//! Agents drive the pipeline forward one step at a time and cannot skip
//! stages or resurrect finished work; a user's only lifecycle power is
//! accepting resolution by closing; admins retain override authority.
//! A no-op request (from == to) is allowed for admins only - no cell grants
//! non-admins a "re-confirm".
//!
//! Relationship gating (agent must be assigned, user must be the creator)
//! is the authorization engine's job; this module judges the role/status
//! matrix alone.

use crate::outcome::Denial;
use helpdesk_common::{Role, TicketStatus};

/// Target statuses `role` may request from `from`.
///
/// Admin is handled by [`check`] directly (any → any); this table holds the
/// non-admin rows.
pub fn allowed(role: Role, from: TicketStatus) -> &'static [TicketStatus] {
    use TicketStatus::*;
    match (role, from) {
        (Role::SupportAgent, Open) => &[InProgress],
        (Role::SupportAgent, InProgress) => &[Resolved],
        (Role::User, Resolved) => &[Closed],
        _ => &[],
    }
}

/// Judge a transition request against the matrix.
pub fn check(role: Role, from: TicketStatus, to: TicketStatus) -> Result<(), Denial> {
    if role == Role::Admin {
        return Ok(());
    }
    if allowed(role, from).contains(&to) {
        return Ok(());
    }
    match from {
        TicketStatus::Closed => Err(Denial::ClosedImmutable),
        TicketStatus::Resolved if role == Role::SupportAgent => Err(Denial::ResolvedImmutable),
        _ => Err(Denial::IllegalTransition { from, to, role }),
    }
}
