//! Authorization engine
//!
//! One decision method per action kind. All predicates are pure, total and
//! deterministic functions of their inputs - no storage, no clock, no
//! shared state - which is what makes them independently testable and safe
//! to call from any thread.
//!
//! View and comment rights are coupled by design: anyone who can see a
//! ticket can discuss it, and no one else can. Comment deletion is
//! deliberately narrower - only the comment's author or an admin; the
//! assigned agent and the ticket creator get nothing from authorship they
//! don't have.

use helpdesk_common::{Actor, Comment, Role, Ticket, TicketStatus};

use crate::transitions;

/// Which slice of the ticket collection an actor may list.
///
/// This scopes the *caller's query*, not a per-ticket right: an agent with
/// `Assigned` scope still has no [`AuthzEngine::can_view`] right on tickets
/// not assigned to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityScope {
    /// Tickets the actor created
    Own,
    /// Tickets assigned to the actor
    Assigned,
    /// Every ticket
    All,
}

/// Pure permission predicates over (actor, ticket, comment) tuples.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthzEngine;

impl AuthzEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }

    /// Admin, the assigned agent, or the creator.
    ///
    /// An agent not yet assigned to the ticket has no view right here;
    /// broader agent visibility is composed by the caller querying a
    /// different collection (see [`Self::visibility_scope`]), not by
    /// widening this predicate.
    pub fn can_view(&self, actor: &Actor, ticket: &Ticket) -> bool {
        match actor.role {
            Role::Admin => true,
            Role::SupportAgent => ticket.is_assigned_agent(actor),
            Role::User => ticket.is_creator(actor),
        }
    }

    /// Identical predicate to [`Self::can_view`]: see/discuss coupling.
    pub fn can_comment(&self, actor: &Actor, ticket: &Ticket) -> bool {
        self.can_view(actor, ticket)
    }

    /// Admin, the creator, or the assigned agent - covers
    /// subject/description/priority edits.
    pub fn can_edit(&self, actor: &Actor, ticket: &Ticket) -> bool {
        actor.is_admin()
            || ticket.is_creator(actor)
            || (actor.is_agent() && ticket.is_assigned_agent(actor))
    }

    /// Relationship gate plus the role-gated transition matrix.
    ///
    /// The only predicate that consumes a requested target value, because
    /// legality is transition-dependent, not just actor-dependent.
    pub fn can_change_status(&self, actor: &Actor, ticket: &Ticket, requested: TicketStatus) -> bool {
        let related = match actor.role {
            Role::Admin => true,
            Role::SupportAgent => ticket.is_assigned_agent(actor),
            Role::User => ticket.is_creator(actor),
        };
        related && transitions::check(actor.role, ticket.status, requested).is_ok()
    }

    /// Only admins assign tickets to agents.
    ///
    /// The target actor's role is validated by the assignment operation
    /// itself (`NotAnAgent`), since that checks the object being attached,
    /// not the requester.
    pub fn can_assign(&self, actor: &Actor) -> bool {
        actor.is_admin()
    }

    /// Admin or the creator.
    pub fn can_delete_ticket(&self, actor: &Actor, ticket: &Ticket) -> bool {
        actor.is_admin() || ticket.is_creator(actor)
    }

    /// Admin or the comment's own author - nobody else, whatever their
    /// relationship to the parent ticket.
    pub fn can_delete_comment(&self, actor: &Actor, comment: &Comment) -> bool {
        actor.is_admin() || comment.is_author(actor)
    }

    /// Query scope for ticket listings: users see their own tickets, agents
    /// the ones assigned to them, admins everything.
    pub fn visibility_scope(&self, actor: &Actor) -> VisibilityScope {
        match actor.role {
            Role::User => VisibilityScope::Own,
            Role::SupportAgent => VisibilityScope::Assigned,
            Role::Admin => VisibilityScope::All,
        }
    }

    /// Whether the actor may list the full ticket collection.
    pub fn can_list_all(&self, actor: &Actor) -> bool {
        actor.role != Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use helpdesk_common::{ActorId, CommentId, TicketId, TicketPriority};
    use proptest::prelude::*;

    fn ticket(created_by: u64, assigned: Option<u64>, status: TicketStatus) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: TicketId::new(1),
            subject: "printer on fire".into(),
            description: "again".into(),
            status,
            priority: TicketPriority::Medium,
            created_by: ActorId::new(created_by),
            assigned_agent: assigned.map(ActorId::new),
            created_at: now,
            updated_at: now,
        }
    }

    fn comment(author: u64) -> Comment {
        Comment {
            id: CommentId::new(5),
            author: ActorId::new(author),
            ticket: TicketId::new(1),
            body: "have you tried water".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_view_rights() {
        let authz = AuthzEngine::new();
        let t = ticket(1, Some(2), TicketStatus::InProgress);

        assert!(authz.can_view(&Actor::new(ActorId::new(1), Role::User), &t));
        assert!(authz.can_view(&Actor::new(ActorId::new(2), Role::SupportAgent), &t));
        assert!(authz.can_view(&Actor::new(ActorId::new(9), Role::Admin), &t));
        // Unassigned agent and unrelated user see nothing
        assert!(!authz.can_view(&Actor::new(ActorId::new(3), Role::SupportAgent), &t));
        assert!(!authz.can_view(&Actor::new(ActorId::new(4), Role::User), &t));
    }

    #[test]
    fn test_edit_rights() {
        let authz = AuthzEngine::new();
        let t = ticket(1, Some(2), TicketStatus::Open);

        assert!(authz.can_edit(&Actor::new(ActorId::new(1), Role::User), &t));
        assert!(authz.can_edit(&Actor::new(ActorId::new(2), Role::SupportAgent), &t));
        assert!(authz.can_edit(&Actor::new(ActorId::new(9), Role::Admin), &t));
        assert!(!authz.can_edit(&Actor::new(ActorId::new(3), Role::SupportAgent), &t));
    }

    #[test]
    fn test_assign_is_admin_only() {
        let authz = AuthzEngine::new();
        assert!(authz.can_assign(&Actor::new(ActorId::new(9), Role::Admin)));
        assert!(!authz.can_assign(&Actor::new(ActorId::new(2), Role::SupportAgent)));
        assert!(!authz.can_assign(&Actor::new(ActorId::new(1), Role::User)));
    }

    #[test]
    fn test_delete_ticket_rights() {
        let authz = AuthzEngine::new();
        let t = ticket(1, Some(2), TicketStatus::Open);
        assert!(authz.can_delete_ticket(&Actor::new(ActorId::new(1), Role::User), &t));
        assert!(authz.can_delete_ticket(&Actor::new(ActorId::new(9), Role::Admin), &t));
        // The assigned agent does not get delete
        assert!(!authz.can_delete_ticket(&Actor::new(ActorId::new(2), Role::SupportAgent), &t));
    }

    // Regression: comment deletion never extends to the assigned agent or the
    // ticket creator; only the author or an admin.
    #[test]
    fn test_comment_delete_asymmetry() {
        let authz = AuthzEngine::new();
        let c = comment(1);

        let author = Actor::new(ActorId::new(1), Role::User);
        let admin = Actor::new(ActorId::new(9), Role::Admin);
        let assigned_agent = Actor::new(ActorId::new(2), Role::SupportAgent);
        let ticket_creator = Actor::new(ActorId::new(7), Role::User);

        assert!(authz.can_delete_comment(&author, &c));
        assert!(authz.can_delete_comment(&admin, &c));
        assert!(!authz.can_delete_comment(&assigned_agent, &c));
        assert!(!authz.can_delete_comment(&ticket_creator, &c));
    }

    #[test]
    fn test_visibility_scope() {
        let authz = AuthzEngine::new();
        assert_eq!(
            authz.visibility_scope(&Actor::new(ActorId::new(1), Role::User)),
            VisibilityScope::Own
        );
        assert_eq!(
            authz.visibility_scope(&Actor::new(ActorId::new(2), Role::SupportAgent)),
            VisibilityScope::Assigned
        );
        assert_eq!(
            authz.visibility_scope(&Actor::new(ActorId::new(9), Role::Admin)),
            VisibilityScope::All
        );
        assert!(!authz.can_list_all(&Actor::new(ActorId::new(1), Role::User)));
        assert!(authz.can_list_all(&Actor::new(ActorId::new(2), Role::SupportAgent)));
    }

    // can_change_status = relationship gate AND transition matrix
    #[test]
    fn test_change_status_requires_relationship() {
        let authz = AuthzEngine::new();
        let t = ticket(1, Some(2), TicketStatus::InProgress);

        let assigned = Actor::new(ActorId::new(2), Role::SupportAgent);
        let other_agent = Actor::new(ActorId::new(3), Role::SupportAgent);
        assert!(authz.can_change_status(&assigned, &t, TicketStatus::Resolved));
        assert!(!authz.can_change_status(&other_agent, &t, TicketStatus::Resolved));

        let t = ticket(1, Some(2), TicketStatus::Resolved);
        let creator = Actor::new(ActorId::new(1), Role::User);
        let stranger = Actor::new(ActorId::new(4), Role::User);
        assert!(authz.can_change_status(&creator, &t, TicketStatus::Closed));
        assert!(!authz.can_change_status(&stranger, &t, TicketStatus::Closed));
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_status() -> impl Strategy<Value = TicketStatus> {
        prop::sample::select(TicketStatus::ALL.to_vec())
    }

    proptest! {
        // Coupling invariant: view and comment rights agree everywhere.
        #[test]
        fn prop_view_comment_coupled(
            role in any_role(),
            actor_id in 0u64..5,
            creator in 0u64..5,
            assignee in prop::option::of(0u64..5),
            status in any_status(),
        ) {
            let authz = AuthzEngine::new();
            let actor = Actor::new(ActorId::new(actor_id), role);
            let t = ticket(creator, assignee, status);
            prop_assert_eq!(authz.can_view(&actor, &t), authz.can_comment(&actor, &t));
        }

        // Closed is absorbing: only admins get a transition out.
        #[test]
        fn prop_closed_absorbing(
            role in any_role(),
            actor_id in 0u64..5,
            creator in 0u64..5,
            assignee in prop::option::of(0u64..5),
            to in any_status(),
        ) {
            let authz = AuthzEngine::new();
            let actor = Actor::new(ActorId::new(actor_id), role);
            let t = ticket(creator, assignee, TicketStatus::Closed);
            let granted = authz.can_change_status(&actor, &t, to);
            prop_assert_eq!(granted, role == Role::Admin);
        }
    }
}
