//! Lifecycle orchestrator
//!
//! The thin coordination layer the REST/storage callers talk to: it resolves
//! the right authorization predicate for a requested action, applies the
//! transition matrix for status changes, and turns the result into an
//! [`Outcome`]. Approved mutations are applied to a clone of the input
//! ticket - the caller's value is never touched - with `updated_at` stamped;
//! persisting the proposed state (and resolving write races) stays with the
//! storage collaborator.

use chrono::Utc;
use helpdesk_common::{
    Actor, Comment, CommentId, Role, Ticket, TicketEvent, TicketId, TicketPatch, TicketPriority,
    TicketStatus,
};
use tracing::{debug, info};

use crate::authz::AuthzEngine;
use crate::outcome::{Denial, Effect, Outcome};
use crate::transitions;

/// A requested ticket operation with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TicketAction {
    /// Read the ticket (and its comments)
    View,
    /// Add a comment. The id is allocated by the caller's storage layer.
    Comment {
        /// Pre-allocated comment id
        comment_id: CommentId,
        /// Comment text
        body: String,
    },
    /// Partial edit of subject/description/priority
    Edit(TicketPatch),
    /// Move the ticket to a new lifecycle status
    ChangeStatus(TicketStatus),
    /// Attach an agent. The full actor is passed so the target's role can
    /// be validated.
    Assign {
        /// Target agent
        agent: Actor,
    },
    /// Delete the ticket
    Delete,
    /// Delete one of the ticket's comments
    DeleteComment {
        /// The loaded target comment
        comment: Comment,
    },
}

/// Input for ticket creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketDraft {
    /// Subject line
    pub subject: String,
    /// Description
    pub description: String,
    /// Priority; defaults to [`TicketPriority::Medium`] when absent
    pub priority: Option<TicketPriority>,
    /// Requested initial assignee. Stripped for `User` creators; otherwise
    /// must hold the support-agent role.
    pub assignee: Option<Actor>,
}

/// Evaluates `(actor, ticket, action)` requests into approved mutations or
/// typed denials.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifecycleOrchestrator {
    authz: AuthzEngine,
}

impl LifecycleOrchestrator {
    /// Create an orchestrator
    pub fn new() -> Self {
        Self { authz: AuthzEngine::new() }
    }

    /// The underlying predicate engine, for callers that only need a check
    pub fn authz(&self) -> &AuthzEngine {
        &self.authz
    }

    /// Evaluate a requested action against an existing ticket.
    pub fn evaluate(&self, actor: &Actor, ticket: &Ticket, action: TicketAction) -> Outcome {
        match action {
            TicketAction::View => {
                if !self.authz.can_view(actor, ticket) {
                    return self.deny(
                        actor,
                        ticket,
                        Denial::PermissionDenied(
                            "only the creator, the assigned agent or an admin may view this ticket"
                                .into(),
                        ),
                    );
                }
                Outcome::approved(Effect::None, vec![])
            }

            TicketAction::Comment { comment_id, body } => {
                if !self.authz.can_comment(actor, ticket) {
                    return self.deny(
                        actor,
                        ticket,
                        Denial::PermissionDenied(
                            "only the creator, the assigned agent or an admin may comment on this ticket"
                                .into(),
                        ),
                    );
                }
                let mut next = ticket.clone();
                next.touch();
                let comment = Comment {
                    id: comment_id,
                    author: actor.id,
                    ticket: ticket.id,
                    body,
                    created_at: Utc::now(),
                };
                info!(ticket = %ticket.id, actor = %actor.id, "comment approved");
                Outcome::approved(
                    Effect::AddComment { ticket: next, comment },
                    vec![TicketEvent::Commented { ticket_id: ticket.id, comment_id }],
                )
            }

            TicketAction::Edit(patch) => {
                if !self.authz.can_edit(actor, ticket) {
                    return self.deny(
                        actor,
                        ticket,
                        Denial::PermissionDenied(
                            "only the creator, the assigned agent or an admin may edit this ticket"
                                .into(),
                        ),
                    );
                }
                let mut next = ticket.clone();
                next.apply_patch(&patch);
                info!(ticket = %ticket.id, actor = %actor.id, "edit approved");
                Outcome::approved(Effect::UpdateTicket(next), vec![])
            }

            TicketAction::ChangeStatus(requested) => self.change_status(actor, ticket, requested),

            TicketAction::Assign { agent } => {
                if !self.authz.can_assign(actor) {
                    return self.deny(
                        actor,
                        ticket,
                        Denial::PermissionDenied("only admins may assign tickets to agents".into()),
                    );
                }
                if agent.role != Role::SupportAgent {
                    return self.deny(actor, ticket, Denial::NotAnAgent(agent.id));
                }
                let before = ticket.status;
                let mut next = ticket.clone();
                next.assign(agent.id);
                let mut events =
                    vec![TicketEvent::Assigned { ticket_id: ticket.id, agent_id: agent.id }];
                if next.status != before {
                    events.push(TicketEvent::StatusChanged {
                        ticket_id: ticket.id,
                        from: before,
                        to: next.status,
                    });
                }
                info!(ticket = %ticket.id, agent = %agent.id, status = %next.status, "assignment approved");
                Outcome::approved(Effect::UpdateTicket(next), events)
            }

            TicketAction::Delete => {
                if !self.authz.can_delete_ticket(actor, ticket) {
                    return self.deny(
                        actor,
                        ticket,
                        Denial::PermissionDenied(
                            "only the creator or an admin may delete this ticket".into(),
                        ),
                    );
                }
                info!(ticket = %ticket.id, actor = %actor.id, "delete approved");
                Outcome::approved(
                    Effect::DeleteTicket(ticket.id),
                    vec![TicketEvent::Deleted { ticket_id: ticket.id }],
                )
            }

            TicketAction::DeleteComment { comment } => {
                if !self.authz.can_delete_comment(actor, &comment) {
                    return self.deny(
                        actor,
                        ticket,
                        Denial::PermissionDenied(
                            "only the comment author or an admin may delete this comment".into(),
                        ),
                    );
                }
                info!(ticket = %ticket.id, comment = %comment.id, "comment delete approved");
                Outcome::approved(
                    Effect::DeleteComment(comment.id),
                    vec![TicketEvent::CommentDeleted {
                        ticket_id: ticket.id,
                        comment_id: comment.id,
                    }],
                )
            }
        }
    }

    /// Build a brand-new ticket from a draft.
    ///
    /// Fresh tickets always start `Open` with `created_at == updated_at`;
    /// priority defaults to Medium. A requested initial assignee survives
    /// only for non-`User` creators and must hold the support-agent role.
    /// Initial assignment does not auto-advance the status - the
    /// Open→InProgress coupling belongs to the assignment operation on an
    /// existing ticket, not to creation.
    pub fn create_ticket(&self, ticket_id: TicketId, creator: &Actor, draft: TicketDraft) -> Outcome {
        // User-created tickets never carry an initial assignee
        let assignee = if creator.role == Role::User { None } else { draft.assignee };
        if let Some(agent) = &assignee {
            if agent.role != Role::SupportAgent {
                debug!(actor = %creator.id, target = %agent.id, "creation denied: target is not an agent");
                return Outcome::denied(Denial::NotAnAgent(agent.id));
            }
        }

        let now = Utc::now();
        let ticket = Ticket {
            id: ticket_id,
            subject: draft.subject,
            description: draft.description,
            status: TicketStatus::Open,
            priority: draft.priority.unwrap_or_default(),
            created_by: creator.id,
            assigned_agent: assignee.as_ref().map(|a| a.id),
            created_at: now,
            updated_at: now,
        };

        let mut events = vec![TicketEvent::Created { ticket_id }];
        if let Some(agent) = &assignee {
            events.push(TicketEvent::Assigned { ticket_id, agent_id: agent.id });
        }
        info!(ticket = %ticket_id, creator = %creator.id, "ticket created");
        Outcome::approved(Effect::CreateTicket(ticket), events)
    }

    fn change_status(&self, actor: &Actor, ticket: &Ticket, requested: TicketStatus) -> Outcome {
        let related = match actor.role {
            Role::Admin => true,
            Role::SupportAgent => ticket.is_assigned_agent(actor),
            Role::User => ticket.is_creator(actor),
        };
        if !related {
            let reason = match actor.role {
                Role::SupportAgent => "only the assigned agent may advance this ticket",
                _ => "only the ticket creator may change the status of this ticket",
            };
            return self.deny(actor, ticket, Denial::PermissionDenied(reason.into()));
        }
        if let Err(denial) = transitions::check(actor.role, ticket.status, requested) {
            return self.deny(actor, ticket, denial);
        }

        let from = ticket.status;
        let mut next = ticket.clone();
        next.set_status(requested);
        let events = if from == requested {
            // admin no-op: nothing actually changed
            vec![]
        } else {
            vec![TicketEvent::StatusChanged { ticket_id: ticket.id, from, to: requested }]
        };
        info!(ticket = %ticket.id, %from, to = %requested, "status change approved");
        Outcome::approved(Effect::UpdateTicket(next), events)
    }

    fn deny(&self, actor: &Actor, ticket: &Ticket, denial: Denial) -> Outcome {
        debug!(ticket = %ticket.id, actor = %actor.id, role = %actor.role, %denial, "request denied");
        Outcome::denied(denial)
    }
}
